use std::env;

static NOT_FOUND: &str = "<not found>";

/// Invocation metadata passed alongside each request.
///
/// The calling convention delivers a `Context` with every request. It is
/// opaque to handlers - nothing in it changes how a request is processed -
/// but it identifies the invocation when you want to correlate logs with
/// callers.
///
/// The host populates the backing `__FUNCTION_NAME` and `__INVOCATION_ID`
/// environment variables before the function is invoked.
#[derive(Debug, Clone, Default)]
pub struct Context {
    function_name: String,
    invocation_id: String,
}

impl Context {
    /// Reads the invocation metadata the host placed in the environment.
    pub fn from_env() -> Self {
        let function_name = env::var("__FUNCTION_NAME").unwrap_or(NOT_FOUND.to_string());
        let invocation_id = env::var("__INVOCATION_ID").unwrap_or(NOT_FOUND.to_string());
        Self {
            function_name,
            invocation_id,
        }
    }

    /// The name of the function being invoked.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// The ID of the currently executing invocation.
    pub fn invocation_id(&self) -> &str {
        &self.invocation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_environment_falls_back_to_placeholders() {
        let context = Context::from_env();
        assert_eq!(context.function_name(), "<not found>");
        assert_eq!(context.invocation_id(), "<not found>");
    }
}
