use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use kiln_functions_bytes::Body;
use kiln_functions_bytes::encoding::Encode;

use crate::IntoResponse;

/// A FunctionError represents an error result produced by a function execution.
/// Functionally, it is also just an HTTP response - however, this allows for writing
/// functions with a return signature of `FunctionResult` if you are okay with all errors
/// being converted to 500s and returned in the body.
#[derive(Debug)]
pub struct FunctionError {
    source: Option<Box<dyn Error>>,
    response: Response,
}

impl FunctionError {
    /// Creates an error from a plain message. The message becomes the body
    /// of the 500 response.
    pub fn message(message: impl Into<String>) -> Self {
        let message = message.into();
        let response = Response {
            status: 500,
            headers: vec![],
            body: message.into(),
        };
        Self {
            source: None,
            response,
        }
    }
}

impl<E: Error + 'static> From<E> for FunctionError {
    fn from(e: E) -> Self {
        let body = format!("An error occurred during function invocation: {e}");
        Self {
            source: Some(Box::new(e)),
            response: Response {
                status: 500,
                headers: vec![],
                body: body.into(),
            },
        }
    }
}

impl Display for FunctionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FunctionError(Source: {:?})", self.source)
    }
}

/// A Result type for implementing functions. Allows you to use `?` within your function body
/// to return a 500 with the error details.
pub type FunctionResult<T> = Result<T, FunctionError>;

impl<R> IntoResponse for Result<R, FunctionError>
where
    R: IntoResponse,
{
    fn response(self) -> Response {
        match self {
            Ok(r) => r.response(),
            Err(e) => e.response,
        }
    }
}

/// This represents a response from a web function.
/// When constructed, it's a 200 response with no headers or body.
/// You can set the status, headers, and body via [Response::with_status], [Response::with_headers],
/// and [Response::with_body] respectfully.
///
/// A response is constructed fresh on every invocation; nothing about it is
/// retained once the host has written it back to the caller.
#[derive(Debug)]
pub struct Response {
    pub(crate) status: u16,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Body,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            headers: vec![],
            body: Body::default(),
        }
    }
}

impl Response {
    /// Creates a new default response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Adds a header to the response.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Overrides the collection of headers for the response.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the response body. If encoding the body fails, returns an error.
    pub fn with_body<E: Encode>(mut self, body: E) -> Result<Self, E::Error> {
        let body = body.try_serialize()?;
        self.body = body;
        Ok(self)
    }

    /// The response status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response headers, in the order they were added.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The response payload.
    pub fn body(&self) -> &Body {
        &self.body
    }
}

impl IntoResponse for Response {
    fn response(self) -> Response {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_an_empty_200() {
        let response = Response::new();
        assert_eq!(response.status(), 200);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn builder_sets_status_headers_and_body() {
        let response = Response::new()
            .with_status(201)
            .header("location", "/things/1")
            .with_body("created")
            .expect("string encoding is infallible");
        assert_eq!(response.status(), 201);
        assert_eq!(
            response.headers(),
            &[("location".to_string(), "/things/1".to_string())]
        );
        assert_eq!(response.body().as_slice(), b"created");
    }

    #[test]
    fn with_headers_replaces_previous_headers() {
        let response = Response::new()
            .header("x-one", "1")
            .with_headers(vec![("x-two".to_string(), "2".to_string())]);
        assert_eq!(response.headers(), &[("x-two".to_string(), "2".to_string())]);
    }

    #[test]
    fn error_message_becomes_a_500_response() {
        let result: FunctionResult<Response> = Err(FunctionError::message("out of teapots"));
        let response = result.response();
        assert_eq!(response.status(), 500);
        assert_eq!(response.body().as_slice(), b"out of teapots");
    }

    #[test]
    fn error_sources_are_reported_in_the_body() {
        fn fails() -> FunctionResult<Response> {
            let parsed: serde_json::Value = serde_json::from_str("not json")?;
            Ok(Response::new().with_body(parsed)?)
        }
        let response = fails().response();
        assert_eq!(response.status(), 500);
        let body = String::from_utf8(response.body().clone().into_bytes()).expect("utf8");
        assert!(body.starts_with("An error occurred during function invocation:"));
    }
}
