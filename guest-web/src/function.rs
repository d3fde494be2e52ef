use kiln_functions_bytes::encoding::Extract;

use crate::{Context, IntoResponse, Request, Response};

/// The calling convention between the host and a web function.
///
/// Exactly one implementation is registered per function artifact; the host
/// invokes it once for each inbound request routed to the function. Every
/// well-formed request produces a response.
///
/// Invocations are independent: the host may run many at once, and nothing
/// in this crate shares mutable state between them. Implementations are
/// normally generated by the [crate::invoke!] macro rather than written by
/// hand.
pub trait Function {
    /// Handle a single request. The `context` carries opaque invocation
    /// metadata; handlers are free to ignore it.
    fn invoke(request: Request, context: Context) -> Response;
}

/// Create a handler that accepts a request payload and returns a response.
///
/// You can accept the raw payload ([kiln_functions_bytes::Body] or `Vec<u8>`) as input,
/// or any type for which [kiln_functions_bytes::encoding::Extract] is implemented.
/// If you choose to use an extracted type, this will automatically return a 400 error containing
/// the error details if the input bytes cannot be extracted into the specified input type.
/// If you would rather handle extraction errors yourself, you should accept the raw payload
/// and perform extraction yourself.
///
/// Your implementation function must return a value which implements the [IntoResponse] trait.
/// Implementations of this trait are provided for
/// - [crate::Response]: A basic response representation and builder
/// - `FunctionResult<impl IntoResponse>`: Allows you to return results where errors will be
///   converted to 500 responses.
/// - [()]: Results in an empty 204.
/// - [String] and [&str]: Results in a 200 with the string body.
/// - `Vec<u8>`, `&[u8]` and [kiln_functions_bytes::Body]: Results in a 200 with the binary body.
/// - [kiln_functions_bytes::encoding::Json]: Results in a 200 with the Json body, or a 500 if the Json could not be serialized.
///
/// You may also implement [IntoResponse] for your own types.
///
/// **Raw Payload Input:**
/// ```rust
/// use kiln_functions_bytes::Body;
/// use kiln_functions_guest_web::invoke;
///
/// invoke!(ping);
/// fn ping(payload: Body) -> &'static str {
///     "pong"
/// }
/// ```
///
/// **Typed JSON Input:**
/// ```rust
/// use kiln_functions_bytes::encoding::Json;
/// use kiln_functions_guest_web::invoke;
///
/// #[derive(serde::Deserialize)]
/// struct Request {
///     name: String,
/// }
/// #[derive(serde::Serialize)]
/// struct Response {
///     message: String,
/// }
///
/// invoke!(greet);
/// fn greet(Json(request): Json<Request>) -> Json<Response> {
///     Json(Response { message: format!("Hello, {}!", request.name) })
/// }
/// ```
#[macro_export]
macro_rules! invoke {
    ($handler: ident) => {
        struct WebFunction;

        #[automatically_derived]
        impl kiln_functions_guest_web::Function for WebFunction {
            fn invoke(
                request: kiln_functions_guest_web::Request,
                context: kiln_functions_guest_web::Context,
            ) -> kiln_functions_guest_web::Response {
                kiln_functions_guest_web::invoke_template(request, context, $handler)
            }
        }

        /// Entry symbol the host resolves when it loads the function library.
        #[unsafe(no_mangle)]
        pub extern "Rust" fn kiln_guest_invoke(
            request: kiln_functions_guest_web::Request,
            context: kiln_functions_guest_web::Context,
        ) -> kiln_functions_guest_web::Response {
            <WebFunction as kiln_functions_guest_web::Function>::invoke(request, context)
        }
    };
}

/// An internal helper for the invoke! macro.
#[doc(hidden)]
pub fn invoke_template<TExtract, TResponse>(
    request: Request,
    _context: Context,
    handler: fn(request: TExtract) -> TResponse,
) -> Response
where
    TExtract: Extract,
    TResponse: IntoResponse,
{
    let payload = request.into_body();
    let input = match TExtract::extract(payload) {
        Ok(input) => input,
        Err(error) => {
            return Response {
                status: 400,
                headers: vec![],
                body: format!("Failed to parse request body: {error}").into(),
            };
        }
    };
    handler(input).response()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use kiln_functions_bytes::Body;
    use kiln_functions_bytes::encoding::Json;

    use super::*;
    use crate::{FunctionError, FunctionResult};

    #[derive(serde::Deserialize)]
    struct Named {
        name: String,
    }

    fn request(body: impl Into<Body>) -> Request {
        Request::new(HashMap::new(), body)
    }

    #[test]
    fn converts_the_handler_output_into_a_response() {
        fn pong(_payload: Body) -> &'static str {
            "pong"
        }
        let response = invoke_template(request("anything"), Context::default(), pong);
        assert_eq!(response.status(), 200);
        assert_eq!(response.body().as_slice(), b"pong");
    }

    #[test]
    fn returns_400_when_the_body_cannot_be_extracted() {
        fn greet(Json(named): Json<Named>) -> String {
            format!("Hello, {}!", named.name)
        }
        let response = invoke_template(request("not json"), Context::default(), greet);
        assert_eq!(response.status(), 400);
        assert!(response.headers().is_empty());
        let body = String::from_utf8(response.body().clone().into_bytes()).expect("utf8");
        assert!(body.starts_with("Failed to parse request body:"));
    }

    #[test]
    fn extraction_succeeds_before_the_handler_runs() {
        fn greet(Json(named): Json<Named>) -> String {
            format!("Hello, {}!", named.name)
        }
        let response = invoke_template(request(r#"{"name":"kiln"}"#), Context::default(), greet);
        assert_eq!(response.status(), 200);
        assert_eq!(response.body().as_slice(), b"Hello, kiln!");
    }

    #[test]
    fn handler_errors_become_500_responses() {
        fn boom(_payload: Body) -> FunctionResult<Response> {
            Err(FunctionError::message("boom"))
        }
        let response = invoke_template(request(""), Context::default(), boom);
        assert_eq!(response.status(), 500);
        assert_eq!(response.body().as_slice(), b"boom");
    }
}
