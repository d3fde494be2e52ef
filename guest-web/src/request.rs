use std::collections::HashMap;

use kiln_functions_bytes::Body;

/// An inbound request, as delivered by the host.
///
/// The host terminates HTTP, collects the request headers and body, and
/// hands your function a `Request`. It lives for a single invocation and is
/// released once the response is written.
///
/// Functions normally receive a `Request` from the host; constructing one
/// directly is useful when exercising a function in tests.
#[derive(Debug)]
pub struct Request {
    headers: HashMap<String, String>,
    body: Body,
}

impl Request {
    /// Assembles a request from a header mapping and a payload.
    pub fn new(headers: HashMap<String, String>, body: impl Into<Body>) -> Self {
        Self {
            headers,
            body: body.into(),
        }
    }

    /// The request payload. An absent body arrives as an empty one.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Consumes the request, keeping only the payload.
    pub fn into_body(self) -> Body {
        self.body
    }

    /// The request headers. The host delivers header names lowercased.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Looks up a single header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
