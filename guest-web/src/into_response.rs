use kiln_functions_bytes::Body;
use kiln_functions_bytes::encoding::{Encode, Json};
use serde::Serialize;

use crate::Response;

macro_rules! content_type {
    ($content_type:expr) => {
        vec![("content-type".to_string(), $content_type.to_string())]
    };
}

/// Values returned by a function implemented with the [crate::invoke!] macro must implement this trait.
pub trait IntoResponse {
    /// Converts the value into the response the host writes back to the caller.
    fn response(self) -> Response;
}

impl IntoResponse for Vec<u8> {
    fn response(self) -> Response {
        Response {
            status: 200,
            headers: content_type!("application/octet-stream"),
            body: self.into(),
        }
    }
}

impl IntoResponse for &[u8] {
    fn response(self) -> Response {
        Response {
            status: 200,
            headers: content_type!("application/octet-stream"),
            body: self.into(),
        }
    }
}

impl IntoResponse for String {
    fn response(self) -> Response {
        Response {
            status: 200,
            headers: content_type!("text/plain; charset=utf-8"),
            body: self.into(),
        }
    }
}

impl IntoResponse for &str {
    fn response(self) -> Response {
        Response {
            status: 200,
            headers: content_type!("text/plain; charset=utf-8"),
            body: self.into(),
        }
    }
}

impl IntoResponse for () {
    fn response(self) -> Response {
        Response {
            status: 204,
            headers: vec![],
            body: Body::default(),
        }
    }
}

impl IntoResponse for Option<Vec<u8>> {
    fn response(self) -> Response {
        Response {
            status: 200,
            headers: content_type!("application/octet-stream"),
            body: self.unwrap_or_default().into(),
        }
    }
}

impl IntoResponse for Option<String> {
    fn response(self) -> Response {
        Response {
            status: 200,
            headers: content_type!("text/plain; charset=utf-8"),
            body: self.unwrap_or_default().into(),
        }
    }
}

impl IntoResponse for serde_json::Value {
    fn response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => Response {
                status: 200,
                headers: content_type!("application/json; charset=utf-8"),
                body: body.into(),
            },
            Err(e) => Response {
                status: 500,
                headers: content_type!("text/plain; charset=utf-8"),
                body: format!("Failed to encode response: {e}").into(),
            },
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn response(self) -> Response {
        match self.try_serialize() {
            Ok(body) => Response {
                status: 200,
                headers: content_type!("application/json; charset=utf-8"),
                body,
            },
            Err(e) => Response {
                status: 500,
                headers: content_type!("text/plain; charset=utf-8"),
                body: format!("Failed to encode response: {e}").into(),
            },
        }
    }
}

impl IntoResponse for Body {
    fn response(self) -> Response {
        Response {
            status: 200,
            headers: content_type!("application/octet-stream"),
            body: self,
        }
    }
}
