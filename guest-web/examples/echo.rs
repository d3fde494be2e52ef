//! An example Function that echoes the request body back in the response.
//!
//! The body may be empty, text, or binary - it is returned byte-for-byte,
//! with a 200 status and no headers. The handler reads nothing else from
//! the request, keeps no state, and performs no I/O, so concurrent
//! invocations never interact.
//!
//! Invoke this Function with any body and it will echo it back unchanged.

use kiln_functions_bytes::Body;
use kiln_functions_guest_web::{FunctionResult, Response, invoke};

invoke!(echo);
fn echo(body: Body) -> FunctionResult<Response> {
    Ok(Response::new().with_body(body)?)
}
