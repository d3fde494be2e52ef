//! Guest bindings for Kiln Web Functions.
//!
//! A web function is a small handler the Kiln host invokes once per inbound
//! HTTP request routed to it. This crate provides the request and response
//! types, the [invoke!] registration macro, and the conversions that turn
//! handler return values into responses.
//!
//! You are likely to be interested in the sibling crates:
//! * [`kiln-functions-bytes`](https://crates.io/crates/kiln-functions-bytes): Payload types and encodings.
//! * [`kiln-functions-log`](https://crates.io/crates/kiln-functions-log): Standard `log` adapter.

mod context;
mod function;
mod into_response;
mod request;
mod response;

pub use context::Context;
pub use function::Function;
pub use function::invoke_template;
pub use into_response::IntoResponse;
pub use request::Request;
pub use response::FunctionError;
pub use response::FunctionResult;
pub use response::Response;
