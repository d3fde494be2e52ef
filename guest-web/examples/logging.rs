//! An example Function that writes to the function log stream.
//!
//! Log lines go to standard error, where the host collects them. Follow the
//! stream with `kiln function logs $function`.

use kiln_functions_bytes::encoding::Json;
use kiln_functions_guest_web::{FunctionResult, invoke};
use kiln_functions_log::LogMode;
use log::LevelFilter;

#[derive(serde::Deserialize, Debug)]
struct Request {
    name: String,
}

#[derive(serde::Serialize)]
struct Response {
    message: String,
}

invoke!(greet);
fn greet(Json(request): Json<Request>) -> FunctionResult<Json<Response>> {
    kiln_functions_log::configure_logging(LevelFilter::Info, LogMode::Stderr)?;

    log::info!("Received request: {request:?}");

    Ok(Json(Response {
        message: format!("Hello, {}!", request.name),
    }))
}
