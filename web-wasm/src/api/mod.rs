//! Backend API clients
//!
//! Two endpoints: multipart upload to `/analyze` and a JSON follow-up to
//! `/roast`. Transport failures become [`Error::Network`]; non-2xx
//! responses carry the server's `error` message when it provides one.

mod analyze;
mod roast;

pub use analyze::analyze;
pub use roast::roast;

use fashionsense_common::{ApiErrorBody, Error};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

pub const ANALYZE_ENDPOINT: &str = "/analyze";
pub const ROAST_ENDPOINT: &str = "/roast";

/// Send a prepared request and decode the JSON body if there is one.
/// A body that fails to parse is treated as absent, not fatal.
async fn send(request: Request) -> Result<(Response, Option<wasm_bindgen::JsValue>), Error> {
    let window = web_sys::window().unwrap();
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| Error::Network)?;
    let response: Response = response_value.dyn_into().map_err(|_| Error::Network)?;

    let json = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.ok(),
        Err(_) => None,
    };
    Ok((response, json))
}

/// Error for a non-2xx response: the body's `error` string when present,
/// otherwise the generic failure message.
fn server_error(json: Option<wasm_bindgen::JsValue>) -> Error {
    let message = json
        .and_then(|value| serde_wasm_bindgen::from_value::<ApiErrorBody>(value).ok())
        .map(|body| body.error);
    Error::api(message)
}
