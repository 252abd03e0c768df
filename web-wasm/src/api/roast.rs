//! JSON follow-up request to the roast endpoint

use fashionsense_common::{Error, RoastRequest, RoastResponse};
use wasm_bindgen::JsValue;
use web_sys::{Request, RequestInit, RequestMode};

/// POST the prior analysis back for a roast and return the roast text.
pub async fn roast(body: &RoastRequest) -> Result<String, Error> {
    let payload = serde_json::to_string(body).map_err(|_| Error::api(None))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(super::ROAST_ENDPOINT, &opts)
        .map_err(|_| Error::api(None))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| Error::api(None))?;

    let (response, json) = super::send(request).await?;
    if !response.ok() {
        return Err(super::server_error(json));
    }

    let json = json.ok_or_else(|| Error::api(None))?;
    let parsed: RoastResponse = serde_wasm_bindgen::from_value(json).map_err(|err| {
        gloo::console::warn!(format!("unexpected roast response shape: {err}"));
        Error::api(None)
    })?;
    Ok(parsed.roast)
}
