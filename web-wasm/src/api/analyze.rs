//! Multipart upload to the analyze endpoint

use crate::normalize::UploadPart;
use fashionsense_common::{AnalysisResult, Error};
use web_sys::{FormData, Request, RequestInit, RequestMode};

/// POST the normalized batch (plus the API key, if set) and decode the
/// analysis result. The browser supplies the multipart boundary itself, so
/// no Content-Type header is set here.
pub async fn analyze(parts: &[UploadPart], api_key: &str) -> Result<AnalysisResult, Error> {
    let form = FormData::new().map_err(|_| Error::api(None))?;
    for part in parts {
        form.append_with_blob_and_filename("images", &part.blob, &part.file_name)
            .map_err(|_| Error::api(None))?;
    }
    if !api_key.is_empty() {
        form.append_with_str("api_key", api_key)
            .map_err(|_| Error::api(None))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(super::ANALYZE_ENDPOINT, &opts)
        .map_err(|_| Error::api(None))?;

    let (response, json) = super::send(request).await?;
    if !response.ok() {
        return Err(super::server_error(json));
    }

    let json = json.ok_or_else(|| Error::api(None))?;
    serde_wasm_bindgen::from_value(json).map_err(|err| {
        gloo::console::warn!(format!("unexpected analyze response shape: {err}"));
        Error::api(None)
    })
}
