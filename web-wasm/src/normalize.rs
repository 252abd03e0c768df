//! Client-side image downscaling before upload
//!
//! Non-HEIC images are decoded in the browser, scaled so their longer edge
//! fits [`MAX_EDGE_PX`], and re-encoded as JPEG. Anything that fails to
//! decode or re-encode is uploaded as-is; HEIC/HEIF conversion is the
//! backend's job.

use fashionsense_common::files;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement, Url};

/// Longest edge of a normalized upload, in pixels.
pub const MAX_EDGE_PX: u32 = 1024;

/// JPEG encoder quality for normalized uploads.
pub const JPEG_QUALITY: f64 = 0.85;

/// One part of the multipart request body.
pub struct UploadPart {
    pub blob: Blob,
    pub file_name: String,
}

/// Produce the blob and part name to upload for one selected file.
/// Never fails: on a conversion error the original file goes up unchanged.
pub async fn prepare_upload(file: &File) -> UploadPart {
    let name = file.name();
    if files::is_heic(&name) {
        return UploadPart {
            blob: Blob::from(file.clone()),
            file_name: name,
        };
    }
    match downscale_to_jpeg(file).await {
        Ok(blob) => UploadPart {
            blob,
            file_name: files::upload_file_name(&name),
        },
        Err(err) => {
            gloo::console::warn!(format!(
                "client-side resize failed for {name}, uploading original: {err:?}"
            ));
            UploadPart {
                blob: Blob::from(file.clone()),
                file_name: name,
            }
        }
    }
}

async fn downscale_to_jpeg(file: &File) -> Result<Blob, JsValue> {
    let object_url = Url::create_object_url_with_blob(file)?;
    let result = decode_and_reencode(&object_url).await;
    let _ = Url::revoke_object_url(&object_url);
    result
}

async fn decode_and_reencode(url: &str) -> Result<Blob, JsValue> {
    let image = load_image(url).await?;
    let (width, height) = (image.natural_width(), image.natural_height());
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("image decoded to zero size"));
    }

    let longer = width.max(height) as f64;
    let scale = (MAX_EDGE_PX as f64 / longer).min(1.0);
    let target_w = (width as f64 * scale).round().max(1.0);
    let target_h = (height as f64 * scale).round().max(1.0);

    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(target_w as u32);
    canvas.set_height(target_h as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
        .dyn_into()?;
    context.draw_image_with_html_image_element_and_dw_and_dh(
        &image, 0.0, 0.0, target_w, target_h,
    )?;

    encode_jpeg(&canvas).await
}

/// Await an `<img>` decode of the given URL via its load/error handlers.
async fn load_image(url: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let onerror = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(false);
            }
        }) as Box<dyn FnMut(_)>)
    };
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(url);

    match rx.await {
        Ok(true) => Ok(image),
        _ => Err(JsValue::from_str("image decode failed")),
    }
}

/// Encode the canvas through `toBlob`, bridging its callback to a future.
async fn encode_jpeg(canvas: &HtmlCanvasElement) -> Result<Blob, JsValue> {
    let (tx, rx) = oneshot::channel::<Option<Blob>>();
    let callback = Closure::once(move |blob: Option<Blob>| {
        let _ = tx.send(blob);
    });
    canvas.to_blob_with_type_and_encoder_options(
        callback.as_ref().unchecked_ref(),
        "image/jpeg",
        &JsValue::from_f64(JPEG_QUALITY),
    )?;

    match rx.await {
        Ok(Some(blob)) => Ok(blob),
        Ok(None) => Err(JsValue::from_str("canvas returned no JPEG data")),
        Err(_) => Err(JsValue::from_str("canvas encode callback was dropped")),
    }
}
