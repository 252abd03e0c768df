//! FashionSense Common Library
//!
//! Types and pure logic shared by the web client, kept free of any DOM
//! dependency so they can be unit-tested natively.

pub mod error;
pub mod files;
pub mod suggestions;
pub mod types;

pub use error::{Error, Result};
pub use files::{is_allowed_image, is_heic, screen_batch, upload_file_name};
pub use suggestions::{group_by_category, price_range, shop_label, CategoryGroup};
pub use types::{AnalysisResult, ApiErrorBody, RoastRequest, RoastResponse, Suggestion};
