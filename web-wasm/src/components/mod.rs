//! UI components

pub mod action_bar;
pub mod error_banner;
pub mod header;
pub mod results_section;
pub mod settings_modal;
pub mod thumbnail_strip;
pub mod upload_zone;
