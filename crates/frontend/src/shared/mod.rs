pub mod api_error;
pub mod api_utils;
pub mod bulk;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod expandable;
pub mod http;
pub mod icons;
pub mod labels;
pub mod list_state;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod request_generation;
pub mod selection;
pub mod status_toggle;
pub mod toast;
