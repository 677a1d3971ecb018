pub mod category_type;
pub mod duration_unit;
pub mod listing_status;
pub mod user_kind;
