pub mod a001_auction;
pub mod a002_tender;
pub mod a003_category;
pub mod a004_ad;
pub mod a005_direct_sale;
pub mod a006_terms;
pub mod common;
