pub mod api;
pub mod tree;
pub mod ui;
