pub mod bulk;
pub mod envelope;
