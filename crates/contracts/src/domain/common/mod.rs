pub mod offer;
pub mod person_ref;

pub use offer::Offer;
pub use person_ref::PersonRef;
