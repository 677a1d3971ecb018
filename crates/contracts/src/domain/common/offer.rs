use serde::{Deserialize, Serialize};

use super::PersonRef;

/// Offer on an auction or bid on a tender; both sub-resources share the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<PersonRef>,
    pub amount: f64,
    pub created_at: Option<String>,
}
