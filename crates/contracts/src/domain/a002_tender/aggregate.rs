use serde::{Deserialize, Serialize};

use crate::domain::common::PersonRef;
use crate::enums::listing_status::ListingStatus;

/// Appel d'offres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub owner: Option<PersonRef>,
    pub budget: Option<f64>,
    #[serde(default)]
    pub status: ListingStatus,
    pub deadline: Option<String>,
    pub created_at: Option<String>,
}
