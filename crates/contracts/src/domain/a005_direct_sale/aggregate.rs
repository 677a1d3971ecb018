use serde::{Deserialize, Serialize};

use crate::domain::common::PersonRef;
use crate::enums::listing_status::ListingStatus;

/// Vente directe (fixed-price listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectSale {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub seller: Option<PersonRef>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub status: ListingStatus,
    pub created_at: Option<String>,
}

impl DirectSale {
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
