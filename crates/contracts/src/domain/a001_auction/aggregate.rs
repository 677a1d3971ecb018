use serde::{Deserialize, Serialize};

use crate::domain::common::PersonRef;
use crate::enums::listing_status::ListingStatus;

/// Аукцион
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub seller: Option<PersonRef>,
    #[serde(default)]
    pub starting_price: f64,
    pub current_price: Option<f64>,
    #[serde(default)]
    pub status: ListingStatus,
    pub end_at: Option<String>,
    pub created_at: Option<String>,
}

impl Auction {
    /// Current price, falling back to the starting price when no offer was made.
    pub fn effective_price(&self) -> f64 {
        self.current_price.unwrap_or(self.starting_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_price() {
        let a: Auction = serde_json::from_str(
            r#"{"_id":"1","title":"Tracteur","startingPrice":1000,"status":"open",
                "seller":{"firstName":"Ali","lastName":"B"}}"#,
        )
        .unwrap();
        assert_eq!(a.effective_price(), 1000.0);
        assert_eq!(a.status, ListingStatus::Open);
        assert_eq!(a.seller.unwrap().full_name(), "Ali B");
    }
}
