use serde::{Deserialize, Serialize};

/// Lifecycle status shared by auctions, tenders and direct sales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Pending,
    Open,
    Closed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ListingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Open => "open",
            ListingStatus::Closed => "closed",
            ListingStatus::Cancelled => "cancelled",
            ListingStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "En attente",
            ListingStatus::Open => "En cours",
            ListingStatus::Closed => "Terminée",
            ListingStatus::Cancelled => "Annulée",
            ListingStatus::Unknown => "Inconnu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_tolerated() {
        let s: ListingStatus = serde_json::from_str(r#""archived""#).unwrap();
        assert_eq!(s, ListingStatus::Unknown);
        let s: ListingStatus = serde_json::from_str(r#""open""#).unwrap();
        assert_eq!(s, ListingStatus::Open);
    }
}
