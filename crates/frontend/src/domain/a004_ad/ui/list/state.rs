use chrono::{DateTime, Utc};
use contracts::domain::a004_ad::aggregate::Ad;

use crate::shared::date_utils::{ad_expiry, is_expired, parse_timestamp};
use crate::shared::list_utils::{ColumnDescriptor, FieldValue, TableRecord};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("title", "Titre"),
    ColumnDescriptor::new("link", "Lien"),
    ColumnDescriptor::new("duration", "Durée").not_searchable(),
    ColumnDescriptor::new("isActive", "Statut"),
    ColumnDescriptor::new("createdAt", "Création").not_searchable(),
    ColumnDescriptor::new("expiresAt", "Expiration").not_searchable(),
];

pub const DEFAULT_SORT: &str = "createdAt";

pub fn expiry_of(ad: &Ad) -> Option<DateTime<Utc>> {
    ad_expiry(ad.created_at.as_deref(), ad.duration, ad.duration_unit)
}

/// `"2 semaines"`
pub fn duration_label(ad: &Ad) -> String {
    format!("{} {}", ad.duration, ad.duration_unit.display_name())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpiryState {
    Unknown,
    Running(String),
    Expired(String),
}

pub fn expiry_state(ad: &Ad, now: DateTime<Utc>) -> ExpiryState {
    match expiry_of(ad) {
        None => ExpiryState::Unknown,
        Some(at) => {
            let label = at.format("%d.%m.%Y").to_string();
            if is_expired(at, now) {
                ExpiryState::Expired(label)
            } else {
                ExpiryState::Running(label)
            }
        }
    }
}

impl TableRecord for Ad {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, path: &str) -> Option<FieldValue> {
        Some(match path {
            "_id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "link" => self.link.clone().into(),
            "isActive" => self.is_active.into(),
            // Sorted by real length, so "1 mois" ranks above "3 semaines".
            "duration" => expiry_of(self)
                .zip(self.created_at.as_deref().and_then(parse_timestamp))
                .map(|(end, start)| (end - start).num_seconds() as f64)
                .into(),
            "createdAt" => self.created_at.clone().into(),
            "expiresAt" => expiry_of(self).map(|at| at.to_rfc3339()).into(),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::{filtered_view, ListState};
    use chrono::TimeZone;

    fn ads() -> Vec<Ad> {
        serde_json::from_value(serde_json::json!([
            {"_id": "1", "title": "Soldes", "isActive": true, "duration": 3, "durationUnit": "weeks",
             "createdAt": "2024-01-01T00:00:00Z"},
            {"_id": "2", "title": "Salon agricole", "isActive": false, "duration": 1, "durationUnit": "months",
             "createdAt": "2024-01-31T00:00:00Z", "link": "https://salon.dz"},
            {"_id": "3", "title": "Sans date", "isActive": true, "duration": 5}
        ]))
        .unwrap()
    }

    fn ids(v: &[Ad]) -> Vec<String> {
        v.iter().map(TableRecord::record_id).collect()
    }

    #[test]
    fn test_expiry_state() {
        let now = Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap();
        let all = ads();
        assert_eq!(expiry_state(&all[0], now), ExpiryState::Expired("22.01.2024".into()));
        // Calendar month from January 31st clamps to the end of February.
        assert_eq!(expiry_state(&all[1], now), ExpiryState::Running("29.02.2024".into()));
        assert_eq!(expiry_state(&all[2], now), ExpiryState::Unknown);
    }

    #[test]
    fn test_duration_sorts_by_length() {
        let state = ListState::new("duration", 10);
        assert_eq!(ids(&filtered_view(&ads(), &state, COLUMNS)), vec!["3", "1", "2"]);
        assert_eq!(duration_label(&ads()[0]), "3 semaines");
    }

    #[test]
    fn test_inactive_keyword() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_search_field(Some("isActive".into()));
        state.set_query("inactif".into());
        assert_eq!(ids(&filtered_view(&ads(), &state, COLUMNS)), vec!["2"]);
    }
}
