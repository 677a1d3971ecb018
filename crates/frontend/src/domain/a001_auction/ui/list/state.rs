use contracts::domain::a001_auction::aggregate::Auction;

use crate::shared::list_utils::{ColumnDescriptor, FieldValue, TableRecord};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("title", "Titre"),
    ColumnDescriptor::new("seller.fullName", "Vendeur"),
    ColumnDescriptor::new("startingPrice", "Prix de départ")
        .not_searchable()
        .align_right(),
    ColumnDescriptor::new("currentPrice", "Prix actuel")
        .not_searchable()
        .align_right(),
    ColumnDescriptor::new("status", "Statut"),
    ColumnDescriptor::new("endAt", "Fin").not_searchable(),
];

pub const DEFAULT_SORT: &str = "endAt";

impl TableRecord for Auction {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, path: &str) -> Option<FieldValue> {
        let seller = self.seller.as_ref();
        Some(match path {
            "_id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "seller.fullName" => seller.map(|s| s.full_name()).into(),
            "seller.firstName" => seller.map(|s| s.first_name.clone()).into(),
            "seller.lastName" => seller.map(|s| s.last_name.clone()).into(),
            "startingPrice" => self.starting_price.into(),
            "currentPrice" => self.effective_price().into(),
            "status" => self.status.display_name().into(),
            "endAt" => self.end_at.clone().into(),
            "createdAt" => self.created_at.clone().into(),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::{filtered_view, ListState};
    use crate::shared::list_utils::SortOrder;

    fn auctions() -> Vec<Auction> {
        serde_json::from_value(serde_json::json!([
            {"_id": "a1", "title": "Tracteur", "startingPrice": 1000, "currentPrice": 1500,
             "status": "open", "endAt": "2024-06-01T10:00:00Z",
             "seller": {"firstName": "Karim", "lastName": "Benali"}},
            {"_id": "a2", "title": "Moissonneuse", "startingPrice": 2000,
             "status": "closed", "endAt": "2024-05-01T10:00:00Z"},
            {"_id": "a3", "title": "Remorque", "startingPrice": 500, "status": "pending"}
        ]))
        .unwrap()
    }

    fn ids(v: &[Auction]) -> Vec<String> {
        v.iter().map(TableRecord::record_id).collect()
    }

    #[test]
    fn test_search_by_seller_name() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_query("benali".into());
        assert_eq!(ids(&filtered_view(&auctions(), &state, COLUMNS)), vec!["a1"]);
    }

    #[test]
    fn test_missing_end_date_sorts_first() {
        let state = ListState::new(DEFAULT_SORT, 10);
        assert_eq!(ids(&filtered_view(&auctions(), &state, COLUMNS)), vec!["a3", "a2", "a1"]);
    }

    #[test]
    fn test_current_price_falls_back_to_starting_price() {
        let mut state = ListState::new("currentPrice", 10);
        state.sort_order = SortOrder::Desc;
        assert_eq!(ids(&filtered_view(&auctions(), &state, COLUMNS)), vec!["a2", "a1", "a3"]);
    }

    #[test]
    fn test_search_by_status_label() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_search_field(Some("status".into()));
        state.set_query("en cours".into());
        assert_eq!(ids(&filtered_view(&auctions(), &state, COLUMNS)), vec!["a1"]);
    }

    #[test]
    fn test_seller_paths_return_what_they_name() {
        let rows = auctions();
        let row = rows.iter().find(|r| r.record_id() == "a1").unwrap();
        assert_eq!(row.field("seller.fullName"), Some(FieldValue::Text("Karim Benali".into())));
        assert_eq!(row.field("seller.firstName"), Some(FieldValue::Text("Karim".into())));
        let without = rows.iter().find(|r| r.record_id() == "a2").unwrap();
        assert_eq!(without.field("seller.fullName"), Some(FieldValue::Null));
    }
}
