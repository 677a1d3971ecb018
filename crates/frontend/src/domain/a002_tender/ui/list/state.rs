use contracts::domain::a002_tender::aggregate::Tender;

use crate::shared::list_utils::{ColumnDescriptor, FieldValue, TableRecord};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("title", "Objet"),
    ColumnDescriptor::new("owner.fullName", "Acheteur"),
    ColumnDescriptor::new("budget", "Budget").not_searchable().align_right(),
    ColumnDescriptor::new("status", "Statut"),
    ColumnDescriptor::new("deadline", "Date limite").not_searchable(),
    ColumnDescriptor::new("createdAt", "Publication").not_searchable(),
];

pub const DEFAULT_SORT: &str = "deadline";

impl TableRecord for Tender {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, path: &str) -> Option<FieldValue> {
        let owner = self.owner.as_ref();
        Some(match path {
            "_id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "owner.fullName" => owner.map(|o| o.full_name()).into(),
            "owner.firstName" => owner.map(|o| o.first_name.clone()).into(),
            "owner.lastName" => owner.map(|o| o.last_name.clone()).into(),
            "budget" => self.budget.into(),
            "status" => self.status.display_name().into(),
            "deadline" => self.deadline.clone().into(),
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

    fn tenders() -> Vec<Tender> {
        serde_json::from_value(serde_json::json!([
            {"_id": "t1", "title": "Fourniture de semences", "budget": 250000, "status": "open",
             "deadline": "2024-09-01", "owner": {"firstName": "Samia", "lastName": "Khelifi"}},
            {"_id": "t2", "title": "Transport de bétail", "status": "cancelled", "deadline": "2024-07-15"},
            {"_id": "t3", "title": "Irrigation", "budget": 90000, "status": "open", "deadline": "2024-08-01"}
        ]))
        .unwrap()
    }

    fn ids(v: &[Tender]) -> Vec<String> {
        v.iter().map(TableRecord::record_id).collect()
    }

    #[test]
    fn test_budget_desc_keeps_unknown_budget_first() {
        let mut state = ListState::new("budget", 10);
        state.sort_order = SortOrder::Desc;
        assert_eq!(ids(&filtered_view(&tenders(), &state, COLUMNS)), vec!["t2", "t1", "t3"]);
    }

    #[test]
    fn test_search_title_and_owner() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_query("khelifi".into());
        assert_eq!(ids(&filtered_view(&tenders(), &state, COLUMNS)), vec!["t1"]);
        state.set_query("transport".into());
        assert_eq!(ids(&filtered_view(&tenders(), &state, COLUMNS)), vec!["t2"]);
    }

    #[test]
    fn test_paging_by_deadline() {
        let mut state = ListState::new(DEFAULT_SORT, 2);
        state.page = 1;
        let all = filtered_view(&tenders(), &state, COLUMNS);
        let page = crate::shared::list_utils::paginate(&all, state.page, state.page_size);
        assert_eq!(ids(page), vec!["t1"]);
    }

    #[test]
    fn test_owner_paths_return_what_they_name() {
        let rows = tenders();
        let row = rows.iter().find(|r| r.record_id() == "t1").unwrap();
        assert_eq!(row.field("owner.fullName"), Some(FieldValue::Text("Samia Khelifi".into())));
        assert_eq!(row.field("owner.firstName"), Some(FieldValue::Text("Samia".into())));
        let without = rows.iter().find(|r| r.record_id() == "t2").unwrap();
        assert_eq!(without.field("owner.fullName"), Some(FieldValue::Null));
    }
}
