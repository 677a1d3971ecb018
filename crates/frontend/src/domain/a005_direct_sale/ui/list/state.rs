use contracts::domain::a005_direct_sale::aggregate::DirectSale;

use crate::shared::list_utils::{ColumnDescriptor, FieldValue, TableRecord};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("title", "Produit"),
    ColumnDescriptor::new("seller.fullName", "Vendeur"),
    ColumnDescriptor::new("price", "Prix").not_searchable().align_right(),
    ColumnDescriptor::new("quantity", "Quantité").not_searchable().align_right(),
    ColumnDescriptor::new("stockValue", "Valeur du stock")
        .not_searchable()
        .align_right(),
    ColumnDescriptor::new("status", "Statut"),
    ColumnDescriptor::new("createdAt", "Création").not_searchable(),
];

pub const DEFAULT_SORT: &str = "title";

impl TableRecord for DirectSale {
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
            "price" => self.price.into(),
            "quantity" => self.quantity.into(),
            "stockValue" => self.stock_value().into(),
            "status" => self.status.display_name().into(),
            "createdAt" => self.created_at.clone().into(),
            _ => return None,
        })
    }
}

/// Sum of `stockValue` over the given rows.
pub fn total_stock_value(sales: &[DirectSale]) -> f64 {
    sales.iter().map(DirectSale::stock_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::{filtered_view, ListState};
    use crate::shared::list_utils::SortOrder;

    fn sales() -> Vec<DirectSale> {
        serde_json::from_value(serde_json::json!([
            {"_id": "s1", "title": "Huile d'olive", "price": 800, "quantity": 10, "status": "open",
             "seller": {"firstName": "Lina", "lastName": "Mansouri"}},
            {"_id": "s2", "title": "Miel", "price": 2500, "quantity": 2, "status": "open"},
            {"_id": "s3", "title": "Dattes", "price": 600, "quantity": 0, "status": "closed"}
        ]))
        .unwrap()
    }

    fn ids(v: &[DirectSale]) -> Vec<String> {
        v.iter().map(TableRecord::record_id).collect()
    }

    #[test]
    fn test_sort_by_stock_value() {
        let mut state = ListState::new("stockValue", 10);
        state.sort_order = SortOrder::Desc;
        assert_eq!(ids(&filtered_view(&sales(), &state, COLUMNS)), vec!["s1", "s2", "s3"]);
        assert_eq!(total_stock_value(&sales()), 13000.0);
    }

    #[test]
    fn test_numeric_columns_are_not_searched() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_query("800".into());
        assert!(filtered_view(&sales(), &state, COLUMNS).is_empty());
        state.set_query("mansouri".into());
        assert_eq!(ids(&filtered_view(&sales(), &state, COLUMNS)), vec!["s1"]);
    }

    #[test]
    fn test_seller_paths_return_what_they_name() {
        let rows = sales();
        let row = rows.iter().find(|r| r.record_id() == "s1").unwrap();
        assert_eq!(row.field("seller.fullName"), Some(FieldValue::Text("Lina Mansouri".into())));
        assert_eq!(row.field("seller.firstName"), Some(FieldValue::Text("Lina".into())));
        let without = rows.iter().find(|r| r.record_id() == "s2").unwrap();
        assert_eq!(without.field("seller.fullName"), Some(FieldValue::Null));
    }
}
