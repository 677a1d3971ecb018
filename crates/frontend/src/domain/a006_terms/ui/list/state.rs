use contracts::domain::a006_terms::aggregate::TermsDocument;

use crate::shared::list_utils::{ColumnDescriptor, FieldValue, TableRecord};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("title", "Titre"),
    ColumnDescriptor::new("version", "Version"),
    ColumnDescriptor::new("isActive", "En vigueur"),
    ColumnDescriptor::new("createdAt", "Publication").not_searchable(),
];

pub const DEFAULT_SORT: &str = "createdAt";

impl TableRecord for TermsDocument {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, path: &str) -> Option<FieldValue> {
        Some(match path {
            "_id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "version" => self.version.clone().into(),
            "content" => self.content.clone().into(),
            "isActive" => self.is_active.into(),
            "createdAt" => self.created_at.clone().into(),
            _ => return None,
        })
    }
}

/// First `max` characters of the inline content, on one line.
pub fn excerpt(doc: &TermsDocument, max: usize) -> String {
    let flat = doc
        .content
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::{filtered_view, ListState};

    fn docs() -> Vec<TermsDocument> {
        serde_json::from_value(serde_json::json!([
            {"_id": "t1", "title": "CGU", "version": "1.0", "isActive": false,
             "content": "Article 1.\n  Objet du   service", "createdAt": "2023-01-01"},
            {"_id": "t2", "title": "CGU", "version": "2.0", "isActive": true,
             "fileUrl": "/uploads/cgu-2.pdf", "createdAt": "2024-01-01"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_by_version_and_active() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_query("2.0".into());
        let ids: Vec<String> = filtered_view(&docs(), &state, COLUMNS)
            .iter()
            .map(TableRecord::record_id)
            .collect();
        assert_eq!(ids, vec!["t2"]);

        state.set_search_field(Some("isActive".into()));
        state.set_query("oui".into());
        assert_eq!(filtered_view(&docs(), &state, COLUMNS).len(), 1);
    }

    #[test]
    fn test_excerpt() {
        let all = docs();
        assert_eq!(excerpt(&all[0], 100), "Article 1. Objet du service");
        assert_eq!(excerpt(&all[0], 10), "Article 1.…");
        assert_eq!(excerpt(&all[1], 10), "");
    }
}
