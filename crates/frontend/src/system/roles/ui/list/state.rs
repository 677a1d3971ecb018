use contracts::system::roles::Role;

use crate::shared::list_utils::{ColumnDescriptor, FieldValue, TableRecord};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("name", "Rôle"),
    ColumnDescriptor::new("description", "Description"),
    ColumnDescriptor::new("permissionCount", "Permissions")
        .not_searchable()
        .align_right(),
];

pub const DEFAULT_SORT: &str = "name";

impl TableRecord for Role {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, path: &str) -> Option<FieldValue> {
        Some(match path {
            "_id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "description" => self.description.clone().into(),
            "permissionCount" => (self.permissions.len() as f64).into(),
            _ => return None,
        })
    }
}

/// "users: read, update" style summary lines, one per resource.
pub fn permission_lines(role: &Role) -> Vec<String> {
    role.permissions_by_resource()
        .into_iter()
        .map(|(resource, actions)| format!("{}: {}", resource, actions.join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::{filtered_view, ListState};

    fn roles() -> Vec<Role> {
        serde_json::from_value(serde_json::json!([
            {"_id": "r2", "name": "moderator", "description": "Modération du contenu",
             "permissions": [{"resource": "ads", "action": "update"}, {"resource": "ads", "action": "read"}]},
            {"_id": "r1", "name": "admin", "permissions": [{"resource": "*", "action": "*"}]}
        ]))
        .unwrap()
    }

    #[test]
    fn test_sorted_by_name_and_searchable_by_description() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        let ids: Vec<String> = filtered_view(&roles(), &state, COLUMNS)
            .iter()
            .map(TableRecord::record_id)
            .collect();
        assert_eq!(ids, vec!["r1", "r2"]);

        state.set_query("modération".into());
        assert_eq!(filtered_view(&roles(), &state, COLUMNS).len(), 1);
    }

    #[test]
    fn test_permission_lines() {
        assert_eq!(permission_lines(&roles()[0]), vec!["ads: read, update"]);
    }
}
