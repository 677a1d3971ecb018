use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Actions grouped by resource, both sorted and deduplicated.
    pub fn permissions_by_resource(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for p in &self.permissions {
            grouped
                .entry(p.resource.clone())
                .or_default()
                .push(p.action.clone());
        }
        for actions in grouped.values_mut() {
            actions.sort();
            actions.dedup();
        }
        grouped
    }

    pub fn allows(&self, resource: &str, action: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.resource == resource && (p.action == action || p.action == "*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role() -> Role {
        serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "name": "moderator",
            "permissions": [
                {"resource": "users", "action": "update"},
                {"resource": "ads", "action": "*"},
                {"resource": "users", "action": "read"},
                {"resource": "users", "action": "read"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_permissions_by_resource() {
        let grouped = role().permissions_by_resource();
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["ads", "users"]);
        assert_eq!(grouped["users"], vec!["read", "update"]);
    }

    #[test]
    fn test_allows_wildcard() {
        let r = role();
        assert!(r.allows("ads", "delete"));
        assert!(r.allows("users", "read"));
        assert!(!r.allows("users", "delete"));
    }
}
