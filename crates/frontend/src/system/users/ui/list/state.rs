use contracts::system::users::{AdminUser, UserFlag};

use crate::shared::list_utils::{ColumnDescriptor, FieldValue, TableRecord};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("fullName", "Nom"),
    ColumnDescriptor::new("email", "Email"),
    ColumnDescriptor::new("phone", "Téléphone"),
    ColumnDescriptor::new("isActive", "Statut"),
    ColumnDescriptor::new("isVerified", "Vérification"),
    ColumnDescriptor::new("isBanned", "Bannissement"),
    ColumnDescriptor::new("createdAt", "Inscription").not_searchable(),
];

pub const DEFAULT_SORT: &str = "fullName";

/// Flags that get a toggle button in the actions column, in display order.
pub const TOGGLE_FLAGS: &[UserFlag] = &[
    UserFlag::Active,
    UserFlag::Verified,
    UserFlag::Certified,
    UserFlag::Recommended,
    UserFlag::Banned,
];

impl TableRecord for AdminUser {
    fn record_id(&self) -> String {
        self.row_id()
    }

    fn field(&self, path: &str) -> Option<FieldValue> {
        if let Some(flag) = UserFlag::all().into_iter().find(|f| f.field_name() == path) {
            return Some(self.flag(flag).into());
        }
        Some(match path {
            "_id" => self.row_id().into(),
            "firstName" => self.first_name.as_str().into(),
            "lastName" => self.last_name.as_str().into(),
            "fullName" => self.full_name().into(),
            "email" => self.email.clone().into(),
            "phone" => self.phone.clone().into(),
            "createdAt" => self.created_at.clone().into(),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::{filtered_view, ListState};

    fn users() -> Vec<AdminUser> {
        serde_json::from_value(serde_json::json!([
            {"_id": "1", "firstName": "Yacine", "lastName": "Haddad", "email": "y@h.dz", "isVerified": true, "isActive": true},
            {"_id": "2", "firstName": "Amel", "lastName": "Bouzid", "phone": "0550", "isVerified": false, "isBanned": true},
            {"firstName": "Nour", "lastName": "Saidi", "isVerified": true}
        ]))
        .unwrap()
    }

    fn ids(v: &[AdminUser]) -> Vec<String> {
        v.iter().map(TableRecord::record_id).collect()
    }

    #[test]
    fn test_sort_by_full_name() {
        let state = ListState::new(DEFAULT_SORT, 10);
        assert_eq!(ids(&filtered_view(&users(), &state, COLUMNS)), vec!["2", "NourSaidi", "1"]);
    }

    #[test]
    fn test_verified_keyword_on_flag_column() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_search_field(Some("isVerified".into()));
        state.set_query("vérifié".into());
        assert_eq!(ids(&filtered_view(&users(), &state, COLUMNS)), vec!["NourSaidi", "1"]);
        state.set_query("non vérifié".into());
        assert_eq!(ids(&filtered_view(&users(), &state, COLUMNS)), vec!["2"]);
    }

    #[test]
    fn test_banni_keyword() {
        let mut state = ListState::new(DEFAULT_SORT, 10);
        state.set_search_field(Some("isBanned".into()));
        state.set_query("banni".into());
        assert_eq!(ids(&filtered_view(&users(), &state, COLUMNS)), vec!["2"]);
    }

    #[test]
    fn test_missing_optional_field_is_null() {
        let u = &users()[0];
        assert_eq!(u.field("phone"), Some(FieldValue::Null));
        assert_eq!(u.field("unknown"), None);
        assert_eq!(u.field("isActive"), Some(FieldValue::Bool(true)));
    }
}
