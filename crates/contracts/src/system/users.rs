use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::user_kind::UserKind;

/// Platform user as returned by `GET /users/{kind}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Unknown kinds decode as `None` instead of rejecting the whole list
    #[serde(default, deserialize_with = "lenient_kind")]
    pub kind: Option<UserKind>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_certified: bool,
    #[serde(default)]
    pub is_recommended: bool,
    pub created_at: Option<String>,
}

impl AdminUser {
    /// Stable row identifier: `_id`, or `firstName + lastName` when the id is missing.
    pub fn row_id(&self) -> String {
        if self.id.trim().is_empty() {
            format!("{}{}", self.first_name, self.last_name)
        } else {
            self.id.clone()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn flag(&self, flag: UserFlag) -> bool {
        match flag {
            UserFlag::Active => self.is_active,
            UserFlag::Banned => self.is_banned,
            UserFlag::Verified => self.is_verified,
            UserFlag::Certified => self.is_certified,
            UserFlag::Recommended => self.is_recommended,
        }
    }
}

/// Boolean per-user flag that admins can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserFlag {
    Active,
    Banned,
    Verified,
    Certified,
    Recommended,
}

impl UserFlag {
    /// Path segment of `PATCH /users/:id/{segment}`
    pub fn path_segment(&self) -> &'static str {
        match self {
            UserFlag::Active => "active",
            UserFlag::Banned => "banned",
            UserFlag::Verified => "verified",
            UserFlag::Certified => "certified",
            UserFlag::Recommended => "recommended",
        }
    }

    /// Wire field name of the flag on `AdminUser`
    pub fn field_name(&self) -> &'static str {
        match self {
            UserFlag::Active => "isActive",
            UserFlag::Banned => "isBanned",
            UserFlag::Verified => "isVerified",
            UserFlag::Certified => "isCertified",
            UserFlag::Recommended => "isRecommended",
        }
    }

    pub fn all() -> Vec<UserFlag> {
        vec![
            UserFlag::Active,
            UserFlag::Banned,
            UserFlag::Verified,
            UserFlag::Certified,
            UserFlag::Recommended,
        ]
    }
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<UserKind>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(UserKind::from_code))
}

/// Body of a flag update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagUpdateDto {
    pub value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user() {
        let user: AdminUser = serde_json::from_str(
            r#"{"_id":"u1","firstName":"Amine","lastName":"Kaci","email":"a@k.dz",
                "kind":"professional","isActive":true,"isVerified":true}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.kind, Some(UserKind::Professional));
        assert!(user.flag(UserFlag::Active));
        assert!(user.flag(UserFlag::Verified));
        assert!(!user.flag(UserFlag::Banned));
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_unknown_kind_does_not_reject_list() {
        let users: Vec<AdminUser> = serde_json::from_str(
            r#"[{"_id":"u1","kind":"admin"},{"_id":"u2","kind":"reseller"},{"_id":"u3","kind":null},{"_id":"u4"}]"#,
        )
        .unwrap();
        let kinds: Vec<Option<UserKind>> = users.iter().map(|u| u.kind).collect();
        assert_eq!(kinds, vec![None, Some(UserKind::Reseller), None, None]);
    }

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in UserKind::all() {
            assert_eq!(UserKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(UserKind::from_code("admin"), None);
    }

    #[test]
    fn test_row_id_fallback() {
        let user: AdminUser =
            serde_json::from_str(r#"{"firstName":"Sara","lastName":"Belkacem"}"#).unwrap();
        assert_eq!(user.row_id(), "SaraBelkacem");
        assert_eq!(user.full_name(), "Sara Belkacem");
    }
}
