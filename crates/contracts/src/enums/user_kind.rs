use serde::{Deserialize, Serialize};

/// Категория пользователя платформы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Client,
    Professional,
    Reseller,
}

impl UserKind {
    /// Path segment of the listing endpoint (`/users/{segment}`)
    pub fn endpoint(&self) -> &'static str {
        match self {
            UserKind::Client => "clients",
            UserKind::Professional => "professionals",
            UserKind::Reseller => "resellers",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserKind::Client => "Clients",
            UserKind::Professional => "Professionnels",
            UserKind::Reseller => "Revendeurs",
        }
    }

    pub fn all() -> Vec<UserKind> {
        vec![UserKind::Client, UserKind::Professional, UserKind::Reseller]
    }

    /// Wire value of `AdminUser.kind`
    pub fn code(&self) -> &'static str {
        match self {
            UserKind::Client => "client",
            UserKind::Professional => "professional",
            UserKind::Reseller => "reseller",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}
