use serde::{Deserialize, Serialize};

/// Any value other than `product`/`service`, or a missing `type`, is `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Product,
    Service,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CategoryType {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryType::Product => "product",
            CategoryType::Service => "service",
            CategoryType::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryType::Product => "Produit",
            CategoryType::Service => "Service",
            CategoryType::Unknown => "Non classée",
        }
    }
}
