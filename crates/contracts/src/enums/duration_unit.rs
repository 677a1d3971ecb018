use serde::{Deserialize, Serialize};

/// Unit of an ad's display duration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Days,
    Weeks,
    Months,
}

impl DurationUnit {
    pub fn code(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DurationUnit::Days => "jours",
            DurationUnit::Weeks => "semaines",
            DurationUnit::Months => "mois",
        }
    }

    pub fn all() -> Vec<DurationUnit> {
        vec![DurationUnit::Days, DurationUnit::Weeks, DurationUnit::Months]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "days" => Some(DurationUnit::Days),
            "weeks" => Some(DurationUnit::Weeks),
            "months" => Some(DurationUnit::Months),
            _ => None,
        }
    }
}
