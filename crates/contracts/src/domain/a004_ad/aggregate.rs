use serde::{Deserialize, Serialize};

use crate::enums::duration_unit::DurationUnit;

/// Рекламное объявление (bannière publicitaire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub duration_unit: DurationUnit,
    pub created_at: Option<String>,
}

/// Form values of the ad dialog; the image file travels separately in the multipart body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdDraft {
    pub title: String,
    pub link: String,
    pub duration: u32,
    pub duration_unit: DurationUnit,
    pub is_active: bool,
}

impl AdDraft {
    pub fn from_ad(ad: &Ad) -> Self {
        Self {
            title: ad.title.clone(),
            link: ad.link.clone().unwrap_or_default(),
            duration: ad.duration,
            duration_unit: ad.duration_unit,
            is_active: ad.is_active,
        }
    }

    /// `has_image` is true when a file is attached or the ad already has one.
    pub fn validate(&self, has_image: bool) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre est obligatoire".into());
        }
        if self.duration == 0 {
            return Err("La durée doit être supérieure à zéro".into());
        }
        if !has_image {
            return Err("Une image est obligatoire".into());
        }
        Ok(())
    }

    /// Text fields of the multipart body, in form order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_string()),
            ("link", self.link.trim().to_string()),
            ("duration", self.duration.to_string()),
            ("durationUnit", self.duration_unit.code().to_string()),
            ("isActive", self.is_active.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AdDraft {
        AdDraft {
            title: "Promo été".into(),
            link: " https://example.dz ".into(),
            duration: 2,
            duration_unit: DurationUnit::Weeks,
            is_active: true,
        }
    }

    #[test]
    fn test_validate() {
        assert!(draft().validate(true).is_ok());
        assert!(draft().validate(false).is_err());
        let mut d = draft();
        d.title = "  ".into();
        assert_eq!(d.validate(true), Err("Le titre est obligatoire".into()));
        let mut d = draft();
        d.duration = 0;
        assert!(d.validate(true).is_err());
    }

    #[test]
    fn test_form_fields() {
        let fields = draft().form_fields();
        assert_eq!(fields[1], ("link", "https://example.dz".to_string()));
        assert_eq!(fields[3], ("durationUnit", "weeks".to_string()));
        assert_eq!(fields[4], ("isActive", "true".to_string()));
    }
}
