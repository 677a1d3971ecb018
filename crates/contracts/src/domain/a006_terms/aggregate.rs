use serde::{Deserialize, Serialize};

/// Conditions générales d'utilisation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub version: Option<String>,
    pub content: Option<String>,
    pub file_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermsDraft {
    pub title: String,
    pub version: String,
    pub content: String,
    pub is_active: bool,
}

impl TermsDraft {
    pub fn from_document(doc: &TermsDocument) -> Self {
        Self {
            title: doc.title.clone(),
            version: doc.version.clone().unwrap_or_default(),
            content: doc.content.clone().unwrap_or_default(),
            is_active: doc.is_active,
        }
    }

    /// A document needs a title and either inline content or an attached file.
    pub fn validate(&self, has_file: bool) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre est obligatoire".into());
        }
        if self.content.trim().is_empty() && !has_file {
            return Err("Ajoutez un contenu ou un fichier".into());
        }
        Ok(())
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_string()),
            ("version", self.version.trim().to_string()),
            ("content", self.content.clone()),
            ("isActive", self.is_active.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_content_or_file() {
        let draft = TermsDraft {
            title: "CGU".into(),
            ..Default::default()
        };
        assert!(draft.validate(false).is_err());
        assert!(draft.validate(true).is_ok());

        let with_content = TermsDraft {
            content: "Article 1".into(),
            ..draft.clone()
        };
        assert!(with_content.validate(false).is_ok());

        let untitled = TermsDraft::default();
        assert_eq!(untitled.validate(true), Err("Le titre est obligatoire".into()));
    }
}
