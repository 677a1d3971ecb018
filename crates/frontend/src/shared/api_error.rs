use thiserror::Error;

pub const NOT_AVAILABLE_MESSAGE: &str = "Fonctionnalité pas encore disponible";

/// Failure of a call to the admin API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Erreur réseau: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("erreur serveur"))]
    Http { status: u16, message: Option<String> },
    #[error("{}", NOT_AVAILABLE_MESSAGE)]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Réponse invalide: {0}")]
    Parse(String),
}

impl ApiError {
    /// Map a non-2xx status and its optional server message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => ApiError::NotFound,
            _ => ApiError::Http { status, message },
        }
    }

    /// Toast text: the server message when present, otherwise a fallback per variant.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Impossible de joindre le serveur".to_string(),
            ApiError::Http {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Http { status, .. } if *status >= 500 => {
                "Erreur serveur, réessayez plus tard".to_string()
            }
            ApiError::Http { .. } => "Une erreur est survenue".to_string(),
            ApiError::NotFound => NOT_AVAILABLE_MESSAGE.to_string(),
            ApiError::Validation(m) => m.clone(),
            ApiError::Parse(_) => "Réponse du serveur illisible".to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(404, Some("x".into())), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(409, None),
            ApiError::Http {
                status: 409,
                message: None
            }
        );
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let e = ApiError::from_status(400, Some("Email déjà utilisé".into()));
        assert_eq!(e.user_message(), "Email déjà utilisé");
        assert_eq!(ApiError::from_status(503, None).user_message(), "Erreur serveur, réessayez plus tard");
        assert_eq!(ApiError::NotFound.user_message(), NOT_AVAILABLE_MESSAGE);
        assert_eq!(ApiError::Network("offline".into()).user_message(), "Impossible de joindre le serveur");
    }

    #[test]
    fn test_display() {
        let e = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(e.to_string(), "HTTP 500: erreur serveur");
    }
}
