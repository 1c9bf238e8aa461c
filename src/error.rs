use reqwest::StatusCode;
use thiserror::Error;

/// Fallo al enviar un waiver: estado HTTP (si hubo respuesta) y mensaje
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct SubmitError {
    pub status: Option<StatusCode>,
    pub message: String,
}

impl SubmitError {
    pub fn new(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Error de red: no llegó ninguna respuesta
    pub fn network(err: &reqwest::Error) -> Self {
        Self::new(None, format!("Error al conectar con WaiverDB: {}", err))
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == Some(StatusCode::FORBIDDEN)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No se encontró la URL de la API. Configura WAIVERDB_API_URL o usa --api-url")]
    MissingApiUrl,
    #[error("URL inválida '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Error al leer la configuración del entorno: {0}")]
    Env(#[from] envy::Error),
}
