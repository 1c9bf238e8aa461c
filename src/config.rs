use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Variables de entorno con prefijo `WAIVERDB_`
#[derive(Debug, Deserialize, Default)]
pub struct EnvSettings {
    pub api_url: Option<String>,
    pub waivers_url: Option<String>,
    pub permissions_url: Option<String>,
    /// Token OIDC que se envía como `Authorization: Bearer`
    pub token: Option<String>,
}

/// Endpoints que se inyectan en el controlador al inicializarlo
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub waivers_url: Url,
    pub permissions_url: Url,
    pub token: Option<String>,
}

impl Settings {
    /// Deriva `<api>/waivers/` y `<api>/permissions` a partir de la URL base de la API
    pub fn from_api_url(api_url: &str) -> Result<Self, ConfigError> {
        let base = parse_url(&format!("{}/", api_url.trim_end_matches('/')))?;
        let join = |path: &str| {
            base.join(path).map_err(|source| ConfigError::InvalidUrl {
                value: format!("{}{}", base, path),
                source,
            })
        };

        Ok(Self {
            waivers_url: join("waivers/")?,
            permissions_url: join("permissions")?,
            token: None,
        })
    }

    /// Carga la configuración.
    ///
    /// Se leen `.env.local` y `.env` sin sobrescribir variables ya definidas en
    /// el entorno. `api_url_override` (la opción `--api-url`) tiene prioridad.
    pub fn load(api_url_override: Option<&str>) -> Result<Self, ConfigError> {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        let env = envy::prefixed("WAIVERDB_").from_env::<EnvSettings>()?;
        Self::from_env_settings(env, api_url_override)
    }

    pub fn from_env_settings(
        env: EnvSettings,
        api_url_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_url = api_url_override
            .map(str::to_string)
            .or(env.api_url)
            .ok_or(ConfigError::MissingApiUrl)?;

        let mut settings = Self::from_api_url(&api_url)?;

        if let Some(waivers_url) = env.waivers_url {
            settings.waivers_url = parse_url(&waivers_url)?;
        }
        if let Some(permissions_url) = env.permissions_url {
            settings.permissions_url = parse_url(&permissions_url)?;
        }
        settings.token = env.token.filter(|token| !token.is_empty());

        Ok(settings)
    }
}

fn parse_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        value: value.to_string(),
        source,
    })
}
