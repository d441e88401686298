//! config/survey_config.rs
//! Configuración de URLs de encuestas y del servidor (leída del entorno / .env).

/// Origen público del frontend de encuestas cuando no se define `SURVEY_FRONTEND_URL`.
pub const DEFAULT_FRONTEND_URL: &str = "https://marketing-crm-k35v.vercel.app";

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/surveys.db";
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 5022;

/// Configuración de encuestas. Se inyecta en `SurveyDispatchService` al construirlo.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Origen del frontend (sin "/" final), p. ej. "https://encuestas.example"
    pub frontend_url: String,
}

impl SurveyConfig {
    pub fn new(frontend_url: impl Into<String>) -> Self {
        let raw: String = frontend_url.into();
        SurveyConfig {
            frontend_url: normalize_origin(&raw),
        }
    }

    /// Lee `SURVEY_FRONTEND_URL`; si no existe o está vacío usa el default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let frontend_url = lookup("SURVEY_FRONTEND_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        Self::new(frontend_url.trim())
    }

    pub fn log_banner(&self) {
        log::info!("==================================================");
        log::info!("  ENCUESTAS CONFIGURADAS");
        log::info!("  Frontend URL: {}", self.frontend_url);
        log::info!("==================================================");
    }
}

/// Configuración del proceso: base de datos, bind del servidor y encuestas.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub survey: SurveyConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "SERVER_PORT inválido ('{}'), usando {}",
                    raw,
                    DEFAULT_SERVER_PORT
                );
                DEFAULT_SERVER_PORT
            }),
            None => DEFAULT_SERVER_PORT,
        };

        AppConfig {
            database_url: lookup("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_host: lookup("SERVER_HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            survey: SurveyConfig::from_lookup(&lookup),
        }
    }
}

// Solo se recorta una "/" final: "https://x.app/" -> "https://x.app"
fn normalize_origin(raw: &str) -> String {
    raw.strip_suffix('/').unwrap_or(raw).to_string()
}
