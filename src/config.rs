use serde::{Deserialize, Serialize};

const DEFAULT_BRAND_NAME: &str = "Tradie Materials Live NZ";
const DEFAULT_LOGO_SRC: &str = "/TML NZ - 5 copy.png";
const DEFAULT_LOCATION: &str = "Auckland";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub brand_name: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub default_location: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            logo_src: DEFAULT_LOGO_SRC.to_string(),
            logo_alt: DEFAULT_BRAND_NAME.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            brand_name: option_env!("BRAND_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.brand_name),
            logo_src: option_env!("LOGO_SRC")
                .map(str::to_string)
                .unwrap_or(defaults.logo_src),
            logo_alt: option_env!("LOGO_ALT")
                .map(str::to_string)
                .unwrap_or(defaults.logo_alt),
            default_location: option_env!("DEFAULT_LOCATION")
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.default_location),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Warn,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
