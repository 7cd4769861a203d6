use figment::{
    providers::{Env, Format, Json, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    // Hbit REST API
    pub api_base_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,

    // Presentation
    pub locale: Locale,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/".to_string(),
            api_token: None,
            request_timeout_secs: 30,
            locale: Locale::En,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        let mut config: AppConfig = Self::figment().extract()?;

        // Read verbatim: figment would turn an all-digit token into a number.
        if let Ok(token) = std::env::var("HBIT_API_TOKEN") {
            config.api_token = Some(token);
        }

        Ok(config)
    }

    fn figment() -> Figment {
        Figment::from(figment::providers::Serialized::defaults(
            AppConfig::default(),
        ))
        .merge(Toml::file("Hbit.toml"))
        .merge(Json::file("Hbit.json"))
        .merge(Env::prefixed("HBIT_").ignore(&["API_TOKEN"]))
    }

    /// `None` when `request_timeout_secs` is 0, meaning no timeout.
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        (self.request_timeout_secs > 0)
            .then(|| std::time::Duration::from_secs(self.request_timeout_secs))
    }
}
