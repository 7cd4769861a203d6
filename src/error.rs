//! Errors surfaced by the heart-rate fetch pipeline.

use crate::config::Locale;

#[derive(Debug, thiserror::Error)]
pub enum HeartRateError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Heart rate request failed (HTTP {status}): {body}")]
    BadResponse { status: u16, body: String },

    #[error("Failed to decode heart rate data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl HeartRateError {
    /// Message shown to the user in place of the chart.
    pub fn localized(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Pl => match self {
                HeartRateError::Transport(e) => format!("Błąd sieci: {}", e),
                HeartRateError::Unauthorized => "Brak autoryzacji.".to_string(),
                HeartRateError::BadResponse { status, body } => format!(
                    "Pobieranie tętna nie powiodło się (HTTP {}): {}",
                    status, body
                ),
                HeartRateError::Decode(_) => "Nie udało się zdekodować danych tętna.".to_string(),
                HeartRateError::InvalidBaseUrl(url) => format!("Nieprawidłowy adres API: {}", url),
                HeartRateError::Cancelled => "Anulowano.".to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, HeartRateError>;
