use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{HeartRateError, Result};
use crate::models::{HeartRateSample, HeartRateZones, ZoneTimeSpent};
use crate::session::Session;

/// Client for the `/HeartRate` endpoints of the Hbit API.
#[derive(Clone)]
pub struct HeartRateClient {
    client: Client,
    base_url: Url,
    session: Session,
}

impl HeartRateClient {
    pub fn new(base_url: &str, session: Session) -> Result<Self> {
        Self::with_client(Client::new(), base_url, session)
    }

    pub fn with_client(client: Client, base_url: &str, session: Session) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| HeartRateError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(HeartRateError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    pub fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Self::with_client(
            client,
            &config.api_base_url,
            Session::from_token(config.api_token.clone()),
        )
    }

    /// `GET /HeartRate/{id}`. Returned in server order; see [`crate::models::sort_samples`].
    pub async fn fetch_heart_rate_series(&self, activity_id: i64) -> Result<Vec<HeartRateSample>> {
        let id = activity_id.to_string();
        self.get_json(&["HeartRate", &id]).await
    }

    /// `GET /HeartRate/zones`
    pub async fn fetch_zones(&self) -> Result<HeartRateZones> {
        self.get_json(&["HeartRate", "zones"]).await
    }

    /// `GET /HeartRate/{id}/zones/timespent`
    pub async fn fetch_zone_time_spent(&self, activity_id: i64) -> Result<ZoneTimeSpent> {
        let id = activity_id.to_string();
        self.get_json(&["HeartRate", &id, "zones", "timespent"]).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HeartRateError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, authenticated = self.session.is_authenticated(), "GET");

        let mut req = self.client.get(url.clone());
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }

        let response = req.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Heart rate request failed");
            HeartRateError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "Heart rate request returned an error status");
            if status == StatusCode::UNAUTHORIZED {
                return Err(HeartRateError::Unauthorized);
            }
            return Err(HeartRateError::BadResponse {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Failed to decode heart rate response");
            HeartRateError::Decode(e)
        })
    }
}
