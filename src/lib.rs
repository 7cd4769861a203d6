//! Heart-rate pipeline of the Hbit fitness client: fetches an activity's
//! samples, the user's zone model and time-in-zone aggregate, then derives
//! the chart overlays and the training score.

pub mod chart;
pub mod config;
pub mod detail;
pub mod error;
pub mod heart_rate_client;
pub mod models;
pub mod report;
pub mod score;
pub mod session;
pub mod zone_label;

pub use detail::{cancellable_activity_detail, fetch_activity_detail, fetch_activity_detail_partial};
pub use error::HeartRateError;
pub use heart_rate_client::HeartRateClient;
pub use session::Session;
