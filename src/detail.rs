//! Loads everything the activity detail screen shows.
//!
//! The three reads are independent, so they are polled concurrently and
//! joined. [`fetch_activity_detail`] fails as a whole on the first error;
//! [`fetch_activity_detail_partial`] lets each read resolve on its own so the
//! caller can render whatever arrived.

use futures_util::future::{abortable, AbortHandle};
use std::future::Future;
use tracing::info;

use crate::error::{HeartRateError, Result};
use crate::heart_rate_client::HeartRateClient;
use crate::models::{sort_samples, ActivityDetail, HeartRateSample, HeartRateZones, ZoneTimeSpent};

pub async fn fetch_activity_detail(
    client: &HeartRateClient,
    activity_id: i64,
) -> Result<ActivityDetail> {
    let (mut samples, zones, time_spent) = tokio::try_join!(
        client.fetch_heart_rate_series(activity_id),
        client.fetch_zones(),
        client.fetch_zone_time_spent(activity_id),
    )?;
    sort_samples(&mut samples);

    info!(
        activity_id,
        samples = samples.len(),
        zones = time_spent.zones.len(),
        "Loaded activity heart rate detail"
    );

    Ok(ActivityDetail {
        samples,
        zones,
        time_spent,
    })
}

/// Result of a load where every read succeeds or fails independently.
#[derive(Debug)]
pub struct PartialActivityDetail {
    pub samples: Result<Vec<HeartRateSample>>,
    pub zones: Result<HeartRateZones>,
    pub time_spent: Result<ZoneTimeSpent>,
}

impl PartialActivityDetail {
    /// Collapses into a full detail, failing with the first error in
    /// series, zones, time-spent order.
    pub fn into_complete(self) -> Result<ActivityDetail> {
        Ok(ActivityDetail {
            samples: self.samples?,
            zones: self.zones?,
            time_spent: self.time_spent?,
        })
    }
}

pub async fn fetch_activity_detail_partial(
    client: &HeartRateClient,
    activity_id: i64,
) -> PartialActivityDetail {
    let (samples, zones, time_spent) = tokio::join!(
        client.fetch_heart_rate_series(activity_id),
        client.fetch_zones(),
        client.fetch_zone_time_spent(activity_id),
    );
    let samples = samples.map(|mut s| {
        sort_samples(&mut s);
        s
    });

    info!(
        activity_id,
        samples_ok = samples.is_ok(),
        zones_ok = zones.is_ok(),
        time_spent_ok = time_spent.is_ok(),
        "Loaded activity heart rate detail (partial)"
    );

    PartialActivityDetail {
        samples,
        zones,
        time_spent,
    }
}

/// Joined load that can be aborted from elsewhere, e.g. when the screen is
/// dismissed. Aborting drops the in-flight requests and yields
/// [`HeartRateError::Cancelled`].
pub fn cancellable_activity_detail(
    client: HeartRateClient,
    activity_id: i64,
) -> (impl Future<Output = Result<ActivityDetail>>, AbortHandle) {
    let (load, handle) = abortable(async move { fetch_activity_detail(&client, activity_id).await });
    let load = async move {
        match load.await {
            Ok(result) => result,
            Err(_aborted) => {
                info!(activity_id, "Activity heart rate load cancelled");
                Err(HeartRateError::Cancelled)
            }
        }
    };
    (load, handle)
}
