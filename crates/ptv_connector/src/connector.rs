//! Polling connector facade
//!
//! Wraps the endpoint set with a finalized configuration and turns raw
//! departures into display-ready records in the host's local time zone.
//! The host scheduler polls [`DepartureSource::refresh`]; every failure is
//! collapsed into the opaque [`UpdateFailed`] signal so the host can apply
//! its own backoff policy.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::api::{DepartureRequest, PtvApi};
use crate::config::{Credentials, PtvConfig};
use crate::error::{PtvError, UpdateFailed};
use crate::models::{DepartureRecord, DeparturesResponse};

/// The exact UTC format the API uses; anything else is rejected
const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// 12-hour wall clock, e.g. `02:30 PM`
const DISPLAY_FORMAT: &str = "%I:%M %p";

/// Finalized configuration produced by the configuration flow and persisted
/// by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    pub dev_id: String,
    pub api_key: String,
    pub route_type: i32,
    pub route: i32,
    pub direction: i32,
    pub stop: i32,
    pub route_type_name: String,
    pub route_name: String,
    pub direction_name: String,
    pub stop_name: String,
}

/// Host-facing polling contract
#[async_trait]
pub trait DepartureSource: Send + Sync {
    /// One poll cycle. An error means "skip this cycle, try again next
    /// interval"; the host owns backoff.
    async fn refresh(&self) -> Result<Vec<DepartureRecord>, UpdateFailed>;
}

/// Connector for one configured stop/route/direction
#[derive(Debug)]
pub struct PtvConnector {
    api: PtvApi,
    entry: EntryConfig,
    local_tz: Tz,
}

impl PtvConnector {
    /// Build a connector from a finalized configuration.
    ///
    /// The HTTP client and local time zone are host collaborators, injected
    /// here rather than looked up from ambient state.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &PtvConfig, entry: EntryConfig, local_tz: Tz) -> Self {
        let credentials = Credentials::new(entry.dev_id.clone(), entry.api_key.clone());
        Self {
            api: PtvApi::new(http, config, credentials),
            entry,
            local_tz,
        }
    }

    /// The underlying endpoint set, for callers beyond the departures view
    #[must_use]
    pub const fn api(&self) -> &PtvApi {
        &self.api
    }

    /// The configuration this connector was built from
    #[must_use]
    pub const fn entry(&self) -> &EntryConfig {
        &self.entry
    }

    /// Upcoming departures for the configured stop as display-ready records.
    ///
    /// Fixed policy: at most 5 results, cancelled trips excluded, full
    /// expansion requested.
    #[instrument(skip(self), fields(stop = self.entry.stop, route = self.entry.route))]
    pub async fn get_departures(&self) -> Result<Vec<DepartureRecord>, PtvError> {
        let request = DepartureRequest {
            route_type: self.entry.route_type,
            stop_id: self.entry.stop,
            route_id: Some(self.entry.route),
            direction_id: Some(self.entry.direction),
            max_results: Some(5),
            include_cancelled: Some(false),
            expand: Some(vec!["All".to_string()]),
        };

        let value = self.api.departures.get_departures(&request).await?;
        let response: DeparturesResponse =
            serde_json::from_value(value).map_err(|e| PtvError::Decode(e.to_string()))?;

        let records = build_records(response, self.local_tz)?;
        debug!(count = records.len(), "departures fetched");
        Ok(records)
    }
}

#[async_trait]
impl DepartureSource for PtvConnector {
    async fn refresh(&self) -> Result<Vec<DepartureRecord>, UpdateFailed> {
        self.get_departures().await.map_err(|source| {
            warn!(error = %source, "departure refresh failed");
            UpdateFailed::from(source)
        })
    }
}

/// Turn raw departures into records, preferring the real-time estimate over
/// the timetable and skipping items that carry neither
fn build_records(response: DeparturesResponse, local_tz: Tz) -> Result<Vec<DepartureRecord>, PtvError> {
    let mut records = Vec::new();
    for departure in response.departures {
        let Some(utc_time) = departure
            .estimated_departure_utc
            .or(departure.scheduled_departure_utc)
        else {
            continue;
        };
        records.push(DepartureRecord {
            departure: convert_utc_to_local(&utc_time, local_tz)?,
            platform: departure.platform_number,
            direction: departure.direction.and_then(|d| d.direction_name),
        });
    }
    Ok(records)
}

/// Strict UTC-to-local conversion. The input must match the API's
/// `YYYY-MM-DDTHH:MM:SSZ` format exactly.
pub fn convert_utc_to_local(utc_time: &str, local_tz: Tz) -> Result<String, PtvError> {
    let naive = NaiveDateTime::parse_from_str(utc_time, UTC_FORMAT)
        .map_err(|e| PtvError::Parse(format!("{utc_time:?}: {e}")))?;
    let local = naive.and_utc().with_timezone(&local_tz);
    Ok(local.format(DISPLAY_FORMAT).to_string())
}
