//! Resource endpoints of the timetable API
//!
//! One module per resource family. Each request type carries pure `path()`
//! and `params()` builders so every operation is testable without I/O; the
//! endpoint structs only forward the result to the signing client.

pub mod departures;
pub mod directions;
pub mod disruptions;
pub mod patterns;
pub mod route_types;
pub mod routes;
pub mod runs;
pub mod stops;

use reqwest::Client;
use serde_json::Value;

use crate::client::ApiClient;
use crate::config::{Credentials, PtvConfig};
use crate::error::PtvError;

pub use departures::{DepartureRequest, DeparturesApi};
pub use directions::DirectionsApi;
pub use disruptions::{DisruptionRequest, DisruptionsApi};
pub use patterns::{PatternRequest, PatternsApi};
pub use route_types::RouteTypesApi;
pub use routes::{RouteRequest, RoutesApi};
pub use runs::{RunRequest, RunsApi};
pub use stops::{StopRequest, StopsApi, StopsByDistanceRequest};

/// Comma-join a list for a query parameter value
pub(crate) fn comma_join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Aggregate over all resource endpoints, sharing one signing client
#[derive(Debug, Clone)]
pub struct PtvApi {
    /// Departures from a stop
    pub departures: DeparturesApi,
    /// Directions of travel
    pub directions: DirectionsApi,
    /// Service disruptions
    pub disruptions: DisruptionsApi,
    /// Stopping patterns of individual runs
    pub patterns: PatternsApi,
    /// Transit mode categories
    pub route_types: RouteTypesApi,
    /// Routes
    pub routes: RoutesApi,
    /// Scheduled trip instances
    pub runs: RunsApi,
    /// Stops
    pub stops: StopsApi,
}

impl PtvApi {
    /// Build the endpoint set around a shared HTTP client and credentials
    #[must_use]
    pub fn new(http: Client, config: &PtvConfig, credentials: Credentials) -> Self {
        let client = ApiClient::new(http, config, credentials);
        Self {
            departures: DeparturesApi::new(client.clone()),
            directions: DirectionsApi::new(client.clone()),
            disruptions: DisruptionsApi::new(client.clone()),
            patterns: PatternsApi::new(client.clone()),
            route_types: RouteTypesApi::new(client.clone()),
            routes: RoutesApi::new(client.clone()),
            runs: RunsApi::new(client.clone()),
            stops: StopsApi::new(client),
        }
    }

    /// Connectivity probe used by the configuration flow
    pub async fn get_route_types(&self) -> Result<Value, PtvError> {
        self.route_types.get_route_types().await
    }
}
