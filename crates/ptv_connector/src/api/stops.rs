//! Stops endpoint (`/v3/stops`)

use serde_json::Value;

use super::comma_join;
use crate::client::ApiClient;
use crate::error::PtvError;

/// Parameters for the stops-on-route listing
#[derive(Debug, Clone, Default)]
pub struct StopRequest {
    pub route_id: i32,
    pub route_type: i32,
    pub stop_disruptions: Option<bool>,
    pub include_geopath: Option<bool>,
    /// Date for which the geopath is returned, UTC
    pub geopath_utc: Option<String>,
    pub include_advertised_interchange: Option<bool>,
}

impl StopRequest {
    /// Resource path for this request
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "/v3/stops/route/{}/route_type/{}",
            self.route_id, self.route_type
        )
    }

    /// Query parameters, in wire order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(stop_disruptions) = self.stop_disruptions {
            params.push(("stop_disruptions", stop_disruptions.to_string()));
        }
        if let Some(include_geopath) = self.include_geopath {
            params.push(("include_geopath", include_geopath.to_string()));
        }
        if let Some(geopath_utc) = &self.geopath_utc {
            params.push(("geopath_utc", geopath_utc.clone()));
        }
        if let Some(include_advertised_interchange) = self.include_advertised_interchange {
            params.push((
                "include_advertised_interchange",
                include_advertised_interchange.to_string(),
            ));
        }
        params
    }
}

/// Parameters for the stops-near-a-location listing
#[derive(Debug, Clone, Default)]
pub struct StopsByDistanceRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub route_types: Option<Vec<i32>>,
    pub max_results: Option<u32>,
    /// Search radius in metres
    pub max_distance: Option<u32>,
    pub stop_disruptions: Option<bool>,
}

impl StopsByDistanceRequest {
    /// Resource path for this request
    #[must_use]
    pub fn path(&self) -> String {
        format!("/v3/stops/location/{},{}", self.latitude, self.longitude)
    }

    /// Query parameters, in wire order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(route_types) = &self.route_types {
            params.push(("route_types", comma_join(route_types)));
        }
        if let Some(max_results) = self.max_results {
            params.push(("max_results", max_results.to_string()));
        }
        if let Some(max_distance) = self.max_distance {
            params.push(("max_distance", max_distance.to_string()));
        }
        if let Some(stop_disruptions) = self.stop_disruptions {
            params.push(("stop_disruptions", stop_disruptions.to_string()));
        }
        params
    }
}

/// Stops endpoint client
#[derive(Debug, Clone)]
pub struct StopsApi {
    client: ApiClient,
}

impl StopsApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Details of a single stop
    pub async fn get_stop_by_id(
        &self,
        stop_id: i32,
        route_type: i32,
        stop_disruptions: Option<bool>,
    ) -> Result<Value, PtvError> {
        let params: Vec<(&'static str, String)> = stop_disruptions
            .map(|flag| ("stop_disruptions", flag.to_string()))
            .into_iter()
            .collect();
        self.client
            .get(&format!("/v3/stops/{stop_id}/route_type/{route_type}"), &params)
            .await
    }

    /// All stops on a route
    pub async fn get_stops_for_route(&self, request: &StopRequest) -> Result<Value, PtvError> {
        self.client.get(&request.path(), &request.params()).await
    }

    /// All stops near a location
    pub async fn get_stops_by_distance(
        &self,
        request: &StopsByDistanceRequest,
    ) -> Result<Value, PtvError> {
        self.client.get(&request.path(), &request.params()).await
    }
}
