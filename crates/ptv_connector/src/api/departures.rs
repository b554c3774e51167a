//! Departures endpoint (`/v3/departures`)

use serde_json::Value;

use super::comma_join;
use crate::client::ApiClient;
use crate::error::PtvError;

/// Parameters for a departures lookup.
///
/// `route_type` and `stop_id` are path segments and always present; every
/// other field is an optional query parameter, omitted entirely when unset.
#[derive(Debug, Clone, Default)]
pub struct DepartureRequest {
    pub route_type: i32,
    pub stop_id: i32,
    /// Narrows the lookup to one route; adds the `/route/{id}` path suffix
    pub route_id: Option<i32>,
    pub direction_id: Option<i32>,
    pub max_results: Option<u32>,
    pub include_cancelled: Option<bool>,
    /// Nested objects to expand in the response, e.g. `All`
    pub expand: Option<Vec<String>>,
}

impl DepartureRequest {
    /// Resource path for this request
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = format!(
            "/v3/departures/route_type/{}/stop/{}",
            self.route_type, self.stop_id
        );
        if let Some(route_id) = self.route_id {
            path.push_str(&format!("/route/{route_id}"));
        }
        path
    }

    /// Query parameters, in wire order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(direction_id) = self.direction_id {
            params.push(("direction_id", direction_id.to_string()));
        }
        if let Some(max_results) = self.max_results {
            params.push(("max_results", max_results.to_string()));
        }
        if let Some(include_cancelled) = self.include_cancelled {
            params.push(("include_cancelled", include_cancelled.to_string()));
        }
        if let Some(expand) = &self.expand {
            params.push(("expand", comma_join(expand)));
        }
        params
    }
}

/// Departures endpoint client
#[derive(Debug, Clone)]
pub struct DeparturesApi {
    client: ApiClient,
}

impl DeparturesApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Departures from a stop, optionally narrowed to one route
    pub async fn get_departures(&self, request: &DepartureRequest) -> Result<Value, PtvError> {
        self.client.get(&request.path(), &request.params()).await
    }
}
