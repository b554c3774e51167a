//! Routes endpoint (`/v3/routes`)

use serde_json::Value;

use super::comma_join;
use crate::client::ApiClient;
use crate::error::PtvError;

/// Filters for the route listing
#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    /// Restrict to these transit modes
    pub route_types: Option<Vec<i32>>,
    /// Substring filter on the route name
    pub route_name: Option<String>,
}

impl RouteRequest {
    /// Query parameters, in wire order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(route_types) = &self.route_types {
            params.push(("route_types", comma_join(route_types)));
        }
        if let Some(route_name) = &self.route_name {
            params.push(("route_name", route_name.clone()));
        }
        params
    }
}

/// Routes endpoint client
#[derive(Debug, Clone)]
pub struct RoutesApi {
    client: ApiClient,
}

impl RoutesApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All routes, optionally filtered by mode and name
    pub async fn get_all_routes(&self, request: &RouteRequest) -> Result<Value, PtvError> {
        self.client.get("/v3/routes", &request.params()).await
    }

    /// A single route
    pub async fn get_route_by_id(&self, route_id: i32) -> Result<Value, PtvError> {
        self.client.get(&format!("/v3/routes/{route_id}"), &[]).await
    }
}
