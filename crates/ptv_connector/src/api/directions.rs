//! Directions endpoint (`/v3/directions`)

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::PtvError;

/// Directions endpoint client
#[derive(Debug, Clone)]
pub struct DirectionsApi {
    client: ApiClient,
}

impl DirectionsApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The directions a route travels in
    pub async fn get_directions_for_route(&self, route_id: i32) -> Result<Value, PtvError> {
        self.client
            .get(&format!("/v3/directions/route/{route_id}"), &[])
            .await
    }

    /// All routes serving a direction of travel
    pub async fn get_direction_by_id(&self, direction_id: i32) -> Result<Value, PtvError> {
        self.client
            .get(&format!("/v3/directions/{direction_id}"), &[])
            .await
    }

    /// All routes of one mode serving a direction of travel
    pub async fn get_direction_for_route_and_type(
        &self,
        direction_id: i32,
        route_type: i32,
    ) -> Result<Value, PtvError> {
        self.client
            .get(
                &format!("/v3/directions/{direction_id}/route_type/{route_type}"),
                &[],
            )
            .await
    }
}
