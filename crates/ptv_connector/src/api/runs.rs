//! Runs endpoint (`/v3/runs`)

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::PtvError;

/// Parameters for a runs-for-route lookup
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub route_id: i32,
    pub route_type: i32,
}

impl RunRequest {
    /// Resource path for this request
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "/v3/runs/route/{}/route_type/{}",
            self.route_id, self.route_type
        )
    }
}

/// Runs endpoint client
#[derive(Debug, Clone)]
pub struct RunsApi {
    client: ApiClient,
}

impl RunsApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All runs for a route
    pub async fn get_runs_for_route(&self, request: &RunRequest) -> Result<Value, PtvError> {
        self.client.get(&request.path(), &[]).await
    }

    /// A single run
    pub async fn get_run_by_id(&self, run_id: i32, route_type: i32) -> Result<Value, PtvError> {
        self.client
            .get(&format!("/v3/runs/{run_id}/route_type/{route_type}"), &[])
            .await
    }
}
