//! Route types endpoint (`/v3/route_types`)

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::PtvError;

/// Route types endpoint client
#[derive(Debug, Clone)]
pub struct RouteTypesApi {
    client: ApiClient,
}

impl RouteTypesApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All transit mode categories
    pub async fn get_route_types(&self) -> Result<Value, PtvError> {
        self.client.get("/v3/route_types", &[]).await
    }
}
