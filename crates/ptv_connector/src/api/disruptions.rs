//! Disruptions endpoint (`/v3/disruptions`)

use serde_json::Value;

use super::comma_join;
use crate::client::ApiClient;
use crate::error::PtvError;

/// Filters for the all-disruptions listing
#[derive(Debug, Clone, Default)]
pub struct DisruptionRequest {
    pub route_types: Option<Vec<i32>>,
    pub disruption_modes: Option<Vec<i32>>,
    pub disruption_status: Option<String>,
}

impl DisruptionRequest {
    /// Query parameters, in wire order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(route_types) = &self.route_types {
            params.push(("route_types", comma_join(route_types)));
        }
        if let Some(disruption_modes) = &self.disruption_modes {
            params.push(("disruption_modes", comma_join(disruption_modes)));
        }
        if let Some(disruption_status) = &self.disruption_status {
            params.push(("disruption_status", disruption_status.clone()));
        }
        params
    }
}

/// Disruptions endpoint client
#[derive(Debug, Clone)]
pub struct DisruptionsApi {
    client: ApiClient,
}

impl DisruptionsApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All disruptions across all route types
    pub async fn get_all_disruptions(&self, request: &DisruptionRequest) -> Result<Value, PtvError> {
        self.client.get("/v3/disruptions", &request.params()).await
    }

    /// Disruptions affecting one route
    pub async fn get_disruptions_by_route(
        &self,
        route_id: i32,
        disruption_status: Option<&str>,
    ) -> Result<Value, PtvError> {
        self.client
            .get(
                &format!("/v3/disruptions/route/{route_id}"),
                &status_params(disruption_status),
            )
            .await
    }

    /// Disruptions affecting one route at one stop
    pub async fn get_disruptions_by_route_and_stop(
        &self,
        route_id: i32,
        stop_id: i32,
        disruption_status: Option<&str>,
    ) -> Result<Value, PtvError> {
        self.client
            .get(
                &format!("/v3/disruptions/route/{route_id}/stop/{stop_id}"),
                &status_params(disruption_status),
            )
            .await
    }

    /// Disruptions affecting one stop
    pub async fn get_disruptions_by_stop(
        &self,
        stop_id: i32,
        disruption_status: Option<&str>,
    ) -> Result<Value, PtvError> {
        self.client
            .get(
                &format!("/v3/disruptions/stop/{stop_id}"),
                &status_params(disruption_status),
            )
            .await
    }

    /// A single disruption
    pub async fn get_disruption_by_id(&self, disruption_id: i32) -> Result<Value, PtvError> {
        self.client
            .get(&format!("/v3/disruptions/{disruption_id}"), &[])
            .await
    }

    /// All disruption modes
    pub async fn get_disruption_modes(&self) -> Result<Value, PtvError> {
        self.client.get("/v3/disruptions/modes", &[]).await
    }
}

fn status_params(disruption_status: Option<&str>) -> Vec<(&'static str, String)> {
    disruption_status
        .map(|status| ("disruption_status", status.to_string()))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_empty_request() {
        assert!(DisruptionRequest::default().params().is_empty());
    }

    #[test]
    fn test_params_lists_comma_joined() {
        let request = DisruptionRequest {
            route_types: Some(vec![0, 1]),
            disruption_modes: Some(vec![1]),
            disruption_status: Some("current".to_string()),
        };
        assert_eq!(
            request.params(),
            vec![
                ("route_types", "0,1".to_string()),
                ("disruption_modes", "1".to_string()),
                ("disruption_status", "current".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_params() {
        assert!(status_params(None).is_empty());
        assert_eq!(
            status_params(Some("planned")),
            vec![("disruption_status", "planned".to_string())]
        );
    }
}
