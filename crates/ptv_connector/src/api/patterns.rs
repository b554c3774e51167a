//! Patterns endpoint (`/v3/pattern`)

use serde_json::Value;

use super::comma_join;
use crate::client::ApiClient;
use crate::error::PtvError;

/// Parameters for a stopping-pattern lookup
#[derive(Debug, Clone, Default)]
pub struct PatternRequest {
    pub run_id: i32,
    pub route_type: i32,
    /// Nested objects to expand in the response
    pub expand: Option<Vec<String>>,
}

impl PatternRequest {
    /// Resource path for this request
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "/v3/pattern/run/{}/route_type/{}",
            self.run_id, self.route_type
        )
    }

    /// Query parameters, in wire order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        self.expand
            .as_ref()
            .map(|expand| ("expand", comma_join(expand)))
            .into_iter()
            .collect()
    }
}

/// Patterns endpoint client
#[derive(Debug, Clone)]
pub struct PatternsApi {
    client: ApiClient,
}

impl PatternsApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The ordered stopping pattern for a specific run
    pub async fn get_pattern(&self, request: &PatternRequest) -> Result<Value, PtvError> {
        self.client.get(&request.path(), &request.params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let request = PatternRequest {
            run_id: 953,
            route_type: 0,
            expand: None,
        };
        assert_eq!(request.path(), "/v3/pattern/run/953/route_type/0");
        assert!(request.params().is_empty());
    }

    #[test]
    fn test_expand_param() {
        let request = PatternRequest {
            run_id: 953,
            route_type: 0,
            expand: Some(vec!["Stop".to_string(), "Departure".to_string()]),
        };
        assert_eq!(request.params(), vec![("expand", "Stop,Departure".to_string())]);
    }
}
