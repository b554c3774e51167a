//! Multi-step configuration flow
//!
//! A strictly ordered selection sequence: credentials, route type, stop,
//! route, direction. Each step's option set is fetched live from the API
//! using the answers accumulated so far, and a submission is validated
//! against the options presented for that step. Classified failures
//! (`cannot_connect`, `invalid_auth`, `invalid_selection`) re-render the
//! current step with an error code; anything else is logged and rendered as
//! `unknown`. The flow never moves backwards.

use reqwest::Client;
use tracing::{error, warn};

use crate::api::{PtvApi, RouteRequest};
use crate::config::{Credentials, PtvConfig};
use crate::connector::EntryConfig;
use crate::error::PtvError;
use crate::models::{DirectionsResponse, RouteTypesResponse, RoutesResponse};

/// The step a form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    Credentials,
    RouteType,
    Stop,
    Route,
    Direction,
    Complete,
}

/// Step-local error codes rendered by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// The API could not be reached or returned nothing usable
    CannotConnect,
    /// The API rejected the credentials
    InvalidAuth,
    /// The submitted value is not one of the presented options
    InvalidSelection,
    /// Anything unclassified; details are in the log
    Unknown,
}

impl FlowError {
    /// Stable code for host-side translation lookup
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::CannotConnect => "cannot_connect",
            Self::InvalidAuth => "invalid_auth",
            Self::InvalidSelection => "invalid_selection",
            Self::Unknown => "unknown",
        }
    }
}

/// A selectable option: opaque id plus human label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOption {
    pub id: String,
    pub label: String,
}

/// What the host should render next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowForm {
    pub step: FlowStep,
    /// Options to choose from; empty for free-input steps
    pub options: Vec<FlowOption>,
    pub error: Option<FlowError>,
}

/// Outcome of the final submission
#[derive(Debug, Clone)]
pub enum FlowOutcome {
    /// Render another form
    Form(FlowForm),
    /// The flow is complete; the host persists this entry
    Entry(EntryConfig),
}

#[derive(Debug, Default)]
struct FlowData {
    dev_id: String,
    api_key: String,
    route_type: Option<(i32, String)>,
    stop: Option<i32>,
    route: Option<(i32, String)>,
}

/// Stateful configuration flow, one instance per setup attempt
#[derive(Debug)]
pub struct ConfigFlow {
    http: Client,
    config: PtvConfig,
    api: Option<PtvApi>,
    step: FlowStep,
    /// Options presented on entry to the current step; submissions are
    /// validated against these
    options: Vec<FlowOption>,
    data: FlowData,
}

impl ConfigFlow {
    /// Start a new flow at the credentials step
    #[must_use]
    pub fn new(http: Client, config: PtvConfig) -> Self {
        Self {
            http,
            config,
            api: None,
            step: FlowStep::Credentials,
            options: Vec::new(),
            data: FlowData::default(),
        }
    }

    /// The step the flow is currently waiting on
    #[must_use]
    pub const fn step(&self) -> FlowStep {
        self.step
    }

    /// The form for the current step
    #[must_use]
    pub fn current_form(&self) -> FlowForm {
        self.form(None)
    }

    /// Submit credentials. Probes connectivity by fetching route types;
    /// on success the flow advances to route-type selection.
    pub async fn submit_credentials(
        &mut self,
        dev_id: &str,
        api_key: &str,
    ) -> Result<FlowForm, PtvError> {
        self.expect_step(FlowStep::Credentials)?;

        let api = PtvApi::new(
            self.http.clone(),
            &self.config,
            Credentials::new(dev_id, api_key),
        );

        match fetch_route_type_options(&api).await {
            Ok(options) if options.is_empty() => {
                warn!("connectivity probe returned no route types");
                Ok(self.form(Some(FlowError::CannotConnect)))
            }
            Ok(options) => {
                self.data.dev_id = dev_id.to_string();
                self.data.api_key = api_key.to_string();
                self.api = Some(api);
                self.advance(FlowStep::RouteType, options);
                Ok(self.form(None))
            }
            Err(e) => Ok(self.render_failure("connectivity probe", &e)),
        }
    }

    /// Submit the selected route type; advances to the stop step
    pub async fn submit_route_type(&mut self, selection: &str) -> Result<FlowForm, PtvError> {
        self.expect_step(FlowStep::RouteType)?;

        let Some((id, label)) = self.selected_id(selection)? else {
            return Ok(self.form(Some(FlowError::InvalidSelection)));
        };

        self.data.route_type = Some((id, label));
        self.advance(FlowStep::Stop, Vec::new());
        Ok(self.form(None))
    }

    /// Submit the stop id. There is no live stop lookup; any id advances,
    /// with route options fetched for the chosen route type.
    pub async fn submit_stop(&mut self, stop_id: i32) -> Result<FlowForm, PtvError> {
        self.expect_step(FlowStep::Stop)?;

        let route_type = self.answered_route_type()?;
        let api = self.api()?;
        match fetch_route_options(api, route_type).await {
            Ok(options) => {
                self.data.stop = Some(stop_id);
                self.advance(FlowStep::Route, options);
                Ok(self.form(None))
            }
            Err(e) => Ok(self.render_failure("route lookup", &e)),
        }
    }

    /// Submit the selected route; advances to direction selection
    pub async fn submit_route(&mut self, selection: &str) -> Result<FlowForm, PtvError> {
        self.expect_step(FlowStep::Route)?;

        let Some((id, label)) = self.selected_id(selection)? else {
            return Ok(self.form(Some(FlowError::InvalidSelection)));
        };

        let api = self.api()?;
        match fetch_direction_options(api, id).await {
            Ok(options) => {
                self.data.route = Some((id, label));
                self.advance(FlowStep::Direction, options);
                Ok(self.form(None))
            }
            Err(e) => Ok(self.render_failure("direction lookup", &e)),
        }
    }

    /// Submit the selected direction; finalizes the flow
    pub async fn submit_direction(&mut self, selection: &str) -> Result<FlowOutcome, PtvError> {
        self.expect_step(FlowStep::Direction)?;

        let Some((direction, direction_name)) = self.selected_id(selection)? else {
            return Ok(FlowOutcome::Form(self.form(Some(FlowError::InvalidSelection))));
        };

        let (route_type, route_type_name) = self
            .data
            .route_type
            .clone()
            .ok_or_else(|| PtvError::Validation("route type not answered".to_string()))?;
        let (route, route_name) = self
            .data
            .route
            .clone()
            .ok_or_else(|| PtvError::Validation("route not answered".to_string()))?;
        let stop = self
            .data
            .stop
            .ok_or_else(|| PtvError::Validation("stop not answered".to_string()))?;

        self.advance(FlowStep::Complete, Vec::new());
        Ok(FlowOutcome::Entry(EntryConfig {
            dev_id: self.data.dev_id.clone(),
            api_key: self.data.api_key.clone(),
            route_type,
            route,
            direction,
            stop,
            route_type_name,
            route_name,
            direction_name,
            stop_name: stop.to_string(),
        }))
    }

    fn form(&self, err: Option<FlowError>) -> FlowForm {
        FlowForm {
            step: self.step,
            options: self.options.clone(),
            error: err,
        }
    }

    fn advance(&mut self, step: FlowStep, options: Vec<FlowOption>) {
        self.step = step;
        self.options = options;
    }

    fn expect_step(&self, step: FlowStep) -> Result<(), PtvError> {
        if self.step == step {
            Ok(())
        } else {
            Err(PtvError::Validation(format!(
                "flow is at {:?}, not {step:?}",
                self.step
            )))
        }
    }

    fn api(&self) -> Result<&PtvApi, PtvError> {
        self.api
            .as_ref()
            .ok_or_else(|| PtvError::Validation("credentials not submitted".to_string()))
    }

    fn answered_route_type(&self) -> Result<i32, PtvError> {
        self.data
            .route_type
            .as_ref()
            .map(|(id, _)| *id)
            .ok_or_else(|| PtvError::Validation("route type not answered".to_string()))
    }

    /// Resolve a submission against the options presented for this step
    fn selected_id(&self, selection: &str) -> Result<Option<(i32, String)>, PtvError> {
        let Some(option) = self.options.iter().find(|o| o.id == selection) else {
            return Ok(None);
        };
        let id = option
            .id
            .parse::<i32>()
            .map_err(|e| PtvError::Validation(format!("non-numeric option id: {e}")))?;
        Ok(Some((id, option.label.clone())))
    }

    /// Classify a step failure into its error code, logging the rest
    fn render_failure(&self, context: &str, err: &PtvError) -> FlowForm {
        let code = match err {
            PtvError::Connection(_) | PtvError::HttpStatus { .. } => FlowError::CannotConnect,
            PtvError::Auth(_) => FlowError::InvalidAuth,
            _ => {
                error!(error = %err, context, "unexpected flow error");
                return self.form(Some(FlowError::Unknown));
            }
        };
        warn!(error = %err, context, code = code.code(), "flow step failed");
        self.form(Some(code))
    }
}

async fn fetch_route_type_options(api: &PtvApi) -> Result<Vec<FlowOption>, PtvError> {
    let value = api.route_types.get_route_types().await?;
    let response: RouteTypesResponse =
        serde_json::from_value(value).map_err(|e| PtvError::Decode(e.to_string()))?;
    Ok(response
        .route_types
        .into_iter()
        .map(|rt| FlowOption {
            id: rt.route_type.to_string(),
            label: rt.route_type_name,
        })
        .collect())
}

async fn fetch_route_options(api: &PtvApi, route_type: i32) -> Result<Vec<FlowOption>, PtvError> {
    let request = RouteRequest {
        route_types: Some(vec![route_type]),
        route_name: None,
    };
    let value = api.routes.get_all_routes(&request).await?;
    let response: RoutesResponse =
        serde_json::from_value(value).map_err(|e| PtvError::Decode(e.to_string()))?;
    Ok(response
        .routes
        .into_iter()
        .map(|r| FlowOption {
            id: r.route_id.to_string(),
            label: r.route_name,
        })
        .collect())
}

async fn fetch_direction_options(api: &PtvApi, route_id: i32) -> Result<Vec<FlowOption>, PtvError> {
    let value = api.directions.get_directions_for_route(route_id).await?;
    let response: DirectionsResponse =
        serde_json::from_value(value).map_err(|e| PtvError::Decode(e.to_string()))?;
    Ok(response
        .directions
        .into_iter()
        .map(|d| FlowOption {
            id: d.direction_id.to_string(),
            label: d.direction_name,
        })
        .collect())
}
