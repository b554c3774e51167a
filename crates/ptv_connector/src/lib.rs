//! Signed-request client and polling connector for the PTV Timetable API v3
//!
//! Every request to the timetable API is authenticated by an HMAC-SHA1
//! signature over the request's own path and query string. This crate builds
//! those signed URLs, exposes one endpoint client per resource family
//! (departures, directions, disruptions, patterns, route types, routes,
//! runs, stops), and layers two host-facing pieces on top:
//!
//! - [`PtvConnector`], a polling facade that turns raw departures into
//!   display-ready records in the host's local time zone, and
//! - [`ConfigFlow`], a strictly ordered multi-step setup sequence that
//!   chains dependent live lookups (route type → stop → route → direction)
//!   into a finalized [`EntryConfig`].
//!
//! The host owns the HTTP client, the local time zone, configuration
//! persistence and all scheduling/backoff policy; those collaborators are
//! injected at construction.
//!
//! # Example
//!
//! ```rust,ignore
//! use ptv_connector::{EntryConfig, PtvConfig, PtvConnector};
//!
//! let connector = PtvConnector::new(
//!     http_client,
//!     &PtvConfig::default(),
//!     entry,                        // produced by ConfigFlow
//!     chrono_tz::Australia::Melbourne,
//! );
//!
//! let departures = connector.get_departures().await?;
//! ```

pub mod api;
mod client;
mod config;
mod config_flow;
mod connector;
mod error;
mod models;

pub use api::PtvApi;
pub use client::ApiClient;
pub use config::{Credentials, PtvConfig};
pub use config_flow::{ConfigFlow, FlowError, FlowForm, FlowOption, FlowOutcome, FlowStep};
pub use connector::{DepartureSource, EntryConfig, PtvConnector, convert_utc_to_local};
pub use error::{PtvError, UpdateFailed};
pub use models::{
    Departure, DepartureDirection, DepartureRecord, DeparturesResponse, Direction,
    DirectionsResponse, Route, RouteType, RouteTypesResponse, RoutesResponse,
};
