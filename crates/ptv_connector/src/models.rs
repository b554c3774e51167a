//! Typed views over the timetable API's JSON payloads
//!
//! The generic executor hands back [`serde_json::Value`]; the connector and
//! the configuration flow extract only the fields they consume. Everything
//! else in the upstream payloads passes through untouched.

use serde::{Deserialize, Serialize};

/// Envelope of `/v3/route_types`
#[derive(Debug, Clone, Deserialize)]
pub struct RouteTypesResponse {
    /// All transit mode categories known to the API
    #[serde(default)]
    pub route_types: Vec<RouteType>,
}

/// A transit mode category (train, tram, bus, ...)
#[derive(Debug, Clone, Deserialize)]
pub struct RouteType {
    pub route_type: i32,
    pub route_type_name: String,
}

/// Envelope of `/v3/routes`
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// A route as listed by the routes endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub route_id: i32,
    pub route_name: String,
}

/// Envelope of `/v3/directions/route/{route_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub directions: Vec<Direction>,
}

/// A direction of travel along a route
#[derive(Debug, Clone, Deserialize)]
pub struct Direction {
    pub direction_id: i32,
    pub direction_name: String,
}

/// Envelope of `/v3/departures/...`
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    #[serde(default)]
    pub departures: Vec<Departure>,
}

/// One departure as returned by the API with `expand=All`
#[derive(Debug, Clone, Deserialize)]
pub struct Departure {
    /// Timetabled departure, fixed UTC format
    #[serde(default)]
    pub scheduled_departure_utc: Option<String>,
    /// Real-time estimate, present only when the vehicle reports one
    #[serde(default)]
    pub estimated_departure_utc: Option<String>,
    #[serde(default)]
    pub platform_number: Option<String>,
    #[serde(default)]
    pub direction: Option<DepartureDirection>,
}

/// Expanded direction object nested in a departure
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDirection {
    #[serde(default)]
    pub direction_name: Option<String>,
}

/// Display-ready departure, rebuilt fresh on every poll cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureRecord {
    /// Local wall-clock departure time, `"%I:%M %p"`
    pub departure: String,
    /// Platform label; absent when the API reports none
    pub platform: Option<String>,
    /// Direction label; absent when the API reports none
    pub direction: Option<String>,
}
