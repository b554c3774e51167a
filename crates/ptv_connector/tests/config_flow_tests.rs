//! Integration tests for the configuration flow (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ptv_connector::{ConfigFlow, FlowError, FlowOutcome, FlowStep, PtvConfig};

fn flow_for(server: &MockServer) -> ConfigFlow {
    ConfigFlow::new(reqwest::Client::new(), PtvConfig::for_testing(&server.uri()))
}

async fn mount_route_types(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/v3/route_types"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_credentials_advance_to_route_type_options() {
    let server = MockServer::start().await;
    mount_route_types(
        &server,
        r#"{"route_types":[{"route_type":0,"route_type_name":"Train"}]}"#,
    )
    .await;

    let mut flow = flow_for(&server);
    let form = flow.submit_credentials("3000123", "secret-key").await.unwrap();

    assert_eq!(form.step, FlowStep::RouteType);
    assert!(form.error.is_none());
    assert_eq!(form.options.len(), 1);
    assert_eq!(form.options[0].id, "0");
    assert_eq!(form.options[0].label, "Train");
}

#[tokio::test]
async fn test_empty_route_types_is_cannot_connect() {
    let server = MockServer::start().await;
    mount_route_types(&server, r#"{"route_types":[]}"#).await;

    let mut flow = flow_for(&server);
    let form = flow.submit_credentials("3000123", "secret-key").await.unwrap();

    assert_eq!(form.step, FlowStep::Credentials);
    assert_eq!(form.error, Some(FlowError::CannotConnect));
    assert_eq!(flow.step(), FlowStep::Credentials);
}

#[tokio::test]
async fn test_rejected_credentials_are_invalid_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/route_types"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut flow = flow_for(&server);
    let form = flow.submit_credentials("3000123", "wrong-key").await.unwrap();

    assert_eq!(form.step, FlowStep::Credentials);
    assert_eq!(form.error, Some(FlowError::InvalidAuth));
}

#[tokio::test]
async fn test_unreachable_api_is_cannot_connect() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/route_types"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut flow = flow_for(&server);
    let form = flow.submit_credentials("3000123", "secret-key").await.unwrap();

    assert_eq!(form.error, Some(FlowError::CannotConnect));
}

#[tokio::test]
async fn test_undecodable_probe_is_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/route_types"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let mut flow = flow_for(&server);
    let form = flow.submit_credentials("3000123", "secret-key").await.unwrap();

    assert_eq!(form.step, FlowStep::Credentials);
    assert_eq!(form.error, Some(FlowError::Unknown));
}

#[tokio::test]
async fn test_full_flow_produces_entry_config() {
    let server = MockServer::start().await;
    mount_route_types(
        &server,
        r#"{"route_types":[{"route_type":0,"route_type_name":"Train"},{"route_type":1,"route_type_name":"Tram"}]}"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/v3/routes"))
        .and(query_param("route_types", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"routes":[{"route_id":721,"route_name":"Alamein"},{"route_id":722,"route_name":"Belgrave"}]}"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/directions/route/721"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"directions":[{"direction_id":1,"direction_name":"City (Flinders Street)"},{"direction_id":5,"direction_name":"Alamein"}]}"#,
        ))
        .mount(&server)
        .await;

    let mut flow = flow_for(&server);

    let form = flow.submit_credentials("3000123", "secret-key").await.unwrap();
    assert_eq!(form.step, FlowStep::RouteType);

    let form = flow.submit_route_type("0").await.unwrap();
    assert_eq!(form.step, FlowStep::Stop);
    assert!(form.options.is_empty());

    let form = flow.submit_stop(1071).await.unwrap();
    assert_eq!(form.step, FlowStep::Route);
    assert_eq!(form.options.len(), 2);
    assert_eq!(form.options[0].label, "Alamein");

    let form = flow.submit_route("721").await.unwrap();
    assert_eq!(form.step, FlowStep::Direction);
    assert_eq!(form.options.len(), 2);

    let outcome = flow.submit_direction("1").await.unwrap();
    let FlowOutcome::Entry(entry) = outcome else {
        panic!("expected a finalized entry");
    };

    assert_eq!(entry.dev_id, "3000123");
    assert_eq!(entry.api_key, "secret-key");
    assert_eq!(entry.route_type, 0);
    assert_eq!(entry.route_type_name, "Train");
    assert_eq!(entry.stop, 1071);
    assert_eq!(entry.stop_name, "1071");
    assert_eq!(entry.route, 721);
    assert_eq!(entry.route_name, "Alamein");
    assert_eq!(entry.direction, 1);
    assert_eq!(entry.direction_name, "City (Flinders Street)");
    assert_eq!(flow.step(), FlowStep::Complete);
}

#[tokio::test]
async fn test_unknown_route_type_selection_stays_put() {
    let server = MockServer::start().await;
    mount_route_types(
        &server,
        r#"{"route_types":[{"route_type":0,"route_type_name":"Train"}]}"#,
    )
    .await;

    let mut flow = flow_for(&server);
    flow.submit_credentials("3000123", "secret-key").await.unwrap();

    let form = flow.submit_route_type("99").await.unwrap();
    assert_eq!(form.step, FlowStep::RouteType);
    assert_eq!(form.error, Some(FlowError::InvalidSelection));
    // the live options are still on offer
    assert_eq!(form.options.len(), 1);
}

#[tokio::test]
async fn test_route_lookup_failure_keeps_stop_step() {
    let server = MockServer::start().await;
    mount_route_types(
        &server,
        r#"{"route_types":[{"route_type":0,"route_type_name":"Train"}]}"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/v3/routes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut flow = flow_for(&server);
    flow.submit_credentials("3000123", "secret-key").await.unwrap();
    flow.submit_route_type("0").await.unwrap();

    let form = flow.submit_stop(1071).await.unwrap();
    assert_eq!(form.step, FlowStep::Stop);
    assert_eq!(form.error, Some(FlowError::CannotConnect));
    assert_eq!(flow.step(), FlowStep::Stop);
}

#[tokio::test]
async fn test_route_options_filtered_by_chosen_route_type() {
    let server = MockServer::start().await;
    mount_route_types(
        &server,
        r#"{"route_types":[{"route_type":1,"route_type_name":"Tram"}]}"#,
    )
    .await;

    // only the tram-filtered listing is mounted; an unfiltered request 404s
    Mock::given(method("GET"))
        .and(path("/v3/routes"))
        .and(query_param("route_types", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"routes":[{"route_id":909,"route_name":"Route 96"}]}"#,
        ))
        .mount(&server)
        .await;

    let mut flow = flow_for(&server);
    flow.submit_credentials("3000123", "secret-key").await.unwrap();
    flow.submit_route_type("1").await.unwrap();

    let form = flow.submit_stop(2500).await.unwrap();
    assert_eq!(form.step, FlowStep::Route);
    assert_eq!(form.options[0].label, "Route 96");
}
