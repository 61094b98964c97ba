//! End-to-end connector contract tests: definition JSON in, connector out,
//! run, read rows and errors.

use chrono::NaiveDate;
use relata_core::{Context, ParamConfig, ReportConfig};
use relata_executor::{Connector, ReportConnector};
use serde_json::json;

fn parse(definition: &str) -> ReportConfig {
    serde_json::from_str(definition).expect("definition should deserialize")
}

const DATE_RANGE_REPORT: &str = r#"{
    "type": "scripted",
    "columns": [{"name": "day"}],
    "params": [
        {"type": "date", "name": "start", "required": true},
        {"type": "date", "name": "end", "required": true, "value": "2024-01-01"}
    ],
    "script": "rows.push(#{\"day\": params[0].value});"
}"#;

#[test]
fn missing_required_parameter_aborts_before_execution() {
    let config = parse(DATE_RANGE_REPORT);
    let mut report = Connector::from_config(&config);
    report.run(&Context::new());
    assert_eq!(
        report.state().errors(),
        ["Some required parameters weren't filled in: start."]
    );
    assert!(report.rows().is_empty());
}

#[test]
fn bound_parameters_reach_the_backend() {
    let config = parse(DATE_RANGE_REPORT);
    let mut report = Connector::from_config(&config);
    if let Some(ParamConfig::Date(p)) = report.state_mut().params_mut().get_mut("start") {
        p.value = NaiveDate::from_ymd_opt(2024, 1, 1);
    }
    report.run(&Context::new());
    assert!(report.state().errors().is_empty());
    assert_eq!(report.rows().len(), 1);
    assert_eq!(report.rows()[0]["day"], json!("2024-01-01"));
}

#[test]
fn clearing_errors_allows_a_clean_rerun() {
    let config = parse(DATE_RANGE_REPORT);
    let mut report = Connector::from_config(&config);
    report.run(&Context::new());
    assert_eq!(report.state().errors().len(), 1);

    report.state_mut().clear_errors();
    if let Some(ParamConfig::Date(p)) = report.state_mut().params_mut().get_mut("start") {
        p.value = NaiveDate::from_ymd_opt(2024, 2, 2);
    }
    report.run(&Context::new());
    assert!(report.state().errors().is_empty());
    assert_eq!(report.rows().len(), 1);
}

#[test]
fn script_fault_never_escapes_run() {
    let config = parse(
        r#"{"type": "scripted", "script": "this is not a valid script ((("}"#,
    );
    let mut report = Connector::from_config(&config);
    report.run(&Context::new());
    assert_eq!(report.state().errors().len(), 1);
    assert!(report.state().errors()[0].contains("script evaluation failed"));
}

#[test]
fn page_limit_override_reaches_the_connector() {
    let config = parse(r#"{"type": "fake", "page_limit": 5, "columns": [{"name": "id"}]}"#);
    let mut report = Connector::from_config(&config);
    assert_eq!(report.state().page_limit(), 5);
    report.run(&Context::new());
    assert_eq!(report.rows().len(), 5);
}

#[test]
fn fake_backend_pages_through_rows() {
    let config = parse(
        r#"{"type": "fake", "page_limit": 4, "row_count": 10, "columns": [{"name": "id"}]}"#,
    );
    let mut report = Connector::from_config(&config);
    report.state_mut().set_page(2);
    report.run(&Context::new());
    assert_eq!(report.rows().len(), 2);
    assert_eq!(report.rows()[0]["id"], json!("id 8"));
}

#[test]
fn prepared_options_flow_into_the_connector_copy() {
    let mut config = parse(
        r#"{
            "type": "scripted",
            "params": [{"type": "choice", "name": "region", "required": true, "options_from": "regions"}],
            "script": "rows.push(#{\"region\": params[0].value});"
        }"#,
    );
    let extra = Context::from([("regions".to_string(), json!(["eu", "us"]))]);
    config.prepare_parameters(&extra);
    match config.common().params.get("region").unwrap() {
        ParamConfig::Choice(p) => assert_eq!(p.options, ["eu", "us"]),
        other => panic!("wrong kind: {:?}", other),
    }

    let mut report = Connector::from_config(&config);
    if let Some(ParamConfig::Choice(p)) = report.state_mut().params_mut().get_mut("region") {
        p.value = Some("eu".to_string());
    }
    report.run(&extra);
    assert!(report.state().errors().is_empty());
    assert_eq!(report.rows()[0]["region"], json!("eu"));
}

#[test]
fn connectors_over_one_definition_are_independent() {
    let config = parse(r#"{"type": "fake", "page_limit": 2, "columns": [{"name": "id"}]}"#);
    let mut first = Connector::from_config(&config);
    let mut second = Connector::from_config(&config);
    second.state_mut().set_page(1);

    first.run(&Context::new());
    second.run(&Context::new());

    assert_eq!(first.rows()[0]["id"], json!("id 0"));
    assert_eq!(second.rows()[0]["id"], json!("id 2"));
}
