//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations, and that the pipeline runs with a
//! subscriber capturing every span.

use std::str::FromStr;

use tracing_subscriber::util::SubscriberInitExt;
use unifilar::core::logging::{init_logging, LogFormat, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use unifilar::{generate, parse};

const TABLE: &str = r#"[
    {"Equipo": "T1", "Tipo": "Transformer", "Potencia (MVA)": 10},
    {"Equipo": "BB", "Tipo": "Bus", "Tensión (kV)": 115}
]"#;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert!(variants.contains(&"compact"));
    assert!(variants.contains(&"pretty"));
    assert!(variants.contains(&"json"));
}

#[test]
fn test_env_variable_names() {
    assert_eq!(LOG_LEVEL_ENV, "UNIFILAR_LOG_LEVEL");
    assert_eq!(LOG_FORMAT_ENV, "UNIFILAR_LOG_FORMAT");
}

#[test]
fn test_init_logging_with_levels() {
    // Only the first call can install the global subscriber; the rest must
    // fail without panicking
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("off"), Some("compact"));
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_pipeline_under_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let artifacts = generate(TABLE).unwrap();
    assert!(!artifacts.diagram.bytes.is_empty());
    assert!(!artifacts.report.bytes.is_empty());
}

#[test]
fn test_parse_failure_under_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .set_default();

    assert!(parse(r#"[{"Equipo": "T1"}]"#).is_err());
}
