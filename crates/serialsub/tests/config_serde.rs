#![allow(missing_docs)]

use serde::Deserialize;
use serialsub::{ReplaceOptions, ReplacementRule, RuleSet};

/// A migration config as a deployment script might keep it.
#[derive(Debug, Deserialize)]
struct Migration {
    #[serde(default)]
    options: ReplaceOptions,
    rules: Vec<ReplacementRule>,
}

#[test]
fn loads_rules_and_options_from_json() {
    let config: Migration = serde_json::from_str(
        r#"{
            "options": { "case_insensitive": true },
            "rules": [
                { "pattern": "http://old.test", "replacement": "https://new.test" },
                { "pattern": "Old Name", "replacement": "New Name" }
            ]
        }"#,
    )
    .unwrap();

    let rules = RuleSet::with_options(config.rules, config.options).unwrap();
    assert_eq!(
        rules.apply("HTTP://OLD.TEST by old name"),
        b"https://new.test by New Name"
    );
}

#[test]
fn options_default_when_absent() {
    let config: Migration =
        serde_json::from_str(r#"{ "rules": [{ "pattern": "a", "replacement": "" }] }"#).unwrap();
    assert_eq!(config.options, ReplaceOptions::default());
    assert_eq!(RuleSet::new(config.rules).unwrap().apply("banana"), b"bnn");
}

#[test]
fn unknown_option_is_rejected() {
    let err = serde_json::from_str::<ReplaceOptions>(r#"{ "regex": true }"#).unwrap_err();
    assert!(err.to_string().contains("regex"));
}

#[test]
fn empty_pattern_in_config_fails_validation() {
    let config: Migration =
        serde_json::from_str(r#"{ "rules": [{ "pattern": "", "replacement": "x" }] }"#).unwrap();
    assert!(RuleSet::new(config.rules).unwrap_err().is_invalid_argument());
}

#[test]
fn options_serialize_by_field_name() {
    let json = serde_json::to_string(&ReplaceOptions::default()).unwrap();
    assert_eq!(json, r#"{"case_insensitive":false}"#);
}
