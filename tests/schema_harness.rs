use serde_json::json;

use spec_fetcher_mcp::handlers::{fetch_spec_input_schema, list_specs_input_schema};
use spec_fetcher_mcp::schema::{validate_value, SchemaValidationError};

#[test]
fn fetch_spec_schema_accepts_a_name() {
    validate_value(&fetch_spec_input_schema(), &json!({ "name": "onboarding" }))
        .expect("schema validation failed");
}

#[test]
fn fetch_spec_schema_rejects_missing_or_mistyped_name() {
    for instance in [json!({}), json!({ "name": 3 }), json!("onboarding")] {
        let err = validate_value(&fetch_spec_input_schema(), &instance).unwrap_err();
        assert!(
            matches!(err, SchemaValidationError::ValidationFailed(ref msg) if !msg.is_empty()),
            "{instance} should fail validation"
        );
    }
}

#[test]
fn list_specs_schema_accepts_empty_object() {
    validate_value(&list_specs_input_schema(), &json!({})).expect("schema validation failed");
}

#[test]
fn advertised_schemas_are_valid_json_schema() {
    let meta_checked = [list_specs_input_schema(), fetch_spec_input_schema()];
    for schema in meta_checked {
        assert!(jsonschema::validator_for(&schema).is_ok(), "{schema} must compile");
    }
}
