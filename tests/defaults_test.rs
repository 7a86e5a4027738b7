//! Integration tests for defaulting and required-value handling.

use serde_json::json;
use yamlshape::{ErrorCode, Schema, SchemaError, Validator};

fn doc(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).unwrap()
}

fn failure(validator: &Validator, text: &str) -> SchemaError {
    validator.transform(&doc(text)).unwrap_err()
}

#[test]
fn test_null_root_takes_default() {
    let validator = Validator::new(Schema::string().default("fallback"));

    assert_eq!(validator.transform(&doc("~")).unwrap(), json!("fallback"));
}

#[test]
fn test_default_is_returned_verbatim_without_validation() {
    // The default does not have to satisfy the schema's own constraints,
    // or even its type.
    let validator = Validator::new(Schema::number().min(10.0).default(1));
    assert_eq!(validator.transform(&doc("~")).unwrap(), json!(1));

    let validator = Validator::new(Schema::string().default(json!(["not", "a", "string"])));
    assert_eq!(
        validator.transform(&doc("~")).unwrap(),
        json!(["not", "a", "string"])
    );
}

#[test]
fn test_null_without_default_is_required() {
    let validator = Validator::new(Schema::string());

    let err = failure(&validator, "~");
    assert_eq!(err.code, ErrorCode::Required);
    assert!(err.path.is_empty());
    assert_eq!(err.to_string(), "value is required");
}

#[test]
fn test_required_inside_container_accumulates_path() {
    let validator = Validator::new(
        Schema::object().field("server", Schema::object().field("port", Schema::number())),
    );

    let err = failure(&validator, "server: {}");
    assert_eq!(err.code, ErrorCode::Required);
    assert_eq!(err.path.to_string(), "\"server\" -> \"port\"");
    assert_eq!(
        err.to_string(),
        "value is required at \"server\" -> \"port\""
    );
}

#[test]
fn test_first_default_in_union_wins() {
    let validator = Validator::new(
        Schema::number()
            .or(Schema::string().default("second"))
            .or(Schema::boolean().default(true)),
    );

    // The first alternative carries no default, so the scan settles on the
    // second.
    assert_eq!(validator.transform(&doc("~")).unwrap(), json!("second"));
}

#[test]
fn test_union_without_defaults_is_required() {
    let validator = Validator::new(Schema::number().or(Schema::string()));

    let err = failure(&validator, "~");
    assert_eq!(err.code, ErrorCode::Required);
}

#[test]
fn test_explicit_null_prop_takes_default() {
    // An explicit null and an absent key behave identically.
    let validator = Validator::new(
        Schema::object()
            .field("a", Schema::number().default(7))
            .field("b", Schema::number().default(8)),
    );

    let value = validator.transform(&doc("a: ~")).unwrap();
    assert_eq!(value, json!({"a": 7, "b": 8}));
}

#[test]
fn test_null_array_element_takes_element_default() {
    let validator = Validator::new(Schema::array(Schema::number().default(0)));

    let value = validator.transform(&doc("- 1\n- ~\n- 3")).unwrap();
    assert_eq!(value, json!([1, 0, 3]));
}

#[test]
fn test_container_defaults_apply_to_absent_containers() {
    let validator = Validator::new(
        Schema::object().field("tags", Schema::array(Schema::string()).default(json!([]))),
    );

    let value = validator.transform(&doc("{}")).unwrap();
    assert_eq!(value, json!({"tags": []}));
}
