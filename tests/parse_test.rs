//! End-to-end tests: parse raw text and transform it in one call.

use serde_json::{json, Value};
use yamlshape::{Error, ErrorCode, Schema, Validator};

/// A person document exercising every schema kind but wildcard.
fn person_validator() -> Validator {
    Validator::new(
        Schema::object()
            .field(
                "name",
                Schema::object()
                    .field("first-name", Schema::string())
                    .field("second-name", Schema::string()),
            )
            .field("has-phone", Schema::boolean())
            .field(
                "phone",
                Schema::object()
                    .field("country", Schema::number())
                    .field("area", Schema::number())
                    .field("number", Schema::number()),
            )
            .field("job", Schema::array(Schema::choices(["Teacher", "Driver"])))
            .field(
                "address",
                Schema::object()
                    .field("country", Schema::string())
                    .field("state", Schema::string())
                    .field("city", Schema::string()),
            )
            .field(
                "email",
                Schema::array(
                    Schema::object()
                        .field("id", Schema::string())
                        .field("domain", Schema::string()),
                ),
            ),
    )
}

const VALID: &str = "\
name:
  first-name: Andrew
  second-name: Pablo
has-phone: true
phone:
  country: 1
  area: 415
  number: 7323156
job:
  - Teacher
  - Driver
address:
  country: USA
  state: California
  city: San Francisco
email:
  - id: andrew1email135
    domain: ymail.com
  - id: andrew2email531
    domain: gmail.com
";

const INVALID: &str = "\
name:
  first-name: Andrew
  second-name: Pablo
has-phone: true
phone:
  country: 1
  area: 415
  number: 7323156
job:
  - Nope
  - Driver
address:
  country: USA
  state: California
  city: San Francisco
email: []
";

fn expected_person() -> Value {
    json!({
        "name": {
            "first-name": "Andrew",
            "second-name": "Pablo"
        },
        "has-phone": true,
        "phone": {
            "country": 1,
            "area": 415,
            "number": 7323156
        },
        "job": ["Teacher", "Driver"],
        "address": {
            "country": "USA",
            "state": "California",
            "city": "San Francisco"
        },
        "email": [
            {
                "id": "andrew1email135",
                "domain": "ymail.com"
            },
            {
                "id": "andrew2email531",
                "domain": "gmail.com"
            }
        ]
    })
}

#[test]
fn test_valid_document_transforms_completely() {
    let validator = person_validator();

    let value = validator.parse(VALID).unwrap();
    assert_eq!(value, expected_person());
}

#[test]
fn test_invalid_document_reports_code_and_path() {
    let validator = person_validator();

    let err = match validator.parse(INVALID) {
        Err(Error::Schema(err)) => err,
        other => panic!("expected a schema error, got {other:?}"),
    };

    assert_eq!(err.code, ErrorCode::ChoiceDoesntExist);
    assert_eq!(err.code.as_str(), "CHOICE_DOESNT_EXIST");
    assert_eq!(err.path.to_string(), "\"job\" -> 0");
    assert_eq!(
        err.to_string(),
        "value matches none of the declared choices at \"job\" -> 0"
    );
}

#[test]
fn test_reparsing_identical_text_is_deterministic() {
    let validator = person_validator();

    let first = validator.parse(VALID).unwrap();
    let second = validator.parse(VALID).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_text_is_a_document_error() {
    let validator = person_validator();

    let err = validator.parse("name: [unclosed").unwrap_err();
    assert!(matches!(err, Error::Document(_)));
    assert!(err.to_string().starts_with("malformed document"));
}

#[test]
fn test_null_document_against_defaulted_root() {
    let validator = Validator::new(Schema::object().default(json!({})));

    assert_eq!(validator.parse("~").unwrap(), json!({}));
}

#[test]
fn test_transform_with_overrides_the_root_schema() {
    let validator = person_validator();
    let node: serde_yaml::Value = serde_yaml::from_str("[1, 2, 3]").unwrap();

    let override_schema: yamlshape::SchemaSet = Schema::array(Schema::number()).into();
    let value = validator.transform_with(&node, &override_schema).unwrap();
    assert_eq!(value, json!([1, 2, 3]));
}

#[test]
fn test_validator_is_reusable_across_documents() {
    let validator = Validator::new(Schema::wildcard(Schema::number()));

    assert_eq!(validator.parse("a: 1").unwrap(), json!({"a": 1}));
    assert!(validator.parse("a: nope").is_err());
    assert_eq!(validator.parse("b: 2").unwrap(), json!({"b": 2}));
}
