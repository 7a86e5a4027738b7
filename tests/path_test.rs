//! Integration tests for failure path construction and rendering.

use yamlshape::{ErrorCode, ErrorPath, PathSegment, Schema, SchemaError, Validator};

fn doc(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn test_rendering_quotes_keys_and_leaves_indices_bare() {
    let path = ErrorPath::root()
        .push_key("domain")
        .push_index(1)
        .push_key("email");

    assert_eq!(path.to_string(), "\"email\" -> 1 -> \"domain\"");
}

#[test]
fn test_root_path_renders_empty() {
    assert_eq!(ErrorPath::root().to_string(), "");
}

#[test]
fn test_error_message_omits_empty_path() {
    let err = SchemaError::new(ErrorCode::Required, "value is required");
    assert_eq!(err.to_string(), "value is required");
}

#[test]
fn test_error_message_appends_rendered_path() {
    let err = SchemaError::new(ErrorCode::Required, "value is required")
        .at_index(2)
        .at_key("jobs");
    assert_eq!(err.to_string(), "value is required at \"jobs\" -> 2");
}

#[test]
fn test_deeply_nested_failure_renders_root_to_leaf() {
    let validator = Validator::new(Schema::object().field(
        "email",
        Schema::array(
            Schema::object()
                .field("id", Schema::string())
                .field("domain", Schema::string()),
        ),
    ));

    let err = validator
        .transform(&doc("email:\n  - id: a\n    domain: b\n  - id: c"))
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Required);
    assert_eq!(err.path.to_string(), "\"email\" -> 1 -> \"domain\"");

    // The raw segments stay available, innermost first.
    let segments: Vec<_> = err.path.segments().collect();
    assert_eq!(
        segments,
        [
            &PathSegment::Key("domain".to_string()),
            &PathSegment::Index(1),
            &PathSegment::Key("email".to_string()),
        ]
    );
}

#[test]
fn test_sibling_union_branches_do_not_share_paths() {
    // Two failing object candidates: only the surviving (last) error's
    // path reaches the caller, and it holds exactly its own route.
    let validator = Validator::new(
        Schema::object()
            .field("first", Schema::number())
            .or(Schema::object().field("second", Schema::number())),
    );

    let err = validator.transform(&doc("{}")).unwrap_err();
    assert_eq!(err.path.to_string(), "\"second\"");
}
