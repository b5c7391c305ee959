//! Tests for the validation engine and its checks.

use super::{CheckRequest, ItemRule, ItemValidator, Platform, ValidationEngine};
use crate::test_support::write_temp_file;
use serde_json::{Value, json};

// =========================================================================
// Helper functions
// =========================================================================

fn is_positive(item: &Value) -> Result<bool, String> {
    item.as_f64()
        .map(|n| n > 0.0)
        .ok_or_else(|| "not a number".to_string())
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Assert the engine recorded exactly one error and return it.
fn single_error(engine: &ValidationEngine) -> &str {
    assert_eq!(engine.errors().len(), 1, "errors: {:?}", engine.errors());
    &engine.errors()[0]
}

// =========================================================================
// Text length and word count
// =========================================================================

#[test]
fn test_text_length_within_bounds() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_text_length(&json!("hello"), 1, Some(10)));
    assert!(engine.get_results().valid);
}

#[test]
fn test_text_length_too_short_mentions_minimum() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_text_length(&json!("hello"), 10, None));

    let error = single_error(&engine);
    assert_eq!(error, "Text too short: 5 characters (minimum: 10)");
}

#[test]
fn test_text_length_too_long() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_text_length(&json!("hello world"), 0, Some(5)));
    assert_eq!(
        single_error(&engine),
        "Text too long: 11 characters (maximum: 5)"
    );
}

#[test]
fn test_text_length_counts_characters_not_bytes() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_text_length(&json!("héllo"), 5, Some(5)));
}

#[test]
fn test_text_length_rejects_non_string() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_text_length(&json!(42), 0, None));
    assert_eq!(single_error(&engine), "Input must be a string");
}

#[test]
fn test_word_count_bounds() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_word_count(&json!("  one two\tthree\n"), 3, Some(3)));
    assert!(!engine.validate_word_count(&json!("one two"), 3, None));
    assert!(!engine.validate_word_count(&json!("one two three four"), 0, Some(2)));

    assert_eq!(
        engine.errors(),
        [
            "Too few words: 2 (minimum: 3)",
            "Too many words: 4 (maximum: 2)"
        ]
    );
}

// =========================================================================
// Formats
// =========================================================================

#[test]
fn test_email_format() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_email(&json!("user@example.com")));
    assert!(engine.validate_email(&json!("first.last+tag@sub.example.co")));
    assert!(engine.is_valid());

    assert!(!engine.validate_email(&json!("not-an-email")));
    assert_eq!(single_error(&engine), "Invalid email format: not-an-email");
}

#[test]
fn test_email_requires_alphabetic_tld() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_email(&json!("user@example.c")));
    assert!(!engine.validate_email(&json!("user@example.123")));
    assert!(!engine.validate_email(&json!("user@@example.com")));
    assert_eq!(engine.errors().len(), 3);
}

#[test]
fn test_url_format() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_url(&json!("https://example.com/path?q=1")));
    assert!(engine.validate_url(&json!("ftp://files.example.org")));

    assert!(!engine.validate_url(&json!("example.com")));
    assert!(!engine.validate_url(&json!("mailto:user@example.com")));
    assert!(!engine.validate_url(&json!("http://")));

    assert_eq!(engine.errors()[0], "Invalid URL format: example.com");
    assert_eq!(engine.errors().len(), 3);
}

#[test]
fn test_json_format() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_json(&json!(r#"{"a":1}"#)));
    assert!(engine.validate_json(&json!("[1, 2, 3]")));

    assert!(!engine.validate_json(&json!("{bad}")));
    assert!(single_error(&engine).starts_with("Invalid JSON: "));
}

#[test]
fn test_json_type_mismatch_is_distinct_from_parse_error() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_json(&json!({"a": 1})));
    assert_eq!(single_error(&engine), "JSON input must be a string");
}

#[test]
fn test_date_format_default_pattern() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_date_format(&json!("2024-02-29"), "%Y-%m-%d"));
    assert!(!engine.validate_date_format(&json!("29/02/2024"), "%Y-%m-%d"));
    assert!(single_error(&engine).starts_with("Invalid date format: "));
}

#[test]
fn test_date_format_rejects_impossible_dates() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_date_format(&json!("2023-02-29"), "%Y-%m-%d"));
    assert!(!engine.validate_date_format(&json!("2024-13-01"), "%Y-%m-%d"));
    assert_eq!(engine.errors().len(), 2);
}

#[test]
fn test_date_format_custom_pattern() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_date_format(&json!("17/10/2026"), "%d/%m/%Y"));
    assert!(engine.validate_date_format(&json!("2026-10"), "%Y-%m"));
    assert!(engine.validate_date_format(&json!("2026-10-17 09:30"), "%Y-%m-%d %H:%M"));
    assert!(engine.is_valid());
}

// =========================================================================
// Files
// =========================================================================

#[test]
fn test_file_exists() {
    let (temp_dir, file) = write_temp_file("notes.md", "# Notes\n");

    let mut engine = ValidationEngine::new();
    assert!(engine.validate_file_exists(&json!(file.to_string_lossy())));
    assert!(engine.validate_file_exists(&json!(temp_dir.path().to_string_lossy())));

    let missing = temp_dir.path().join("missing.md");
    let missing = missing.to_string_lossy().to_string();
    assert!(!engine.validate_file_exists(&json!(missing)));
    assert_eq!(
        single_error(&engine),
        format!("File does not exist: {}", missing)
    );
}

#[test]
fn test_file_extension_is_case_insensitive() {
    let mut engine = ValidationEngine::new();
    let allowed = fields(&[".md", "txt"]);

    assert!(engine.validate_file_extension(&json!("docs/README.MD"), &allowed));
    assert!(engine.validate_file_extension(&json!("notes.txt"), &allowed));
    assert!(engine.is_valid());
}

#[test]
fn test_file_extension_rejects_other_extensions() {
    let mut engine = ValidationEngine::new();
    let allowed = fields(&[".md", ".txt"]);

    assert!(!engine.validate_file_extension(&json!("main.rs"), &allowed));
    assert_eq!(
        single_error(&engine),
        "Invalid file extension: .rs. Allowed: .md, .txt"
    );
}

#[test]
fn test_file_extension_missing_extension() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_file_extension(&json!("Makefile"), &fields(&["mk"])));
    assert_eq!(
        single_error(&engine),
        "Invalid file extension: (none). Allowed: mk"
    );
}

// =========================================================================
// Numbers and lists
// =========================================================================

#[test]
fn test_numeric_range() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_numeric_range(&json!(5), Some(1.0), Some(10.0)));
    assert!(engine.validate_numeric_range(&json!(2.5), None, None));
    assert!(engine.validate_numeric_range(&json!(10), Some(1.0), Some(10.0)));

    assert!(!engine.validate_numeric_range(&json!(0), Some(1.0), None));
    assert!(!engine.validate_numeric_range(&json!(12.5), None, Some(10.0)));

    assert_eq!(
        engine.errors(),
        [
            "Value too small: 0 (minimum: 1)",
            "Value too large: 12.5 (maximum: 10)"
        ]
    );
}

#[test]
fn test_numeric_range_rejects_non_numbers() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_numeric_range(&json!("5"), None, None));
    assert!(!engine.validate_numeric_range(&json!(true), None, None));
    assert_eq!(engine.errors(), ["Value must be numeric", "Value must be numeric"]);
}

#[test]
fn test_list_items_all_valid() {
    let mut engine = ValidationEngine::new();
    let validator: &ItemValidator = &is_positive;
    assert!(engine.validate_list_items(&json!([1, 2, 3]), Some(validator), 1, Some(5)));
    assert!(engine.is_valid());
}

#[test]
fn test_list_items_reports_first_failing_index() {
    let mut engine = ValidationEngine::new();
    let validator: &ItemValidator = &is_positive;
    assert!(!engine.validate_list_items(&json!([1, -2, -3]), Some(validator), 0, None));

    let error = single_error(&engine);
    assert_eq!(error, "Invalid item at index 1: -2");
}

#[test]
fn test_list_items_predicate_error_is_reported() {
    let mut engine = ValidationEngine::new();
    let validator: &ItemValidator = &is_positive;
    assert!(!engine.validate_list_items(&json!([1, "two"]), Some(validator), 0, None));
    assert_eq!(
        single_error(&engine),
        "Validation error for item at index 1: not a number"
    );
}

#[test]
fn test_list_items_count_bounds() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_list_items(&json!([]), None, 1, None));
    assert!(!engine.validate_list_items(&json!([1, 2, 3]), None, 0, Some(2)));
    assert_eq!(
        engine.errors(),
        [
            "Too few items: 0 (minimum: 1)",
            "Too many items: 3 (maximum: 2)"
        ]
    );
}

#[test]
fn test_list_items_count_checked_before_items() {
    let mut engine = ValidationEngine::new();
    let validator: &ItemValidator = &is_positive;
    assert!(!engine.validate_list_items(&json!([-1]), Some(validator), 2, None));
    assert_eq!(single_error(&engine), "Too few items: 1 (minimum: 2)");
}

#[test]
fn test_list_items_rejects_non_list() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_list_items(&json!({"a": 1}), None, 0, None));
    assert_eq!(single_error(&engine), "Input must be a list");
}

#[test]
fn test_item_rules() {
    assert_eq!(ItemRule::Positive.check(&json!(3)), Ok(true));
    assert_eq!(ItemRule::Positive.check(&json!(0)), Ok(false));
    assert!(ItemRule::Positive.check(&json!("3")).is_err());
    assert_eq!(ItemRule::NonNegative.check(&json!(0)), Ok(true));
    assert_eq!(ItemRule::Integer.check(&json!(2)), Ok(true));
    assert_eq!(ItemRule::Integer.check(&json!(2.5)), Ok(false));
    assert_eq!(ItemRule::NonEmpty.check(&json!("  ")), Ok(false));
    assert_eq!(ItemRule::NonEmpty.check(&json!(null)), Ok(false));
    assert_eq!(ItemRule::NonEmpty.check(&json!([0])), Ok(true));
    assert_eq!(ItemRule::String.check(&json!(1)), Ok(false));
    assert_eq!(ItemRule::Email.check(&json!("a@b.io")), Ok(true));
    assert_eq!(ItemRule::Url.check(&json!("nope")), Ok(false));
}

// =========================================================================
// Mappings
// =========================================================================

#[test]
fn test_required_fields_reports_missing() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_required_fields(&json!({"name": "x"}), &fields(&["name", "phases"])));
    assert_eq!(single_error(&engine), "Missing required fields: phases");
}

#[test]
fn test_required_fields_treats_null_as_missing_and_sorts() {
    let mut engine = ValidationEngine::new();
    let data = json!({"name": null, "id": 1});
    assert!(!engine.validate_required_fields(&data, &fields(&["zeta", "name", "id", "alpha"])));
    assert_eq!(
        single_error(&engine),
        "Missing required fields: alpha, name, zeta"
    );
}

#[test]
fn test_required_fields_all_present() {
    let mut engine = ValidationEngine::new();
    let data = json!({"name": "x", "phases": [], "extra": false});
    assert!(engine.validate_required_fields(&data, &fields(&["name", "phases"])));
}

#[test]
fn test_required_fields_rejects_non_mapping() {
    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_required_fields(&json!(["name"]), &fields(&["name"])));
    assert_eq!(single_error(&engine), "Data must be a dictionary");
}

#[test]
fn test_workflow_config_valid() {
    let mut engine = ValidationEngine::new();
    let config = json!({
        "name": "content-pipeline",
        "phases": [{"name": "research"}, {"name": "draft", "agent": "writer"}]
    });
    assert!(engine.validate_workflow_config(&config));
    assert!(engine.is_valid());
}

#[test]
fn test_workflow_config_structural_failures() {
    let cases = [
        (json!("workflow"), "Workflow config must be a dictionary"),
        (json!({"name": "w"}), "Missing required fields: phases"),
        (
            json!({"name": "w", "phases": []}),
            "Workflow must have at least one phase",
        ),
        (
            json!({"name": "w", "phases": "draft"}),
            "Workflow must have at least one phase",
        ),
        (
            json!({"name": "w", "phases": [{"name": "a"}, "b"]}),
            "Phase 1 must be a dictionary",
        ),
        (
            json!({"name": "w", "phases": [{"agent": "writer"}]}),
            "Phase 0 missing 'name' field",
        ),
    ];

    for (config, expected) in cases {
        let mut engine = ValidationEngine::new();
        assert!(!engine.validate_workflow_config(&config), "{}", config);
        assert_eq!(single_error(&engine), expected);
    }
}

// =========================================================================
// Platform content
// =========================================================================

#[test]
fn test_platform_twitter_limit() {
    let content = json!("a".repeat(281));

    let mut engine = ValidationEngine::new();
    assert!(!engine.validate_platform_content(&content, "twitter"));
    assert_eq!(
        single_error(&engine),
        "Twitter content too long: 281 characters (max: 280)"
    );

    let mut engine = ValidationEngine::new();
    assert!(engine.validate_platform_content(&content, "conversation"));
}

#[test]
fn test_platform_names_are_case_insensitive() {
    assert_eq!(Platform::from_name("LinkedIn"), Some(Platform::LinkedIn));
    assert_eq!(Platform::from_name("X"), Some(Platform::Twitter));
    assert_eq!(Platform::from_name("CONVERSATION"), Some(Platform::Conversation));
    assert_eq!(Platform::from_name("mastodon"), None);
}

#[test]
fn test_platform_limits() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_platform_content(&json!("a".repeat(3000)), "linkedin"));
    assert!(!engine.validate_platform_content(&json!("a".repeat(3001)), "linkedin"));
    assert!(engine.validate_platform_content(&json!("a".repeat(40000)), "conversation"));
    assert!(!engine.validate_platform_content(&json!("a".repeat(40001)), "conversation"));
    assert_eq!(engine.errors().len(), 2);
    assert_eq!(
        engine.errors()[1],
        "Conversation content too long: 40001 characters (max: ~40000)"
    );
}

#[test]
fn test_platform_name_whitespace_is_not_stripped() {
    assert_eq!(Platform::from_name(" twitter"), None);

    let mut engine = ValidationEngine::new();
    assert!(engine.validate_platform_content(&json!("a".repeat(300)), " twitter"));
    assert!(engine.errors().is_empty());
    assert_eq!(engine.warnings().len(), 1);
}

#[test]
fn test_unknown_platform_is_valid_with_warning() {
    let mut engine = ValidationEngine::new();
    assert!(engine.validate_platform_content(&json!("a".repeat(100_000)), "mastodon"));

    let results = engine.get_results();
    assert!(results.valid);
    assert_eq!(
        results.warnings,
        vec!["Unrecognized platform 'mastodon': no length limit applied"]
    );
}

// =========================================================================
// Engine lifecycle
// =========================================================================

#[test]
fn test_errors_accumulate_across_checks_until_reset() {
    let mut engine = ValidationEngine::new();
    engine.validate_email(&json!("bad"));
    engine.validate_url(&json!("bad"));
    engine.validate_text_length(&json!("ok"), 1, None);

    let results = engine.get_results();
    assert!(!results.valid);
    assert_eq!(results.error_count, 2);

    engine.reset();
    let results = engine.get_results();
    assert!(results.valid);
    assert!(results.errors.is_empty());
    assert!(results.warnings.is_empty());
}

#[test]
fn test_result_serializes_in_documented_shape() {
    let mut engine = ValidationEngine::new();
    engine.validate_email(&json!("bad"));

    let value = serde_json::to_value(engine.get_results()).unwrap();
    assert_eq!(
        value,
        json!({
            "valid": false,
            "errors": ["Invalid email format: bad"],
            "warnings": [],
            "error_count": 1,
            "warning_count": 0
        })
    );
}

// =========================================================================
// Check requests
// =========================================================================

#[test]
fn test_check_request_from_pipeline_json() {
    let request: CheckRequest = serde_json::from_value(json!({
        "check": "text-length",
        "params": {"text": "hello", "min_length": 10}
    }))
    .unwrap();

    assert_eq!(request.name(), "text-length");
    let result = request.evaluate();
    assert!(!result.valid);
    assert!(result.errors[0].contains("minimum: 10"));
}

#[test]
fn test_check_request_keeps_wrong_types_for_the_check() {
    let request: CheckRequest = serde_json::from_value(json!({
        "check": "email",
        "params": {"email": 12}
    }))
    .unwrap();

    assert_eq!(request.evaluate().errors, vec!["Email must be a string"]);
}

#[test]
fn test_check_request_list_with_item_rule() {
    let request: CheckRequest = serde_json::from_value(json!({
        "check": "list",
        "params": {"items": [1, -2, 3], "item_rule": "positive"}
    }))
    .unwrap();

    let result = request.evaluate();
    assert_eq!(result.errors, vec!["Invalid item at index 1: -2"]);
}

#[test]
fn test_check_request_date_default_format() {
    let request = CheckRequest::Date {
        date: json!("17.10.2026"),
        format: None,
    }
    .with_default_date_format("%d.%m.%Y");

    assert!(request.evaluate().valid);
    assert!(matches!(request, CheckRequest::Date { format: Some(ref f), .. } if f == "%d.%m.%Y"));
}

#[test]
fn test_check_request_explicit_date_format_wins() {
    let request = CheckRequest::Date {
        date: json!("2026-10-17"),
        format: Some("%Y-%m-%d".to_string()),
    }
    .with_default_date_format("%d.%m.%Y");

    assert!(request.evaluate().valid);
}

#[test]
fn test_check_request_unknown_check_fails_to_parse() {
    let parsed = serde_json::from_value::<CheckRequest>(json!({
        "check": "telepathy",
        "params": {}
    }));
    assert!(parsed.is_err());
}

#[test]
fn test_check_request_missing_subject_fails_to_parse() {
    let parsed = serde_json::from_value::<CheckRequest>(json!({
        "check": "url",
        "params": {}
    }));
    assert!(parsed.is_err());
}
