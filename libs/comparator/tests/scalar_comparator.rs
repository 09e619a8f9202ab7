//! Acceptance and equality rules of the scalar comparator

use equate_comparator::{Comparator, ComparisonFailure, ComparisonOptions, ScalarComparator};
use equate_value::{DefaultExporter, Value};

mod test_support;

use test_support::{named, opaque};

fn accepts(expected: impl Into<Value>, actual: impl Into<Value>) -> bool {
    ScalarComparator::new().accepts(&expected.into(), &actual.into())
}

fn compare_with(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    options: ComparisonOptions,
) -> Result<(), ComparisonFailure> {
    ScalarComparator::new().assert_equals(
        &expected.into(),
        &actual.into(),
        &options,
        &DefaultExporter::new(),
    )
}

fn compare(expected: impl Into<Value>, actual: impl Into<Value>) -> Result<(), ComparisonFailure> {
    compare_with(expected, actual, ComparisonOptions::default())
}

fn ignoring_case() -> ComparisonOptions {
    ComparisonOptions::default().with_ignore_case(true)
}

fn failure_message(result: Result<(), ComparisonFailure>) -> String {
    result.expect_err("expected a comparison failure").message().to_string()
}

fn scalars_and_null() -> Vec<Value> {
    vec![
        Value::Null,
        Value::from(true),
        Value::from(false),
        Value::from(0),
        Value::from(-12),
        Value::from(1.5),
        Value::from(f64::NAN),
        Value::from(""),
        Value::from("abc"),
        Value::from("0"),
    ]
}

// ---------------------------------------------------------------------------
// accepts
// ---------------------------------------------------------------------------

#[test]
fn test_accepts_every_scalar_or_null_pair() {
    for expected in scalars_and_null() {
        for actual in scalars_and_null() {
            assert!(
                accepts(expected.clone(), actual.clone()),
                "{:?} / {:?} should be accepted",
                expected,
                actual
            );
        }
    }
}

#[test]
fn test_accepts_null() {
    assert!(accepts(Value::Null, Value::Null));
    assert!(accepts(Value::Null, 5));
    assert!(accepts("x", Value::Null));
}

#[test]
fn test_accepts_string_and_stringifiable_object_in_both_positions() {
    assert!(accepts("foo", named("foo")));
    assert!(accepts(named("foo"), "foo"));
    assert!(accepts("", named("anything")));
}

#[test]
fn test_rejects_composites() {
    let array = Value::array([Value::from(1)]);
    assert!(!accepts(array.clone(), 1));
    assert!(!accepts(1, array.clone()));
    assert!(!accepts(array.clone(), "Array"));
    assert!(!accepts(Value::Null, array));
}

#[test]
fn test_rejects_objects_outside_string_pairs() {
    assert!(!accepts("foo", opaque()));
    assert!(!accepts(opaque(), "foo"));
    assert!(!accepts(named("1"), 1));
    assert!(!accepts(1, named("1")));
    assert!(!accepts(Value::Null, named("")));
    assert!(!accepts(named("a"), named("a")));
}

#[test]
fn test_accepts_ignores_content() {
    // acceptance depends on kinds only
    assert_eq!(accepts("a", "b"), accepts("a", "a"));
    assert_eq!(accepts(1, 2), accepts(1, 1));
    assert_eq!(accepts("x", named("y")), accepts("x", named("x")));
}

// ---------------------------------------------------------------------------
// string pairs
// ---------------------------------------------------------------------------

#[test]
fn test_equal_strings_pass() {
    assert!(compare("Foo", "Foo").is_ok());
    assert!(compare("", "").is_ok());
}

#[test]
fn test_string_mismatch_reports_exported_strings() {
    let failure = compare("Foo", "foo").expect_err("case differs");

    assert_eq!(failure.message(), "Failed asserting that two strings are equal.");
    assert_eq!(failure.expected_as_string(), "'Foo'");
    assert_eq!(failure.actual_as_string(), "'foo'");
    assert!(!failure.identical());
    assert_eq!(failure.expected().as_str(), Some("Foo"));
    assert_eq!(failure.actual().as_str(), Some("foo"));
}

#[test]
fn test_ignore_case() {
    assert!(compare_with("Foo", "foo", ignoring_case()).is_ok());
    assert!(compare_with("ÄPFEL", "äpfel", ignoring_case()).is_ok());
    assert!(compare_with("STRASSE", "straße", ignoring_case()).is_err());
    assert!(compare_with("Foo", "bar", ignoring_case()).is_err());
}

#[test]
fn test_ignore_case_mismatch_reports_original_strings() {
    let failure = compare_with("Foo", "Bar", ignoring_case()).expect_err("different words");
    assert_eq!(failure.expected_as_string(), "'Foo'");
    assert_eq!(failure.actual_as_string(), "'Bar'");
}

#[test]
fn test_numeric_strings_compare_strictly() {
    // both originals are strings, so numeric equivalence does not help
    assert_eq!(
        failure_message(compare("1", "1.0")),
        "Failed asserting that two strings are equal."
    );
    assert_eq!(
        failure_message(compare("1e3", "1000")),
        "Failed asserting that two strings are equal."
    );
}

#[test]
fn test_multiline_string_failure_has_diff() {
    let failure = compare("line\nexpected", "line\nactual").expect_err("differs");
    assert_eq!(
        failure.diff().as_deref(),
        Some("--- Expected\n+++ Actual\n@@ @@\n 'line\\n\n-expected'\n+actual'\n")
    );
}

// ---------------------------------------------------------------------------
// mixed scalar pairs
// ---------------------------------------------------------------------------

#[test]
fn test_number_against_non_numeric_string_fails() {
    let failure = compare(0, "abc").expect_err("0 is not 'abc'");

    assert_eq!(
        failure.message(),
        "Failed asserting that 'abc' matches expected 0."
    );
    assert_eq!(failure.expected_as_string(), "");
    assert_eq!(failure.actual_as_string(), "");
    assert!(failure.diff().is_none());
    assert!(matches!(failure.expected(), Value::Int(0)));
}

#[test]
fn test_non_numeric_string_against_number_fails() {
    assert_eq!(
        failure_message(compare("abc", 0)),
        "Failed asserting that 0 matches expected 'abc'."
    );
}

#[test]
fn test_number_against_numeric_string() {
    assert!(compare(1, "1").is_ok());
    assert!(compare("1", 1).is_ok());
    assert!(compare(10, "1e1").is_ok());
    assert!(compare(1.5, "1.5").is_ok());
    assert!(compare(1.0, "1").is_ok());
    assert!(compare(" 7", 7).is_ok());
    assert!(compare(2, "3").is_err());
}

#[test]
fn test_integer_against_overflowed_integer_string_fails() {
    assert_eq!(
        failure_message(compare(i64::MAX, "9223372036854775808")),
        "Failed asserting that '9223372036854775808' matches expected 9223372036854775807."
    );
    assert!(compare(i64::MIN, "-9223372036854775809").is_err());
}

#[test]
fn test_overflowed_integers_are_not_rounded_together() {
    assert!(compare(named("9223372036854775808"), "9223372036854775809").is_err());
    assert!(compare(named("9223372036854775808"), "9223372036854775808").is_ok());
    assert!(compare(named("1e999"), "1e1000").is_err());
}

#[test]
fn test_float_is_cast_with_fourteen_digits() {
    assert!(compare(0.1 + 0.2, "0.3").is_ok());
    assert_eq!(
        failure_message(compare(0.1 + 0.2, 0.3)),
        "Failed asserting that 0.3 matches expected 0.30000000000000004."
    );
}

#[test]
fn test_numbers() {
    assert!(compare(1, 1).is_ok());
    assert!(compare(1, 1.0).is_ok());
    assert!(compare(-0.0, 0.0).is_ok());
    assert_eq!(
        failure_message(compare(1, 2)),
        "Failed asserting that 2 matches expected 1."
    );
    assert_eq!(
        failure_message(compare(1.0, 1.5)),
        "Failed asserting that 1.5 matches expected 1.0."
    );
    assert!(compare(f64::NAN, f64::NAN).is_err());
}

#[test]
fn test_delta_and_canonicalize_are_ignored() {
    let options = ComparisonOptions::default()
        .with_delta(10.0)
        .with_canonicalize(true);
    assert!(compare_with(1, 2, options).is_err());
    assert!(compare_with(1, 1, options).is_ok());
}

// ---------------------------------------------------------------------------
// booleans
// ---------------------------------------------------------------------------

#[test]
fn test_boolean_against_string_uses_truthiness() {
    assert!(compare(true, "1").is_ok());
    assert!(compare("1", true).is_ok());
    assert!(compare(true, "abc").is_ok());
    assert!(compare(false, "").is_ok());
    assert!(compare(false, "0").is_ok());
    assert_eq!(
        failure_message(compare(true, "0")),
        "Failed asserting that '0' matches expected true."
    );
    assert_eq!(
        failure_message(compare("", true)),
        "Failed asserting that true matches expected ''."
    );
}

#[test]
fn test_booleans_against_numbers() {
    assert!(compare(true, 5).is_ok());
    assert!(compare(false, 0.0).is_ok());
    assert!(compare(true, false).is_err());
    assert_eq!(
        failure_message(compare(false, 1)),
        "Failed asserting that 1 matches expected false."
    );
}

// ---------------------------------------------------------------------------
// null
// ---------------------------------------------------------------------------

#[test]
fn test_null() {
    assert!(compare(Value::Null, Value::Null).is_ok());
    assert!(compare(Value::Null, "").is_ok());
    assert!(compare(Value::Null, 0).is_ok());
    assert!(compare(Value::Null, false).is_ok());
    assert_eq!(
        failure_message(compare(Value::Null, 5)),
        "Failed asserting that 5 matches expected null."
    );
    assert_eq!(
        failure_message(compare("null", Value::Null)),
        "Failed asserting that null matches expected 'null'."
    );
}

// ---------------------------------------------------------------------------
// stringifiable objects
// ---------------------------------------------------------------------------

#[test]
fn test_stringifiable_object_against_string() {
    assert!(compare(named("foo"), "foo").is_ok());
    assert!(compare("foo", named("foo")).is_ok());
    assert!(compare_with(named("FOO"), "foo", ignoring_case()).is_ok());
}

#[test]
fn test_stringifiable_object_mismatch_exports_the_object() {
    let failure = compare("foo", named("bar")).expect_err("bar is not foo");
    assert_eq!(
        failure.message(),
        "Failed asserting that Named Object (\n    'name' => 'bar',\n) matches expected 'foo'."
    );
    assert!(failure.diff().is_none());
}

// ---------------------------------------------------------------------------
// contract
// ---------------------------------------------------------------------------

#[test]
fn test_assert_equals_is_idempotent() {
    let comparator = ScalarComparator::new();
    let exporter = DefaultExporter::new();
    let options = ComparisonOptions::default();
    let pairs = [
        (Value::from("Foo"), Value::from("foo")),
        (Value::from(0), Value::from("abc")),
        (Value::from(true), Value::from("1")),
    ];

    for (expected, actual) in &pairs {
        let first = comparator.assert_equals(expected, actual, &options, &exporter);
        let second = comparator.assert_equals(expected, actual, &options, &exporter);
        match (first, second) {
            (Ok(()), Ok(())) => {}
            (Err(a), Err(b)) => {
                assert_eq!(a.message(), b.message());
                assert_eq!(a.expected_as_string(), b.expected_as_string());
                assert_eq!(a.actual_as_string(), b.actual_as_string());
            }
            (first, second) => panic!("outcomes differ: {:?} vs {:?}", first, second),
        }
    }
}

#[test]
fn test_inputs_are_not_modified() {
    let expected = Value::from("MiXeD");
    let actual = Value::from("mixed");
    ScalarComparator::new()
        .assert_equals(&expected, &actual, &ignoring_case(), &DefaultExporter::new())
        .expect("equal ignoring case");
    assert_eq!(expected.as_str(), Some("MiXeD"));
    assert_eq!(actual.as_str(), Some("mixed"));
}
