//! Id Conversion Tests
//!
//! Tests verify permissive conversion and the exact/lenient distinction.

use nanodb::protocol::{permissive_i32, ParsedId};

#[test]
fn test_exact_ids() {
    assert_eq!(ParsedId::parse("42"), ParsedId::Exact(42));
    assert_eq!(ParsedId::parse("-7"), ParsedId::Exact(-7));
    assert_eq!(ParsedId::parse("+5"), ParsedId::Exact(5));
    assert_eq!(ParsedId::parse("0"), ParsedId::Exact(0));
}

#[test]
fn test_trailing_garbage_keeps_leading_digits() {
    let id = ParsedId::parse("12abc");
    assert_eq!(id.value(), 12);
    assert!(!id.is_exact());
}

#[test]
fn test_no_digits_becomes_zero() {
    let id = ParsedId::parse("abc");
    assert_eq!(id.value(), 0);
    assert_eq!(
        id,
        ParsedId::Lenient {
            value: 0,
            token: "abc".to_string()
        }
    );
}

#[test]
fn test_zero_and_failure_are_distinguishable() {
    assert!(ParsedId::parse("0").is_exact());
    assert!(!ParsedId::parse("zero").is_exact());
    assert_eq!(ParsedId::parse("0").value(), ParsedId::parse("zero").value());
}

#[test]
fn test_overflow_saturates() {
    let id = ParsedId::parse("3000000000");
    assert_eq!(id.value(), i32::MAX);
    assert!(!id.is_exact());

    assert_eq!(permissive_i32("-3000000000"), i32::MIN);
}

#[test]
fn test_boundaries_are_exact() {
    assert_eq!(ParsedId::parse("2147483647"), ParsedId::Exact(i32::MAX));
    assert_eq!(ParsedId::parse("-2147483648"), ParsedId::Exact(i32::MIN));
}

#[test]
fn test_display_shows_value() {
    assert_eq!(ParsedId::parse("7up").to_string(), "7");
}
