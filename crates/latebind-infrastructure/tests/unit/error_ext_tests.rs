//! Tests for the error context extension

use latebind_domain::Error;
use latebind_infrastructure::ErrorContext;

fn failing() -> Result<u8, std::num::ParseIntError> {
    "x".parse::<u8>()
}

#[test]
fn test_context_maps_to_internal() {
    let err = failing().context("Parsing id").unwrap_err();

    assert!(matches!(err, Error::Internal { .. }));
    assert!(err.to_string().contains("Parsing id: invalid digit"));
}

#[test]
fn test_typed_contexts() {
    assert!(matches!(
        failing().io_context("read").unwrap_err(),
        Error::Io { .. }
    ));
    assert!(matches!(
        failing().config_context("config").unwrap_err(),
        Error::Configuration { .. }
    ));
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let value = "7"
        .parse::<u8>()
        .with_context(|| {
            evaluated = true;
            "never"
        })
        .unwrap();

    assert_eq!(value, 7);
    assert!(!evaluated);
}
