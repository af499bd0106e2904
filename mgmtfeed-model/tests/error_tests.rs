use mgmtfeed_model::{SchemaError, ValueError, ValueType, parse_bool, parse_datetime, parse_float, parse_integer};

#[test]
fn error_display_unexpected_element() {
    let err = SchemaError::UnexpectedElement {
        expected: "{http://www.w3.org/2005/Atom}feed".into(),
        found: "{}rss".into(),
    };
    let msg = format!("{err}");
    assert!(msg.contains("unexpected element"));
    assert!(msg.contains("rss"));
}

#[test]
fn error_display_invalid_value() {
    let err = SchemaError::InvalidValue {
        element: "goal".into(),
        field: "value".into(),
        value: "abc".into(),
        expected: ValueType::Float,
    };
    assert_eq!(format!("{err}"), "invalid float value \"abc\" for goal.value");
}

#[test]
fn value_error_display() {
    let err = ValueError::new("maybe", ValueType::Bool);
    assert_eq!(format!("{err}"), "invalid boolean value \"maybe\"");
}

#[test]
fn scalar_parsers() {
    assert_eq!(parse_bool("true"), Ok(true));
    assert_eq!(parse_bool(" false "), Ok(false));
    assert!(parse_bool("TRUE").is_err());
    assert_eq!(parse_integer("-7"), Ok(-7));
    assert!(parse_integer("1.5").is_err());
    assert_eq!(parse_float("2.25"), Ok(2.25));
    assert!(parse_float("").is_err());
    assert!(parse_datetime("2009-10-01T12:00:00Z").is_ok());
    assert_eq!(
        parse_datetime("10/01/2009").unwrap_err().expected,
        ValueType::DateTime
    );
}
