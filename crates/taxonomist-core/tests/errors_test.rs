use taxonomist_core::errors::*;
use taxonomist_core::models::IndicatorField;

#[test]
fn validation_messages_are_user_facing() {
    let missing = ValidationError::MissingField {
        field: IndicatorField::M2,
    };
    assert_eq!(missing.to_string(), "All fields are required.");

    let nan = ValidationError::NotANumber {
        field: IndicatorField::M1,
    };
    assert_eq!(nan.to_string(), "All values must be numbers.");

    let range = ValidationError::UnemploymentOutOfRange { value: 100.1 };
    assert_eq!(
        range.to_string(),
        "Unemployment rate must be between 0 and 100."
    );
    assert_eq!(range.field(), IndicatorField::UnemploymentRate);
}

#[test]
fn service_error_displays_only_the_message() {
    let err: TaxonomistError = ServiceError::Rejected {
        status: 422,
        message: "bad input".into(),
    }
    .into();
    assert_eq!(err.user_message(), "bad input");
    assert!(err.is_retryable());
}

#[test]
fn transport_error_carries_reason() {
    let err: TaxonomistError = TransportError::Network {
        reason: "connection refused".into(),
    }
    .into();
    let msg = err.user_message();
    assert!(msg.contains("connection refused"));
    assert!(matches!(err, TaxonomistError::Transport(_)));
}

#[test]
fn empty_message_falls_back_to_generic_text() {
    let err: TaxonomistError = ServiceError::Rejected {
        status: 500,
        message: String::new(),
    }
    .into();
    assert_eq!(
        err.user_message(),
        taxonomist_core::constants::GENERIC_FAILURE_MESSAGE
    );
}

#[test]
fn validation_error_converts_and_is_not_retryable() {
    let err: TaxonomistError = ValidationError::MissingField {
        field: IndicatorField::FederalDebt,
    }
    .into();
    assert!(matches!(err, TaxonomistError::Validation(_)));
    assert!(!err.is_retryable());
}

#[test]
fn unknown_field_names_the_field() {
    let err = TaxonomistError::UnknownField {
        name: "gdp".into(),
    };
    assert!(err.to_string().contains("gdp"));
}
