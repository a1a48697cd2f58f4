use proptest::prelude::*;
use taxonomist_core::errors::ValidationError;
use taxonomist_core::models::IndicatorField;
use taxonomist_core::traits::IValidator;
use taxonomist_validation::ValidationEngine;
use test_fixtures::{indicators, sample_indicators};

fn field_strategy() -> impl Strategy<Value = IndicatorField> {
    (0usize..6).prop_map(|i| IndicatorField::ALL[i])
}

fn raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1e9f64..1e9).prop_map(|v| v.to_string()),
        "[a-z ]{0,8}",
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn any_empty_field_is_required(
        field in field_strategy(),
        others in proptest::collection::vec(raw_value(), 6),
    ) {
        let mut set = indicators([
            others[0].as_str(),
            others[1].as_str(),
            others[2].as_str(),
            others[3].as_str(),
            others[4].as_str(),
            others[5].as_str(),
        ]);
        set.set(field, "");
        let result = ValidationEngine::new().validate(&set);
        prop_assert!(matches!(result, Err(ValidationError::MissingField { .. })), "{:?}", result);
    }

    #[test]
    fn garbage_in_complete_set_is_not_a_number(
        field in field_strategy(),
        garbage in "[a-z]{1,8}",
        rate in -50.0f64..150.0,
    ) {
        prop_assume!(garbage.parse::<f64>().is_err());
        let mut set = sample_indicators().with(IndicatorField::UnemploymentRate, rate.to_string());
        set.set(field, garbage);
        let result = ValidationEngine::new().validate(&set);
        prop_assert!(matches!(result, Err(ValidationError::NotANumber { .. })), "{:?}", result);
    }

    #[test]
    fn numeric_sets_pass_iff_rate_in_range(
        rate in -200.0f64..200.0,
        values in proptest::collection::vec(-1e12f64..1e12, 5),
    ) {
        let set = indicators([
            rate.to_string().as_str(),
            values[0].to_string().as_str(),
            values[1].to_string().as_str(),
            values[2].to_string().as_str(),
            values[3].to_string().as_str(),
            values[4].to_string().as_str(),
        ]);
        let result = ValidationEngine::new().validate(&set);
        if (0.0..=100.0).contains(&rate) {
            prop_assert!(result.is_ok());
        } else {
            let is_range_error = matches!(result, Err(ValidationError::UnemploymentOutOfRange { .. }));
            prop_assert!(is_range_error);
        }
    }
}
