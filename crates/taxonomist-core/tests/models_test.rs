use taxonomist_core::models::*;

#[test]
fn indicator_fields_keep_collection_order() {
    let keys: Vec<&str> = IndicatorField::ALL.iter().map(|f| f.form_key()).collect();
    assert_eq!(
        keys,
        vec![
            "unemploymentRate",
            "personalConsumption",
            "governmentExpenditure",
            "m1",
            "m2",
            "federalDebt"
        ]
    );
    for (i, field) in IndicatorField::ALL.iter().enumerate() {
        assert_eq!(field.index(), i);
    }
    assert_eq!(
        IndicatorField::ALL.len(),
        taxonomist_core::constants::INDICATOR_COUNT
    );
}

#[test]
fn indicator_field_parses_form_keys_only() {
    assert_eq!(
        "federalDebt".parse::<IndicatorField>().unwrap(),
        IndicatorField::FederalDebt
    );
    assert!("federal_debt".parse::<IndicatorField>().is_err());
    assert!("M1".parse::<IndicatorField>().is_err());
}

#[test]
fn indicator_labels_match_form() {
    assert_eq!(
        IndicatorField::UnemploymentRate.display_label(),
        "Unemployment Rate (%)"
    );
    assert_eq!(
        IndicatorField::FederalDebt.display_label(),
        "Federal Debt (₹ Crores)"
    );
    assert_eq!(IndicatorField::M2.display_label(), "M2");
    assert_eq!(
        IndicatorField::PersonalConsumption.placeholder(),
        "Enter personal consumption"
    );
    assert_eq!(IndicatorField::UnemploymentRate.step(), "0.1");
    assert_eq!(IndicatorField::M1.step(), "1");
}

#[test]
fn parse_indicator_is_strict() {
    assert_eq!(parse_indicator("5"), Some(5.0));
    assert_eq!(parse_indicator("  -2.5 "), Some(-2.5));
    assert_eq!(parse_indicator("1e3"), Some(1000.0));
    assert_eq!(parse_indicator(".5"), Some(0.5));
    assert_eq!(parse_indicator(""), None);
    assert_eq!(parse_indicator("   "), None);
    assert_eq!(parse_indicator("12abc"), None);
    assert_eq!(parse_indicator("NaN"), None);
    assert_eq!(parse_indicator("inf"), None);
    assert_eq!(parse_indicator("1,000"), None);
}

#[test]
fn indicator_set_starts_empty() {
    let set = IndicatorSet::new();
    assert!(set.iter().all(|(_, v)| v.is_empty()));
    assert!(set.has_empty());
}

#[test]
fn indicator_set_serializes_with_form_keys_in_order() {
    let set = IndicatorSet::new()
        .with(IndicatorField::UnemploymentRate, "5")
        .with(IndicatorField::M1, "200");
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(
        json,
        r#"{"unemploymentRate":"5","personalConsumption":"","governmentExpenditure":"","m1":"200","m2":"","federalDebt":""}"#
    );
}

#[test]
fn payload_uses_service_field_names() {
    let set = IndicatorSet::new()
        .with(IndicatorField::UnemploymentRate, "5")
        .with(IndicatorField::PersonalConsumption, "1000")
        .with(IndicatorField::GovernmentExpenditure, "500")
        .with(IndicatorField::M1, "200")
        .with(IndicatorField::M2, "400")
        .with(IndicatorField::FederalDebt, "300");
    let payload = PredictionPayload::try_from(&set).unwrap();
    let value = serde_json::to_value(payload).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "unemployment_rate": 5.0,
            "personal_consumption": 1000.0,
            "govt_expenditure": 500.0,
            "m1_money_supply": 200.0,
            "m2_money_supply": 400.0,
            "federal_debt": 300.0
        })
    );
    for field in IndicatorField::ALL {
        assert!(value.get(field.payload_key()).is_some());
    }
}

#[test]
fn payload_rejects_first_non_numeric_field() {
    let set = IndicatorSet::new()
        .with(IndicatorField::UnemploymentRate, "5")
        .with(IndicatorField::PersonalConsumption, "lots")
        .with(IndicatorField::GovernmentExpenditure, "500")
        .with(IndicatorField::M1, "x")
        .with(IndicatorField::M2, "400")
        .with(IndicatorField::FederalDebt, "300");
    let err = PredictionPayload::try_from(&set).unwrap_err();
    assert_eq!(err.field(), IndicatorField::PersonalConsumption);
}

#[test]
fn prediction_source_is_tagged_not_inferred() {
    let p = Prediction::new(14000.0, PredictionSource::Prediction);
    assert!(!p.is_fallback());
    assert_eq!(p.source.label(), "AI Prediction");

    assert_eq!(PredictionSource::from_tag("Fallback"), PredictionSource::Fallback);
    assert_eq!(PredictionSource::from_tag("xgboost"), PredictionSource::Prediction);
    assert_eq!(PredictionSource::Fallback.label(), "Fallback calculation");
}

#[test]
fn crores_display_groups_thousands() {
    let p = Prediction::new(14000.0, PredictionSource::Prediction);
    assert_eq!(p.display_crores(), "₹14,000 Crores");
    assert_eq!(group_thousands(1234567.891), "1,234,567.891");
    assert_eq!(group_thousands(999.5), "999.5");
    assert_eq!(group_thousands(-2500.0), "-2,500");
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(0.00001), "0");
}

#[test]
fn snapshot_defaults_to_idle() {
    let snap = SessionSnapshot::default();
    assert!(snap.result.is_none());
    assert!(snap.error.is_none());
    assert!(!snap.loading);
    assert_eq!(snap.result_value(), None);
}
