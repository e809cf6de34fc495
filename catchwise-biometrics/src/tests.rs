//! Unit coverage for biometric tables and estimates.
#![forbid(unsafe_code)]

use std::sync::Arc;

use catchwise_core::{MeasurementError, Quantity, SpeciesTable};
use rstest::{fixture, rstest};

use crate::{BiometricEstimator, BiometricTables, FilletYield, LengthWeight, TableError};

#[fixture]
fn estimator() -> BiometricEstimator {
    BiometricEstimator::standard()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected approximately {expected}, got {actual}"
    );
}

#[rstest]
fn standard_tables_validate() {
    BiometricTables::standard()
        .validate()
        .expect("built-in tables validate");
}

#[rstest]
#[case(Some("Scomber japonicus"), 0.005, 3.15)]
#[case(Some("  TRICHIURUS LEPTURUS "), 0.0005, 3.4)]
#[case(Some("sebastes"), 0.01, 3.0)]
#[case(Some(""), 0.01, 3.0)]
#[case(None, 0.01, 3.0)]
fn coefficients_use_normalised_exact_names(
    estimator: BiometricEstimator,
    #[case] name: Option<&str>,
    #[case] a: f64,
    #[case] b: f64,
) {
    assert_eq!(estimator.coefficients(name), LengthWeight::new(a, b));
}

#[rstest]
fn default_law_is_a_cube(estimator: BiometricEstimator) {
    // 0.01 · 20³ g = 80 g.
    let kg = estimator.estimate_weight(None, 20.0).expect("valid length");
    assert_close(kg, 0.08);
}

#[rstest]
fn mackerel_weight_follows_its_coefficients(estimator: BiometricEstimator) {
    let kg = estimator
        .estimate_weight(Some("scomber japonicus"), 30.0)
        .expect("valid length");
    assert_close(kg, 0.005 * 30.0_f64.powf(3.15) / 1000.0);
}

#[rstest]
fn zero_length_weighs_nothing(estimator: BiometricEstimator) {
    assert_eq!(estimator.estimate_weight(Some("pagrus major"), 0.0), Ok(0.0));
}

#[rstest]
#[case(-1.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn invalid_lengths_are_rejected(estimator: BiometricEstimator, #[case] length_cm: f64) {
    assert!(matches!(
        estimator.estimate_weight(None, length_cm),
        Err(MeasurementError::Negative { .. } | MeasurementError::NotFinite { .. })
    ));
}

#[rstest]
fn overflowing_lengths_blame_the_length(estimator: BiometricEstimator) {
    let err = estimator
        .estimate_weight(None, 1.0e120)
        .expect_err("weight overflows");
    assert_eq!(
        err,
        MeasurementError::OutOfRange {
            quantity: Quantity::LengthCm,
            value: 1.0e120
        }
    );
    assert!(err.to_string().starts_with("length (cm)"));
    assert!(
        estimator
            .estimate_fillet_weight(Some("광어"), None, 1.0e120)
            .is_err()
    );
}

#[rstest]
#[case(Some("광어"), 0.48)]
#[case(Some(" 우럭 "), 0.30)]
#[case(Some("프리미엄광어"), 0.48)]
#[case(Some("갑오징어"), 0.60)]
#[case(Some("참문어"), 0.80)]
#[case(Some("연"), 0.65)]
#[case(Some("황새치"), 0.35)]
#[case(Some(""), 0.35)]
#[case(Some("   "), 0.35)]
#[case(None, 0.35)]
fn yields_resolve_by_name(
    estimator: BiometricEstimator,
    #[case] name: Option<&str>,
    #[case] expected: f64,
) {
    assert_eq!(estimator.estimate_yield(name), expected);
}

#[rstest]
fn fillet_weight_is_weight_times_yield(estimator: BiometricEstimator) {
    let whole = estimator
        .estimate_weight(Some("paralichthys olivaceus"), 40.0)
        .expect("valid length");
    let fillet = estimator
        .estimate_fillet_weight(Some("광어"), Some("paralichthys olivaceus"), 40.0)
        .expect("valid length");
    assert_close(fillet, whole * 0.48);
}

#[rstest]
fn custom_tables_replace_the_defaults() {
    let json = r#"{
        "length_weight": [{"species": "salmo salar", "a": 0.02, "b": 2.0}],
        "fillet_yield": [{"species": "연어", "ratio": 0.7}]
    }"#;
    let tables = BiometricTables::from_json_str(json).expect("decode tables");
    let estimator = BiometricEstimator::new(Arc::new(tables));
    let kg = estimator
        .estimate_weight(Some("Salmo salar"), 10.0)
        .expect("valid length");
    assert_close(kg, 0.002);
    assert_eq!(estimator.estimate_yield(Some("노르웨이연어")), 0.7);
    assert_eq!(estimator.estimate_yield(Some("광어")), 0.35);
}

#[rstest]
fn tables_round_trip_through_json() {
    let tables = BiometricTables::standard();
    let json = serde_json::to_string(tables.as_ref()).expect("encode tables");
    let decoded = BiometricTables::from_json_str(&json).expect("decode tables");
    assert_eq!(&decoded, tables.as_ref());
}

#[rstest]
fn validation_rejects_unnormalised_keys() {
    let tables = BiometricTables {
        length_weight: SpeciesTable::from_pairs([("Pagrus major", LengthWeight::new(0.015, 2.95))]),
        fillet_yield: SpeciesTable::default(),
    };
    assert!(matches!(
        tables.validate(),
        Err(TableError::UnnormalisedKey { .. })
    ));
}

#[rstest]
#[case(0.0, 3.0)]
#[case(0.01, -1.0)]
#[case(f64::NAN, 3.0)]
fn validation_rejects_unusable_coefficients(#[case] a: f64, #[case] b: f64) {
    let tables = BiometricTables {
        length_weight: SpeciesTable::from_pairs([("pagrus major", LengthWeight::new(a, b))]),
        fillet_yield: SpeciesTable::default(),
    };
    assert!(matches!(
        tables.validate(),
        Err(TableError::InvalidCoefficients { .. })
    ));
}

#[rstest]
#[case(-0.1)]
#[case(1.5)]
#[case(f64::NAN)]
fn validation_rejects_out_of_range_yields(#[case] ratio: f64) {
    let tables = BiometricTables {
        length_weight: SpeciesTable::default(),
        fillet_yield: SpeciesTable::from_pairs([("광어", FilletYield::new(ratio))]),
    };
    assert!(matches!(tables.validate(), Err(TableError::InvalidRatio { .. })));
}

#[rstest]
fn validation_rejects_blank_keys() {
    let tables = BiometricTables {
        length_weight: SpeciesTable::default(),
        fillet_yield: SpeciesTable::from_pairs([("", FilletYield::new(0.5))]),
    };
    assert!(matches!(
        tables.validate(),
        Err(TableError::EmptySpecies { table: "fillet_yield", index: 0 })
    ));
}
