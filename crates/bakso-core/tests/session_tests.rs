//! Session integration tests
//!
//! Catalog edits, batch recording and analysis through one `Session`.

use bakso_core::{
    BaksoConfig, BaksoError, CalculationError, IngredientDraft, RecordError, Session, Unit,
};
use chrono::NaiveDate;
use rstest::rstest;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
}

fn record_batch(session: &mut Session, portions: i64, date: NaiveDate) {
    let calc = session.calculate(portions).unwrap();
    session.record(&calc, date).unwrap();
}

/// Transactions {beef, flour} x2, {beef, flour, garlic}, {beef, garlic}.
fn stall() -> (Session, [String; 3]) {
    let mut session = Session::default();
    let beef = session
        .add_ingredient(IngredientDraft::new("Daging Sapi", Unit::Kg, 120_000.0, 0.05))
        .unwrap()
        .id
        .clone();
    let flour = session
        .add_ingredient(IngredientDraft::new("Tepung Tapioka", Unit::Kg, 12_000.0, 0.02))
        .unwrap()
        .id
        .clone();

    record_batch(&mut session, 100, day(1));
    record_batch(&mut session, 80, day(2));

    let garlic = session
        .add_ingredient(IngredientDraft::new("Bawang Putih", Unit::Gram, 40.0, 1.5))
        .unwrap()
        .id
        .clone();
    record_batch(&mut session, 60, day(3));

    session.remove_ingredient(&flour).unwrap();
    record_batch(&mut session, 50, day(4));

    (session, [beef, flour, garlic])
}

#[test]
fn test_catalog_changes_shape_transactions() {
    let (session, [beef, flour, garlic]) = stall();
    let transactions = session.history().transactions();
    assert_eq!(transactions.len(), 4);
    assert_eq!(transactions.support(&[beef.as_str()]), 1.0);
    assert_eq!(transactions.support(&[flour.as_str()]), 0.75);
    assert_eq!(transactions.support(&[garlic.as_str()]), 0.5);
}

#[test]
fn test_analyze_default_thresholds() {
    let (session, [beef, flour, garlic]) = stall();
    let report = session.analyze_with(0.5, 0.6);

    assert_eq!(report.level_counts, [3, 2, 0]);
    assert_eq!(report.itemsets[0].items, vec![beef.clone()]);

    // beef -> garlic (0.5) falls below 0.6
    assert_eq!(report.rule_count(), 3);
    assert_eq!(report.rules[0].confidence, 1.0);
    assert_eq!(report.rules[1].confidence, 1.0);
    assert_eq!(report.rules[2].antecedent, vec![beef]);
    assert_eq!(report.rules[2].consequent, vec![flour.clone()]);
    assert!(report
        .rules
        .iter()
        .any(|r| r.antecedent == vec![garlic.clone()]));
}

#[test]
fn test_removed_ingredient_shows_as_unknown() {
    let (session, [_, flour, _]) = stall();
    assert_eq!(session.catalog().name_of(&flour), "Unknown");
    assert!(session.history().records()[0].ingredients.contains_key(&flour));
}

#[test]
fn test_analytics_overview() {
    let (session, _) = stall();
    let analytics = session.analytics();
    assert_eq!(analytics.overview.total_records, 4);
    assert_eq!(analytics.overview.total_portions, 290);
    assert_eq!(analytics.monthly_trend.len(), 1);
    assert_eq!(analytics.monthly_trend[0].month, "2024-04");
    // flour no longer in the catalog
    assert_eq!(analytics.usage_frequency.len(), 2);
}

#[rstest]
#[case(0, BaksoError::Calculation(CalculationError::NonPositivePortions(0)))]
#[case(-10, BaksoError::Calculation(CalculationError::NonPositivePortions(-10)))]
#[case(5_000_000_000, BaksoError::Calculation(CalculationError::TooManyPortions(5_000_000_000)))]
fn test_calculate_rejects(#[case] portions: i64, #[case] expected: BaksoError) {
    let (session, _) = stall();
    assert_eq!(session.calculate(portions).unwrap_err(), expected);
}

#[test]
fn test_empty_session_analyzes_to_nothing() {
    let session = Session::new(BaksoConfig::default());
    let report = session.analyze();
    assert!(report.is_empty());
    assert_eq!(report.itemset_count(), 0);
    assert_eq!(report.rule_count(), 0);
    assert_eq!(session.analytics().overview.avg_cost_per_portion, 0.0);
}

#[test]
fn test_record_error_is_reported() {
    let err: BaksoError = RecordError::ZeroPortions.into();
    assert_eq!(
        err.to_string(),
        "Record error: Usage record must have at least one portion"
    );
}
