//! Gatebook entry validation tests
//!
//! Covers the entry contract: quantity and rate positivity, future-date
//! rejection, non-negative stock enforcement, and exact amount
//! computation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use gatebook_backend::error::AppError;
use gatebook_backend::services::gatebook::{
    check_stock, inventory_delta, validate_entry, RecordEntryInput,
};
use shared::models::TransactionType;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn entry(quantity: &str, rate: &str, transaction_type: TransactionType) -> RecordEntryInput {
    RecordEntryInput {
        transaction_date: Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
        party_id: 1,
        item_id: 1,
        quantity: dec(quantity),
        rate: dec(rate),
        transaction_type,
        description: None,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn valid_entry_passes() {
    let input = entry("100", "2.00", TransactionType::Incoming);
    assert!(validate_entry(&input, today()).is_ok());
}

#[test]
fn non_positive_quantity_rejected_first() {
    // Quantity is checked before rate: an entry with both invalid
    // reports the quantity problem.
    let input = entry("0", "-1", TransactionType::Incoming);
    match validate_entry(&input, today()) {
        Err(AppError::Validation { field, .. }) => assert_eq!(field, "quantity"),
        other => panic!("expected quantity validation error, got {:?}", other),
    }
}

#[test]
fn non_positive_rate_rejected() {
    let input = entry("10", "0", TransactionType::Outgoing);
    match validate_entry(&input, today()) {
        Err(AppError::Validation { field, .. }) => assert_eq!(field, "rate"),
        other => panic!("expected rate validation error, got {:?}", other),
    }
}

#[test]
fn future_date_rejected() {
    let mut input = entry("10", "1", TransactionType::Incoming);
    input.transaction_date = Some(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
    match validate_entry(&input, today()) {
        Err(AppError::Validation { field, .. }) => assert_eq!(field, "transaction_date"),
        other => panic!("expected date validation error, got {:?}", other),
    }
}

#[test]
fn missing_date_defaults_to_today() {
    let mut input = entry("10", "1", TransactionType::Incoming);
    input.transaction_date = None;
    assert_eq!(validate_entry(&input, today()).unwrap(), today());
}

#[test]
fn outgoing_beyond_stock_rejected() {
    let err = check_stock(TransactionType::Outgoing, dec("200"), dec("70")).unwrap_err();
    assert!(matches!(err, AppError::InsufficientStock(_)));
}

#[test]
fn outgoing_exactly_at_stock_accepted() {
    assert!(check_stock(TransactionType::Outgoing, dec("70"), dec("70")).is_ok());
}

#[test]
fn incoming_never_stock_limited() {
    assert!(check_stock(TransactionType::Incoming, dec("1000"), Decimal::ZERO).is_ok());
}

#[test]
fn inventory_delta_signs() {
    assert_eq!(inventory_delta(TransactionType::Incoming, dec("30")), dec("30"));
    assert_eq!(inventory_delta(TransactionType::Outgoing, dec("30")), dec("-30"));
}

#[test]
fn amount_is_exact_product() {
    // 0.1 * 0.3 must be exactly 0.03, not a float approximation.
    assert_eq!(dec("0.1") * dec("0.3"), dec("0.03"));
    assert_eq!(dec("100") * dec("2.00"), dec("200.00"));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1u32..1_000_000).prop_map(|n| Decimal::from(n) / Decimal::from(100))
}

proptest! {
    /// An outgoing request above on-hand stock is always rejected; one
    /// at or below it is always accepted.
    #[test]
    fn stock_check_is_a_threshold(requested in quantity_strategy(), on_hand in quantity_strategy()) {
        let result = check_stock(TransactionType::Outgoing, requested, on_hand);
        prop_assert_eq!(result.is_ok(), requested <= on_hand);
    }

    /// Incoming movements pass the stock check regardless of stock.
    #[test]
    fn incoming_always_passes_stock_check(requested in quantity_strategy(), on_hand in quantity_strategy()) {
        prop_assert!(check_stock(TransactionType::Incoming, requested, on_hand).is_ok());
    }

    /// A movement and its inventory delta have the same magnitude.
    #[test]
    fn delta_magnitude_matches_quantity(quantity in quantity_strategy()) {
        prop_assert_eq!(inventory_delta(TransactionType::Incoming, quantity), quantity);
        prop_assert_eq!(inventory_delta(TransactionType::Outgoing, quantity), -quantity);
    }

    /// Entries with non-positive quantities never validate.
    #[test]
    fn non_positive_quantity_never_validates(n in 0u32..1000) {
        let mut input = entry("1", "1", TransactionType::Incoming);
        input.quantity = -Decimal::from(n) / Decimal::from(100);
        prop_assert!(validate_entry(&input, today()).is_err());
    }
}
