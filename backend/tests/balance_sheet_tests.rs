//! Balance sheet composition tests
//!
//! Covers receivable/payable classification, the accounting identity
//! (assets - liabilities == equity), and the worked Acme/Bolt scenario
//! across the whole pure derivation layer.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use gatebook_backend::services::balance_sheet::{compose, InventoryAssetLine, PartyNet};
use gatebook_backend::services::gatebook::{check_stock, inventory_delta};
use gatebook_backend::services::ledger::{running_balances, Movement};
use gatebook_backend::services::inventory::valuation;
use shared::models::TransactionType;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
}

fn asset_line(name: &str, quantity: &str, rate: &str) -> InventoryAssetLine {
    let quantity = dec(quantity);
    let rate = dec(rate);
    InventoryAssetLine {
        item_name: name.to_string(),
        quantity,
        rate,
        value: quantity * rate,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn empty_sheet_balances_at_zero() {
    let sheet = compose(as_of(), vec![], vec![]);
    assert_eq!(sheet.total_assets, Decimal::ZERO);
    assert_eq!(sheet.total_liabilities, Decimal::ZERO);
    assert_eq!(sheet.equity, Decimal::ZERO);
}

#[test]
fn positive_net_is_a_receivable() {
    let sheet = compose(
        as_of(),
        vec![],
        vec![PartyNet {
            party_name: "Acme".to_string(),
            net: dec("110.00"),
        }],
    );
    assert_eq!(sheet.receivables.len(), 1);
    assert_eq!(sheet.receivables[0].balance, dec("110.00"));
    assert!(sheet.payables.is_empty());
}

#[test]
fn negative_net_is_a_payable_with_flipped_sign() {
    let sheet = compose(
        as_of(),
        vec![],
        vec![PartyNet {
            party_name: "Supplies Co".to_string(),
            net: dec("-75.50"),
        }],
    );
    assert!(sheet.receivables.is_empty());
    assert_eq!(sheet.payables.len(), 1);
    assert_eq!(sheet.payables[0].balance, dec("75.50"));
}

#[test]
fn zero_net_appears_in_neither_bucket() {
    let sheet = compose(
        as_of(),
        vec![],
        vec![PartyNet {
            party_name: "Settled".to_string(),
            net: Decimal::ZERO,
        }],
    );
    assert!(sheet.receivables.is_empty());
    assert!(sheet.payables.is_empty());
}

#[test]
fn inventory_total_sums_line_values() {
    let sheet = compose(
        as_of(),
        vec![asset_line("Bolt", "70", "2.00"), asset_line("Nut", "10", "0.50")],
        vec![],
    );
    assert_eq!(sheet.inventory_total, dec("145.00"));
    assert_eq!(sheet.total_assets, dec("145.00"));
}

/// The worked scenario: party Acme, item Bolt.
#[test]
fn acme_bolt_scenario() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let mut stock = Decimal::ZERO;

    // Incoming 2024-01-01: 100 @ 2.00
    let qty = dec("100");
    let rate = dec("2.00");
    check_stock(TransactionType::Incoming, qty, stock).unwrap();
    let amount_in = qty * rate;
    assert_eq!(amount_in, dec("200.00"));
    stock += inventory_delta(TransactionType::Incoming, qty);
    assert_eq!(stock, dec("100"));

    // Outgoing 2024-01-05: 30 @ 3.00
    let qty = dec("30");
    let rate = dec("3.00");
    check_stock(TransactionType::Outgoing, qty, stock).unwrap();
    let amount_out = qty * rate;
    assert_eq!(amount_out, dec("90.00"));
    stock += inventory_delta(TransactionType::Outgoing, qty);
    assert_eq!(stock, dec("70"));

    // Outgoing 200 is rejected and stock is unchanged.
    assert!(check_stock(TransactionType::Outgoing, dec("200"), stock).is_err());
    assert_eq!(stock, dec("70"));

    // Party ledger for Acme: debit 200, credit 90, balance 110.
    let balances = running_balances(&[
        Movement {
            transaction_type: TransactionType::Incoming,
            magnitude: amount_in,
        },
        Movement {
            transaction_type: TransactionType::Outgoing,
            magnitude: amount_out,
        },
    ]);
    assert_eq!(balances.last().copied(), Some(dec("110.00")));

    // Bolt valued at the last incoming rate (2.00), not the sale rate.
    assert_eq!(valuation(stock, Some(dec("2.00"))), dec("140.00"));

    // Balance sheet as of 2024-01-05.
    let sheet = compose(
        today,
        vec![asset_line("Bolt", "70", "2.00")],
        vec![PartyNet {
            party_name: "Acme".to_string(),
            net: dec("110.00"),
        }],
    );
    assert_eq!(sheet.inventory_total, dec("140.00"));
    assert_eq!(sheet.receivables_total, dec("110.00"));
    assert_eq!(sheet.total_assets, dec("250.00"));
    assert_eq!(sheet.payables_total, Decimal::ZERO);
    assert_eq!(sheet.equity, dec("250.00"));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn net_strategy() -> impl Strategy<Value = PartyNet> {
    ("[A-Z][a-z]{2,8}", -1_000_000i64..1_000_000).prop_map(|(name, n)| PartyNet {
        party_name: name,
        net: Decimal::from(n) / Decimal::from(100),
    })
}

fn line_strategy() -> impl Strategy<Value = InventoryAssetLine> {
    ("[A-Z][a-z]{2,8}", 1u32..100_000, 1u32..100_000).prop_map(|(name, q, r)| {
        let quantity = Decimal::from(q) / Decimal::from(100);
        let rate = Decimal::from(r) / Decimal::from(100);
        InventoryAssetLine {
            item_name: name,
            quantity,
            rate,
            value: quantity * rate,
        }
    })
}

proptest! {
    /// Accounting identity: assets - liabilities == equity for every
    /// composition.
    #[test]
    fn balance_sheet_identity(
        inventory in prop::collection::vec(line_strategy(), 0..10),
        nets in prop::collection::vec(net_strategy(), 0..10),
    ) {
        let sheet = compose(as_of(), inventory, nets);
        prop_assert_eq!(sheet.total_assets - sheet.total_liabilities, sheet.equity);
        prop_assert_eq!(sheet.total_assets, sheet.inventory_total + sheet.receivables_total);
        prop_assert_eq!(sheet.total_liabilities, sheet.payables_total);
    }

    /// A party contributes to at most one of receivables/payables, and
    /// both buckets hold only positive balances.
    #[test]
    fn buckets_are_exclusive_and_positive(nets in prop::collection::vec(net_strategy(), 0..10)) {
        let sheet = compose(as_of(), vec![], nets.clone());
        prop_assert_eq!(
            sheet.receivables.len() + sheet.payables.len(),
            nets.iter().filter(|p| p.net != Decimal::ZERO).count()
        );
        for line in sheet.receivables.iter().chain(sheet.payables.iter()) {
            prop_assert!(line.balance > Decimal::ZERO);
        }
    }
}
