//! Ledger derivation tests
//!
//! Covers the running-balance fold used by both the party and item
//! ledgers: inventory conservation over a full history and windowed
//! balance correctness over a date-filtered slice.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use gatebook_backend::services::ledger::{running_balances, split_columns, Movement};
use shared::models::TransactionType;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn incoming(magnitude: &str) -> Movement {
    Movement {
        transaction_type: TransactionType::Incoming,
        magnitude: dec(magnitude),
    }
}

fn outgoing(magnitude: &str) -> Movement {
    Movement {
        transaction_type: TransactionType::Outgoing,
        magnitude: dec(magnitude),
    }
}

fn net(movements: &[Movement]) -> Decimal {
    movements.iter().fold(Decimal::ZERO, |acc, m| {
        let (inflow, outflow) = split_columns(*m);
        acc + inflow - outflow
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn empty_ledger_has_no_balances() {
    assert!(running_balances(&[]).is_empty());
}

#[test]
fn single_incoming_movement() {
    let balances = running_balances(&[incoming("200.00")]);
    assert_eq!(balances, vec![dec("200.00")]);
}

#[test]
fn debit_credit_running_balance() {
    // Incoming 200, outgoing 90: balances 200 then 110.
    let balances = running_balances(&[incoming("200.00"), outgoing("90.00")]);
    assert_eq!(balances, vec![dec("200.00"), dec("110.00")]);
}

#[test]
fn balance_can_go_negative() {
    // Party ledgers have no floor: more outgoing than incoming leaves a
    // negative (payable-side) balance.
    let balances = running_balances(&[incoming("50"), outgoing("80")]);
    assert_eq!(balances, vec![dec("50"), dec("-30")]);
}

#[test]
fn split_columns_routes_by_direction() {
    assert_eq!(split_columns(incoming("5")), (dec("5"), Decimal::ZERO));
    assert_eq!(split_columns(outgoing("5")), (Decimal::ZERO, dec("5")));
}

#[test]
fn windowed_balance_ignores_history_outside_window() {
    let history = vec![
        incoming("1000"), // before the window
        incoming("200.00"),
        outgoing("90.00"),
        outgoing("500"), // after the window
    ];

    // The window covers only the two middle rows; the balance restarts
    // at zero at the window start.
    let windowed = &history[1..3];
    let balances = running_balances(windowed);
    assert_eq!(balances.last().copied(), Some(dec("110.00")));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn movement_strategy() -> impl Strategy<Value = Movement> {
    (any::<bool>(), 1u32..100_000).prop_map(|(is_incoming, n)| Movement {
        transaction_type: if is_incoming {
            TransactionType::Incoming
        } else {
            TransactionType::Outgoing
        },
        magnitude: Decimal::from(n) / Decimal::from(100),
    })
}

proptest! {
    /// Inventory conservation: the final running balance over a full
    /// history equals total inflow minus total outflow.
    #[test]
    fn final_balance_equals_net(movements in prop::collection::vec(movement_strategy(), 0..50)) {
        let balances = running_balances(&movements);
        let expected = net(&movements);
        prop_assert_eq!(balances.last().copied().unwrap_or(Decimal::ZERO), expected);
    }

    /// Each balance is the previous balance plus the row's signed
    /// movement.
    #[test]
    fn balances_are_cumulative(movements in prop::collection::vec(movement_strategy(), 1..50)) {
        let balances = running_balances(&movements);
        let mut previous = Decimal::ZERO;
        for (m, balance) in movements.iter().zip(&balances) {
            let (inflow, outflow) = split_columns(*m);
            prop_assert_eq!(previous + inflow - outflow, *balance);
            previous = *balance;
        }
    }

    /// Windowed correctness: the last balance of any contiguous window
    /// equals the net over exactly that window, independent of rows
    /// outside it.
    #[test]
    fn window_is_independent_of_outside_rows(
        movements in prop::collection::vec(movement_strategy(), 1..50),
        bounds in (0usize..50, 0usize..50),
    ) {
        let (a, b) = bounds;
        let start = a.min(movements.len());
        let end = b.min(movements.len());
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        let window = &movements[start..end];
        let balances = running_balances(window);
        prop_assert_eq!(balances.last().copied().unwrap_or(Decimal::ZERO), net(window));
    }
}
