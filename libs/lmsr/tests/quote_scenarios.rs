//! Worked pricing scenarios through the public API
//!
//! End-to-end vectors covering the documented behavior:
//! - fresh-market book value and the funding bound
//! - budget quotes against live pools, including solver diagnostics
//! - log-sum-exp stability on heavily imbalanced pools
//! - ceiling saturation surfacing the best candidate as a typed error

use bookie_lmsr::{
    LmsrMath, MarketState, PricingError, SharesSolver, SolverConfig, TradeRequest,
};

#[test]
fn test_fresh_two_outcome_market() {
    let state = MarketState::fresh(10.0, 2).unwrap();

    // Book value of an empty pool is b * ln(2), which is also the
    // worst-case loss the market needs funded up front
    assert_eq!(state.cost().unwrap(), 6_931_472);
    assert_eq!(state.initial_funding().unwrap(), 6_931_472);
    assert_eq!(state.prices().unwrap(), vec![0.5, 0.5]);
}

#[test]
fn test_reference_budget_quote() {
    let state = MarketState::new(10.0, vec![10_704_587, 8_880_614]).unwrap();
    let quote = state
        .quote(&TradeRequest {
            outcome: 0,
            amount: 1_184_921,
        })
        .unwrap();

    assert_eq!(quote.shares, 2_075_195);
    assert_eq!(quote.cost, 1_184_921);
    assert_eq!(quote.residual, 0);
    assert!(quote.iterations < 20, "expected early exit under tolerance");

    // The quote prices exactly like a direct buy preview of the same size
    assert_eq!(
        state.buy_cost(0, quote.shares).unwrap(),
        quote.cost,
        "quote and preview disagree"
    );
}

#[test]
fn test_quote_against_uneven_pool() {
    let solver = SharesSolver::new(SolverConfig::default());
    let quote = solver
        .quote(5.0, &[2_000_000, 3_000_000], 1, 750_000)
        .unwrap();

    assert_eq!(quote.shares, 1_281_738);
    assert_eq!(quote.cost, 744_955);
    assert_eq!(quote.residual, 5_045);
}

#[test]
fn test_large_imbalance_stays_finite() {
    // One million shares on one side; the naive cost form would need
    // e^100000 and overflow
    let pool = [1_000_000_000_000, 0];
    assert_eq!(LmsrMath::cost(10.0, &pool).unwrap(), 1_000_000_000_000);

    let prices = LmsrMath::prices(10.0, &pool).unwrap();
    assert!(prices[0] > 0.999_999, "runaway side should price near 1");
    assert!(prices[1] < 0.000_001);
}

#[test]
fn test_saturated_budget_reports_best_candidate() {
    let solver = SharesSolver::new(SolverConfig::default());
    let err = solver
        .quote(10.0, &[10_704_587, 8_880_614], 0, 2_000_000_000_000)
        .unwrap_err();

    // The ceiling caps spending below the request, so the solver hands
    // back its closest candidate instead of a misleading quote
    match err {
        PricingError::BoundsExceeded {
            requested,
            best_shares,
            best_cost,
        } => {
            assert_eq!(requested, 2_000_000_000_000);
            assert_eq!(best_shares, 999_999_046);
            assert_eq!(best_cost, 993_938_032);
        }
        other => panic!("expected BoundsExceeded, got {other:?}"),
    }
}

#[test]
fn test_market_lifecycle_balances() {
    // Quote, apply, re-price: the engine stays consistent when the caller
    // feeds minted shares back into the snapshot
    let mut state = MarketState::fresh(10.0, 2).unwrap();
    let funding = state.initial_funding().unwrap();
    let opening_book = state.cost().unwrap();

    let quote = state
        .quote(&TradeRequest {
            outcome: 0,
            amount: 1_000_000,
        })
        .unwrap();
    assert_eq!(quote.shares, 1_892_090);
    assert_eq!(quote.cost, 990_728);

    // The ledger applies the mint; the engine just re-prices the result
    state.outcome_pool[0] += quote.shares;
    assert_eq!(state.cost().unwrap(), 7_922_200);
    assert_eq!(state.cost().unwrap(), opening_book + quote.cost);

    let price = state.price(0).unwrap();
    assert!(
        (price - 0.547_161).abs() < 1e-5,
        "bought side should price above half, got {price}"
    );

    // Unwinding the whole position refunds exactly what was charged
    assert_eq!(state.sell_payout(0, quote.shares).unwrap(), quote.cost);

    // If outcome 0 settles as the winner, every micro-share pays one
    // micro-unit, all covered by funding plus the collected cost
    let payout = LmsrMath::settlement_value(quote.shares);
    assert_eq!(payout, 1_892_090);
    assert!(payout <= funding + quote.cost);
}
