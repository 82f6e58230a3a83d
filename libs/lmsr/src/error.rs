//! Pricing errors
//!
//! Typed failures for the LMSR engine. Every variant carries the inputs
//! that produced it so callers can log or surface the condition without
//! re-deriving context.

use thiserror::Error;

/// Errors produced by the cost function and the shares solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// Liquidity parameter is zero, negative, or not finite. Fatal to the
    /// call; no trade should be built from it.
    #[error("invalid liquidity parameter {value}: must be positive and finite")]
    InvalidParameter { value: f64 },

    /// A market needs at least two outcomes for the scoring rule to price.
    #[error("market has {num_outcomes} outcome(s), need at least 2")]
    TooFewOutcomes { num_outcomes: usize },

    /// Outcome index does not address an entry of the pool vector.
    #[error("outcome index {index} out of range for {num_outcomes}-outcome market")]
    InvalidOutcome { index: usize, num_outcomes: usize },

    /// Sell preview asked for more shares than the outcome pool holds.
    #[error(
        "cannot remove {requested} micro-shares from outcome {index}: pool holds {available}"
    )]
    InsufficientShares {
        index: usize,
        requested: u64,
        available: u64,
    },

    /// The solver saturated its share ceiling while the best candidate
    /// still missed the budget by at least the cost tolerance. The best
    /// candidate is carried so a caller may use the estimate deliberately
    /// instead of treating the quote as converged.
    #[error(
        "budget {requested} micro-units unreachable within the share ceiling: \
         best candidate buys {best_shares} micro-shares for {best_cost} micro-units"
    )]
    BoundsExceeded {
        requested: i64,
        best_shares: u64,
        best_cost: u64,
    },
}

/// Result type for pricing operations.
pub type PricingResult<T> = std::result::Result<T, PricingError>;
