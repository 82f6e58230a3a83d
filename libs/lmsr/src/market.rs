//! Market snapshot and trade request value types
//!
//! Bundles the two pricing inputs the external ledger owns, with
//! delegating convenience methods over the kernel. All math stays in
//! [`LmsrMath`] and [`SharesSolver`]; this module only carries state
//! across the API boundary.

use serde::{Deserialize, Serialize};

use crate::cost::{validate, LmsrMath};
use crate::error::PricingResult;
use crate::solver::{SharesSolver, SolverConfig, TradeQuote};

/// Read-only snapshot of one market's pricing inputs
///
/// Fields are public and serializable; every delegating method
/// re-validates, so a snapshot deserialized from untrusted input fails at
/// the call site rather than poisoning the kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    /// LMSR liquidity parameter, fixed at market creation
    pub liquidity: f64,
    /// Cumulative micro-shares issued per outcome
    pub outcome_pool: Vec<u64>,
}

impl MarketState {
    /// Build a snapshot, rejecting inputs the kernel would refuse
    pub fn new(liquidity: f64, outcome_pool: Vec<u64>) -> PricingResult<Self> {
        validate(liquidity, &outcome_pool)?;
        Ok(Self {
            liquidity,
            outcome_pool,
        })
    }

    /// Fresh market: every outcome starts with an empty pool
    pub fn fresh(liquidity: f64, num_outcomes: usize) -> PricingResult<Self> {
        Self::new(liquidity, vec![0; num_outcomes])
    }

    pub fn num_outcomes(&self) -> usize {
        self.outcome_pool.len()
    }

    /// Book cost of the current pool, in micro-currency units
    pub fn cost(&self) -> PricingResult<u64> {
        LmsrMath::cost(self.liquidity, &self.outcome_pool)
    }

    pub fn price(&self, outcome: usize) -> PricingResult<f64> {
        LmsrMath::price(self.liquidity, &self.outcome_pool, outcome)
    }

    pub fn prices(&self) -> PricingResult<Vec<f64>> {
        LmsrMath::prices(self.liquidity, &self.outcome_pool)
    }

    pub fn buy_cost(&self, outcome: usize, micro_shares: u64) -> PricingResult<u64> {
        LmsrMath::buy_cost(self.liquidity, &self.outcome_pool, outcome, micro_shares)
    }

    pub fn sell_payout(&self, outcome: usize, micro_shares: u64) -> PricingResult<u64> {
        LmsrMath::sell_payout(self.liquidity, &self.outcome_pool, outcome, micro_shares)
    }

    /// Worst-case loss bound for this market's parameters
    pub fn initial_funding(&self) -> PricingResult<u64> {
        LmsrMath::initial_funding(self.liquidity, self.num_outcomes())
    }

    /// Quote a trade request with the default solver settings
    pub fn quote(&self, request: &TradeRequest) -> PricingResult<TradeQuote> {
        self.quote_with(&SharesSolver::new(SolverConfig::default()), request)
    }

    /// Quote a trade request with a caller-supplied solver
    pub fn quote_with(
        &self,
        solver: &SharesSolver,
        request: &TradeRequest,
    ) -> PricingResult<TradeQuote> {
        solver.quote(
            self.liquidity,
            &self.outcome_pool,
            request.outcome,
            request.amount,
        )
    }
}

/// One buy intent against a market snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    /// Outcome index to buy
    pub outcome: usize,
    /// Budget in micro-currency units; non-positive quotes zero shares
    pub amount: i64,
}
