//! Budget-to-shares solver
//!
//! Bounded bisection over the LMSR cost curve: given a currency budget,
//! find the share quantity whose marginal cost matches it. The curve is
//! strictly increasing in the bought outcome, so the midpoint walk either
//! converges under the cost tolerance or proves the budget unreachable
//! within the share ceiling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cost::{check_outcome, cost_units, pool_exponents, to_exponent, validate, LmsrMath};
use crate::error::{PricingError, PricingResult};
use crate::units;
use crate::units::SHARES_SCALE;

/// Configuration for the shares-for-amount search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Upper bound of the search interval, in micro-shares
    pub share_ceiling: u64,
    /// Bisection rounds before giving up
    pub max_iterations: u32,
    /// Accept a candidate once its implied cost is within this many
    /// micro-units of the requested amount
    pub cost_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            // TODO: derive the ceiling from the budget (amount plus the
            // pool spread plus the b*ln(N) bound always brackets the root)
            // instead of a flat cap
            share_ceiling: 1_000 * SHARES_SCALE, // 1000 whole shares
            max_iterations: 20,
            cost_tolerance: 10_000.0, // 0.01 currency units
        }
    }
}

/// Resolves currency budgets into share quantities
pub struct SharesSolver {
    config: SolverConfig,
}

impl SharesSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the number of micro-shares of `outcome` that `amount`
    /// micro-units buys at the current pool
    ///
    /// Bisects the marginal cost `C(pool + d*e_i) - C(pool)` over
    /// `d in [0, share_ceiling]`, keeping the candidate whose implied cost
    /// lands closest to `amount`. A non-positive `amount` quotes zero
    /// shares. If the search ends with the best candidate still further
    /// than `cost_tolerance` from the budget, the budget is not reachable
    /// within the ceiling and the best candidate is reported through
    /// [`PricingError::BoundsExceeded`] instead of a quote.
    pub fn quote(
        &self,
        liquidity: f64,
        pool: &[u64],
        outcome: usize,
        amount: i64,
    ) -> PricingResult<TradeQuote> {
        validate(liquidity, pool)?;
        check_outcome(pool, outcome)?;
        if amount <= 0 {
            return Ok(TradeQuote::zero());
        }

        let target = amount as f64;
        let xs = pool_exponents(liquidity, pool);
        let base_units = cost_units(liquidity, &xs);

        let mut low = 0.0_f64;
        let mut high = self.config.share_ceiling as f64;
        let mut best_shares = 0.0_f64;
        let mut best_diff = f64::INFINITY;
        let mut iterations = 0u32;

        let mut hyp = xs;
        for round in 1..=self.config.max_iterations {
            iterations = round;
            let mid = (low + high) / 2.0;
            hyp[outcome] = to_exponent(liquidity, pool[outcome] as f64 + mid);
            let trade_cost = (cost_units(liquidity, &hyp) - base_units) * units::CURRENCY_SCALE_F;
            let diff = (target - trade_cost).abs();

            trace!(round, mid, trade_cost, diff, "bisection step");

            if diff < best_diff {
                best_diff = diff;
                best_shares = mid;
            }
            if diff < self.config.cost_tolerance {
                break;
            }
            if trade_cost < target {
                low = mid;
            } else {
                high = mid;
            }
        }

        // Snap the winning midpoint to whole micro-shares and re-price it,
        // so the returned cost belongs to the returned share count
        let shares = best_shares.round() as u64;
        let cost = LmsrMath::buy_cost(liquidity, pool, outcome, shares)?;
        let residual = (amount as i128 - cost as i128).unsigned_abs() as u64;

        if best_diff >= self.config.cost_tolerance {
            debug!(
                requested = amount,
                best_shares = shares,
                best_cost = cost,
                iterations,
                "budget unreachable within share ceiling"
            );
            return Err(PricingError::BoundsExceeded {
                requested: amount,
                best_shares: shares,
                best_cost: cost,
            });
        }

        debug!(
            requested = amount,
            shares, cost, residual, iterations, "quote converged"
        );
        Ok(TradeQuote {
            shares,
            cost,
            residual,
            iterations,
        })
    }
}

/// A priced trade: the share quantity a budget buys and what that
/// quantity actually costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeQuote {
    /// Micro-shares to mint
    pub shares: u64,
    /// Implied cost of `shares`, in micro-currency units
    pub cost: u64,
    /// Distance between `cost` and the requested amount, in micro-units
    pub residual: u64,
    /// Bisection rounds used
    pub iterations: u32,
}

impl TradeQuote {
    fn zero() -> Self {
        Self {
            shares: 0,
            cost: 0,
            residual: 0,
            iterations: 0,
        }
    }

    /// Share quantity as an exact decimal, in whole shares
    pub fn shares_decimal(&self) -> Decimal {
        units::shares_decimal(self.shares)
    }

    /// Implied cost as an exact decimal, in whole currency units
    pub fn cost_decimal(&self) -> Decimal {
        units::currency_decimal(self.cost)
    }
}
