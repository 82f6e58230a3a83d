//! LMSR cost and pricing math
//!
//! Log-sum-exp stabilized implementation of the logarithmic market scoring
//! rule: the cost function, outcome prices, buy/sell previews, and the
//! worst-case funding bound. Pools come in as micro-shares and cost-like
//! results go out as micro-currency; prices are the one plain-`f64`
//! surface, since a probability has no scaled-integer form worth keeping.

use crate::error::{PricingError, PricingResult};
use crate::units::{round_to_micro, CURRENCY_SCALE, SHARES_SCALE, SHARES_SCALE_F};

/// LMSR math over micro-share pools
pub struct LmsrMath;

impl LmsrMath {
    /// Calculate the market maker's cost function over the pooled shares
    ///
    /// # Arguments
    /// * `liquidity` - LMSR liquidity parameter `b` (positive, finite)
    /// * `pool` - cumulative shares issued per outcome, in micro-shares
    ///
    /// # Returns
    /// `C(q) = b * ln(sum_i e^(q_i / b))` in micro-currency units, rounded
    /// half away from zero.
    pub fn cost(liquidity: f64, pool: &[u64]) -> PricingResult<u64> {
        validate(liquidity, pool)?;
        let units = cost_units(liquidity, &pool_exponents(liquidity, pool));
        Ok(round_to_micro(units))
    }

    /// Current price of one outcome, as a probability in `[0, 1]`
    pub fn price(liquidity: f64, pool: &[u64], outcome: usize) -> PricingResult<f64> {
        validate(liquidity, pool)?;
        check_outcome(pool, outcome)?;
        Ok(softmax(&pool_exponents(liquidity, pool))[outcome])
    }

    /// Price vector for every outcome; entries sum to ~1
    pub fn prices(liquidity: f64, pool: &[u64]) -> PricingResult<Vec<f64>> {
        validate(liquidity, pool)?;
        Ok(softmax(&pool_exponents(liquidity, pool)))
    }

    /// Cost of buying `micro_shares` of `outcome` at the current pool
    ///
    /// The charge is the cost-function delta `C(q + d*e_i) - C(q)`,
    /// rounded once at the end.
    pub fn buy_cost(
        liquidity: f64,
        pool: &[u64],
        outcome: usize,
        micro_shares: u64,
    ) -> PricingResult<u64> {
        validate(liquidity, pool)?;
        check_outcome(pool, outcome)?;
        if micro_shares == 0 {
            return Ok(0);
        }

        let mut xs = pool_exponents(liquidity, pool);
        let before = cost_units(liquidity, &xs);
        xs[outcome] = to_exponent(liquidity, pool[outcome] as f64 + micro_shares as f64);
        let after = cost_units(liquidity, &xs);

        Ok(round_to_micro(after - before))
    }

    /// Payout for selling `micro_shares` of `outcome` back to the market
    ///
    /// The refund is `C(q) - C(q - d*e_i)`; selling more than the outcome's
    /// pool holds is rejected.
    pub fn sell_payout(
        liquidity: f64,
        pool: &[u64],
        outcome: usize,
        micro_shares: u64,
    ) -> PricingResult<u64> {
        validate(liquidity, pool)?;
        check_outcome(pool, outcome)?;
        if micro_shares > pool[outcome] {
            return Err(PricingError::InsufficientShares {
                index: outcome,
                requested: micro_shares,
                available: pool[outcome],
            });
        }
        if micro_shares == 0 {
            return Ok(0);
        }

        let mut xs = pool_exponents(liquidity, pool);
        let before = cost_units(liquidity, &xs);
        xs[outcome] = to_exponent(liquidity, (pool[outcome] - micro_shares) as f64);
        let after = cost_units(liquidity, &xs);

        Ok(round_to_micro(before - after))
    }

    /// Worst-case loss bound `b * ln(N)`, in micro-currency units
    ///
    /// Funding a fresh N-outcome market with this amount covers the
    /// maximum possible payout regardless of how trading goes.
    pub fn initial_funding(liquidity: f64, num_outcomes: usize) -> PricingResult<u64> {
        if !(liquidity.is_finite() && liquidity > 0.0) {
            return Err(PricingError::InvalidParameter { value: liquidity });
        }
        if num_outcomes < 2 {
            return Err(PricingError::TooFewOutcomes { num_outcomes });
        }
        Ok(round_to_micro(liquidity * (num_outcomes as f64).ln()))
    }

    /// Redemption value of winning shares: one whole share pays one whole
    /// currency unit
    pub fn settlement_value(micro_shares: u64) -> u64 {
        micro_shares * (CURRENCY_SCALE / SHARES_SCALE)
    }
}

/// Reject non-positive or non-finite liquidity and degenerate pools
pub(crate) fn validate(liquidity: f64, pool: &[u64]) -> PricingResult<()> {
    if !(liquidity.is_finite() && liquidity > 0.0) {
        return Err(PricingError::InvalidParameter { value: liquidity });
    }
    if pool.len() < 2 {
        return Err(PricingError::TooFewOutcomes {
            num_outcomes: pool.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_outcome(pool: &[u64], outcome: usize) -> PricingResult<()> {
    if outcome >= pool.len() {
        return Err(PricingError::InvalidOutcome {
            index: outcome,
            num_outcomes: pool.len(),
        });
    }
    Ok(())
}

/// Unscaled exponent for one pool entry: `x = (q / SHARES_SCALE) / b`
pub(crate) fn to_exponent(liquidity: f64, micro_shares: f64) -> f64 {
    (micro_shares / SHARES_SCALE_F) / liquidity
}

pub(crate) fn pool_exponents(liquidity: f64, pool: &[u64]) -> Vec<f64> {
    pool.iter()
        .map(|&q| to_exponent(liquidity, q as f64))
        .collect()
}

/// `ln(sum_i e^(x_i))`, stabilized by shifting every exponent by the max
///
/// Pools grow without bound over a market's life; the naive sum overflows
/// `f64` once any `x_i` passes ~709.
pub(crate) fn log_sum_exp(xs: &[f64]) -> f64 {
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = xs.iter().map(|&x| (x - max).exp()).sum();
    max + sum.ln()
}

/// Cost in whole currency units for precomputed exponents
pub(crate) fn cost_units(liquidity: f64, xs: &[f64]) -> f64 {
    liquidity * log_sum_exp(xs)
}

/// Softmax over the exponents, shifted by the max like the cost kernel
fn softmax(xs: &[f64]) -> Vec<f64> {
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let terms: Vec<f64> = xs.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = terms.iter().sum();
    terms.into_iter().map(|t| t / sum).collect()
}
