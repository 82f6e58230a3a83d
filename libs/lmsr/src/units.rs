//! Scaled-integer units and conversion boundaries
//!
//! Share counts and currency amounts cross the engine's API as integers
//! scaled by 1e6, matching the ledger's 6-decimal representation. The
//! scale constants, the single rounding convention, and the exact decimal
//! views live here so the float boundary stays in one place.

use rust_decimal::Decimal;

/// Micro-shares per whole share. Pool entries and quoted share quantities
/// are integers in this scale.
pub const SHARES_SCALE: u64 = 1_000_000;

/// Micro-units per whole currency unit (6-decimal stablecoin convention).
/// Costs, budgets, and payouts are integers in this scale.
pub const CURRENCY_SCALE: u64 = 1_000_000;

pub(crate) const SHARES_SCALE_F: f64 = 1_000_000.0;
pub(crate) const CURRENCY_SCALE_F: f64 = 1_000_000.0;

/// Round a whole-unit value to micro-units, half away from zero.
///
/// This is the engine's single rounding convention (`f64::round`
/// semantics, matching `Math.round` for the non-negative values produced
/// here). Results clamp to the `u64` range; negative inputs clamp to 0.
pub fn round_to_micro(units: f64) -> u64 {
    (units * CURRENCY_SCALE_F).round() as u64
}

/// Exact decimal view of a micro-unit currency amount (e.g. `1_184_921`
/// becomes `1.184921`). No floating point is involved.
pub fn currency_decimal(micro: u64) -> Decimal {
    Decimal::from_i128_with_scale(micro as i128, 6)
}

/// Exact decimal view of a micro-share quantity.
pub fn shares_decimal(micro: u64) -> Decimal {
    Decimal::from_i128_with_scale(micro as i128, 6)
}
