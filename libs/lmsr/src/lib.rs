//! # Bookie LMSR Library - Prediction Market Pricing Engine
//!
//! ## Purpose
//!
//! Mathematical library for logarithmic market scoring rule (LMSR) market
//! making: a numerically stable cost function, outcome prices, buy/sell
//! previews, and a bounded bisection solver that converts a currency
//! budget into a share quantity. Share and currency quantities cross the
//! API as scaled integers (micro-shares, micro-currency at six decimals);
//! floating point stays inside the transcendental kernel, apart from the
//! probability outputs.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Market snapshots (pooled shares per outcome plus
//!   the liquidity parameter) from the ledger that owns the market
//! - **Output Destinations**: Transaction builders and quoting frontends
//!   consuming share quantities and implied costs
//! - **Precision**: Integer micro-units at rest, exact `Decimal` views at
//!   the presentation boundary
//! - **Stability**: Log-sum-exp form throughout; pools can grow without
//!   bound and costs stay finite
//!
//! ## Architecture Role
//!
//! The engine is pure and synchronous. Ledger state, settlement,
//! transaction construction, and event plumbing belong to the callers;
//! this crate answers "what does this trade cost" and "what does this
//! budget buy" from a snapshot, nothing more.
//!
//! ## Performance Profile
//!
//! - **Cost evaluation**: one exp per outcome plus one ln, no allocation
//!   beyond the exponent buffer
//! - **Quote**: at most `max_iterations` cost evaluations (20 by default)
//!   over a reused buffer
//! - **Concurrency**: no shared state; callable from any thread

pub mod cost;
pub mod error;
pub mod market;
pub mod solver;
pub mod units;

pub use cost::LmsrMath;
pub use error::{PricingError, PricingResult};
pub use market::{MarketState, TradeRequest};
pub use solver::{SharesSolver, SolverConfig, TradeQuote};
pub use units::{currency_decimal, round_to_micro, shares_decimal, CURRENCY_SCALE, SHARES_SCALE};

/// Common types for pricing calculations
pub use rust_decimal::Decimal;
