use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::debug;

use bookie_lmsr::{
    currency_decimal, shares_decimal, LmsrMath, MarketState, SharesSolver, SolverConfig,
    TradeRequest,
};

#[derive(Parser)]
#[command(name = "bq")]
#[command(about = "Bookie Quote - LMSR pricing from the command line")]
#[command(version)]
struct Cli {
    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book cost of a market snapshot
    Cost {
        #[command(flatten)]
        market: MarketArgs,
    },
    /// Price of every outcome
    Prices {
        #[command(flatten)]
        market: MarketArgs,
    },
    /// Shares a currency budget buys
    Quote {
        #[command(flatten)]
        market: MarketArgs,
        /// Outcome index to buy
        #[arg(short, long)]
        outcome: usize,
        /// Budget in micro-currency units
        #[arg(short, long)]
        amount: i64,
        /// Search ceiling in micro-shares
        #[arg(long)]
        ceiling: Option<u64>,
        /// Bisection iteration cap
        #[arg(long)]
        max_iterations: Option<u32>,
        /// Convergence tolerance in micro-units
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// Worst-case funding for a fresh market
    Funding {
        /// Liquidity parameter b
        #[arg(short = 'b', long)]
        liquidity: f64,
        /// Number of outcomes
        #[arg(short = 'n', long)]
        outcomes: usize,
    },
}

#[derive(Args)]
struct MarketArgs {
    /// Liquidity parameter b
    #[arg(short = 'b', long)]
    liquidity: Option<f64>,
    /// Pooled shares per outcome, in micro-shares
    #[arg(value_name = "POOL")]
    pool: Vec<u64>,
    /// Read the market snapshot from a JSON file instead
    #[arg(short, long, conflicts_with_all = ["liquidity", "pool"])]
    market: Option<PathBuf>,
}

impl MarketArgs {
    fn resolve(&self) -> Result<MarketState> {
        if let Some(path) = &self.market {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading market snapshot {}", path.display()))?;
            let state: MarketState = serde_json::from_str(&text)
                .with_context(|| format!("parsing market snapshot {}", path.display()))?;
            Ok(state)
        } else {
            let liquidity = self
                .liquidity
                .context("provide --liquidity with an inline pool, or --market <file>")?;
            Ok(MarketState::new(liquidity, self.pool.clone())?)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("bq=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cost { market } => {
            let state = market.resolve()?;
            let cost = state.cost()?;
            if cli.json {
                println!("{}", json!({ "cost_micro": cost, "cost": currency_decimal(cost) }));
            } else {
                println!("Book cost: {} ({} micro-units)", currency_decimal(cost), cost);
            }
        }

        Commands::Prices { market } => {
            let state = market.resolve()?;
            let prices = state.prices()?;
            if cli.json {
                println!("{}", json!({ "prices": prices }));
            } else {
                for (outcome, price) in prices.iter().enumerate() {
                    println!("outcome {}: {:.6}", outcome, price);
                }
            }
        }

        Commands::Quote {
            market,
            outcome,
            amount,
            ceiling,
            max_iterations,
            tolerance,
        } => {
            let state = market.resolve()?;

            let mut config = SolverConfig::default();
            if let Some(v) = ceiling {
                config.share_ceiling = v;
            }
            if let Some(v) = max_iterations {
                config.max_iterations = v;
            }
            if let Some(v) = tolerance {
                config.cost_tolerance = v;
            }
            let solver = SharesSolver::new(config);

            let quote = state.quote_with(&solver, &TradeRequest { outcome, amount })?;
            debug!(?quote, "resolved quote");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!(
                    "Shares: {} ({} micro-shares)",
                    shares_decimal(quote.shares),
                    quote.shares
                );
                println!(
                    "Cost: {} ({} micro-units)",
                    currency_decimal(quote.cost),
                    quote.cost
                );
                println!(
                    "Residual: {} micro-unit(s) after {} iteration(s)",
                    quote.residual, quote.iterations
                );
            }
        }

        Commands::Funding {
            liquidity,
            outcomes,
        } => {
            let funding = LmsrMath::initial_funding(liquidity, outcomes)?;
            if cli.json {
                println!(
                    "{}",
                    json!({ "funding_micro": funding, "funding": currency_decimal(funding) })
                );
            } else {
                println!(
                    "Required funding: {} ({} micro-units)",
                    currency_decimal(funding),
                    funding
                );
            }
        }
    }

    Ok(())
}
