//! Replays a list of orders against a freshly configured wallet and prints
//! the resulting state as JSON.
//!
//! ```text
//! wallet-cli --config wallet.toml --order buy:BTC:2:66000 --order sell:BTC:1:64000
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use investment_wallet::application::services::{OrderRequest, SharedWallet};
use investment_wallet::infrastructure::config::AppConfig;
use investment_wallet::infrastructure::telemetry::init_tracing;
use rust_decimal::Decimal;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "wallet-cli", version, about = "Replay wallet orders against a static quote book")]
struct Args {
    /// TOML configuration file (opening balance, quotes, logging)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Order to execute, repeatable: deposit:<amt>, withdraw:<amt>,
    /// buy:<id>:<qty>:<max>, sell:<id>:<qty>:<min>
    #[arg(long = "order", short)]
    orders: Vec<String>,

    /// Record rejected orders and continue instead of stopping
    #[arg(long)]
    keep_going: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.logging);

    let orders = args
        .orders
        .iter()
        .map(|text| text.parse::<OrderRequest>())
        .collect::<Result<Vec<_>, _>>()?;

    let book = Arc::new(config.quote_book()?);
    let wallet = SharedWallet::new(Arc::clone(&book));
    if config.wallet.opening_balance > Decimal::ZERO {
        wallet.deposit(config.wallet.opening_balance)?;
    }
    info!(
        opening_balance = %config.wallet.opening_balance,
        quotes = book.len(),
        orders = orders.len(),
        "wallet ready"
    );

    let mut results = Vec::with_capacity(orders.len());
    for order in &orders {
        match order.execute(&wallet, |id| book.asset_by_id(id)) {
            Ok(outcome) => results.push(json!({ "order": order.to_string(), "outcome": outcome })),
            Err(err) if args.keep_going => {
                warn!(order = %order, error = %err, "order rejected");
                results.push(json!({ "order": order.to_string(), "error": err.to_string() }));
            }
            Err(err) => return Err(err).with_context(|| format!("executing order {order}")),
        }
    }

    let report = json!({
        "results": results,
        "valuation": wallet.valuation()?,
        "snapshot": wallet.snapshot(),
    });
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");
    Ok(())
}
