//! # Orders
//!
//! Text-encoded wallet instructions, as accepted by the command-line front end.
//!
//! ```text
//! deposit:<amount>
//! withdraw:<amount>
//! buy:<asset-id>:<quantity>:<max-price>
//! sell:<asset-id>:<quantity>:<min-price>
//! ```
//!
//! # Examples
//!
//! ```
//! use investment_wallet::application::services::OrderRequest;
//! use rust_decimal::Decimal;
//!
//! let order: OrderRequest = "buy:BTC:2:65000".parse().unwrap();
//! assert_eq!(
//!     order,
//!     OrderRequest::Buy {
//!         asset_id: "BTC".to_string(),
//!         quantity: 2,
//!         max_price: Decimal::new(65000, 0),
//!     }
//! );
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::shared_wallet::SharedWallet;
use crate::domain::entities::Acquisition;
use crate::domain::services::QuoteService;
use crate::domain::value_objects::Asset;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single wallet instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRequest {
    /// Add cash.
    Deposit(Decimal),
    /// Remove cash.
    Withdraw(Decimal),
    /// Buy at or below a price ceiling.
    Buy {
        /// Asset identifier.
        asset_id: String,
        /// Units to buy.
        quantity: u64,
        /// Highest acceptable ask.
        max_price: Decimal,
    },
    /// Sell at or above a price floor.
    Sell {
        /// Asset identifier.
        asset_id: String,
        /// Units to sell.
        quantity: u64,
        /// Lowest acceptable bid.
        min_price: Decimal,
    },
}

/// Result of an executed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderOutcome {
    /// New cash balance after a deposit, withdrawal or sale.
    Balance {
        /// The balance.
        balance: Decimal,
    },
    /// Acquisition created by a purchase.
    Acquired {
        /// The new log entry.
        acquisition: Acquisition,
    },
}

impl OrderRequest {
    /// Executes the order against `wallet`, resolving asset ids with
    /// `resolve`.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::AssetNotConfigured` if `resolve` does not know
    ///   the asset id
    /// - `ApplicationError::Wallet` if the wallet rejects the operation
    pub fn execute<Q, F>(&self, wallet: &SharedWallet<Q>, resolve: F) -> ApplicationResult<OrderOutcome>
    where
        Q: QuoteService,
        F: Fn(&str) -> Option<Asset>,
    {
        let lookup = |id: &str| {
            resolve(id).ok_or_else(|| ApplicationError::AssetNotConfigured(id.to_string()))
        };

        let outcome = match self {
            Self::Deposit(amount) => OrderOutcome::Balance {
                balance: wallet.deposit(*amount)?,
            },
            Self::Withdraw(amount) => OrderOutcome::Balance {
                balance: wallet.withdraw(*amount)?,
            },
            Self::Buy {
                asset_id,
                quantity,
                max_price,
            } => OrderOutcome::Acquired {
                acquisition: wallet.buy(&lookup(asset_id)?, *quantity, *max_price)?,
            },
            Self::Sell {
                asset_id,
                quantity,
                min_price,
            } => OrderOutcome::Balance {
                balance: wallet.sell(&lookup(asset_id)?, *quantity, *min_price)?,
            },
        };
        tracing::debug!(order = %self, "order executed");
        Ok(outcome)
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit(amount) => write!(f, "deposit:{amount}"),
            Self::Withdraw(amount) => write!(f, "withdraw:{amount}"),
            Self::Buy {
                asset_id,
                quantity,
                max_price,
            } => write!(f, "buy:{asset_id}:{quantity}:{max_price}"),
            Self::Sell {
                asset_id,
                quantity,
                min_price,
            } => write!(f, "sell:{asset_id}:{quantity}:{min_price}"),
        }
    }
}

impl FromStr for OrderRequest {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ApplicationError::invalid_order(s, reason);
        let parse_decimal = |text: &str| {
            Decimal::from_str(text.trim()).map_err(|e| invalid(&format!("bad amount '{text}': {e}")))
        };
        let parse_quantity = |text: &str| {
            text.trim()
                .parse::<u64>()
                .map_err(|e| invalid(&format!("bad quantity '{text}': {e}")))
        };

        let fields: Vec<&str> = s.trim().split(':').collect();
        match fields.as_slice() {
            [kind, amount] if kind.eq_ignore_ascii_case("deposit") => {
                Ok(Self::Deposit(parse_decimal(*amount)?))
            }
            [kind, amount] if kind.eq_ignore_ascii_case("withdraw") => {
                Ok(Self::Withdraw(parse_decimal(*amount)?))
            }
            [kind, asset_id, quantity, price] if kind.eq_ignore_ascii_case("buy") => Ok(Self::Buy {
                asset_id: asset_id.trim().to_string(),
                quantity: parse_quantity(*quantity)?,
                max_price: parse_decimal(*price)?,
            }),
            [kind, asset_id, quantity, price] if kind.eq_ignore_ascii_case("sell") => {
                Ok(Self::Sell {
                    asset_id: asset_id.trim().to_string(),
                    quantity: parse_quantity(*quantity)?,
                    min_price: parse_decimal(*price)?,
                })
            }
            _ => Err(invalid(
                "expected deposit:<amount>, withdraw:<amount>, buy:<id>:<qty>:<max> or sell:<id>:<qty>:<min>",
            )),
        }
    }
}
