//! # Wallet Aggregate
//!
//! Cash balance, holdings and acquisition log of a single owner.
//!
//! Every operation either commits completely or returns an error with the
//! wallet untouched. Checks run in a fixed order and the first failing one
//! is reported:
//!
//! ```text
//! buy:  arguments → quote exists → ask <= max → cash >= qty * ask → commit
//! sell: arguments → units held  → quote exists → bid >= min      → commit
//! ```
//!
//! The aggregate itself is single-threaded (`&mut self`); wrap it in
//! [`SharedWallet`](crate::application::services::SharedWallet) to serve
//! concurrent callers.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::domain::entities::Wallet;
//! use investment_wallet::domain::value_objects::{Asset, AssetType, Quote};
//! use rust_decimal::Decimal;
//! use std::collections::HashMap;
//!
//! let a = Asset::new("A", "Asset A", AssetType::Stock);
//! let mut quotes = HashMap::new();
//! quotes.insert(a.clone(), Quote::new(Decimal::new(10, 0), Decimal::new(9, 0)).unwrap());
//!
//! let mut wallet = Wallet::new(quotes);
//! wallet.deposit(Decimal::new(1000, 0)).unwrap();
//! wallet.buy(&a, 5, Decimal::new(10, 0)).unwrap();
//! assert_eq!(wallet.cash_balance(), Decimal::new(950, 0));
//!
//! let balance = wallet.sell(&a, 3, Decimal::new(9, 0)).unwrap();
//! assert_eq!(balance, Decimal::new(977, 0));
//! assert_eq!(wallet.quantity_of(&a), 2);
//! ```

use crate::domain::entities::acquisition::Acquisition;
use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::services::QuoteService;
use crate::domain::value_objects::{Asset, CheckedArithmetic, extend_price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A single-owner investment wallet priced by a [`QuoteService`].
///
/// # Invariants
///
/// - `cash_balance >= 0`
/// - every holding has quantity `> 0`; selling down to zero removes the key
/// - the acquisition log is append-only and in commit order
#[derive(Clone)]
pub struct Wallet<Q> {
    quotes: Q,
    cash_balance: Decimal,
    holdings: HashMap<Asset, u64>,
    acquisitions: Vec<Acquisition>,
}

impl<Q: QuoteService> Wallet<Q> {
    /// Creates an empty wallet with a zero balance.
    #[must_use]
    pub fn new(quotes: Q) -> Self {
        Self {
            quotes,
            cash_balance: Decimal::ZERO,
            holdings: HashMap::new(),
            acquisitions: Vec::new(),
        }
    }

    /// Adds `cash` to the balance and returns the new balance.
    ///
    /// # Errors
    ///
    /// - `WalletError::InvalidArgument` if `cash` is negative
    /// - `WalletError::Arithmetic` if the balance would overflow
    pub fn deposit(&mut self, cash: Decimal) -> WalletResult<Decimal> {
        self.try_deposit(cash)
            .inspect_err(|e| log_rejection("deposit", None, e))
    }

    fn try_deposit(&mut self, cash: Decimal) -> WalletResult<Decimal> {
        ensure_non_negative(cash)?;
        let balance = self.cash_balance.safe_add(cash)?;
        self.cash_balance = balance;
        tracing::info!(amount = %cash, balance = %balance, "deposit committed");
        Ok(balance)
    }

    /// Removes `cash` from the balance and returns the new balance.
    ///
    /// Withdrawing exactly the full balance leaves it at zero.
    ///
    /// # Errors
    ///
    /// - `WalletError::InvalidArgument` if `cash` is negative
    /// - `WalletError::InsufficientFunds` if the balance is below `cash`
    pub fn withdraw(&mut self, cash: Decimal) -> WalletResult<Decimal> {
        self.try_withdraw(cash)
            .inspect_err(|e| log_rejection("withdraw", None, e))
    }

    fn try_withdraw(&mut self, cash: Decimal) -> WalletResult<Decimal> {
        ensure_non_negative(cash)?;
        if self.cash_balance < cash {
            return Err(WalletError::insufficient_cash(cash, self.cash_balance));
        }

        let balance = self.cash_balance.safe_sub(cash)?;
        self.cash_balance = balance;
        tracing::info!(amount = %cash, balance = %balance, "withdrawal committed");
        Ok(balance)
    }

    /// Buys `quantity` units of `asset` at the current ask, provided the ask
    /// does not exceed `max_price`.
    ///
    /// On success the balance is debited by `quantity * ask`, the holding is
    /// increased and a new [`Acquisition`] is appended to the log and
    /// returned.
    ///
    /// # Errors
    ///
    /// In evaluation order:
    ///
    /// - `WalletError::InvalidArgument` if `quantity` is zero or `max_price`
    ///   is not positive
    /// - `WalletError::UnknownAsset` if there is no quote for `asset`
    /// - `WalletError::OfferPriceRejected` if the ask is above `max_price`
    /// - `WalletError::InsufficientFunds` if the balance cannot cover the total
    pub fn buy(
        &mut self,
        asset: &Asset,
        quantity: u64,
        max_price: Decimal,
    ) -> WalletResult<Acquisition> {
        self.try_buy(asset, quantity, max_price)
            .inspect_err(|e| log_rejection("buy", Some(asset), e))
    }

    fn try_buy(
        &mut self,
        asset: &Asset,
        quantity: u64,
        max_price: Decimal,
    ) -> WalletResult<Acquisition> {
        ensure_positive_quantity(quantity)?;
        ensure_positive_price(max_price, "max price")?;

        let ask = self.quotes.require_quote(asset)?.ask_price();
        if ask > max_price {
            return Err(WalletError::ask_above_max(asset.id(), ask, max_price));
        }

        let total = extend_price(ask, quantity)?;
        if self.cash_balance < total {
            return Err(WalletError::insufficient_cash(total, self.cash_balance));
        }

        let balance = self.cash_balance.safe_sub(total)?;
        let held = self.quantity_of(asset).safe_add(quantity)?;
        let acquisition = Acquisition::new(ask, quantity, asset.clone())?;

        self.cash_balance = balance;
        self.holdings.insert(asset.clone(), held);
        self.acquisitions.push(acquisition.clone());

        tracing::info!(
            asset = %asset.id(),
            quantity,
            price = %ask,
            total = %total,
            balance = %balance,
            acquisition_id = %acquisition.id(),
            "buy committed"
        );
        Ok(acquisition)
    }

    /// Sells `quantity` units of `asset` at the current bid, provided the bid
    /// is not below `min_price`. Returns the new balance.
    ///
    /// Selling the whole holding removes the asset. The acquisition log is
    /// never modified.
    ///
    /// # Errors
    ///
    /// In evaluation order:
    ///
    /// - `WalletError::InvalidArgument` if `quantity` is zero or `min_price`
    ///   is not positive
    /// - `WalletError::InsufficientFunds` if fewer than `quantity` units are
    ///   held, regardless of quote availability
    /// - `WalletError::UnknownAsset` if there is no quote for `asset`
    /// - `WalletError::OfferPriceRejected` if the bid is below `min_price`
    pub fn sell(&mut self, asset: &Asset, quantity: u64, min_price: Decimal) -> WalletResult<Decimal> {
        self.try_sell(asset, quantity, min_price)
            .inspect_err(|e| log_rejection("sell", Some(asset), e))
    }

    fn try_sell(&mut self, asset: &Asset, quantity: u64, min_price: Decimal) -> WalletResult<Decimal> {
        ensure_positive_quantity(quantity)?;
        ensure_positive_price(min_price, "min price")?;

        let available = self.quantity_of(asset);
        if available < quantity {
            return Err(WalletError::insufficient_units(
                asset.id(),
                quantity,
                available,
            ));
        }

        let bid = self.quotes.require_quote(asset)?.bid_price();
        if bid < min_price {
            return Err(WalletError::bid_below_min(asset.id(), bid, min_price));
        }

        let proceeds = extend_price(bid, quantity)?;
        let balance = self.cash_balance.safe_add(proceeds)?;
        let remaining = available.safe_sub(quantity)?;

        self.cash_balance = balance;
        if remaining == 0 {
            self.holdings.remove(asset);
        } else {
            self.holdings.insert(asset.clone(), remaining);
        }

        tracing::info!(
            asset = %asset.id(),
            quantity,
            price = %bid,
            proceeds = %proceeds,
            balance = %balance,
            remaining,
            "sell committed"
        );
        Ok(balance)
    }

    /// Market value of every holding at the current bid.
    ///
    /// Returns zero for an empty wallet.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownAsset` if any held asset has no quote.
    pub fn valuation(&self) -> WalletResult<Decimal> {
        let mut total = Decimal::ZERO;
        for asset in self.holdings.keys() {
            total = total.safe_add(self.valuation_of(asset)?)?;
        }
        Ok(total)
    }

    /// Market value of one holding: `bid * held quantity`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownAsset` if `asset` is not held or has no
    /// quote.
    pub fn valuation_of(&self, asset: &Asset) -> WalletResult<Decimal> {
        let held = self
            .holdings
            .get(asset)
            .copied()
            .ok_or_else(|| WalletError::unknown_asset(asset.id()))?;
        let bid = self.quotes.require_quote(asset)?.bid_price();
        Ok(extend_price(bid, held)?)
    }

    /// The held asset with the strictly greatest valuation.
    ///
    /// Returns `Ok(None)` for an empty wallet. On equal valuations the asset
    /// met first while iterating holdings wins; that iteration order is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownAsset` if any held asset has no quote.
    pub fn most_valuable_asset(&self) -> WalletResult<Option<Asset>> {
        let mut best: Option<(&Asset, Decimal)> = None;
        for asset in self.holdings.keys() {
            let value = self.valuation_of(asset)?;
            match best {
                Some((_, top)) if value <= top => {}
                _ => best = Some((asset, value)),
            }
        }
        Ok(best.map(|(asset, _)| asset.clone()))
    }

    /// Snapshot of the full acquisition log, oldest first.
    #[must_use]
    pub fn all_acquisitions(&self) -> Vec<Acquisition> {
        self.acquisitions.clone()
    }

    /// Snapshot of the `min(n, len)` most recent acquisitions.
    ///
    /// The result is a set: callers must not rely on any ordering.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `n` is zero.
    pub fn last_n_acquisitions(&self, n: usize) -> WalletResult<HashSet<Acquisition>> {
        if n == 0 {
            return Err(WalletError::invalid_argument(
                "number of acquisitions must be positive",
            ));
        }
        let skip = self.acquisitions.len().saturating_sub(n);
        Ok(self.acquisitions.iter().skip(skip).cloned().collect())
    }
}

impl<Q> Wallet<Q> {
    /// Returns the current cash balance.
    #[inline]
    #[must_use]
    pub fn cash_balance(&self) -> Decimal {
        self.cash_balance
    }

    /// Returns the units held of `asset`, zero if none.
    #[must_use]
    pub fn quantity_of(&self, asset: &Asset) -> u64 {
        self.holdings.get(asset).copied().unwrap_or(0)
    }

    /// Snapshot of all holdings.
    #[must_use]
    pub fn holdings(&self) -> HashMap<Asset, u64> {
        self.holdings.clone()
    }

    /// Returns true if no asset is held.
    #[must_use]
    pub fn has_no_holdings(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Number of acquisitions recorded so far.
    #[must_use]
    pub fn acquisition_count(&self) -> usize {
        self.acquisitions.len()
    }

    /// Returns the quote service backing this wallet.
    #[must_use]
    pub fn quotes(&self) -> &Q {
        &self.quotes
    }

    /// Serializable summary of the wallet state.
    ///
    /// Holdings are sorted by asset id so the output is stable.
    #[must_use]
    pub fn snapshot(&self) -> WalletSnapshot {
        let mut holdings: Vec<HoldingSnapshot> = self
            .holdings
            .iter()
            .map(|(asset, &quantity)| HoldingSnapshot {
                asset: asset.clone(),
                quantity,
            })
            .collect();
        holdings.sort_by(|a, b| a.asset.id().cmp(b.asset.id()));

        WalletSnapshot {
            cash_balance: self.cash_balance,
            holdings,
            acquisition_count: self.acquisitions.len(),
        }
    }
}

impl<Q> fmt::Debug for Wallet<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("cash_balance", &self.cash_balance)
            .field("holdings", &self.holdings)
            .field("acquisitions", &self.acquisitions.len())
            .finish_non_exhaustive()
    }
}

/// One line of a [`WalletSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingSnapshot {
    /// The held asset.
    pub asset: Asset,
    /// Units held.
    pub quantity: u64,
}

/// Point-in-time summary of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Cash balance.
    pub cash_balance: Decimal,
    /// Holdings sorted by asset id.
    pub holdings: Vec<HoldingSnapshot>,
    /// Number of acquisitions in the log.
    pub acquisition_count: usize,
}

fn ensure_non_negative(cash: Decimal) -> WalletResult<()> {
    if cash < Decimal::ZERO {
        return Err(WalletError::invalid_argument("cash must not be negative"));
    }
    Ok(())
}

fn ensure_positive_quantity(quantity: u64) -> WalletResult<()> {
    if quantity == 0 {
        return Err(WalletError::invalid_argument("quantity must be positive"));
    }
    Ok(())
}

fn ensure_positive_price(price: Decimal, what: &str) -> WalletResult<()> {
    if price <= Decimal::ZERO {
        return Err(WalletError::invalid_argument(format!(
            "{what} must be positive"
        )));
    }
    Ok(())
}

fn log_rejection(operation: &'static str, asset: Option<&Asset>, error: &WalletError) {
    tracing::debug!(
        operation,
        asset = asset.map(Asset::id),
        kind = error.kind(),
        error = %error,
        "transaction rejected"
    );
}
