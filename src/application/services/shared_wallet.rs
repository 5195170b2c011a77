//! # Shared Wallet
//!
//! Thread-safe handle around a [`Wallet`].
//!
//! Each operation takes one lock for its whole check-then-act sequence
//! (quote lookup, limit check, funds check, mutation), so concurrent buyers
//! and sellers can never overdraft the balance or oversell a holding.
//! Handles are cheap to clone and all clones address the same wallet.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::application::services::SharedWallet;
//! use investment_wallet::infrastructure::quotes::InMemoryQuoteService;
//! use rust_decimal::Decimal;
//! use std::thread;
//!
//! let wallet = SharedWallet::new(InMemoryQuoteService::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let wallet = wallet.clone();
//!         thread::spawn(move || wallet.deposit(Decimal::new(25, 0)))
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap().unwrap();
//! }
//! assert_eq!(wallet.cash_balance(), Decimal::new(100, 0));
//! ```

use crate::domain::entities::{Acquisition, Wallet, WalletSnapshot};
use crate::domain::errors::WalletResult;
use crate::domain::services::QuoteService;
use crate::domain::value_objects::Asset;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A [`Wallet`] serialized behind a single mutex.
pub struct SharedWallet<Q> {
    inner: Arc<Mutex<Wallet<Q>>>,
}

impl<Q> Clone for SharedWallet<Q> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Q: QuoteService> SharedWallet<Q> {
    /// Creates an empty shared wallet priced by `quotes`.
    #[must_use]
    pub fn new(quotes: Q) -> Self {
        Self::from_wallet(Wallet::new(quotes))
    }

    /// Wraps an existing wallet.
    #[must_use]
    pub fn from_wallet(wallet: Wallet<Q>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(wallet)),
        }
    }

    /// See [`Wallet::deposit`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::deposit`].
    pub fn deposit(&self, cash: Decimal) -> WalletResult<Decimal> {
        self.inner.lock().deposit(cash)
    }

    /// See [`Wallet::withdraw`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::withdraw`].
    pub fn withdraw(&self, cash: Decimal) -> WalletResult<Decimal> {
        self.inner.lock().withdraw(cash)
    }

    /// See [`Wallet::buy`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::buy`].
    pub fn buy(&self, asset: &Asset, quantity: u64, max_price: Decimal) -> WalletResult<Acquisition> {
        self.inner.lock().buy(asset, quantity, max_price)
    }

    /// See [`Wallet::sell`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::sell`].
    pub fn sell(&self, asset: &Asset, quantity: u64, min_price: Decimal) -> WalletResult<Decimal> {
        self.inner.lock().sell(asset, quantity, min_price)
    }

    /// See [`Wallet::valuation`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::valuation`].
    pub fn valuation(&self) -> WalletResult<Decimal> {
        self.inner.lock().valuation()
    }

    /// See [`Wallet::valuation_of`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::valuation_of`].
    pub fn valuation_of(&self, asset: &Asset) -> WalletResult<Decimal> {
        self.inner.lock().valuation_of(asset)
    }

    /// See [`Wallet::most_valuable_asset`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::most_valuable_asset`].
    pub fn most_valuable_asset(&self) -> WalletResult<Option<Asset>> {
        self.inner.lock().most_valuable_asset()
    }

    /// See [`Wallet::all_acquisitions`].
    #[must_use]
    pub fn all_acquisitions(&self) -> Vec<Acquisition> {
        self.inner.lock().all_acquisitions()
    }

    /// See [`Wallet::last_n_acquisitions`].
    ///
    /// # Errors
    ///
    /// Same as [`Wallet::last_n_acquisitions`].
    pub fn last_n_acquisitions(&self, n: usize) -> WalletResult<HashSet<Acquisition>> {
        self.inner.lock().last_n_acquisitions(n)
    }
}

impl<Q> SharedWallet<Q> {
    /// Current cash balance.
    #[must_use]
    pub fn cash_balance(&self) -> Decimal {
        self.inner.lock().cash_balance()
    }

    /// Units held of `asset`.
    #[must_use]
    pub fn quantity_of(&self, asset: &Asset) -> u64 {
        self.inner.lock().quantity_of(asset)
    }

    /// Snapshot of all holdings.
    #[must_use]
    pub fn holdings(&self) -> HashMap<Asset, u64> {
        self.inner.lock().holdings()
    }

    /// Serializable summary of the wallet state.
    #[must_use]
    pub fn snapshot(&self) -> WalletSnapshot {
        self.inner.lock().snapshot()
    }

    /// Runs `f` with exclusive access, so several operations commit as one
    /// uninterrupted sequence.
    pub fn transact<R>(&self, f: impl FnOnce(&mut Wallet<Q>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<Q> fmt::Debug for SharedWallet<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedWallet").field(&*self.inner.lock()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AssetType, Quote};
    use rust_decimal_macros::dec;
    use std::thread;

    fn asset_a() -> Asset {
        Asset::new("A", "Asset A", AssetType::Stock)
    }

    fn shared() -> SharedWallet<HashMap<Asset, Quote>> {
        let mut book = HashMap::new();
        book.insert(asset_a(), Quote::new(dec!(10), dec!(9)).unwrap());
        SharedWallet::new(book)
    }

    #[test]
    fn clones_share_state() {
        let wallet = shared();
        let other = wallet.clone();
        wallet.deposit(dec!(100)).unwrap();
        assert_eq!(other.cash_balance(), dec!(100));
    }

    #[test]
    fn delegates_operations() {
        let wallet = shared();
        wallet.deposit(dec!(1000)).unwrap();
        wallet.buy(&asset_a(), 5, dec!(10)).unwrap();
        assert_eq!(wallet.sell(&asset_a(), 3, dec!(9)).unwrap(), dec!(977));
        assert_eq!(wallet.withdraw(dec!(77)).unwrap(), dec!(900));
        assert_eq!(wallet.valuation().unwrap(), dec!(18));
        assert_eq!(wallet.valuation_of(&asset_a()).unwrap(), dec!(18));
        assert_eq!(wallet.most_valuable_asset().unwrap(), Some(asset_a()));
        assert_eq!(wallet.all_acquisitions().len(), 1);
        assert_eq!(wallet.last_n_acquisitions(1).unwrap().len(), 1);
        assert_eq!(wallet.quantity_of(&asset_a()), 2);
        assert_eq!(wallet.holdings().len(), 1);
        assert_eq!(wallet.snapshot().acquisition_count, 1);
    }

    #[test]
    fn concurrent_buyers_never_overdraw() {
        let wallet = shared();
        wallet.deposit(dec!(100)).unwrap();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let wallet = wallet.clone();
                thread::spawn(move || wallet.buy(&asset_a(), 1, dec!(10)).is_ok())
            })
            .collect();
        let filled = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(filled, 10);
        assert_eq!(wallet.cash_balance(), Decimal::ZERO);
        assert_eq!(wallet.quantity_of(&asset_a()), 10);
    }

    #[test]
    fn transact_runs_under_one_lock() {
        let wallet = shared();
        let balance = wallet.transact(|w| {
            w.deposit(dec!(50)).unwrap();
            w.buy(&asset_a(), 2, dec!(10)).unwrap();
            w.cash_balance()
        });
        assert_eq!(balance, dec!(30));
    }

    #[test]
    fn debug_includes_wallet() {
        let debug = format!("{:?}", shared());
        assert!(debug.starts_with("SharedWallet(Wallet {"));
    }
}
