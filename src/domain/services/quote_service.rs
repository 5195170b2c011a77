//! # Quote Service
//!
//! Port through which the wallet reads live market prices.
//!
//! Implementations must behave as pure reads: the wallet calls
//! [`QuoteService::get_quote`] for every pricing decision and never caches
//! the answer, so a quote replaced between two calls is seen by the second.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::domain::services::QuoteService;
//! use investment_wallet::domain::value_objects::{Asset, AssetType, Quote};
//! use rust_decimal::Decimal;
//! use std::collections::HashMap;
//!
//! let btc = Asset::new("BTC", "Bitcoin", AssetType::Crypto);
//! let mut book = HashMap::new();
//! book.insert(btc.clone(), Quote::new(Decimal::new(101, 0), Decimal::new(99, 0)).unwrap());
//!
//! assert!(book.get_quote(&btc).is_some());
//! ```

use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{Asset, Quote};
use std::collections::HashMap;
use std::sync::Arc;

/// Source of current bid/ask quotes.
///
/// Returns `None` when the asset is unknown to the source. An absent asset
/// argument is unrepresentable, since assets are always passed by reference.
pub trait QuoteService: Send + Sync {
    /// Returns the current quote for `asset`, if one exists.
    fn get_quote(&self, asset: &Asset) -> Option<Quote>;

    /// Returns the current quote for `asset`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownAsset` if the source has no quote.
    fn require_quote(&self, asset: &Asset) -> WalletResult<Quote> {
        self.get_quote(asset)
            .ok_or_else(|| WalletError::unknown_asset(asset.id()))
    }
}

impl<T: QuoteService + ?Sized> QuoteService for Arc<T> {
    fn get_quote(&self, asset: &Asset) -> Option<Quote> {
        (**self).get_quote(asset)
    }
}

impl<T: QuoteService + ?Sized> QuoteService for &T {
    fn get_quote(&self, asset: &Asset) -> Option<Quote> {
        (**self).get_quote(asset)
    }
}

/// A fixed quote book.
impl<S> QuoteService for HashMap<Asset, Quote, S>
where
    S: std::hash::BuildHasher + Send + Sync,
{
    fn get_quote(&self, asset: &Asset) -> Option<Quote> {
        self.get(asset).copied()
    }
}
