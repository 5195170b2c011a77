//! # In-Memory Quote Service
//!
//! Concurrent quote book implementing [`QuoteService`].
//!
//! Quotes can be replaced while wallets are reading them; the next wallet
//! call sees the new price.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::domain::services::QuoteService;
//! use investment_wallet::domain::value_objects::{Asset, AssetType, Quote};
//! use investment_wallet::infrastructure::quotes::InMemoryQuoteService;
//! use rust_decimal::Decimal;
//!
//! let eur = Asset::new("EUR", "Euro", AssetType::Fiat);
//! let quotes = InMemoryQuoteService::new();
//! quotes.set_quote(eur.clone(), Quote::new(Decimal::new(109, 2), Decimal::new(107, 2)).unwrap());
//!
//! assert_eq!(quotes.get_quote(&eur).unwrap().bid_price(), Decimal::new(107, 2));
//! ```

use crate::domain::services::QuoteService;
use crate::domain::value_objects::{Asset, Quote};
use dashmap::DashMap;

/// In-memory quote book keyed by [`Asset`].
///
/// # Thread Safety
///
/// Backed by a [`DashMap`]; share it behind an `Arc` between the wallet and
/// whatever feeds prices.
#[derive(Debug, Default)]
pub struct InMemoryQuoteService {
    quotes: DashMap<Asset, Quote>,
}

impl InMemoryQuoteService {
    /// Creates an empty quote book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a quote book pre-filled with `quotes`.
    ///
    /// Later entries for the same asset replace earlier ones.
    #[must_use]
    pub fn from_quotes(quotes: impl IntoIterator<Item = (Asset, Quote)>) -> Self {
        Self {
            quotes: quotes.into_iter().collect(),
        }
    }

    /// Publishes a quote, returning the one it replaced.
    pub fn set_quote(&self, asset: Asset, quote: Quote) -> Option<Quote> {
        tracing::trace!(asset = %asset.id(), quote = %quote, "quote published");
        self.quotes.insert(asset, quote)
    }

    /// Withdraws the quote for `asset`, returning it if present.
    pub fn remove_quote(&self, asset: &Asset) -> Option<Quote> {
        self.quotes.remove(asset).map(|(_, quote)| quote)
    }

    /// Finds a quoted asset by identifier.
    ///
    /// If several quoted assets share the id, which one is returned is
    /// unspecified.
    #[must_use]
    pub fn asset_by_id(&self, id: &str) -> Option<Asset> {
        self.quotes
            .iter()
            .find(|entry| entry.key().id() == id)
            .map(|entry| entry.key().clone())
    }

    /// Returns every quoted asset.
    #[must_use]
    pub fn assets(&self) -> Vec<Asset> {
        self.quotes.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of quoted assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if no asset is quoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteService for InMemoryQuoteService {
    fn get_quote(&self, asset: &Asset) -> Option<Quote> {
        self.quotes.get(asset).map(|entry| *entry.value())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AssetType;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::thread;

    fn eth() -> Asset {
        Asset::new("ETH", "Ether", AssetType::Crypto)
    }

    fn quote(ask: rust_decimal::Decimal, bid: rust_decimal::Decimal) -> Quote {
        Quote::new(ask, bid).unwrap()
    }

    #[test]
    fn new_book_is_empty() {
        let quotes = InMemoryQuoteService::new();
        assert!(quotes.is_empty());
        assert!(quotes.get_quote(&eth()).is_none());
    }

    #[test]
    fn set_replaces_and_returns_previous() {
        let quotes = InMemoryQuoteService::new();
        assert!(quotes.set_quote(eth(), quote(dec!(10), dec!(9))).is_none());
        let previous = quotes.set_quote(eth(), quote(dec!(12), dec!(11))).unwrap();

        assert_eq!(previous.ask_price(), dec!(10));
        assert_eq!(quotes.get_quote(&eth()).unwrap().ask_price(), dec!(12));
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn remove_makes_asset_unknown() {
        let quotes = InMemoryQuoteService::from_quotes([(eth(), quote(dec!(10), dec!(9)))]);
        assert!(quotes.remove_quote(&eth()).is_some());
        assert!(quotes.get_quote(&eth()).is_none());
        assert!(quotes.remove_quote(&eth()).is_none());
    }

    #[test]
    fn lookup_by_id() {
        let quotes = InMemoryQuoteService::from_quotes([(eth(), quote(dec!(10), dec!(9)))]);
        assert_eq!(quotes.asset_by_id("ETH"), Some(eth()));
        assert_eq!(quotes.asset_by_id("BTC"), None);
        assert_eq!(quotes.assets(), vec![eth()]);
    }

    #[test]
    fn concurrent_publishers() {
        let quotes = Arc::new(InMemoryQuoteService::new());
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let quotes = Arc::clone(&quotes);
                thread::spawn(move || {
                    let asset = Asset::new(format!("S{i}"), "Stock", AssetType::Stock);
                    quotes.set_quote(asset, quote(dec!(2), dec!(1)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(quotes.len(), 8);
    }
}
