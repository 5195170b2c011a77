//! # Investment Wallet
//!
//! A single-owner investment wallet: a cash balance, per-asset holdings and
//! an append-only log of acquisitions, traded against a live quote service.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ application   SharedWallet, OrderRequest     │
//! ├──────────────────────────────────────────────┤
//! │ domain        Wallet, Acquisition, Asset,    │
//! │               Quote, QuoteService, errors    │
//! ├──────────────────────────────────────────────┤
//! │ infrastructure InMemoryQuoteService, config, │
//! │               telemetry                      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Transaction rules
//!
//! - Buys fill at the current ask and are refused above the caller's maximum.
//! - Sells fill at the current bid and are refused below the caller's minimum.
//! - Valuation uses bid prices only.
//! - A rejected operation leaves the wallet unchanged.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let a = Asset::new("A", "Asset A", AssetType::Stock);
//! let quotes = InMemoryQuoteService::new();
//! quotes.set_quote(a.clone(), Quote::new(Decimal::from(10), Decimal::from(9)).unwrap());
//!
//! let mut wallet = Wallet::new(quotes);
//! wallet.deposit(Decimal::from(1000)).unwrap();
//! wallet.buy(&a, 5, Decimal::from(10)).unwrap();
//! assert_eq!(wallet.cash_balance(), Decimal::from(950));
//!
//! assert_eq!(wallet.sell(&a, 3, Decimal::from(9)).unwrap(), Decimal::from(977));
//! assert!(wallet.sell(&a, 5, Decimal::from(9)).unwrap_err().is_insufficient_funds());
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

/// Commonly used types.
pub mod prelude {
    pub use crate::application::services::{OrderOutcome, OrderRequest, SharedWallet};
    pub use crate::application::{ApplicationError, ApplicationResult};
    pub use crate::domain::entities::{Acquisition, Wallet, WalletSnapshot};
    pub use crate::domain::services::QuoteService;
    pub use crate::domain::value_objects::{Asset, AssetType, Quote};
    pub use crate::domain::{WalletError, WalletResult};
    pub use crate::infrastructure::quotes::InMemoryQuoteService;
}
