//! # Quote Value Object
//!
//! Two-sided market price for an asset at lookup time.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::domain::value_objects::Quote;
//! use rust_decimal::Decimal;
//!
//! let quote = Quote::new(Decimal::new(1010, 2), Decimal::new(995, 2)).unwrap();
//! assert_eq!(quote.spread(), Decimal::new(15, 2));
//! ```

use crate::domain::errors::{WalletError, WalletResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable bid/ask quote.
///
/// # Invariants
///
/// - `ask_price > 0`
/// - `bid_price > 0`
///
/// The wallet never stores quotes; each pricing decision re-queries the
/// [`QuoteService`](crate::domain::services::QuoteService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuote")]
pub struct Quote {
    ask_price: Decimal,
    bid_price: Decimal,
}

#[derive(Deserialize)]
struct RawQuote {
    ask_price: Decimal,
    bid_price: Decimal,
}

impl TryFrom<RawQuote> for Quote {
    type Error = WalletError;

    fn try_from(raw: RawQuote) -> Result<Self, Self::Error> {
        Self::new(raw.ask_price, raw.bid_price)
    }
}

impl Quote {
    /// Creates a new quote with validation.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if either price is not positive.
    pub fn new(ask_price: Decimal, bid_price: Decimal) -> WalletResult<Self> {
        if ask_price <= Decimal::ZERO {
            return Err(WalletError::invalid_argument("ask price must be positive"));
        }
        if bid_price <= Decimal::ZERO {
            return Err(WalletError::invalid_argument("bid price must be positive"));
        }
        Ok(Self {
            ask_price,
            bid_price,
        })
    }

    /// Price the market sells at (cost to a buyer).
    #[inline]
    #[must_use]
    pub fn ask_price(&self) -> Decimal {
        self.ask_price
    }

    /// Price the market buys back at (proceeds to a seller).
    #[inline]
    #[must_use]
    pub fn bid_price(&self) -> Decimal {
        self.bid_price
    }

    /// Ask minus bid. Negative for a crossed quote.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.ask_price - self.bid_price
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.bid_price, self.ask_price)
    }
}
