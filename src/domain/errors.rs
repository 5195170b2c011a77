//! # Domain Errors
//!
//! Failure taxonomy of the wallet.
//!
//! ```text
//! WalletError
//! ├── InvalidArgument     - structurally invalid input, nothing touched
//! ├── InsufficientFunds   - not enough cash or units
//! ├── UnknownAsset        - no quote, or asset not held
//! ├── OfferPriceRejected  - live quote breaks the caller's price limit
//! └── Arithmetic          - total does not fit the numeric model
//! ```
//!
//! Every variant leaves the wallet unchanged and usable.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Which resource a transaction ran short of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortfall {
    /// Cash balance below the amount required.
    Cash {
        /// Amount the operation needed.
        required: Decimal,
        /// Balance at the time of the check.
        available: Decimal,
    },
    /// Held units below the quantity requested.
    Units {
        /// Identifier of the asset being sold.
        asset_id: String,
        /// Units the operation needed.
        required: u64,
        /// Units held at the time of the check.
        available: u64,
    },
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash {
                required,
                available,
            } => write!(f, "cash required {required}, available {available}"),
            Self::Units {
                asset_id,
                required,
                available,
            } => write!(
                f,
                "{asset_id} units required {required}, available {available}"
            ),
        }
    }
}

/// Side of the market whose price limit was breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLimit {
    /// Buyer's ceiling: ask must not exceed it.
    Max,
    /// Seller's floor: bid must not fall below it.
    Min,
}

/// Errors produced by wallet operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Caller supplied a structurally invalid input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Cash or held quantity is insufficient.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(Shortfall),

    /// No quote exists for the asset, or the asset is not held.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    /// Live quote violates the caller's price limit.
    #[error("offer price rejected for {asset_id}: quoted {quoted}, limit {limit:?} {limit_price}")]
    OfferPriceRejected {
        /// Identifier of the asset being traded.
        asset_id: String,
        /// Price offered by the market.
        quoted: Decimal,
        /// Caller's price limit.
        limit_price: Decimal,
        /// Whether the limit was a ceiling or a floor.
        limit: PriceLimit,
    },

    /// Transaction total overflowed the numeric model.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

impl WalletError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a cash shortfall error.
    #[must_use]
    pub fn insufficient_cash(required: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds(Shortfall::Cash {
            required,
            available,
        })
    }

    /// Creates a held-units shortfall error.
    #[must_use]
    pub fn insufficient_units(asset_id: impl Into<String>, required: u64, available: u64) -> Self {
        Self::InsufficientFunds(Shortfall::Units {
            asset_id: asset_id.into(),
            required,
            available,
        })
    }

    /// Creates an unknown asset error.
    #[must_use]
    pub fn unknown_asset(asset_id: impl Into<String>) -> Self {
        Self::UnknownAsset(asset_id.into())
    }

    /// Creates a rejection for an ask above the buyer's ceiling.
    #[must_use]
    pub fn ask_above_max(asset_id: impl Into<String>, ask: Decimal, max_price: Decimal) -> Self {
        Self::OfferPriceRejected {
            asset_id: asset_id.into(),
            quoted: ask,
            limit_price: max_price,
            limit: PriceLimit::Max,
        }
    }

    /// Creates a rejection for a bid below the seller's floor.
    #[must_use]
    pub fn bid_below_min(asset_id: impl Into<String>, bid: Decimal, min_price: Decimal) -> Self {
        Self::OfferPriceRejected {
            asset_id: asset_id.into(),
            quoted: bid,
            limit_price: min_price,
            limit: PriceLimit::Min,
        }
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true if this is an insufficient funds error.
    #[must_use]
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds(_))
    }

    /// Returns true if this is an unknown asset error.
    #[must_use]
    pub fn is_unknown_asset(&self) -> bool {
        matches!(self, Self::UnknownAsset(_))
    }

    /// Returns true if this is an offer price rejection.
    #[must_use]
    pub fn is_offer_price_rejected(&self) -> bool {
        matches!(self, Self::OfferPriceRejected { .. })
    }

    /// Short machine-readable kind, used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::InsufficientFunds(_) => "insufficient_funds",
            Self::UnknownAsset(_) => "unknown_asset",
            Self::OfferPriceRejected { .. } => "offer_price_rejected",
            Self::Arithmetic(_) => "arithmetic",
        }
    }
}
