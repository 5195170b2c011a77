//! # Acquisition Entity
//!
//! Immutable record of one completed buy.
//!
//! Acquisitions are created by [`Wallet::buy`](crate::domain::entities::Wallet::buy)
//! exactly once per successful purchase and are never modified afterwards.
//! Selling does not touch them.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::domain::entities::Acquisition;
//! use investment_wallet::domain::value_objects::{Asset, AssetType};
//! use rust_decimal::Decimal;
//!
//! let acquisition = Acquisition::new(
//!     Decimal::new(10, 0),
//!     5,
//!     Asset::new("AAPL", "Apple Inc.", AssetType::Stock),
//! )
//! .unwrap();
//!
//! assert_eq!(acquisition.total_cost().unwrap(), Decimal::new(50, 0));
//! ```

use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{
    AcquisitionId, ArithmeticResult, Asset, Timestamp, extend_price,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed purchase of an asset.
///
/// # Invariants
///
/// - `price` (ask paid per unit) is positive
/// - `quantity` is positive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Acquisition {
    /// Unique identifier for this acquisition.
    id: AcquisitionId,
    /// Ask price paid per unit.
    price: Decimal,
    /// When the purchase was committed.
    timestamp: Timestamp,
    /// Units bought.
    quantity: u64,
    /// What was bought.
    asset: Asset,
}

impl Acquisition {
    /// Creates a new acquisition stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `price` or `quantity` is not
    /// positive.
    pub fn new(price: Decimal, quantity: u64, asset: Asset) -> WalletResult<Self> {
        if price <= Decimal::ZERO {
            return Err(WalletError::invalid_argument(
                "acquisition price must be positive",
            ));
        }
        if quantity == 0 {
            return Err(WalletError::invalid_argument(
                "acquisition quantity must be positive",
            ));
        }

        Ok(Self {
            id: AcquisitionId::new_v4(),
            price,
            timestamp: Timestamp::now(),
            quantity,
            asset,
        })
    }

    /// Creates an acquisition from stored parts, bypassing validation.
    #[must_use]
    pub fn from_parts(
        id: AcquisitionId,
        price: Decimal,
        timestamp: Timestamp,
        quantity: u64,
        asset: Asset,
    ) -> Self {
        Self {
            id,
            price,
            timestamp,
            quantity,
            asset,
        }
    }

    /// Returns the acquisition ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> AcquisitionId {
        self.id
    }

    /// Returns the ask price paid per unit.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns when the purchase was committed.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the number of units bought.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the asset bought.
    #[inline]
    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Returns `price * quantity`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    pub fn total_cost(&self) -> ArithmeticResult<Decimal> {
        extend_price(self.price, self.quantity)
    }
}

impl fmt::Display for Acquisition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Acquisition({} x{} @ {} at {})",
            self.asset.id(),
            self.quantity,
            self.price,
            self.timestamp
        )
    }
}
