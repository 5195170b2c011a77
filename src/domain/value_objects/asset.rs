//! # Asset Value Object
//!
//! Identity of a tradable instrument.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::domain::value_objects::{Asset, AssetType};
//!
//! let a = Asset::new("BTC", "Bitcoin", AssetType::Crypto);
//! let b = Asset::new("BTC", "Bitcoin", AssetType::Crypto);
//!
//! // Structural equality: both values address the same holding.
//! assert_eq!(a, b);
//! ```

use crate::domain::value_objects::enums::AssetType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable tradable instrument.
///
/// Equality and hashing cover all three fields, so an `Asset` is a
/// value-object key: separately constructed assets with identical fields are
/// interchangeable in holdings and quote books.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    id: String,
    name: String,
    #[serde(rename = "type")]
    asset_type: AssetType,
}

impl Asset {
    /// Creates a new asset.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset_type,
        }
    }

    /// Returns the asset identifier (ticker, ISIN, currency code).
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the asset category.
    #[inline]
    #[must_use]
    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.name, self.asset_type)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn accessors_return_fields() {
        let asset = Asset::new("AAPL", "Apple Inc.", AssetType::Stock);
        assert_eq!(asset.id(), "AAPL");
        assert_eq!(asset.name(), "Apple Inc.");
        assert_eq!(asset.asset_type(), AssetType::Stock);
    }

    #[test]
    fn equal_fields_share_a_map_slot() {
        let mut map = HashMap::new();
        map.insert(Asset::new("XAU", "Gold", AssetType::Gold), 1u64);
        map.insert(Asset::new("XAU", "Gold", AssetType::Gold), 2u64);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Asset::new("XAU", "Gold", AssetType::Gold)), Some(&2));
    }

    #[test]
    fn every_field_participates_in_identity() {
        let base = Asset::new("EUR", "Euro", AssetType::Fiat);
        assert_ne!(base, Asset::new("USD", "Euro", AssetType::Fiat));
        assert_ne!(base, Asset::new("EUR", "Euro Cash", AssetType::Fiat));
        assert_ne!(base, Asset::new("EUR", "Euro", AssetType::Crypto));
    }

    #[test]
    fn display_format() {
        let asset = Asset::new("BTC", "Bitcoin", AssetType::Crypto);
        assert_eq!(asset.to_string(), "BTC (Bitcoin, CRYPTO)");
    }

    #[test]
    fn serde_uses_type_key() {
        let asset = Asset::new("BTC", "Bitcoin", AssetType::Crypto);
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["type"], "CRYPTO");
        let back: Asset = serde_json::from_value(json).unwrap();
        assert_eq!(back, asset);
    }
}
