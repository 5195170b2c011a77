//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`AssetType`] - Category of a tradable instrument
//! - [`ParseEnumError`] - Failure to parse one of the above from text
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a tradable asset.
///
/// Part of an asset's identity: two assets with the same id and name but
/// different types are different holdings.
///
/// # Examples
///
/// ```
/// use investment_wallet::domain::value_objects::enums::AssetType;
///
/// let gold: AssetType = "gold".parse().unwrap();
/// assert_eq!(gold, AssetType::Gold);
/// assert_eq!(AssetType::Crypto.to_string(), "CRYPTO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum AssetType {
    /// Equity shares.
    Stock = 0,
    /// Cryptocurrency.
    Crypto = 1,
    /// Fiat currency held as an asset.
    Fiat = 2,
    /// Physical gold.
    Gold = 3,
}

impl AssetType {
    /// All asset types, in declaration order.
    pub const ALL: [Self; 4] = [Self::Stock, Self::Crypto, Self::Fiat, Self::Gold];

    /// Returns the canonical upper-case name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "STOCK",
            Self::Crypto => "CRYPTO",
            Self::Fiat => "FIAT",
            Self::Gold => "GOLD",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "STOCK" => Ok(Self::Stock),
            "CRYPTO" | "CRYPTOCURRENCY" => Ok(Self::Crypto),
            "FIAT" | "FIAT_CURRENCY" => Ok(Self::Fiat),
            "GOLD" => Ok(Self::Gold),
            _ => Err(ParseEnumError::InvalidValue("AssetType", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod asset_type {
        use super::*;

        #[test]
        fn display_matches_as_str() {
            for asset_type in AssetType::ALL {
                assert_eq!(asset_type.to_string(), asset_type.as_str());
            }
        }

        #[test]
        fn from_str_is_case_insensitive() {
            assert_eq!("stock".parse::<AssetType>().unwrap(), AssetType::Stock);
            assert_eq!("Crypto".parse::<AssetType>().unwrap(), AssetType::Crypto);
            assert_eq!(" GOLD ".parse::<AssetType>().unwrap(), AssetType::Gold);
        }

        #[test]
        fn from_str_accepts_long_names() {
            assert_eq!(
                "cryptocurrency".parse::<AssetType>().unwrap(),
                AssetType::Crypto
            );
            assert_eq!(
                "fiat-currency".parse::<AssetType>().unwrap(),
                AssetType::Fiat
            );
        }

        #[test]
        fn from_str_rejects_unknown() {
            let err = "bond".parse::<AssetType>().unwrap_err();
            assert_eq!(
                err,
                ParseEnumError::InvalidValue("AssetType", "bond".to_string())
            );
        }

        #[test]
        fn serde_roundtrip() {
            let fiat = AssetType::Fiat;
            let json = serde_json::to_string(&fiat).unwrap();
            assert_eq!(json, "\"FIAT\"");
            let deserialized: AssetType = serde_json::from_str(&json).unwrap();
            assert_eq!(fiat, deserialized);
        }
    }

    mod parse_enum_error {
        use super::*;

        #[test]
        fn display_format() {
            let err = ParseEnumError::InvalidValue("AssetType", "BOND".to_string());
            assert_eq!(err.to_string(), "invalid AssetType value: 'BOND'");
        }
    }
}
