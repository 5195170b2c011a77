//! # Configuration
//!
//! Layered settings for the wallet front end.
//!
//! Sources, later ones winning:
//!
//! 1. Built-in defaults (empty wallet, `info` logging, no quotes)
//! 2. An optional TOML file
//! 3. `WALLET__*` environment variables, `__` separating nested keys
//!    (`WALLET__WALLET__OPENING_BALANCE=500`, `WALLET__LOGGING__JSON=true`)
//!
//! ```toml
//! [wallet]
//! opening_balance = "1000"
//!
//! [logging]
//! level = "investment_wallet=debug"
//! json = false
//!
//! [[quotes]]
//! id = "BTC"
//! name = "Bitcoin"
//! asset_type = "CRYPTO"
//! ask = "65010.5"
//! bid = "64990"
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::WalletResult;
use crate::domain::value_objects::{Asset, AssetType, Quote};
use crate::infrastructure::quotes::InMemoryQuoteService;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Prefix of environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "WALLET";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet bootstrap settings.
    pub wallet: WalletSettings,
    /// Log output settings.
    pub logging: LoggingSettings,
    /// Static quote book.
    pub quotes: Vec<QuoteEntry>,
}

/// Wallet bootstrap settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletSettings {
    /// Cash deposited before any order runs.
    pub opening_balance: Decimal,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// One asset in the static quote book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    /// Asset identifier, also used by orders.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Asset category.
    pub asset_type: AssetType,
    /// Ask price.
    pub ask: Decimal,
    /// Bid price.
    pub bid: Decimal,
}

impl QuoteEntry {
    /// The asset this entry describes.
    #[must_use]
    pub fn asset(&self) -> Asset {
        Asset::new(self.id.clone(), self.name.clone(), self.asset_type)
    }

    /// The entry's prices as a validated quote.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if either price is not positive.
    pub fn quote(&self) -> WalletResult<Quote> {
        Quote::new(self.ask, self.bid)
    }
}

impl AppConfig {
    /// Loads configuration from `path` (if given) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the file is missing or
    /// malformed, or if the result fails [`validate`](Self::validate).
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );
        Self::build(builder)
    }

    /// Parses configuration from TOML text, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_toml_str(toml: &str) -> ApplicationResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> ApplicationResult<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(
            opening_balance = %config.wallet.opening_balance,
            quotes = config.quotes.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Checks the opening balance and every quote entry.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` on a negative opening balance,
    /// a blank or repeated asset id, or a non-positive price.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.wallet.opening_balance < Decimal::ZERO {
            return Err(ApplicationError::configuration(format!(
                "opening balance must not be negative, got {}",
                self.wallet.opening_balance
            )));
        }

        let mut seen = HashSet::new();
        for entry in &self.quotes {
            if entry.id.trim().is_empty() {
                return Err(ApplicationError::configuration("quote with blank asset id"));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ApplicationError::configuration(format!(
                    "duplicate quote for asset {}",
                    entry.id
                )));
            }
            entry.quote().map_err(|e| {
                ApplicationError::configuration(format!("quote for asset {}: {e}", entry.id))
            })?;
        }
        Ok(())
    }

    /// Builds the quote book described by `quotes`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if an entry has invalid prices.
    pub fn quote_book(&self) -> ApplicationResult<InMemoryQuoteService> {
        let quotes = self
            .quotes
            .iter()
            .map(|entry| {
                entry
                    .quote()
                    .map(|quote| (entry.asset(), quote))
                    .map_err(|e| {
                        ApplicationError::configuration(format!("quote for asset {}: {e}", entry.id))
                    })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;
        Ok(InMemoryQuoteService::from_quotes(quotes))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::services::QuoteService;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [wallet]
        opening_balance = "1000"

        [logging]
        level = "debug"
        json = true

        [[quotes]]
        id = "BTC"
        name = "Bitcoin"
        asset_type = "CRYPTO"
        ask = "65010.5"
        bid = "64990"

        [[quotes]]
        id = "XAU"
        name = "Gold"
        asset_type = "GOLD"
        ask = "2400"
        bid = "2390"
    "#;

    mod parsing {
        use super::*;

        #[test]
        fn defaults_when_empty() {
            let config = AppConfig::from_toml_str("").unwrap();
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.logging.level, "info");
            assert!(!config.logging.json);
        }

        #[test]
        fn parses_full_document() {
            let config = AppConfig::from_toml_str(SAMPLE).unwrap();
            assert_eq!(config.wallet.opening_balance, dec!(1000));
            assert_eq!(config.logging.level, "debug");
            assert!(config.logging.json);
            assert_eq!(config.quotes.len(), 2);
            assert_eq!(config.quotes[0].asset_type, AssetType::Crypto);
            assert_eq!(config.quotes[0].ask, dec!(65010.5));
        }

        #[test]
        fn loads_from_file() {
            let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
            file.write_all(SAMPLE.as_bytes()).unwrap();

            let config = AppConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.quotes[1].id, "XAU");
        }

        #[test]
        fn missing_file_is_configuration_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
            assert!(matches!(err, ApplicationError::Configuration(_)));
        }

        #[test]
        fn unknown_asset_type_is_rejected() {
            let toml = r#"
                [[quotes]]
                id = "X"
                name = "X"
                asset_type = "BOND"
                ask = "1"
                bid = "1"
            "#;
            assert!(AppConfig::from_toml_str(toml).is_err());
        }
    }

    mod validation {
        use super::*;

        fn entry(id: &str, ask: Decimal, bid: Decimal) -> QuoteEntry {
            QuoteEntry {
                id: id.to_string(),
                name: id.to_string(),
                asset_type: AssetType::Stock,
                ask,
                bid,
            }
        }

        #[test]
        fn negative_opening_balance() {
            let config = AppConfig {
                wallet: WalletSettings {
                    opening_balance: dec!(-1),
                },
                ..AppConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("opening balance"));
        }

        #[test]
        fn non_positive_price() {
            let config = AppConfig {
                quotes: vec![entry("A", dec!(10), dec!(0))],
                ..AppConfig::default()
            };
            assert!(config.validate().is_err());
            assert!(config.quote_book().is_err());
        }

        #[test]
        fn duplicate_and_blank_ids() {
            let duplicated = AppConfig {
                quotes: vec![entry("A", dec!(2), dec!(1)), entry("A", dec!(3), dec!(2))],
                ..AppConfig::default()
            };
            assert!(duplicated.validate().unwrap_err().to_string().contains("duplicate"));

            let blank = AppConfig {
                quotes: vec![entry("  ", dec!(2), dec!(1))],
                ..AppConfig::default()
            };
            assert!(blank.validate().is_err());
        }
    }

    mod quote_book {
        use super::*;

        #[test]
        fn builds_in_memory_book() {
            let config = AppConfig::from_toml_str(SAMPLE).unwrap();
            let book = config.quote_book().unwrap();

            assert_eq!(book.len(), 2);
            let btc = book.asset_by_id("BTC").unwrap();
            assert_eq!(btc.name(), "Bitcoin");
            assert_eq!(book.get_quote(&btc).unwrap().bid_price(), dec!(64990));
        }
    }
}
