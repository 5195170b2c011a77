//! # Application Errors
//!
//! Error types for the application layer.
//!
//! ```text
//! ApplicationError
//! ├── Wallet(WalletError)      - Rejected wallet operation
//! ├── Configuration(String)    - Unreadable or invalid configuration
//! ├── InvalidOrder { .. }      - Order text that does not parse
//! └── AssetNotConfigured(id)   - Order names an asset with no known identity
//! ```

use crate::domain::errors::WalletError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Wallet rejected the operation.
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Order text is malformed.
    #[error("invalid order '{order}': {reason}")]
    InvalidOrder {
        /// The order as given.
        order: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Order refers to an asset id that is not configured.
    #[error("asset not configured: {0}")]
    AssetNotConfigured(String),
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

impl ApplicationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an invalid order error.
    #[must_use]
    pub fn invalid_order(order: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOrder {
            order: order.into(),
            reason: reason.into(),
        }
    }

    /// Returns the wallet error, if this is one.
    #[must_use]
    pub fn as_wallet_error(&self) -> Option<&WalletError> {
        match self {
            Self::Wallet(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if the caller can fix this by changing its input.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::Wallet(e) => e.is_invalid_argument(),
            Self::InvalidOrder { .. } | Self::AssetNotConfigured(_) => true,
            Self::Configuration(_) => false,
        }
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
