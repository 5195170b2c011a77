//! # Infrastructure Layer
//!
//! Adapters around the domain.
//!
//! - [`quotes`]: quote book implementations
//! - [`config`]: layered application configuration
//! - [`telemetry`]: tracing subscriber setup for binaries

pub mod config;
pub mod quotes;
pub mod telemetry;

pub use self::config::{AppConfig, LoggingSettings, QuoteEntry, WalletSettings};
pub use self::quotes::InMemoryQuoteService;
