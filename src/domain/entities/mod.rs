//! # Domain Entities
//!
//! ## Aggregates
//!
//! - [`Wallet`]: Cash, holdings and acquisition log with transaction rules
//!
//! ## Entities
//!
//! - [`Acquisition`]: Immutable record of a completed buy

pub mod acquisition;
pub mod wallet;

pub use acquisition::Acquisition;
pub use wallet::{HoldingSnapshot, Wallet, WalletSnapshot};
