//! # Application Services
//!
//! Services that put the wallet to work for callers.
//!
//! - [`SharedWallet`]: Mutex-serialized wallet for concurrent callers
//! - [`OrderRequest`]: Text-encoded instructions executed against a wallet

pub mod orders;
pub mod shared_wallet;

pub use orders::{OrderOutcome, OrderRequest};
pub use shared_wallet::SharedWallet;
