//! # Domain Layer
//!
//! Wallet rules, value objects and the quote port. Free of I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{WalletError, WalletResult};
