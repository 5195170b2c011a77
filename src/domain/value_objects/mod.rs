//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`Asset`]: Structural-equality key for holdings and quotes
//! - [`AssetType`]: Asset category
//! - [`Quote`]: Validated bid/ask pair
//! - [`AcquisitionId`]: UUID-based acquisition identifier
//! - [`Timestamp`]: UTC instant
//! - [`CheckedArithmetic`]: Overflow-safe arithmetic on cash and quantities

pub mod arithmetic;
pub mod asset;
pub mod enums;
pub mod ids;
pub mod quote;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, extend_price};
pub use asset::Asset;
pub use enums::{AssetType, ParseEnumError};
pub use ids::AcquisitionId;
pub use quote::Quote;
pub use timestamp::Timestamp;
