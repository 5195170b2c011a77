//! # Application Layer
//!
//! Concurrency wrapper and order execution on top of the domain.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
