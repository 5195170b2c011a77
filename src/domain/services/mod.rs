//! # Domain Services
//!
//! Ports the wallet depends on but does not implement.
//!
//! ## Services
//!
//! - [`QuoteService`]: Live bid/ask lookup per asset

pub mod quote_service;

pub use quote_service::QuoteService;
