//! # Quote Sources
//!
//! Implementations of the [`QuoteService`](crate::domain::services::QuoteService) port.
//!
//! - `in_memory`: concurrent quote book used by tests, benchmarks and the CLI

pub mod in_memory;

pub use in_memory::InMemoryQuoteService;
