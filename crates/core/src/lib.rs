//! `shiprate-core`: shared domain primitives.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod country;
pub mod error;
pub mod id;

pub use country::CountryCode;
pub use error::DomainError;
pub use id::CustomerId;
