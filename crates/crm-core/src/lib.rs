//! Domain types and pure business rules for the customer dashboard.
//!
//! Holds the canonical customer model, spend-tier and activity
//! classification, currency formatting, runtime settings and the shared
//! error type. Nothing in this crate touches the filesystem or the network.

pub mod classification;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{CrmError, Result};
