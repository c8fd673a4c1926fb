//! Data ingestion layer for the customer dashboard.
//!
//! Reads the customer spreadsheet, maps its loosely named columns onto
//! canonical records, computes list statistics and assembles the data each
//! page needs. Every public loader degrades to an empty result on failure.

pub mod aggregator;
pub mod dashboard;
pub mod loader;
pub mod normalizer;
pub mod reader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use crm_core as core;
