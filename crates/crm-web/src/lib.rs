//! HTTP presentation layer for the customer dashboard.
//!
//! Provides the [`axum`] router, request handlers and the HTML views for the
//! overview page, the single-customer dashboard and the customer list.

pub mod app;
pub mod html;
pub mod theme;
pub mod views;

pub use crm_core as core;
pub use crm_data as data;
