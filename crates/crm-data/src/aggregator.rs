//! Summary statistics and ordering for the customer list.

use crm_core::formatting::{format_vnd, parse_amount};
use crm_core::models::{CustomerRecord, CustomerStats};

/// Sort key used for customers without a name.
const EMPTY_NAME_KEY: &str = "z";

/// Stateless helper that summarises and orders customer records.
pub struct CustomerAggregator;

impl CustomerAggregator {
    /// Compute list statistics over `customers`.
    ///
    /// Only active customers contribute to `active_amount`. `active_orders` is
    /// an estimate of two orders per active customer.
    pub fn stats(customers: &[CustomerRecord]) -> CustomerStats {
        let active: Vec<&CustomerRecord> = customers
            .iter()
            .filter(|c| c.status.is_active())
            .collect();

        let active_amount: f64 = active.iter().map(|c| parse_amount(&c.total_amount)).sum();

        CustomerStats {
            total_customers: customers.len(),
            active_customers: active.len(),
            active_orders: active.len() * 2,
            active_amount: format_vnd(active_amount),
        }
    }

    /// Order customers by the last character of their name, case-insensitively.
    ///
    /// The sort is stable, so customers sharing a final letter keep their
    /// spreadsheet order.
    pub fn sort_by_name_tail(customers: &mut [CustomerRecord]) {
        customers.sort_by_cached_key(|c| name_tail_key(&c.name));
    }
}

/// Lowercased last character of `name`, or `"z"` for an empty name.
pub fn name_tail_key(name: &str) -> String {
    match name.chars().next_back() {
        Some(last) => last.to_lowercase().collect(),
        None => EMPTY_NAME_KEY.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
