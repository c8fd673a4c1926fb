//! Page-level data assembly.
//!
//! Runs the loader for a request and packages what each view renders.

use crm_core::models::{CustomerProfile, CustomerRecord, CustomerStats, SampleOrder};

use crate::aggregator::CustomerAggregator;
use crate::loader::CustomerLoader;
use crate::normalizer::{profile_from_record, profile_from_row};

/// Operator name shown in the dashboard header.
pub const DASHBOARD_USER: &str = "Admin";

/// Customer name used on sample orders when no profile name is known.
pub const FALLBACK_CUSTOMER_NAME: &str = "Nguyễn Phước Lộc";

/// Everything the single-customer dashboard renders.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub user_name: String,
    /// `None` when no matching customer could be loaded.
    pub customer: Option<CustomerProfile>,
    pub orders: Vec<SampleOrder>,
}

impl DashboardData {
    /// Dashboard with no customer, as shown when loading fails.
    pub fn empty() -> Self {
        Self {
            user_name: DASHBOARD_USER.to_string(),
            customer: None,
            orders: sample_orders(None),
        }
    }
}

/// Everything the customer list page renders.
#[derive(Debug, Clone, Default)]
pub struct CustomerListData {
    pub customers: Vec<CustomerRecord>,
    pub stats: CustomerStats,
}

/// Build the dashboard for `code`, or for the first customer in the sheet
/// when `code` is absent or empty.
pub fn load_dashboard(loader: &CustomerLoader, code: Option<&str>) -> DashboardData {
    let customer = match code.filter(|c| !c.is_empty()) {
        Some(code) => loader
            .find_customer_by_code(code)
            .map(|record| profile_from_record(&record)),
        None => loader
            .load_first_customer()
            .map(|row| profile_from_row(&row)),
    };

    let orders = sample_orders(customer.as_ref());
    DashboardData {
        user_name: DASHBOARD_USER.to_string(),
        customer,
        orders,
    }
}

/// Load the sorted customer list together with its statistics.
pub fn load_customer_list(loader: &CustomerLoader) -> CustomerListData {
    let customers = loader.load_all_customers();
    let stats = CustomerAggregator::stats(&customers);
    CustomerListData { customers, stats }
}

/// The two placeholder orders shown until real order data exists.
pub fn sample_orders(customer: Option<&CustomerProfile>) -> Vec<SampleOrder> {
    let name = customer
        .map(|c| c.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_CUSTOMER_NAME);

    vec![
        SampleOrder {
            code: "DLU00001".to_string(),
            customer: name.to_string(),
            export_status: "Đã xuất".to_string(),
            value: "1,500,000đ".to_string(),
            date: "28/09/2025".to_string(),
            status: "done".to_string(),
            status_label: "Hoàn thành".to_string(),
        },
        SampleOrder {
            code: "DLU00002".to_string(),
            customer: name.to_string(),
            export_status: "Chưa xuất".to_string(),
            value: "2,000,000đ".to_string(),
            date: "29/09/2025".to_string(),
            status: "processing".to_string(),
            status_label: "Đang xử lý".to_string(),
        },
    ]
}
