//! Request-scoped customer loading.
//!
//! Every call re-reads the spreadsheet; nothing is cached between calls. Any
//! failure while reading (missing file, unreadable workbook, missing header)
//! is logged and collapses to an empty result so pages can still render.

use std::path::{Path, PathBuf};

use crm_core::classification::classify;
use crm_core::models::{CustomerRecord, RawRow};
use tracing::{debug, warn};

use crate::aggregator::CustomerAggregator;
use crate::normalizer::normalize_row;
use crate::reader::{read_first_row, read_rows};

/// Loads customers from a single spreadsheet file.
///
/// # Example
/// ```no_run
/// use crm_data::loader::CustomerLoader;
///
/// let loader = CustomerLoader::new("ThongTinKhachHang.xlsx");
/// for customer in loader.load_all_customers() {
///     println!("{} {}", customer.code, customer.group);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CustomerLoader {
    data_file: PathBuf,
}

impl CustomerLoader {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// First non-empty data row, exactly as read from the sheet.
    ///
    /// Returns `None` when the file is missing or unreadable or has no data.
    pub fn load_first_customer(&self) -> Option<RawRow> {
        match read_first_row(&self.data_file) {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, "could not load first customer");
                None
            }
        }
    }

    /// All customers, normalised, classified and in list order.
    ///
    /// Returns an empty list on any read failure; rows are never partially
    /// returned.
    pub fn load_all_customers(&self) -> Vec<CustomerRecord> {
        let rows = match read_rows(&self.data_file) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "could not load customers");
                return Vec::new();
            }
        };

        let mut customers: Vec<CustomerRecord> = rows
            .iter()
            .map(|row| classify(normalize_row(row)))
            .collect();
        CustomerAggregator::sort_by_name_tail(&mut customers);

        debug!(
            "Loaded {} customers from {}",
            customers.len(),
            self.data_file.display()
        );
        customers
    }

    /// The customer whose code equals `code` exactly, if any.
    pub fn find_customer_by_code(&self, code: &str) -> Option<CustomerRecord> {
        self.load_all_customers()
            .into_iter()
            .find(|c| c.code == code)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
