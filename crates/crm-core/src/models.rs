use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback amount used when a customer row carries no spend total.
pub const DEFAULT_TOTAL_AMOUNT: &str = "0đ";

/// Sentinel written into the last-purchase column for customers that have
/// never bought anything.
pub const NO_PURCHASE_SENTINEL: &str = "Chưa có";

// ── CellValue ─────────────────────────────────────────────────────────────────

/// A single typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// `true` when the cell should be skipped while probing header aliases.
    ///
    /// Empty cells, empty strings, numeric zero and `false` all count as
    /// blank, so the next alias in the list gets a chance.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Int(i) => *i == 0,
            CellValue::Float(f) => *f == 0.0,
            CellValue::Bool(b) => !b,
            CellValue::DateTime(_) => false,
        }
    }

    /// `true` only for a cell with no value at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Render the cell as the text shown in a customer field.
    ///
    /// Integral floats drop their fractional part so that an amount typed as
    /// a number reads `12000000` rather than `12000000.0`. Dates use the
    /// `dd/mm/YYYY` layout, with the time appended only when it is not
    /// midnight.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => {
                if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
                    dt.format("%d/%m/%Y").to_string()
                } else {
                    dt.format("%d/%m/%Y %H:%M").to_string()
                }
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ── RawRow ────────────────────────────────────────────────────────────────────

/// One spreadsheet data row keyed by the header text of its column.
///
/// Column order is kept. Inserting a header that already exists replaces the
/// earlier value in place, so a duplicated header resolves to its last column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value stored under `header`.
    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        let header = header.into();
        match self.cells.iter_mut().find(|(h, _)| *h == header) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((header, value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, value)| value)
    }

    /// Return the first non-blank value found under any of `aliases`,
    /// probing them in order.
    pub fn first_present(&self, aliases: &[&str]) -> Option<&CellValue> {
        aliases
            .iter()
            .filter_map(|alias| self.get(alias))
            .find(|value| !value.is_blank())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(h, _)| h.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (header, value) in iter {
            row.insert(header, value);
        }
        row
    }
}

// ── Classification labels ─────────────────────────────────────────────────────

/// Spend tier derived from a customer's purchase total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerGroup {
    Vip,
    Loyal,
    #[default]
    Potential,
}

impl CustomerGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerGroup::Vip => "vip",
            CustomerGroup::Loyal => "loyal",
            CustomerGroup::Potential => "potential",
        }
    }
}

impl fmt::Display for CustomerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a customer has any recorded purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Active,
    #[default]
    Inactive,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "active",
            ActivityStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActivityStatus::Active)
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CustomerRecord ────────────────────────────────────────────────────────────

/// Canonical customer row after header normalisation and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub code: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Currency-formatted spend total, e.g. `"12,500,000đ"`.
    pub total_amount: String,
    /// Free-form last purchase date, or empty / [`NO_PURCHASE_SENTINEL`].
    pub last_purchase: String,
    pub group: CustomerGroup,
    pub status: ActivityStatus,
}

impl Default for CustomerRecord {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            total_amount: DEFAULT_TOTAL_AMOUNT.to_string(),
            last_purchase: String::new(),
            group: CustomerGroup::default(),
            status: ActivityStatus::default(),
        }
    }
}

// ── CustomerStats ─────────────────────────────────────────────────────────────

/// Summary figures shown above the customer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total_customers: usize,
    pub active_customers: usize,
    /// Estimated as twice the active customer count; not a measured value.
    pub active_orders: usize,
    /// Spend of active customers, formatted like `"1,000,000đ"`.
    pub active_amount: String,
}

impl Default for CustomerStats {
    fn default() -> Self {
        Self {
            total_customers: 0,
            active_customers: 0,
            active_orders: 0,
            active_amount: DEFAULT_TOTAL_AMOUNT.to_string(),
        }
    }
}

// ── Dashboard types ───────────────────────────────────────────────────────────

/// Contact card shown on the single-customer dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub code: String,
    pub total: String,
    pub last_purchase: String,
}

/// Placeholder order row rendered on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOrder {
    pub code: String,
    pub customer: String,
    pub export_status: String,
    pub value: String,
    pub date: String,
    /// CSS-facing status key (`"done"`, `"processing"`).
    pub status: String,
    pub status_label: String,
}
