//! Header normalisation: maps loosely named spreadsheet columns onto
//! canonical customer fields.
//!
//! Each field has an ordered alias list. The first alias whose cell is
//! present and non-blank wins; when none match the field default applies.

use crm_core::models::{CellValue, CustomerProfile, CustomerRecord, RawRow, DEFAULT_TOTAL_AMOUNT};

/// Ordered header aliases for each canonical field.
pub mod aliases {
    pub const CODE: &[&str] = &["Mã KH", "Ma KH", "Code"];
    pub const NAME: &[&str] = &["Họ Tên", "Ho Ten", "Ten"];
    pub const PHONE: &[&str] = &["Số ĐT", "So DT", "SĐT"];
    pub const EMAIL: &[&str] = &["Email"];
    pub const ADDRESS: &[&str] = &["Địa Chỉ", "Dia Chi"];
    pub const TOTAL_AMOUNT: &[&str] = &["Tổng tiền mua", "Tong Tien Mua"];
    pub const LAST_PURCHASE: &[&str] = &["Ngày cuối mua", "Ngay Cuoi Mua"];

    // The dashboard card also accepts snake_case keys, tried first, and a
    // few extra English headers.
    pub const PROFILE_NAME: &[&str] = &["name", "Họ Tên", "Ho Ten", "Ten"];
    pub const PROFILE_DOB: &[&str] = &["Ngày sinh", "Ngay Sinh"];
    pub const PROFILE_PHONE: &[&str] = &["phone", "Số ĐT", "So DT", "SĐT", "Phone"];
    pub const PROFILE_EMAIL: &[&str] = &["email", "Email"];
    pub const PROFILE_ADDRESS: &[&str] = &["address", "Địa Chỉ", "Dia Chi", "Address"];
    pub const PROFILE_CODE: &[&str] = &["code", "Mã KH", "Ma KH", "Code"];
    pub const PROFILE_TOTAL: &[&str] = &["total_amount", "Tổng tiền mua", "Tong Tien Mua"];
    pub const PROFILE_LAST_PURCHASE: &[&str] = &["last_purchase", "Ngày cuối mua", "Ngay Cuoi Mua"];
}

/// Build a canonical record from a raw row.
///
/// `group` and `status` are left at their defaults; run the result through
/// [`crm_core::classification::classify`] to fill them.
pub fn normalize_row(row: &RawRow) -> CustomerRecord {
    CustomerRecord {
        code: field(row, aliases::CODE, ""),
        name: field(row, aliases::NAME, ""),
        phone: field(row, aliases::PHONE, ""),
        email: field(row, aliases::EMAIL, ""),
        address: field(row, aliases::ADDRESS, ""),
        total_amount: field(row, aliases::TOTAL_AMOUNT, DEFAULT_TOTAL_AMOUNT),
        last_purchase: field(row, aliases::LAST_PURCHASE, ""),
        ..Default::default()
    }
}

/// Build the dashboard contact card straight from a raw row.
pub fn profile_from_row(row: &RawRow) -> CustomerProfile {
    CustomerProfile {
        name: field(row, aliases::PROFILE_NAME, ""),
        dob: field(row, aliases::PROFILE_DOB, ""),
        phone: field(row, aliases::PROFILE_PHONE, ""),
        email: field(row, aliases::PROFILE_EMAIL, ""),
        address: field(row, aliases::PROFILE_ADDRESS, ""),
        code: field(row, aliases::PROFILE_CODE, ""),
        total: field(row, aliases::PROFILE_TOTAL, ""),
        last_purchase: field(row, aliases::PROFILE_LAST_PURCHASE, ""),
    }
}

/// Build the dashboard contact card from an already normalised record.
///
/// Records carry no birth date, so `dob` stays empty.
pub fn profile_from_record(record: &CustomerRecord) -> CustomerProfile {
    CustomerProfile {
        name: record.name.clone(),
        dob: String::new(),
        phone: record.phone.clone(),
        email: record.email.clone(),
        address: record.address.clone(),
        code: record.code.clone(),
        total: record.total_amount.clone(),
        last_purchase: record.last_purchase.clone(),
    }
}

fn field(row: &RawRow, aliases: &[&str], default: &str) -> String {
    row.first_present(aliases)
        .map(CellValue::to_text)
        .unwrap_or_else(|| default.to_string())
}
