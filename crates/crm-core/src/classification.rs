//! Spend-tier and activity classification of customer records.

use crate::formatting::parse_amount;
use crate::models::{ActivityStatus, CustomerGroup, CustomerRecord, NO_PURCHASE_SENTINEL};

/// Minimum spend (đồng) for the VIP tier.
pub const VIP_THRESHOLD: f64 = 10_000_000.0;

/// Minimum spend (đồng) for the loyal tier.
pub const LOYAL_THRESHOLD: f64 = 5_000_000.0;

/// Map a currency-formatted total to a spend tier.
///
/// Unparseable totals count as zero and land in [`CustomerGroup::Potential`].
///
/// # Examples
///
/// ```
/// use crm_core::classification::classify_group;
/// use crm_core::models::CustomerGroup;
///
/// assert_eq!(classify_group("10,000,000đ"), CustomerGroup::Vip);
/// assert_eq!(classify_group("5,000,000đ"), CustomerGroup::Loyal);
/// assert_eq!(classify_group("abcđ"), CustomerGroup::Potential);
/// ```
pub fn classify_group(total_amount: &str) -> CustomerGroup {
    let amount = parse_amount(total_amount);
    if amount >= VIP_THRESHOLD {
        CustomerGroup::Vip
    } else if amount >= LOYAL_THRESHOLD {
        CustomerGroup::Loyal
    } else {
        CustomerGroup::Potential
    }
}

/// A customer is active when any last-purchase value is recorded.
///
/// Only presence is checked; the value is never parsed as a date.
pub fn classify_status(last_purchase: &str) -> ActivityStatus {
    if !last_purchase.is_empty() && last_purchase != NO_PURCHASE_SENTINEL {
        ActivityStatus::Active
    } else {
        ActivityStatus::Inactive
    }
}

/// Fill in `group` and `status` from the record's own amount and last purchase.
pub fn classify(mut record: CustomerRecord) -> CustomerRecord {
    record.group = classify_group(&record.total_amount);
    record.status = classify_status(&record.last_purchase);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify_group ────────────────────────────────────────────────────

    #[test]
    fn test_group_vip_at_threshold() {
        assert_eq!(classify_group("10,000,000đ"), CustomerGroup::Vip);
    }

    #[test]
    fn test_group_vip_above_threshold() {
        assert_eq!(classify_group("25,750,000đ"), CustomerGroup::Vip);
    }

    #[test]
    fn test_group_loyal_at_threshold() {
        assert_eq!(classify_group("5,000,000đ"), CustomerGroup::Loyal);
    }

    #[test]
    fn test_group_loyal_just_below_vip() {
        assert_eq!(classify_group("9,999,999đ"), CustomerGroup::Loyal);
    }

    #[test]
    fn test_group_potential_just_below_loyal() {
        assert_eq!(classify_group("4,999,999đ"), CustomerGroup::Potential);
    }

    #[test]
    fn test_group_unparseable_is_potential() {
        assert_eq!(classify_group("abcđ"), CustomerGroup::Potential);
        assert_eq!(classify_group(""), CustomerGroup::Potential);
    }

    #[test]
    fn test_group_plain_numeric_cell() {
        assert_eq!(classify_group("12000000"), CustomerGroup::Vip);
    }

    // ── classify_status ───────────────────────────────────────────────────

    #[test]
    fn test_status_empty_is_inactive() {
        assert_eq!(classify_status(""), ActivityStatus::Inactive);
    }

    #[test]
    fn test_status_sentinel_is_inactive() {
        assert_eq!(classify_status("Chưa có"), ActivityStatus::Inactive);
    }

    #[test]
    fn test_status_any_value_is_active() {
        assert_eq!(classify_status("28/09/2025"), ActivityStatus::Active);
        // Presence only: an ancient or nonsense date still counts.
        assert_eq!(classify_status("01/01/1990"), ActivityStatus::Active);
        assert_eq!(classify_status("hôm qua"), ActivityStatus::Active);
    }

    #[test]
    fn test_status_sentinel_must_match_exactly() {
        assert_eq!(classify_status("chưa có"), ActivityStatus::Active);
        assert_eq!(classify_status(" Chưa có"), ActivityStatus::Active);
    }

    // ── classify ──────────────────────────────────────────────────────────

    #[test]
    fn test_classify_sets_both_labels() {
        let record = CustomerRecord {
            total_amount: "6,000,000đ".to_string(),
            last_purchase: "29/09/2025".to_string(),
            ..Default::default()
        };
        let record = classify(record);
        assert_eq!(record.group, CustomerGroup::Loyal);
        assert_eq!(record.status, ActivityStatus::Active);
    }

    #[test]
    fn test_classify_default_record() {
        let record = classify(CustomerRecord::default());
        assert_eq!(record.group, CustomerGroup::Potential);
        assert_eq!(record.status, ActivityStatus::Inactive);
    }
}
