use crm_core::models::{ActivityStatus, CustomerGroup};

/// A coloured label rendered as `<span class="badge ...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub label: &'static str,
}

impl Badge {
    pub fn to_html(&self) -> String {
        format!(r#"<span class="badge {}">{}</span>"#, self.class, self.label)
    }
}

/// Badge for a spend tier.
pub fn group_badge(group: CustomerGroup) -> Badge {
    match group {
        CustomerGroup::Vip => Badge {
            class: "badge-vip",
            label: "VIP",
        },
        CustomerGroup::Loyal => Badge {
            class: "badge-loyal",
            label: "Thân thiết",
        },
        CustomerGroup::Potential => Badge {
            class: "badge-potential",
            label: "Tiềm năng",
        },
    }
}

/// Badge for an activity status.
pub fn status_badge(status: ActivityStatus) -> Badge {
    match status {
        ActivityStatus::Active => Badge {
            class: "badge-active",
            label: "Active",
        },
        ActivityStatus::Inactive => Badge {
            class: "badge-inactive",
            label: "Inactive",
        },
    }
}

/// Badge for a sample order's processing state (`"done"`, `"processing"`).
pub fn order_status_class(status: &str) -> &'static str {
    match status {
        "done" => "badge-done",
        "processing" => "badge-processing",
        _ => "badge-neutral",
    }
}

/// Built-in stylesheet, inlined into every page. Files under `/static` can
/// override it.
pub const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6fa; color: #222; }
header.topbar { background: #1f3b57; color: #fff; padding: 12px 24px; display: flex; gap: 24px; align-items: center; }
header.topbar a { color: #cfd8e3; text-decoration: none; }
header.topbar a.active { color: #fff; font-weight: 600; border-bottom: 2px solid #ffb400; }
main { padding: 24px; }
.cards { display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 24px; }
.card { background: #fff; border-radius: 8px; padding: 16px 20px; min-width: 180px; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.card .value { font-size: 1.6em; font-weight: 700; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: 8px 12px; border-bottom: 1px solid #e5e7eb; text-align: left; }
.badge { padding: 2px 8px; border-radius: 10px; font-size: .85em; }
.badge-vip { background: #ffe8a3; }
.badge-loyal { background: #c9e7ff; }
.badge-potential { background: #e6e6e6; }
.badge-active, .badge-done { background: #c8f1d4; }
.badge-inactive { background: #f6d2d2; }
.badge-processing { background: #ffe0b2; }
.badge-neutral { background: #eee; }
.empty { color: #777; font-style: italic; }
"#;
