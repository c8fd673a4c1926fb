//! Customer list page: statistics cards above a table of every customer.

use crm_core::models::{CustomerRecord, CustomerStats};
use crm_data::dashboard::CustomerListData;

use super::layout::{page, NavSection};
use crate::html::{dashboard_href, escape, escape_or_dash};
use crate::theme::{group_badge, status_badge};

pub fn render_customer_list(data: &CustomerListData) -> String {
    let mut body = String::from("    <h1>Danh sách khách hàng</h1>\n");
    body.push_str(&stats_cards(&data.stats));

    if data.customers.is_empty() {
        body.push_str("    <p class=\"empty\" id=\"no-customers\">Chưa có dữ liệu khách hàng.</p>\n");
    } else {
        body.push_str(&customer_table(&data.customers));
    }

    page("Danh sách khách hàng", NavSection::Customers, &body)
}

fn stats_cards(stats: &CustomerStats) -> String {
    let cards = [
        ("total-customers", "Tổng khách hàng", stats.total_customers.to_string()),
        ("active-customers", "Khách hàng Active", stats.active_customers.to_string()),
        ("active-orders", "Đơn hàng hoạt động", stats.active_orders.to_string()),
        ("active-amount", "Doanh thu Active", escape(&stats.active_amount)),
    ];

    let inner: String = cards
        .iter()
        .map(|(id, label, value)| {
            format!(
                "      <div class=\"card\" id=\"{id}\"><div class=\"label\">{label}</div>\
                 <div class=\"value\">{value}</div></div>\n"
            )
        })
        .collect();

    format!("    <div class=\"cards\">\n{inner}    </div>\n")
}

fn customer_table(customers: &[CustomerRecord]) -> String {
    let rows: String = customers.iter().map(customer_row).collect();

    format!(
        "    <table class=\"customers\">\n      <thead><tr>\
         <th>Mã KH</th><th>Họ tên</th><th>Số ĐT</th><th>Email</th><th>Địa chỉ</th>\
         <th>Tổng tiền mua</th><th>Ngày cuối mua</th><th>Nhóm</th><th>Trạng thái</th>\
         </tr></thead>\n      <tbody>\n{rows}      </tbody>\n    </table>\n"
    )
}

fn customer_row(c: &CustomerRecord) -> String {
    let code_cell = if c.code.is_empty() {
        escape_or_dash(&c.code)
    } else {
        format!(
            r#"<a href="{}">{}</a>"#,
            escape(&dashboard_href(&c.code)),
            escape(&c.code)
        )
    };

    format!(
        "        <tr data-group=\"{}\" data-status=\"{}\"><td>{}</td><td>{}</td><td>{}</td>\
         <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        c.group,
        c.status,
        code_cell,
        escape_or_dash(&c.name),
        escape_or_dash(&c.phone),
        escape_or_dash(&c.email),
        escape_or_dash(&c.address),
        escape(&c.total_amount),
        escape_or_dash(&c.last_purchase),
        group_badge(c.group).to_html(),
        status_badge(c.status).to_html(),
    )
}
