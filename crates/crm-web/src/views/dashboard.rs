//! Single-customer dashboard: contact card plus recent orders.

use crm_core::models::{CustomerProfile, SampleOrder};
use crm_data::dashboard::DashboardData;

use super::layout::{page, NavSection};
use crate::html::{escape, escape_or_dash};
use crate::theme::order_status_class;

pub fn render_dashboard(data: &DashboardData) -> String {
    let mut body = format!(
        "    <h1>Hồ sơ khách hàng</h1>\n    <p class=\"greeting\">Xin chào, {}</p>\n",
        escape(&data.user_name)
    );

    match &data.customer {
        Some(customer) => body.push_str(&profile_card(customer)),
        None => body.push_str(
            "    <p class=\"empty\" id=\"no-customer\">Không tìm thấy thông tin khách hàng.</p>\n",
        ),
    }

    body.push_str(&orders_table(&data.orders));

    let title = match &data.customer {
        Some(c) if !c.name.is_empty() => format!("Khách hàng {}", c.name),
        _ => "Hồ sơ khách hàng".to_string(),
    };
    page(&title, NavSection::Customers, &body)
}

fn profile_card(customer: &CustomerProfile) -> String {
    let fields = [
        ("Mã KH", &customer.code),
        ("Họ tên", &customer.name),
        ("Ngày sinh", &customer.dob),
        ("Số ĐT", &customer.phone),
        ("Email", &customer.email),
        ("Địa chỉ", &customer.address),
        ("Tổng tiền mua", &customer.total),
        ("Ngày cuối mua", &customer.last_purchase),
    ];

    let rows: String = fields
        .iter()
        .map(|(label, value)| {
            format!(
                "        <dt>{}</dt><dd>{}</dd>\n",
                label,
                escape_or_dash(value)
            )
        })
        .collect();

    format!("    <section class=\"card profile\">\n      <dl>\n{rows}      </dl>\n    </section>\n")
}

fn orders_table(orders: &[SampleOrder]) -> String {
    let rows: String = orders
        .iter()
        .map(|o| {
            format!(
                "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><span class=\"badge {}\">{}</span></td></tr>\n",
                escape(&o.code),
                escape(&o.customer),
                escape(&o.export_status),
                escape(&o.value),
                escape(&o.date),
                order_status_class(&o.status),
                escape(&o.status_label),
            )
        })
        .collect();

    format!(
        "    <h2>Đơn hàng gần đây</h2>\n    <table class=\"orders\">\n      <thead><tr>\
         <th>Mã đơn</th><th>Khách hàng</th><th>Xuất hoá đơn</th><th>Giá trị</th>\
         <th>Ngày</th><th>Trạng thái</th></tr></thead>\n      <tbody>\n{rows}      </tbody>\n    </table>\n"
    )
}
