use super::layout::{page, NavSection};

/// Landing page linking to the customer views.
pub fn render_overview() -> String {
    let body = r#"    <h1>Tổng quan</h1>
    <div class="cards">
      <a class="card" href="/customers">
        <div class="label">Danh sách khách hàng</div>
        <div class="value">→</div>
      </a>
      <a class="card" href="/customer-dashboard">
        <div class="label">Hồ sơ khách hàng</div>
        <div class="value">→</div>
      </a>
    </div>"#;
    page("Tổng quan", NavSection::Overview, body)
}
