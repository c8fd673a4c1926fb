use crate::html::escape;
use crate::theme::BASE_CSS;

/// Top-level navigation section highlighted in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Overview,
    Customers,
}

impl NavSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavSection::Overview => "overview",
            NavSection::Customers => "customers",
        }
    }
}

const NAV_ITEMS: &[(NavSection, &str, &str)] = &[
    (NavSection::Overview, "/", "Tổng quan"),
    (NavSection::Customers, "/customers", "Khách hàng"),
];

/// Wrap `body` (already-escaped HTML) in the shared page chrome.
pub fn page(title: &str, active: NavSection, body: &str) -> String {
    let nav: String = NAV_ITEMS
        .iter()
        .map(|(section, href, label)| {
            let class = if *section == active { " class=\"active\"" } else { "" };
            format!(r#"<a href="{href}"{class} data-nav="{}">{label}</a>"#, section.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<!DOCTYPE html>
<html lang="vi">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>{css}</style>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body data-active="{active}">
  <header class="topbar">
    <strong>CRM</strong>
    <nav>
      {nav}
    </nav>
  </header>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        css = BASE_CSS,
        active = active.as_str(),
        nav = nav,
        body = body,
    )
}
