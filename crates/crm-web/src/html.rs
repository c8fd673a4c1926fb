/// Escape text for use inside HTML element content or a quoted attribute.
///
/// # Examples
///
/// ```
/// use crm_web::html::escape;
///
/// assert_eq!(escape("Tom & <Jerry>"), "Tom &amp; &lt;Jerry&gt;");
/// ```
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a cell value, rendering an empty value as a dash.
pub fn escape_or_dash(input: &str) -> String {
    if input.is_empty() {
        "—".to_string()
    } else {
        escape(input)
    }
}

/// Link to the dashboard of the customer identified by `code`.
pub fn dashboard_href(code: &str) -> String {
    format!("/customer-dashboard?code={}", urlencoding::encode(code))
}
