//! Static form page with an optional result line.

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const PLACEHOLDER: &str = "{{ prediction_text }}";

/// Render the form; `prediction_text` is HTML-escaped into the result line.
pub fn render_index(prediction_text: Option<&str>) -> String {
    INDEX_TEMPLATE.replace(PLACEHOLDER, &escape_html(prediction_text.unwrap_or("")))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
