// Toast border colours, one per severity
pub const SUCCESS_BORDER: &str = "rgba(26,122,74,0.4)";
pub const ERROR_BORDER: &str = "rgba(239,68,68,0.4)";
pub const WARNING_BORDER: &str = "rgba(245,158,11,0.4)";

// Display values for toggled elements
pub const DISPLAY_FLEX: &str = "flex";
pub const DISPLAY_NONE: &str = "none";

/// Escape text for insertion into markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
