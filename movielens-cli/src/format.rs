//! Display formatting for amounts, ratings, and name lists.

/// Format an integer with comma thousands separators (e.g., "1,234,567").
pub(crate) fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a USD amount as "$1,234 (USD)".
pub(crate) fn format_usd(amount: i64) -> String {
    format!("${} (USD)", format_thousands(amount))
}

/// Join names with ", ", keeping the trailing separator after the last name.
///
/// Empty input yields an empty string.
pub(crate) fn format_name_list(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push_str(", ");
    }
    out
}
