pub const MAX_STRING_LENGTH: usize = 1000;
pub const DEFAULT_GREETING: &str = "Hello";

/// Empty names fall back to "Guest" instead of failing.
pub fn greet(name: &str) -> String {
    let name = if name.trim().is_empty() { "Guest" } else { name };
    format!("{}, {}! Welcome to conlab.", DEFAULT_GREETING, name)
}

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Formats a number with thousands separators and two decimals,
/// e.g. 1234567.89 -> "1,234,567.89".
pub fn format_number(num: f64) -> String {
    let formatted = format!("{:.2}", num.abs());
    let (int_part, dec_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut result = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.push('.');
    result.push_str(dec_part);

    if num < 0.0 {
        result.insert(0, '-');
    }
    result
}

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

pub fn truncate_string(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let truncated: String = s.chars().take(length).collect();
    format!("{}...", truncated)
}
