// ---------------------------------------------------------------------------
// Number formatting for tooltips and axis labels
// ---------------------------------------------------------------------------

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234.4` → `"$1,234 million"`, `-56.7` → `"-$57 million"`.
/// Absent values render as `"n/a"`.
pub fn format_millions(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = round_to(value, 0);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${} million", group_thousands(&digits))
}

/// Short axis label: grouped integer above 1, up to two decimals below.
pub fn format_axis_value(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let magnitude = value.abs();
    let sign = if value < 0.0 && magnitude >= 0.005 { "-" } else { "" };
    if magnitude >= 1.0 {
        let digits = format!("{:.0}", round_to(magnitude, 0));
        format!("{sign}{}", group_thousands(&digits))
    } else {
        format!("{sign}{}", round_to(magnitude, 2))
    }
}
