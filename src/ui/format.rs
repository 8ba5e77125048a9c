// Display shaping for prices, market caps and percentages. Mirrors the
// locale-style rendering the dashboard always used: thousands-grouped
// figures with up to three fraction digits, percentages fixed at two.

/// "43250.12" -> "43,250.12"; "846792514523" -> "846,792,514,523".
pub fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, ""));
    let frac = frac_part.trim_end_matches('0');

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    let mut out = String::new();
    if value < 0.0 && formatted.trim_matches(|c| c == '0' || c == '.') != "" {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

pub fn price(value: f64) -> String {
    format!("${}", group_thousands(value))
}

pub fn market_cap(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Fixed two decimals, sign carried by the value itself.
pub fn change_pct(value: f64) -> String {
    format!("{:.2}%", value)
}
