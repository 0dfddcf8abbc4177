use adsim_types::{ComparisonOutcome, Winner};

/// Insert thousands separators into an unsigned digit string
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1000000` -> `1,000,000`
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// `56250.0` -> `$56,250.00`; negatives keep the sign after the dollar sign
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("${}{}.{}", sign, group_digits(whole), cents)
}

/// `462.5` -> `462.50%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// CAC is shown without grouping: `13.333` -> `$13.33`
pub fn format_cac(value: f64) -> String {
    format!("${:.2}", value)
}

/// Winner headings in display order
pub fn winner_headlines(outcome: &ComparisonOutcome) -> [(&'static str, Winner); 3] {
    [
        ("Higher Revenue", outcome.revenue),
        ("Higher ROI", outcome.roi),
        ("Lower CAC", outcome.actual_cac),
    ]
}
