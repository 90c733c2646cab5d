/// Amount with exactly two decimals and no grouping, as printed in exports.
pub fn fixed2(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Amount with thousands separators and two decimals for on-screen tables.
pub fn grouped(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, out, cents % 100)
}

pub fn count_or_dash(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}
