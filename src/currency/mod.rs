/// Rupee sign prefixed to rendered annexure figures.
pub const INR_SYMBOL: &str = "₹";

/// Formats an amount with Indian-system digit grouping, e.g. `₹6,28,400`.
pub fn format_inr(amount: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, amount.abs());
    let int_end = body.find('.').unwrap_or(body.len());
    let mut grouped = group_indian(&body[..int_end]);
    grouped.push_str(&body[int_end..]);
    if amount < 0.0 {
        format!("{}-{}", INR_SYMBOL, grouped)
    } else {
        format!("{}{}", INR_SYMBOL, grouped)
    }
}

/// Groups the last three digits, then pairs: `19784000` -> `1,97,84,000`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    let mut count = 0;
    for ch in head.chars().rev() {
        if count != 0 && count % 2 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{},{}", grouped, tail)
}
