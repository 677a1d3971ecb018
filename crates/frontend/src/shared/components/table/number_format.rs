//! Number formatting for table cells

/// Thousands separator (space) and a fixed number of decimals.
///
/// `format_number_with_decimals(1234.567, 2)` gives `"1 234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals.min(6)), value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Two decimals with thousands separator: `"1 234 567.89"`.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Money followed by the currency code: `"1 500.00 DA"`.
pub fn format_currency(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_money(value)
    } else {
        format!("{} {}", format_money(value), currency)
    }
}

/// Integer with thousands separator: `"1 234 567"`.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}
