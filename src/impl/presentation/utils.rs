use num_format::{Locale, ToFormattedString as _};

/// Format a dollar amount with thousands separators and two decimal
/// places.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale. Could be generalized in the future.
pub(crate) fn format_amount(amount: f64) -> String {
    let amount_integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    let amount_fractional_part = format!("{:.2}", amount.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!("${}.{}", amount_integer_part, amount_fractional_part)
}

/// Format a record count with thousands separators.
pub(crate) fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

// --
