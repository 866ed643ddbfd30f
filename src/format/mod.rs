// Number, balance and block-time formatting for the panels

use crate::chain::Balance;
use num_format::{Locale, ToFormattedString};

/// Fractional digits shown for balances
const BALANCE_FRACTION_DIGITS: usize = 4;

/// `1234567` -> `"1,234,567"`
pub fn format_number(n: impl Into<u128>) -> String {
    n.into().to_formatted_string(&Locale::en)
}

/// Render a balance in token units, truncating to four fractional digits
///
/// Trailing zeros in the fraction are dropped; `symbol` is appended when
/// `with_currency` is set.
pub fn format_balance(value: Balance, decimals: u8, symbol: &str, with_currency: bool) -> String {
    let divisor = 10u128.checked_pow(decimals as u32);
    let (whole, frac) = match divisor {
        Some(d) => (value.0 / d, value.0 % d),
        None => (0, value.0),
    };

    let mut text = format_number(whole);

    if decimals > 0 && frac > 0 {
        let padded = format!("{:0>width$}", frac, width = decimals as usize);
        let shown: String = padded.chars().take(BALANCE_FRACTION_DIGITS).collect();
        let shown = shown.trim_end_matches('0');
        if !shown.is_empty() {
            text.push('.');
            text.push_str(shown);
        }
    }

    if with_currency && !symbol.is_empty() {
        text.push(' ');
        text.push_str(symbol);
    }

    text
}

/// Human duration for a block count, e.g. `"1 day 2 hrs 3 mins"`
pub fn block_to_time(blocks: u64, block_time_ms: u64) -> String {
    let total_secs = blocks.saturating_mul(block_time_ms) / 1000;

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let mins = (total_secs % 3_600) / 60;
    let secs = total_secs % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day", "days"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hr", "hrs"));
    }
    if mins > 0 {
        parts.push(plural(mins, "min", "mins"));
    }
    if parts.is_empty() {
        parts.push(plural(secs, "s", "s"));
    }

    parts.join(" ")
}

fn plural(n: u64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0u32), "0");
        assert_eq!(format_number(999u32), "999");
        assert_eq!(format_number(1000u32), "1,000");
        assert_eq!(format_number(1234567u64), "1,234,567");
        assert_eq!(
            format_number(u128::MAX),
            "340,282,366,920,938,463,463,374,607,431,768,211,455"
        );
    }

    #[test]
    fn test_format_balance() {
        let one = 10u128.pow(18);
        assert_eq!(format_balance(Balance(one), 18, "MUI", true), "1 MUI");
        assert_eq!(format_balance(Balance(one * 1500 + one / 4), 18, "MUI", true), "1,500.25 MUI");
        assert_eq!(format_balance(Balance(123_456_789), 6, "MUI", false), "123.4567");
        assert_eq!(format_balance(Balance(1), 18, "MUI", false), "0");
        assert_eq!(format_balance(Balance(42), 0, "", true), "42");
    }

    #[test]
    fn test_block_to_time() {
        assert_eq!(block_to_time(0, 6000), "0 s");
        assert_eq!(block_to_time(5, 6000), "30 s");
        assert_eq!(block_to_time(10, 6000), "1 min");
        assert_eq!(block_to_time(14_400, 6000), "1 day");
        assert_eq!(block_to_time(14_400 + 600 + 20, 6000), "1 day 1 hr 2 mins");
    }
}
