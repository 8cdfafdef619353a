//! Amount formatting in the app's pt-BR display style
//!
//! Thousands are grouped with '.', decimals use ','. A few helpers
//! intentionally fall back to plain fixed-point with '.' for tiny values; that
//! matches what the wallet screens have always shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiat currencies with a display symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Brl,
    Gbp,
    Eur,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Brl => "R$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Brl => "BRL",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Insert '.' every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Every binary64 value has an exact decimal expansion this long or shorter
const EXACT_FRAC_DIGITS: usize = 1074;

/// Shortest round-trip digits of a non-negative finite value, split at the point
fn shortest_digits(value: f64) -> (String, String) {
    let sci = format!("{:e}", value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i64 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let point = exp + 1;
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{zeros}{digits}"))
    } else {
        let point = point as usize;
        if point >= digits.len() {
            let zeros = "0".repeat(point - digits.len());
            (format!("{digits}{zeros}"), String::new())
        } else {
            let (int_part, frac_part) = digits.split_at(point);
            (int_part.to_string(), frac_part.to_string())
        }
    }
}

/// Exact decimal expansion of a non-negative finite value, split at the point
fn exact_digits(value: f64) -> (String, String) {
    let fixed = format!("{:.*}", EXACT_FRAC_DIGITS, value);
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (fixed, String::new()),
    }
}

/// Round to `places` decimals, half away from zero
fn round_half_up(int_part: &str, frac_part: &str, places: usize) -> (String, String) {
    let mut digits: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(places))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.chars().nth(places).is_some_and(|d| d >= '5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == '9' {
                *d = '0';
            } else {
                *d = char::from(*d as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, '1');
            int_len += 1;
        }
    }

    let frac = digits.split_off(int_len);
    (digits.into_iter().collect(), frac.into_iter().collect())
}

/// Grouped number with between `min_frac` and `max_frac` decimals.
///
/// Rounds the shortest decimal form of `value`, so `1.005` becomes `1,01`.
/// Negative zero keeps its sign.
fn pt_br(value: f64, min_frac: usize, max_frac: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let (int_part, frac_part) = shortest_digits(value.abs());
    let (int_part, frac_part) = round_half_up(&int_part, &frac_part, max_frac);

    let keep = frac_part.trim_end_matches('0').len().max(min_frac);
    let frac = &frac_part[..keep.min(frac_part.len())];

    if frac.is_empty() {
        format!("{sign}{}", group_thousands(&int_part))
    } else {
        format!("{sign}{},{frac}", group_thousands(&int_part))
    }
}

/// Plain fixed-point with '.' and exactly `decimals` places.
///
/// Rounds the exact binary value and takes the larger candidate on a tie, so
/// `0.125` becomes `0.13` while `1.005` (stored just below) stays `1.00`.
/// Negative zero prints without a sign.
fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }

    let (int_part, frac_part) = exact_digits(value.abs());
    let (int_part, frac_part) = round_half_up(&int_part, &frac_part, decimals);

    if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

/// Fiat amount, always two decimals: `R$ 100.000,00`
pub fn format_currency(value: f64, currency: Option<Currency>) -> String {
    if value.is_nan() {
        return "0,00".to_string();
    }
    let formatted = pt_br(value, 2, 2);
    match currency {
        Some(currency) => format!("{} {}", currency.symbol(), formatted),
        None => formatted,
    }
}

/// Crypto quantity without trailing zeros: `0,5`, `1.234,12345679`
pub fn format_crypto(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.000_000_01 {
        return to_fixed(value, 8);
    }
    // Up to 8 decimals, trailing zeros and a dangling comma dropped
    pt_br(value, 0, 8)
}

/// Grouped number with a fixed number of decimals
pub fn format_number(value: f64, decimals: usize) -> String {
    pt_br(value, decimals, decimals)
}

/// Signed percentage, no grouping: `+2,50%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(value, decimals).replace('.', ","))
}

/// Wallet balance: grouped with 2-8 decimals from 1 upwards, fixed 8 below
pub fn format_balance(value: f64) -> String {
    if value >= 1.0 {
        pt_br(value, 2, 8)
    } else {
        to_fixed(value, 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("100000"), "100.000");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, None), "1.234,50");
        assert_eq!(format_currency(100_000.0, Some(Currency::Brl)), "R$ 100.000,00");
        assert_eq!(format_currency(f64::NAN, Some(Currency::Usd)), "0,00");
        assert_eq!(format_currency(-1_234_567.891, Some(Currency::Eur)), "€ -1.234.567,89");
        assert_eq!(format_currency(-0.001, None), "-0,00");
        assert_eq!(format_currency(999.999, Some(Currency::Gbp)), "£ 1.000,00");
        assert_eq!(format_currency(0.0, None), "0,00");
    }

    #[test]
    fn test_format_crypto() {
        assert_eq!(format_crypto(0.0), "0");
        assert_eq!(format_crypto(0.5), "0,5");
        assert_eq!(format_crypto(1.0), "1");
        assert_eq!(format_crypto(1234.123456789), "1.234,12345679");
        assert_eq!(format_crypto(0.00012), "0,00012");
        assert_eq!(format_crypto(1_000_000.0), "1.000.000");
    }

    #[test]
    fn test_format_crypto_tiny_and_negative() {
        assert_eq!(format_crypto(0.000_000_001), "0.00000000");
        assert_eq!(format_crypto(-2.0), "-2.00000000");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.5678, 2), "1.234,57");
        assert_eq!(format_number(1234.5678, 0), "1.235");
        assert_eq!(format_number(12.0, 3), "12,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(2.5, 2), "+2,50%");
        assert_eq!(format_percent(-1.234, 2), "-1,23%");
        assert_eq!(format_percent(0.0, 1), "+0,0%");
        assert_eq!(format_percent(1234.5, 2), "+1234,50%");
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(0.5), "0.50000000");
        assert_eq!(format_balance(1.5), "1,50");
        assert_eq!(format_balance(12345.678901234), "12.345,67890123");
        assert_eq!(format_balance(0.0), "0.00000000");
    }

    #[test]
    fn test_grouped_formats_round_shortest_decimal_half_up() {
        // 1.005 and 2.675 are stored just below the midpoint
        assert_eq!(format_currency(1.005, None), "1,01");
        assert_eq!(format_currency(2.675, None), "2,68");
        assert_eq!(format_currency(0.125, None), "0,13");
        assert_eq!(format_currency(999.995, Some(Currency::Usd)), "$ 1.000,00");
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_crypto(0.000_000_015), "0,00000002");
        assert_eq!(format_number(1e21, 0), "1.000.000.000.000.000.000.000");
    }

    #[test]
    fn test_fixed_formats_round_exact_value_ties_up() {
        assert_eq!(format_percent(0.125, 2), "+0,13%");
        assert_eq!(format_percent(-0.125, 2), "-0,13%");
        assert_eq!(format_percent(2.5, 0), "+3%");
        assert_eq!(format_percent(1.005, 2), "+1,00%");
        assert_eq!(format_balance(0.123_456_785), "0.12345678");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_percent(-0.0, 2), "+0,00%");
        assert_eq!(format_balance(-0.0), "0.00000000");
        assert_eq!(format_currency(-0.0, None), "-0,00");
        assert_eq!(format_crypto(-0.0), "0");
    }

    #[test]
    fn test_round_half_up_carries() {
        assert_eq!(
            round_half_up("99", "995", 2),
            ("100".to_string(), "00".to_string())
        );
        assert_eq!(round_half_up("0", "4", 0), ("0".to_string(), String::new()));
        assert_eq!(round_half_up("1", "", 3), ("1".to_string(), "000".to_string()));
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!(Currency::Brl.symbol(), "R$");
    }
}
