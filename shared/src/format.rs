//! Display formatting for money and timestamps.
//!
//! Both formatters are total: bad input produces a placeholder string, never
//! an error, because a single malformed row must not break a whole list.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const NBSP: char = '\u{a0}';

/// Shown in place of a date that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Value format of `<input type="datetime-local">`
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    DATETIME_LOCAL_FORMAT,
    "%Y-%m-%d %H:%M",
];

/// Locale rules for rendering a currency amount
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl CurrencyFormat {
    /// Russian rouble, ru-RU conventions: `1 500,00 ₽`
    pub const RUB: CurrencyFormat = CurrencyFormat {
        symbol: "₽",
        group_separator: NBSP,
        decimal_separator: ',',
    };

    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("NaN{}{}", NBSP, self.symbol);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}∞{}{}", sign, NBSP, self.symbol);
        }

        let (whole, fraction) = round_to_cents(amount.abs());
        let sign = if amount.is_sign_negative() { "-" } else { "" };

        format!(
            "{}{}{}{}{}{}",
            sign,
            self.group(&whole),
            self.decimal_separator,
            fraction,
            NBSP,
            self.symbol
        )
    }

    fn group(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// Rounds the shortest decimal text of `magnitude` half-up to two places and
/// returns the whole and fraction digits. Working on the text keeps `1.005`
/// at `1,01` where scaling the binary value would give `1,00`.
fn round_to_cents(magnitude: f64) -> (String, String) {
    let text = magnitude.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = format!("{:0<3}", fraction);

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes()[2] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let whole = String::from_utf8_lossy(&digits[..split]).into_owned();
    let fraction = String::from_utf8_lossy(&digits[split..]).into_owned();
    (whole, fraction)
}

/// Formats an amount in the application's fixed currency
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::RUB.format(amount)
}

/// Parses a backend or form timestamp into local wall-clock time.
///
/// Accepts naive ISO date-times (the backend's `isoformat()` output and the
/// `datetime-local` input value), RFC 3339 with an offset, and bare dates
/// (local midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Formats a timestamp as `15 Jan 2025, 10:30`, or [`INVALID_DATE`]
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format("%-d %b %Y, %H:%M").to_string(),
        None => {
            log::debug!("unparsable date {:?}", raw);
            INVALID_DATE.to_string()
        }
    }
}

/// Value for a `datetime-local` input, minute precision
pub fn datetime_local_value(timestamp: NaiveDateTime) -> String {
    timestamp.format(DATETIME_LOCAL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1500.0), "1\u{a0}500,00\u{a0}₽");
        assert_eq!(format_currency(1234567.891), "1\u{a0}234\u{a0}567,89\u{a0}₽");
        assert_eq!(format_currency(999.0), "999,00\u{a0}₽");
    }

    #[test]
    fn test_format_currency_small_and_zero() {
        assert_eq!(format_currency(0.0), "0,00\u{a0}₽");
        assert_eq!(format_currency(0.5), "0,50\u{a0}₽");
        assert_eq!(format_currency(12.346), "12,35\u{a0}₽");
    }

    #[test]
    fn test_format_currency_rounds_the_decimal_text() {
        assert_eq!(format_currency(1.005), "1,01\u{a0}₽");
        assert_eq!(format_currency(0.145), "0,15\u{a0}₽");
        assert_eq!(format_currency(12.345), "12,35\u{a0}₽");
        assert_eq!(format_currency(0.004), "0,00\u{a0}₽");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-2500.5), "-2\u{a0}500,50\u{a0}₽");
        // sign survives rounding to zero
        assert_eq!(format_currency(-0.001), "-0,00\u{a0}₽");
    }

    #[test]
    fn test_format_currency_non_finite_never_fails() {
        assert_eq!(format_currency(f64::NAN), "NaN\u{a0}₽");
        assert_eq!(format_currency(f64::INFINITY), "∞\u{a0}₽");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-∞\u{a0}₽");
    }

    #[test]
    fn test_format_currency_carries_rounding_into_whole_part() {
        assert_eq!(format_currency(999.999), "1\u{a0}000,00\u{a0}₽");
        assert_eq!(format_currency(99.995), "100,00\u{a0}₽");
    }

    #[test]
    fn test_parse_timestamp_backend_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        assert_eq!(parse_timestamp("2025-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15T10:30"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15 10:30:00"), Some(expected));
        assert!(parse_timestamp("2025-01-15T10:30:00.123456").is_some());
    }

    #[test]
    fn test_parse_timestamp_bare_date_is_midnight() {
        let midnight = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2025-01-15"), Some(midnight));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2025-13-40T10:00"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-15T10:30:00"), "15 Jan 2025, 10:30");
        assert_eq!(format_date("2024-12-03T08:05"), "3 Dec 2024, 08:05");
        assert_eq!(format_date("not a date"), INVALID_DATE);
    }

    #[test]
    fn test_datetime_local_value() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 6, 9)
            .unwrap()
            .and_hms_opt(7, 4, 59)
            .unwrap();
        assert_eq!(datetime_local_value(timestamp), "2025-06-09T07:04");
    }
}
