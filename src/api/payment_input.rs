//! Formatting and validation rules for the payment inputs.
//!
//! Formatters never fail: whatever comes in, a (possibly empty) prefix of
//! a well formed value comes out. Validators expect formatted values.

use crate::{consts, models::payment_form::CalendarMonth};

/// Outcome of a key press on a digit-only input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeystrokeAction {
    Allow,
    Suppress,
}

/// Lets through single digits and the editing/navigation keys
pub fn restrict_digits_on_keystroke(key: &str) -> KeystrokeAction {
    if consts::ALLOWED_EDITING_KEYS.contains(&key) {
        return KeystrokeAction::Allow;
    }

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => KeystrokeAction::Allow,
        _ => KeystrokeAction::Suppress,
    }
}

fn only_digits(value: &str, max_digits: usize) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_digits)
        .collect()
}

/// Drops everything but letters and whitespace, each whitespace run
/// becomes one space
pub fn sanitize_name(value: &str) -> String {
    let mut sanitized = String::with_capacity(value.len());
    let mut in_whitespace = false;

    for c in value.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                sanitized.push(' ');
            }
            in_whitespace = true;
        } else if c.is_ascii_alphabetic() {
            sanitized.push(c);
            in_whitespace = false;
        }
    }

    sanitized
}

/// `4111111111111111` -> `4111 1111 1111 1111`
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = only_digits(value, consts::CARD_NUMBER_DIGITS)
        .chars()
        .collect();

    digits
        .chunks(consts::CARD_NUMBER_GROUP_SIZE)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}

/// `1227` -> `12/27`; two digits or less are left as typed
pub fn format_expiry(value: &str) -> String {
    let digits = only_digits(value, consts::EXPIRY_DIGITS);
    if digits.len() <= 2 {
        return digits;
    }

    let (month, year) = digits.split_at(2);
    format!("{month}/{year}")
}

pub fn sanitize_cvv(value: &str) -> String {
    only_digits(value, consts::CVV_DIGITS)
}

/// First and last name at least, letters only
pub fn validate_name(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();

    tokens.len() >= 2
        && tokens
            .iter()
            .all(|token| token.chars().all(|c| c.is_ascii_alphabetic()))
}

fn is_digit_run(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Exactly `XXXX XXXX XXXX XXXX`
pub fn validate_card_number(formatted: &str) -> bool {
    let groups: Vec<&str> = formatted.split(' ').collect();

    groups.len() == consts::CARD_NUMBER_DIGITS / consts::CARD_NUMBER_GROUP_SIZE
        && groups
            .iter()
            .all(|group| is_digit_run(group, consts::CARD_NUMBER_GROUP_SIZE))
}

/// Splits `MM/YY` into the month it denotes, `None` when malformed
pub fn parse_expiry(formatted: &str) -> Option<CalendarMonth> {
    let (month, year) = formatted.split_once('/')?;
    if !is_digit_run(month, 2) || !is_digit_run(year, 2) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    Some(CalendarMonth {
        year: consts::EXPIRY_CENTURY + year,
        month,
    })
}

/// Well formed and not before `current_month`
pub fn validate_expiry(formatted: &str, current_month: CalendarMonth) -> bool {
    parse_expiry(formatted).is_some_and(|expiry| expiry >= current_month)
}

pub fn validate_cvv(value: &str) -> bool {
    is_digit_run(value, consts::CVV_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OCT_2026: CalendarMonth = CalendarMonth {
        year: 2026,
        month: 10,
    };

    #[test]
    fn test_keystroke_digits_and_editing_keys_pass() {
        for key in ["0", "7", "9", "Backspace", "Tab", "ArrowLeft", "End"] {
            assert_eq!(restrict_digits_on_keystroke(key), KeystrokeAction::Allow, "{key}");
        }
    }

    #[test]
    fn test_keystroke_everything_else_suppressed() {
        for key in ["a", " ", "-", "/", "12", "", "Enter", "ArrowUp", "٣"] {
            assert_eq!(
                restrict_digits_on_keystroke(key),
                KeystrokeAction::Suppress,
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Jane  Doe"), "Jane Doe");
        assert_eq!(sanitize_name("J4ne D0e!"), "Jne De");
        assert_eq!(sanitize_name("Jane\t\n Doe "), "Jane Doe ");
        assert_eq!(sanitize_name("Mary - Ann"), "Mary Ann");
        assert_eq!(sanitize_name("123"), "");
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("41"), "41");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("4111-1111-1111-1111"), "4111 1111 1111 1111");
        assert_eq!(
            format_card_number("4111 1111 1111 1111 9999"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn test_format_card_number_output_shape() {
        let inputs = [
            "",
            "x",
            "1 2 3 4 5 6 7 8 9",
            "0000000000000000000000000",
            "12ab34cd56ef78gh90",
            "  4111  1111  ",
        ];

        for input in inputs {
            let formatted = format_card_number(input);

            assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
            assert!(!formatted.contains("  "));
            assert!(formatted.chars().filter(char::is_ascii_digit).count() <= 16);
            assert!(formatted.split(' ').all(|group| group.len() <= 4));
            assert_eq!(format_card_number(&formatted), formatted);
        }
    }

    #[test]
    fn test_card_number_valid_iff_sixteen_digits() {
        let cases = [
            ("4111111111111111", true),
            ("4111 1111 1111 1111 22", true),
            ("card: 4111-1111-1111-1111", true),
            ("411111111111111", false),
            ("4111 1111 1111", false),
            ("", false),
        ];

        for (input, expected) in cases {
            assert_eq!(validate_card_number(&format_card_number(input)), expected, "{input}");
        }
    }

    #[test]
    fn test_validate_card_number_rejects_unformatted() {
        assert!(validate_card_number("4111 1111 1111 1111"));
        assert!(!validate_card_number("4111111111111111"));
        assert!(!validate_card_number("4111  1111 1111 1111"));
        assert!(!validate_card_number("4111 1111 1111 1111 "));
        assert!(!validate_card_number("4111-1111-1111-1111"));
        assert!(!validate_card_number("411a 1111 1111 1111"));
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry(""), "");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("12/2799"), "12/27");
        assert_eq!(format_expiry("ab"), "");
    }

    #[test]
    fn test_format_expiry_idempotent() {
        for digits in ["", "0", "01", "012", "0127", "9999"] {
            let formatted = format_expiry(digits);

            assert_eq!(formatted.contains('/'), digits.len() > 2, "{digits}");
            assert_eq!(format_expiry(&formatted), formatted);
        }
    }

    #[test]
    fn test_validate_expiry_month_granularity() {
        assert!(validate_expiry("10/26", OCT_2026));
        assert!(validate_expiry("11/26", OCT_2026));
        assert!(validate_expiry("01/27", OCT_2026));
        assert!(!validate_expiry("09/26", OCT_2026));
        assert!(!validate_expiry("12/25", OCT_2026));
        assert!(!validate_expiry("01/20", OCT_2026));
    }

    #[test]
    fn test_validate_expiry_past_date_after_january_2020() {
        let feb_2020 = CalendarMonth {
            year: 2020,
            month: 2,
        };
        let jan_2020 = CalendarMonth {
            year: 2020,
            month: 1,
        };

        assert!(!validate_expiry("01/20", feb_2020));
        assert!(validate_expiry("01/20", jan_2020));
    }

    #[test]
    fn test_validate_expiry_malformed() {
        for value in ["", "1027", "10/2", "1/26", "00/30", "13/30", "10-26", "1a/26", "10/26 "] {
            assert!(!validate_expiry(value, OCT_2026), "{value:?}");
        }
    }

    #[test]
    fn test_expiry_years_read_as_two_thousands() {
        assert_eq!(
            parse_expiry("03/99"),
            Some(CalendarMonth {
                year: 2099,
                month: 3
            })
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("John Smith"));
        assert!(validate_name("  Mary Ann Smith "));
        assert!(!validate_name("John"));
        assert!(!validate_name("John3 Smith"));
        assert!(!validate_name("John O'Neil"));
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
    }

    #[test]
    fn test_cvv() {
        assert_eq!(sanitize_cvv("1a2b3c4"), "123");
        assert!(validate_cvv("123"));
        assert!(!validate_cvv("12"));
        assert!(!validate_cvv("1234"));
        assert!(!validate_cvv("12a"));
    }
}
