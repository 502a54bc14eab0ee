//! Number formatting for display.

/// Thousands separator used by the French locale (narrow no-break space).
pub const THOUSANDS_SEPARATOR: char = '\u{202F}';

/// Decimal separator used by the French locale.
pub const DECIMAL_SEPARATOR: char = ',';

/// Maximum fraction digits shown by [`format_big_number`].
const MAX_FRACTION_DIGITS: usize = 3;

/// Enough fraction digits to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to two decimal places.
///
/// Ties are decided on the exact binary value and go away from zero:
/// `0.125` becomes `0.13`, while `1.005` is stored just below the tie and
/// becomes `1.0`. Rounding an already rounded value returns it unchanged.
///
/// # Examples
///
/// ```
/// use sbb_explorer::format::round_2_decimals;
///
/// assert_eq!(round_2_decimals(3.14159), 3.14);
/// assert_eq!(round_2_decimals(2.0), 2.0);
/// ```
pub fn round_2_decimals(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let (int_part, frac_part) = round_half_away(value.abs(), 2);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
        .parse()
        .unwrap_or(value)
}

/// Format a number the French/Swiss way: `1234567.891` → `1 234 567,891`.
///
/// Digits are grouped in threes with [`THOUSANDS_SEPARATOR`], at most three
/// fraction digits are kept (ties away from zero, trailing zeros dropped)
/// and integers get no fractional part. Non-finite values render as `NaN`,
/// `∞` or `-∞`.
pub fn format_big_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let (int_part, frac_part) = round_half_away(value.abs(), MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    // No "-0" once rounding has eaten every significant digit
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());

    let mut out = String::with_capacity(int_part.len() * 2 + frac_part.len() + 2);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, &int_part);
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// Round a finite, non-negative value to `digits` fraction digits on its
/// exact decimal expansion, ties away from zero. Returns the integer and
/// fraction digit strings.
fn round_half_away(value: f64, digits: usize) -> (String, String) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5');

    let mut kept: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(digits))
        .collect();

    if round_up {
        let mut carry = true;
        for c in kept.iter_mut().rev() {
            if *c == '9' {
                *c = '0';
            } else {
                *c = char::from(*c as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, '1');
        }
    }

    let split = kept.len() - digits;
    (
        kept[..split].iter().collect(),
        kept[split..].iter().collect(),
    )
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }
}
