//! Number-to-text and text-to-number conversion.
//!
//! Both directions follow the conventions of browser number handling so a
//! keypad session reproduces the exact text a web calculator would show:
//! shortest round-trip digits with exact ties going to the even digit,
//! exponent notation outside `1e-7 < |x| < 1e21`, and prefix parsing that
//! ignores trailing junk.

/// Format a value as its canonical display text.
///
/// # Example
///
/// ```rust
/// use reckon::core::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // ECMAScript Number-to-String: shortest digits, ties to even.
    let mut buffer = ryu_js::Buffer::new();
    buffer.format_finite(value).to_string()
}

/// Parse the longest numeric prefix of `text`.
///
/// Returns `None` when no number can be read, the equivalent of a
/// not-a-number parse. The literal word `Infinity` (optionally signed) is
/// accepted; anything after the numeric prefix is ignored.
///
/// # Example
///
/// ```rust
/// use reckon::core::parse_number;
///
/// assert_eq!(parse_number("0."), Some(0.0));
/// assert_eq!(parse_number("1e+"), Some(1.0));
/// assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_number("NaN"), None);
/// assert_eq!(parse_number(""), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if body.starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = body.as_bytes();
    let integer = count_digits(bytes, 0);
    let mut fraction = 0;
    if bytes.get(integer) == Some(&b'.') {
        fraction = count_digits(bytes, integer + 1);
    }
    if integer + fraction == 0 {
        return None;
    }

    let mantissa_end = if fraction > 0 || bytes.get(integer) == Some(&b'.') {
        integer + 1 + fraction
    } else {
        integer
    };

    let mut exponent = "";
    if matches!(bytes.get(mantissa_end), Some(b'e' | b'E')) {
        let mut start = mantissa_end + 1;
        if matches!(bytes.get(start), Some(b'+' | b'-')) {
            start += 1;
        }
        let exp_digits = count_digits(bytes, start);
        if exp_digits > 0 {
            exponent = &body[mantissa_end + 1..start + exp_digits];
        }
    }

    let whole = if integer > 0 { &body[..integer] } else { "0" };
    let fractional = if fraction > 0 {
        &body[integer + 1..integer + 1 + fraction]
    } else {
        "0"
    };
    let normalized = if exponent.is_empty() {
        format!("{whole}.{fractional}")
    } else {
        format!("{whole}.{fractional}e{exponent}")
    };

    let magnitude = normalized.parse::<f64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}
