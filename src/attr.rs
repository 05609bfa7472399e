//! Numeric attribute helpers.

use crate::ast::Element;

/// Read several attributes as floats at once.
///
/// Missing or non-numeric attributes come back as `NaN`; callers that need a
/// fallback (like a rectangle's position) have to apply it themselves.
pub fn numeric_attributes<const N: usize>(elem: &Element, names: [&str; N]) -> [f64; N] {
    names.map(|name| elem.get_attr(name).map_or(f64::NAN, parse_float))
}

/// Resolve a length that is either absolute (`"10"`) or a percentage of
/// `base` (`"50%"`).
pub fn resolve_value(raw: &str, base: f64) -> f64 {
    match raw.trim_end().strip_suffix('%') {
        Some(pct) => parse_float(pct) * base / 100.0,
        None => parse_float(raw),
    }
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
///
/// `"10px"` is 10, `"abc"` is NaN.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts if at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Format a number for embedding in path data.
///
/// Follows the number-to-string rules of the JavaScript the packed icons are
/// consumed from: shortest round-trip digits, plain decimal notation for
/// `1e-6 <= |n| < 1e21`, exponent form (`1e-7`, `1.5e+21`) outside it, `-0`
/// as `0`, and `NaN`/`Infinity`/`-Infinity` for non-finite values.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if n == 0.0 {
        return "0".into();
    }

    let mut buf = ryu::Buffer::new();
    let (digits, point) = decimal_digits(buf.format_finite(n.abs()));
    let digits = digits.as_str();
    let k = digits.len() as i32;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }

    if k <= point && point <= 21 {
        out.push_str(digits);
        out.extend(std::iter::repeat_n('0', (point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-point) as usize));
        out.push_str(digits);
    } else {
        let exp = point - 1;
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        if exp > 0 {
            out.push('+');
        }
        out.push_str(&exp.to_string());
    }

    out
}

/// Split ryu output (`"12.5"`, `"1.5e-7"`, `"0.001"`) into its significant
/// digits and the position of the decimal point relative to them.
fn decimal_digits(s: &str) -> (String, i32) {
    let (mantissa, exp) = match s.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (s, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all = format!("{}{}", int, frac);
    let significant = all.trim_start_matches('0');
    let point = int.len() as i32 + exp - (all.len() - significant.len()) as i32;

    (significant.trim_end_matches('0').to_string(), point)
}
