// Shared numeric conversion helpers used by the coercion layer

use crate::unicode::utf16_trim;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

const TWO_16: f64 = 65_536.0; // 2^16
const TWO_32: f64 = 4_294_967_296.0; // 2^32

/// ToInteger semantics for Number inputs. NaN maps to +0; zeros and
/// infinities pass through with their sign.
pub fn to_integer(n: f64) -> f64 {
    if n.is_nan() {
        return 0.0;
    }
    // trunc == sign(n) * floor(abs(n)) and keeps -0 / ±Infinity intact
    n.trunc()
}

/// `posInt modulo m`, the non-negative residue, for finite non-zero `n`.
fn modulo(n: f64, m: f64) -> f64 {
    let int = n.trunc();
    // the +0.0 folds a -0 residue into +0
    ((int % m) + m) % m + 0.0
}

/// JS ToInt32 semantics for Number inputs
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    let int32bit = modulo(n, TWO_32);
    if int32bit >= TWO_32 / 2.0 {
        (int32bit - TWO_32) as i32
    } else {
        int32bit as i32
    }
}

/// JS ToUint32 semantics for Number inputs
pub fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    modulo(n, TWO_32) as u32
}

/// JS ToUint16 semantics for Number inputs
pub fn to_uint16(n: f64) -> u16 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    modulo(n, TWO_16) as u16
}

/// Number::toString(10): shortest round-trip digits, placed per the
/// ECMAScript rules (plain notation for 1e-6 <= |m| < 1e21, exponent otherwise).
pub fn number_to_string(m: f64) -> String {
    if m.is_nan() {
        return "NaN".to_string();
    }
    // Handle zero: ToString(-0) produces "0"
    if m == 0.0 {
        return "0".to_string();
    }
    if m.is_infinite() {
        return if m > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if m < 0.0 {
        return format!("-{}", number_to_string(-m));
    }

    // `{:e}` yields the shortest digit string that round-trips, e.g. "1.2345e-7"
    let sci = format!("{:e}", m);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        if k == 1 {
            format!("{}e{}{}", digits, sign, e.abs())
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{}.{}e{}{}", first, rest, sign, e.abs())
        }
    }
}

/// Matches StrUnsignedDecimalLiteral minus the `Infinity` production:
/// `digits [. digits] [e|E [+|-] digits]` with at least one mantissa digit.
fn is_unsigned_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut mantissa_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// ToNumber applied to the String type.
pub fn string_to_number(s: &[u16]) -> f64 {
    let trimmed = utf16_trim(s);
    if trimmed.is_empty() {
        return 0.0;
    }
    // Lone surrogates cannot be part of a numeric literal
    let Ok(text) = String::from_utf16(trimmed) else {
        return f64::NAN;
    };
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return f64::NAN;
        }
        // Exact integer first, then a single rounding to the nearest double
        return BigUint::parse_bytes(hex.as_bytes(), 16)
            .and_then(|n| n.to_f64())
            .unwrap_or(f64::NAN);
    }
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text.as_str()),
    };
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else if is_unsigned_decimal_literal(unsigned) {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        return f64::NAN;
    };
    if negative { -magnitude } else { magnitude }
}
