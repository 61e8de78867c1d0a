//! Literal encoding
//!
//! Floats must survive the trip to Python bit for bit. Integral values are written as plain decimals; everything
//! else goes through the runtime's `bin2float`, which decodes the host-endian byte string and ignores the readable
//! rendering next to it.

use lslpy_core::runtime::{BIN2FLOAT, KEY_CONSTRUCTOR};

/// Encode an LSL float as a Python expression that evaluates to the same 32-bit value.
pub fn float_literal(value: f32) -> String {
    if value.is_finite() && value.trunc() == value {
        if value == 0.0 && value.is_sign_negative() {
            return "-0.0".to_string();
        }
        // Integral f32 values are exactly representable as f64 and print without an exponent.
        return format!("{:.0}.0", f64::from(value));
    }
    let hex: String = value.to_ne_bytes().iter().map(|b| format!("{b:02x}")).collect();
    format!("{BIN2FLOAT}('{}', '{hex}')", readable_float(value))
}

/// `%f`-style rendering used only as a hint for human readers.
fn readable_float(value: f32) -> String {
    if value.is_nan() {
        if value.is_sign_negative() { "-nan".to_string() } else { "nan".to_string() }
    } else if value.is_infinite() {
        if value.is_sign_negative() { "-inf".to_string() } else { "inf".to_string() }
    } else {
        format!("{:.6}", f64::from(value))
    }
}

/// Escape a string for a double-quoted Python literal.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Double-quoted Python string literal.
pub fn string_literal(value: &str) -> String {
    format!("\"{}\"", escape_string(value))
}

/// `Key("...")` constructor call.
pub fn key_literal(value: &str) -> String {
    format!("{KEY_CONSTRUCTOR}({})", string_literal(value))
}
