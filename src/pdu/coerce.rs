//! Payload coercion to field kinds
//!
//! Numeric conversions normalize through a 64-bit intermediate and then
//! narrow. Narrowing uses two's-complement truncation (plain `as` casts)
//! rather than saturation; out-of-range values are the caller's schema
//! problem, and the truncation behavior is part of the contract.

use super::types::Value;

impl Value {
    /// 64-bit signed view of the payload.
    ///
    /// Text parses as decimal and coerces to 0 when unparseable; raw
    /// bytes coerce to 0.
    pub fn as_i64(&self) -> i64 {
        match self {
            Value::Integer(v) => *v,
            Value::Unsigned(v) => *v as i64,
            Value::Float(v) => *v as i64,
            Value::Text(s) => s.trim().parse().unwrap_or(0),
            Value::Bytes(_) => 0,
        }
    }

    /// 64-bit unsigned view of the payload.
    ///
    /// Same rules as [`Value::as_i64`]; a negative integer payload
    /// reinterprets as two's complement.
    pub fn as_u64(&self) -> u64 {
        match self {
            Value::Integer(v) => *v as u64,
            Value::Unsigned(v) => *v,
            Value::Float(v) => *v as u64,
            Value::Text(s) => s.trim().parse().unwrap_or(0),
            Value::Bytes(_) => 0,
        }
    }

    /// 32-bit signed view; truncates the 64-bit intermediate.
    pub fn as_i32(&self) -> i32 {
        self.as_i64() as i32
    }

    /// 32-bit unsigned view; truncates the 64-bit intermediate.
    pub fn as_u32(&self) -> u32 {
        self.as_u64() as u32
    }

    /// Double-precision view of the payload.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Integer(v) => *v as f64,
            Value::Unsigned(v) => *v as f64,
            Value::Float(v) => *v,
            Value::Text(s) => s.trim().parse().unwrap_or(0.0),
            Value::Bytes(_) => 0.0,
        }
    }

    /// Single-precision view of the payload.
    pub fn as_f32(&self) -> f32 {
        self.as_f64() as f32
    }

    /// Canonical text form of the payload.
    ///
    /// Text is returned verbatim, bytes decode as lossy UTF-8, and
    /// numeric payloads render in decimal.
    pub fn as_text(&self) -> String {
        match self {
            Value::Integer(v) => v.to_string(),
            Value::Unsigned(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Text(s) => s.clone(),
            Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        }
    }

    /// Raw byte view of the payload.
    ///
    /// Bytes pass through unchanged and text yields its UTF-8 bytes;
    /// numeric payloads have no byte form and yield an empty sequence.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(s) => s.clone().into_bytes(),
            Value::Bytes(b) => b.clone(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_normalization() {
        assert_eq!(Value::Integer(-5).as_i64(), -5);
        assert_eq!(Value::Unsigned(7).as_i64(), 7);
        assert_eq!(Value::Float(3.9).as_i64(), 3);
        assert_eq!(Value::Integer(9).as_u64(), 9);
        assert_eq!(Value::Unsigned(u64::MAX).as_u64(), u64::MAX);
    }

    #[test]
    fn test_text_parses_as_number() {
        assert_eq!(Value::Text(" 123 ".to_string()).as_i64(), 123);
        assert_eq!(Value::Text("-40".to_string()).as_i64(), -40);
        assert_eq!(Value::Text("17".to_string()).as_u64(), 17);
        assert_eq!(Value::Text("2.5".to_string()).as_f64(), 2.5);
        assert_eq!(Value::Text("not a number".to_string()).as_i64(), 0);
        assert_eq!(Value::Bytes(vec![1, 2]).as_i64(), 0);
    }

    #[test]
    fn test_narrowing_truncates() {
        // Two's-complement truncation, not saturation.
        assert_eq!(Value::Integer(i64::from(i32::MAX) + 1).as_i32(), i32::MIN);
        assert_eq!(Value::Unsigned(u64::from(u32::MAX) + 2).as_u32(), 1);
        assert_eq!(Value::Integer(-1).as_u64(), u64::MAX);
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(Value::Integer(-12).as_text(), "-12");
        assert_eq!(Value::Unsigned(12).as_text(), "12");
        assert_eq!(Value::Text("up".to_string()).as_text(), "up");
        assert_eq!(Value::Bytes(b"FOO".to_vec()).as_text(), "FOO");
    }

    #[test]
    fn test_byte_passthrough() {
        assert_eq!(Value::Bytes(vec![0, 159, 1]).as_bytes(), vec![0, 159, 1]);
        assert_eq!(Value::Text("ab".to_string()).as_bytes(), b"ab".to_vec());
        assert_eq!(Value::Integer(5).as_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn test_float_views() {
        assert_eq!(Value::Integer(2).as_f64(), 2.0);
        assert_eq!(Value::Float(1.5).as_f32(), 1.5f32);
        assert_eq!(Value::Bytes(vec![9]).as_f64(), 0.0);
    }
}
