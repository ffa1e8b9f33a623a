use recast_api::{ConvertError, Converter, Value, ValueType};

/// Parse text into the requested common type (the shared string-to-common
/// fallback).
pub struct StringToCommon;

impl Converter for StringToCommon {
    fn convert(&self, value: &Value, dest: &ValueType) -> Result<Value, ConvertError> {
        let s = match value {
            Value::String(s) => s,
            other => {
                return Err(ConvertError::UnexpectedSource {
                    converter: "StringToCommon",
                    actual: other.value_type(),
                })
            }
        };
        match dest {
            ValueType::Bool => parse(s, "bool").map(Value::Bool),
            ValueType::Int8 => parse(s, "int8").map(Value::Int8),
            ValueType::Int16 => parse(s, "int16").map(Value::Int16),
            ValueType::Int32 => parse(s, "int32").map(Value::Int32),
            ValueType::Int64 => parse(s, "int64").map(Value::Int64),
            ValueType::Float32 => parse(s, "float32").map(Value::Float32),
            ValueType::Float64 => parse(s, "float64").map(Value::Float64),
            ValueType::Char => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(ConvertError::Malformed {
                        text: s.to_string(),
                        expected: "single character",
                    }),
                }
            }
            ValueType::Decimal => parse_decimal(s)
                .map(|(unscaled, scale)| Value::Decimal(unscaled, scale))
                .ok_or_else(|| ConvertError::Malformed {
                    text: s.to_string(),
                    expected: "decimal",
                }),
            ValueType::BigInt => parse(s, "bigint").map(Value::BigInt),
            other => Err(ConvertError::UnsupportedTarget {
                converter: "StringToCommon",
                dest: other.clone(),
            }),
        }
    }
}

/// Numeric widening/narrowing and bool/char/decimal bridging between any
/// two common types (the shared common-to-common fallback).
///
/// Narrowing follows cast semantics: floats truncate toward zero, integer
/// overflow is an `OutOfRange` error rather than a wrap.
pub struct CommonToCommon;

impl Converter for CommonToCommon {
    fn convert(&self, value: &Value, dest: &ValueType) -> Result<Value, ConvertError> {
        match dest {
            ValueType::Bool => Ok(Value::Bool(to_f64(value, "CommonToCommon")? != 0.0)),
            ValueType::Int8 => narrow(value, dest).map(Value::Int8),
            ValueType::Int16 => narrow(value, dest).map(Value::Int16),
            ValueType::Int32 => narrow(value, dest).map(Value::Int32),
            ValueType::Int64 => narrow(value, dest).map(Value::Int64),
            ValueType::Float32 => Ok(Value::Float32(to_f64(value, "CommonToCommon")? as f32)),
            ValueType::Float64 => Ok(Value::Float64(to_f64(value, "CommonToCommon")?)),
            ValueType::Char => {
                let code = to_i128(value, "CommonToCommon")?;
                u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .map(Value::Char)
                    .ok_or_else(|| ConvertError::OutOfRange {
                        value: code.to_string(),
                        dest: ValueType::Char,
                    })
            }
            ValueType::Decimal => to_decimal(value),
            ValueType::BigInt => Ok(Value::BigInt(to_i128(value, "CommonToCommon")?)),
            other => Err(ConvertError::UnsupportedTarget {
                converter: "CommonToCommon",
                dest: other.clone(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric bridging helpers
// ---------------------------------------------------------------------------

fn parse<T: std::str::FromStr>(s: &str, expected: &'static str) -> Result<T, ConvertError> {
    s.parse().map_err(|_| ConvertError::Malformed {
        text: s.to_string(),
        expected,
    })
}

/// Integral view of a common value. Floats truncate toward zero, decimals
/// drop the fractional part, chars are their code points.
fn to_i128(value: &Value, converter: &'static str) -> Result<i128, ConvertError> {
    match value {
        Value::Bool(b) => Ok(*b as i128),
        Value::Int8(v) => Ok(*v as i128),
        Value::Int16(v) => Ok(*v as i128),
        Value::Int32(v) => Ok(*v as i128),
        Value::Int64(v) => Ok(*v as i128),
        Value::Char(c) => Ok(u32::from(*c) as i128),
        Value::Float32(v) => float_to_i128(*v as f64, value),
        Value::Float64(v) => float_to_i128(*v, value),
        // A scale past i128's decimal range means |value| < 1; truncation
        // is exactly zero.
        Value::Decimal(unscaled, scale) => Ok(match 10i128.checked_pow(*scale as u32) {
            Some(pow) => unscaled / pow,
            None => 0,
        }),
        Value::BigInt(v) => Ok(*v),
        other => Err(ConvertError::UnexpectedSource {
            converter,
            actual: other.value_type(),
        }),
    }
}

fn float_to_i128(f: f64, value: &Value) -> Result<i128, ConvertError> {
    // `i128::MAX as f64` rounds up to 2^127, which is already past MAX;
    // `i128::MIN as f64` is exactly MIN and still representable.
    if !f.is_finite() || f >= i128::MAX as f64 || f < i128::MIN as f64 {
        return Err(ConvertError::OutOfRange {
            value: value.to_string(),
            dest: ValueType::BigInt,
        });
    }
    Ok(f as i128)
}

/// Floating view of a common value.
fn to_f64(value: &Value, converter: &'static str) -> Result<f64, ConvertError> {
    match value {
        Value::Bool(b) => Ok(*b as u8 as f64),
        Value::Int8(v) => Ok(*v as f64),
        Value::Int16(v) => Ok(*v as f64),
        Value::Int32(v) => Ok(*v as f64),
        Value::Int64(v) => Ok(*v as f64),
        Value::Char(c) => Ok(u32::from(*c) as f64),
        Value::Float32(v) => Ok(*v as f64),
        Value::Float64(v) => Ok(*v),
        Value::Decimal(unscaled, scale) => Ok(*unscaled as f64 / 10f64.powi(*scale as i32)),
        Value::BigInt(v) => Ok(*v as f64),
        other => Err(ConvertError::UnexpectedSource {
            converter,
            actual: other.value_type(),
        }),
    }
}

fn narrow<T: TryFrom<i128>>(value: &Value, dest: &ValueType) -> Result<T, ConvertError> {
    let wide = to_i128(value, "CommonToCommon")?;
    T::try_from(wide).map_err(|_| ConvertError::OutOfRange {
        value: wide.to_string(),
        dest: dest.clone(),
    })
}

fn to_decimal(value: &Value) -> Result<Value, ConvertError> {
    match value {
        Value::Decimal(unscaled, scale) => Ok(Value::Decimal(*unscaled, *scale)),
        Value::Float32(v) => decimal_from_f64(*v as f64),
        Value::Float64(v) => decimal_from_f64(*v),
        other => to_i128(other, "CommonToCommon").map(|i| Value::Decimal(i, 0)),
    }
}

/// Exact decimal from a float's shortest textual form. Scientific notation
/// (very large/small magnitudes) does not fit the `(unscaled, scale)`
/// layout and is out of range.
fn decimal_from_f64(f: f64) -> Result<Value, ConvertError> {
    let out_of_range = || ConvertError::OutOfRange {
        value: f.to_string(),
        dest: ValueType::Decimal,
    };
    if !f.is_finite() {
        return Err(out_of_range());
    }
    let text = f.to_string();
    if text.contains(['e', 'E']) {
        return Err(out_of_range());
    }
    parse_decimal(&text)
        .map(|(unscaled, scale)| Value::Decimal(unscaled, scale))
        .ok_or_else(out_of_range)
}

/// Parse `[-]digits[.digits]` into `(unscaled, scale)`.
///
/// Returns `None` on empty input, non-digit characters, more than 38
/// fractional digits, or i128 overflow.
pub(crate) fn parse_decimal(s: &str) -> Option<(i128, u8)> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if frac_part.len() > 38 {
        return None;
    }

    let mut unscaled: i128 = 0;
    for ch in int_part.chars().chain(frac_part.chars()) {
        let digit = ch.to_digit(10)? as i128;
        unscaled = unscaled.checked_mul(10)?.checked_add(digit)?;
    }
    if negative {
        unscaled = -unscaled;
    }
    Some((unscaled, frac_part.len() as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_parses_into_each_common_type() {
        let cases = [
            ("true", ValueType::Bool, Value::Bool(true)),
            ("-7", ValueType::Int8, Value::Int8(-7)),
            ("1024", ValueType::Int16, Value::Int16(1024)),
            ("70000", ValueType::Int32, Value::Int32(70000)),
            ("-9000000000", ValueType::Int64, Value::Int64(-9_000_000_000)),
            ("1.5", ValueType::Float64, Value::Float64(1.5)),
            ("x", ValueType::Char, Value::Char('x')),
            ("123.45", ValueType::Decimal, Value::Decimal(12345, 2)),
            ("170141183460469", ValueType::BigInt, Value::BigInt(170_141_183_460_469)),
        ];
        for (text, dest, expected) in cases {
            let out = StringToCommon
                .convert(&Value::String(text.into()), &dest)
                .unwrap();
            assert_eq!(out, expected, "parsing '{text}' as {dest}");
        }
    }

    #[test]
    fn unparseable_text_is_malformed() {
        let err = StringToCommon
            .convert(&Value::String("abc".into()), &ValueType::Int32)
            .unwrap_err();
        assert!(matches!(err, ConvertError::Malformed { .. }));
    }

    #[test]
    fn non_common_destination_is_rejected() {
        let err = StringToCommon
            .convert(&Value::String("1".into()), &ValueType::DateTime)
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedTarget { .. }));
    }

    #[test]
    fn widening_and_narrowing() {
        let out = CommonToCommon
            .convert(&Value::Int8(-3), &ValueType::Int64)
            .unwrap();
        assert_eq!(out, Value::Int64(-3));

        let out = CommonToCommon
            .convert(&Value::Int64(200), &ValueType::Int16)
            .unwrap();
        assert_eq!(out, Value::Int16(200));

        let err = CommonToCommon
            .convert(&Value::Int64(1 << 40), &ValueType::Int16)
            .unwrap_err();
        assert!(matches!(err, ConvertError::OutOfRange { .. }));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        let out = CommonToCommon
            .convert(&Value::Float64(-2.9), &ValueType::Int32)
            .unwrap();
        assert_eq!(out, Value::Int32(-2));
    }

    #[test]
    fn bool_and_char_bridging() {
        let out = CommonToCommon
            .convert(&Value::Bool(true), &ValueType::Int32)
            .unwrap();
        assert_eq!(out, Value::Int32(1));

        let out = CommonToCommon
            .convert(&Value::Int32(0), &ValueType::Bool)
            .unwrap();
        assert_eq!(out, Value::Bool(false));

        let out = CommonToCommon
            .convert(&Value::Char('A'), &ValueType::Int64)
            .unwrap();
        assert_eq!(out, Value::Int64(65));

        let out = CommonToCommon
            .convert(&Value::Int32(66), &ValueType::Char)
            .unwrap();
        assert_eq!(out, Value::Char('B'));
    }

    #[test]
    fn decimal_bridging() {
        let out = CommonToCommon
            .convert(&Value::Decimal(12345, 2), &ValueType::Float64)
            .unwrap();
        assert_eq!(out, Value::Float64(123.45));

        let out = CommonToCommon
            .convert(&Value::Decimal(12399, 2), &ValueType::Int32)
            .unwrap();
        assert_eq!(out, Value::Int32(123));

        let out = CommonToCommon
            .convert(&Value::Float64(10.25), &ValueType::Decimal)
            .unwrap();
        assert_eq!(out, Value::Decimal(1025, 2));

        let out = CommonToCommon
            .convert(&Value::Int64(9), &ValueType::Decimal)
            .unwrap();
        assert_eq!(out, Value::Decimal(9, 0));
    }

    #[test]
    fn tiny_decimal_truncates_to_zero() {
        let out = CommonToCommon
            .convert(&Value::Decimal(1, 50), &ValueType::Int32)
            .unwrap();
        assert_eq!(out, Value::Int32(0));

        let out = CommonToCommon
            .convert(&Value::Decimal(-1, 50), &ValueType::BigInt)
            .unwrap();
        assert_eq!(out, Value::BigInt(0));
    }

    #[test]
    fn huge_floats_do_not_saturate() {
        let err = CommonToCommon
            .convert(&Value::Float64(1e300), &ValueType::BigInt)
            .unwrap_err();
        assert!(matches!(err, ConvertError::OutOfRange { .. }));

        let err = CommonToCommon
            .convert(&Value::Float64(f64::NAN), &ValueType::Int32)
            .unwrap_err();
        assert!(matches!(err, ConvertError::OutOfRange { .. }));

        // i128::MIN itself is exactly representable as f64 and stays in range.
        let out = CommonToCommon
            .convert(&Value::Float64(i128::MIN as f64), &ValueType::BigInt)
            .unwrap();
        assert_eq!(out, Value::BigInt(i128::MIN));
    }

    #[test]
    fn non_common_source_is_rejected() {
        let err = CommonToCommon
            .convert(&Value::String("1".into()), &ValueType::Int32)
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnexpectedSource { .. }));
    }

    #[test]
    fn parse_decimal_edge_cases() {
        assert_eq!(parse_decimal("0"), Some((0, 0)));
        assert_eq!(parse_decimal(".5"), Some((5, 1)));
        assert_eq!(parse_decimal("-12.345"), Some((-12345, 3)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("12a"), None);
    }
}
