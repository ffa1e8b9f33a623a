use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Canonical value representation crossing the data-access boundary.
///
/// Strategy by type:
/// - Scalars (integers, floats, Bool, Char): eager, cost ~0
/// - `Decimal` is `(unscaled, scale)` — value = unscaled / 10^scale
/// - `Timestamp` is microseconds since epoch (SQL timestamp wire form)
/// - `DateTime` is the generic date representation; `Zoned` is the
///   calendar-like one; `Date`/`Time` are the SQL-specific bridge types
/// - `Enum` carries the enumeration type name plus the variant name
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Char(char),
    /// `(unscaled, scale)` — arbitrary-precision decimal up to i128 range.
    Decimal(i128, u8),
    BigInt(i128),

    String(String),
    Bytes(Vec<u8>),
    /// Large binary object fetched from a database row.
    Blob(Vec<u8>),

    DateTime(NaiveDateTime),
    /// Calendar-like representation (carries a time zone).
    Zoned(DateTime<Utc>),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Microseconds since epoch.
    Timestamp(i64),

    Enum { type_name: String, variant: String },
}

impl Value {
    /// The runtime tag of this value — the key side of a conversion lookup.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int8(_) => ValueType::Int8,
            Value::Int16(_) => ValueType::Int16,
            Value::Int32(_) => ValueType::Int32,
            Value::Int64(_) => ValueType::Int64,
            Value::Float32(_) => ValueType::Float32,
            Value::Float64(_) => ValueType::Float64,
            Value::Char(_) => ValueType::Char,
            Value::Decimal(_, _) => ValueType::Decimal,
            Value::BigInt(_) => ValueType::BigInt,
            Value::String(_) => ValueType::String,
            Value::Bytes(_) => ValueType::Bytes,
            Value::Blob(_) => ValueType::Blob,
            Value::DateTime(_) => ValueType::DateTime,
            Value::Zoned(_) => ValueType::Zoned,
            Value::Date(_) => ValueType::Date,
            Value::Time(_) => ValueType::Time,
            Value::Timestamp(_) => ValueType::Timestamp,
            Value::Enum { type_name, .. } => ValueType::Enum(type_name.clone()),
        }
    }
}

/// Default textual representation — what the object-to-string fallback emits.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Decimal(unscaled, scale) => {
                if *scale == 0 {
                    return write!(f, "{unscaled}");
                }
                // Insert the point by digit position — no 10^scale, which
                // would overflow i128 for scales above 38.
                let digits = unscaled.unsigned_abs().to_string();
                let scale = *scale as usize;
                let sign = if *unscaled < 0 { "-" } else { "" };
                if digits.len() > scale {
                    let (int, frac) = digits.split_at(digits.len() - scale);
                    write!(f, "{sign}{int}.{frac}")
                } else {
                    write!(f, "{sign}0.{digits:0>scale$}")
                }
            }
            Value::BigInt(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Bytes(b) | Value::Blob(b) => {
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Value::Zoned(z) => write!(f, "{}", z.format("%Y-%m-%d %H:%M:%S")),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            Value::Timestamp(us) => write!(f, "{us}"),
            Value::Enum { variant, .. } => write!(f, "{variant}"),
        }
    }
}

/// Runtime type tag. Structural equality, no subtype matching — the
/// repository keys on exact `(src, dest)` pairs of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ValueType {
    Null,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Char,
    Decimal,
    BigInt,
    String,
    Bytes,
    Blob,
    DateTime,
    Zoned,
    Date,
    Time,
    Timestamp,
    /// Named enumeration type.
    Enum(String),
    /// Caller-defined opaque type, identified by name.
    Other(String),
}

impl ValueType {
    pub fn is_enum(&self) -> bool {
        matches!(self, ValueType::Enum(_))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Null => write!(f, "null"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Int8 => write!(f, "int8"),
            ValueType::Int16 => write!(f, "int16"),
            ValueType::Int32 => write!(f, "int32"),
            ValueType::Int64 => write!(f, "int64"),
            ValueType::Float32 => write!(f, "float32"),
            ValueType::Float64 => write!(f, "float64"),
            ValueType::Char => write!(f, "char"),
            ValueType::Decimal => write!(f, "decimal"),
            ValueType::BigInt => write!(f, "bigint"),
            ValueType::String => write!(f, "string"),
            ValueType::Bytes => write!(f, "bytes"),
            ValueType::Blob => write!(f, "blob"),
            ValueType::DateTime => write!(f, "datetime"),
            ValueType::Zoned => write!(f, "zoned"),
            ValueType::Date => write!(f, "date"),
            ValueType::Time => write!(f, "time"),
            ValueType::Timestamp => write!(f, "timestamp"),
            ValueType::Enum(name) => write!(f, "enum({name})"),
            ValueType::Other(name) => write!(f, "other({name})"),
        }
    }
}
