use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use recast_api::{ConvertError, Converter, Value, ValueType};

/// SQL date/time/timestamp representations → generic `DateTime`.
///
/// - `Date` lands at midnight
/// - `Time` lands on the epoch day (SQL time carries no date)
/// - `Timestamp` is interpreted as microseconds since epoch
pub struct SqlToDateTime;

impl Converter for SqlToDateTime {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::Date(d) => Ok(Value::DateTime(NaiveDateTime::new(*d, NaiveTime::MIN))),
            Value::Time(t) => Ok(Value::DateTime(NaiveDateTime::new(NaiveDate::default(), *t))),
            Value::Timestamp(us) => DateTime::<Utc>::from_timestamp_micros(*us)
                .map(|dt| Value::DateTime(dt.naive_utc()))
                .ok_or(ConvertError::OutOfRange {
                    value: us.to_string(),
                    dest: ValueType::DateTime,
                }),
            other => Err(ConvertError::UnexpectedSource {
                converter: "SqlToDateTime",
                actual: other.value_type(),
            }),
        }
    }
}

/// Generic `DateTime` → SQL date/time/timestamp, selected by the
/// destination tag.
pub struct DateTimeToSql;

impl Converter for DateTimeToSql {
    fn convert(&self, value: &Value, dest: &ValueType) -> Result<Value, ConvertError> {
        let dt = match value {
            Value::DateTime(dt) => dt,
            other => {
                return Err(ConvertError::UnexpectedSource {
                    converter: "DateTimeToSql",
                    actual: other.value_type(),
                })
            }
        };
        match dest {
            ValueType::Date => Ok(Value::Date(dt.date())),
            ValueType::Time => Ok(Value::Time(dt.time())),
            ValueType::Timestamp => Ok(Value::Timestamp(dt.and_utc().timestamp_micros())),
            other => Err(ConvertError::UnsupportedTarget {
                converter: "DateTimeToSql",
                dest: other.clone(),
            }),
        }
    }
}
