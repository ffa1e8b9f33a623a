use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use recast_api::{ConvertError, Converter, Value, ValueType};

/// Full-timestamp format, second precision.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Day-granularity format, no time-of-day component.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// `"2023-01-15 10:30:00"` → `Value::DateTime`.
pub struct StringToDateTime;

impl Converter for StringToDateTime {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        let s = expect_string(value, "StringToDateTime")?;
        NaiveDateTime::parse_from_str(s, TIME_FORMAT)
            .map(Value::DateTime)
            .map_err(|_| ConvertError::Malformed {
                text: s.to_string(),
                expected: TIME_FORMAT,
            })
    }
}

/// `"2023-01-15"` → `Value::DateTime` at midnight.
pub struct StringToDateDay;

impl Converter for StringToDateDay {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        let s = expect_string(value, "StringToDateDay")?;
        parse_day(s).map(|d| Value::DateTime(NaiveDateTime::new(d, NaiveTime::MIN)))
    }
}

/// `"2023-01-15 10:30:00"` → `Value::Zoned` (UTC).
pub struct StringToCalendarTime;

impl Converter for StringToCalendarTime {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        let s = expect_string(value, "StringToCalendarTime")?;
        NaiveDateTime::parse_from_str(s, TIME_FORMAT)
            .map(|dt| Value::Zoned(dt.and_utc()))
            .map_err(|_| ConvertError::Malformed {
                text: s.to_string(),
                expected: TIME_FORMAT,
            })
    }
}

/// `"2023-01-15"` → `Value::Zoned` at midnight UTC.
pub struct StringToCalendarDay;

impl Converter for StringToCalendarDay {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        let s = expect_string(value, "StringToCalendarDay")?;
        parse_day(s).map(|d| Value::Zoned(NaiveDateTime::new(d, NaiveTime::MIN).and_utc()))
    }
}

/// `Value::DateTime` → `"2023-01-15 10:30:00"`.
pub struct DateTimeToString;

impl Converter for DateTimeToString {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::DateTime(dt) => Ok(Value::String(dt.format(TIME_FORMAT).to_string())),
            other => Err(unexpected("DateTimeToString", other)),
        }
    }
}

/// `Value::DateTime` or `Value::Date` → `"2023-01-15"` (date portion only).
pub struct DateDayToString;

impl Converter for DateDayToString {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::DateTime(dt) => Ok(Value::String(dt.date().format(DAY_FORMAT).to_string())),
            Value::Date(d) => Ok(Value::String(d.format(DAY_FORMAT).to_string())),
            other => Err(unexpected("DateDayToString", other)),
        }
    }
}

/// `Value::Zoned` → `"2023-01-15 10:30:00"`.
pub struct CalendarTimeToString;

impl Converter for CalendarTimeToString {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::Zoned(z) => Ok(Value::String(z.format(TIME_FORMAT).to_string())),
            other => Err(unexpected("CalendarTimeToString", other)),
        }
    }
}

/// `Value::Zoned` → `"2023-01-15"` (date portion only).
pub struct CalendarDayToString;

impl Converter for CalendarDayToString {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::Zoned(z) => Ok(Value::String(z.date_naive().format(DAY_FORMAT).to_string())),
            other => Err(unexpected("CalendarDayToString", other)),
        }
    }
}

fn expect_string<'a>(value: &'a Value, converter: &'static str) -> Result<&'a str, ConvertError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(unexpected(converter, other)),
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, ConvertError> {
    NaiveDate::parse_from_str(s, DAY_FORMAT).map_err(|_| ConvertError::Malformed {
        text: s.to_string(),
        expected: DAY_FORMAT,
    })
}

fn unexpected(converter: &'static str, value: &Value) -> ConvertError {
    ConvertError::UnexpectedSource {
        converter,
        actual: value.value_type(),
    }
}
