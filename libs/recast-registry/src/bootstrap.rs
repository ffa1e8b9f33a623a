use std::sync::Arc;

use recast_api::{Converter, ValueType};

use crate::converters::bytes::{BlobToBytes, StringToBytes};
use crate::converters::date::{
    CalendarDayToString, CalendarTimeToString, DateDayToString, DateTimeToString,
    StringToCalendarDay, StringToCalendarTime, StringToDateDay, StringToDateTime,
};
use crate::converters::sql::{DateTimeToSql, SqlToDateTime};
use crate::repository::ConverterRepository;

// Fixed catalog of converter-variant aliases. External code uses these to
// fetch a specific date/calendar variant deterministically, bypassing the
// fallback cascade.
pub const ALIAS_STRING_TO_DATE_TIME: &str = "StringToDateTime";
pub const ALIAS_STRING_TO_DATE_DAY: &str = "StringToDateDay";
pub const ALIAS_STRING_TO_CALENDAR_TIME: &str = "StringToCalendarTime";
pub const ALIAS_STRING_TO_CALENDAR_DAY: &str = "StringToCalendarDay";
pub const ALIAS_DATE_TIME_TO_STRING: &str = "DateTimeToString";
pub const ALIAS_DATE_DAY_TO_STRING: &str = "DateDayToString";
pub const ALIAS_CALENDAR_TIME_TO_STRING: &str = "CalendarTimeToString";
pub const ALIAS_CALENDAR_DAY_TO_STRING: &str = "CalendarDayToString";

/// Seed a repository with the default registrations.
///
/// Time-granularity string↔date pairs, the SQL date/time/timestamp bridge,
/// blob→bytes and string→bytes, plus the eight alias entries. Day-granularity
/// variants are reachable only through their aliases — their type pair would
/// collide with the time-granularity registration.
pub fn register_defaults(repository: &mut ConverterRepository) {
    let string_to_date_time: Arc<dyn Converter> = Arc::new(StringToDateTime);
    let string_to_calendar_time: Arc<dyn Converter> = Arc::new(StringToCalendarTime);
    let date_time_to_string: Arc<dyn Converter> = Arc::new(DateTimeToString);
    let calendar_time_to_string: Arc<dyn Converter> = Arc::new(CalendarTimeToString);

    // String <-> date, time granularity.
    repository.register_type(
        ValueType::String,
        ValueType::DateTime,
        string_to_date_time.clone(),
    );
    repository.register_type(
        ValueType::DateTime,
        ValueType::String,
        date_time_to_string.clone(),
    );
    repository.register_type(
        ValueType::String,
        ValueType::Zoned,
        string_to_calendar_time.clone(),
    );
    repository.register_type(
        ValueType::Zoned,
        ValueType::String,
        calendar_time_to_string.clone(),
    );

    // SQL date/time/timestamp <-> generic date.
    let sql_to_date_time: Arc<dyn Converter> = Arc::new(SqlToDateTime);
    let date_time_to_sql: Arc<dyn Converter> = Arc::new(DateTimeToSql);
    repository.register_type(ValueType::Date, ValueType::DateTime, sql_to_date_time.clone());
    repository.register_type(ValueType::Time, ValueType::DateTime, sql_to_date_time.clone());
    repository.register_type(
        ValueType::Timestamp,
        ValueType::DateTime,
        sql_to_date_time,
    );
    repository.register_type(ValueType::DateTime, ValueType::Date, date_time_to_sql.clone());
    repository.register_type(ValueType::DateTime, ValueType::Time, date_time_to_sql.clone());
    repository.register_type(ValueType::DateTime, ValueType::Timestamp, date_time_to_sql);

    // Binary.
    repository.register_type(ValueType::Blob, ValueType::Bytes, Arc::new(BlobToBytes));
    repository.register_type(ValueType::String, ValueType::Bytes, Arc::new(StringToBytes));

    // Alias catalog — all eight date/calendar variants.
    repository.register_alias(ALIAS_STRING_TO_DATE_TIME, string_to_date_time);
    repository.register_alias(ALIAS_STRING_TO_DATE_DAY, Arc::new(StringToDateDay));
    repository.register_alias(ALIAS_STRING_TO_CALENDAR_TIME, string_to_calendar_time);
    repository.register_alias(ALIAS_STRING_TO_CALENDAR_DAY, Arc::new(StringToCalendarDay));
    repository.register_alias(ALIAS_DATE_TIME_TO_STRING, date_time_to_string);
    repository.register_alias(ALIAS_DATE_DAY_TO_STRING, Arc::new(DateDayToString));
    repository.register_alias(ALIAS_CALENDAR_TIME_TO_STRING, calendar_time_to_string);
    repository.register_alias(ALIAS_CALENDAR_DAY_TO_STRING, Arc::new(CalendarDayToString));
}
