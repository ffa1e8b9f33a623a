use chrono::{NaiveDate, NaiveTime};

use recast_api::{Value, ValueType};
use recast_registry::ConverterRegistry;

// ── Default pair registrations, resolved through the registry ─────────────

#[test]
fn string_date_pairs_are_registered() {
    let registry = ConverterRegistry::new();

    let to_date = registry
        .resolve(&ValueType::String, &ValueType::DateTime)
        .expect("string → datetime is a default pair");
    let out = to_date
        .convert(
            &Value::String("2023-01-15 10:30:00".into()),
            &ValueType::DateTime,
        )
        .unwrap();
    let expected = NaiveDate::from_ymd_opt(2023, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    assert_eq!(out, Value::DateTime(expected));

    let to_string = registry
        .resolve(&ValueType::DateTime, &ValueType::String)
        .expect("datetime → string is a default pair");
    let back = to_string
        .convert(&Value::DateTime(expected), &ValueType::String)
        .unwrap();
    assert_eq!(back, Value::String("2023-01-15 10:30:00".into()));
}

#[test]
fn sql_bridge_pairs_are_registered() {
    let registry = ConverterRegistry::new();
    let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();

    for src in [
        Value::Date(date),
        Value::Time(time),
        Value::Timestamp(1_700_000_000_000_000),
    ] {
        let converter = registry
            .resolve(&src.value_type(), &ValueType::DateTime)
            .expect("sql type → datetime is a default pair");
        let out = converter.convert(&src, &ValueType::DateTime).unwrap();
        assert_eq!(out.value_type(), ValueType::DateTime);
    }

    let dt = Value::DateTime(date.and_time(time));
    for dest in [ValueType::Date, ValueType::Time, ValueType::Timestamp] {
        let converter = registry
            .resolve(&ValueType::DateTime, &dest)
            .expect("datetime → sql type is a default pair");
        let out = converter.convert(&dt, &dest).unwrap();
        assert_eq!(out.value_type(), dest);
    }
}

#[test]
fn sql_bridge_shares_one_converter_per_direction() {
    let registry = ConverterRegistry::new();
    let a = registry
        .resolve(&ValueType::Date, &ValueType::DateTime)
        .unwrap();
    let b = registry
        .resolve(&ValueType::Timestamp, &ValueType::DateTime)
        .unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn binary_pairs_are_registered() {
    let registry = ConverterRegistry::new();

    let blob = registry
        .resolve(&ValueType::Blob, &ValueType::Bytes)
        .expect("blob → bytes is a default pair");
    let out = blob
        .convert(&Value::Blob(vec![9, 8, 7]), &ValueType::Bytes)
        .unwrap();
    assert_eq!(out, Value::Bytes(vec![9, 8, 7]));

    let text = registry
        .resolve(&ValueType::String, &ValueType::Bytes)
        .expect("string → bytes is a default pair");
    let out = text
        .convert(&Value::String("hi".into()), &ValueType::Bytes)
        .unwrap();
    assert_eq!(out, Value::Bytes(b"hi".to_vec()));
}
