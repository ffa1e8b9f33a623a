use recast_api::{ConvertError, Converter, Value, ValueType};

/// Any value → its default textual representation.
///
/// The catch-all for string destinations with no exact registration:
/// delegates to the value's `Display`.
pub struct ObjectToString;

impl Converter for ObjectToString {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        Ok(Value::String(value.to_string()))
    }
}
