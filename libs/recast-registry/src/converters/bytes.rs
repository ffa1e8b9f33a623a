use recast_api::{ConvertError, Converter, Value, ValueType};

/// `Value::Blob` → `Value::Bytes`.
pub struct BlobToBytes;

impl Converter for BlobToBytes {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::Blob(b) => Ok(Value::Bytes(b.clone())),
            other => Err(ConvertError::UnexpectedSource {
                converter: "BlobToBytes",
                actual: other.value_type(),
            }),
        }
    }
}

/// `Value::String` → `Value::Bytes` (UTF-8 encoding of the text).
pub struct StringToBytes;

impl Converter for StringToBytes {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::String(s) => Ok(Value::Bytes(s.clone().into_bytes())),
            other => Err(ConvertError::UnexpectedSource {
                converter: "StringToBytes",
                actual: other.value_type(),
            }),
        }
    }
}
