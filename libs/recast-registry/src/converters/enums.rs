use recast_api::{ConvertError, Converter, Value, ValueType};

/// `Value::Enum` → the variant's symbolic name as a string.
pub struct EnumToString;

impl Converter for EnumToString {
    fn convert(&self, value: &Value, _dest: &ValueType) -> Result<Value, ConvertError> {
        match value {
            Value::Enum { variant, .. } => Ok(Value::String(variant.clone())),
            other => Err(ConvertError::UnexpectedSource {
                converter: "EnumToString",
                actual: other.value_type(),
            }),
        }
    }
}

/// `Value::String` → `Value::Enum` of the requested enumeration type,
/// matched by symbolic name. The destination must be `ValueType::Enum`.
pub struct StringToEnum;

impl Converter for StringToEnum {
    fn convert(&self, value: &Value, dest: &ValueType) -> Result<Value, ConvertError> {
        let s = match value {
            Value::String(s) => s,
            other => {
                return Err(ConvertError::UnexpectedSource {
                    converter: "StringToEnum",
                    actual: other.value_type(),
                })
            }
        };
        match dest {
            ValueType::Enum(type_name) => Ok(Value::Enum {
                type_name: type_name.clone(),
                variant: s.clone(),
            }),
            other => Err(ConvertError::UnsupportedTarget {
                converter: "StringToEnum",
                dest: other.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_to_string_yields_variant_name() {
        let v = Value::Enum {
            type_name: "OrderSide".into(),
            variant: "Sell".into(),
        };
        let out = EnumToString.convert(&v, &ValueType::String).unwrap();
        assert_eq!(out, Value::String("Sell".into()));
    }

    #[test]
    fn string_to_enum_wraps_symbolic_name() {
        let out = StringToEnum
            .convert(
                &Value::String("Buy".into()),
                &ValueType::Enum("OrderSide".into()),
            )
            .unwrap();
        assert_eq!(
            out,
            Value::Enum {
                type_name: "OrderSide".into(),
                variant: "Buy".into(),
            }
        );
    }

    #[test]
    fn non_enum_destination_is_rejected() {
        let err = StringToEnum
            .convert(&Value::String("Buy".into()), &ValueType::Int32)
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedTarget { .. }));
    }
}
