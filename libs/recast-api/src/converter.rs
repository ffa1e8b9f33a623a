use crate::error::ConvertError;
use crate::value::{Value, ValueType};

/// Value converter.
///
/// Solves one task: transform a value from one representation to another.
/// The registry only indexes converters; it never inspects the value.
///
/// `dest` is the requested destination tag. Pair-registered converters can
/// ignore it; the shared fallback converters (string-to-common,
/// common-to-common, string-to-enum) use it to pick the concrete output type.
pub trait Converter: Send + Sync {
    fn convert(&self, value: &Value, dest: &ValueType) -> Result<Value, ConvertError>;
}
