use crate::value::ValueType;

/// Conversion failure — raised by converter implementations when the
/// runtime shape of the source value does not match what they expect.
///
/// Resolution misses are not errors: the registry returns `None` and the
/// caller decides whether a missing conversion is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{converter}: unexpected source value of type {actual}")]
    UnexpectedSource {
        converter: &'static str,
        actual: ValueType,
    },

    #[error("malformed text '{text}': expected {expected}")]
    Malformed { text: String, expected: &'static str },

    #[error("{converter}: unsupported destination type {dest}")]
    UnsupportedTarget {
        converter: &'static str,
        dest: ValueType,
    },

    #[error("value {value} out of range for {dest}")]
    OutOfRange { value: String, dest: ValueType },
}
