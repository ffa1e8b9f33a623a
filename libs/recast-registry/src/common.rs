use std::collections::HashSet;
use std::sync::OnceLock;

use recast_api::ValueType;

static COMMON_TYPES: OnceLock<HashSet<ValueType>> = OnceLock::new();

/// The fixed set of primitive-like tags eligible for generic cross-type
/// numeric conversion: the 8 primitive kinds plus the two
/// arbitrary-precision numerics.
///
/// Populated once, read-only thereafter — safe for unsynchronized
/// concurrent reads.
pub fn common_types() -> &'static HashSet<ValueType> {
    COMMON_TYPES.get_or_init(|| {
        HashSet::from([
            ValueType::Bool,
            ValueType::Int8,
            ValueType::Int16,
            ValueType::Int32,
            ValueType::Int64,
            ValueType::Float32,
            ValueType::Float64,
            ValueType::Char,
            ValueType::Decimal,
            ValueType::BigInt,
        ])
    })
}

/// Membership test against the common type set.
pub fn is_common(value_type: &ValueType) -> bool {
    common_types().contains(value_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_covers_primitives_and_arbitrary_precision() {
        assert_eq!(common_types().len(), 10);
        assert!(is_common(&ValueType::Bool));
        assert!(is_common(&ValueType::Char));
        assert!(is_common(&ValueType::Decimal));
        assert!(is_common(&ValueType::BigInt));
    }

    #[test]
    fn strings_dates_and_opaque_types_are_not_common() {
        assert!(!is_common(&ValueType::String));
        assert!(!is_common(&ValueType::DateTime));
        assert!(!is_common(&ValueType::Bytes));
        assert!(!is_common(&ValueType::Other("Uuid".into())));
        assert!(!is_common(&ValueType::Enum("OrderSide".into())));
    }
}
