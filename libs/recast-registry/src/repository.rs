use std::collections::HashMap;
use std::sync::Arc;

use recast_api::{Converter, ValueType};

/// Ordered `(src, dest)` pair — the primary lookup key.
///
/// Exact structural match only; no wildcard or subtype matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
    pub src: ValueType,
    pub dest: ValueType,
}

impl TypeKey {
    pub fn new(src: ValueType, dest: ValueType) -> Self {
        Self { src, dest }
    }
}

/// Pure key→converter store: two independent maps, type pairs and aliases.
///
/// No resolution logic lives here. Last registration for a key wins.
/// Not thread-safe by itself — the registry wraps it in a lock.
#[derive(Default)]
pub struct ConverterRepository {
    by_type: HashMap<TypeKey, Arc<dyn Converter>>,
    by_alias: HashMap<String, Arc<dyn Converter>>,
}

impl ConverterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `converter` under `(src, dest)`, overwriting any existing entry.
    ///
    /// Returns the replaced converter, if any. The converter's actual
    /// signature is not validated — caller responsibility.
    pub fn register_type(
        &mut self,
        src: ValueType,
        dest: ValueType,
        converter: Arc<dyn Converter>,
    ) -> Option<Arc<dyn Converter>> {
        self.by_type.insert(TypeKey::new(src, dest), converter)
    }

    /// Store `converter` under `alias`, overwriting any existing entry.
    pub fn register_alias(
        &mut self,
        alias: impl Into<String>,
        converter: Arc<dyn Converter>,
    ) -> Option<Arc<dyn Converter>> {
        self.by_alias.insert(alias.into(), converter)
    }

    /// Exact-match lookup by type pair.
    pub fn by_type(&self, src: &ValueType, dest: &ValueType) -> Option<Arc<dyn Converter>> {
        self.by_type
            .get(&TypeKey {
                src: src.clone(),
                dest: dest.clone(),
            })
            .cloned()
    }

    /// Exact-match lookup by alias.
    pub fn by_alias(&self, alias: &str) -> Option<Arc<dyn Converter>> {
        self.by_alias.get(alias).cloned()
    }
}
