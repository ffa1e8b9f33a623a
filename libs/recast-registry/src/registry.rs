use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use recast_api::{Converter, ValueType};

use crate::bootstrap;
use crate::common::is_common;
use crate::converters::enums::{EnumToString, StringToEnum};
use crate::converters::numeric::{CommonToCommon, StringToCommon};
use crate::converters::text::ObjectToString;
use crate::repository::ConverterRepository;

static GLOBAL: OnceLock<ConverterRegistry> = OnceLock::new();

/// The dispatch core: owns one repository, seeds it with the default
/// registrations, and resolves `(src, dest)` pairs through the fallback
/// cascade.
///
/// The repository sits behind an `RwLock`: resolution takes the read lock
/// (hot path, concurrent), registration and wholesale replacement take the
/// write lock (setup path).
pub struct ConverterRegistry {
    repository: RwLock<ConverterRepository>,

    // Shared fallback converters — one instance each per registry, handed
    // out by the cascade without per-pair registration.
    enum_to_string: Arc<dyn Converter>,
    object_to_string: Arc<dyn Converter>,
    string_to_common: Arc<dyn Converter>,
    string_to_enum: Arc<dyn Converter>,
    common_to_common: Arc<dyn Converter>,
}

impl ConverterRegistry {
    /// Fresh repository, auto-populated with the default registrations.
    pub fn new() -> Self {
        Self::with_repository(ConverterRepository::new())
    }

    /// Caller-supplied repository. The default registrations are still
    /// applied on top, overwriting any colliding entries.
    pub fn with_repository(mut repository: ConverterRepository) -> Self {
        bootstrap::register_defaults(&mut repository);
        Self {
            repository: RwLock::new(repository),
            enum_to_string: Arc::new(EnumToString),
            object_to_string: Arc::new(ObjectToString),
            string_to_common: Arc::new(StringToCommon),
            string_to_enum: Arc::new(StringToEnum),
            common_to_common: Arc::new(CommonToCommon),
        }
    }

    /// Process-wide default instance, created lazily on first access.
    pub fn global() -> &'static ConverterRegistry {
        GLOBAL.get_or_init(ConverterRegistry::new)
    }

    /// Locate a converter for `(src, dest)`.
    ///
    /// Strict order, first match wins:
    /// 1. `src == dest` → `None` (value already compatible, skip conversion)
    /// 2. exact repository pair
    /// 3. string destination: enum source → enum-to-string, anything else →
    ///    object-to-string
    /// 4. string source: common destination → string-to-common, enum
    ///    destination → string-to-enum
    /// 5. both common → common-to-common
    /// 6. `None` — no automatic conversion available
    ///
    /// `None` is a normal outcome, never an error.
    pub fn resolve(&self, src: &ValueType, dest: &ValueType) -> Option<Arc<dyn Converter>> {
        if src == dest {
            return None;
        }

        if let Some(converter) = self.repository.read().by_type(src, dest) {
            return Some(converter);
        }

        if *dest == ValueType::String {
            return if src.is_enum() {
                tracing::trace!(src = %src, "fallback: enum-to-string");
                Some(self.enum_to_string.clone())
            } else {
                tracing::trace!(src = %src, "fallback: object-to-string");
                Some(self.object_to_string.clone())
            };
        }

        if *src == ValueType::String {
            if is_common(dest) {
                tracing::trace!(dest = %dest, "fallback: string-to-common");
                return Some(self.string_to_common.clone());
            }
            if dest.is_enum() {
                tracing::trace!(dest = %dest, "fallback: string-to-enum");
                return Some(self.string_to_enum.clone());
            }
        }

        if is_common(src) && is_common(dest) {
            tracing::trace!(src = %src, dest = %dest, "fallback: common-to-common");
            return Some(self.common_to_common.clone());
        }

        None
    }

    /// Locate a converter by alias — pure repository pass-through, no
    /// fallback cascade.
    pub fn resolve_alias(&self, alias: &str) -> Option<Arc<dyn Converter>> {
        self.repository.read().by_alias(alias)
    }

    /// Register a converter under `(src, dest)`. Overwrites silently.
    pub fn register_type_converter(
        &self,
        src: ValueType,
        dest: ValueType,
        converter: Arc<dyn Converter>,
    ) {
        let replaced = self
            .repository
            .write()
            .register_type(src.clone(), dest.clone(), converter);
        tracing::debug!(
            src = %src,
            dest = %dest,
            replaced = replaced.is_some(),
            "registered type converter"
        );
    }

    /// Register a converter under `alias`. Overwrites silently.
    pub fn register_alias_converter(&self, alias: impl Into<String>, converter: Arc<dyn Converter>) {
        let alias = alias.into();
        let replaced = self
            .repository
            .write()
            .register_alias(alias.clone(), converter);
        tracing::debug!(
            alias = %alias,
            replaced = replaced.is_some(),
            "registered alias converter"
        );
    }

    /// Swap the owned repository wholesale.
    ///
    /// The default bootstrap already ran in the constructor, so the
    /// replacement wipes the defaults too — the new repository is used
    /// exactly as given.
    pub fn replace_repository(&self, repository: ConverterRepository) {
        *self.repository.write() = repository;
        tracing::debug!("repository replaced");
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
