use crate::{
    enums::EnumTypeInfo,
    error::EnumError,
    model::EnumDescriptor,
    traits::{EnumKind, Reflect},
};
use dashmap::DashMap;
use std::{
    any::{TypeId, type_name},
    sync::{Arc, LazyLock},
};
use tracing::{debug, trace};

static REGISTRY: LazyLock<EnumRegistry> = LazyLock::new(EnumRegistry::new);

/// Process-wide registry used by the free conversion functions and the
/// extension traits.
#[must_use]
pub fn registry() -> &'static EnumRegistry {
    &REGISTRY
}

///
/// EnumRegistry
///
/// Lazily populated caches of enum type info and value descriptions.
///
/// Entries are created on first use and never invalidated. Concurrent
/// first uses may both compute an entry; exactly one is published and
/// readers only ever see complete entries.
///

#[derive(Debug, Default)]
pub struct EnumRegistry {
    infos: DashMap<TypeId, Arc<EnumTypeInfo>>,
    descriptions: DashMap<(TypeId, i128), Arc<str>>,
}

impl EnumRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type info for an enum kind.
    pub fn info<E: EnumKind>(&self) -> Arc<EnumTypeInfo> {
        self.info_for(TypeId::of::<E>(), E::descriptor)
    }

    /// Type info for any reflectable type; fails unless it is an enum kind.
    pub fn info_of<T: Reflect>(&self) -> Result<Arc<EnumTypeInfo>, EnumError> {
        let key = TypeId::of::<T>();
        if let Some(info) = self.infos.get(&key) {
            return Ok(Arc::clone(&info));
        }

        let descriptor = T::shape().as_enum().ok_or(EnumError::NotAnEnumType {
            ty: type_name::<T>(),
        })?;

        Ok(self.info_for(key, || descriptor))
    }

    fn info_for(
        &self,
        key: TypeId,
        descriptor: impl FnOnce() -> &'static EnumDescriptor,
    ) -> Arc<EnumTypeInfo> {
        if let Some(info) = self.infos.get(&key) {
            return Arc::clone(&info);
        }

        let entry = self.infos.entry(key).or_insert_with(|| {
            let info = EnumTypeInfo::new(descriptor());
            debug!(
                ty = info.ident(),
                flags = info.is_flags,
                mask = info.mask,
                members = info.members.len(),
                "enum type info computed"
            );

            Arc::new(info)
        });

        Arc::clone(&entry)
    }

    /// Description of an enum value (cached).
    pub fn describe<E: EnumKind>(&self, value: E) -> String {
        let info = self.info::<E>();

        self.describe_raw(TypeId::of::<E>(), &info, value.to_raw())
    }

    pub(crate) fn describe_raw(&self, ty: TypeId, info: &EnumTypeInfo, raw: i128) -> String {
        if let Some(desc) = self.descriptions.get(&(ty, raw)) {
            return desc.to_string();
        }

        let entry = self.descriptions.entry((ty, raw)).or_insert_with(|| {
            let desc = info.description(raw);
            trace!(ty = info.ident(), raw, desc = %desc, "enum description cached");

            Arc::from(desc)
        });

        entry.to_string()
    }

    /// Number of enum types with cached info.
    #[must_use]
    pub fn info_count(&self) -> usize {
        self.infos.len()
    }

    /// Number of cached descriptions across all types.
    #[must_use]
    pub fn description_count(&self) -> usize {
        self.descriptions.len()
    }
}
