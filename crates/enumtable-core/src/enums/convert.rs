use crate::{
    enums::{EnumRegistry, EnumTypeInfo, numeric, registry},
    error::EnumError,
    traits::{EnumKind, FieldValue, IntRepr, Reflect},
};
use indexmap::IndexMap;
use std::{any::TypeId, fmt::Display, hash::Hash, sync::Arc};

// ============================================================================
// REGISTRY METHODS
// ============================================================================

impl EnumRegistry {
    ///
    /// BY NAME
    ///

    /// Resolve a declared name, or (flags only) a comma-separated list of
    /// declared names.
    pub fn by_name<E: EnumKind>(&self, name: &str) -> Option<E> {
        self.info::<E>().value_of_name(name).and_then(E::from_raw)
    }

    pub fn by_name_or<E: EnumKind>(&self, name: &str, default: E) -> E {
        self.by_name(name).unwrap_or(default)
    }

    pub fn value_by_name<E: EnumKind>(&self, name: &str) -> Result<Option<i32>, EnumError> {
        self.value_by_name_as::<E, i32>(name)
    }

    /// The value type is checked before the name is looked up.
    pub fn value_by_name_as<E: EnumKind, V: FieldValue>(
        &self,
        name: &str,
    ) -> Result<Option<V>, EnumError> {
        numeric::assert_valid(V::data_type())?;

        self.by_name::<E>(name)
            .map(|e| numeric::project(e.to_raw()))
            .transpose()
    }

    pub fn value_by_name_or<E: EnumKind>(&self, name: &str, default: i32) -> Result<i32, EnumError> {
        self.value_by_name_as_or::<E, i32>(name, default)
    }

    pub fn value_by_name_as_or<E: EnumKind, V: FieldValue>(
        &self,
        name: &str,
        default: V,
    ) -> Result<V, EnumError> {
        Ok(self.value_by_name_as::<E, V>(name)?.unwrap_or(default))
    }

    pub fn desc_by_name<E: EnumKind>(&self, name: &str) -> Option<String> {
        self.by_name::<E>(name).map(|e| self.describe(e))
    }

    pub fn desc_by_name_or<E: EnumKind>(&self, name: &str, default: &str) -> String {
        or_text(self.desc_by_name::<E>(name), default)
    }

    ///
    /// BY DESCRIPTION
    ///

    /// Resolve a member description, or (flags only) a comma-separated list
    /// of member descriptions. Every segment has to match.
    pub fn by_desc<E: EnumKind>(&self, desc: &str) -> Option<E> {
        self.info::<E>().value_of_desc(desc).and_then(E::from_raw)
    }

    pub fn by_desc_or<E: EnumKind>(&self, desc: &str, default: E) -> E {
        self.by_desc(desc).unwrap_or(default)
    }

    pub fn value_by_desc<E: EnumKind>(&self, desc: &str) -> Result<Option<i32>, EnumError> {
        self.value_by_desc_as::<E, i32>(desc)
    }

    pub fn value_by_desc_as<E: EnumKind, V: FieldValue>(
        &self,
        desc: &str,
    ) -> Result<Option<V>, EnumError> {
        numeric::assert_valid(V::data_type())?;

        self.by_desc::<E>(desc)
            .map(|e| numeric::project(e.to_raw()))
            .transpose()
    }

    pub fn value_by_desc_or<E: EnumKind>(&self, desc: &str, default: i32) -> Result<i32, EnumError> {
        self.value_by_desc_as_or::<E, i32>(desc, default)
    }

    pub fn value_by_desc_as_or<E: EnumKind, V: FieldValue>(
        &self,
        desc: &str,
        default: V,
    ) -> Result<V, EnumError> {
        Ok(self.value_by_desc_as::<E, V>(desc)?.unwrap_or(default))
    }

    pub fn name_by_desc<E: EnumKind>(&self, desc: &str) -> Option<String> {
        self.by_desc::<E>(desc).map(|e| self.to_name(e))
    }

    pub fn name_by_desc_or<E: EnumKind>(&self, desc: &str, default: &str) -> String {
        or_text(self.name_by_desc::<E>(desc), default)
    }

    ///
    /// BY VALUE
    ///

    /// Resolve a declared value, or (flags only) any combination of
    /// declared bits.
    pub fn by_value<E: EnumKind, V: IntRepr>(&self, value: V) -> Option<E> {
        let raw = value.to_raw();

        if self.info::<E>().accepts(raw) {
            E::from_raw(raw)
        } else {
            None
        }
    }

    pub fn by_value_or<E: EnumKind, V: IntRepr>(&self, value: V, default: E) -> E {
        self.by_value(value).unwrap_or(default)
    }

    pub fn name_by_value<E: EnumKind, V: IntRepr>(&self, value: V) -> Option<String> {
        self.by_value::<E, V>(value).map(|e| self.to_name(e))
    }

    pub fn name_by_value_or<E: EnumKind, V: IntRepr>(&self, value: V, default: &str) -> String {
        or_text(self.name_by_value::<E, V>(value), default)
    }

    pub fn desc_by_value<E: EnumKind, V: IntRepr>(&self, value: V) -> Option<String> {
        self.by_value::<E, V>(value).map(|e| self.describe(e))
    }

    pub fn desc_by_value_or<E: EnumKind, V: IntRepr>(&self, value: V, default: &str) -> String {
        or_text(self.desc_by_value::<E, V>(value), default)
    }

    ///
    /// FORWARD
    ///

    #[allow(clippy::unused_self)]
    pub fn to_value<E: EnumKind>(&self, value: E) -> Result<i32, EnumError> {
        numeric::project(value.to_raw())
    }

    #[allow(clippy::unused_self)]
    pub fn to_value_as<E: EnumKind, V: FieldValue>(&self, value: E) -> Result<V, EnumError> {
        numeric::project(value.to_raw())
    }

    /// Canonical name of an enum value.
    pub fn to_name<E: EnumKind>(&self, value: E) -> String {
        self.info::<E>().canonical_name(value.to_raw())
    }

    pub fn to_desc<E: EnumKind>(&self, value: E) -> String {
        self.describe(value)
    }

    ///
    /// BULK VIEWS
    ///

    pub fn value_name_map<T: Reflect>(&self) -> Result<IndexMap<i32, String>, EnumError> {
        self.value_name_map_as::<T, i32>()
    }

    pub fn value_name_map_as<T, V>(&self) -> Result<IndexMap<V, String>, EnumError>
    where
        T: Reflect,
        V: FieldValue + Display + Eq + Hash,
    {
        numeric::assert_valid(V::data_type())?;
        let info = self.info_of::<T>()?;

        collect_unique(info.members.iter().map(|m| {
            let value = numeric::project::<V>(m.value)?;

            Ok((value, m.name.to_string()))
        }))
    }

    pub fn name_value_map<T: Reflect>(&self) -> Result<IndexMap<String, i32>, EnumError> {
        self.name_value_map_as::<T, i32>()
    }

    pub fn name_value_map_as<T, V>(&self) -> Result<IndexMap<String, V>, EnumError>
    where
        T: Reflect,
        V: FieldValue,
    {
        numeric::assert_valid(V::data_type())?;
        let info = self.info_of::<T>()?;

        collect_unique(info.members.iter().map(|m| {
            let value = numeric::project::<V>(m.value)?;

            Ok((m.name.to_string(), value))
        }))
    }

    pub fn name_desc_map<T: Reflect>(&self) -> Result<IndexMap<String, String>, EnumError> {
        let (ty, info) = self.reflect_info::<T>()?;

        collect_unique(info.members.iter().map(|m| {
            Ok((m.name.to_string(), self.describe_raw(ty, &info, m.value)))
        }))
    }

    pub fn desc_name_map<T: Reflect>(&self) -> Result<IndexMap<String, String>, EnumError> {
        let (ty, info) = self.reflect_info::<T>()?;

        collect_unique(info.members.iter().map(|m| {
            Ok((self.describe_raw(ty, &info, m.value), m.name.to_string()))
        }))
    }

    pub fn value_desc_map<T: Reflect>(&self) -> Result<IndexMap<i32, String>, EnumError> {
        self.value_desc_map_as::<T, i32>()
    }

    pub fn value_desc_map_as<T, V>(&self) -> Result<IndexMap<V, String>, EnumError>
    where
        T: Reflect,
        V: FieldValue + Display + Eq + Hash,
    {
        numeric::assert_valid(V::data_type())?;
        let (ty, info) = self.reflect_info::<T>()?;

        collect_unique(info.members.iter().map(|m| {
            let value = numeric::project::<V>(m.value)?;

            Ok((value, self.describe_raw(ty, &info, m.value)))
        }))
    }

    pub fn desc_value_map<T: Reflect>(&self) -> Result<IndexMap<String, i32>, EnumError> {
        self.desc_value_map_as::<T, i32>()
    }

    pub fn desc_value_map_as<T, V>(&self) -> Result<IndexMap<String, V>, EnumError>
    where
        T: Reflect,
        V: FieldValue,
    {
        numeric::assert_valid(V::data_type())?;
        let (ty, info) = self.reflect_info::<T>()?;

        collect_unique(info.members.iter().map(|m| {
            let value = numeric::project::<V>(m.value)?;

            Ok((self.describe_raw(ty, &info, m.value), value))
        }))
    }

    fn reflect_info<T: Reflect>(&self) -> Result<(TypeId, Arc<EnumTypeInfo>), EnumError> {
        Ok((TypeId::of::<T>(), self.info_of::<T>()?))
    }
}

// absent or blank results fall back to the default
fn or_text(result: Option<String>, default: &str) -> String {
    result
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn collect_unique<K, V>(
    entries: impl Iterator<Item = Result<(K, V), EnumError>>,
) -> Result<IndexMap<K, V>, EnumError>
where
    K: Display + Eq + Hash,
{
    let mut map = IndexMap::new();
    for entry in entries {
        let (key, value) = entry?;
        if map.contains_key(&key) {
            return Err(EnumError::DuplicateMapKey {
                key: key.to_string(),
            });
        }
        map.insert(key, value);
    }

    Ok(map)
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================
//
// Shorthands over the process-wide registry.
//

pub fn by_name<E: EnumKind>(name: &str) -> Option<E> {
    registry().by_name(name)
}

pub fn by_name_or<E: EnumKind>(name: &str, default: E) -> E {
    registry().by_name_or(name, default)
}

pub fn value_by_name<E: EnumKind>(name: &str) -> Result<Option<i32>, EnumError> {
    registry().value_by_name::<E>(name)
}

pub fn value_by_name_as<E: EnumKind, V: FieldValue>(name: &str) -> Result<Option<V>, EnumError> {
    registry().value_by_name_as::<E, V>(name)
}

pub fn value_by_name_or<E: EnumKind>(name: &str, default: i32) -> Result<i32, EnumError> {
    registry().value_by_name_or::<E>(name, default)
}

pub fn value_by_name_as_or<E: EnumKind, V: FieldValue>(
    name: &str,
    default: V,
) -> Result<V, EnumError> {
    registry().value_by_name_as_or::<E, V>(name, default)
}

pub fn desc_by_name<E: EnumKind>(name: &str) -> Option<String> {
    registry().desc_by_name::<E>(name)
}

pub fn desc_by_name_or<E: EnumKind>(name: &str, default: &str) -> String {
    registry().desc_by_name_or::<E>(name, default)
}

pub fn by_desc<E: EnumKind>(desc: &str) -> Option<E> {
    registry().by_desc(desc)
}

pub fn by_desc_or<E: EnumKind>(desc: &str, default: E) -> E {
    registry().by_desc_or(desc, default)
}

pub fn value_by_desc<E: EnumKind>(desc: &str) -> Result<Option<i32>, EnumError> {
    registry().value_by_desc::<E>(desc)
}

pub fn value_by_desc_as<E: EnumKind, V: FieldValue>(desc: &str) -> Result<Option<V>, EnumError> {
    registry().value_by_desc_as::<E, V>(desc)
}

pub fn value_by_desc_or<E: EnumKind>(desc: &str, default: i32) -> Result<i32, EnumError> {
    registry().value_by_desc_or::<E>(desc, default)
}

pub fn value_by_desc_as_or<E: EnumKind, V: FieldValue>(
    desc: &str,
    default: V,
) -> Result<V, EnumError> {
    registry().value_by_desc_as_or::<E, V>(desc, default)
}

pub fn name_by_desc<E: EnumKind>(desc: &str) -> Option<String> {
    registry().name_by_desc::<E>(desc)
}

pub fn name_by_desc_or<E: EnumKind>(desc: &str, default: &str) -> String {
    registry().name_by_desc_or::<E>(desc, default)
}

pub fn by_value<E: EnumKind, V: IntRepr>(value: V) -> Option<E> {
    registry().by_value(value)
}

pub fn by_value_or<E: EnumKind, V: IntRepr>(value: V, default: E) -> E {
    registry().by_value_or(value, default)
}

pub fn name_by_value<E: EnumKind, V: IntRepr>(value: V) -> Option<String> {
    registry().name_by_value::<E, V>(value)
}

pub fn name_by_value_or<E: EnumKind, V: IntRepr>(value: V, default: &str) -> String {
    registry().name_by_value_or::<E, V>(value, default)
}

pub fn desc_by_value<E: EnumKind, V: IntRepr>(value: V) -> Option<String> {
    registry().desc_by_value::<E, V>(value)
}

pub fn desc_by_value_or<E: EnumKind, V: IntRepr>(value: V, default: &str) -> String {
    registry().desc_by_value_or::<E, V>(value, default)
}

pub fn to_value<E: EnumKind>(value: E) -> Result<i32, EnumError> {
    registry().to_value(value)
}

pub fn to_value_as<E: EnumKind, V: FieldValue>(value: E) -> Result<V, EnumError> {
    registry().to_value_as(value)
}

#[must_use]
pub fn to_name<E: EnumKind>(value: E) -> String {
    registry().to_name(value)
}

#[must_use]
pub fn to_desc<E: EnumKind>(value: E) -> String {
    registry().to_desc(value)
}

pub fn value_name_map<T: Reflect>() -> Result<IndexMap<i32, String>, EnumError> {
    registry().value_name_map::<T>()
}

pub fn value_name_map_as<T, V>() -> Result<IndexMap<V, String>, EnumError>
where
    T: Reflect,
    V: FieldValue + Display + Eq + Hash,
{
    registry().value_name_map_as::<T, V>()
}

pub fn name_value_map<T: Reflect>() -> Result<IndexMap<String, i32>, EnumError> {
    registry().name_value_map::<T>()
}

pub fn name_value_map_as<T: Reflect, V: FieldValue>() -> Result<IndexMap<String, V>, EnumError> {
    registry().name_value_map_as::<T, V>()
}

pub fn name_desc_map<T: Reflect>() -> Result<IndexMap<String, String>, EnumError> {
    registry().name_desc_map::<T>()
}

pub fn desc_name_map<T: Reflect>() -> Result<IndexMap<String, String>, EnumError> {
    registry().desc_name_map::<T>()
}

pub fn value_desc_map<T: Reflect>() -> Result<IndexMap<i32, String>, EnumError> {
    registry().value_desc_map::<T>()
}

pub fn value_desc_map_as<T, V>() -> Result<IndexMap<V, String>, EnumError>
where
    T: Reflect,
    V: FieldValue + Display + Eq + Hash,
{
    registry().value_desc_map_as::<T, V>()
}

pub fn desc_value_map<T: Reflect>() -> Result<IndexMap<String, i32>, EnumError> {
    registry().desc_value_map::<T>()
}

pub fn desc_value_map_as<T: Reflect, V: FieldValue>() -> Result<IndexMap<String, V>, EnumError> {
    registry().desc_value_map_as::<T, V>()
}
