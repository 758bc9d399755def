//! Merging field and property mappings into one namespace.

use indexmap::map::Entry;
use tracing::{debug, warn};

use super::fields::extract_fields;
use super::properties::extract_properties;
use super::scope::ExtractOptions;
use crate::error::{Error, Result};
use crate::reflect::Reflect;
use crate::value::{Mapping, Value};

/// Insert `name -> value`, refusing to overwrite an existing key.
pub(crate) fn insert_unique(mapping: &mut Mapping, name: &str, value: Value) -> Result<()> {
    match mapping.entry(name.into()) {
        Entry::Occupied(_) => {
            warn!(name, "duplicate member name");
            Err(Error::DuplicateKey {
                name: name.to_string(),
            })
        }
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

/// Extract fields and properties and merge them, fields first.
///
/// Each category keeps its own enumeration order. A property whose name is
/// already taken by a field fails with [`Error::DuplicateKey`].
pub fn extract_fields_and_properties(
    object: &dyn Reflect,
    options: &ExtractOptions,
) -> Result<Mapping> {
    let mut mapping = extract_fields(object, options)?;
    let properties = extract_properties(object, options)?;
    debug!(
        type_name = object.type_name(),
        fields = mapping.len(),
        properties = properties.len(),
        "merging fields and properties"
    );

    mapping.reserve(properties.len());
    for (name, value) in properties {
        insert_unique(&mut mapping, &name, value)?;
    }
    Ok(mapping)
}
