//! Property extraction.

use tracing::{debug, trace};

use super::merge::insert_unique;
use super::scope::ExtractOptions;
use crate::error::Result;
use crate::reflect::Reflect;
use crate::value::Mapping;

/// Read every property of `object` in scope.
///
/// Values are taken from the getters as-is, with no terminal/composite
/// classification. The first failing getter aborts the extraction and its
/// error is returned unchanged.
pub fn extract_properties(object: &dyn Reflect, options: &ExtractOptions) -> Result<Mapping> {
    let scope = options.scope();
    debug!(type_name = object.type_name(), ?scope, "extracting properties");

    let mut mapping = Mapping::new();
    for member in object.members() {
        if !member.is_property() || !scope.matches(member) {
            continue;
        }
        trace!(name = member.name, "reading property");
        let value = object.read_property(member)?;
        insert_unique(&mut mapping, member.name, value)?;
    }
    Ok(mapping)
}
