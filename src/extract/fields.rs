//! Field extraction: backing-field filtering and terminal/composite classification.

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::merge::insert_unique;
use super::scope::{ExtractOptions, MemberScope};
use crate::error::{Error, Result};
use crate::reflect::{
    FieldValue, MemberInfo, Reflect, TerminalKind, TypeDescriptor, is_backing_field,
};
use crate::value::{Mapping, Value};

/// Extract the fields of `object` in scope, descending into composites.
///
/// - Compiler-generated backing fields are skipped.
/// - Terminal fields become leaves.
/// - Sequence fields are extracted element by element.
/// - Composite fields become nested mappings.
/// - A null composite, sequence or string becomes [`Value::Null`].
///
/// Fails with [`Error::Cycle`] if an object is reached again while it is still
/// being extracted, and with [`Error::DepthLimit`] past `options.max_depth`.
pub fn extract_fields(object: &dyn Reflect, options: &ExtractOptions) -> Result<Mapping> {
    let scope = options.scope();
    debug!(
        type_name = object.type_name(),
        ?scope,
        max_depth = options.max_depth,
        "extracting fields"
    );

    let mut walker = FieldWalker {
        scope,
        max_depth: options.max_depth,
        depth: 0,
        active: FxHashSet::default(),
        path: vec![object.type_name().to_string()],
    };
    walker.object(object)
}

/// Identity of an object on the active path: address plus concrete type.
///
/// A struct and its first field share an address, and `type_name` is chosen
/// by the implementor, so the compiler-assigned type name keeps them apart.
type ObjectKey = (usize, &'static str);

fn object_key(object: &dyn Reflect) -> ObjectKey {
    let address = std::ptr::from_ref(object).cast::<()>() as usize;
    (address, object.concrete_type())
}

struct FieldWalker {
    scope: MemberScope,
    max_depth: usize,
    depth: usize,
    active: FxHashSet<ObjectKey>,
    path: Vec<String>,
}

impl FieldWalker {
    fn path(&self) -> String {
        self.path.concat()
    }

    fn object(&mut self, object: &dyn Reflect) -> Result<Mapping> {
        let key = object_key(object);
        if !self.active.insert(key) {
            let path = self.path();
            warn!(%path, type_name = object.type_name(), "cycle in object graph");
            return Err(Error::Cycle { path });
        }
        let result = self.members(object);
        self.active.remove(&key);
        result
    }

    fn members(&mut self, object: &dyn Reflect) -> Result<Mapping> {
        let mut mapping = Mapping::new();
        for member in object.members() {
            if !member.is_field() || !self.scope.matches(member) {
                continue;
            }
            if is_backing_field(member) {
                trace!(name = member.name, "skipping backing field");
                continue;
            }

            self.path.push(format!(".{}", member.name));
            let value = object
                .read_field(member)
                .and_then(|raw| self.classify(member, &member.declared_type, raw));
            self.path.pop();

            insert_unique(&mut mapping, member.name, value?)?;
        }
        Ok(mapping)
    }

    fn classify(
        &mut self,
        member: &MemberInfo,
        declared: &TypeDescriptor,
        raw: FieldValue<'_>,
    ) -> Result<Value> {
        match (declared, raw) {
            (TypeDescriptor::Terminal(kind), FieldValue::Scalar(scalar)) if scalar.kind() == *kind => {
                trace!(name = member.name, %kind, "terminal");
                Ok(Value::Terminal(scalar))
            }
            (TypeDescriptor::Sequence(element), FieldValue::Sequence(items)) => {
                trace!(name = member.name, len = items.len(), "sequence");
                let mut values = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    self.path.push(format!("[{index}]"));
                    let value = self.classify(member, element, item);
                    self.path.pop();
                    values.push(value?);
                }
                Ok(Value::Sequence(values))
            }
            (
                TypeDescriptor::Composite(_)
                | TypeDescriptor::Sequence(_)
                | TypeDescriptor::Terminal(TerminalKind::String),
                FieldValue::Object(None),
            ) => {
                trace!(name = member.name, "null reference");
                Ok(Value::Null)
            }
            (TypeDescriptor::Composite(_), FieldValue::Object(Some(nested))) => {
                trace!(name = member.name, type_name = nested.type_name(), "composite");
                self.nested(nested).map(Value::Nested)
            }
            (declared, raw) => Err(Error::type_mismatch(self.path(), declared, raw.describe())),
        }
    }

    fn nested(&mut self, object: &dyn Reflect) -> Result<Mapping> {
        if self.depth >= self.max_depth {
            let path = self.path();
            warn!(%path, limit = self.max_depth, "extraction depth limit reached");
            return Err(Error::DepthLimit {
                limit: self.max_depth,
                path,
            });
        }
        self.depth += 1;
        let result = self.object(object);
        self.depth -= 1;
        result
    }
}
