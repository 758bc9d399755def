//! Introspection capability.
//!
//! Rust has no runtime reflection, so types opt in by implementing [`Reflect`]:
//! a static member table plus accessors that read live values. The extractor
//! only ever talks to objects through this trait.
//!
//! - [`types`] - declared type descriptors and terminal scalars
//! - [`member`] - member descriptors and backing-field classification

mod member;
mod types;

use std::fmt;

use crate::error::{Error, Result};
use crate::value::Value;

pub use member::{
    BackingFieldKind, MemberInfo, MemberKind, PROPERTY_BACKING_SENTINEL, Visibility,
    backing_field_kind, is_backing_field, is_event_backing_field, is_property_backing_field,
};
pub use types::{Decimal, Scalar, TerminalKind, TypeDescriptor};

/// An object whose members can be enumerated and read.
pub trait Reflect {
    /// Runtime type name, used in errors and extraction paths.
    fn type_name(&self) -> &'static str;

    /// Every member of the runtime type, in declaration order.
    ///
    /// Includes non-public, static and compiler-generated members; scope
    /// filtering happens in the extractor.
    fn members(&self) -> &[MemberInfo];

    /// Read the live value of a field.
    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>>;

    /// Invoke a property getter.
    ///
    /// Getters may run arbitrary logic and may fail; failures are reported as
    /// [`Error::Getter`] and reach the caller unchanged.
    fn read_property(&self, member: &MemberInfo) -> Result<Value> {
        Err(Error::unknown_member(self.type_name(), member.name))
    }

    /// Compiler-assigned name of the concrete type, one per instantiation.
    ///
    /// Used to tell apart objects sharing an address, such as a struct and
    /// its first field. Implementors should not override it.
    #[doc(hidden)]
    fn concrete_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The raw value of a field, before classification.
pub enum FieldValue<'a> {
    Scalar(Scalar),
    /// A composite value; `None` when the reference is null.
    Object(Option<&'a dyn Reflect>),
    Sequence(Vec<FieldValue<'a>>),
}

impl<'a> FieldValue<'a> {
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        FieldValue::Scalar(value.into())
    }

    pub fn object(object: &'a dyn Reflect) -> Self {
        FieldValue::Object(Some(object))
    }

    pub fn null() -> Self {
        FieldValue::Object(None)
    }

    /// Wrap an optional composite.
    pub fn optional<T: Reflect>(object: Option<&'a T>) -> Self {
        FieldValue::Object(object.map(|o| o as &dyn Reflect))
    }

    /// A sequence of terminal values.
    pub fn scalars<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Scalar>,
    {
        FieldValue::Sequence(items.into_iter().map(FieldValue::scalar).collect())
    }

    /// A sequence of composite values.
    pub fn objects<T: Reflect>(items: &'a [T]) -> Self {
        FieldValue::Sequence(
            items
                .iter()
                .map(|item| FieldValue::object(item as &dyn Reflect))
                .collect(),
        )
    }

    /// Short description of the live shape, for mismatch reports.
    pub(crate) fn describe(&self) -> String {
        match self {
            FieldValue::Scalar(s) => s.kind().to_string(),
            FieldValue::Object(Some(o)) => o.type_name().to_string(),
            FieldValue::Object(None) => "null".to_string(),
            FieldValue::Sequence(_) => "sequence".to_string(),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            FieldValue::Object(Some(o)) => f.debug_tuple("Object").field(o).finish(),
            FieldValue::Object(None) => f.write_str("Null"),
            FieldValue::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
        }
    }
}

impl fmt::Debug for dyn Reflect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflect")
            .field("type_name", &self.type_name())
            .finish_non_exhaustive()
    }
}
