//! # member-extract
//!
//! Type-agnostic extraction of an object's fields and properties into an
//! ordered name → value mapping, for debugging inspectors, generic diff
//! helpers and editor tooling.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → scope selection, field classification, property reads, merge
//!   ↓
//! value     → Value / Mapping (extraction results)
//!   ↓
//! reflect   → Reflect trait, member tables, type descriptors, backing fields
//!   ↓
//! error     → Error, Result
//! ```
//!
//! ## Example
//!
//! ```
//! use member_extract::{
//!     ExtractOptions, FieldValue, MemberInfo, Reflect, Result, TypeDescriptor, Value,
//!     extract_fields_and_properties,
//! };
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! static PERSON: [MemberInfo; 3] = [
//!     MemberInfo::field("Name", TypeDescriptor::STRING),
//!     MemberInfo::field("<Age>k__BackingField", TypeDescriptor::I32)
//!         .non_public()
//!         .compiler_generated(),
//!     MemberInfo::property("Age", TypeDescriptor::I32),
//! ];
//!
//! impl Reflect for Person {
//!     fn type_name(&self) -> &'static str {
//!         "Person"
//!     }
//!
//!     fn members(&self) -> &[MemberInfo] {
//!         &PERSON
//!     }
//!
//!     fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
//!         match member.name {
//!             "Name" => Ok(FieldValue::scalar(&self.name)),
//!             _ => Ok(FieldValue::scalar(self.age)),
//!         }
//!     }
//!
//!     fn read_property(&self, _member: &MemberInfo) -> Result<Value> {
//!         Ok(self.age.into())
//!     }
//! }
//!
//! let person = Person { name: "A".into(), age: 5 };
//! let mapping = extract_fields_and_properties(&person, &ExtractOptions::default())?;
//! assert_eq!(Value::Nested(mapping).to_string(), r#"{Name: "A", Age: 5}"#);
//! # Ok::<(), member_extract::Error>(())
//! ```

// ============================================================================
// MODULES (dependency order: error → reflect → value → extract)
// ============================================================================

/// Error type and result alias
pub mod error;

/// Introspection capability: `Reflect`, member descriptors, type descriptors
pub mod reflect;

/// Extraction results: `Value`, `Mapping`
pub mod value;

/// Extraction operations and their configuration
pub mod extract;

pub use error::{Error, Result};
pub use extract::{
    DEFAULT_MAX_DEPTH, ExtractOptions, MemberCensus, MemberScope, compute_scope,
    extract_fields, extract_fields_and_properties, extract_properties, member_census,
};
pub use reflect::{
    BackingFieldKind, Decimal, FieldValue, MemberInfo, MemberKind, Reflect, Scalar, TerminalKind,
    TypeDescriptor, Visibility, backing_field_kind, is_backing_field, is_event_backing_field,
    is_property_backing_field,
};
pub use value::{Mapping, Value};
