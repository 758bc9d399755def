//! Member descriptors and backing-field classification.

use super::types::TypeDescriptor;

/// Whether a member is a stored field or a computed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
}

/// Member visibility as seen by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    NonPublic,
}

/// Descriptor of one member in a type's member table.
///
/// Built with the `const` constructors so tables can live in statics:
///
/// ```
/// use member_extract::{MemberInfo, TypeDescriptor};
///
/// static MEMBERS: [MemberInfo; 2] = [
///     MemberInfo::field("Name", TypeDescriptor::STRING),
///     MemberInfo::field("<Age>k__BackingField", TypeDescriptor::I32)
///         .non_public()
///         .compiler_generated(),
/// ];
/// assert!(MEMBERS[1].is_compiler_generated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    pub name: &'static str,
    pub kind: MemberKind,
    pub visibility: Visibility,
    pub is_static: bool,
    pub compiler_generated: bool,
    pub declared_type: TypeDescriptor,
}

impl MemberInfo {
    /// A public instance field.
    pub const fn field(name: &'static str, declared_type: TypeDescriptor) -> Self {
        Self {
            name,
            kind: MemberKind::Field,
            visibility: Visibility::Public,
            is_static: false,
            compiler_generated: false,
            declared_type,
        }
    }

    /// A public instance property.
    pub const fn property(name: &'static str, declared_type: TypeDescriptor) -> Self {
        Self {
            kind: MemberKind::Property,
            ..Self::field(name, declared_type)
        }
    }

    pub const fn non_public(self) -> Self {
        Self {
            visibility: Visibility::NonPublic,
            ..self
        }
    }

    pub const fn static_member(self) -> Self {
        Self {
            is_static: true,
            ..self
        }
    }

    /// Mark the member as synthesized by the compiler rather than declared.
    pub const fn compiler_generated(self) -> Self {
        Self {
            compiler_generated: true,
            ..self
        }
    }

    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    pub fn is_property(&self) -> bool {
        self.kind == MemberKind::Property
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_compiler_generated(&self) -> bool {
        self.compiler_generated
    }
}

// ============================================================================
// BACKING FIELDS
// ============================================================================

/// Leading character of an auto-property backing field name (`<Age>k__BackingField`).
pub const PROPERTY_BACKING_SENTINEL: char = '<';

/// Classification of a synthetic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackingFieldKind {
    /// Not a backing field.
    None,
    /// Storage for an auto-implemented property.
    AutoPropertyBacking,
    /// Storage for a default-implemented event.
    EventBacking,
}

/// Classify a member structurally: the compiler marker decides whether it is
/// synthetic, the first character of the name decides which kind.
pub fn backing_field_kind(member: &MemberInfo) -> BackingFieldKind {
    if !is_backing_field(member) {
        BackingFieldKind::None
    } else if member.name.starts_with(PROPERTY_BACKING_SENTINEL) {
        BackingFieldKind::AutoPropertyBacking
    } else {
        BackingFieldKind::EventBacking
    }
}

/// True for fields carrying the compiler-generated marker.
pub fn is_backing_field(member: &MemberInfo) -> bool {
    member.is_field() && member.is_compiler_generated()
}

/// True for backing fields added by an auto-implemented property.
pub fn is_property_backing_field(member: &MemberInfo) -> bool {
    backing_field_kind(member) == BackingFieldKind::AutoPropertyBacking
}

/// True for backing fields added by a default-implemented event.
pub fn is_event_backing_field(member: &MemberInfo) -> bool {
    backing_field_kind(member) == BackingFieldKind::EventBacking
}
