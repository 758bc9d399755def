//! Member census: which members an extraction keeps and which it skips.

use super::scope::MemberScope;
use crate::reflect::{BackingFieldKind, MemberInfo, Reflect, backing_field_kind};

/// Names of the in-scope members of an object, by category.
///
/// Each list keeps enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberCensus {
    /// Fields that field extraction reports.
    pub data_fields: Vec<&'static str>,
    /// Backing fields of auto-implemented properties.
    pub property_backing_fields: Vec<&'static str>,
    /// Backing fields of default-implemented events.
    pub event_backing_fields: Vec<&'static str>,
    pub properties: Vec<&'static str>,
}

impl MemberCensus {
    /// Number of entries a non-colliding field + property merge produces.
    pub fn merged_len(&self) -> usize {
        self.data_fields.len() + self.properties.len()
    }

    fn record(&mut self, member: &MemberInfo) {
        if member.is_property() {
            self.properties.push(member.name);
            return;
        }
        match backing_field_kind(member) {
            BackingFieldKind::None => self.data_fields.push(member.name),
            BackingFieldKind::AutoPropertyBacking => self.property_backing_fields.push(member.name),
            BackingFieldKind::EventBacking => self.event_backing_fields.push(member.name),
        }
    }
}

/// Categorize the members of `object` that fall inside `scope`.
///
/// Only reads the member table; no values are read.
pub fn member_census(object: &dyn Reflect, scope: &MemberScope) -> MemberCensus {
    let mut census = MemberCensus::default();
    for member in object.members().iter().filter(|m| scope.matches(m)) {
        census.record(member);
    }
    census
}
