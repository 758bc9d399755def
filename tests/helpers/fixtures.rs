//! Hand-registered `Reflect` types used across the extraction tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::atomic::{AtomicU32, Ordering};

use member_extract::{
    Decimal, Error, FieldValue, MemberInfo, Reflect, Result, TypeDescriptor, Value,
};

// ============================================================================
// PERSON: public field + auto-implemented property
// ============================================================================

/// `Name` is a plain field; `Age` is an auto-property with a generated backing field.
pub struct Person {
    pub name: String,
    pub age: i32,
}

static PERSON_MEMBERS: [MemberInfo; 3] = [
    MemberInfo::field("Name", TypeDescriptor::STRING),
    MemberInfo::field("<Age>k__BackingField", TypeDescriptor::I32)
        .non_public()
        .compiler_generated(),
    MemberInfo::property("Age", TypeDescriptor::I32),
];

impl Reflect for Person {
    fn type_name(&self) -> &'static str {
        "Person"
    }

    fn members(&self) -> &[MemberInfo] {
        &PERSON_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "Name" => Ok(FieldValue::scalar(&self.name)),
            "<Age>k__BackingField" => Ok(FieldValue::scalar(self.age)),
            other => Err(Error::unknown_member("Person", other)),
        }
    }

    fn read_property(&self, member: &MemberInfo) -> Result<Value> {
        match member.name {
            "Age" => Ok(self.age.into()),
            other => Err(Error::unknown_member("Person", other)),
        }
    }
}

// ============================================================================
// POINT / HOLDER: composite fields
// ============================================================================

pub struct Point {
    pub x: i32,
}

static POINT_MEMBERS: [MemberInfo; 1] = [MemberInfo::field("X", TypeDescriptor::I32)];

impl Reflect for Point {
    fn type_name(&self) -> &'static str {
        "Point"
    }

    fn members(&self) -> &[MemberInfo] {
        &POINT_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "X" => Ok(FieldValue::scalar(self.x)),
            other => Err(Error::unknown_member("Point", other)),
        }
    }
}

/// Holds an optional composite `Inner`.
pub struct Holder {
    pub inner: Option<Box<Point>>,
}

static HOLDER_MEMBERS: [MemberInfo; 1] =
    [MemberInfo::field("Inner", TypeDescriptor::Composite("Point"))];

impl Reflect for Holder {
    fn type_name(&self) -> &'static str {
        "Holder"
    }

    fn members(&self) -> &[MemberInfo] {
        &HOLDER_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "Inner" => Ok(FieldValue::optional(self.inner.as_deref())),
            other => Err(Error::unknown_member("Holder", other)),
        }
    }
}

/// Two composite fields that may point at the same object.
pub struct Pair<'a> {
    pub left: &'a Point,
    pub right: &'a Point,
}

static PAIR_MEMBERS: [MemberInfo; 2] = [
    MemberInfo::field("Left", TypeDescriptor::Composite("Point")),
    MemberInfo::field("Right", TypeDescriptor::Composite("Point")),
];

impl Reflect for Pair<'_> {
    fn type_name(&self) -> &'static str {
        "Pair"
    }

    fn members(&self) -> &[MemberInfo] {
        &PAIR_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "Left" => Ok(FieldValue::object(self.left)),
            "Right" => Ok(FieldValue::object(self.right)),
            other => Err(Error::unknown_member("Pair", other)),
        }
    }
}

// ============================================================================
// WIDGET: visibility, statics, event backing, failing getter
// ============================================================================

pub static WIDGET_INSTANCES: AtomicU32 = AtomicU32::new(7);

pub struct Widget {
    pub title: String,
    pub clicks: u32,
    pub broken_label: bool,
}

static WIDGET_MEMBERS: [MemberInfo; 6] = [
    MemberInfo::field("Title", TypeDescriptor::STRING),
    MemberInfo::field("clicks", TypeDescriptor::U32).non_public(),
    MemberInfo::field("Clicked", TypeDescriptor::Composite("EventHandler"))
        .non_public()
        .compiler_generated(),
    MemberInfo::field("Instances", TypeDescriptor::U32).static_member(),
    MemberInfo::property("Label", TypeDescriptor::STRING),
    MemberInfo::property("secret", TypeDescriptor::BOOL).non_public(),
];

impl Reflect for Widget {
    fn type_name(&self) -> &'static str {
        "Widget"
    }

    fn members(&self) -> &[MemberInfo] {
        &WIDGET_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "Title" => Ok(FieldValue::scalar(&self.title)),
            "clicks" => Ok(FieldValue::scalar(self.clicks)),
            "Clicked" => Ok(FieldValue::null()),
            "Instances" => Ok(FieldValue::scalar(WIDGET_INSTANCES.load(Ordering::Relaxed))),
            other => Err(Error::unknown_member("Widget", other)),
        }
    }

    fn read_property(&self, member: &MemberInfo) -> Result<Value> {
        match member.name {
            "Label" if self.broken_label => {
                Err(Error::getter("Widget", "Label", "label not initialized"))
            }
            "Label" => Ok(format!("{} ({})", self.title, self.clicks).into()),
            "secret" => Ok(true.into()),
            other => Err(Error::unknown_member("Widget", other)),
        }
    }
}

// ============================================================================
// CLASH: field and property sharing a name
// ============================================================================

pub struct Clash {
    pub id: u64,
}

static CLASH_MEMBERS: [MemberInfo; 2] = [
    MemberInfo::field("Id", TypeDescriptor::Terminal(member_extract::TerminalKind::U64)),
    MemberInfo::property("Id", TypeDescriptor::Terminal(member_extract::TerminalKind::U64)),
];

impl Reflect for Clash {
    fn type_name(&self) -> &'static str {
        "Clash"
    }

    fn members(&self) -> &[MemberInfo] {
        &CLASH_MEMBERS
    }

    fn read_field(&self, _member: &MemberInfo) -> Result<FieldValue<'_>> {
        Ok(FieldValue::scalar(self.id))
    }

    fn read_property(&self, _member: &MemberInfo) -> Result<Value> {
        Ok(self.id.into())
    }
}

// ============================================================================
// INVENTORY: sequence fields
// ============================================================================

pub struct Inventory {
    pub tags: Vec<String>,
    pub points: Vec<Point>,
    pub spare: Option<Vec<Point>>,
}

static POINT_TYPE: TypeDescriptor = TypeDescriptor::Composite("Point");

static INVENTORY_MEMBERS: [MemberInfo; 3] = [
    MemberInfo::field("Tags", TypeDescriptor::Sequence(&TypeDescriptor::STRING)),
    MemberInfo::field("Points", TypeDescriptor::Sequence(&POINT_TYPE)),
    MemberInfo::field("Spare", TypeDescriptor::Sequence(&POINT_TYPE)),
];

impl Reflect for Inventory {
    fn type_name(&self) -> &'static str {
        "Inventory"
    }

    fn members(&self) -> &[MemberInfo] {
        &INVENTORY_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "Tags" => Ok(FieldValue::scalars(&self.tags)),
            "Points" => Ok(FieldValue::objects(&self.points)),
            "Spare" => Ok(match &self.spare {
                Some(points) => FieldValue::objects(points),
                None => FieldValue::null(),
            }),
            other => Err(Error::unknown_member("Inventory", other)),
        }
    }
}

// ============================================================================
// SCALARS: one field per terminal kind
// ============================================================================

#[derive(Default)]
pub struct Scalars;

static SCALAR_MEMBERS: [MemberInfo; 18] = {
    use member_extract::TerminalKind as K;
    [
        MemberInfo::field("bool", TypeDescriptor::Terminal(K::Bool)),
        MemberInfo::field("i8", TypeDescriptor::Terminal(K::I8)),
        MemberInfo::field("i16", TypeDescriptor::Terminal(K::I16)),
        MemberInfo::field("i32", TypeDescriptor::Terminal(K::I32)),
        MemberInfo::field("i64", TypeDescriptor::Terminal(K::I64)),
        MemberInfo::field("i128", TypeDescriptor::Terminal(K::I128)),
        MemberInfo::field("isize", TypeDescriptor::Terminal(K::Isize)),
        MemberInfo::field("u8", TypeDescriptor::Terminal(K::U8)),
        MemberInfo::field("u16", TypeDescriptor::Terminal(K::U16)),
        MemberInfo::field("u32", TypeDescriptor::Terminal(K::U32)),
        MemberInfo::field("u64", TypeDescriptor::Terminal(K::U64)),
        MemberInfo::field("u128", TypeDescriptor::Terminal(K::U128)),
        MemberInfo::field("usize", TypeDescriptor::Terminal(K::Usize)),
        MemberInfo::field("char", TypeDescriptor::Terminal(K::Char)),
        MemberInfo::field("decimal", TypeDescriptor::Terminal(K::Decimal)),
        MemberInfo::field("f32", TypeDescriptor::Terminal(K::F32)),
        MemberInfo::field("f64", TypeDescriptor::Terminal(K::F64)),
        MemberInfo::field("string", TypeDescriptor::Terminal(K::String)),
    ]
};

impl Scalars {
    /// The value every field of `Scalars` reports, by field name.
    pub fn expected(name: &str) -> Option<member_extract::Scalar> {
        use member_extract::Scalar;
        Some(match name {
            "bool" => Scalar::Bool(true),
            "i8" => Scalar::I8(-8),
            "i16" => Scalar::I16(-16),
            "i32" => Scalar::I32(-32),
            "i64" => Scalar::I64(-64),
            "i128" => Scalar::I128(-128),
            "isize" => Scalar::Isize(-1),
            "u8" => Scalar::U8(8),
            "u16" => Scalar::U16(16),
            "u32" => Scalar::U32(32),
            "u64" => Scalar::U64(64),
            "u128" => Scalar::U128(128),
            "usize" => Scalar::Usize(1),
            "char" => Scalar::Char('c'),
            "decimal" => Scalar::Decimal(Decimal::new(314, 2)),
            "f32" => Scalar::F32(0.5),
            "f64" => Scalar::F64(0.25),
            "string" => Scalar::from("text"),
            _ => return None,
        })
    }
}

impl Reflect for Scalars {
    fn type_name(&self) -> &'static str {
        "Scalars"
    }

    fn members(&self) -> &[MemberInfo] {
        &SCALAR_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        Scalars::expected(member.name)
            .map(FieldValue::Scalar)
            .ok_or_else(|| Error::unknown_member("Scalars", member.name))
    }
}

// ============================================================================
// NODE: linkable, for cycle and depth tests
// ============================================================================

pub struct Node<'a> {
    pub label: &'static str,
    pub next: Cell<Option<&'a Node<'a>>>,
}

impl<'a> Node<'a> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            next: Cell::new(None),
        }
    }

    pub fn link(&self, next: &'a Node<'a>) {
        self.next.set(Some(next));
    }
}

static NODE_MEMBERS: [MemberInfo; 2] = [
    MemberInfo::field("Label", TypeDescriptor::STRING),
    MemberInfo::field("Next", TypeDescriptor::Composite("Node")),
];

impl Reflect for Node<'_> {
    fn type_name(&self) -> &'static str {
        "Node"
    }

    fn members(&self) -> &[MemberInfo] {
        &NODE_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "Label" => Ok(FieldValue::scalar(self.label)),
            "Next" => Ok(FieldValue::optional(self.next.get())),
            other => Err(Error::unknown_member("Node", other)),
        }
    }
}

// ============================================================================
// WRAPPER: generic nesting at offset 0
// ============================================================================

/// Every instantiation reports the same `type_name`, and `inner` sits at the
/// wrapper's own address.
pub struct Wrapper<T> {
    pub inner: T,
}

static WRAPPER_MEMBERS: [MemberInfo; 1] =
    [MemberInfo::field("Inner", TypeDescriptor::Composite("Wrapper"))];

impl<T: Reflect> Reflect for Wrapper<T> {
    fn type_name(&self) -> &'static str {
        "Wrapper"
    }

    fn members(&self) -> &[MemberInfo] {
        &WRAPPER_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match member.name {
            "Inner" => Ok(FieldValue::object(&self.inner)),
            other => Err(Error::unknown_member("Wrapper", other)),
        }
    }
}

// ============================================================================
// NAMED: nullable string field
// ============================================================================

pub struct Named {
    pub name: Option<String>,
}

static NAMED_MEMBERS: [MemberInfo; 1] = [MemberInfo::field("Name", TypeDescriptor::STRING)];

impl Reflect for Named {
    fn type_name(&self) -> &'static str {
        "Named"
    }

    fn members(&self) -> &[MemberInfo] {
        &NAMED_MEMBERS
    }

    fn read_field(&self, member: &MemberInfo) -> Result<FieldValue<'_>> {
        match (member.name, &self.name) {
            ("Name", Some(name)) => Ok(FieldValue::scalar(name)),
            ("Name", None) => Ok(FieldValue::null()),
            (other, _) => Err(Error::unknown_member("Named", other)),
        }
    }
}
