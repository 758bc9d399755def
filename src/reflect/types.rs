//! Declared type descriptors and terminal scalar values.
//!
//! A member's declared type is one of three categories:
//! - [`TypeDescriptor::Terminal`] - directly representable as a mapping leaf
//! - [`TypeDescriptor::Sequence`] - an array/sequence of some element type
//! - [`TypeDescriptor::Composite`] - anything else, introspected recursively

use std::fmt;
use std::sync::Arc;

// ============================================================================
// TERMINAL KINDS
// ============================================================================

/// The fixed list of terminal (leaf) types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    Char,
    Decimal,
    F32,
    F64,
    String,
}

impl TerminalKind {
    /// Every terminal kind, in declaration order.
    pub const ALL: [TerminalKind; 18] = [
        TerminalKind::Bool,
        TerminalKind::I8,
        TerminalKind::I16,
        TerminalKind::I32,
        TerminalKind::I64,
        TerminalKind::I128,
        TerminalKind::Isize,
        TerminalKind::U8,
        TerminalKind::U16,
        TerminalKind::U32,
        TerminalKind::U64,
        TerminalKind::U128,
        TerminalKind::Usize,
        TerminalKind::Char,
        TerminalKind::Decimal,
        TerminalKind::F32,
        TerminalKind::F64,
        TerminalKind::String,
    ];

    /// Short display name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TerminalKind::Bool => "bool",
            TerminalKind::I8 => "i8",
            TerminalKind::I16 => "i16",
            TerminalKind::I32 => "i32",
            TerminalKind::I64 => "i64",
            TerminalKind::I128 => "i128",
            TerminalKind::Isize => "isize",
            TerminalKind::U8 => "u8",
            TerminalKind::U16 => "u16",
            TerminalKind::U32 => "u32",
            TerminalKind::U64 => "u64",
            TerminalKind::U128 => "u128",
            TerminalKind::Usize => "usize",
            TerminalKind::Char => "char",
            TerminalKind::Decimal => "decimal",
            TerminalKind::F32 => "f32",
            TerminalKind::F64 => "f64",
            TerminalKind::String => "string",
        }
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TYPE DESCRIPTORS
// ============================================================================

/// Declared type identity of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A terminal leaf type.
    Terminal(TerminalKind),
    /// An array or sequence with the given element type.
    Sequence(&'static TypeDescriptor),
    /// Any other type, identified by name.
    Composite(&'static str),
}

impl TypeDescriptor {
    pub const BOOL: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::Bool);
    pub const I32: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::I32);
    pub const I64: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::I64);
    pub const U32: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::U32);
    pub const F64: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::F64);
    pub const CHAR: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::Char);
    pub const DECIMAL: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::Decimal);
    pub const STRING: TypeDescriptor = TypeDescriptor::Terminal(TerminalKind::String);

    pub fn is_terminal(&self) -> bool {
        matches!(self, TypeDescriptor::Terminal(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, TypeDescriptor::Sequence(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, TypeDescriptor::Composite(_))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Terminal(kind) => write!(f, "{kind}"),
            TypeDescriptor::Sequence(element) => write!(f, "[{element}]"),
            TypeDescriptor::Composite(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// SCALAR VALUES
// ============================================================================

/// Fixed-point decimal: `mantissa * 10^-scale`.
///
/// Equality is structural, so `1.0` and `1.00` compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    pub mantissa: i128,
    pub scale: u32,
}

impl Decimal {
    pub fn new(mantissa: i128, scale: u32) -> Self {
        Self { mantissa, scale }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            write!(f, "{sign}{digits}")
        } else if digits.len() <= scale {
            write!(f, "{sign}0.{}{digits}", "0".repeat(scale - digits.len()))
        } else {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int}.{frac}")
        }
    }
}

/// A live terminal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    Char(char),
    Decimal(Decimal),
    F32(f32),
    F64(f64),
    String(Arc<str>),
}

impl Scalar {
    /// The terminal kind this value belongs to.
    pub fn kind(&self) -> TerminalKind {
        match self {
            Scalar::Bool(_) => TerminalKind::Bool,
            Scalar::I8(_) => TerminalKind::I8,
            Scalar::I16(_) => TerminalKind::I16,
            Scalar::I32(_) => TerminalKind::I32,
            Scalar::I64(_) => TerminalKind::I64,
            Scalar::I128(_) => TerminalKind::I128,
            Scalar::Isize(_) => TerminalKind::Isize,
            Scalar::U8(_) => TerminalKind::U8,
            Scalar::U16(_) => TerminalKind::U16,
            Scalar::U32(_) => TerminalKind::U32,
            Scalar::U64(_) => TerminalKind::U64,
            Scalar::U128(_) => TerminalKind::U128,
            Scalar::Usize(_) => TerminalKind::Usize,
            Scalar::Char(_) => TerminalKind::Char,
            Scalar::Decimal(_) => TerminalKind::Decimal,
            Scalar::F32(_) => TerminalKind::F32,
            Scalar::F64(_) => TerminalKind::F64,
            Scalar::String(_) => TerminalKind::String,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::I8(v) => write!(f, "{v}"),
            Scalar::I16(v) => write!(f, "{v}"),
            Scalar::I32(v) => write!(f, "{v}"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::I128(v) => write!(f, "{v}"),
            Scalar::Isize(v) => write!(f, "{v}"),
            Scalar::U8(v) => write!(f, "{v}"),
            Scalar::U16(v) => write!(f, "{v}"),
            Scalar::U32(v) => write!(f, "{v}"),
            Scalar::U64(v) => write!(f, "{v}"),
            Scalar::U128(v) => write!(f, "{v}"),
            Scalar::Usize(v) => write!(f, "{v}"),
            Scalar::Char(v) => write!(f, "{v:?}"),
            Scalar::Decimal(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
            Scalar::String(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v)
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    char => Char,
    Decimal => Decimal,
    f32 => F32,
    f64 => F64,
    Arc<str> => String,
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.into())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s.into())
    }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self {
        Scalar::String(s.as_str().into())
    }
}
