//! Constant values carried by constant definitions.

use std::fmt;

use crate::{TcKind, TypeCode};

/// The value of a mapped Java constant (`static final` primitive or string).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum ConstantValue {
    Boolean(bool),
    /// Java `char`, a UTF-16 code unit.
    Char(u16),
    /// Java `byte`; IDL `octet` carries the two's-complement bits.
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl ConstantValue {
    /// The IDL type code of this constant.
    pub fn type_code(&self) -> TypeCode {
        let kind = match self {
            ConstantValue::Boolean(_) => TcKind::Boolean,
            ConstantValue::Char(_) => TcKind::WChar,
            ConstantValue::Byte(_) => TcKind::Octet,
            ConstantValue::Short(_) => TcKind::Short,
            ConstantValue::Int(_) => TcKind::Long,
            ConstantValue::Long(_) => TcKind::LongLong,
            ConstantValue::Float(_) => TcKind::Float,
            ConstantValue::Double(_) => TcKind::Double,
            ConstantValue::String(_) => TcKind::WString,
        };
        TypeCode::Basic(kind)
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Boolean(v) => write!(f, "{}", if *v { "TRUE" } else { "FALSE" }),
            ConstantValue::Char(v) => write!(f, "L'\\u{v:04x}'"),
            ConstantValue::Byte(v) => write!(f, "{}", *v as u8),
            ConstantValue::Short(v) => write!(f, "{v}"),
            ConstantValue::Int(v) => write!(f, "{v}"),
            ConstantValue::Long(v) => write!(f, "{v}"),
            ConstantValue::Float(v) => write!(f, "{v}"),
            ConstantValue::Double(v) => write!(f, "{v}"),
            ConstantValue::String(v) => write!(f, "L{v:?}"),
        }
    }
}
