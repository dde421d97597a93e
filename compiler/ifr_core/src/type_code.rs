//! Type codes: the runtime descriptors of IDL types.
//!
//! Only the shape the repository needs is modelled. Value type codes carry
//! no state members, so recursive value graphs never produce recursive type
//! codes.

use std::fmt;

use crate::ids::{CORBA_OBJECT_ID, CORBA_VALUE_BASE_ID};
use crate::{PrimitiveKind, TcKind};

/// Value type modifier (`VM_*`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValueModifier {
    #[default]
    None,
    Custom,
    Abstract,
    Truncatable,
}

/// A member of a struct or exception type code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructMember {
    pub name: String,
    pub ty: TypeCode,
}

/// An IDL type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// A parameterless kind (`long`, `any`, `wstring`, ...).
    Basic(TcKind),
    ObjRef {
        id: String,
        name: String,
    },
    AbstractInterface {
        id: String,
        name: String,
    },
    /// An unbounded sequence when `bound == 0`.
    Sequence {
        bound: u32,
        element: Box<TypeCode>,
    },
    Alias {
        id: String,
        name: String,
        original: Box<TypeCode>,
    },
    ValueBox {
        id: String,
        name: String,
        boxed: Box<TypeCode>,
    },
    Value {
        id: String,
        name: String,
        modifier: ValueModifier,
        /// Repository ID of the concrete base value, if any.
        concrete_base: Option<String>,
    },
    Except {
        id: String,
        name: String,
        members: Vec<StructMember>,
    },
}

impl TypeCode {
    pub const VOID: TypeCode = TypeCode::Basic(TcKind::Void);
    pub const ANY: TypeCode = TypeCode::Basic(TcKind::Any);
    pub const WSTRING: TypeCode = TypeCode::Basic(TcKind::WString);

    /// Type code of the primitive `kind`.
    pub fn primitive(kind: PrimitiveKind) -> TypeCode {
        let tk = match kind {
            PrimitiveKind::Null => TcKind::Null,
            PrimitiveKind::Void => TcKind::Void,
            PrimitiveKind::Short => TcKind::Short,
            PrimitiveKind::Long => TcKind::Long,
            PrimitiveKind::UShort => TcKind::UShort,
            PrimitiveKind::ULong => TcKind::ULong,
            PrimitiveKind::Float => TcKind::Float,
            PrimitiveKind::Double => TcKind::Double,
            PrimitiveKind::Boolean => TcKind::Boolean,
            PrimitiveKind::Char => TcKind::Char,
            PrimitiveKind::Octet => TcKind::Octet,
            PrimitiveKind::Any => TcKind::Any,
            PrimitiveKind::TypeCode => TcKind::TypeCode,
            PrimitiveKind::Principal => TcKind::Principal,
            PrimitiveKind::String => TcKind::String,
            PrimitiveKind::LongLong => TcKind::LongLong,
            PrimitiveKind::ULongLong => TcKind::ULongLong,
            PrimitiveKind::LongDouble => TcKind::LongDouble,
            PrimitiveKind::WChar => TcKind::WChar,
            PrimitiveKind::WString => TcKind::WString,
            PrimitiveKind::ObjRef => return TypeCode::corba_object(),
            PrimitiveKind::ValueBase => return TypeCode::value_base(),
        };
        TypeCode::Basic(tk)
    }

    /// `CORBA::Object`.
    pub fn corba_object() -> TypeCode {
        TypeCode::ObjRef {
            id: CORBA_OBJECT_ID.to_owned(),
            name: "Object".to_owned(),
        }
    }

    /// `CORBA::ValueBase`.
    pub fn value_base() -> TypeCode {
        TypeCode::Value {
            id: CORBA_VALUE_BASE_ID.to_owned(),
            name: "ValueBase".to_owned(),
            modifier: ValueModifier::None,
            concrete_base: None,
        }
    }

    /// An unbounded sequence of `element`.
    pub fn sequence_of(element: TypeCode) -> TypeCode {
        TypeCode::Sequence {
            bound: 0,
            element: Box::new(element),
        }
    }

    pub fn kind(&self) -> TcKind {
        match self {
            TypeCode::Basic(kind) => *kind,
            TypeCode::ObjRef { .. } => TcKind::ObjRef,
            TypeCode::AbstractInterface { .. } => TcKind::AbstractInterface,
            TypeCode::Sequence { .. } => TcKind::Sequence,
            TypeCode::Alias { .. } => TcKind::Alias,
            TypeCode::ValueBox { .. } => TcKind::ValueBox,
            TypeCode::Value { .. } => TcKind::Value,
            TypeCode::Except { .. } => TcKind::Except,
        }
    }

    /// Repository ID, for kinds that carry one.
    pub fn id(&self) -> Option<&str> {
        match self {
            TypeCode::ObjRef { id, .. }
            | TypeCode::AbstractInterface { id, .. }
            | TypeCode::Alias { id, .. }
            | TypeCode::ValueBox { id, .. }
            | TypeCode::Value { id, .. }
            | TypeCode::Except { id, .. } => Some(id),
            TypeCode::Basic(_) | TypeCode::Sequence { .. } => None,
        }
    }

    /// Simple name, for kinds that carry one.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeCode::ObjRef { name, .. }
            | TypeCode::AbstractInterface { name, .. }
            | TypeCode::Alias { name, .. }
            | TypeCode::ValueBox { name, .. }
            | TypeCode::Value { name, .. }
            | TypeCode::Except { name, .. } => Some(name),
            TypeCode::Basic(_) | TypeCode::Sequence { .. } => None,
        }
    }

    /// The primitive kind this type code denotes, if it denotes one.
    ///
    /// Covers the parameterless kinds plus `CORBA::Object` and
    /// `CORBA::ValueBase`, which have primitive definitions of their own.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            TypeCode::Basic(kind) => kind.primitive(),
            TypeCode::ObjRef { id, .. } if id == CORBA_OBJECT_ID => Some(PrimitiveKind::ObjRef),
            TypeCode::Value { id, .. } if id == CORBA_VALUE_BASE_ID => {
                Some(PrimitiveKind::ValueBase)
            }
            _ => None,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCode::Basic(kind) => write!(f, "{}", basic_spelling(*kind)),
            TypeCode::Sequence { bound: 0, element } => write!(f, "sequence<{element}>"),
            TypeCode::Sequence { bound, element } => write!(f, "sequence<{element}, {bound}>"),
            TypeCode::ObjRef { name, .. }
            | TypeCode::AbstractInterface { name, .. }
            | TypeCode::Alias { name, .. }
            | TypeCode::ValueBox { name, .. }
            | TypeCode::Value { name, .. }
            | TypeCode::Except { name, .. } => f.write_str(name),
        }
    }
}

fn basic_spelling(kind: TcKind) -> &'static str {
    match kind {
        TcKind::Null => "null",
        TcKind::Void => "void",
        TcKind::Short => "short",
        TcKind::Long => "long",
        TcKind::UShort => "unsigned short",
        TcKind::ULong => "unsigned long",
        TcKind::Float => "float",
        TcKind::Double => "double",
        TcKind::Boolean => "boolean",
        TcKind::Char => "char",
        TcKind::Octet => "octet",
        TcKind::Any => "any",
        TcKind::TypeCode => "TypeCode",
        TcKind::Principal => "Principal",
        TcKind::String => "string",
        TcKind::LongLong => "long long",
        TcKind::ULongLong => "unsigned long long",
        TcKind::LongDouble => "long double",
        TcKind::WChar => "wchar",
        TcKind::WString => "wstring",
        _ => "<malformed>",
    }
}
