//! Kind tags shared by the repository and its descriptions.
//!
//! The variant order of each enum follows the OMG numbering so that
//! `as u32` yields the on-the-wire discriminant.

use std::fmt;

/// The kind of an Interface Repository definition (`dk_*`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DefinitionKind {
    None,
    All,
    Attribute,
    Constant,
    Exception,
    Interface,
    Module,
    Operation,
    Typedef,
    Alias,
    Struct,
    Union,
    Enum,
    Primitive,
    String,
    Sequence,
    Array,
    Repository,
    Wstring,
    Fixed,
    Value,
    ValueBox,
    ValueMember,
    Native,
    AbstractInterface,
}

impl DefinitionKind {
    /// Whether `self` passes a content filter of `filter`.
    ///
    /// `All` matches every kind, `Typedef` matches every type definition.
    pub fn matches(self, filter: DefinitionKind) -> bool {
        match filter {
            DefinitionKind::All => true,
            DefinitionKind::Typedef => matches!(
                self,
                DefinitionKind::Alias
                    | DefinitionKind::Struct
                    | DefinitionKind::Union
                    | DefinitionKind::Enum
                    | DefinitionKind::ValueBox
                    | DefinitionKind::Native
            ),
            other => self == other,
        }
    }

    /// The repository ID of the IR interface that nodes of this kind implement.
    pub fn interface_id(self) -> &'static str {
        match self {
            DefinitionKind::Attribute => "IDL:omg.org/CORBA/AttributeDef:1.0",
            DefinitionKind::Constant => "IDL:omg.org/CORBA/ConstantDef:1.0",
            DefinitionKind::Exception => "IDL:omg.org/CORBA/ExceptionDef:1.0",
            DefinitionKind::Interface => "IDL:omg.org/CORBA/InterfaceDef:1.0",
            DefinitionKind::Module => "IDL:omg.org/CORBA/ModuleDef:1.0",
            DefinitionKind::Operation => "IDL:omg.org/CORBA/OperationDef:1.0",
            DefinitionKind::Alias => "IDL:omg.org/CORBA/AliasDef:1.0",
            DefinitionKind::Primitive => "IDL:omg.org/CORBA/PrimitiveDef:1.0",
            DefinitionKind::Sequence => "IDL:omg.org/CORBA/SequenceDef:1.0",
            DefinitionKind::Repository => "IDL:omg.org/CORBA/Repository:1.0",
            DefinitionKind::Value => "IDL:omg.org/CORBA/ValueDef:1.0",
            DefinitionKind::ValueBox => "IDL:omg.org/CORBA/ValueBoxDef:1.0",
            DefinitionKind::ValueMember => "IDL:omg.org/CORBA/ValueMemberDef:1.0",
            _ => "IDL:omg.org/CORBA/IRObject:1.0",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DefinitionKind::None => "dk_none",
            DefinitionKind::All => "dk_all",
            DefinitionKind::Attribute => "dk_Attribute",
            DefinitionKind::Constant => "dk_Constant",
            DefinitionKind::Exception => "dk_Exception",
            DefinitionKind::Interface => "dk_Interface",
            DefinitionKind::Module => "dk_Module",
            DefinitionKind::Operation => "dk_Operation",
            DefinitionKind::Typedef => "dk_Typedef",
            DefinitionKind::Alias => "dk_Alias",
            DefinitionKind::Struct => "dk_Struct",
            DefinitionKind::Union => "dk_Union",
            DefinitionKind::Enum => "dk_Enum",
            DefinitionKind::Primitive => "dk_Primitive",
            DefinitionKind::String => "dk_String",
            DefinitionKind::Sequence => "dk_Sequence",
            DefinitionKind::Array => "dk_Array",
            DefinitionKind::Repository => "dk_Repository",
            DefinitionKind::Wstring => "dk_Wstring",
            DefinitionKind::Fixed => "dk_Fixed",
            DefinitionKind::Value => "dk_Value",
            DefinitionKind::ValueBox => "dk_ValueBox",
            DefinitionKind::ValueMember => "dk_ValueMember",
            DefinitionKind::Native => "dk_Native",
            DefinitionKind::AbstractInterface => "dk_AbstractInterface",
        };
        f.write_str(s)
    }
}

/// The kind of a primitive IDL type (`pk_*`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Null,
    Void,
    Short,
    Long,
    UShort,
    ULong,
    Float,
    Double,
    Boolean,
    Char,
    Octet,
    Any,
    TypeCode,
    Principal,
    String,
    ObjRef,
    LongLong,
    ULongLong,
    LongDouble,
    WChar,
    WString,
    ValueBase,
}

impl PrimitiveKind {
    /// Every primitive kind a repository pre-seeds a definition for.
    ///
    /// `pk_null` has no definition of its own.
    pub const SEEDED: [PrimitiveKind; 21] = [
        PrimitiveKind::Void,
        PrimitiveKind::Short,
        PrimitiveKind::Long,
        PrimitiveKind::UShort,
        PrimitiveKind::ULong,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Boolean,
        PrimitiveKind::Char,
        PrimitiveKind::Octet,
        PrimitiveKind::Any,
        PrimitiveKind::TypeCode,
        PrimitiveKind::Principal,
        PrimitiveKind::String,
        PrimitiveKind::ObjRef,
        PrimitiveKind::LongLong,
        PrimitiveKind::ULongLong,
        PrimitiveKind::LongDouble,
        PrimitiveKind::WChar,
        PrimitiveKind::WString,
        PrimitiveKind::ValueBase,
    ];
}

/// The kind of a type code (`tk_*`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TcKind {
    Null,
    Void,
    Short,
    Long,
    UShort,
    ULong,
    Float,
    Double,
    Boolean,
    Char,
    Octet,
    Any,
    TypeCode,
    Principal,
    ObjRef,
    Struct,
    Union,
    Enum,
    String,
    Sequence,
    Array,
    Alias,
    Except,
    LongLong,
    ULongLong,
    LongDouble,
    WChar,
    WString,
    Fixed,
    Value,
    ValueBox,
    Native,
    AbstractInterface,
}

impl TcKind {
    /// The primitive kind a parameterless type code denotes, if any.
    ///
    /// Object references and value bases are only primitive when they name
    /// `CORBA::Object` / `CORBA::ValueBase`; that check belongs to the caller.
    pub fn primitive(self) -> Option<PrimitiveKind> {
        let pk = match self {
            TcKind::Null => PrimitiveKind::Null,
            TcKind::Void => PrimitiveKind::Void,
            TcKind::Short => PrimitiveKind::Short,
            TcKind::Long => PrimitiveKind::Long,
            TcKind::UShort => PrimitiveKind::UShort,
            TcKind::ULong => PrimitiveKind::ULong,
            TcKind::Float => PrimitiveKind::Float,
            TcKind::Double => PrimitiveKind::Double,
            TcKind::Boolean => PrimitiveKind::Boolean,
            TcKind::Char => PrimitiveKind::Char,
            TcKind::Octet => PrimitiveKind::Octet,
            TcKind::Any => PrimitiveKind::Any,
            TcKind::TypeCode => PrimitiveKind::TypeCode,
            TcKind::Principal => PrimitiveKind::Principal,
            TcKind::String => PrimitiveKind::String,
            TcKind::LongLong => PrimitiveKind::LongLong,
            TcKind::ULongLong => PrimitiveKind::ULongLong,
            TcKind::LongDouble => PrimitiveKind::LongDouble,
            TcKind::WChar => PrimitiveKind::WChar,
            TcKind::WString => PrimitiveKind::WString,
            _ => return None,
        };
        Some(pk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_matches_everything() {
        assert!(DefinitionKind::Operation.matches(DefinitionKind::All));
        assert!(DefinitionKind::Module.matches(DefinitionKind::All));
    }

    #[test]
    fn typedef_filter_matches_type_definitions_only() {
        assert!(DefinitionKind::Alias.matches(DefinitionKind::Typedef));
        assert!(DefinitionKind::ValueBox.matches(DefinitionKind::Typedef));
        assert!(!DefinitionKind::Value.matches(DefinitionKind::Typedef));
    }

    #[test]
    fn exact_filter() {
        assert!(DefinitionKind::Value.matches(DefinitionKind::Value));
        assert!(!DefinitionKind::Value.matches(DefinitionKind::ValueBox));
    }

    #[test]
    fn omg_discriminants() {
        assert_eq!(DefinitionKind::Repository as u32, 17);
        assert_eq!(DefinitionKind::ValueMember as u32, 22);
        assert_eq!(TcKind::Value as u32, 29);
        assert_eq!(PrimitiveKind::ValueBase as u32, 21);
    }

    #[test]
    fn parameterless_kinds_map_to_primitives() {
        assert_eq!(TcKind::Long.primitive(), Some(PrimitiveKind::Long));
        assert_eq!(TcKind::WString.primitive(), Some(PrimitiveKind::WString));
        assert_eq!(TcKind::Struct.primitive(), None);
        assert_eq!(TcKind::ObjRef.primitive(), None);
    }
}
