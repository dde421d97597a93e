//! Description records returned by `describe` and friends.
//!
//! Field order follows the OMG Interface Repository structs so that a
//! wire adapter can marshal them member by member. Repository IDs of
//! referenced definitions are kept as strings, exactly as the OMG records
//! carry them; `defined_in` is empty for definitions at the root.

use ifr_core::{ConstantValue, DefinitionKind, TypeCode};

use crate::{AttributeMode, NodeId, ObjectRef, OperationMode, ParameterMode, Visibility};

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub base_interfaces: Vec<String>,
    pub is_abstract: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueDescription {
    pub name: String,
    pub id: String,
    pub is_abstract: bool,
    pub is_custom: bool,
    pub defined_in: String,
    pub version: String,
    pub supported_interfaces: Vec<String>,
    pub abstract_base_values: Vec<String>,
    pub is_truncatable: bool,
    pub base_value: Option<String>,
}

/// Description of a type definition (alias, value box).
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub type_code: TypeCode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttributeDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub type_code: TypeCode,
    pub mode: AttributeMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterDescription {
    pub name: String,
    pub type_code: TypeCode,
    /// Reference to the parameter's type definition, once exported.
    pub type_def: Option<ObjectRef>,
    pub mode: ParameterMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExceptionDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub type_code: TypeCode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub result: TypeCode,
    pub mode: OperationMode,
    pub contexts: Vec<String>,
    pub parameters: Vec<ParameterDescription>,
    pub exceptions: Vec<ExceptionDescription>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstantDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub type_code: TypeCode,
    pub value: ConstantValue,
}

/// Description of a value member (`CORBA::ValueMember`).
#[derive(Clone, Debug, PartialEq)]
pub struct ValueMemberDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub type_code: TypeCode,
    pub type_def: Option<ObjectRef>,
    pub access: Visibility,
}

/// The kind-specific payload of a [`Description`].
#[derive(Clone, Debug, PartialEq)]
pub enum DescriptionValue {
    Module(ModuleDescription),
    Interface(InterfaceDescription),
    Value(ValueDescription),
    Type(TypeDescription),
    Attribute(AttributeDescription),
    Operation(OperationDescription),
    Constant(ConstantDescription),
    Exception(ExceptionDescription),
    ValueMember(ValueMemberDescription),
}

impl DescriptionValue {
    /// Simple name of the described definition.
    pub fn name(&self) -> &str {
        match self {
            DescriptionValue::Module(d) => &d.name,
            DescriptionValue::Interface(d) => &d.name,
            DescriptionValue::Value(d) => &d.name,
            DescriptionValue::Type(d) => &d.name,
            DescriptionValue::Attribute(d) => &d.name,
            DescriptionValue::Operation(d) => &d.name,
            DescriptionValue::Constant(d) => &d.name,
            DescriptionValue::Exception(d) => &d.name,
            DescriptionValue::ValueMember(d) => &d.name,
        }
    }

    /// Repository ID of the described definition.
    pub fn id(&self) -> &str {
        match self {
            DescriptionValue::Module(d) => &d.id,
            DescriptionValue::Interface(d) => &d.id,
            DescriptionValue::Value(d) => &d.id,
            DescriptionValue::Type(d) => &d.id,
            DescriptionValue::Attribute(d) => &d.id,
            DescriptionValue::Operation(d) => &d.id,
            DescriptionValue::Constant(d) => &d.id,
            DescriptionValue::Exception(d) => &d.id,
            DescriptionValue::ValueMember(d) => &d.id,
        }
    }
}

/// `Contained::Description`.
#[derive(Clone, Debug, PartialEq)]
pub struct Description {
    pub kind: DefinitionKind,
    pub value: DescriptionValue,
}

/// `Container::Description`: a child paired with its description.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainedDescription {
    pub contained: NodeId,
    pub kind: DefinitionKind,
    pub value: DescriptionValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FullInterfaceDescription {
    pub name: String,
    pub id: String,
    pub defined_in: String,
    pub version: String,
    pub operations: Vec<OperationDescription>,
    pub attributes: Vec<AttributeDescription>,
    pub base_interfaces: Vec<String>,
    pub type_code: TypeCode,
    pub is_abstract: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FullValueDescription {
    pub name: String,
    pub id: String,
    pub is_abstract: bool,
    pub is_custom: bool,
    pub defined_in: String,
    pub version: String,
    pub operations: Vec<OperationDescription>,
    pub attributes: Vec<AttributeDescription>,
    pub members: Vec<ValueMemberDescription>,
    pub supported_interfaces: Vec<String>,
    pub abstract_base_values: Vec<String>,
    pub is_truncatable: bool,
    pub base_value: Option<String>,
    pub type_code: TypeCode,
}
