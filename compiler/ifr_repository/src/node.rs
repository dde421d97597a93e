//! Repository nodes and their kind-specific payloads.
//!
//! Nodes live in the [`Graph`](crate::graph::Graph) arena and refer to one
//! another by [`NodeId`]. References that may point forward in construction
//! order are stored as [`Link`]s: a target (repository ID or type code) plus
//! the node it resolves to, filled in by the finishing pass.
//!
//! # Design
//!
//! - `NodeId` carries the owning registry's tag, so a handle from one
//!   registry is never silently accepted by another
//! - Containment is a [`Container`] owned by each composite body, not a
//!   shared supertype
//! - Payloads are plain data; behaviour lives on the graph

use std::fmt;

use ifr_core::{ConstantValue, DefinitionKind, PrimitiveKind, ScopedName, TypeCode};
use smallvec::SmallVec;

use crate::container::Container;
use crate::{ObjectId, ObjectRef};

/// Handle to a node in one repository.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    repository: u32,
    index: u32,
}

impl NodeId {
    #[inline]
    pub(crate) const fn new(repository: u32, index: u32) -> Self {
        NodeId { repository, index }
    }

    #[inline]
    pub(crate) const fn repository(self) -> u32 {
        self.repository
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.repository, self.index)
    }
}

/// Export state machine of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExportState {
    Constructed,
    Exported(ObjectRef),
    Unexported,
}

/// Identity of a node that lives inside a container.
#[derive(Clone, Debug)]
pub(crate) struct ContainedData {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) defined_in: NodeId,
    /// Computed once, when the node is created.
    pub(crate) absolute_name: ScopedName,
}

/// What a link points at before it is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    /// A definition named by repository ID, which must be of `expected` kind.
    Id {
        id: String,
        expected: DefinitionKind,
    },
    /// The definition of an IDL type.
    Type(TypeCode),
}

/// A reference that is resolved by the finishing pass.
#[derive(Clone, Debug)]
pub(crate) struct Link {
    pub(crate) target: Target,
    pub(crate) resolved: Option<NodeId>,
}

impl Link {
    pub(crate) fn to_id(id: impl Into<String>, expected: DefinitionKind) -> Self {
        Link {
            target: Target::Id {
                id: id.into(),
                expected,
            },
            resolved: None,
        }
    }

    pub(crate) fn to_type(type_code: TypeCode) -> Self {
        Link {
            target: Target::Type(type_code),
            resolved: None,
        }
    }

    pub(crate) fn type_code(&self) -> Option<&TypeCode> {
        match &self.target {
            Target::Type(tc) => Some(tc),
            Target::Id { .. } => None,
        }
    }

    pub(crate) fn id(&self) -> Option<&str> {
        match &self.target {
            Target::Id { id, .. } => Some(id),
            Target::Type(tc) => tc.id(),
        }
    }
}

/// Attribute access mode (`ATTR_*`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttributeMode {
    #[default]
    Normal,
    ReadOnly,
}

/// Operation invocation mode (`OP_*`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OperationMode {
    #[default]
    Normal,
    Oneway,
}

/// Parameter passing mode (`PARAM_*`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParameterMode {
    #[default]
    In,
    Out,
    InOut,
}

/// Value member visibility (`PRIVATE_MEMBER`, `PUBLIC_MEMBER`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

#[derive(Clone, Debug)]
pub(crate) struct InterfaceBody {
    pub(crate) contents: Container,
    pub(crate) type_code: TypeCode,
    pub(crate) base_interfaces: Vec<Link>,
    pub(crate) is_abstract: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct ValueBody {
    pub(crate) contents: Container,
    pub(crate) type_code: TypeCode,
    pub(crate) is_abstract: bool,
    pub(crate) is_custom: bool,
    pub(crate) is_truncatable: bool,
    pub(crate) base_value: Option<Link>,
    pub(crate) abstract_base_values: Vec<Link>,
    pub(crate) supported_interfaces: Vec<Link>,
}

#[derive(Clone, Debug)]
pub(crate) struct Parameter {
    pub(crate) name: String,
    pub(crate) mode: ParameterMode,
    pub(crate) ty: Link,
}

#[derive(Clone, Debug)]
pub(crate) struct OperationBody {
    pub(crate) result: Link,
    pub(crate) mode: OperationMode,
    pub(crate) parameters: Vec<Parameter>,
    /// Exception definitions, in declaration order.
    pub(crate) exceptions: SmallVec<[NodeId; 2]>,
}

/// Kind-specific payload of a node.
#[derive(Clone, Debug)]
pub(crate) enum NodeBody {
    Repository(Container),
    Module(Container),
    Interface(InterfaceBody),
    Value(ValueBody),
    ValueBox {
        type_code: TypeCode,
        original: Link,
    },
    Alias {
        type_code: TypeCode,
        original: Link,
    },
    Attribute {
        ty: Link,
        mode: AttributeMode,
    },
    Operation(OperationBody),
    Constant {
        ty: Link,
        value: ConstantValue,
    },
    Exception {
        type_code: TypeCode,
        /// The value type the exception carries.
        value: NodeId,
    },
    ValueMember {
        ty: Link,
        access: Visibility,
    },
    Primitive(PrimitiveKind),
    Sequence {
        bound: u32,
        element: Link,
    },
}

impl NodeBody {
    pub(crate) fn kind(&self) -> DefinitionKind {
        match self {
            NodeBody::Repository(_) => DefinitionKind::Repository,
            NodeBody::Module(_) => DefinitionKind::Module,
            NodeBody::Interface(_) => DefinitionKind::Interface,
            NodeBody::Value(_) => DefinitionKind::Value,
            NodeBody::ValueBox { .. } => DefinitionKind::ValueBox,
            NodeBody::Alias { .. } => DefinitionKind::Alias,
            NodeBody::Attribute { .. } => DefinitionKind::Attribute,
            NodeBody::Operation(_) => DefinitionKind::Operation,
            NodeBody::Constant { .. } => DefinitionKind::Constant,
            NodeBody::Exception { .. } => DefinitionKind::Exception,
            NodeBody::ValueMember { .. } => DefinitionKind::ValueMember,
            NodeBody::Primitive(_) => DefinitionKind::Primitive,
            NodeBody::Sequence { .. } => DefinitionKind::Sequence,
        }
    }

    pub(crate) fn container(&self) -> Option<&Container> {
        match self {
            NodeBody::Repository(contents) | NodeBody::Module(contents) => Some(contents),
            NodeBody::Interface(body) => Some(&body.contents),
            NodeBody::Value(body) => Some(&body.contents),
            _ => None,
        }
    }

    pub(crate) fn container_mut(&mut self) -> Option<&mut Container> {
        match self {
            NodeBody::Repository(contents) | NodeBody::Module(contents) => Some(contents),
            NodeBody::Interface(body) => Some(&mut body.contents),
            NodeBody::Value(body) => Some(&mut body.contents),
            _ => None,
        }
    }

    /// The IDL type this node defines or is typed by.
    pub(crate) fn type_code(&self) -> Option<TypeCode> {
        match self {
            NodeBody::Interface(InterfaceBody { type_code, .. })
            | NodeBody::Value(ValueBody { type_code, .. })
            | NodeBody::ValueBox { type_code, .. }
            | NodeBody::Alias { type_code, .. }
            | NodeBody::Exception { type_code, .. } => Some(type_code.clone()),
            NodeBody::Attribute { ty, .. }
            | NodeBody::Constant { ty, .. }
            | NodeBody::ValueMember { ty, .. } => ty.type_code().cloned(),
            NodeBody::Operation(op) => op.result.type_code().cloned(),
            NodeBody::Primitive(kind) => Some(TypeCode::primitive(*kind)),
            NodeBody::Sequence { bound, element } => {
                element.type_code().map(|element| TypeCode::Sequence {
                    bound: *bound,
                    element: Box::new(element.clone()),
                })
            }
            NodeBody::Repository(_) | NodeBody::Module(_) => None,
        }
    }

    /// Every link of this node, in a stable order.
    pub(crate) fn links(&self) -> Vec<&Link> {
        match self {
            NodeBody::Interface(body) => body.base_interfaces.iter().collect(),
            NodeBody::Value(body) => body
                .base_value
                .iter()
                .chain(&body.abstract_base_values)
                .chain(&body.supported_interfaces)
                .collect(),
            NodeBody::ValueBox { original, .. } | NodeBody::Alias { original, .. } => {
                vec![original]
            }
            NodeBody::Attribute { ty, .. }
            | NodeBody::Constant { ty, .. }
            | NodeBody::ValueMember { ty, .. } => vec![ty],
            NodeBody::Operation(op) => std::iter::once(&op.result)
                .chain(op.parameters.iter().map(|p| &p.ty))
                .collect(),
            NodeBody::Sequence { element, .. } => vec![element],
            NodeBody::Repository(_)
            | NodeBody::Module(_)
            | NodeBody::Exception { .. }
            | NodeBody::Primitive(_) => Vec::new(),
        }
    }

    /// Mutable counterpart of [`links`](Self::links), in the same order.
    pub(crate) fn links_mut(&mut self) -> Vec<&mut Link> {
        match self {
            NodeBody::Interface(body) => body.base_interfaces.iter_mut().collect(),
            NodeBody::Value(body) => body
                .base_value
                .iter_mut()
                .chain(&mut body.abstract_base_values)
                .chain(&mut body.supported_interfaces)
                .collect(),
            NodeBody::ValueBox { original, .. } | NodeBody::Alias { original, .. } => {
                vec![original]
            }
            NodeBody::Attribute { ty, .. }
            | NodeBody::Constant { ty, .. }
            | NodeBody::ValueMember { ty, .. } => vec![ty],
            NodeBody::Operation(op) => std::iter::once(&mut op.result)
                .chain(op.parameters.iter_mut().map(|p| &mut p.ty))
                .collect(),
            NodeBody::Sequence { element, .. } => vec![element],
            NodeBody::Repository(_)
            | NodeBody::Module(_)
            | NodeBody::Exception { .. }
            | NodeBody::Primitive(_) => Vec::new(),
        }
    }
}

/// A node of the repository graph.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) kind: DefinitionKind,
    pub(crate) object_id: ObjectId,
    pub(crate) export: ExportState,
    pub(crate) contained: Option<ContainedData>,
    pub(crate) body: NodeBody,
}

impl Node {
    pub(crate) fn new(
        object_id: ObjectId,
        contained: Option<ContainedData>,
        body: NodeBody,
    ) -> Self {
        Node {
            kind: body.kind(),
            object_id,
            export: ExportState::Constructed,
            contained,
            body,
        }
    }

    #[inline]
    pub(crate) fn name(&self) -> Option<&str> {
        self.contained.as_ref().map(|c| c.name.as_str())
    }

    #[inline]
    pub(crate) fn defined_in(&self) -> Option<NodeId> {
        self.contained.as_ref().map(|c| c.defined_in)
    }

    pub(crate) fn reference(&self) -> Option<&ObjectRef> {
        match &self.export {
            ExportState::Exported(reference) => Some(reference),
            ExportState::Constructed | ExportState::Unexported => None,
        }
    }
}
