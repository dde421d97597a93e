//! Read-only views of repository nodes.
//!
//! A [`NodeRef`] exposes what every node has plus kind-specific accessors.
//! Capabilities are views rather than supertypes: [`NodeRef::as_container`]
//! yields a [`ContainerRef`] for the root, modules, interfaces and values,
//! and [`NodeRef::as_contained`] yields a [`ContainedRef`] for everything
//! that lives inside a container.
//!
//! The mapping is derived from Java classes and never edited in place, so
//! every mutator on these views fails with [`IrError::ReadOnly`].

use ifr_core::{ConstantValue, DefinitionKind, PrimitiveKind, ScopedName, TypeCode};

use crate::describe::{
    ContainedDescription, Description, FullInterfaceDescription, FullValueDescription,
};
use crate::graph::Graph;
use crate::node::{ContainedData, ExportState, Link, Node, NodeBody};
use crate::{IrError, NodeId, ObjectId, ObjectRef, ParameterMode};

/// Any node of a repository.
#[derive(Copy, Clone)]
pub struct NodeRef<'a> {
    graph: &'a Graph,
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(graph: &'a Graph, id: NodeId) -> Option<Self> {
        graph.get(id).map(|node| NodeRef { graph, id, node })
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> DefinitionKind {
        self.node.kind
    }

    /// The key this node is (or would be) activated under.
    #[inline]
    pub fn object_id(&self) -> &'a ObjectId {
        &self.node.object_id
    }

    /// The exported reference; `None` before the finishing pass, after
    /// shutdown, or when export failed.
    #[inline]
    pub fn reference(&self) -> Option<&'a ObjectRef> {
        self.node.reference()
    }

    #[inline]
    pub fn is_exported(&self) -> bool {
        matches!(self.node.export, ExportState::Exported(_))
    }

    pub fn as_container(&self) -> Option<ContainerRef<'a>> {
        self.node.body.container().map(|_| ContainerRef {
            graph: self.graph,
            id: self.id,
        })
    }

    pub fn as_contained(&self) -> Option<ContainedRef<'a>> {
        self.node.contained.as_ref().map(|data| ContainedRef {
            graph: self.graph,
            id: self.id,
            data,
        })
    }

    /// Simple name, for contained nodes.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        self.node.name()
    }

    /// Repository ID, for contained nodes.
    pub fn repository_id(&self) -> Option<&'a str> {
        self.node.contained.as_ref().map(|c| c.id.as_str())
    }

    /// The type this node defines (interfaces, values, boxes, aliases,
    /// exceptions, primitives, sequences) or is typed by (attributes,
    /// constants, value members, operation results).
    pub fn type_code(&self) -> Option<TypeCode> {
        self.node.body.type_code()
    }

    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.node.body {
            NodeBody::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    fn resolved(links: &[Link]) -> Vec<NodeId> {
        links.iter().filter_map(|link| link.resolved).collect()
    }

    /// Resolved base interfaces of an interface.
    pub fn base_interfaces(&self) -> Vec<NodeId> {
        match &self.node.body {
            NodeBody::Interface(body) => Self::resolved(&body.base_interfaces),
            _ => Vec::new(),
        }
    }

    /// Resolved concrete base of a value.
    pub fn base_value(&self) -> Option<NodeId> {
        match &self.node.body {
            NodeBody::Value(body) => body.base_value.as_ref().and_then(|link| link.resolved),
            _ => None,
        }
    }

    pub fn abstract_base_values(&self) -> Vec<NodeId> {
        match &self.node.body {
            NodeBody::Value(body) => Self::resolved(&body.abstract_base_values),
            _ => Vec::new(),
        }
    }

    pub fn supported_interfaces(&self) -> Vec<NodeId> {
        match &self.node.body {
            NodeBody::Value(body) => Self::resolved(&body.supported_interfaces),
            _ => Vec::new(),
        }
    }

    pub fn is_abstract(&self) -> bool {
        match &self.node.body {
            NodeBody::Interface(body) => body.is_abstract,
            NodeBody::Value(body) => body.is_abstract,
            _ => false,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(&self.node.body, NodeBody::Value(body) if body.is_custom)
    }

    /// The definition of the type this node is typed by or wraps: the
    /// original type of an alias or value box, the element of a sequence,
    /// the type of an attribute, constant or value member, the result of an
    /// operation.
    pub fn type_def(&self) -> Option<NodeId> {
        let link = match &self.node.body {
            NodeBody::Alias { original, .. } | NodeBody::ValueBox { original, .. } => original,
            NodeBody::Sequence { element, .. } => element,
            NodeBody::Attribute { ty, .. }
            | NodeBody::Constant { ty, .. }
            | NodeBody::ValueMember { ty, .. } => ty,
            NodeBody::Operation(op) => &op.result,
            _ => return None,
        };
        link.resolved
    }

    /// Parameters of an operation: name, mode and resolved type definition.
    pub fn parameters(&self) -> Vec<(&'a str, ParameterMode, Option<NodeId>)> {
        match &self.node.body {
            NodeBody::Operation(op) => op
                .parameters
                .iter()
                .map(|p| (p.name.as_str(), p.mode, p.ty.resolved))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Exception definitions an operation raises.
    pub fn exceptions(&self) -> &'a [NodeId] {
        match &self.node.body {
            NodeBody::Operation(op) => op.exceptions.as_slice(),
            _ => &[],
        }
    }

    /// The value definition an exception carries.
    pub fn exception_value(&self) -> Option<NodeId> {
        match &self.node.body {
            NodeBody::Exception { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn constant_value(&self) -> Option<&'a ConstantValue> {
        match &self.node.body {
            NodeBody::Constant { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Whether an interface or value is, or inherits from, the definition
    /// with repository ID `id`.
    pub fn is_a(&self, id: &str) -> bool {
        self.graph.is_a(self.id, id)
    }

    /// `InterfaceDef::describe_interface`.
    pub fn describe_interface(&self) -> Option<FullInterfaceDescription> {
        self.graph.describe_interface(self.id)
    }

    /// `ValueDef::describe_value`.
    pub fn describe_value(&self) -> Option<FullValueDescription> {
        self.graph.describe_value(self.id)
    }

    pub fn set_base_interfaces(&self, _bases: &[NodeId]) -> Result<(), IrError> {
        Err(IrError::ReadOnly("change base interfaces"))
    }

    pub fn set_base_value(&self, _base: Option<NodeId>) -> Result<(), IrError> {
        Err(IrError::ReadOnly("change a base value"))
    }

    pub fn set_abstract_base_values(&self, _bases: &[NodeId]) -> Result<(), IrError> {
        Err(IrError::ReadOnly("change abstract base values"))
    }

    pub fn set_supported_interfaces(&self, _interfaces: &[NodeId]) -> Result<(), IrError> {
        Err(IrError::ReadOnly("change supported interfaces"))
    }

    pub fn set_type(&self, _type_def: NodeId) -> Result<(), IrError> {
        Err(IrError::ReadOnly("change a type"))
    }

    /// `IRObject::destroy`.
    pub fn destroy(&self) -> Result<(), IrError> {
        Err(IrError::ReadOnly("destroy a definition"))
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.node.kind)
            .field("name", &self.graph.display_name(self.id))
            .finish()
    }
}

/// The `Container` capability of a composite node.
#[derive(Copy, Clone)]
pub struct ContainerRef<'a> {
    graph: &'a Graph,
    id: NodeId,
}

impl<'a> ContainerRef<'a> {
    /// The root's container view.
    pub(crate) fn root(graph: &'a Graph) -> Self {
        ContainerRef {
            graph,
            id: graph.root(),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Resolve a relative (`A::B`) or absolute (`::A::B`) scoped name.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.graph.lookup_str(self.id, name)
    }

    /// Direct children matching `filter`, in declaration order.
    pub fn contents(&self, filter: DefinitionKind, exclude_inherited: bool) -> Vec<NodeId> {
        self.graph.contents(self.id, filter, exclude_inherited)
    }

    /// Every nested definition named `name`, searching `levels` levels deep
    /// (`-1` for all).
    pub fn lookup_name(
        &self,
        name: &str,
        levels: i32,
        filter: DefinitionKind,
        exclude_inherited: bool,
    ) -> Vec<NodeId> {
        self.graph
            .lookup_name(self.id, name, levels, filter, exclude_inherited)
    }

    /// Matching children with their descriptions, at most `max` (`-1` for
    /// all).
    pub fn describe_contents(
        &self,
        filter: DefinitionKind,
        exclude_inherited: bool,
        max: i32,
    ) -> Vec<ContainedDescription> {
        self.graph
            .describe_contents(self.id, filter, exclude_inherited, max)
    }

    pub fn create_module(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a module"))
    }

    pub fn create_constant(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
        _value: ConstantValue,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a constant"))
    }

    pub fn create_struct(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a struct"))
    }

    pub fn create_union(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a union"))
    }

    pub fn create_enum(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create an enum"))
    }

    pub fn create_alias(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
        _original: NodeId,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create an alias"))
    }

    pub fn create_interface(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
        _bases: &[NodeId],
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create an interface"))
    }

    pub fn create_value(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a value"))
    }

    pub fn create_value_box(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
        _original: NodeId,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a value box"))
    }

    pub fn create_exception(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create an exception"))
    }

    pub fn create_native(
        &self,
        _id: &str,
        _name: &str,
        _version: &str,
    ) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a native type"))
    }
}

/// The `Contained` capability of a node inside a container.
#[derive(Copy, Clone)]
pub struct ContainedRef<'a> {
    graph: &'a Graph,
    id: NodeId,
    data: &'a ContainedData,
}

impl<'a> ContainedRef<'a> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn repository_id(&self) -> &'a str {
        &self.data.id
    }

    pub fn name(&self) -> &'a str {
        &self.data.name
    }

    pub fn version(&self) -> &'a str {
        &self.data.version
    }

    pub fn defined_in(&self) -> NodeId {
        self.data.defined_in
    }

    pub fn absolute_name(&self) -> &'a ScopedName {
        &self.data.absolute_name
    }

    /// The repository the node belongs to.
    pub fn containing_repository(&self) -> NodeId {
        self.graph.root()
    }

    /// `Contained::describe`.
    pub fn describe(&self) -> Option<Description> {
        self.graph.describe(self.id)
    }

    pub fn set_id(&self, _id: &str) -> Result<(), IrError> {
        Err(IrError::ReadOnly("change a repository ID"))
    }

    pub fn set_name(&self, _name: &str) -> Result<(), IrError> {
        Err(IrError::ReadOnly("rename a definition"))
    }

    pub fn set_version(&self, _version: &str) -> Result<(), IrError> {
        Err(IrError::ReadOnly("change a version"))
    }

    pub fn move_to(
        &self,
        _new_container: NodeId,
        _new_name: &str,
        _new_version: &str,
    ) -> Result<(), IrError> {
        Err(IrError::ReadOnly("move a definition"))
    }
}

impl std::fmt::Debug for ContainerRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerRef")
            .field("id", &self.id)
            .field("name", &self.graph.display_name(self.id))
            .finish()
    }
}

impl std::fmt::Debug for ContainedRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainedRef")
            .field("id", &self.id)
            .field("repository_id", &self.data.id)
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
