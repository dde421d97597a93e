//! Building description records from nodes.

use ifr_core::{ids::CORBA_OBJECT_ID, DefinitionKind, TypeCode};

use super::Graph;
use crate::describe::{
    AttributeDescription, ConstantDescription, ContainedDescription, Description,
    DescriptionValue, ExceptionDescription, FullInterfaceDescription, FullValueDescription,
    InterfaceDescription, ModuleDescription, OperationDescription, ParameterDescription,
    TypeDescription, ValueDescription, ValueMemberDescription,
};
use crate::node::{Link, NodeBody, OperationBody};
use crate::{NodeId, ObjectRef};

/// The identity fields every contained description starts with.
struct Header {
    name: String,
    id: String,
    defined_in: String,
    version: String,
}

impl Graph {
    fn header(&self, node: NodeId) -> Option<Header> {
        let contained = self.node(node).contained.as_ref()?;
        let defined_in = self
            .node(contained.defined_in)
            .contained
            .as_ref()
            .map_or_else(String::new, |parent| parent.id.clone());
        Some(Header {
            name: contained.name.clone(),
            id: contained.id.clone(),
            defined_in,
            version: contained.version.clone(),
        })
    }

    fn link_reference(&self, link: &Link) -> Option<ObjectRef> {
        link.resolved
            .and_then(|target| self.node(target).reference().cloned())
    }

    fn link_type(link: &Link) -> TypeCode {
        link.type_code().cloned().unwrap_or(TypeCode::VOID)
    }

    fn link_ids(links: &[Link]) -> Vec<String> {
        links
            .iter()
            .filter_map(|link| link.id().map(str::to_owned))
            .collect()
    }

    /// `Contained::describe` for a local contained node.
    pub(crate) fn describe(&self, node: NodeId) -> Option<Description> {
        let Header {
            name,
            id,
            defined_in,
            version,
        } = self.header(node)?;

        let value = match &self.node(node).body {
            NodeBody::Module(_) => DescriptionValue::Module(ModuleDescription {
                name,
                id,
                defined_in,
                version,
            }),
            NodeBody::Interface(body) => DescriptionValue::Interface(InterfaceDescription {
                name,
                id,
                defined_in,
                version,
                base_interfaces: Self::link_ids(&body.base_interfaces),
                is_abstract: body.is_abstract,
            }),
            NodeBody::Value(body) => DescriptionValue::Value(ValueDescription {
                name,
                id,
                is_abstract: body.is_abstract,
                is_custom: body.is_custom,
                defined_in,
                version,
                supported_interfaces: Self::link_ids(&body.supported_interfaces),
                abstract_base_values: Self::link_ids(&body.abstract_base_values),
                is_truncatable: body.is_truncatable,
                base_value: body
                    .base_value
                    .as_ref()
                    .and_then(|link| link.id().map(str::to_owned)),
            }),
            NodeBody::ValueBox { type_code, .. } | NodeBody::Alias { type_code, .. } => {
                DescriptionValue::Type(TypeDescription {
                    name,
                    id,
                    defined_in,
                    version,
                    type_code: type_code.clone(),
                })
            }
            NodeBody::Attribute { ty, mode } => {
                DescriptionValue::Attribute(AttributeDescription {
                    name,
                    id,
                    defined_in,
                    version,
                    type_code: Self::link_type(ty),
                    mode: *mode,
                })
            }
            NodeBody::Operation(op) => {
                DescriptionValue::Operation(self.describe_operation(
                    Header {
                        name,
                        id,
                        defined_in,
                        version,
                    },
                    op,
                ))
            }
            NodeBody::Constant { ty, value } => DescriptionValue::Constant(ConstantDescription {
                name,
                id,
                defined_in,
                version,
                type_code: Self::link_type(ty),
                value: value.clone(),
            }),
            NodeBody::Exception { type_code, .. } => {
                DescriptionValue::Exception(ExceptionDescription {
                    name,
                    id,
                    defined_in,
                    version,
                    type_code: type_code.clone(),
                })
            }
            NodeBody::ValueMember { ty, access } => {
                DescriptionValue::ValueMember(ValueMemberDescription {
                    name,
                    id,
                    defined_in,
                    version,
                    type_code: Self::link_type(ty),
                    type_def: self.link_reference(ty),
                    access: *access,
                })
            }
            NodeBody::Repository(_) | NodeBody::Primitive(_) | NodeBody::Sequence { .. } => {
                return None;
            }
        };

        Some(Description {
            kind: self.node(node).kind,
            value,
        })
    }

    fn describe_operation(&self, header: Header, op: &OperationBody) -> OperationDescription {
        let parameters = op
            .parameters
            .iter()
            .map(|param| ParameterDescription {
                name: param.name.clone(),
                type_code: Self::link_type(&param.ty),
                type_def: self.link_reference(&param.ty),
                mode: param.mode,
            })
            .collect();
        let exceptions = op
            .exceptions
            .iter()
            .filter_map(|&exception| match self.describe(exception)?.value {
                DescriptionValue::Exception(description) => Some(description),
                _ => None,
            })
            .collect();

        OperationDescription {
            name: header.name,
            id: header.id,
            defined_in: header.defined_in,
            version: header.version,
            result: Self::link_type(&op.result),
            mode: op.mode,
            contexts: Vec::new(),
            parameters,
            exceptions,
        }
    }

    /// Children matching `filter` with their descriptions, at most `max`
    /// of them (`-1` for all).
    pub(crate) fn describe_contents(
        &self,
        container: NodeId,
        filter: DefinitionKind,
        exclude_inherited: bool,
        max: i32,
    ) -> Vec<ContainedDescription> {
        let limit = if max < 0 {
            usize::MAX
        } else {
            usize::try_from(max).unwrap_or(usize::MAX)
        };
        self.contents(container, filter, exclude_inherited)
            .into_iter()
            .filter_map(|child| {
                let Description { kind, value } = self.describe(child)?;
                Some(ContainedDescription {
                    contained: child,
                    kind,
                    value,
                })
            })
            .take(limit)
            .collect()
    }

    fn member_descriptions<T>(
        &self,
        container: NodeId,
        kind: DefinitionKind,
        pick: impl Fn(DescriptionValue) -> Option<T>,
    ) -> Vec<T> {
        self.contents(container, kind, false)
            .into_iter()
            .filter_map(|child| self.describe(child).and_then(|d| pick(d.value)))
            .collect()
    }

    /// `InterfaceDef::describe_interface`.
    pub(crate) fn describe_interface(&self, node: NodeId) -> Option<FullInterfaceDescription> {
        let NodeBody::Interface(body) = &self.node(node).body else {
            return None;
        };
        let header = self.header(node)?;
        Some(FullInterfaceDescription {
            name: header.name,
            id: header.id,
            defined_in: header.defined_in,
            version: header.version,
            operations: self.member_descriptions(node, DefinitionKind::Operation, |d| match d {
                DescriptionValue::Operation(op) => Some(op),
                _ => None,
            }),
            attributes: self.member_descriptions(node, DefinitionKind::Attribute, |d| match d {
                DescriptionValue::Attribute(attr) => Some(attr),
                _ => None,
            }),
            base_interfaces: Self::link_ids(&body.base_interfaces),
            type_code: body.type_code.clone(),
            is_abstract: body.is_abstract,
        })
    }

    /// `ValueDef::describe_value`.
    pub(crate) fn describe_value(&self, node: NodeId) -> Option<FullValueDescription> {
        let NodeBody::Value(body) = &self.node(node).body else {
            return None;
        };
        let header = self.header(node)?;
        Some(FullValueDescription {
            name: header.name,
            id: header.id,
            is_abstract: body.is_abstract,
            is_custom: body.is_custom,
            defined_in: header.defined_in,
            version: header.version,
            operations: self.member_descriptions(node, DefinitionKind::Operation, |d| match d {
                DescriptionValue::Operation(op) => Some(op),
                _ => None,
            }),
            attributes: self.member_descriptions(node, DefinitionKind::Attribute, |d| match d {
                DescriptionValue::Attribute(attr) => Some(attr),
                _ => None,
            }),
            members: self.member_descriptions(node, DefinitionKind::ValueMember, |d| match d {
                DescriptionValue::ValueMember(member) => Some(member),
                _ => None,
            }),
            supported_interfaces: Self::link_ids(&body.supported_interfaces),
            abstract_base_values: Self::link_ids(&body.abstract_base_values),
            is_truncatable: body.is_truncatable,
            base_value: body
                .base_value
                .as_ref()
                .and_then(|link| link.id().map(str::to_owned)),
            type_code: body.type_code.clone(),
        })
    }

    /// Whether an interface or value is, or inherits from, `interface_id`.
    pub(crate) fn is_a(&self, node: NodeId, interface_id: &str) -> bool {
        let n = self.node(node);
        if n.contained.as_ref().is_some_and(|c| c.id == interface_id) {
            return true;
        }
        let inherited = |links: &[&Link]| {
            links.iter().any(|link| {
                link.id() == Some(interface_id)
                    || link.resolved.is_some_and(|base| self.is_a(base, interface_id))
            })
        };
        match &n.body {
            NodeBody::Interface(_) if interface_id == CORBA_OBJECT_ID => true,
            NodeBody::Interface(_) | NodeBody::Value(_) => inherited(&n.body.links()),
            _ => false,
        }
    }
}
