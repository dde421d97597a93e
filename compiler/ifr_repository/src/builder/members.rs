//! Constants, attributes, operations and value members.
//!
//! Member IDs are derived from the container's ID, so every member
//! round-trips through scoped-name lookup.

use ifr_core::{ids, ClassAnalysis, ClassAnalyzer, JavaType};
use smallvec::SmallVec;

use super::RepositoryBuilder;
use crate::node::{Link, NodeBody, OperationBody, Parameter};
use crate::{AttributeMode, IrError, NodeId, OperationMode, ParameterMode, Visibility};

impl<A: ClassAnalyzer> RepositoryBuilder<A> {
    pub(super) fn add_constants(
        &mut self,
        container: NodeId,
        analysis: &ClassAnalysis,
    ) -> Result<(), IrError> {
        let container_id = self.repository_id_of(container);
        for constant in &analysis.constants {
            let body = NodeBody::Constant {
                ty: Link::to_type(constant.value.type_code()),
                value: constant.value.clone(),
            };
            self.graph.create_contained(
                container,
                &constant.idl_name,
                &ids::member_id(&container_id, &constant.idl_name),
                body,
            )?;
        }
        Ok(())
    }

    pub(super) fn add_attributes(
        &mut self,
        container: NodeId,
        analysis: &ClassAnalysis,
    ) -> Result<(), IrError> {
        let container_id = self.repository_id_of(container);
        for attribute in &analysis.attributes {
            let ty = self.type_code_of(&JavaType::parse(&attribute.java_type)?)?;
            let mode = if attribute.read_only {
                AttributeMode::ReadOnly
            } else {
                AttributeMode::Normal
            };
            self.graph.create_contained(
                container,
                &attribute.idl_name,
                &ids::member_id(&container_id, &attribute.idl_name),
                NodeBody::Attribute {
                    ty: Link::to_type(ty),
                    mode,
                },
            )?;
        }
        Ok(())
    }

    pub(super) fn add_operations(
        &mut self,
        container: NodeId,
        analysis: &ClassAnalysis,
    ) -> Result<(), IrError> {
        let container_id = self.repository_id_of(container);
        for operation in &analysis.operations {
            let result = self.type_code_of(&JavaType::parse(&operation.return_type)?)?;

            let mut parameters = Vec::with_capacity(operation.parameters.len());
            for param in &operation.parameters {
                let ty = self.type_code_of(&JavaType::parse(&param.java_type)?)?;
                parameters.push(Parameter {
                    name: param.idl_name.clone(),
                    mode: ParameterMode::In,
                    ty: Link::to_type(ty),
                });
            }

            let mut exceptions = SmallVec::with_capacity(operation.exceptions.len());
            for exception in &operation.exceptions {
                let exception = self.analyzer.analyze(exception)?;
                exceptions.push(self.add_exception(&exception)?);
            }

            let body = NodeBody::Operation(OperationBody {
                result: Link::to_type(result),
                mode: OperationMode::Normal,
                parameters,
                exceptions,
            });
            self.graph.create_contained(
                container,
                &operation.idl_name,
                &ids::member_id(&container_id, &operation.idl_name),
                body,
            )?;
        }
        Ok(())
    }

    pub(super) fn add_value_members(
        &mut self,
        container: NodeId,
        analysis: &ClassAnalysis,
    ) -> Result<(), IrError> {
        let container_id = self.repository_id_of(container);
        for member in &analysis.members {
            let ty = self.type_code_of(&JavaType::parse(&member.java_type)?)?;
            let access = if member.is_public {
                Visibility::Public
            } else {
                Visibility::Private
            };
            self.graph.create_contained(
                container,
                &member.idl_name,
                &ids::member_id(&container_id, &member.idl_name),
                NodeBody::ValueMember {
                    ty: Link::to_type(ty),
                    access,
                },
            )?;
        }
        Ok(())
    }
}
