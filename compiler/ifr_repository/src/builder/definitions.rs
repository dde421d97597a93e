//! Interfaces, values and exceptions.

use std::sync::Arc;

use ifr_core::{
    ClassAnalysis, ClassAnalyzer, ClassFlavor, DefinitionKind, JavaType, StructMember, TypeCode,
    ValueModifier,
};

use super::{package_of, special, RepositoryBuilder};
use crate::container::Container;
use crate::node::{InterfaceBody, Link, NodeBody, ValueBody};
use crate::{IrError, NodeId};

impl<A: ClassAnalyzer> RepositoryBuilder<A> {
    /// Map a remote interface, its base interfaces first.
    pub(super) fn add_interface(&mut self, analysis: &ClassAnalysis) -> Result<NodeId, IrError> {
        if let Some(&node) = self.interfaces.get(&analysis.java_name) {
            return Ok(node);
        }

        let mut bases = Vec::with_capacity(analysis.base_interfaces.len());
        for base in &analysis.base_interfaces {
            let base = self.analyze_as(analysis, base, DefinitionKind::Interface)?;
            let node = self.add_interface(&base)?;
            bases.push(Link::to_id(
                self.repository_id_of(node),
                DefinitionKind::Interface,
            ));
        }
        // A base may refer back to this interface and map it first.
        if let Some(&node) = self.interfaces.get(&analysis.java_name) {
            return Ok(node);
        }

        let module = self.ensure_package(package_of(&analysis.java_name))?;
        let type_code = TypeCode::ObjRef {
            id: analysis.repository_id.clone(),
            name: analysis.idl_name.clone(),
        };
        let body = NodeBody::Interface(InterfaceBody {
            contents: Container::default(),
            type_code: type_code.clone(),
            base_interfaces: bases,
            is_abstract: false,
        });
        let node = self.graph.create_contained(
            module,
            &analysis.idl_name,
            &analysis.repository_id,
            body,
        )?;
        self.type_codes
            .insert(JavaType::Class(analysis.java_name.clone()), type_code);
        self.interfaces.insert(analysis.java_name.clone(), node);

        self.add_constants(node, analysis)?;
        self.add_attributes(node, analysis)?;
        self.add_operations(node, analysis)?;
        Ok(node)
    }

    /// Map a class or abstract-value interface as a value type, its
    /// superclass, supported interfaces and abstract bases first.
    pub(super) fn add_value(&mut self, analysis: &ClassAnalysis) -> Result<NodeId, IrError> {
        if let Some(&node) = self.values.get(&analysis.java_name) {
            return Ok(node);
        }

        let base_value = match analysis.value_base() {
            Some(superclass) => {
                let base = self.analyzer.analyze(superclass)?;
                let node = self.add_value(&base)?;
                Some(self.repository_id_of(node))
            }
            None => None,
        };

        let mut supported = Vec::with_capacity(analysis.supported_interfaces.len());
        for interface in &analysis.supported_interfaces {
            let interface = self.analyze_as(analysis, interface, DefinitionKind::Interface)?;
            let node = self.add_interface(&interface)?;
            supported.push(Link::to_id(
                self.repository_id_of(node),
                DefinitionKind::Interface,
            ));
        }

        let mut abstract_bases = Vec::with_capacity(analysis.abstract_base_values.len());
        for base in &analysis.abstract_base_values {
            // Marker interfaces map to aliases, not abstract values.
            if special::is_special_case(base) {
                continue;
            }
            let base = self.analyze_as(analysis, base, DefinitionKind::Value)?;
            let node = self.add_value(&base)?;
            abstract_bases.push(Link::to_id(
                self.repository_id_of(node),
                DefinitionKind::Value,
            ));
        }

        if let Some(&node) = self.values.get(&analysis.java_name) {
            return Ok(node);
        }

        let module = self.ensure_package(package_of(&analysis.java_name))?;
        let is_abstract = analysis.flavor == ClassFlavor::AbstractInterface;
        let modifier = if is_abstract {
            ValueModifier::Abstract
        } else if analysis.is_custom {
            ValueModifier::Custom
        } else {
            ValueModifier::None
        };
        let type_code = TypeCode::Value {
            id: analysis.repository_id.clone(),
            name: analysis.idl_name.clone(),
            modifier,
            concrete_base: base_value.clone(),
        };
        let body = NodeBody::Value(ValueBody {
            contents: Container::default(),
            type_code: type_code.clone(),
            is_abstract,
            is_custom: analysis.is_custom,
            is_truncatable: false,
            base_value: base_value.map(|id| Link::to_id(id, DefinitionKind::Value)),
            abstract_base_values: abstract_bases,
            supported_interfaces: supported,
        });
        let node = self.graph.create_contained(
            module,
            &analysis.idl_name,
            &analysis.repository_id,
            body,
        )?;
        self.type_codes
            .insert(JavaType::Class(analysis.java_name.clone()), type_code);
        self.values.insert(analysis.java_name.clone(), node);

        self.add_constants(node, analysis)?;
        self.add_value_members(node, analysis)?;
        self.add_attributes(node, analysis)?;
        self.add_operations(node, analysis)?;
        Ok(node)
    }

    /// Map an exception class: its value type, then the exception
    /// definition that carries it.
    pub(super) fn add_exception(&mut self, analysis: &ClassAnalysis) -> Result<NodeId, IrError> {
        if let Some(&node) = self.exceptions.get(&analysis.java_name) {
            return Ok(node);
        }

        let value = self.add_value(analysis)?;
        if let Some(&node) = self.exceptions.get(&analysis.java_name) {
            return Ok(node);
        }

        let module = self.ensure_package(package_of(&analysis.java_name))?;
        let mapping = analysis.exception_mapping();
        let value_type = self
            .graph
            .node(value)
            .body
            .type_code()
            .ok_or_else(|| IrError::MissingTypeCode(analysis.java_name.clone()))?;
        let type_code = TypeCode::Except {
            id: mapping.repository_id.clone(),
            name: mapping.idl_name.clone(),
            members: vec![StructMember {
                name: "value".to_owned(),
                ty: value_type,
            }],
        };
        let node = self.graph.create_contained(
            module,
            &mapping.idl_name,
            &mapping.repository_id,
            NodeBody::Exception { type_code, value },
        )?;
        self.exceptions.insert(analysis.java_name.clone(), node);
        Ok(node)
    }

    /// Analyse a supertype of `referrer` that must map to a definition of
    /// kind `expected`.
    fn analyze_as(
        &self,
        referrer: &ClassAnalysis,
        class: &str,
        expected: DefinitionKind,
    ) -> Result<Arc<ClassAnalysis>, IrError> {
        let analysis = self.analyzer.analyze(class)?;
        let found = match analysis.flavor {
            ClassFlavor::RemoteInterface => DefinitionKind::Interface,
            ClassFlavor::AbstractInterface | ClassFlavor::Class => DefinitionKind::Value,
        };
        if found != expected {
            return Err(IrError::WrongKind {
                referrer: referrer.java_name.clone(),
                id: analysis.repository_id.clone(),
                expected,
                found,
            });
        }
        Ok(analysis)
    }
}
