//! The type-mapping driver.
//!
//! [`RepositoryBuilder`] maps Java classes into repository definitions, one
//! class at a time, and finishes into an immutable [`Repository`].
//!
//! # Design
//!
//! Mapping a class follows a fixed decision order:
//!
//! 1. Primitive: nothing to do, primitives are pre-seeded
//! 2. Array: boxed, one value box per dimension
//! 3. Remote interface: an interface definition
//! 4. Other interface: an abstract value
//! 5. Exception: a value, then an exception carrying it
//! 6. Anything else: a concrete value
//!
//! Every kind has a memo keyed by Java name, checked before anything is
//! created, so mapping is idempotent. A definition is registered in its memo
//! as soon as it is added to its module and before its members are mapped,
//! which lets members refer back to their own container.
//!
//! Cross references are stored as [`Link`](crate::node::Link)s and only
//! resolved by [`RepositoryBuilder::finish_build`].

mod arrays;
mod definitions;
mod members;
mod packages;
mod special;

use std::sync::Arc;

use ifr_core::{ClassAnalyzer, ClassFlavor, JavaType, TypeCode};
use rustc_hash::FxHashMap;

use crate::graph::Graph;
use crate::view::NodeRef;
use crate::{IrError, NodeId, ObjectAdapter, Repository, RepositoryConfig};

use special::SpecialCases;

/// Builds a repository from class analyses.
pub struct RepositoryBuilder<A> {
    graph: Graph,
    analyzer: A,
    /// Type codes of every mapped Java type.
    type_codes: FxHashMap<JavaType, TypeCode>,
    interfaces: FxHashMap<String, NodeId>,
    values: FxHashMap<String, NodeId>,
    exceptions: FxHashMap<String, NodeId>,
    arrays: FxHashMap<JavaType, NodeId>,
    special: SpecialCases,
}

impl<A: ClassAnalyzer> RepositoryBuilder<A> {
    pub fn new(config: RepositoryConfig, analyzer: A, adapter: Arc<dyn ObjectAdapter>) -> Self {
        RepositoryBuilder {
            graph: Graph::new(config, adapter),
            analyzer,
            type_codes: FxHashMap::default(),
            interfaces: FxHashMap::default(),
            values: FxHashMap::default(),
            exceptions: FxHashMap::default(),
            arrays: FxHashMap::default(),
            special: SpecialCases::default(),
        }
    }

    /// The repository root.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.graph.root()
    }

    /// Number of nodes created so far, including the root and primitives.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.len()
    }

    /// Inspect a node before the build is finished.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        NodeRef::new(&self.graph, id)
    }

    /// Map the class named `class` (in `Class.getName()` form).
    ///
    /// Returns the definition the class maps to; `None` for primitives.
    #[tracing::instrument(level = "debug", skip_all, fields(class = %class))]
    pub fn map_class(&mut self, class: &str) -> Result<Option<NodeId>, IrError> {
        let ty = JavaType::parse(class)?;
        self.map_type(&ty)
    }

    /// Map a Java type. See [`map_class`](Self::map_class).
    pub fn map_type(&mut self, ty: &JavaType) -> Result<Option<NodeId>, IrError> {
        match ty {
            JavaType::Primitive(_) => Ok(None),
            JavaType::Array(_) => self.add_array(ty).map(Some),
            JavaType::Class(name) => self.add_class(name).map(Some),
        }
    }

    /// The IDL type code of a Java type, mapping the type first if needed.
    pub fn type_code_of(&mut self, ty: &JavaType) -> Result<TypeCode, IrError> {
        if let JavaType::Primitive(primitive) = ty {
            return Ok(primitive.type_code());
        }
        if let Some(type_code) = self.type_codes.get(ty) {
            return Ok(type_code.clone());
        }
        self.map_type(ty)?;
        self.type_codes
            .get(ty)
            .cloned()
            .ok_or_else(|| IrError::MissingTypeCode(ty.to_string()))
    }

    /// Add `child` to `container` under `name`.
    ///
    /// Fails for handles from another repository, for a child created for a
    /// different container and for a name already in use.
    pub fn add(&mut self, container: NodeId, name: &str, child: NodeId) -> Result<(), IrError> {
        self.graph.add(container, name, child)
    }

    /// Run the finishing pass: resolve every link and export every node.
    ///
    /// Consumes the builder, so no class can be mapped afterwards.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.graph.len()))]
    pub fn finish_build(mut self) -> Result<Repository, IrError> {
        let root = self.graph.root();
        self.graph.all_done(root)?;
        tracing::debug!("repository finished");
        Ok(Repository::new(self.graph))
    }

    fn add_class(&mut self, name: &str) -> Result<NodeId, IrError> {
        if let Some(node) = self.special_case(name)? {
            return Ok(node);
        }
        let analysis = self.analyzer.analyze(name)?;
        match analysis.flavor {
            ClassFlavor::RemoteInterface => self.add_interface(&analysis),
            ClassFlavor::AbstractInterface => self.add_value(&analysis),
            ClassFlavor::Class if self.analyzer.is_exception(name)? => {
                self.add_exception(&analysis)
            }
            ClassFlavor::Class => self.add_value(&analysis),
        }
    }

    /// Repository ID of a contained node; empty for the root.
    fn repository_id_of(&self, node: NodeId) -> String {
        self.graph
            .node(node)
            .contained
            .as_ref()
            .map_or_else(String::new, |c| c.id.clone())
    }
}

/// Package of a fully qualified class name; empty for the default package.
fn package_of(class: &str) -> &str {
    class.rsplit_once('.').map_or("", |(package, _)| package)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
