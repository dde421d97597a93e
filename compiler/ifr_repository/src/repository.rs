//! The finished, immutable repository.
//!
//! A [`Repository`] is what [`RepositoryBuilder::finish_build`] returns:
//! every link resolved, every node exported. It answers the `Repository`
//! and `Container` queries of the root and hands out views of any node.
//!
//! [`RepositoryBuilder::finish_build`]: crate::RepositoryBuilder::finish_build

use ifr_core::{DefinitionKind, PrimitiveKind};

use crate::describe::{ContainedDescription, Description};
use crate::graph::Graph;
use crate::view::{ContainerRef, NodeRef};
use crate::{IrError, NodeId, ObjectRef, RepositoryConfig};

/// A finished Interface Repository.
pub struct Repository {
    graph: Graph,
    shut_down: bool,
}

impl Repository {
    pub(crate) fn new(graph: Graph) -> Self {
        Repository {
            graph,
            shut_down: false,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.graph.root()
    }

    /// The root's exported reference; `None` after shutdown or when the root
    /// failed to export.
    pub fn reference(&self) -> Option<&ObjectRef> {
        self.graph.node(self.graph.root()).reference()
    }

    #[inline]
    pub fn config(&self) -> &RepositoryConfig {
        self.graph.config()
    }

    /// A view of `id`; `None` for handles of another repository.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        NodeRef::new(&self.graph, id)
    }

    /// The root's `Container` capability.
    pub fn as_container(&self) -> ContainerRef<'_> {
        ContainerRef::root(&self.graph)
    }

    /// `Repository::lookup_id`: the definition with repository ID `id`.
    ///
    /// Reserved base-type IDs and malformed IDs find nothing.
    pub fn lookup_id(&self, id: &str) -> Option<NodeId> {
        let found = self.graph.lookup_id(id);
        tracing::trace!(id, found = found.is_some(), "lookup_id");
        found
    }

    /// Resolve a scoped name from the root.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.graph.lookup_str(self.graph.root(), name)
    }

    pub fn contents(&self, filter: DefinitionKind, exclude_inherited: bool) -> Vec<NodeId> {
        self.graph
            .contents(self.graph.root(), filter, exclude_inherited)
    }

    pub fn lookup_name(
        &self,
        name: &str,
        levels: i32,
        filter: DefinitionKind,
        exclude_inherited: bool,
    ) -> Vec<NodeId> {
        self.graph
            .lookup_name(self.graph.root(), name, levels, filter, exclude_inherited)
    }

    pub fn describe_contents(
        &self,
        filter: DefinitionKind,
        exclude_inherited: bool,
        max: i32,
    ) -> Vec<ContainedDescription> {
        self.graph
            .describe_contents(self.graph.root(), filter, exclude_inherited, max)
    }

    /// `Contained::describe` of any contained node.
    pub fn describe(&self, id: NodeId) -> Option<Description> {
        self.graph.get(id)?;
        self.graph.describe(id)
    }

    /// `Repository::get_primitive`: the pre-seeded definition of `kind`.
    pub fn get_primitive(&self, kind: PrimitiveKind) -> Option<NodeId> {
        self.graph.primitive(kind)
    }

    pub fn create_string(&self, _bound: u32) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a string type"))
    }

    pub fn create_wstring(&self, _bound: u32) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a wstring type"))
    }

    pub fn create_sequence(&self, _bound: u32, _element: NodeId) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a sequence type"))
    }

    pub fn create_array(&self, _length: u32, _element: NodeId) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create an array type"))
    }

    pub fn create_fixed(&self, _digits: u16, _scale: i16) -> Result<NodeId, IrError> {
        Err(IrError::ReadOnly("create a fixed type"))
    }

    /// Number of nodes, including the root, primitives and sequences.
    #[inline]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.len() == 0
    }

    /// Every node, root first, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.graph
            .ids()
            .filter_map(move |id| NodeRef::new(&self.graph, id))
    }

    /// Whether every reference between nodes resolved to a node of this
    /// repository.
    pub fn is_resolved(&self) -> bool {
        self.graph.is_resolved()
    }

    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Unexport every node. Later calls do nothing.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.graph.len()))]
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.graph.shutdown();
        self.shut_down = true;
        tracing::debug!("repository shut down");
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("root", &self.graph.root())
            .field("nodes", &self.graph.len())
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Repository;

    #[test]
    fn repository_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Repository>();
    }
}
