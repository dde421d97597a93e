//! The node arena and the repository root's bookkeeping.
//!
//! A `Graph` owns every node of one repository, the adapter they are
//! exported through, and the per-registry state the root is responsible
//! for: the anonymous object-ID counter, the pre-seeded primitives and the
//! sequence caches used for boxed arrays.
//!
//! # Design
//!
//! - Index 0 is always the repository root
//! - Anonymous IDs count from 1 and are never reused
//! - Each graph gets a registry tag from a process-wide counter; handles
//!   carrying another tag are foreign

mod describe;
mod finish;
mod lookup;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use ifr_core::ids::DEFAULT_VERSION;
use ifr_core::{PrimitiveKind, ScopedName, TypeCode};
use rustc_hash::FxHashMap;

use crate::container::{Container, InsertError};
use crate::node::{ContainedData, Node, NodeBody};
use crate::{IrError, NodeId, ObjectAdapter, ObjectId, RepositoryConfig};

/// Source of registry tags.
static NEXT_REPOSITORY: AtomicU32 = AtomicU32::new(1);

pub(crate) struct Graph {
    tag: u32,
    config: RepositoryConfig,
    adapter: Arc<dyn ObjectAdapter>,
    nodes: Vec<Node>,
    /// Nodes keyed `prefix#n`; entry `n - 1` holds number `n`.
    anonymous: Vec<NodeId>,
    primitives: FxHashMap<PrimitiveKind, NodeId>,
    /// Sequence definitions by their type code.
    sequences: FxHashMap<TypeCode, NodeId>,
    /// Boxed arrays by their `RMI:[` repository ID.
    boxed_arrays: FxHashMap<String, NodeId>,
}

impl Graph {
    pub(crate) fn new(config: RepositoryConfig, adapter: Arc<dyn ObjectAdapter>) -> Self {
        let tag = NEXT_REPOSITORY.fetch_add(1, Ordering::Relaxed);
        let root = Node::new(
            ObjectId::root(&config.object_id_prefix),
            None,
            NodeBody::Repository(Container::default()),
        );
        let mut graph = Graph {
            tag,
            config,
            adapter,
            nodes: vec![root],
            anonymous: Vec::new(),
            primitives: FxHashMap::default(),
            sequences: FxHashMap::default(),
            boxed_arrays: FxHashMap::default(),
        };
        for kind in PrimitiveKind::SEEDED {
            let id = graph.push_anonymous(NodeBody::Primitive(kind));
            graph.primitives.insert(kind, id);
        }
        graph
    }

    #[inline]
    pub(crate) fn root(&self) -> NodeId {
        NodeId::new(self.tag, 0)
    }

    #[inline]
    pub(crate) fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` was issued by this graph.
    #[inline]
    pub(crate) fn owns(&self, id: NodeId) -> bool {
        id.repository() == self.tag && id.index() < self.nodes.len()
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        if id.repository() == self.tag {
            self.nodes.get(id.index())
        } else {
            None
        }
    }

    /// The node behind a handle this graph issued.
    ///
    /// Handles are only minted by `push`, so a local handle is always in
    /// range; foreign handles must go through [`get`](Self::get).
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        debug_assert!(self.owns(id), "foreign node handle {id}");
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        debug_assert!(self.owns(id), "foreign node handle {id}");
        &mut self.nodes[id.index()]
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|index| NodeId::new(self.tag, index_u32(index)))
    }

    #[inline]
    pub(crate) fn primitive(&self, kind: PrimitiveKind) -> Option<NodeId> {
        self.primitives.get(&kind).copied()
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn anonymous(&self) -> &[NodeId] {
        &self.anonymous
    }

    #[inline]
    pub(crate) fn sequence(&self, type_code: &TypeCode) -> Option<NodeId> {
        self.sequences.get(type_code).copied()
    }

    #[inline]
    pub(crate) fn boxed_array(&self, id: &str) -> Option<NodeId> {
        self.boxed_arrays.get(id).copied()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.tag, index_u32(self.nodes.len()));
        self.nodes.push(node);
        id
    }

    /// Create a node without a repository ID, keyed by the next anonymous
    /// number.
    pub(crate) fn push_anonymous(&mut self, body: NodeBody) -> NodeId {
        let number = index_u32(self.anonymous.len() + 1);
        let object_id = ObjectId::anonymous(&self.config.object_id_prefix, number);
        let id = self.push(Node::new(object_id, None, body));
        self.anonymous.push(id);
        id
    }

    /// Record a boxed array dimension: its sequence under the sequence's
    /// type code and its value box under the array's repository ID.
    pub(crate) fn register_sequence(
        &mut self,
        array_id: &str,
        sequence_tc: TypeCode,
        sequence: NodeId,
        value_box: NodeId,
    ) {
        self.sequences.insert(sequence_tc, sequence);
        self.boxed_arrays.insert(array_id.to_owned(), value_box);
    }

    /// The absolute scoped name of a node; the root's is empty.
    pub(crate) fn absolute_name(&self, id: NodeId) -> ScopedName {
        self.node(id)
            .contained
            .as_ref()
            .map_or_else(ScopedName::root, |c| c.absolute_name.clone())
    }

    /// A printable name for messages.
    pub(crate) fn display_name(&self, id: NodeId) -> String {
        match &self.node(id).contained {
            Some(contained) => contained.absolute_name.to_string(),
            None if id == self.root() => "::".to_owned(),
            None => self.node(id).object_id.to_string(),
        }
    }

    /// Create a contained node named `name` inside `container` and add it.
    pub(crate) fn create_contained(
        &mut self,
        container: NodeId,
        name: &str,
        id: &str,
        body: NodeBody,
    ) -> Result<NodeId, IrError> {
        let parent = self.checked_container(container)?;
        if parent.get(name).is_some() {
            return Err(IrError::DuplicateName {
                container: self.display_name(container),
                name: name.to_owned(),
            });
        }

        let contained = ContainedData {
            id: id.to_owned(),
            name: name.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            defined_in: container,
            absolute_name: self.absolute_name(container).child(name),
        };
        let object_id = ObjectId::contained(&self.config.object_id_prefix, id);
        let node = Node::new(object_id, Some(contained), body);
        tracing::debug!(
            kind = %node.kind,
            id,
            container = %self.display_name(container),
            "created"
        );

        let child = self.push(node);
        self.add(container, name, child)?;
        Ok(child)
    }

    /// Add `child` to `container` under `name`.
    ///
    /// The child must come from this registry and must have been created for
    /// this container.
    pub(crate) fn add(
        &mut self,
        container: NodeId,
        name: &str,
        child: NodeId,
    ) -> Result<(), IrError> {
        if !self.owns(container) || !self.owns(child) {
            return Err(IrError::ForeignRepository);
        }
        self.checked_container(container)?;
        if self.node(child).defined_in() != Some(container) {
            return Err(IrError::NotDefinedIn {
                container: self.display_name(container),
                name: name.to_owned(),
            });
        }

        let container_name = self.display_name(container);
        let Some(contents) = self.node_mut(container).body.container_mut() else {
            return Err(IrError::NotAContainer(container_name));
        };
        contents.insert(name, child).map_err(|err| match err {
            InsertError::NameTaken | InsertError::AlreadyPresent => IrError::DuplicateName {
                container: container_name,
                name: name.to_owned(),
            },
        })
    }

    /// The container of a local composite node.
    pub(crate) fn contents_of(&self, id: NodeId) -> Option<&Container> {
        self.get(id).and_then(|node| node.body.container())
    }

    fn checked_container(&self, id: NodeId) -> Result<&Container, IrError> {
        if !self.owns(id) {
            return Err(IrError::ForeignRepository);
        }
        self.node(id)
            .body
            .container()
            .ok_or_else(|| IrError::NotAContainer(self.display_name(id)))
    }
}

/// Arena indices are `u32`; a repository never approaches that many nodes.
#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "arena indices are bounded well below u32::MAX"
)]
fn index_u32(index: usize) -> u32 {
    index as u32
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
