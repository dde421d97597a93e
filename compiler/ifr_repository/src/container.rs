//! Child storage shared by every composite node.
//!
//! A [`Container`] is owned by the repository root, modules, interfaces and
//! values alike. It keeps children in declaration order next to a name index;
//! the scoped queries built on top of it live on the graph, which can follow
//! child handles into nested containers.

use rustc_hash::FxHashMap;

use crate::NodeId;

/// Ordered children plus a name index.
#[derive(Clone, Debug, Default)]
pub(crate) struct Container {
    /// Children in insertion (declaration) order.
    entries: Vec<NodeId>,
    by_name: FxHashMap<String, NodeId>,
}

/// Why an insertion was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum InsertError {
    NameTaken,
    AlreadyPresent,
}

impl Container {
    #[inline]
    pub(crate) fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub(crate) fn entries(&self) -> &[NodeId] {
        &self.entries
    }

    /// Add `child` under `name`. Names never overwrite.
    pub(crate) fn insert(&mut self, name: &str, child: NodeId) -> Result<(), InsertError> {
        if self.by_name.contains_key(name) {
            return Err(InsertError::NameTaken);
        }
        if self.entries.contains(&child) {
            return Err(InsertError::AlreadyPresent);
        }
        self.entries.push(child);
        self.by_name.insert(name.to_owned(), child);
        Ok(())
    }
}
