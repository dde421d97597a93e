//! Container queries: scoped lookup, filtered contents and name search.

use std::collections::VecDeque;

use ifr_core::{id_to_scoped_name, ids, DefinitionKind, ScopedName};

use super::Graph;
use crate::NodeId;

impl Graph {
    /// Resolve `name` relative to `container`.
    ///
    /// Absolute names start from the root. Every segment but the last must
    /// name a container.
    pub(crate) fn lookup(&self, container: NodeId, name: &ScopedName) -> Option<NodeId> {
        if name.is_absolute() && container != self.root() {
            return self.lookup(self.root(), name);
        }
        let (first, rest) = name.split_first()?;
        let child = self.contents_of(container)?.get(first)?;
        if rest.is_empty() {
            Some(child)
        } else {
            self.lookup(child, &rest)
        }
    }

    pub(crate) fn lookup_str(&self, container: NodeId, name: &str) -> Option<NodeId> {
        let found = ScopedName::parse(name).and_then(|name| self.lookup(container, &name));
        tracing::trace!(name, found = found.is_some(), "lookup");
        found
    }

    /// The root's ID lookup: boxed arrays through the array map, everything
    /// else through its scoped name.
    pub(crate) fn lookup_id(&self, id: &str) -> Option<NodeId> {
        if ids::is_array_id(id) {
            return self.boxed_array(id);
        }
        id_to_scoped_name(id).and_then(|name| self.lookup(self.root(), &name))
    }

    /// Direct children of `container` matching `filter`.
    ///
    /// With `exclude_inherited`, only children whose defining container is
    /// `container` itself are kept.
    pub(crate) fn contents(
        &self,
        container: NodeId,
        filter: DefinitionKind,
        exclude_inherited: bool,
    ) -> Vec<NodeId> {
        let Some(contents) = self.contents_of(container) else {
            return Vec::new();
        };
        contents
            .entries()
            .iter()
            .copied()
            .filter(|&child| {
                let node = self.node(child);
                node.kind.matches(filter)
                    && (!exclude_inherited || node.defined_in() == Some(container))
            })
            .collect()
    }

    /// Breadth-first search for children named `search_name`, descending at
    /// most `levels` container levels (`-1` for no bound).
    pub(crate) fn lookup_name(
        &self,
        container: NodeId,
        search_name: &str,
        levels: i32,
        filter: DefinitionKind,
        exclude_inherited: bool,
    ) -> Vec<NodeId> {
        let levels = match levels {
            -1 => u32::MAX,
            n => match u32::try_from(n) {
                Ok(n) if n > 0 => n,
                _ => return Vec::new(),
            },
        };

        let mut found = Vec::new();
        let mut queue = VecDeque::from([(container, levels)]);
        while let Some((current, levels)) = queue.pop_front() {
            for child in self.contents(current, DefinitionKind::All, exclude_inherited) {
                let node = self.node(child);
                if node.name() == Some(search_name) && node.kind.matches(filter) {
                    found.push(child);
                }
                if levels > 1 && node.body.container().is_some() {
                    queue.push_back((child, levels - 1));
                }
            }
        }
        found
    }
}
