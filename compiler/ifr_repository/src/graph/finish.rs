//! The finishing pass and shutdown.
//!
//! `all_done` walks the tree from the root: each node resolves its links,
//! is exported, then its children follow. The root additionally finishes
//! its anonymous nodes. Resolution failures abort the pass; export failures
//! only leave the node unexported.

use ifr_core::{TcKind, TypeCode};

use super::Graph;
use crate::node::{ExportState, Link, Target};
use crate::{IrError, NodeId, ObjectRef};

impl Graph {
    /// The definition node of an IDL type.
    pub(crate) fn resolve_type(
        &self,
        type_code: &TypeCode,
        referrer: NodeId,
    ) -> Result<NodeId, IrError> {
        if let Some(kind) = type_code.primitive_kind() {
            return self.primitive(kind).ok_or(IrError::MalformedTypeCode {
                kind: type_code.kind(),
            });
        }

        match type_code.kind() {
            TcKind::Sequence => self.sequence(type_code).ok_or_else(|| IrError::Unresolved {
                referrer: self.display_name(referrer),
                id: type_code.to_string(),
            }),
            TcKind::ObjRef
            | TcKind::AbstractInterface
            | TcKind::Value
            | TcKind::ValueBox
            | TcKind::Alias
            | TcKind::Struct
            | TcKind::Union
            | TcKind::Enum
            | TcKind::Except => {
                let Some(id) = type_code.id() else {
                    return Err(IrError::MalformedTypeCode {
                        kind: type_code.kind(),
                    });
                };
                self.lookup_id(id).ok_or_else(|| IrError::Unresolved {
                    referrer: self.display_name(referrer),
                    id: id.to_owned(),
                })
            }
            kind => Err(IrError::MalformedTypeCode { kind }),
        }
    }

    fn resolve_link(&self, link: &Link, referrer: NodeId) -> Result<NodeId, IrError> {
        let resolved = match &link.target {
            Target::Type(type_code) => self.resolve_type(type_code, referrer)?,
            Target::Id { id, expected } => {
                let target = self.lookup_id(id).ok_or_else(|| IrError::Unresolved {
                    referrer: self.display_name(referrer),
                    id: id.clone(),
                })?;
                let found = self.node(target).kind;
                if found != *expected {
                    return Err(IrError::WrongKind {
                        referrer: self.display_name(referrer),
                        id: id.clone(),
                        expected: *expected,
                        found,
                    });
                }
                target
            }
        };
        tracing::trace!(referrer = %self.display_name(referrer), target = %resolved, "resolved");
        Ok(resolved)
    }

    /// Resolve every link of `node`. Either all links resolve or none is
    /// updated.
    pub(crate) fn resolve_links(&mut self, node: NodeId) -> Result<(), IrError> {
        let resolved = self
            .node(node)
            .body
            .links()
            .into_iter()
            .map(|link| self.resolve_link(link, node))
            .collect::<Result<Vec<_>, _>>()?;
        for (link, target) in self.node_mut(node).body.links_mut().into_iter().zip(resolved) {
            link.resolved = Some(target);
        }
        Ok(())
    }

    /// Export `node`, once. Failures are logged and leave it unexported.
    pub(crate) fn export(&mut self, node: NodeId) -> Option<ObjectRef> {
        let adapter = self.adapter.clone();
        let n = self.node_mut(node);
        if let ExportState::Exported(reference) = &n.export {
            return Some(reference.clone());
        }
        match adapter.activate(&n.object_id, n.kind.interface_id()) {
            Ok(reference) => {
                n.export = ExportState::Exported(reference.clone());
                Some(reference)
            }
            Err(err) => {
                tracing::warn!(key = %n.object_id, error = %err, "failed to export node");
                None
            }
        }
    }

    /// The finishing pass for `node` and everything below it.
    pub(crate) fn all_done(&mut self, node: NodeId) -> Result<(), IrError> {
        self.resolve_links(node)?;
        self.export(node);

        if node == self.root() {
            for anonymous in self.anonymous.clone() {
                self.all_done(anonymous)?;
            }
        }
        let children = self
            .contents_of(node)
            .map(|contents| contents.entries().to_vec())
            .unwrap_or_default();
        for child in children {
            self.all_done(child)?;
        }
        Ok(())
    }

    fn unexport(&mut self, node: NodeId) {
        let adapter = self.adapter.clone();
        let n = self.node_mut(node);
        if let ExportState::Exported(_) = n.export {
            if let Err(err) = adapter.deactivate(&n.object_id) {
                tracing::warn!(key = %n.object_id, error = %err, "failed to unexport node");
            }
        }
        n.export = ExportState::Unexported;
    }

    fn shutdown_contents(&mut self, container: NodeId) {
        let children = self
            .contents_of(container)
            .map(|contents| contents.entries().to_vec())
            .unwrap_or_default();
        for child in children {
            self.shutdown_contents(child);
            self.unexport(child);
        }
    }

    /// Unexport every node: anonymous nodes first, then the tree, then the
    /// root itself.
    pub(crate) fn shutdown(&mut self) {
        for anonymous in self.anonymous.clone() {
            self.unexport(anonymous);
        }
        let root = self.root();
        self.shutdown_contents(root);
        self.unexport(root);
    }

    /// Whether every link in the graph is resolved.
    pub(crate) fn is_resolved(&self) -> bool {
        self.ids().all(|id| {
            self.node(id)
                .body
                .links()
                .iter()
                .all(|link| link.resolved.is_some_and(|target| self.owns(target)))
        })
    }
}
