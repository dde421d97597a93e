//! Package-to-module mapping.

use ifr_core::{ids, java_to_idl_identifier, ClassAnalyzer, DefinitionKind};

use super::RepositoryBuilder;
use crate::container::Container;
use crate::node::NodeBody;
use crate::{IrError, NodeId};

impl<A: ClassAnalyzer> RepositoryBuilder<A> {
    /// The module for a Java package, creating missing modules on the way.
    ///
    /// The default package maps to the root. Each segment is translated to
    /// a legal IDL identifier; a non-module definition in the way is a
    /// naming collision.
    pub(super) fn ensure_package(&mut self, package: &str) -> Result<NodeId, IrError> {
        let mut container = self.graph.root();
        if package.is_empty() {
            return Ok(container);
        }

        let mut path = String::new();
        for segment in package.split('.') {
            let name = java_to_idl_identifier(segment);
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(&name);

            let existing = self
                .graph
                .contents_of(container)
                .and_then(|contents| contents.get(&name));
            container = match existing {
                Some(module) if self.graph.node(module).kind == DefinitionKind::Module => module,
                Some(other) => {
                    return Err(IrError::NameCollision {
                        package: package.to_owned(),
                        existing: self.graph.display_name(other),
                    });
                }
                None => {
                    tracing::debug!(module = %path, "synthesised module");
                    self.graph.create_contained(
                        container,
                        &name,
                        &ids::module_id(&path),
                        NodeBody::Module(Container::default()),
                    )?
                }
            };
        }
        Ok(container)
    }
}
