//! Boxed arrays.
//!
//! A Java array of `n` dimensions maps to `n` value boxes in a module under
//! `org.omg.boxedRMI`, one per dimension, each boxing an anonymous sequence
//! of the previous dimension's type:
//!
//! ```text
//! int[][]  ->  ::org::omg::boxedRMI::seq2_long  (box of sequence<seq1_long>)
//!              ::org::omg::boxedRMI::seq1_long  (box of sequence<long>)
//! ```
//!
//! Lower dimensions are shared between arrays of the same element type.

use ifr_core::{ClassAnalyzer, JavaType, TypeCode};

use super::RepositoryBuilder;
use crate::node::{Link, NodeBody};
use crate::{IrError, NodeId};

/// Root package of boxed arrays.
const BOXED_RMI: &str = "org.omg.boxedRMI";

/// Boxed arrays of strings live next to `WStringValue`.
const BOXED_STRINGS: &str = "org.omg.boxedRMI.CORBA";

impl<A: ClassAnalyzer> RepositoryBuilder<A> {
    /// Map an array type, creating every missing dimension.
    pub(super) fn add_array(&mut self, ty: &JavaType) -> Result<NodeId, IrError> {
        if let Some(&node) = self.arrays.get(ty) {
            return Ok(node);
        }

        let element = ty.element();
        let (mut type_code, type_name, package) = match element {
            JavaType::Primitive(primitive) => (
                primitive.type_code(),
                primitive.idl_name().to_owned(),
                BOXED_RMI.to_owned(),
            ),
            JavaType::Class(class) => {
                let type_code = self.type_code_of(element)?;
                // Named after the boxed type: an exception class boxes its value.
                let name = match type_code.name() {
                    Some(name) => name.to_owned(),
                    None => {
                        let node = self
                            .map_type(element)?
                            .ok_or_else(|| IrError::MissingTypeCode(class.clone()))?;
                        self.graph.node(node).name().unwrap_or_default().to_owned()
                    }
                };
                let package = if class == "java.lang.String" {
                    BOXED_STRINGS.to_owned()
                } else {
                    match element.package().unwrap_or_default() {
                        "" => BOXED_RMI.to_owned(),
                        package => format!("{BOXED_RMI}.{package}"),
                    }
                };
                (type_code, name, package)
            }
            JavaType::Array(_) => return Err(IrError::MissingTypeCode(ty.to_string())),
        };
        let module = self.ensure_package(&package)?;

        let mut dimension = element.clone();
        let mut last = None;
        for depth in 1..=ty.dimensions() {
            dimension = JavaType::Array(Box::new(dimension));
            let sequence_tc = TypeCode::sequence_of(type_code.clone());

            if let Some(&node) = self.arrays.get(&dimension) {
                type_code = self
                    .type_codes
                    .get(&dimension)
                    .cloned()
                    .ok_or_else(|| IrError::MissingTypeCode(dimension.to_string()))?;
                last = Some(node);
                continue;
            }

            let id = self.analyzer.array_repository_id(&dimension)?;
            let name = format!("seq{depth}_{type_name}");
            let box_tc = TypeCode::ValueBox {
                id: id.clone(),
                name: name.clone(),
                boxed: Box::new(sequence_tc.clone()),
            };
            let sequence = self.graph.push_anonymous(NodeBody::Sequence {
                bound: 0,
                element: Link::to_type(type_code),
            });
            let value_box = self.graph.create_contained(
                module,
                &name,
                &id,
                NodeBody::ValueBox {
                    type_code: box_tc.clone(),
                    original: Link::to_type(sequence_tc.clone()),
                },
            )?;
            tracing::debug!(array = %dimension, %id, "boxed array dimension");

            self.graph
                .register_sequence(&id, sequence_tc, sequence, value_box);
            self.type_codes.insert(dimension.clone(), box_tc.clone());
            self.arrays.insert(dimension.clone(), value_box);
            type_code = box_tc;
            last = Some(value_box);
        }

        last.ok_or_else(|| IrError::MissingTypeCode(ty.to_string()))
    }
}
