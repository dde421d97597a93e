//! Classes the Java-to-IDL mapping treats specially.
//!
//! Each is mapped lazily on first use and memoized, so the repository holds
//! at most one definition per special case:
//!
//! | Java class               | Definition                                 |
//! |--------------------------|--------------------------------------------|
//! | `java.io.Serializable`   | `::java::io::Serializable`, alias of `any` |
//! | `java.io.Externalizable` | `::java::io::Externalizable`, alias of `any` |
//! | `java.lang.Object`       | `::java::lang::_Object`, alias of `any`    |
//! | `java.lang.String`       | `::org::omg::CORBA::WStringValue` box      |
//! | `java.lang.Class`        | the value of `javax.rmi.CORBA.ClassDesc`   |

use ifr_core::ids::{self, WSTRING_VALUE_ID};
use ifr_core::{ClassAnalyzer, JavaType, TypeCode, CLASS_DESC_REPOSITORY_ID};

use super::RepositoryBuilder;
use crate::node::{Link, NodeBody};
use crate::{IrError, NodeId};

const SERIALIZABLE: &str = "java.io.Serializable";
const EXTERNALIZABLE: &str = "java.io.Externalizable";
const OBJECT: &str = "java.lang.Object";
const STRING: &str = "java.lang.String";
const CLASS: &str = "java.lang.Class";
const CLASS_DESC: &str = "javax.rmi.CORBA.ClassDesc";

/// Memoized special-case definitions.
#[derive(Clone, Debug, Default)]
pub(super) struct SpecialCases {
    serializable: Option<NodeId>,
    externalizable: Option<NodeId>,
    object: Option<NodeId>,
    string: Option<NodeId>,
    class_desc: Option<NodeId>,
}

/// Whether `class` is mapped by a special case rather than by analysis.
pub(super) fn is_special_case(class: &str) -> bool {
    matches!(class, SERIALIZABLE | EXTERNALIZABLE | OBJECT | STRING | CLASS)
}

impl<A: ClassAnalyzer> RepositoryBuilder<A> {
    /// The definition of a special-case class, mapping it on first use.
    pub(super) fn special_case(&mut self, class: &str) -> Result<Option<NodeId>, IrError> {
        let node = match class {
            SERIALIZABLE => match self.special.serializable {
                Some(node) => node,
                None => {
                    let node = self.any_alias(SERIALIZABLE, "Serializable")?;
                    *self.special.serializable.insert(node)
                }
            },
            EXTERNALIZABLE => match self.special.externalizable {
                Some(node) => node,
                None => {
                    let node = self.any_alias(EXTERNALIZABLE, "Externalizable")?;
                    *self.special.externalizable.insert(node)
                }
            },
            OBJECT => match self.special.object {
                Some(node) => node,
                None => {
                    let node = self.any_alias(OBJECT, "_Object")?;
                    *self.special.object.insert(node)
                }
            },
            STRING => match self.special.string {
                Some(node) => node,
                None => {
                    let node = self.wstring_value()?;
                    *self.special.string.insert(node)
                }
            },
            CLASS => match self.special.class_desc {
                Some(node) => node,
                None => {
                    let node = self.class_desc()?;
                    *self.special.class_desc.insert(node)
                }
            },
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    /// An alias of `any` named `name`, in the module of `class`'s package.
    fn any_alias(&mut self, class: &str, name: &str) -> Result<NodeId, IrError> {
        let package = super::package_of(class);
        let module = self.ensure_package(package)?;
        let id = ids::module_id(&format!("{}/{name}", package.replace('.', "/")));
        let type_code = TypeCode::Alias {
            id: id.clone(),
            name: name.to_owned(),
            original: Box::new(TypeCode::ANY),
        };
        let node = self.graph.create_contained(
            module,
            name,
            &id,
            NodeBody::Alias {
                type_code: type_code.clone(),
                original: Link::to_type(TypeCode::ANY),
            },
        )?;
        self.type_codes
            .insert(JavaType::Class(class.to_owned()), type_code);
        Ok(node)
    }

    /// `::org::omg::CORBA::WStringValue`, the box of `wstring`.
    fn wstring_value(&mut self) -> Result<NodeId, IrError> {
        let module = self.ensure_package("org.omg.CORBA")?;
        let name = "WStringValue";
        let type_code = TypeCode::ValueBox {
            id: WSTRING_VALUE_ID.to_owned(),
            name: name.to_owned(),
            boxed: Box::new(TypeCode::WSTRING),
        };
        let node = self.graph.create_contained(
            module,
            name,
            WSTRING_VALUE_ID,
            NodeBody::ValueBox {
                type_code: type_code.clone(),
                original: Link::to_type(TypeCode::WSTRING),
            },
        )?;
        self.type_codes
            .insert(JavaType::Class(STRING.to_owned()), type_code);
        Ok(node)
    }

    /// The value of `javax.rmi.CORBA.ClassDesc`, which `java.lang.Class`
    /// maps to.
    fn class_desc(&mut self) -> Result<NodeId, IrError> {
        let analysis = self.analyzer.analyze(CLASS_DESC)?;
        if analysis.repository_id != CLASS_DESC_REPOSITORY_ID {
            tracing::warn!(
                expected = CLASS_DESC_REPOSITORY_ID,
                found = %analysis.repository_id,
                "ClassDesc repository ID differs from the Java-to-IDL mapping"
            );
        }
        let node = self.add_value(&analysis)?;
        let type_code = self
            .type_codes
            .get(&JavaType::Class(CLASS_DESC.to_owned()))
            .cloned()
            .ok_or_else(|| IrError::MissingTypeCode(CLASS_DESC.to_owned()))?;
        self.type_codes
            .insert(JavaType::Class(CLASS.to_owned()), type_code);
        Ok(node)
    }
}
