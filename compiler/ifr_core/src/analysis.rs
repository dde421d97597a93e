//! The class-analysis collaborator.
//!
//! Reflection over Java classes and the Java-to-IDL name and ID rules live
//! outside the repository. The repository builder consumes their results
//! through [`ClassAnalyzer`] and never re-derives an IDL name or a
//! repository ID on its own.

use std::sync::Arc;

use crate::ids::{self, IdFormat, ParsedId};
use crate::{ConstantValue, JavaType};

/// Root of the Java exception hierarchy as far as the mapping is concerned.
pub const EXCEPTION_ROOT: &str = "java.lang.Exception";

/// Upper bound on superclass chains; deeper chains are treated as cyclic.
const MAX_SUPERCLASS_DEPTH: usize = 256;

/// A signal from the analysis collaborator that a class cannot be mapped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("class `{0}` is unknown to the class analyzer")]
    UnknownClass(String),
    #[error("malformed Java type name `{0}`")]
    MalformedTypeName(String),
    #[error("`{class}` violates the Java-to-IDL mapping: {reason}")]
    Violation { class: String, reason: String },
}

/// How a reflected class participates in the mapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClassFlavor {
    /// An interface extending `java.rmi.Remote`: maps to an IDL interface.
    RemoteInterface,
    /// Any other interface: maps to an abstract value type.
    AbstractInterface,
    /// A class: maps to a value type, or an exception.
    #[default]
    Class,
}

/// A `static final` field mapped to an IDL constant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantAnalysis {
    pub idl_name: String,
    pub value: ConstantValue,
}

/// A bean property mapped to an IDL attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeAnalysis {
    pub idl_name: String,
    /// Java type name of the property.
    pub java_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub read_only: bool,
}

/// A method parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterAnalysis {
    pub idl_name: String,
    pub java_type: String,
}

/// A method mapped to an IDL operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationAnalysis {
    pub idl_name: String,
    pub return_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<ParameterAnalysis>,
    /// Declared exceptions that map to IDL exceptions, by class name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exceptions: Vec<String>,
}

impl OperationAnalysis {
    /// An operation with `(name, java type)` parameters raising the
    /// exception classes `raises`.
    pub fn new(
        idl_name: &str,
        return_type: &str,
        parameters: &[(&str, &str)],
        raises: &[&str],
    ) -> Self {
        OperationAnalysis {
            idl_name: idl_name.to_owned(),
            return_type: return_type.to_owned(),
            parameters: parameters
                .iter()
                .map(|(name, java_type)| ParameterAnalysis {
                    idl_name: (*name).to_owned(),
                    java_type: (*java_type).to_owned(),
                })
                .collect(),
            exceptions: raises.iter().map(|class| (*class).to_owned()).collect(),
        }
    }
}

/// A serializable field mapped to a value member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueMemberAnalysis {
    pub idl_name: String,
    pub java_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_public: bool,
}

impl ValueMemberAnalysis {
    pub fn new(idl_name: &str, java_type: &str, is_public: bool) -> Self {
        ValueMemberAnalysis {
            idl_name: idl_name.to_owned(),
            java_type: java_type.to_owned(),
            is_public,
        }
    }
}

/// The IDL exception that an exception class maps to, next to its value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptionMapping {
    pub idl_name: String,
    pub repository_id: String,
}

impl ExceptionMapping {
    /// The standard exception mapping for a class: the `Exception` suffix of
    /// the value's IDL name is replaced by `Ex` (or `Ex` is appended), and
    /// the ID is the `IDL:` form of the class's package path.
    pub fn derive(java_name: &str, idl_name: &str) -> ExceptionMapping {
        let base = idl_name.strip_suffix("Exception").unwrap_or(idl_name);
        let name = format!("{base}Ex");
        let path = match java_name.rsplit_once('.') {
            Some((package, _)) => {
                let mut path: Vec<String> = package
                    .split('.')
                    .map(crate::java_to_idl_identifier)
                    .collect();
                path.push(name.clone());
                path.join("/")
            }
            None => name.clone(),
        };
        ExceptionMapping {
            repository_id: ids::module_id(&path),
            idl_name: name,
        }
    }
}

/// Everything the builder needs to know about one reflected class.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassAnalysis {
    pub java_name: String,
    pub flavor: ClassFlavor,
    pub idl_name: String,
    pub repository_id: String,
    /// Java superclass; `None` for interfaces and `java.lang.Object`.
    pub superclass: Option<String>,
    /// Super-interfaces of a remote interface that map to IDL interfaces.
    pub base_interfaces: Vec<String>,
    /// Remote interfaces a value type supports.
    pub supported_interfaces: Vec<String>,
    /// Abstract-value interfaces a value type (or abstract value) inherits.
    pub abstract_base_values: Vec<String>,
    /// Custom marshalling (`writeObject` or `Externalizable`).
    pub is_custom: bool,
    pub constants: Vec<ConstantAnalysis>,
    pub attributes: Vec<AttributeAnalysis>,
    pub operations: Vec<OperationAnalysis>,
    pub members: Vec<ValueMemberAnalysis>,
    /// Exception mapping, for exception classes.
    pub exception: Option<ExceptionMapping>,
    /// Set when the collaborator has judged the class unmappable.
    pub violation: Option<String>,
}

impl ClassAnalysis {
    /// A class with no supertypes and no members.
    pub fn new(java_name: &str, flavor: ClassFlavor, idl_name: &str, repository_id: &str) -> Self {
        ClassAnalysis {
            java_name: java_name.to_owned(),
            flavor,
            idl_name: idl_name.to_owned(),
            repository_id: repository_id.to_owned(),
            ..ClassAnalysis::default()
        }
    }

    /// The superclass that maps to this value's base value.
    pub fn value_base(&self) -> Option<&str> {
        self.superclass
            .as_deref()
            .filter(|superclass| *superclass != "java.lang.Object")
    }

    /// The IDL exception this class maps to; derived when not supplied.
    pub fn exception_mapping(&self) -> ExceptionMapping {
        self.exception
            .clone()
            .unwrap_or_else(|| ExceptionMapping::derive(&self.java_name, &self.idl_name))
    }

    /// Check the record for constructs the mapping cannot express.
    pub fn check(&self) -> Result<(), AnalysisError> {
        let violation = |reason: &str| AnalysisError::Violation {
            class: self.java_name.clone(),
            reason: reason.to_owned(),
        };

        if let Some(reason) = &self.violation {
            return Err(violation(reason));
        }
        if self.idl_name.is_empty() {
            return Err(violation("no IDL name"));
        }
        if ids::parse(&self.repository_id).is_none() {
            return Err(violation("repository ID is neither IDL: nor RMI: form"));
        }
        if self.flavor != ClassFlavor::Class && !self.members.is_empty() {
            return Err(violation("interfaces cannot declare state members"));
        }
        Ok(())
    }
}

/// Source of class analyses.
pub trait ClassAnalyzer {
    /// Analyze the class or interface named `class`.
    fn analyze(&self, class: &str) -> Result<Arc<ClassAnalysis>, AnalysisError>;

    /// Whether `class` is assignable to [`EXCEPTION_ROOT`].
    fn is_exception(&self, class: &str) -> Result<bool, AnalysisError> {
        let mut current = class.to_owned();
        for _ in 0..MAX_SUPERCLASS_DEPTH {
            if current == EXCEPTION_ROOT {
                return Ok(true);
            }
            match self.analyze(&current)?.superclass.clone() {
                Some(superclass) => current = superclass,
                None => return Ok(false),
            }
        }
        Err(AnalysisError::Violation {
            class: class.to_owned(),
            reason: "cyclic superclass chain".to_owned(),
        })
    }

    /// The RMI repository ID of an array type.
    ///
    /// Reuses the hash codes of the element class's ID; primitive elements
    /// carry a zero hash.
    fn array_repository_id(&self, ty: &JavaType) -> Result<String, AnalysisError> {
        let brackets = "[".repeat(ty.dimensions());
        match ty.element() {
            JavaType::Primitive(p) => Ok(format!(
                "{}{brackets}{}:0000000000000000",
                ids::RMI_PREFIX,
                p.descriptor()
            )),
            JavaType::Class(name) => {
                let analysis = self.analyze(name)?;
                let suffix = match ids::parse(&analysis.repository_id) {
                    Some(ParsedId {
                        format: IdFormat::Rmi,
                        suffix,
                        ..
                    }) => suffix.to_owned(),
                    _ => "0000000000000000".to_owned(),
                };
                Ok(format!("{}{brackets}L{name};:{suffix}", ids::RMI_PREFIX))
            }
            JavaType::Array(_) => Err(AnalysisError::MalformedTypeName(ty.to_string())),
        }
    }
}

impl<T: ClassAnalyzer + ?Sized> ClassAnalyzer for &T {
    fn analyze(&self, class: &str) -> Result<Arc<ClassAnalysis>, AnalysisError> {
        (**self).analyze(class)
    }

    fn is_exception(&self, class: &str) -> Result<bool, AnalysisError> {
        (**self).is_exception(class)
    }

    fn array_repository_id(&self, ty: &JavaType) -> Result<String, AnalysisError> {
        (**self).array_repository_id(ty)
    }
}
