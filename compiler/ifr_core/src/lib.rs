//! IFR Core - shared vocabulary of the Interface Repository
//!
//! This crate contains the leaf data model the repository is built from:
//! - Repository ID parsing and conversion to scoped names
//! - Java-to-IDL identifier translation
//! - Definition, primitive and type-code kinds
//! - `TypeCode` descriptors and constant values
//! - The Java type model and the class-analysis collaborator
//!
//! # Design Philosophy
//!
//! - **Pure data**: nothing here knows about nodes, containers or export
//! - **IDs are strings**: repository IDs stay in their external form and are
//!   only parsed at the codec boundary
//! - **Oracle, not reflection**: class analyses arrive pre-computed through
//!   [`ClassAnalyzer`]

mod analysis;
mod catalog;
mod constant;
mod identifier;
pub mod ids;
mod java;
mod kind;
mod scoped_name;
mod type_code;

pub use analysis::{
    AnalysisError, AttributeAnalysis, ClassAnalysis, ClassAnalyzer, ClassFlavor,
    ConstantAnalysis, ExceptionMapping, OperationAnalysis, ParameterAnalysis,
    ValueMemberAnalysis, EXCEPTION_ROOT,
};
pub use catalog::{ClassCatalog, CLASS_DESC_REPOSITORY_ID};
pub use constant::ConstantValue;
pub use identifier::{is_idl_keyword, java_to_idl_identifier};
pub use ids::id_to_scoped_name;
pub use java::{JavaPrimitive, JavaType};
pub use kind::{DefinitionKind, PrimitiveKind, TcKind};
pub use scoped_name::ScopedName;
pub use type_code::{StructMember, TypeCode, ValueModifier};
