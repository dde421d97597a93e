//! IFR Repository - a read-only CORBA Interface Repository built from Java
//! class analyses.
//!
//! This crate owns the registry: the node arena, containment, the
//! finishing pass that resolves forward references and exports nodes, and
//! the type-mapping driver that turns analysed Java classes into IDL
//! definitions.
//!
//! # Lifecycle
//!
//! ```text
//! RepositoryBuilder::new ──map_class*──> finish_build ──> Repository ──> shutdown
//!        (Building)                                       (Finalized)
//! ```
//!
//! Mapping is only possible on the builder and queries with resolved
//! references only on the finished [`Repository`], so the two construction
//! phases cannot be interleaved.
//!
//! # Design Philosophy
//!
//! - **Arena, not pointers**: nodes refer to each other by [`NodeId`]
//! - **Containment by composition**: composite nodes own a container
//! - **Views, not supertypes**: [`NodeRef`], [`ContainerRef`] and
//!   [`ContainedRef`] expose the OMG capabilities of a node
//! - **Read-only**: every live mutator fails with [`IrError::ReadOnly`]

mod builder;
mod config;
mod container;
pub mod describe;
mod error;
mod graph;
mod node;
mod object;
mod repository;
mod view;

pub use builder::RepositoryBuilder;
pub use config::RepositoryConfig;
pub use describe::{
    AttributeDescription, ConstantDescription, ContainedDescription, Description,
    DescriptionValue, ExceptionDescription, FullInterfaceDescription, FullValueDescription,
    InterfaceDescription, ModuleDescription, OperationDescription, ParameterDescription,
    TypeDescription, ValueDescription, ValueMemberDescription,
};
pub use error::IrError;
pub use node::{AttributeMode, NodeId, OperationMode, ParameterMode, Visibility};
pub use object::{ExportError, LocalAdapter, ObjectAdapter, ObjectId, ObjectRef};
pub use repository::Repository;
pub use view::{ContainedRef, ContainerRef, NodeRef};
