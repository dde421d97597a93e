//! Text rendering of a finished repository.
//!
//! The tree lists every contained definition under its container, one per
//! line, indented two spaces per level:
//!
//! ```text
//! module com  IDL:com:1.0
//!   module acme  IDL:com/acme:1.0
//!     interface Account  RMI:com.acme.Account:0000000000000000
//!       readonly attribute balance : double
//! ```

use std::fmt::Write;

use ifr_core::DefinitionKind;
use ifr_repository::{
    AttributeMode, Description, DescriptionValue, NodeId, NodeRef, Repository, Visibility,
};

/// Render the definition tree below the root.
pub fn render_tree(repository: &Repository) -> String {
    let mut out = String::new();
    for child in repository.contents(DefinitionKind::All, false) {
        render_node(repository, child, 0, &mut out);
    }
    out
}

fn render_node(repository: &Repository, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = repository.node(id) else {
        return;
    };
    let _ = writeln!(out, "{:indent$}{}", "", line(&node), indent = depth * 2);
    if let Some(container) = node.as_container() {
        for child in container.contents(DefinitionKind::All, false) {
            render_node(repository, child, depth + 1, out);
        }
    }
}

/// One tree line: IDL keyword, name, and the type or repository ID.
fn line(node: &NodeRef<'_>) -> String {
    let name = node.name().unwrap_or_default();
    let id = node.repository_id().unwrap_or_default();
    let type_name = node
        .type_code()
        .map(|tc| tc.to_string())
        .unwrap_or_default();

    match node.kind() {
        DefinitionKind::Module => format!("module {name}  {id}"),
        DefinitionKind::Interface => format!("interface {name}  {id}"),
        DefinitionKind::Value if node.is_abstract() => {
            format!("abstract valuetype {name}  {id}")
        }
        DefinitionKind::Value => format!("valuetype {name}  {id}"),
        DefinitionKind::ValueBox => format!("valuetype {name} {}  {id}", boxed(node)),
        DefinitionKind::Alias => format!("typedef {} {name}  {id}", aliased(node)),
        DefinitionKind::Exception => format!("exception {name}  {id}"),
        DefinitionKind::Constant => {
            let value = node
                .constant_value()
                .map(ToString::to_string)
                .unwrap_or_default();
            format!("const {type_name} {name} = {value}")
        }
        DefinitionKind::Attribute => match attribute_mode(node) {
            Some(AttributeMode::ReadOnly) => format!("readonly attribute {name} : {type_name}"),
            _ => format!("attribute {name} : {type_name}"),
        },
        DefinitionKind::Operation => {
            let params = node
                .parameters()
                .into_iter()
                .map(|(param, ..)| param)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{type_name} {name}({params})")
        }
        DefinitionKind::ValueMember => match member_access(node) {
            Some(Visibility::Public) => format!("public {type_name} {name}"),
            _ => format!("private {type_name} {name}"),
        },
        other => format!("{other} {name}  {id}"),
    }
}

/// The boxed type of a value box, as written after its name.
fn boxed(node: &NodeRef<'_>) -> String {
    match node.type_code() {
        Some(ifr_core::TypeCode::ValueBox { boxed, .. }) => boxed.to_string(),
        _ => String::new(),
    }
}

fn aliased(node: &NodeRef<'_>) -> String {
    match node.type_code() {
        Some(ifr_core::TypeCode::Alias { original, .. }) => original.to_string(),
        _ => String::new(),
    }
}

fn attribute_mode(node: &NodeRef<'_>) -> Option<AttributeMode> {
    match node.as_contained()?.describe()?.value {
        DescriptionValue::Attribute(attribute) => Some(attribute.mode),
        _ => None,
    }
}

fn member_access(node: &NodeRef<'_>) -> Option<Visibility> {
    match node.as_contained()?.describe()?.value {
        DescriptionValue::ValueMember(member) => Some(member.access),
        _ => None,
    }
}

/// Render a description record, one field per line.
pub fn render_description(description: &Description) -> String {
    format!("{} {:#?}", description.kind, description.value)
}
