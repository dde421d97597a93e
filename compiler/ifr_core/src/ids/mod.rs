//! Repository ID codec.
//!
//! Two external ID formats reach the repository:
//!
//! - `IDL:<slashed/path>:<version>`, e.g. `IDL:omg.org/CORBA/WStringValue:1.0`
//! - `RMI:<dotted.class.name>:<hash>[:<suid>]`, e.g. `RMI:com.acme.Account:...`
//!
//! Both are converted to an absolute [`ScopedName`] for container lookup.
//! Boxed array types use the `RMI:[` prefix and are never converted; the
//! repository root keeps a separate ID map for them.

use crate::{java_to_idl_identifier, ScopedName};

pub const IDL_PREFIX: &str = "IDL:";
pub const RMI_PREFIX: &str = "RMI:";

/// Prefix shared by the IDs of every boxed Java array.
pub const ARRAY_ID_PREFIX: &str = "RMI:[";

pub const CORBA_OBJECT_ID: &str = "IDL:omg.org/CORBA/Object:1.0";
pub const CORBA_VALUE_BASE_ID: &str = "IDL:omg.org/CORBA/ValueBase:1.0";
pub const WSTRING_VALUE_ID: &str = "IDL:omg.org/CORBA/WStringValue:1.0";

/// Version given to every definition the mapping creates.
pub const DEFAULT_VERSION: &str = "1.0";

/// Paths that denote primitive types rather than repository content.
const RESERVED_IDL_PATHS: [&str; 2] = ["omg.org/CORBA/Object", "omg.org/CORBA/ValueBase"];

/// Organisation prefixes rewritten to their reversed package form.
const PREFIX_REWRITES: [(&str, &str); 2] = [("omg.org", "org/omg"), ("w3c.org", "org/w3c")];

/// The format of a repository ID.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IdFormat {
    Idl,
    Rmi,
}

/// A repository ID split into its `:`-delimited parts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParsedId<'a> {
    pub format: IdFormat,
    /// The path (`IDL:`) or class name (`RMI:`) segment.
    pub body: &'a str,
    /// Everything after the body: the version or the hash codes.
    pub suffix: &'a str,
}

/// Split a repository ID into format, body and suffix.
///
/// Unknown prefixes and IDs without a second `:`-delimited segment yield
/// `None`.
pub fn parse(id: &str) -> Option<ParsedId<'_>> {
    let (prefix, rest) = id.split_once(':')?;
    let (body, suffix) = rest.split_once(':')?;
    let format = match prefix {
        "IDL" => IdFormat::Idl,
        "RMI" => IdFormat::Rmi,
        _ => return None,
    };
    Some(ParsedId {
        format,
        body,
        suffix,
    })
}

/// Whether `id` names a boxed Java array.
#[inline]
pub fn is_array_id(id: &str) -> bool {
    id.starts_with(ARRAY_ID_PREFIX)
}

/// Convert a repository ID to the absolute scoped name of its definition.
///
/// Returns `None` when the ID cannot be resolved by name: reserved base
/// types, unknown formats, malformed IDs. None of these are errors.
pub fn id_to_scoped_name(id: &str) -> Option<ScopedName> {
    let parsed = parse(id)?;
    let path = match parsed.format {
        IdFormat::Idl => {
            if RESERVED_IDL_PATHS.contains(&parsed.body) {
                return None;
            }
            rewrite_prefix(parsed.body).replace('/', "::")
        }
        IdFormat::Rmi => rmi_class_path(parsed.body, "::"),
    };

    if path.is_empty() {
        return None;
    }
    ScopedName::parse(&format!("::{path}"))
}

fn rewrite_prefix(path: &str) -> String {
    for (from, to) in PREFIX_REWRITES {
        if let Some(rest) = path.strip_prefix(from) {
            return format!("{to}{rest}");
        }
    }
    path.to_owned()
}

/// The module path of an `RMI:` class name, joined by `separator`.
///
/// Package segments are translated the way packages map to modules; inner
/// class names (`Outer$Inner`) become `Outer__Inner`.
fn rmi_class_path(class: &str, separator: &str) -> String {
    match class.rsplit_once('.') {
        Some((package, name)) => {
            let mut path: Vec<String> = package.split('.').map(java_to_idl_identifier).collect();
            path.push(name.replace('$', "__"));
            path.join(separator)
        }
        None => class.replace('$', "__"),
    }
}

/// The `IDL:` ID of a module for a slashed package path such as `com/acme`.
pub fn module_id(path: &str) -> String {
    format!("{IDL_PREFIX}{path}:{DEFAULT_VERSION}")
}

/// Derive the ID of a member (operation, attribute, constant, value member)
/// from its container's ID.
///
/// The result always converts to the container's scoped name plus `member`.
pub fn member_id(container_id: &str, member: &str) -> String {
    match parse(container_id) {
        Some(ParsedId {
            format: IdFormat::Idl,
            body,
            suffix,
        }) => format!("{IDL_PREFIX}{body}/{member}:{suffix}"),
        Some(ParsedId {
            format: IdFormat::Rmi,
            body,
            ..
        }) => format!(
            "{IDL_PREFIX}{}/{member}:{DEFAULT_VERSION}",
            rmi_class_path(body, "/")
        ),
        None => format!("{container_id}/{member}"),
    }
}
