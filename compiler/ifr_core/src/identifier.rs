//! Java identifier to IDL identifier translation.

use std::fmt::Write;

/// IDL keywords. A Java identifier matching one of these, ignoring case,
/// is escaped with a leading underscore.
const IDL_KEYWORDS: &[&str] = &[
    "abstract",
    "any",
    "attribute",
    "boolean",
    "case",
    "char",
    "const",
    "context",
    "custom",
    "default",
    "double",
    "enum",
    "exception",
    "factory",
    "false",
    "fixed",
    "float",
    "in",
    "inout",
    "interface",
    "local",
    "long",
    "module",
    "native",
    "Object",
    "octet",
    "oneway",
    "out",
    "private",
    "public",
    "raises",
    "readonly",
    "sequence",
    "short",
    "string",
    "struct",
    "supports",
    "switch",
    "TRUE",
    "truncatable",
    "typedef",
    "union",
    "unsigned",
    "ValueBase",
    "valuetype",
    "void",
    "wchar",
    "wstring",
];

/// Whether `name` collides with an IDL keyword (case-insensitive).
pub fn is_idl_keyword(name: &str) -> bool {
    IDL_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name))
}

#[inline]
fn is_idl_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Translate one Java identifier (e.g. a package segment) to IDL.
///
/// - a leading `_` gets a `J` prefix (`_impl` -> `J_impl`);
/// - characters outside `[A-Za-z0-9_]` become `U` + four hex digits
///   (`a$b` -> `aU0024b`);
/// - a keyword collision gets a `_` prefix (`module` -> `_module`).
pub fn java_to_idl_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    if name.starts_with('_') {
        out.push('J');
    }

    for c in name.chars() {
        if is_idl_identifier_char(c) {
            out.push(c);
        } else {
            // Characters outside the BMP are written as their surrogate pair.
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "U{unit:04X}");
            }
        }
    }

    if is_idl_keyword(&out) {
        out.insert(0, '_');
    }
    out
}
