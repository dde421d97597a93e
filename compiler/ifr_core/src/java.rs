//! Java type names as produced by reflection (`Class.getName()` form).

use std::fmt;

use crate::{AnalysisError, TcKind, TypeCode};

/// A Java primitive type, including `void` for return types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JavaPrimitive {
    Void,
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl JavaPrimitive {
    pub fn from_name(name: &str) -> Option<Self> {
        let p = match name {
            "void" => Self::Void,
            "boolean" => Self::Boolean,
            "char" => Self::Char,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            _ => return None,
        };
        Some(p)
    }

    pub fn from_descriptor(c: char) -> Option<Self> {
        let p = match c {
            'V' => Self::Void,
            'Z' => Self::Boolean,
            'C' => Self::Char,
            'B' => Self::Byte,
            'S' => Self::Short,
            'I' => Self::Int,
            'J' => Self::Long,
            'F' => Self::Float,
            'D' => Self::Double,
            _ => return None,
        };
        Some(p)
    }

    /// JVM descriptor character.
    pub fn descriptor(self) -> char {
        match self {
            Self::Void => 'V',
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Float => 'F',
            Self::Double => 'D',
        }
    }

    pub fn java_name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// The IDL spelling used when naming boxed sequences (`seq1_long_long`).
    pub fn idl_name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Char => "wchar",
            Self::Byte => "octet",
            Self::Short => "short",
            Self::Int => "long",
            Self::Long => "long_long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub fn type_code(self) -> TypeCode {
        let kind = match self {
            Self::Void => TcKind::Void,
            Self::Boolean => TcKind::Boolean,
            Self::Char => TcKind::WChar,
            Self::Byte => TcKind::Octet,
            Self::Short => TcKind::Short,
            Self::Int => TcKind::Long,
            Self::Long => TcKind::LongLong,
            Self::Float => TcKind::Float,
            Self::Double => TcKind::Double,
        };
        TypeCode::Basic(kind)
    }
}

/// A reflected Java type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(JavaPrimitive),
    /// A class or interface, by fully qualified name.
    Class(String),
    /// An array of the component type.
    Array(Box<JavaType>),
}

impl JavaType {
    /// Parse a `Class.getName()` string: `int`, `com.acme.Foo`, `[I`,
    /// `[[Lcom.acme.Foo;`.
    pub fn parse(name: &str) -> Result<Self, AnalysisError> {
        let malformed = || AnalysisError::MalformedTypeName(name.to_owned());

        if let Some(descriptor) = name.strip_prefix('[') {
            return Self::parse_component(descriptor)
                .map(|component| JavaType::Array(Box::new(component)))
                .ok_or_else(malformed);
        }

        if let Some(primitive) = JavaPrimitive::from_name(name) {
            return Ok(JavaType::Primitive(primitive));
        }

        if is_class_name(name) {
            Ok(JavaType::Class(name.to_owned()))
        } else {
            Err(malformed())
        }
    }

    /// Parse the descriptor that follows a `[`.
    fn parse_component(descriptor: &str) -> Option<Self> {
        if let Some(inner) = descriptor.strip_prefix('[') {
            return Self::parse_component(inner).map(|c| JavaType::Array(Box::new(c)));
        }
        if let Some(class) = descriptor
            .strip_prefix('L')
            .and_then(|rest| rest.strip_suffix(';'))
        {
            return is_class_name(class).then(|| JavaType::Class(class.to_owned()));
        }

        let mut chars = descriptor.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => JavaPrimitive::from_descriptor(c)
                .filter(|p| *p != JavaPrimitive::Void)
                .map(JavaType::Primitive),
            _ => None,
        }
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, JavaType::Array(_))
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, JavaType::Primitive(_))
    }

    /// The class name, for class and interface types.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            JavaType::Class(name) => Some(name),
            _ => None,
        }
    }

    /// The component type of an array.
    pub fn component(&self) -> Option<&JavaType> {
        match self {
            JavaType::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Number of array dimensions (0 for non-arrays).
    pub fn dimensions(&self) -> usize {
        let mut dims = 0;
        let mut current = self;
        while let JavaType::Array(component) = current {
            dims += 1;
            current = component;
        }
        dims
    }

    /// The innermost non-array type.
    pub fn element(&self) -> &JavaType {
        let mut current = self;
        while let JavaType::Array(component) = current {
            current = component;
        }
        current
    }

    /// The package of a class type; empty for the default package.
    pub fn package(&self) -> Option<&str> {
        let name = self.class_name()?;
        Some(name.rsplit_once('.').map_or("", |(package, _)| package))
    }

    fn write_descriptor(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(p) => write!(f, "{}", p.descriptor()),
            JavaType::Class(name) => write!(f, "L{name};"),
            JavaType::Array(component) => {
                f.write_str("[")?;
                component.write_descriptor(f)
            }
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(p) => f.write_str(p.java_name()),
            JavaType::Class(name) => f.write_str(name),
            JavaType::Array(_) => self.write_descriptor(f),
        }
    }
}

fn is_class_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .split('.')
            .all(|segment| !segment.is_empty() && !segment.contains(['[', ';', '/']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(name: &str) -> JavaType {
        JavaType::parse(name).unwrap_or(JavaType::Primitive(JavaPrimitive::Void))
    }

    #[test]
    fn parse_primitive() {
        assert_eq!(parse("int"), JavaType::Primitive(JavaPrimitive::Int));
    }

    #[test]
    fn parse_class() {
        let ty = parse("com.acme.Account");
        assert_eq!(ty.class_name(), Some("com.acme.Account"));
        assert_eq!(ty.package(), Some("com.acme"));
    }

    #[test]
    fn default_package_is_empty() {
        assert_eq!(parse("Account").package(), Some(""));
    }

    #[test]
    fn parse_arrays() {
        let ty = parse("[[I");
        assert_eq!(ty.dimensions(), 2);
        assert_eq!(ty.element(), &JavaType::Primitive(JavaPrimitive::Int));
        assert_eq!(ty.component().map(ToString::to_string).as_deref(), Some("[I"));

        let ty = parse("[Lcom.acme.Account;");
        assert_eq!(ty.dimensions(), 1);
        assert_eq!(ty.element().class_name(), Some("com.acme.Account"));
    }

    #[test]
    fn display_round_trips() {
        for name in ["long", "java.lang.String", "[J", "[[Ljava.lang.String;"] {
            assert_eq!(parse(name).to_string(), name);
        }
    }

    #[test]
    fn malformed_names_are_rejected() {
        for name in ["", "[", "[V", "[Lfoo", "[Q", "a..b", "[[Lx;y"] {
            assert!(
                matches!(JavaType::parse(name), Err(AnalysisError::MalformedTypeName(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn primitive_idl_names() {
        assert_eq!(JavaPrimitive::Long.idl_name(), "long_long");
        assert_eq!(JavaPrimitive::Char.idl_name(), "wchar");
        assert_eq!(JavaPrimitive::Byte.type_code(), TypeCode::Basic(TcKind::Octet));
    }
}
