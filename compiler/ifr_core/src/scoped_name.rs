//! Hierarchical `::`-separated names.

use std::fmt;

use smallvec::SmallVec;

/// A scoped name such as `::org::omg::CORBA::WStringValue` or `Bar::op`.
///
/// Absolute names are anchored at the repository root; relative names are
/// resolved against whatever container performs the lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScopedName {
    absolute: bool,
    segments: SmallVec<[String; 4]>,
}

impl ScopedName {
    /// The absolute name of the repository root (no segments).
    pub fn root() -> Self {
        Self {
            absolute: true,
            segments: SmallVec::new(),
        }
    }

    /// Build an absolute name from its segments.
    pub fn absolute<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            absolute: true,
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `A::B::C` (relative) or `::A::B` (absolute).
    ///
    /// Returns `None` for names with an empty segment such as `A::::B` or
    /// a trailing `::`. The bare string `::` parses as the root.
    pub fn parse(text: &str) -> Option<Self> {
        let (absolute, rest) = match text.strip_prefix("::") {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if rest.is_empty() {
            return Some(Self {
                absolute,
                segments: SmallVec::new(),
            });
        }

        let mut segments = SmallVec::new();
        for segment in rest.split("::") {
            if segment.is_empty() {
                return None;
            }
            segments.push(segment.to_owned());
        }

        Some(Self { absolute, segments })
    }

    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment, i.e. the simple name.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Split off the first segment; the remainder is always relative.
    pub fn split_first(&self) -> Option<(&str, ScopedName)> {
        let (first, rest) = self.segments.split_first()?;
        let remainder = ScopedName {
            absolute: false,
            segments: rest.iter().cloned().collect(),
        };
        Some((first.as_str(), remainder))
    }

    /// The same path with the root anchor dropped.
    pub fn to_relative(&self) -> ScopedName {
        ScopedName {
            absolute: false,
            segments: self.segments.clone(),
        }
    }

    /// Append a simple name, keeping the absolute flag.
    pub fn child(&self, name: &str) -> ScopedName {
        let mut segments = self.segments.clone();
        segments.push(name.to_owned());
        ScopedName {
            absolute: self.absolute,
            segments,
        }
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if self.absolute || i > 0 {
                f.write_str("::")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_absolute() {
        let name = ScopedName::parse("::org::omg::CORBA").unwrap_or_default();
        assert!(name.is_absolute());
        assert_eq!(name.segments(), ["org", "omg", "CORBA"]);
        assert_eq!(name.to_string(), "::org::omg::CORBA");
    }

    #[test]
    fn parse_relative() {
        let name = ScopedName::parse("Bar::op").unwrap_or_default();
        assert!(!name.is_absolute());
        assert_eq!(name.last(), Some("op"));
        assert_eq!(name.to_string(), "Bar::op");
    }

    #[test]
    fn parse_root() {
        assert_eq!(ScopedName::parse("::"), Some(ScopedName::root()));
        assert_eq!(ScopedName::root().to_string(), "");
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert_eq!(ScopedName::parse("a::::b"), None);
        assert_eq!(ScopedName::parse("a::"), None);
    }

    #[test]
    fn child_of_root_is_anchored() {
        let top = ScopedName::root().child("java");
        assert_eq!(top.to_string(), "::java");
        assert_eq!(top.child("lang").to_string(), "::java::lang");
    }

    #[test]
    fn split_first_yields_relative_remainder() {
        let name = ScopedName::absolute(["a", "b", "c"]);
        let (first, rest) = name.split_first().unwrap_or(("", ScopedName::root()));
        assert_eq!(first, "a");
        assert!(!rest.is_absolute());
        assert_eq!(rest.to_string(), "b::c");
    }
}
