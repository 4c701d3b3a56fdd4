use std::fmt::{Debug, Display, Formatter};

use context_error::BoxedError;

use crate::{OboError, parse::lexical_ident_part, write::ToObo};

/// An identifier without a prefix.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnprefixedIdent {
    name: Box<str>,
}

impl UnprefixedIdent {
    /// Create a new unprefixed identifier from its lexical (escaped) form.
    ///
    /// ```rust
    /// # use obo_ast::UnprefixedIdent;
    /// let id = UnprefixedIdent::new("has\\ part").unwrap();
    /// assert_eq!(id.name(), "has part");
    /// assert!(UnprefixedIdent::new("has part").is_err());
    /// ```
    ///
    /// # Errors
    /// If the name is empty, or contains unescaped whitespace, colons, or other characters that
    /// cannot occur unescaped in an identifier.
    pub fn new(name: impl AsRef<str>) -> Result<Self, BoxedError<'static, OboError>> {
        lexical_ident_part(name.as_ref(), crate::Expected::Identifier)
            .map(|name| Self { name: name.into() })
    }

    /// The unescaped name of this identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create an identifier from an already unescaped name, only to be used by the parser which
    /// validated the lexical form.
    pub(crate) fn from_unescaped(name: String) -> Self {
        Self { name: name.into() }
    }
}

impl From<UnprefixedIdent> for String {
    fn from(value: UnprefixedIdent) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UnprefixedIdent {
    type Error = BoxedError<'static, OboError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for UnprefixedIdent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

impl Debug for UnprefixedIdent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("UnprefixedIdent(")?;
        crate::write::write_repr_str(&mut *f, &self.to_obo_string())?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use context_error::FullErrorContent;

    use super::*;

    #[test]
    fn new() {
        assert_eq!(
            UnprefixedIdent::new("creation_date").unwrap().name(),
            "creation_date"
        );
        assert_eq!(UnprefixedIdent::new("a\\:b").unwrap().name(), "a:b");
        assert_eq!(UnprefixedIdent::new("tab\\tstop").unwrap().name(), "tab\tstop");

        for invalid in ["", "a b", "a:b", "a\\", "say\"hi\"", "x!y", "a\tb"] {
            let err = UnprefixedIdent::new(invalid).unwrap_err();
            assert!(err.get_kind().is_syntax(), "{invalid}");
        }
    }

    #[test]
    fn unescaped_colon_offset() {
        let err = UnprefixedIdent::new("abc:def").unwrap_err();
        assert_eq!(err.get_kind().offset(), Some(3));
    }

    #[test]
    fn to_string() {
        let id = UnprefixedIdent::new("a\\ b\\:c").unwrap();
        assert_eq!(id.to_string(), "a\\ b\\:c");
        assert_eq!(format!("{id:?}"), "UnprefixedIdent('a\\\\ b\\\\:c')");
    }
}
