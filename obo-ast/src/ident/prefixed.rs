use std::fmt::{Debug, Display, Formatter};

use context_error::BoxedError;

use crate::{
    Expected, OboError,
    parse::lexical_ident_part,
    write::{ToObo, write_ident_part, write_repr_str},
};

/// An identifier with a prefix, written as `PREFIX:LOCAL`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrefixedIdent {
    prefix: Box<str>,
    local: Box<str>,
}

impl PrefixedIdent {
    /// Create a new prefixed identifier from the lexical (escaped) form of its prefix and local
    /// identifier.
    ///
    /// ```rust
    /// # use obo_ast::PrefixedIdent;
    /// let id = PrefixedIdent::new("MS", "1000031").unwrap();
    /// assert_eq!(id.to_string(), "MS:1000031");
    /// let id = PrefixedIdent::new("Wikipedia", "https\\://en.wikipedia.org/wiki/Gas").unwrap();
    /// assert_eq!(id.local(), "https://en.wikipedia.org/wiki/Gas");
    /// ```
    ///
    /// # Errors
    /// If either part is empty, or contains an unescaped colon, unescaped whitespace, or any other
    /// character that cannot occur unescaped in an identifier.
    pub fn new(
        prefix: impl AsRef<str>,
        local: impl AsRef<str>,
    ) -> Result<Self, BoxedError<'static, OboError>> {
        let prefix = lexical_ident_part(prefix.as_ref(), Expected::Prefix)?;
        let local = lexical_ident_part(local.as_ref(), Expected::LocalId)?;
        Ok(Self::from_unescaped(prefix, local))
    }

    /// The unescaped prefix (IDspace) of the identifier
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The unescaped local part of the identifier
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Check if the local identifier is canonical, meaning it only consists of digits. For
    /// example `GO:0046154` is canonical while `PATO:something` is not.
    pub fn is_canonical(&self) -> bool {
        self.prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && self.prefix.starts_with(|c: char| c.is_ascii_alphabetic())
            && !self.local.is_empty()
            && self.local.chars().all(|c| c.is_ascii_digit())
    }

    pub(crate) fn from_unescaped(prefix: String, local: String) -> Self {
        Self {
            prefix: prefix.into(),
            local: local.into(),
        }
    }
}

impl From<PrefixedIdent> for String {
    fn from(value: PrefixedIdent) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for PrefixedIdent {
    type Error = BoxedError<'static, OboError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for PrefixedIdent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

impl Debug for PrefixedIdent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut prefix = String::new();
        write_ident_part(&mut prefix, &self.prefix, false)?;
        let mut local = String::new();
        write_ident_part(&mut local, &self.local, true)?;
        f.write_str("PrefixedIdent(")?;
        write_repr_str(&mut *f, &prefix)?;
        f.write_str(", ")?;
        write_repr_str(&mut *f, &local)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use context_error::FullErrorContent;

    use super::*;

    #[test]
    fn from_str() {
        let actual = "GO:0046154".parse::<PrefixedIdent>().unwrap();
        let expected = PrefixedIdent::new("GO", "0046154").unwrap();
        assert_eq!(actual, expected);

        let actual = "PSI:MS".parse::<PrefixedIdent>().unwrap();
        let expected = PrefixedIdent::new("PSI", "MS").unwrap();
        assert_eq!(actual, expected);

        let actual = "CAS:22325-47-9".parse::<PrefixedIdent>().unwrap();
        let expected = PrefixedIdent::new("CAS", "22325-47-9").unwrap();
        assert_eq!(actual, expected);

        let actual = "Wikipedia:https\\://en.wikipedia.org/wiki/Gas"
            .parse::<PrefixedIdent>()
            .unwrap();
        assert_eq!(actual.prefix(), "Wikipedia");
        assert_eq!(actual.local(), "https://en.wikipedia.org/wiki/Gas");

        assert!("[Term]".parse::<PrefixedIdent>().is_err());
        assert!("".parse::<PrefixedIdent>().is_err());
        assert!("Some\nthing:spanning".parse::<PrefixedIdent>().is_err());
        assert!("GO:0046154 remaining".parse::<PrefixedIdent>().is_err());
        assert!("goslim_plant".parse::<PrefixedIdent>().is_err());
    }

    #[test]
    fn new_rejects_colons() {
        let err = PrefixedIdent::new("a:b", "c").unwrap_err();
        assert_eq!(err.get_kind().offset(), Some(1));
        assert_eq!(err.get_kind().expected(), Some(Expected::Prefix));
        let err = PrefixedIdent::new("a", "b:c").unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::LocalId));
        assert!(PrefixedIdent::new("", "c").is_err());
        assert!(PrefixedIdent::new("a", "").is_err());
        assert!(PrefixedIdent::new("a", "b\\:c").is_ok());
    }

    #[test]
    fn to_string() {
        let id = PrefixedIdent::new("GO", "0046154").unwrap();
        assert_eq!(id.to_string(), "GO:0046154");
        assert!(id.is_canonical());
        let id = PrefixedIdent::new("PATO", "something").unwrap();
        assert!(!id.is_canonical());
        let id = PrefixedIdent::new("http", "\\//example.com").unwrap();
        assert_eq!(id.to_string(), "http:\\//example.com");
    }
}
