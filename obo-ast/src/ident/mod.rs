//! Identifiers used in OBO documents.
//!
//! All identifier components are stored unescaped, the escaped lexical form (as it appears in an
//! OBO file) is only used when constructing from or rendering to text.

mod prefixed;
mod subclasses;
mod unprefixed;
mod url;

use std::fmt::{Debug, Display, Formatter};

pub use prefixed::PrefixedIdent;
pub use subclasses::*;
pub use unprefixed::UnprefixedIdent;
pub use url::Url;

use crate::write::ToObo;

/// An identifier, either prefixed, unprefixed, or a URL.
///
/// Equality is structural and variant-discriminated, an identifier of one variant never equals an
/// identifier of another variant. The canonical string determines the variant uniquely.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Ident {
    /// A prefixed identifier `PREFIX:LOCAL`
    Prefixed(PrefixedIdent),
    /// A bare identifier without namespace
    Unprefixed(UnprefixedIdent),
    /// A URL
    Url(Url),
}

impl Ident {
    /// The prefixed identifier, if this is one
    pub const fn as_prefixed(&self) -> Option<&PrefixedIdent> {
        match self {
            Self::Prefixed(id) => Some(id),
            _ => None,
        }
    }

    /// The unprefixed identifier, if this is one
    pub const fn as_unprefixed(&self) -> Option<&UnprefixedIdent> {
        match self {
            Self::Unprefixed(id) => Some(id),
            _ => None,
        }
    }

    /// The URL, if this is one
    pub const fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            _ => None,
        }
    }
}

impl From<PrefixedIdent> for Ident {
    fn from(id: PrefixedIdent) -> Self {
        Self::Prefixed(id)
    }
}

impl From<UnprefixedIdent> for Ident {
    fn from(id: UnprefixedIdent) -> Self {
        Self::Unprefixed(id)
    }
}

impl From<Url> for Ident {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<Ident> for String {
    fn from(value: Ident) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Ident {
    type Error = context_error::BoxedError<'static, crate::OboError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

impl Debug for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefixed(id) => Debug::fmt(id, f),
            Self::Unprefixed(id) => Debug::fmt(id, f),
            Self::Url(url) => Debug::fmt(url, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        let actual = "http://purl.obolibrary.org/obo/po.owl".parse::<Ident>().unwrap();
        let expected = Ident::Url(Url::new("http://purl.obolibrary.org/obo/po.owl").unwrap());
        assert_eq!(actual, expected);

        let actual = "GO:0046154".parse::<Ident>().unwrap();
        let expected = Ident::Prefixed(PrefixedIdent::new("GO", "0046154").unwrap());
        assert_eq!(actual, expected);

        let actual = "goslim_plant".parse::<Ident>().unwrap();
        let expected = Ident::Unprefixed(UnprefixedIdent::new("goslim_plant").unwrap());
        assert_eq!(actual, expected);

        assert!("".parse::<Ident>().is_err());
        assert!("GO:0046154 remaining".parse::<Ident>().is_err());
        assert!("GO:".parse::<Ident>().is_err());
        assert!(":0046154".parse::<Ident>().is_err());
    }

    #[test]
    fn variants_never_equal() {
        let url: Ident = "http://example.com".parse().unwrap();
        let prefixed: Ident = PrefixedIdent::new("http", "\\//example.com").unwrap().into();
        assert_ne!(url, prefixed);
        assert_ne!(url.to_string(), prefixed.to_string());
        assert_eq!(prefixed.to_string().parse::<Ident>().unwrap(), prefixed);

        let unprefixed: Ident = UnprefixedIdent::new("GO\\:0046154").unwrap().into();
        let prefixed: Ident = PrefixedIdent::new("GO", "0046154").unwrap().into();
        assert_ne!(unprefixed, prefixed);
        assert_eq!(unprefixed.to_string(), "GO\\:0046154");
        assert_eq!(unprefixed.to_string().parse::<Ident>().unwrap(), unprefixed);
    }

    #[test]
    fn debug() {
        let id: Ident = PrefixedIdent::new("xsd", "date").unwrap().into();
        assert_eq!(format!("{id:?}"), "PrefixedIdent('xsd', 'date')");
        let id: Ident = UnprefixedIdent::new("creation_date").unwrap().into();
        assert_eq!(format!("{id:?}"), "UnprefixedIdent('creation_date')");
        let id: Ident = Url::new("https://example.com/a").unwrap().into();
        assert_eq!(format!("{id:?}"), "Url('https://example.com/a')");
    }
}
