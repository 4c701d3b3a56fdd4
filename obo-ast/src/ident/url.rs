use std::fmt::{Debug, Display, Formatter};

use context_error::BoxedError;

use crate::{OboError, parse::validate_url, write::ToObo};

/// An identifier given as a URL, `scheme://rest`.
///
/// The URL is kept verbatim, it can not contain whitespace, backslashes, or the characters
/// `"!{},[]` as these cannot be escaped in a URL identifier.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Url {
    value: Box<str>,
}

impl Url {
    /// Create a new URL identifier.
    /// # Errors
    /// If the value does not start with a scheme followed by `://`, or if it contains characters
    /// that are not allowed in a URL identifier.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoxedError<'static, OboError>> {
        let value = value.as_ref();
        validate_url(value, 0, value.len())?;
        Ok(Self {
            value: value.into(),
        })
    }

    /// The full URL
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The scheme of the URL, eg `https`
    pub fn scheme(&self) -> &str {
        self.value
            .split_once("://")
            .map_or(&self.value, |(scheme, _)| scheme)
    }

    pub(crate) fn from_validated(value: &str) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<Url> for String {
    fn from(value: Url) -> Self {
        value.value.into()
    }
}

impl TryFrom<String> for Url {
    type Error = BoxedError<'static, OboError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for Url {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

impl Debug for Url {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Url(")?;
        crate::write::write_repr_str(&mut *f, &self.value)?;
        f.write_str(")")
    }
}
