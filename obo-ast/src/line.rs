//! A clause together with its trailing qualifiers and comment.

use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
};

use crate::{QuotedString, RelationIdent, write::ToObo};

/// A line in an OBO frame: a value followed by optional qualifiers and an optional comment,
/// `VALUE {QUALIFIERS} ! COMMENT`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Line<T> {
    inner: T,
    qualifiers: Option<QualifierList>,
    comment: Option<Comment>,
}

impl<T> Line<T> {
    /// Create a line without qualifiers or comment
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            qualifiers: None,
            comment: None,
        }
    }

    /// Add qualifiers to this line
    #[must_use]
    pub fn with_qualifiers(self, qualifiers: impl Into<Option<QualifierList>>) -> Self {
        Self {
            qualifiers: qualifiers.into(),
            ..self
        }
    }

    /// Add a comment to this line
    #[must_use]
    pub fn with_comment(self, comment: impl Into<Option<Comment>>) -> Self {
        Self {
            comment: comment.into(),
            ..self
        }
    }

    /// The value of this line
    pub const fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwrap the value of this line, dropping qualifiers and comment
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// The qualifiers of this line
    pub const fn qualifiers(&self) -> Option<&QualifierList> {
        self.qualifiers.as_ref()
    }

    /// The comment of this line
    pub const fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Map the value of this line while keeping the qualifiers and comment
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Line<U> {
        Line {
            inner: f(self.inner),
            qualifiers: self.qualifiers,
            comment: self.comment,
        }
    }
}

impl<T> From<T> for Line<T> {
    fn from(inner: T) -> Self {
        Self::new(inner)
    }
}

impl<T> Deref for Line<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Line<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: ToObo> Display for Line<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

/// A trailing qualifier, `key="value"`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Qualifier {
    /// The qualifier key
    pub key: RelationIdent,
    /// The qualifier value
    pub value: QuotedString,
}

impl Qualifier {
    /// Create a new qualifier
    pub fn new(key: impl Into<RelationIdent>, value: impl Into<QuotedString>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A list of trailing qualifiers, `{key="value", key="value"}`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QualifierList(Vec<Qualifier>);

impl QualifierList {
    /// Create a new list of qualifiers
    pub const fn new(qualifiers: Vec<Qualifier>) -> Self {
        Self(qualifiers)
    }

    /// Get the value of the first qualifier with the given key
    pub fn get(&self, key: &RelationIdent) -> Option<&QuotedString> {
        self.0.iter().find(|q| &q.key == key).map(|q| &q.value)
    }
}

impl Deref for QualifierList {
    type Target = Vec<Qualifier>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QualifierList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Qualifier> for QualifierList {
    fn from_iter<T: IntoIterator<Item = Qualifier>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A trailing comment, `! text`. Comments are kept verbatim, line breaks are replaced by spaces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Comment(String);

impl Comment {
    /// Create a new comment, surrounding whitespace is trimmed
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().replace(['\n', '\r'], " "))
    }

    /// The text of the comment
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}
