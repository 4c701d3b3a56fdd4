//! Clauses of OBO entity frames, `tag: value`.

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    str::FromStr,
};

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::{
    ClassIdent, Ident, NamespaceIdent, PropertyValue, QuotedString, RelationIdent, SubsetIdent,
    SynonymTypeIdent, UnquotedString, write::ToObo,
};

/// A single clause of an entity frame.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Clause {
    /// `id: ID`
    Id(Ident),
    /// `name: NAME`
    Name(UnquotedString),
    /// `namespace: NAMESPACE`
    Namespace(NamespaceIdent),
    /// `alt_id: ID`
    AltId(Ident),
    /// `def: "DEFINITION" [XREFS]`
    Def(QuotedString, XrefList),
    /// `comment: COMMENT`
    Comment(UnquotedString),
    /// `subset: SUBSET`
    Subset(SubsetIdent),
    /// `synonym: "SYNONYM" SCOPE [TYPE] [XREFS]`
    Synonym(Synonym),
    /// `xref: XREF`
    Xref(Xref),
    /// `property_value: PROPERTY VALUE`, also the result of parsing a bare property value
    PropertyValue(PropertyValue),
    /// `is_a: CLASS`
    IsA(ClassIdent),
    /// `instance_of: CLASS`
    InstanceOf(ClassIdent),
    /// `relationship: RELATION TARGET`
    Relationship(RelationIdent, ClassIdent),
    /// `created_by: PERSON`
    CreatedBy(UnquotedString),
    /// `creation_date: DATE`
    CreationDate(CreationDate),
    /// `is_obsolete: BOOLEAN`
    IsObsolete(bool),
    /// `replaced_by: ID`
    ReplacedBy(Ident),
    /// `consider: ID`
    Consider(Ident),
}

impl Clause {
    /// The tag of this clause, as written before the colon
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Name(_) => "name",
            Self::Namespace(_) => "namespace",
            Self::AltId(_) => "alt_id",
            Self::Def(_, _) => "def",
            Self::Comment(_) => "comment",
            Self::Subset(_) => "subset",
            Self::Synonym(_) => "synonym",
            Self::Xref(_) => "xref",
            Self::PropertyValue(_) => "property_value",
            Self::IsA(_) => "is_a",
            Self::InstanceOf(_) => "instance_of",
            Self::Relationship(_, _) => "relationship",
            Self::CreatedBy(_) => "created_by",
            Self::CreationDate(_) => "creation_date",
            Self::IsObsolete(_) => "is_obsolete",
            Self::ReplacedBy(_) => "replaced_by",
            Self::Consider(_) => "consider",
        }
    }

    /// All tags that can be parsed
    pub const TAGS: &'static [&'static str] = &[
        "id",
        "name",
        "namespace",
        "alt_id",
        "def",
        "comment",
        "subset",
        "synonym",
        "xref",
        "property_value",
        "is_a",
        "instance_of",
        "relationship",
        "created_by",
        "creation_date",
        "is_obsolete",
        "replaced_by",
        "consider",
    ];
}

impl From<PropertyValue> for Clause {
    fn from(pv: PropertyValue) -> Self {
        Self::PropertyValue(pv)
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

/// A cross reference to another entity, with an optional description.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Xref {
    /// The referenced identifier
    pub id: Ident,
    /// The optional description
    pub description: Option<QuotedString>,
}

impl Xref {
    /// Create a cross reference without description
    pub fn new(id: impl Into<Ident>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// Create a cross reference with a description
    pub fn with_description(id: impl Into<Ident>, description: impl Into<QuotedString>) -> Self {
        Self {
            id: id.into(),
            description: Some(description.into()),
        }
    }
}

impl Display for Xref {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

/// A list of cross references, `[XREF, XREF]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct XrefList(Vec<Xref>);

impl XrefList {
    /// Create a new list of cross references
    pub const fn new(xrefs: Vec<Xref>) -> Self {
        Self(xrefs)
    }
}

impl Deref for XrefList {
    type Target = Vec<Xref>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for XrefList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Xref> for XrefList {
    fn from_iter<T: IntoIterator<Item = Xref>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for XrefList {
    type Item = Xref;
    type IntoIter = std::vec::IntoIter<Xref>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for XrefList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

/// A synonym of an entity
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Synonym {
    /// The synonym itself
    pub description: QuotedString,
    /// The scope of the synonym
    pub scope: SynonymScope,
    /// Optional synonym type
    pub synonym_type: Option<SynonymTypeIdent>,
    /// The cross references supporting the synonym
    pub xrefs: XrefList,
}

/// The type or scope for a synonym
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SynonymScope {
    /// An exact relation
    Exact,
    /// A broad relation
    Broad,
    /// A narrow relation
    Narrow,
    /// A related term
    #[default]
    Related,
}

impl FromStr for SynonymScope {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXACT" => Ok(Self::Exact),
            "BROAD" => Ok(Self::Broad),
            "NARROW" => Ok(Self::Narrow),
            "RELATED" => Ok(Self::Related),
            _ => Err(()),
        }
    }
}

impl Display for SynonymScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "EXACT"),
            Self::Broad => write!(f, "BROAD"),
            Self::Narrow => write!(f, "NARROW"),
            Self::Related => write!(f, "RELATED"),
        }
    }
}

/// The creation date of an entity, either a plain date or a full date time with offset.
/// Two date times are only equal if both the local time and the offset are the same, so equal
/// dates are always written the same way.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub enum CreationDate {
    /// An ISO 8601 calendar date, `2019-04-08`
    Date(NaiveDate),
    /// An RFC 3339 date time, `2019-04-08T23:21:05Z`
    DateTime(DateTime<FixedOffset>),
}

impl PartialEq for CreationDate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => {
                a.naive_local() == b.naive_local() && a.offset() == b.offset()
            }
            _ => false,
        }
    }
}

impl Eq for CreationDate {}

impl Hash for CreationDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Date(date) => date.hash(state),
            Self::DateTime(date) => {
                date.naive_local().hash(state);
                date.offset().hash(state);
            }
        }
    }
}

impl From<NaiveDate> for CreationDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for CreationDate {
    fn from(date: DateTime<FixedOffset>) -> Self {
        Self::DateTime(date)
    }
}

impl Display for CreationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Clause, parse_clause};

    #[test]
    fn creation_dates_compare_structurally() {
        let local = parse_clause("creation_date: 2019-04-08T23:21:05+02:00").unwrap();
        let utc = parse_clause("creation_date: 2019-04-08T21:21:05Z").unwrap();
        assert_ne!(local, utc);
        assert_eq!(
            local,
            parse_clause("creation_date: 2019-04-08T23:21:05+02:00").unwrap()
        );
        let Clause::CreationDate(date) = utc else {
            panic!("not a creation date: {utc:?}")
        };
        assert_eq!(date.to_string(), "2019-04-08T21:21:05Z");
        assert_ne!(
            parse_clause("creation_date: 2019-04-08").unwrap(),
            parse_clause("creation_date: 2019-04-08T00:00:00Z").unwrap()
        );
        let set: HashSet<Clause> = [local.clone(), local, Clause::CreationDate(date)].into();
        assert_eq!(set.len(), 2);
    }
}
