//! Property values: annotations binding a relation to a literal or to another entity.

use std::fmt::{Debug, Display, Formatter};

use crate::{
    Ident, QuotedString,
    write::{ToObo, write_repr_str},
};

/// A clause value binding a property to a value in the relevant entity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PropertyValue {
    /// A property value where the value is an untyped string, `RELATION "VALUE"`
    Plain(PlainPropertyValue),
    /// A property value where the value is a string with a datatype, `RELATION "VALUE" DATATYPE`
    Typed(TypedPropertyValue),
    /// A property value where the value is another identifier, `RELATION RESOURCE`
    Resource(ResourcePropertyValue),
}

/// A property value where the value is an untyped string, `RELATION "VALUE"`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PlainPropertyValue {
    relation: Ident,
    value: QuotedString,
}

/// A property value where the value is a string annotated with a datatype (generally an XSD
/// datatype), `RELATION "VALUE" DATATYPE`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypedPropertyValue {
    relation: Ident,
    value: QuotedString,
    datatype: Ident,
}

/// A property value where the value is another identifier, `RELATION RESOURCE`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ResourcePropertyValue {
    relation: Ident,
    resource: Ident,
}

impl PlainPropertyValue {
    /// Create a new plain property value
    pub fn new(relation: impl Into<Ident>, value: impl Into<QuotedString>) -> Self {
        Self {
            relation: relation.into(),
            value: value.into(),
        }
    }

    /// The literal value
    pub const fn value(&self) -> &QuotedString {
        &self.value
    }

    /// Replace the literal value
    pub fn set_value(&mut self, value: impl Into<QuotedString>) {
        self.value = value.into();
    }
}

impl TypedPropertyValue {
    /// Create a new typed property value
    /// ```rust
    /// # use obo_ast::*;
    /// let pv = TypedPropertyValue::new(
    ///     UnprefixedIdent::new("creation_date").unwrap(),
    ///     "2019-04-08T23:21:05Z",
    ///     PrefixedIdent::new("xsd", "date").unwrap(),
    /// );
    /// assert_eq!(pv.to_string(), "creation_date \"2019-04-08T23:21:05Z\" xsd:date");
    /// ```
    pub fn new(
        relation: impl Into<Ident>,
        value: impl Into<QuotedString>,
        datatype: impl Into<Ident>,
    ) -> Self {
        Self {
            relation: relation.into(),
            value: value.into(),
            datatype: datatype.into(),
        }
    }

    /// The literal value
    pub const fn value(&self) -> &QuotedString {
        &self.value
    }

    /// Replace the literal value
    pub fn set_value(&mut self, value: impl Into<QuotedString>) {
        self.value = value.into();
    }

    /// The datatype of the value
    pub const fn datatype(&self) -> &Ident {
        &self.datatype
    }

    /// Replace the datatype
    pub fn set_datatype(&mut self, datatype: impl Into<Ident>) {
        self.datatype = datatype.into();
    }
}

impl ResourcePropertyValue {
    /// Create a new resource property value
    pub fn new(relation: impl Into<Ident>, resource: impl Into<Ident>) -> Self {
        Self {
            relation: relation.into(),
            resource: resource.into(),
        }
    }

    /// The identifier this property points to
    pub const fn resource(&self) -> &Ident {
        &self.resource
    }

    /// Replace the identifier this property points to
    pub fn set_resource(&mut self, resource: impl Into<Ident>) {
        self.resource = resource.into();
    }
}

/// The relation accessors are the same for all property value structs.
macro_rules! relation_accessors {
    ($($name:ident),+) => {$(
        impl $name {
            /// The relation of this property value
            pub const fn relation(&self) -> &Ident {
                &self.relation
            }

            /// Replace the relation of this property value
            pub fn set_relation(&mut self, relation: impl Into<Ident>) {
                self.relation = relation.into();
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                self.to_obo(f)
            }
        }
    )+};
}

relation_accessors!(PlainPropertyValue, TypedPropertyValue, ResourcePropertyValue);

impl PropertyValue {
    /// The relation of this property value
    pub const fn relation(&self) -> &Ident {
        match self {
            Self::Plain(pv) => pv.relation(),
            Self::Typed(pv) => pv.relation(),
            Self::Resource(pv) => pv.relation(),
        }
    }

    /// Replace the relation of this property value
    pub fn set_relation(&mut self, relation: impl Into<Ident>) {
        match self {
            Self::Plain(pv) => pv.set_relation(relation),
            Self::Typed(pv) => pv.set_relation(relation),
            Self::Resource(pv) => pv.set_relation(relation),
        }
    }
}

impl From<PlainPropertyValue> for PropertyValue {
    fn from(pv: PlainPropertyValue) -> Self {
        Self::Plain(pv)
    }
}

impl From<TypedPropertyValue> for PropertyValue {
    fn from(pv: TypedPropertyValue) -> Self {
        Self::Typed(pv)
    }
}

impl From<ResourcePropertyValue> for PropertyValue {
    fn from(pv: ResourcePropertyValue) -> Self {
        Self::Resource(pv)
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_obo(f)
    }
}

impl Debug for PropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(pv) => Debug::fmt(pv, f),
            Self::Typed(pv) => Debug::fmt(pv, f),
            Self::Resource(pv) => Debug::fmt(pv, f),
        }
    }
}

// The debug representation is the constructor call that creates an equal value, see
// `host::evaluate`.
impl Debug for PlainPropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlainPropertyValue({:?}, ", self.relation)?;
        write_repr_str(&mut *f, self.value.as_str())?;
        f.write_str(")")
    }
}

impl Debug for TypedPropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypedPropertyValue({:?}, ", self.relation)?;
        write_repr_str(&mut *f, self.value.as_str())?;
        write!(f, ", {:?})", self.datatype)
    }
}

impl Debug for ResourcePropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ResourcePropertyValue({:?}, {:?})",
            self.relation, self.resource
        )
    }
}
