//! The boundary to loosely typed callers, for example bindings to dynamically typed languages or
//! data read from untyped sources.
//!
//! All constructors and setters here check the type of every argument before anything is built
//! or changed, a value of the wrong type is rejected with [`OboError::InvalidArgument`].

mod eval;

use context_error::BoxedError;
use tracing::debug;

pub use eval::evaluate;

use crate::{
    Ident, OboError, PlainPropertyValue, PrefixedIdent, PropertyValue, QuotedString,
    ResourcePropertyValue, TypedPropertyValue, UnprefixedIdent, Url, error::invalid_argument,
};

/// A loosely typed value as given by a dynamically typed caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value
    #[default]
    None,
    /// A boolean
    Bool(bool),
    /// An integer
    Int(i64),
    /// A floating point number
    Float(f64),
    /// A plain string
    Str(String),
    /// An identifier
    Ident(Ident),
    /// A property value
    PropertyValue(PropertyValue),
}

impl Value {
    /// The name of the type of this value, as used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Ident(_) => "Ident",
            Self::PropertyValue(_) => "PropertyValue",
        }
    }

    /// Get the identifier, rejecting any other type of value.
    /// # Errors
    /// If this is not an identifier.
    pub fn into_ident(self, argument: &str) -> Result<Ident, BoxedError<'static, OboError>> {
        match self {
            Self::Ident(id) => Ok(id),
            other => Err(reject(argument, "an identifier", &other)),
        }
    }

    /// Get the string, rejecting any other type of value.
    /// # Errors
    /// If this is not a string.
    pub fn into_str(self, argument: &str) -> Result<String, BoxedError<'static, OboError>> {
        match self {
            Self::Str(s) => Ok(s),
            other => Err(reject(argument, "a string", &other)),
        }
    }
}

/// Log and create the error for an argument of the wrong type
fn reject(argument: &str, required: &str, found: &Value) -> BoxedError<'static, OboError> {
    debug!(
        argument,
        required,
        found = found.type_name(),
        "rejected argument of the wrong type"
    );
    invalid_argument(argument, required, found.type_name())
}

macro_rules! value_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$variant(value.into())
            }
        }
    )+};
}

value_from!(
    Bool(bool),
    Int(i64),
    Int(i32),
    Float(f64),
    Str(String),
    Str(&str),
    Ident(Ident),
    Ident(PrefixedIdent),
    Ident(UnprefixedIdent),
    Ident(Url),
    PropertyValue(PropertyValue),
    PropertyValue(PlainPropertyValue),
    PropertyValue(TypedPropertyValue),
    PropertyValue(ResourcePropertyValue),
);

impl TryFrom<Value> for Ident {
    type Error = BoxedError<'static, OboError>;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.into_ident("value")
    }
}

impl TryFrom<Value> for PropertyValue {
    type Error = BoxedError<'static, OboError>;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::PropertyValue(pv) => Ok(pv),
            other => Err(reject("value", "a property value", &other)),
        }
    }
}

impl UnprefixedIdent {
    /// Create an unprefixed identifier from a loosely typed value, which has to be a string
    /// holding the lexical form.
    /// # Errors
    /// With [`OboError::InvalidArgument`] if the name is not a string, or with a syntax error if
    /// it is not a valid identifier.
    pub fn from_values(name: impl Into<Value>) -> Result<Self, BoxedError<'static, OboError>> {
        Self::new(name.into().into_str("name")?)
    }
}

impl PrefixedIdent {
    /// Create a prefixed identifier from loosely typed values, which both have to be strings
    /// holding the lexical form.
    /// # Errors
    /// With [`OboError::InvalidArgument`] if either is not a string, or with a syntax error if
    /// either is not valid.
    pub fn from_values(
        prefix: impl Into<Value>,
        local: impl Into<Value>,
    ) -> Result<Self, BoxedError<'static, OboError>> {
        let prefix = prefix.into().into_str("prefix")?;
        let local = local.into().into_str("local")?;
        Self::new(prefix, local)
    }
}

impl Url {
    /// Create a URL identifier from a loosely typed value, which has to be a string.
    /// # Errors
    /// With [`OboError::InvalidArgument`] if the value is not a string, or with a syntax error if
    /// it is not a valid URL.
    pub fn from_values(value: impl Into<Value>) -> Result<Self, BoxedError<'static, OboError>> {
        Self::new(value.into().into_str("value")?)
    }
}

impl PlainPropertyValue {
    /// Create a plain property value from loosely typed values.
    /// # Errors
    /// With [`OboError::InvalidArgument`] if the relation is not an identifier or the value is not
    /// a string.
    pub fn from_values(
        relation: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Self, BoxedError<'static, OboError>> {
        let relation = relation.into().into_ident("relation")?;
        let value = value.into().into_str("value")?;
        Ok(Self::new(relation, QuotedString::new(value)))
    }
}

impl TypedPropertyValue {
    /// Create a typed property value from loosely typed values.
    ///
    /// ```rust
    /// # use context_error::FullErrorContent;
    /// # use obo_ast::*;
    /// let err = TypedPropertyValue::from_values(
    ///     1_i64,
    ///     "2019-04-08T23:21:05Z",
    ///     PrefixedIdent::new("xsd", "date").unwrap(),
    /// )
    /// .unwrap_err();
    /// assert_eq!(err.get_kind(), OboError::InvalidArgument);
    /// ```
    ///
    /// # Errors
    /// With [`OboError::InvalidArgument`] if the relation or datatype is not an identifier or the
    /// value is not a string.
    pub fn from_values(
        relation: impl Into<Value>,
        value: impl Into<Value>,
        datatype: impl Into<Value>,
    ) -> Result<Self, BoxedError<'static, OboError>> {
        let relation = relation.into().into_ident("relation")?;
        let value = value.into().into_str("value")?;
        let datatype = datatype.into().into_ident("datatype")?;
        Ok(Self::new(relation, QuotedString::new(value), datatype))
    }
}

impl ResourcePropertyValue {
    /// Create a resource property value from loosely typed values.
    /// # Errors
    /// With [`OboError::InvalidArgument`] if the relation or resource is not an identifier.
    pub fn from_values(
        relation: impl Into<Value>,
        resource: impl Into<Value>,
    ) -> Result<Self, BoxedError<'static, OboError>> {
        let relation = relation.into().into_ident("relation")?;
        let resource = resource.into().into_ident("resource")?;
        Ok(Self::new(relation, resource))
    }
}

/// The checked relation setter is the same for all property values.
macro_rules! set_relation_value {
    ($($name:ident),+) => {$(
        impl $name {
            /// Replace the relation with a loosely typed value. Nothing changes if the value is
            /// rejected.
            /// # Errors
            /// With [`OboError::InvalidArgument`] if the value is not an identifier.
            pub fn set_relation_value(
                &mut self,
                relation: impl Into<Value>,
            ) -> Result<(), BoxedError<'static, OboError>> {
                let relation = relation.into().into_ident("relation")?;
                self.set_relation(relation);
                Ok(())
            }
        }
    )+};
}

set_relation_value!(
    PlainPropertyValue,
    TypedPropertyValue,
    ResourcePropertyValue,
    PropertyValue
);
