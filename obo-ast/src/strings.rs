//! String values, stored unescaped.

use std::fmt::{Display, Formatter};

use crate::write::ToObo;

/// A string that is written between double quotes, with `"` and `\` escaped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QuotedString(String);

/// A string that spans the rest of a clause, without quotes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnquotedString(String);

macro_rules! string_type {
    ($name:ident) => {
        impl $name {
            /// Create a new string from the unescaped text
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The unescaped text
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the unescaped text
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                self.to_obo(f)
            }
        }
    };
}

string_type!(QuotedString);
string_type!(UnquotedString);
