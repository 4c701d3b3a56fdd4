//! Identifiers with a specific role in a clause, all thin wrappers around [`Ident`].

use std::fmt::{Debug, Display, Formatter};

use super::{Ident, PrefixedIdent, UnprefixedIdent, Url};

/// Define a newtype around [`Ident`] for identifiers with a specific role.
macro_rules! ident_subclass {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        #[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name(Ident);

        impl $name {
            /// Wrap an identifier
            pub fn new(id: impl Into<Ident>) -> Self {
                Self(id.into())
            }

            /// Get the wrapped identifier
            pub const fn as_ident(&self) -> &Ident {
                &self.0
            }

            /// Unwrap into the wrapped identifier
            pub fn into_ident(self) -> Ident {
                self.0
            }
        }

        impl AsRef<Ident> for $name {
            fn as_ref(&self) -> &Ident {
                &self.0
            }
        }

        impl From<Ident> for $name {
            fn from(id: Ident) -> Self {
                Self(id)
            }
        }

        impl From<PrefixedIdent> for $name {
            fn from(id: PrefixedIdent) -> Self {
                Self(id.into())
            }
        }

        impl From<UnprefixedIdent> for $name {
            fn from(id: UnprefixedIdent) -> Self {
                Self(id.into())
            }
        }

        impl From<Url> for $name {
            fn from(url: Url) -> Self {
                Self(url.into())
            }
        }

        impl From<$name> for Ident {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = context_error::BoxedError<'static, crate::OboError>;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<Ident>().map(Self)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Debug::fmt(&self.0, f)
            }
        }
    };
}

ident_subclass!(
    /// The identifier of a class (term)
    ClassIdent
);
ident_subclass!(
    /// The identifier of a relation (typedef)
    RelationIdent
);
ident_subclass!(
    /// The identifier of a subset
    SubsetIdent
);
ident_subclass!(
    /// The identifier of a namespace
    NamespaceIdent
);
ident_subclass!(
    /// The identifier of a synonym type
    SynonymTypeIdent
);
