//! # OBO syntax tree
//! This library handles the identifiers and property values of the
//! [OBO 1.4](https://owlcollab.github.io/oboformat/doc/obo-syntax.html) format. Single lines are
//! parsed into typed values and any value can be written back to its canonical text.
//!
//! Handles:
//! * Identifiers ([`Ident`]: [`PrefixedIdent`], [`UnprefixedIdent`], and [`Url`])
//! * Property values ([`PropertyValue`]: [`PlainPropertyValue`], [`TypedPropertyValue`], and
//!   [`ResourcePropertyValue`])
//! * Entity frame clauses ([`parse_clause`], [`parse_line`]) with trailing qualifiers and comments
//! * Writing canonical text ([`ToObo`], [`render`])
//! * Loosely typed construction and the constructor call debug representation ([`host`])
//!
//! ```rust
//! # use obo_ast::*;
//! let mut pv = TypedPropertyValue::new(
//!     UnprefixedIdent::new("creation_date").unwrap(),
//!     "2019-04-08T23:21:05Z",
//!     PrefixedIdent::new("xsd", "date").unwrap(),
//! );
//! assert_eq!(render(&pv), "creation_date \"2019-04-08T23:21:05Z\" xsd:date");
//! pv.set_relation(PrefixedIdent::new("IAO", "0000219").unwrap());
//! assert_eq!(
//!     parse_clause(&render(&pv)).unwrap(),
//!     Clause::PropertyValue(pv.into())
//! );
//! ```
//!
//! # Features
//! * `serde` (default) derives `Serialize` and `Deserialize` for all types, identifiers are
//!   stored as their canonical text and validated when deserialized.

mod clause;
mod error;
pub mod host;
mod ident;
mod line;
mod parse;
mod pv;
mod strings;
mod write;

pub use clause::*;
pub use error::{Expected, OboError};
pub use ident::*;
pub use line::*;
pub use parse::{parse_clause, parse_line, parse_property_value};
pub use pv::*;
pub use strings::*;
pub use write::{ToObo, render};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
