//! Parsing of single OBO lines into clauses, property values, and identifiers.
//!
//! All readers take the full line and the byte position to start at, and return the position
//! directly after what they read together with the value. Errors point into the full line.

mod clause;
mod ident;
mod text;

#[cfg(test)]
mod test;

use std::str::FromStr;

use context_error::BoxedError;

pub(crate) use ident::{lexical_ident_part, validate_url};

use crate::{
    Clause, Expected, Ident, Line, OboError, PrefixedIdent, PropertyValue, QuotedString,
    UnprefixedIdent, Url, Xref, error::syntax_error,
};

/// The position after the value and the value itself
type ParseResult<T> = Result<(usize, T), BoxedError<'static, OboError>>;

/// Skip any whitespace starting at `start`
fn skip_whitespace(line: &str, start: usize) -> usize {
    line[start..]
        .find(|c: char| !c.is_whitespace())
        .map_or(line.len(), |i| start + i)
}

/// Check that a reader consumed the full text
fn full<T>(line: &str, (end, value): (usize, T)) -> Result<T, BoxedError<'static, OboError>> {
    if end == line.len() {
        Ok(value)
    } else {
        Err(syntax_error(
            line,
            end,
            line.len() - end,
            Expected::EndOfLine,
            "The text continues after the value",
        ))
    }
}

/// Parse a single property value line, `RELATION "VALUE" [DATATYPE]` or `RELATION RESOURCE`. Only
/// whitespace and a comment may follow the property value.
///
/// ```rust
/// # use context_error::FullErrorContent;
/// # use obo_ast::*;
/// let pv = parse_property_value("creation_date \"2019-04-08T23:21:05Z\" xsd:date").unwrap();
/// assert!(matches!(pv, PropertyValue::Typed(_)));
/// let err = parse_property_value("creation_date").unwrap_err();
/// assert_eq!(err.get_kind().offset(), Some(13));
/// ```
///
/// # Errors
/// If the line is not a valid property value, the error contains the offending byte offset.
pub fn parse_property_value(line: &str) -> Result<PropertyValue, BoxedError<'static, OboError>> {
    let (pos, pv) = clause::read_property_value(line, 0)?;
    text::read_end(line, pos)?;
    Ok(pv)
}

/// Parse a single clause. A line starting with a known tag followed by a colon is read according
/// to that tag, any other line is read as a bare property value. A trailing comment is accepted
/// and dropped, trailing qualifiers are not accepted (see [`parse_line`]).
///
/// ```rust
/// # use obo_ast::*;
/// let clause = parse_clause("is_a: GO:0005575 ! cellular_component").unwrap();
/// assert_eq!(clause.to_string(), "is_a: GO:0005575");
/// let clause = parse_clause("IAO:0000115 \"a definition\"").unwrap();
/// assert_eq!(clause.tag(), "property_value");
/// ```
///
/// # Errors
/// If the line is not a valid clause, the error contains the offending byte offset.
pub fn parse_clause(line: &str) -> Result<Clause, BoxedError<'static, OboError>> {
    let (pos, clause) = clause::read_clause(line, 0)?;
    text::read_end(line, pos)?;
    Ok(clause)
}

/// Parse a single clause including its trailing qualifiers and comment.
///
/// ```rust
/// # use obo_ast::*;
/// let line = parse_line("def: \"A membrane.\" [GOC:mah] {comment=\"checked\"} ! membrane").unwrap();
/// assert_eq!(line.comment().unwrap().as_str(), "membrane");
/// assert_eq!(line.qualifiers().unwrap().len(), 1);
/// ```
///
/// # Errors
/// If the line is not a valid clause, the error contains the offending byte offset.
pub fn parse_line(line: &str) -> Result<Line<Clause>, BoxedError<'static, OboError>> {
    let (pos, clause) = clause::read_clause(line, 0)?;
    let (pos, qualifiers) = text::read_qualifiers(line, pos)?;
    let comment = text::read_end(line, pos)?;
    Ok(Line::new(clause)
        .with_qualifiers(qualifiers)
        .with_comment(comment))
}

impl FromStr for Ident {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        full(s, ident::read_ident(s, 0, Expected::Identifier, false)?)
    }
}

impl FromStr for PrefixedIdent {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Ident>()? {
            Ident::Prefixed(id) => Ok(id),
            _ => Err(syntax_error(
                s,
                0,
                s.len(),
                Expected::Prefix,
                "A prefixed identifier has the form 'PREFIX:LOCAL'",
            )),
        }
    }
}

impl FromStr for UnprefixedIdent {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Url {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for PropertyValue {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_property_value(s)
    }
}

impl FromStr for Clause {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_clause(s)
    }
}

impl FromStr for Line<Clause> {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

impl FromStr for QuotedString {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        full(s, text::read_quoted(s, 0)?)
    }
}

impl FromStr for Xref {
    type Err = BoxedError<'static, OboError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        full(s, clause::read_xref(s, 0)?)
    }
}
