//! Property values and clauses.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use tracing::trace;

use super::{
    ParseResult,
    ident::read_ident,
    skip_whitespace,
    text::{read_quoted, read_unquoted},
};
use crate::{
    ClassIdent, Clause, CreationDate, Expected, Ident, NamespaceIdent, PlainPropertyValue,
    PropertyValue, QuotedString, RelationIdent, ResourcePropertyValue, SubsetIdent, Synonym,
    SynonymScope, SynonymTypeIdent, TypedPropertyValue, Xref, XrefList, error::syntax_error,
};

/// A clause tag at the start of a line, directly followed by a colon and whitespace
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_-]*):(?:\s|$)").unwrap());

/// The states of the property value reader
enum State {
    /// Before the relation
    Start,
    /// Reading the relation identifier
    ReadRelation(usize),
    /// After the relation, a quoted value or a resource identifier follows
    ReadValueOrResource(usize, Ident),
    /// Reading the quoted value
    ReadQuotedValue(usize, Ident),
    /// After the quoted value, an optional datatype follows
    ReadDatatype(usize, Ident, QuotedString),
    /// A full property value has been read
    End(usize, PropertyValue),
}

/// Read a property value `RELATION "VALUE" [DATATYPE]` or `RELATION RESOURCE` starting at `start`.
/// The returned position is directly after the last token.
pub(super) fn read_property_value(line: &str, start: usize) -> ParseResult<PropertyValue> {
    let mut state = State::Start;
    loop {
        state = match state {
            State::Start => State::ReadRelation(skip_whitespace(line, start)),
            State::ReadRelation(pos) => {
                let (pos, relation) = read_ident(line, pos, Expected::Identifier, false)?;
                State::ReadValueOrResource(pos, relation)
            }
            State::ReadValueOrResource(pos, relation) => {
                let pos = skip_whitespace(line, pos);
                match line[pos..].chars().next() {
                    None | Some('!') => {
                        return Err(syntax_error(
                            line,
                            pos,
                            1,
                            Expected::Value,
                            "A property value needs a quoted value or a resource after the relation",
                        ));
                    }
                    Some('"') => State::ReadQuotedValue(pos, relation),
                    Some(_) => {
                        let (pos, resource) = read_ident(line, pos, Expected::Value, false)?;
                        State::End(
                            pos,
                            ResourcePropertyValue::new(relation, resource).into(),
                        )
                    }
                }
            }
            State::ReadQuotedValue(pos, relation) => {
                let (pos, value) = read_quoted(line, pos)?;
                State::ReadDatatype(pos, relation, value)
            }
            State::ReadDatatype(pos, relation, value) => {
                let next = skip_whitespace(line, pos);
                match line[next..].chars().next() {
                    None | Some('!' | '{') => {
                        State::End(pos, PlainPropertyValue::new(relation, value).into())
                    }
                    Some(_) => {
                        let (pos, datatype) = read_ident(line, next, Expected::Identifier, false)?;
                        State::End(
                            pos,
                            TypedPropertyValue::new(relation, value, datatype).into(),
                        )
                    }
                }
            }
            State::End(pos, pv) => return Ok((pos, pv)),
        }
    }
}

/// The end of a plain word (boolean, date, or synonym scope)
fn word_end(line: &str, start: usize) -> usize {
    line[start..]
        .find(|c: char| c.is_whitespace() || matches!(c, '!' | '{' | '['))
        .map_or(line.len(), |i| start + i)
}

/// Read a single cross reference `ID ["DESCRIPTION"]`.
pub(super) fn read_xref(line: &str, start: usize) -> ParseResult<Xref> {
    let (pos, id) = read_ident(line, start, Expected::Identifier, false)?;
    let next = skip_whitespace(line, pos);
    if line[next..].starts_with('"') {
        let (pos, description) = read_quoted(line, next)?;
        Ok((pos, Xref::with_description(id, description)))
    } else {
        Ok((pos, Xref::new(id)))
    }
}

/// Read a list of cross references `[XREF, XREF]` starting at the opening bracket.
fn read_xref_list(line: &str, start: usize) -> ParseResult<XrefList> {
    if !line[start..].starts_with('[') {
        return Err(syntax_error(
            line,
            start,
            1,
            Expected::XrefList,
            "A list of cross references starts with '['",
        ));
    }
    let mut xrefs = Vec::new();
    let mut pos = skip_whitespace(line, start + 1);
    if line[pos..].starts_with(']') {
        return Ok((pos + 1, XrefList::new(xrefs)));
    }
    loop {
        let (after, xref) = read_xref(line, pos)?;
        xrefs.push(xref);
        pos = skip_whitespace(line, after);
        match line[pos..].chars().next() {
            Some(',') => pos = skip_whitespace(line, pos + 1),
            Some(']') => return Ok((pos + 1, XrefList::new(xrefs))),
            _ => {
                return Err(syntax_error(
                    line,
                    pos,
                    1,
                    Expected::XrefListSeparator,
                    "Cross references are separated by ',' and the list is closed by ']'",
                ));
            }
        }
    }
}

/// Read a synonym `"DESCRIPTION" SCOPE [TYPE] [XREFS]`.
fn read_synonym(line: &str, start: usize) -> ParseResult<Synonym> {
    let (pos, description) = read_quoted(line, start)?;
    let pos = skip_whitespace(line, pos);
    let end = word_end(line, pos);
    let scope = line[pos..end].parse::<SynonymScope>().map_err(|()| {
        syntax_error(
            line,
            pos,
            end - pos,
            Expected::SynonymScope,
            "A synonym needs a scope",
        )
    })?;
    let mut pos = skip_whitespace(line, end);
    let synonym_type = if line[pos..].starts_with('[') {
        None
    } else {
        let (after, id) = read_ident(line, pos, Expected::XrefList, false)?;
        pos = skip_whitespace(line, after);
        Some(SynonymTypeIdent::new(id))
    };
    let (pos, xrefs) = read_xref_list(line, pos)?;
    Ok((
        pos,
        Synonym {
            description,
            scope,
            synonym_type,
            xrefs,
        },
    ))
}

/// Read a creation date, either an RFC 3339 date time or an ISO 8601 date.
fn read_creation_date(line: &str, start: usize) -> ParseResult<CreationDate> {
    let end = word_end(line, start);
    let text = &line[start..end];
    DateTime::parse_from_rfc3339(text)
        .map(CreationDate::from)
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d").map(CreationDate::from))
        .map(|date| (end, date))
        .map_err(|err| {
            syntax_error(
                line,
                start,
                end - start,
                Expected::Date,
                format!("The creation date is not a valid date or date time: {err}"),
            )
        })
}

/// Read `true` or `false`.
fn read_boolean(line: &str, start: usize) -> ParseResult<bool> {
    let end = word_end(line, start);
    match &line[start..end] {
        "true" => Ok((end, true)),
        "false" => Ok((end, false)),
        _ => Err(syntax_error(
            line,
            start,
            end - start,
            Expected::Boolean,
            "A boolean is written as 'true' or 'false'",
        )),
    }
}

/// Read a clause starting at `start`. If the line starts with a tag the value is read according
/// to that tag, otherwise the whole line is read as a bare property value.
pub(super) fn read_clause(line: &str, start: usize) -> ParseResult<Clause> {
    let Some(tag) = TAG.captures(&line[start..]).and_then(|c| c.get(1)) else {
        trace!("no clause tag, reading a bare property value");
        let (pos, pv) = read_property_value(line, start)?;
        return Ok((pos, Clause::PropertyValue(pv)));
    };
    let tag_start = start + tag.start();
    let pos = skip_whitespace(line, start + tag.end() + 1);
    trace!(tag = tag.as_str(), "reading clause");
    let identifier = |pos: usize| read_ident(line, pos, Expected::Identifier, false);
    Ok(match tag.as_str() {
        "id" => identifier(pos).map(|(p, id)| (p, Clause::Id(id)))?,
        "name" => read_unquoted(line, pos).map(|(p, s)| (p, Clause::Name(s)))?,
        "namespace" => {
            identifier(pos).map(|(p, id)| (p, Clause::Namespace(NamespaceIdent::new(id))))?
        }
        "alt_id" => identifier(pos).map(|(p, id)| (p, Clause::AltId(id)))?,
        "def" => {
            let (after, definition) = read_quoted(line, pos)?;
            let (after, xrefs) = read_xref_list(line, skip_whitespace(line, after))?;
            (after, Clause::Def(definition, xrefs))
        }
        "comment" => read_unquoted(line, pos).map(|(p, s)| (p, Clause::Comment(s)))?,
        "subset" => identifier(pos).map(|(p, id)| (p, Clause::Subset(SubsetIdent::new(id))))?,
        "synonym" => read_synonym(line, pos).map(|(p, s)| (p, Clause::Synonym(s)))?,
        "xref" => read_xref(line, pos).map(|(p, x)| (p, Clause::Xref(x)))?,
        "property_value" => {
            read_property_value(line, pos).map(|(p, pv)| (p, Clause::PropertyValue(pv)))?
        }
        "is_a" => identifier(pos).map(|(p, id)| (p, Clause::IsA(ClassIdent::new(id))))?,
        "instance_of" => {
            identifier(pos).map(|(p, id)| (p, Clause::InstanceOf(ClassIdent::new(id))))?
        }
        "relationship" => {
            let (after, relation) = identifier(pos)?;
            let (after, target) = identifier(skip_whitespace(line, after))?;
            (
                after,
                Clause::Relationship(RelationIdent::new(relation), ClassIdent::new(target)),
            )
        }
        "created_by" => read_unquoted(line, pos).map(|(p, s)| (p, Clause::CreatedBy(s)))?,
        "creation_date" => {
            read_creation_date(line, pos).map(|(p, d)| (p, Clause::CreationDate(d)))?
        }
        "is_obsolete" => read_boolean(line, pos).map(|(p, b)| (p, Clause::IsObsolete(b)))?,
        "replaced_by" => identifier(pos).map(|(p, id)| (p, Clause::ReplacedBy(id)))?,
        "consider" => identifier(pos).map(|(p, id)| (p, Clause::Consider(id)))?,
        other => {
            return Err(syntax_error(
                line,
                tag_start,
                other.len(),
                Expected::Tag,
                format!(
                    "The tag '{other}' is not known, use one of: {}",
                    Clause::TAGS.join(", ")
                ),
            ));
        }
    })
}
