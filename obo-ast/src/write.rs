//! Serialization of all OBO values to their canonical text. All quoting and escaping is done here.

use std::fmt::Write;

use chrono::SecondsFormat;
use itertools::Itertools;

use crate::{
    Clause, Comment, CreationDate, Ident, Line, PlainPropertyValue, PrefixedIdent, PropertyValue,
    Qualifier, QualifierList, QuotedString, ResourcePropertyValue, Synonym, TypedPropertyValue,
    UnprefixedIdent, UnquotedString, Url, Xref, XrefList,
};

/// Any data structure that can be written as OBO text
pub trait ToObo {
    /// Create the canonical OBO string for this element
    fn to_obo_string(&self) -> String {
        let mut output = String::new();
        self.to_obo(&mut output).unwrap(); // String writing cannot fail
        output
    }

    /// Write the canonical OBO text of this element to the writer.
    /// # Errors
    /// When the writer errors.
    fn to_obo(&self, w: impl Write) -> std::fmt::Result;
}

/// Render any element to its canonical OBO text.
///
/// ```rust
/// # use obo_ast::*;
/// let pv: PropertyValue = "IAO:0000219   \"2019-04-08\"  xsd:date".parse().unwrap();
/// assert_eq!(render(&pv), "IAO:0000219 \"2019-04-08\" xsd:date");
/// ```
pub fn render(entity: &impl ToObo) -> String {
    entity.to_obo_string()
}

/// Write one part of an identifier (name, prefix, or local part) with all special characters
/// escaped. The leading slash of a local part is escaped so that it cannot read as a URL.
pub(crate) fn write_ident_part(
    mut w: impl Write,
    text: &str,
    escape_leading_slash: bool,
) -> std::fmt::Result {
    for (index, c) in text.char_indices() {
        match c {
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            '\u{000c}' => w.write_str("\\f")?,
            '/' if index == 0 && escape_leading_slash => w.write_str("\\/")?,
            '\\' | ':' | '"' | '!' | '{' | '}' | ',' | '[' | ']' | '=' => {
                w.write_char('\\')?;
                w.write_char(c)?;
            }
            c if c.is_whitespace() => {
                w.write_char('\\')?;
                w.write_char(c)?;
            }
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

/// Write a double quoted string, escaping quotes, backslashes, and line breaks.
pub(crate) fn write_quoted(mut w: impl Write, text: &str) -> std::fmt::Result {
    w.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            c => w.write_char(c)?,
        }
    }
    w.write_char('"')
}

/// Write an unquoted string, escaping everything that would otherwise end the value or be
/// trimmed away when reading it back.
pub(crate) fn write_unquoted(mut w: impl Write, text: &str) -> std::fmt::Result {
    let last = text.char_indices().last().map_or(0, |(i, _)| i);
    for (index, c) in text.char_indices() {
        match c {
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' if index == 0 || index == last => w.write_str("\\t")?,
            c if c.is_whitespace() && (index == 0 || index == last) => {
                w.write_char('\\')?;
                w.write_char(c)?;
            }
            '\\' | '!' | '{' => {
                w.write_char('\\')?;
                w.write_char(c)?;
            }
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

/// Write a string literal as used in the constructor call debug representation: single quoted
/// unless the text contains single but no double quotes, with backslash escapes.
pub(crate) fn write_repr_str(mut w: impl Write, text: &str) -> std::fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    w.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => w.write_str("\\\\")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            c if c == quote => {
                w.write_char('\\')?;
                w.write_char(c)?;
            }
            c if c.is_control() => match u32::from(c) {
                n @ 0..=0xff => write!(w, "\\x{n:02x}")?,
                n @ 0x100..=0xffff => write!(w, "\\u{n:04x}")?,
                n => write!(w, "\\U{n:08x}")?,
            },
            c => w.write_char(c)?,
        }
    }
    w.write_char(quote)
}

impl ToObo for UnprefixedIdent {
    fn to_obo(&self, w: impl Write) -> std::fmt::Result {
        write_ident_part(w, self.name(), false)
    }
}

impl ToObo for PrefixedIdent {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        write_ident_part(&mut w, self.prefix(), false)?;
        w.write_char(':')?;
        write_ident_part(&mut w, self.local(), true)
    }
}

impl ToObo for Url {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        w.write_str(self.as_str())
    }
}

impl ToObo for Ident {
    fn to_obo(&self, w: impl Write) -> std::fmt::Result {
        match self {
            Self::Prefixed(id) => id.to_obo(w),
            Self::Unprefixed(id) => id.to_obo(w),
            Self::Url(url) => url.to_obo(w),
        }
    }
}

/// Implement [`ToObo`] for the identifier wrappers by writing the wrapped identifier.
macro_rules! to_obo_via_ident {
    ($($name:ty),+) => {$(
        impl ToObo for $name {
            fn to_obo(&self, w: impl Write) -> std::fmt::Result {
                self.as_ident().to_obo(w)
            }
        }
    )+};
}

to_obo_via_ident!(
    crate::ClassIdent,
    crate::RelationIdent,
    crate::SubsetIdent,
    crate::NamespaceIdent,
    crate::SynonymTypeIdent
);

impl ToObo for QuotedString {
    fn to_obo(&self, w: impl Write) -> std::fmt::Result {
        write_quoted(w, self.as_str())
    }
}

impl ToObo for UnquotedString {
    fn to_obo(&self, w: impl Write) -> std::fmt::Result {
        write_unquoted(w, self.as_str())
    }
}

impl ToObo for PlainPropertyValue {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        self.relation().to_obo(&mut w)?;
        w.write_char(' ')?;
        self.value().to_obo(&mut w)
    }
}

impl ToObo for TypedPropertyValue {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        self.relation().to_obo(&mut w)?;
        w.write_char(' ')?;
        self.value().to_obo(&mut w)?;
        w.write_char(' ')?;
        self.datatype().to_obo(&mut w)
    }
}

impl ToObo for ResourcePropertyValue {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        self.relation().to_obo(&mut w)?;
        w.write_char(' ')?;
        self.resource().to_obo(&mut w)
    }
}

impl ToObo for PropertyValue {
    fn to_obo(&self, w: impl Write) -> std::fmt::Result {
        match self {
            Self::Plain(pv) => pv.to_obo(w),
            Self::Typed(pv) => pv.to_obo(w),
            Self::Resource(pv) => pv.to_obo(w),
        }
    }
}

impl ToObo for Xref {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        self.id.to_obo(&mut w)?;
        if let Some(description) = &self.description {
            w.write_char(' ')?;
            description.to_obo(&mut w)?;
        }
        Ok(())
    }
}

impl ToObo for XrefList {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        write!(w, "[{}]", self.iter().map(Xref::to_obo_string).join(", "))
    }
}

impl ToObo for Synonym {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        self.description.to_obo(&mut w)?;
        write!(w, " {}", self.scope)?;
        if let Some(synonym_type) = &self.synonym_type {
            w.write_char(' ')?;
            synonym_type.to_obo(&mut w)?;
        }
        w.write_char(' ')?;
        self.xrefs.to_obo(&mut w)
    }
}

impl ToObo for CreationDate {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(w, "{}", date.format("%Y-%m-%d")),
            Self::DateTime(date) => {
                w.write_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

impl ToObo for Clause {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        write!(w, "{}: ", self.tag())?;
        match self {
            Self::Id(id) | Self::AltId(id) | Self::ReplacedBy(id) | Self::Consider(id) => {
                id.to_obo(w)
            }
            Self::Name(s) | Self::Comment(s) | Self::CreatedBy(s) => s.to_obo(w),
            Self::Namespace(id) => id.to_obo(w),
            Self::Def(definition, xrefs) => {
                definition.to_obo(&mut w)?;
                w.write_char(' ')?;
                xrefs.to_obo(w)
            }
            Self::Subset(id) => id.to_obo(w),
            Self::Synonym(synonym) => synonym.to_obo(w),
            Self::Xref(xref) => xref.to_obo(w),
            Self::PropertyValue(pv) => pv.to_obo(w),
            Self::IsA(id) | Self::InstanceOf(id) => id.to_obo(w),
            Self::Relationship(relation, target) => {
                relation.to_obo(&mut w)?;
                w.write_char(' ')?;
                target.to_obo(w)
            }
            Self::CreationDate(date) => date.to_obo(w),
            Self::IsObsolete(obsolete) => write!(w, "{obsolete}"),
        }
    }
}

impl ToObo for Qualifier {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        self.key.to_obo(&mut w)?;
        w.write_char('=')?;
        self.value.to_obo(&mut w)
    }
}

impl ToObo for QualifierList {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        write!(w, "{{{}}}", self.iter().map(Qualifier::to_obo_string).join(", "))
    }
}

impl ToObo for Comment {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        write!(w, "! {}", self.as_str())
    }
}

impl<T: ToObo> ToObo for Line<T> {
    fn to_obo(&self, mut w: impl Write) -> std::fmt::Result {
        self.inner().to_obo(&mut w)?;
        if let Some(qualifiers) = self.qualifiers() {
            w.write_char(' ')?;
            qualifiers.to_obo(&mut w)?;
        }
        if let Some(comment) = self.comment() {
            w.write_char(' ')?;
            comment.to_obo(&mut w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(text: &str, escape_leading_slash: bool) -> String {
        let mut output = String::new();
        write_ident_part(&mut output, text, escape_leading_slash).unwrap();
        output
    }

    fn repr(text: &str) -> String {
        let mut output = String::new();
        write_repr_str(&mut output, text).unwrap();
        output
    }

    #[test]
    fn ident_escapes() {
        assert_eq!(escaped("GO", false), "GO");
        assert_eq!(escaped("a b", false), "a\\ b");
        assert_eq!(escaped("a:b", false), "a\\:b");
        assert_eq!(escaped("tab\there", false), "tab\\there");
        assert_eq!(escaped("//x", true), "\\//x");
        assert_eq!(escaped("//x", false), "//x");
        assert_eq!(escaped("a{b}!c", false), "a\\{b\\}\\!c");
    }

    #[test]
    fn unquoted_escapes() {
        let mut output = String::new();
        write_unquoted(&mut output, " padded ").unwrap();
        assert_eq!(output, "\\ padded\\ ");
        output.clear();
        write_unquoted(&mut output, "multi\nline").unwrap();
        assert_eq!(output, "multi\\nline");
    }

    #[test]
    fn repr_strings() {
        assert_eq!(repr("creation_date"), "'creation_date'");
        assert_eq!(repr("it's"), "\"it's\"");
        assert_eq!(repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(repr("back\\slash"), "'back\\\\slash'");
        assert_eq!(repr("bell\u{7}"), "'bell\\x07'");
    }

    #[test]
    fn creation_dates() {
        let date: CreationDate = chrono::DateTime::parse_from_rfc3339("2019-04-08T23:21:05Z")
            .unwrap()
            .into();
        assert_eq!(render(&date), "2019-04-08T23:21:05Z");
        let date: CreationDate = chrono::NaiveDate::from_ymd_opt(2019, 4, 8).unwrap().into();
        assert_eq!(render(&date), "2019-04-08");
    }
}
