//! Quoted and unquoted strings, trailing qualifiers, and the end of a line.

use context_error::BoxedError;

use super::{
    ParseResult,
    ident::{read_ident, unescape_char},
    skip_whitespace,
};
use crate::{
    Comment, Expected, OboError, Qualifier, QualifierList, QuotedString, RelationIdent,
    UnquotedString, error::syntax_error,
};

/// Read a double quoted string starting at the opening quote.
pub(super) fn read_quoted(line: &str, start: usize) -> ParseResult<QuotedString> {
    if !line[start..].starts_with('"') {
        return Err(syntax_error(
            line,
            start,
            1,
            Expected::QuotedString,
            "A quoted string starts with '\"'",
        ));
    }
    let mut output = String::new();
    let mut chars = line[start + 1..].char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => output.push(unescape_char(escaped)),
                None => break,
            },
            '"' => return Ok((start + 1 + index + 1, QuotedString::new(output))),
            c => output.push(c),
        }
    }
    Err(syntax_error(
        line,
        line.len(),
        1,
        Expected::ClosingQuote,
        "The quoted string is never closed",
    ))
}

/// Read an unquoted string, this ends at an unescaped `!` or `{` or at the end of the line.
/// Unescaped trailing whitespace is not part of the string, which can leave it empty.
pub(super) fn read_unquoted(line: &str, start: usize) -> ParseResult<UnquotedString> {
    let mut output = String::new();
    let mut significant = 0;
    let mut end = line.len();
    let mut chars = line[start..].char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => {
                    output.push(unescape_char(escaped));
                    significant = output.len();
                }
                None => {
                    return Err(syntax_error(
                        line,
                        start + index,
                        1,
                        Expected::EscapeSequence,
                        "A backslash has to be followed by the escaped character",
                    ));
                }
            },
            '!' | '{' => {
                end = start + index;
                break;
            }
            c if c.is_whitespace() => output.push(c),
            c => {
                output.push(c);
                significant = output.len();
            }
        }
    }
    output.truncate(significant);
    Ok((end, UnquotedString::new(output)))
}

/// Read an optional list of qualifiers `{key="value", ...}` after any whitespace.
pub(super) fn read_qualifiers(line: &str, start: usize) -> ParseResult<Option<QualifierList>> {
    let mut pos = skip_whitespace(line, start);
    if !line[pos..].starts_with('{') {
        return Ok((start, None));
    }
    let mut qualifiers = Vec::new();
    pos = skip_whitespace(line, pos + 1);
    if line[pos..].starts_with('}') {
        return Ok((pos + 1, Some(QualifierList::new(qualifiers))));
    }
    loop {
        let (after_key, key) = read_ident(line, pos, Expected::Qualifier, true)?;
        pos = skip_whitespace(line, after_key);
        if !line[pos..].starts_with('=') {
            return Err(syntax_error(
                line,
                pos,
                1,
                Expected::Qualifier,
                "A qualifier key is followed by '='",
            ));
        }
        pos = skip_whitespace(line, pos + 1);
        let (after_value, value) = read_quoted(line, pos)?;
        qualifiers.push(Qualifier::new(RelationIdent::new(key), value));
        pos = skip_whitespace(line, after_value);
        match line[pos..].chars().next() {
            Some(',') => pos = skip_whitespace(line, pos + 1),
            Some('}') => return Ok((pos + 1, Some(QualifierList::new(qualifiers)))),
            _ => {
                return Err(syntax_error(
                    line,
                    pos,
                    1,
                    Expected::QualifierListSeparator,
                    "Qualifiers are separated by ',' and the list is closed by '}'",
                ));
            }
        }
    }
}

/// Check that only whitespace and an optional comment follow, and return the comment.
pub(super) fn read_end(
    line: &str,
    start: usize,
) -> Result<Option<Comment>, BoxedError<'static, OboError>> {
    let pos = skip_whitespace(line, start);
    if pos == line.len() {
        Ok(None)
    } else if line[pos..].starts_with('!') {
        Ok(Some(Comment::new(&line[pos + 1..])))
    } else {
        Err(syntax_error(
            line,
            pos,
            line.len() - pos,
            Expected::EndOfLine,
            "Only a comment can follow the value",
        ))
    }
}

#[cfg(test)]
mod tests {
    use context_error::FullErrorContent;

    use super::*;

    #[test]
    fn quoted() {
        let (end, s) = read_quoted("\"a \\\"b\\\" \\\\ c\" rest", 0).unwrap();
        assert_eq!(end, 14);
        assert_eq!(s, "a \"b\" \\ c");
        let (_, s) = read_quoted("\"line\\nbreak\"", 0).unwrap();
        assert_eq!(s, "line\nbreak");

        let err = read_quoted("\"never closed", 0).unwrap_err();
        assert_eq!(err.get_kind().offset(), Some(13));
        assert_eq!(err.get_kind().expected(), Some(Expected::ClosingQuote));
        let err = read_quoted("\"escaped end\\\"", 0).unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::ClosingQuote));
        let err = read_quoted("bare", 0).unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::QuotedString));
    }

    #[test]
    fn unquoted() {
        let (end, s) = read_unquoted("cell membrane  ! comment", 0).unwrap();
        assert_eq!(end, 15);
        assert_eq!(s, "cell membrane");
        let (_, s) = read_unquoted("padded\\ ", 0).unwrap();
        assert_eq!(s, "padded ");
        let (_, s) = read_unquoted("not \\! a comment", 0).unwrap();
        assert_eq!(s, "not ! a comment");
        let (end, s) = read_unquoted("  ! only a comment", 0).unwrap();
        assert_eq!(end, 2);
        assert_eq!(s, "");
        let (end, s) = read_unquoted("", 0).unwrap();
        assert_eq!(end, 0);
        assert_eq!(s, "");
    }

    #[test]
    fn qualifiers() {
        let line = "x {source=\"GOC:1\", comment=\"two\"}";
        let (end, list) = read_qualifiers(line, 1).unwrap();
        assert_eq!(end, line.len());
        let list = list.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].value, "two");

        let (end, list) = read_qualifiers("x ! comment", 1).unwrap();
        assert_eq!(end, 1);
        assert!(list.is_none());

        let err = read_qualifiers("x {a=\"1\" b=\"2\"}", 1).unwrap_err();
        assert_eq!(err.get_kind().offset(), Some(9));
        assert_eq!(
            err.get_kind().expected(),
            Some(Expected::QualifierListSeparator)
        );
    }

    #[test]
    fn end() {
        assert_eq!(read_end("x   ", 1).unwrap(), None);
        assert_eq!(
            read_end("x ! a comment ", 1).unwrap(),
            Some(Comment::new("a comment"))
        );
        let err = read_end("x y", 1).unwrap_err();
        assert_eq!(err.get_kind().offset(), Some(2));
        assert_eq!(err.get_kind().expected(), Some(Expected::EndOfLine));
    }
}
