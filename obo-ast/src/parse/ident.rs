//! Identifier tokens: finding their end, unescaping, and deciding on the variant.

use std::sync::LazyLock;

use context_error::BoxedError;
use regex::Regex;

use super::ParseResult;
use crate::{
    Expected, Ident, OboError, PrefixedIdent, UnprefixedIdent, Url, error::syntax_error,
};

/// A URL starts with a scheme directly followed by `://`
static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());

/// Characters that end an identifier token when not escaped
const fn is_terminator(c: char) -> bool {
    matches!(c, '"' | '!' | '{' | '}' | ',' | '[' | ']')
}

/// Characters that cannot be present in a URL identifier
fn is_url_forbidden(c: char) -> bool {
    c.is_whitespace() || c == '\\' || is_terminator(c)
}

/// Find the end of the identifier token starting at `start`. A token ends at unescaped whitespace,
/// an unescaped terminator, or (for qualifier keys) an unescaped `=`.
fn token_end(
    line: &str,
    start: usize,
    stop_at_equals: bool,
) -> Result<usize, BoxedError<'static, OboError>> {
    let mut chars = line[start..].char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err(syntax_error(
                        line,
                        start + index,
                        1,
                        Expected::EscapeSequence,
                        "A backslash has to be followed by the escaped character",
                    ));
                }
            }
            '=' if stop_at_equals => return Ok(start + index),
            c if c.is_whitespace() || is_terminator(c) => return Ok(start + index),
            _ => (),
        }
    }
    Ok(line.len())
}

/// The first unescaped occurrence of the character in the given range
fn first_unescaped(line: &str, start: usize, end: usize, needle: char) -> Option<usize> {
    let mut chars = line[start..end].char_indices();
    while let Some((index, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == needle {
            return Some(start + index);
        }
    }
    None
}

/// Map the character after a backslash to the character it stands for
pub(super) const fn unescape_char(c: char) -> char {
    match c {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        'f' => '\u{000c}',
        c => c,
    }
}

/// Unescape one part of an identifier. Any unescaped colon, whitespace, or terminator is an
/// error reported with the given expectation.
fn unescape_part(
    line: &str,
    start: usize,
    end: usize,
    expected: Expected,
) -> Result<String, BoxedError<'static, OboError>> {
    if start == end {
        return Err(syntax_error(
            line,
            start,
            1,
            expected,
            "An identifier cannot be empty",
        ));
    }
    let mut output = String::with_capacity(end - start);
    let mut chars = line[start..end].char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => output.push(unescape_char(escaped)),
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
            ':' => {
                return Err(syntax_error(
                    line,
                    start + index,
                    1,
                    expected,
                    "A colon in this part of an identifier has to be escaped as '\\:'",
                ));
            }
            c if c.is_whitespace() || is_terminator(c) => {
                return Err(syntax_error(
                    line,
                    start + index,
                    1,
                    expected,
                    format!("The character '{}' has to be escaped in an identifier", c.escape_debug()),
                ));
            }
            c => output.push(c),
        }
    }
    Ok(output)
}

/// Validate the lexical form of a single identifier part (name, prefix, or local identifier) and
/// return the unescaped text.
pub(crate) fn lexical_ident_part(
    text: &str,
    expected: Expected,
) -> Result<String, BoxedError<'static, OboError>> {
    unescape_part(text, 0, text.len(), expected)
}

/// Validate that the range of the line is a URL identifier.
pub(crate) fn validate_url(
    line: &str,
    start: usize,
    end: usize,
) -> Result<(), BoxedError<'static, OboError>> {
    let value = &line[start..end];
    if !URL_SCHEME.is_match(value) {
        return Err(syntax_error(
            line,
            start,
            end - start,
            Expected::Url,
            "A URL starts with a scheme followed by '://'",
        ));
    }
    if let Some((index, c)) = value.char_indices().find(|(_, c)| is_url_forbidden(*c)) {
        return Err(syntax_error(
            line,
            start + index,
            1,
            Expected::Url,
            format!("The character '{}' is not allowed in a URL identifier", c.escape_debug()),
        ));
    }
    Ok(())
}

/// Read an identifier token starting at `start`. The variant is decided on the lexical form: a
/// scheme followed by `://` is a URL, an unescaped colon makes a prefixed identifier, anything
/// else is unprefixed. If the token is empty the error reports the given expectation.
pub(super) fn read_ident(
    line: &str,
    start: usize,
    expected: Expected,
    stop_at_equals: bool,
) -> ParseResult<Ident> {
    let mut end = token_end(line, start, stop_at_equals)?;
    if stop_at_equals && URL_SCHEME.is_match(&line[start..end]) {
        // A URL key cannot escape '=', so it ends at the '=' written directly before the value
        let full = token_end(line, start, false)?;
        end = if line[start..full].ends_with('=') {
            full - 1
        } else {
            full
        };
    }
    if end == start {
        return Err(syntax_error(
            line,
            start,
            1,
            expected,
            "An identifier cannot be empty",
        ));
    }
    let raw = &line[start..end];
    if URL_SCHEME.is_match(raw) {
        validate_url(line, start, end)?;
        return Ok((end, Url::from_validated(raw).into()));
    }
    if let Some(colon) = first_unescaped(line, start, end, ':') {
        let prefix = unescape_part(line, start, colon, Expected::Prefix)?;
        let local = unescape_part(line, colon + 1, end, Expected::LocalId)?;
        Ok((end, PrefixedIdent::from_unescaped(prefix, local).into()))
    } else {
        let name = unescape_part(line, start, end, Expected::Identifier)?;
        Ok((end, UnprefixedIdent::from_unescaped(name).into()))
    }
}

#[cfg(test)]
mod tests {
    use context_error::FullErrorContent;

    use super::*;

    #[test]
    fn token_ends() {
        assert_eq!(token_end("GO:1 rest", 0, false).unwrap(), 4);
        assert_eq!(token_end("a\\ b c", 0, false).unwrap(), 4);
        assert_eq!(token_end("key=\"v\"", 0, true).unwrap(), 3);
        assert_eq!(token_end("key=\"v\"", 0, false).unwrap(), 4);
        assert_eq!(token_end("id,other]", 0, false).unwrap(), 2);
        assert!(token_end("a\\", 0, false).is_err());
    }

    #[test]
    fn url_qualifier_keys() {
        let (end, id) =
            read_ident("http://x.org/?a=b=\"v\"", 0, Expected::Qualifier, true).unwrap();
        assert_eq!(end, 17);
        assert_eq!(id.as_url().unwrap().as_str(), "http://x.org/?a=b");
        let (end, _) = read_ident("http://x.org/?a=b = \"v\"", 0, Expected::Qualifier, true).unwrap();
        assert_eq!(end, 17);
        let (end, _) = read_ident("source=\"v\"", 0, Expected::Qualifier, true).unwrap();
        assert_eq!(end, 6);
    }

    #[test]
    fn variants() {
        let (end, id) = read_ident("http://example.com x", 0, Expected::Identifier, false).unwrap();
        assert_eq!(end, 18);
        assert!(id.as_url().is_some());
        let (_, id) = read_ident("http:\\//example.com", 0, Expected::Identifier, false).unwrap();
        assert_eq!(id.as_prefixed().unwrap().local(), "//example.com");
        let (_, id) = read_ident("GO\\:0046154", 0, Expected::Identifier, false).unwrap();
        assert_eq!(id.as_unprefixed().unwrap().name(), "GO:0046154");
    }

    #[test]
    fn errors() {
        let err = read_ident("a:b:c", 0, Expected::Identifier, false).unwrap_err();
        assert_eq!(err.get_kind().offset(), Some(3));
        assert_eq!(err.get_kind().expected(), Some(Expected::LocalId));
        let err = read_ident(":b", 0, Expected::Identifier, false).unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::Prefix));
        let err = read_ident("GO: x", 0, Expected::Identifier, false).unwrap_err();
        assert_eq!(err.get_kind().offset(), Some(3));
        assert_eq!(err.get_kind().expected(), Some(Expected::LocalId));
        let err = read_ident(" x", 0, Expected::Value, false).unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::Value));
    }
}
