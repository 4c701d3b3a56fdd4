//! The [`OboError`] which makes it easy for downstream users of the error type to match on the exact error.

use std::fmt::Display;

use context_error::{BoxedError, Context, CreateError, ErrorKind};

/// All possible errors when building or parsing OBO values
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum OboError {
    /// A value of the wrong type was given where a specific type is required, for example a
    /// string where an identifier is needed
    #[default]
    InvalidArgument,
    /// The text is not valid OBO syntax
    Syntax {
        /// The byte offset in the parsed text where the problem was found
        offset: usize,
        /// What was expected at that offset
        expected: Expected,
    },
}

impl OboError {
    /// Whether this is a syntax error
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// The byte offset of a syntax error
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Syntax { offset, .. } => Some(*offset),
            Self::InvalidArgument => None,
        }
    }

    /// The expected token of a syntax error
    pub const fn expected(&self) -> Option<Expected> {
        match self {
            Self::Syntax { expected, .. } => Some(*expected),
            Self::InvalidArgument => None,
        }
    }
}

impl ErrorKind for OboError {
    type Settings = ();
    fn descriptor(&self) -> &'static str {
        "error"
    }
    fn ignored(&self, _settings: Self::Settings) -> bool {
        false
    }
    fn is_error(&self, _settings: Self::Settings) -> bool {
        true
    }
}

/// The token that was expected when a syntax error occurred
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Expected {
    /// Any identifier
    #[default]
    Identifier,
    /// The prefix of a prefixed identifier (before the colon)
    Prefix,
    /// The local part of a prefixed identifier (after the colon)
    LocalId,
    /// A URL of the form `scheme://rest`
    Url,
    /// A character after a backslash
    EscapeSequence,
    /// An opening double quote
    QuotedString,
    /// The closing double quote of a quoted string
    ClosingQuote,
    /// A value for the clause or property
    Value,
    /// A known clause tag followed by a colon
    Tag,
    /// Whitespace separating two tokens
    Whitespace,
    /// Nothing besides whitespace or a comment
    EndOfLine,
    /// An opening square bracket of a cross reference list
    XrefList,
    /// A comma or closing square bracket in a cross reference list
    XrefListSeparator,
    /// A synonym scope (`EXACT`, `BROAD`, `NARROW`, or `RELATED`)
    SynonymScope,
    /// `true` or `false`
    Boolean,
    /// An ISO 8601 date or RFC 3339 date time
    Date,
    /// A qualifier `key="value"`
    Qualifier,
    /// A comma or closing curly brace in a qualifier list
    QualifierListSeparator,
    /// The name of a known constructor
    Constructor,
    /// An opening or closing parenthesis, or a comma between constructor arguments
    Parenthesis,
    /// A constructor argument
    Argument,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Identifier => "an identifier",
                Self::Prefix => "an identifier prefix",
                Self::LocalId => "a local identifier",
                Self::Url => "a URL",
                Self::EscapeSequence => "an escaped character",
                Self::QuotedString => "a quoted string",
                Self::ClosingQuote => "a closing '\"'",
                Self::Value => "a value",
                Self::Tag => "a clause tag",
                Self::Whitespace => "whitespace",
                Self::EndOfLine => "the end of the line",
                Self::XrefList => "a cross reference list '['",
                Self::XrefListSeparator => "',' or ']'",
                Self::SynonymScope => "one of EXACT, BROAD, NARROW, or RELATED",
                Self::Boolean => "'true' or 'false'",
                Self::Date => "a date",
                Self::Qualifier => "a qualifier 'key=\"value\"'",
                Self::QualifierListSeparator => "',' or '}'",
                Self::Constructor => "a constructor name",
                Self::Parenthesis => "'(', ',' or ')'",
                Self::Argument => "a constructor argument",
            }
        )
    }
}

/// Create a syntax error pointing at the given byte offset of the line.
pub(crate) fn syntax_error(
    line: &str,
    offset: usize,
    length: usize,
    expected: Expected,
    long_description: impl Display,
) -> BoxedError<'static, OboError> {
    BoxedError::new(
        OboError::Syntax { offset, expected },
        "Invalid OBO syntax",
        format!("Expected {expected}: {long_description}"),
        line_context(line, offset, length),
    )
}

/// Create an invalid argument error for a value of the wrong type.
pub(crate) fn invalid_argument(
    argument: &str,
    required: &str,
    found: &str,
) -> BoxedError<'static, OboError> {
    BoxedError::new(
        OboError::InvalidArgument,
        "Invalid argument",
        format!("The argument '{argument}' should be {required} but {found} was given"),
        Context::none(),
    )
}

/// A context highlighting part of the line, clamped to the line and to character boundaries.
fn line_context(line: &str, offset: usize, length: usize) -> Context<'static> {
    if line.is_empty() {
        return Context::none();
    }
    let mut start = offset.min(line.len() - 1);
    while !line.is_char_boundary(start) {
        start -= 1;
    }
    let length = length.max(1).min(line.len() - start);
    Context::line(None, line.to_string(), start, length)
}
