//! Evaluation of the constructor call notation used by the debug representation, for example
//! `PlainPropertyValue(UnprefixedIdent('note'), 'text')`.

use context_error::BoxedError;

use super::Value;
use crate::{
    Expected, OboError, PlainPropertyValue, PrefixedIdent, ResourcePropertyValue,
    TypedPropertyValue, UnprefixedIdent, Url,
    error::{invalid_argument, syntax_error},
};

type EvalResult<T> = Result<(usize, T), BoxedError<'static, OboError>>;

/// Evaluate a constructor call expression and return the built value. Besides constructor calls
/// the expression can be a string literal (single or double quoted), an integer, a float, `True`,
/// `False`, or `None`.
///
/// ```rust
/// # use obo_ast::{*, host::{Value, evaluate}};
/// let pv = TypedPropertyValue::new(
///     UnprefixedIdent::new("creation_date").unwrap(),
///     "2019-04-08T23:21:05Z",
///     PrefixedIdent::new("xsd", "date").unwrap(),
/// );
/// assert_eq!(evaluate(&format!("{pv:?}")).unwrap(), Value::from(pv));
/// ```
///
/// # Errors
/// With a syntax error if the expression is malformed or names an unknown constructor, with
/// [`OboError::InvalidArgument`] if a constructor is given the wrong number or type of arguments.
pub fn evaluate(expression: &str) -> Result<Value, BoxedError<'static, OboError>> {
    let (pos, value) = read_expression(expression, skip_whitespace(expression, 0))?;
    let pos = skip_whitespace(expression, pos);
    if pos == expression.len() {
        Ok(value)
    } else {
        Err(syntax_error(
            expression,
            pos,
            expression.len() - pos,
            Expected::EndOfLine,
            "The expression continues after the value",
        ))
    }
}

fn skip_whitespace(text: &str, start: usize) -> usize {
    text[start..]
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |i| start + i)
}

fn read_expression(text: &str, start: usize) -> EvalResult<Value> {
    match text[start..].chars().next() {
        Some(quote @ ('\'' | '"')) => {
            read_string(text, start, quote).map(|(pos, s)| (pos, Value::Str(s)))
        }
        Some(c) if c == '-' || c.is_ascii_digit() => read_number(text, start),
        Some(c) if c.is_alphabetic() || c == '_' => {
            let end = text[start..]
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .map_or(text.len(), |i| start + i);
            match &text[start..end] {
                "True" => Ok((end, Value::Bool(true))),
                "False" => Ok((end, Value::Bool(false))),
                "None" => Ok((end, Value::None)),
                name => read_call(text, start, name, end),
            }
        }
        _ => Err(syntax_error(
            text,
            start,
            1,
            Expected::Argument,
            "A value or constructor call is needed here",
        )),
    }
}

/// Read a string literal with backslash escapes, starting at the opening quote
fn read_string(text: &str, start: usize, quote: char) -> EvalResult<String> {
    let mut output = String::new();
    let mut chars = text[start + 1..].char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => {
                let escape_start = start + 1 + index;
                let Some((_, escaped)) = chars.next() else {
                    break;
                };
                let width = match escaped {
                    'x' => 2,
                    'u' => 4,
                    'U' => 8,
                    'n' => {
                        output.push('\n');
                        continue;
                    }
                    'r' => {
                        output.push('\r');
                        continue;
                    }
                    't' => {
                        output.push('\t');
                        continue;
                    }
                    other => {
                        output.push(other);
                        continue;
                    }
                };
                let digits: String = chars.by_ref().take(width).map(|(_, c)| c).collect();
                let c = u32::from_str_radix(&digits, 16)
                    .ok()
                    .filter(|_| digits.len() == width)
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        syntax_error(
                            text,
                            escape_start,
                            width + 2,
                            Expected::EscapeSequence,
                            "A numeric escape needs a valid hexadecimal code point",
                        )
                    })?;
                output.push(c);
            }
            c if c == quote => return Ok((start + 1 + index + 1, output)),
            c => output.push(c),
        }
    }
    Err(syntax_error(
        text,
        text.len(),
        1,
        Expected::ClosingQuote,
        "The string is never closed",
    ))
}

fn read_number(text: &str, start: usize) -> EvalResult<Value> {
    let end = text[start + 1..]
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .map_or(text.len(), |i| start + 1 + i);
    let number = &text[start..end];
    let value = if number.contains('.') {
        number.parse::<f64>().ok().map(Value::Float)
    } else {
        number.parse::<i64>().ok().map(Value::Int)
    };
    value.map(|value| (end, value)).ok_or_else(|| {
        syntax_error(
            text,
            start,
            end - start,
            Expected::Argument,
            format!("'{number}' is not a valid number"),
        )
    })
}

/// Read the arguments of a call and build the named value
fn read_call(text: &str, start: usize, name: &str, name_end: usize) -> EvalResult<Value> {
    let arity = match name {
        "UnprefixedIdent" | "Url" => 1,
        "PrefixedIdent" | "PlainPropertyValue" | "ResourcePropertyValue" => 2,
        "TypedPropertyValue" => 3,
        _ => {
            return Err(syntax_error(
                text,
                start,
                name.len(),
                Expected::Constructor,
                format!("The constructor '{name}' is not known"),
            ));
        }
    };
    let mut pos = skip_whitespace(text, name_end);
    if !text[pos..].starts_with('(') {
        return Err(syntax_error(
            text,
            pos,
            1,
            Expected::Parenthesis,
            "A constructor is called with its arguments between parentheses",
        ));
    }
    let mut arguments = Vec::new();
    pos = skip_whitespace(text, pos + 1);
    if text[pos..].starts_with(')') {
        pos += 1;
    } else {
        loop {
            let (after, argument) = read_expression(text, pos)?;
            arguments.push(argument);
            pos = skip_whitespace(text, after);
            match text[pos..].chars().next() {
                Some(',') => pos = skip_whitespace(text, pos + 1),
                Some(')') => {
                    pos += 1;
                    break;
                }
                _ => {
                    return Err(syntax_error(
                        text,
                        pos,
                        1,
                        Expected::Parenthesis,
                        "Arguments are separated by ',' and closed by ')'",
                    ));
                }
            }
        }
    }
    if arguments.len() != arity {
        return Err(invalid_argument(
            name,
            &format!("called with {arity} argument(s)"),
            &arguments.len().to_string(),
        ));
    }
    let mut arguments = arguments.into_iter();
    let mut next = || arguments.next().unwrap_or_default();
    let value: Value = match name {
        "UnprefixedIdent" => UnprefixedIdent::from_values(next())?.into(),
        "Url" => Url::from_values(next())?.into(),
        "PrefixedIdent" => PrefixedIdent::from_values(next(), next())?.into(),
        "PlainPropertyValue" => PlainPropertyValue::from_values(next(), next())?.into(),
        "ResourcePropertyValue" => ResourcePropertyValue::from_values(next(), next())?.into(),
        _ => TypedPropertyValue::from_values(next(), next(), next())?.into(),
    };
    Ok((pos, value))
}

#[cfg(test)]
mod tests {
    use context_error::FullErrorContent;

    use super::*;
    use crate::{Ident, PropertyValue};

    #[test]
    fn literals() {
        assert_eq!(evaluate("'text'").unwrap(), Value::Str("text".to_string()));
        assert_eq!(evaluate("\"it's\"").unwrap(), Value::Str("it's".to_string()));
        assert_eq!(
            evaluate("'a\\\\b\\'c\\x07\\u00e9'").unwrap(),
            Value::Str("a\\b'c\u{7}\u{e9}".to_string())
        );
        assert_eq!(evaluate(" 42 ").unwrap(), Value::Int(42));
        assert_eq!(evaluate("-1.5").unwrap(), Value::Float(-1.5));
        assert_eq!(evaluate("True").unwrap(), Value::Bool(true));
        assert_eq!(evaluate("None").unwrap(), Value::None);
    }

    #[test]
    fn constructors() {
        let id = evaluate("PrefixedIdent('xsd', 'date')").unwrap();
        assert_eq!(
            id,
            Value::Ident(Ident::Prefixed(PrefixedIdent::new("xsd", "date").unwrap()))
        );
        let pv = evaluate(
            "ResourcePropertyValue(UnprefixedIdent('married_to'), UnprefixedIdent('heather'))",
        )
        .unwrap();
        assert_eq!(
            pv,
            Value::PropertyValue(PropertyValue::Resource(ResourcePropertyValue::new(
                UnprefixedIdent::new("married_to").unwrap(),
                UnprefixedIdent::new("heather").unwrap(),
            )))
        );
    }

    #[test]
    fn errors() {
        let err = evaluate("Unknown('x')").unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::Constructor));
        let err = evaluate("PrefixedIdent('xsd')").unwrap_err();
        assert_eq!(err.get_kind(), OboError::InvalidArgument);
        let err = evaluate("PlainPropertyValue('rel', 'value')").unwrap_err();
        assert_eq!(err.get_kind(), OboError::InvalidArgument);
        let err = evaluate("UnprefixedIdent('x'").unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::Parenthesis));
        let err = evaluate("'open").unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::ClosingQuote));
        let err = evaluate("Url('http://a') extra").unwrap_err();
        assert_eq!(err.get_kind().expected(), Some(Expected::EndOfLine));
    }
}
