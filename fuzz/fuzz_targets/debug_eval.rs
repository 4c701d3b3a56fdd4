//! Fuzz target for evaluating the constructor call notation
use afl::*;
use obo_ast::host::{Value, evaluate};

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data)
            && let Ok(value) = evaluate(s)
        {
            // The debug representation of any built identifier or property value evaluates to the same value
            match &value {
                Value::Ident(id) => assert_eq!(evaluate(&format!("{id:?}")).unwrap(), value),
                Value::PropertyValue(pv) => {
                    assert_eq!(evaluate(&format!("{pv:?}")).unwrap(), value);
                }
                _ => (),
            }
        }
    });
}
