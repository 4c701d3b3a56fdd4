//! Fuzz target for parsing property values
use afl::*;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data)
            && let Ok(pv) = obo_ast::parse_property_value(s)
        {
            let clause = obo_ast::parse_clause(&obo_ast::render(&pv)).unwrap();
            assert_eq!(clause, obo_ast::Clause::PropertyValue(pv));
        }
    });
}
