//! Fuzz target for parsing clause lines
use afl::*;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data)
            && let Ok(line) = obo_ast::parse_line(s)
        {
            // Enforce that all written lines are valid according to the parser and read back the same
            let back = obo_ast::parse_line(&line.to_string()).unwrap();
            assert_eq!(line, back);
        }
    });
}
