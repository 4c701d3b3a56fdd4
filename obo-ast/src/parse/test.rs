use context_error::FullErrorContent;

use crate::{Clause, Expected, PropertyValue, parse_clause, parse_line, write::ToObo};

/// Create a parse test based on a given line and its name. Positive cases are written back out
/// and have to parse to the same value and text. Negative cases can check the error offset.
macro_rules! line_test {
    ($case:literal, $name:ident) => {
        #[test]
        fn $name() {
            match parse_line($case) {
                Err(err) => {
                    println!("Failed: '{}'", $case);
                    println!("{err}");
                    panic!("Failed test")
                }
                Ok(res) => {
                    let back = res.to_obo_string();
                    match parse_line(&back) {
                        Ok(res_back) => {
                            assert_eq!(res, res_back, "{back} (from input: {})", $case);
                            assert_eq!(back, res_back.to_obo_string());
                        }
                        Err(err) => {
                            println!("Failed: '{}' was exported as '{back}'", $case);
                            println!("{err}");
                            panic!("Failed test")
                        }
                    }
                }
            }
        }
    };
    (ne $case:literal, $name:ident) => {
        #[test]
        fn $name() {
            let res = parse_line($case);
            println!("{}\n{:?}", $case, res);
            assert!(res.is_err());
        }
    };
    (ne $case:literal, $offset:literal, $expected:ident, $name:ident) => {
        #[test]
        fn $name() {
            let res = parse_line($case);
            println!("{}\n{:?}", $case, res);
            let err = res.unwrap_err();
            assert_eq!(err.get_kind().offset(), Some($offset));
            assert_eq!(err.get_kind().expected(), Some(Expected::$expected));
        }
    };
}

line_test!("id: GO:0005575", id);
line_test!("id: http://purl.obolibrary.org/obo/GO_0005575", id_url);
line_test!("name: cellular_component", name);
line_test!("name: cell \\! wall   ! with comment", name_escaped_comment);
line_test!("namespace: cellular_component", namespace);
line_test!("alt_id: GO:0008372", alt_id);
line_test!(
    "def: \"The part of a cell.\" [GOC:go_curators, NIF_Subcellular:sao1337158144]",
    def
);
line_test!("def: \"No references.\" []", def_empty_xrefs);
line_test!("comment: Note that this term is \\{not\\} obsolete.", comment);
line_test!("subset: goslim_plant", subset);
line_test!(
    "synonym: \"cell or subcellular entity\" EXACT []",
    synonym
);
line_test!(
    "synonym: \"subcellular entity\" NARROW systematic_synonym [NIF_Subcellular:nlx_subcell_100315 \"source\"]",
    synonym_typed
);
line_test!("xref: NIF_Subcellular:sao1337158144", xref);
line_test!("xref: Wikipedia:Cell_(biology) \"Wikipedia page\"", xref_description);
line_test!(
    "property_value: IAO:0000589 \"cell and encapsulating structures\" xsd:string",
    property_value
);
line_test!("is_a: GO:0005575 ! cellular_component", is_a);
line_test!("instance_of: PATO:0000001", instance_of);
line_test!("relationship: part_of GO:0005623 ! cell", relationship);
line_test!("created_by: Martin Larralde", created_by);
line_test!("creation_date: 2019-04-08T23:21:05Z", creation_date_time);
line_test!("creation_date: 2019-04-08", creation_date);
line_test!("is_obsolete: true", is_obsolete);
line_test!("replaced_by: GO:0005623", replaced_by);
line_test!("consider: GO:0005623", consider);
line_test!("creation_date \"2019-04-08T23:21:05Z\" xsd:date", bare_typed);
line_test!("IAO:0000115 \"a definition\"", bare_plain);
line_test!("married_to heather", bare_resource);
line_test!("  shoe_size  \"8\"   xsd:positiveInteger  ", bare_padded);
line_test!("seeAlso\"adjacent\"", bare_adjacent);
line_test!("rel http://example.com/a?b=c", bare_url_resource);
line_test!("rel \"line\\nbreak and \\\"quotes\\\"\"", bare_escaped_value);
line_test!("rel a\\ b\\:c", bare_escaped_resource);
line_test!(
    "is_a: GO:0005575 {source=\"GOC:mah\", comment=\"verified\"} ! comment",
    qualifiers
);
line_test!("is_a: GO:0005575 {}", empty_qualifiers);
line_test!(
    "is_a: GO:0005575 {http://example.com/?a=b=\"v\", source=\"GOC:mah\"}",
    qualifier_url_key
);
line_test!("is_a: GO:0005575 {http://example.com/?a=b = \"v\"}", qualifier_url_key_spaced);
line_test!("name: ", name_empty);
line_test!("name: ! only a comment", name_empty_comment);
line_test!("created_by:", created_by_empty);

line_test!(ne "", 0, Identifier, empty);
line_test!(ne "creation_date", 13, Value, missing_value);
line_test!(ne "rel \"unterminated", 17, ClosingQuote, unterminated);
line_test!(ne "rel \"v\" xsd:string trailing", 19, EndOfLine, trailing);
line_test!(ne "rel GO:", 7, LocalId, empty_local);
line_test!(ne ":local \"v\"", 0, Prefix, empty_prefix);
line_test!(ne "a:b:c \"v\"", 3, LocalId, double_colon);
line_test!(ne "rel http://exa\\mple.com", 14, Url, url_backslash);
line_test!(ne "unknown_tag: value", 0, Tag, unknown_tag);
line_test!(ne "def: \"missing xrefs\"", 20, XrefList, def_without_xrefs);
line_test!(ne "def: \"x\" [GOC:1 GOC:2]", 16, XrefListSeparator, xref_separator);
line_test!(ne "synonym: \"x\" SIMILAR []", 13, SynonymScope, synonym_scope);
line_test!(ne "is_obsolete: maybe", 13, Boolean, boolean);
line_test!(ne "creation_date: yesterday", 15, Date, date);
line_test!(ne "is_a: GO:1 {source}", 18, Qualifier, qualifier);
line_test!(ne "rel \"v\" {a=\"1\" b=\"2\"}", 15, QualifierListSeparator, qualifier_separator);
line_test!(ne "rel a\\", rel_dangling_escape);

#[test]
fn clause_rejects_qualifiers() {
    let err = parse_clause("is_a: GO:0005575 {source=\"GOC:mah\"}").unwrap_err();
    assert_eq!(err.get_kind().offset(), Some(17));
    assert_eq!(err.get_kind().expected(), Some(Expected::EndOfLine));
    assert!(parse_line("is_a: GO:0005575 {source=\"GOC:mah\"}").is_ok());
}

#[test]
fn clause_drops_comment() {
    assert_eq!(
        parse_clause("is_a: GO:0005575 ! cellular_component").unwrap(),
        parse_clause("is_a: GO:0005575").unwrap()
    );
}

#[test]
fn bare_property_value_is_property_value_clause() {
    let pv: PropertyValue = "creation_date \"2019-04-08T23:21:05Z\" xsd:date"
        .parse()
        .unwrap();
    let clause = parse_clause("creation_date \"2019-04-08T23:21:05Z\" xsd:date").unwrap();
    assert_eq!(clause, Clause::PropertyValue(pv.clone()));
    assert_eq!(
        parse_clause(&pv.to_obo_string()).unwrap(),
        Clause::PropertyValue(pv)
    );
}

#[test]
fn offsets_in_property_values() {
    let err = crate::parse_property_value("rel").unwrap_err();
    assert!(err.get_kind().is_syntax());
    assert_eq!(err.get_kind().offset(), Some(3));
    let err = crate::parse_property_value("  \"value\" dt").unwrap_err();
    assert_eq!(err.get_kind().offset(), Some(2));
    assert_eq!(err.get_kind().expected(), Some(Expected::Identifier));
}

#[test]
fn constructed_lines_round_trip() {
    use crate::{
        ClassIdent, Line, PrefixedIdent, Qualifier, QualifierList, UnquotedString, Url,
    };

    let lines = [
        Line::new(Clause::IsA(ClassIdent::new(
            PrefixedIdent::new("GO", "1").unwrap(),
        )))
        .with_qualifiers(QualifierList::new(vec![Qualifier::new(
            Url::new("http://x.org/?a=b").unwrap(),
            "v",
        )])),
        Line::new(Clause::Name(UnquotedString::new(""))),
        Line::new(Clause::Comment(UnquotedString::new(""))),
        Line::new(Clause::CreatedBy(UnquotedString::new(""))),
    ];
    for line in lines {
        let text = line.to_obo_string();
        assert_eq!(parse_line(&text).unwrap(), line, "{text}");
    }
}
