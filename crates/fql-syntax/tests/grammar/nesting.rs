use crate::helpers::{compile_default, donation_columns, only_child, operator_of};
use fql_syntax::{
    KeywordMode, Operator, SyntaxError, SyntaxSettings, compile, lexer::error::LexError,
    parser::error::ParseError,
};
use tracing_test::traced_test;

#[test]
fn test_deep_mix_of_operators() {
    let ast = compile_default(
        "[$or:[$and:[[fund:'zakat'],[amount:$gt:100]],$and:[[fund:'infaq'],[amount:$lte:50]]]]",
    );
    let or = only_child(&ast, ast.root());
    assert_eq!(operator_of(&ast, or), Operator::Or);

    for branch in ast.children(or) {
        assert_eq!(operator_of(&ast, *branch), Operator::And);
        assert_eq!(ast.children(*branch).len(), 2);
    }
    assert_eq!(ast.leaves().len(), 4);
}

#[test]
fn test_repeated_key_is_kept_twice() {
    let ast = compile_default("[$and:[[amount:$gte:10],[amount:$lte:20]]]");
    assert_eq!(ast.leaves().len(), 2);
}

#[test]
fn test_depth_limit_from_settings() {
    let settings = SyntaxSettings {
        max_depth: 2,
        ..SyntaxSettings::default()
    };
    let err = compile("[$and:[$or:[age:1]]]", &donation_columns(), &settings).unwrap_err();
    assert_eq!(err, SyntaxError::Parse(ParseError::TooDeep { max: 2 }));
}

#[traced_test]
#[test]
fn test_unknown_keyword_strict() {
    let err = compile(
        "[$between:[age:1]]",
        &donation_columns(),
        &SyntaxSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::Lex(LexError::UnknownKeyword { .. })
    ));
    assert!(logs_contain("Rejected filter expression"));
}

#[traced_test]
#[test]
fn test_unknown_keyword_lenient_still_fails_to_parse() {
    let settings = SyntaxSettings {
        keyword_mode: KeywordMode::Lenient,
        ..SyntaxSettings::default()
    };
    let err = compile("[$between:[age:1]]", &donation_columns(), &settings).unwrap_err();
    assert!(matches!(err, SyntaxError::Parse(_)));
    assert!(logs_contain("Dropping unknown operator keyword"));
}
