use crate::helpers::{compile_default, donation_columns, only_child, operator_of};
use fql_syntax::{
    Literal, Operator, SyntaxError, SyntaxSettings, compile, lexer::error::LexError,
    parser::error::ParseError,
};

#[test]
fn test_eq_over_single_leaf() {
    let ast = compile_default("[$eq:[[status:1]]]");
    let eq = only_child(&ast, ast.root());
    assert_eq!(operator_of(&ast, eq), Operator::Eq);

    let leaf = only_child(&ast, eq);
    assert_eq!(ast.node(leaf).key(), Some("status"));
    assert_eq!(ast.node(leaf).value(), Some(&Literal::Integer(1)));
}

#[test]
fn test_and_of_like_and_gte() {
    let ast = compile_default("[$and:[[name:$like:'ali'],[age:$gte:18]]]");
    let and = only_child(&ast, ast.root());
    assert_eq!(operator_of(&ast, and), Operator::And);

    let kids = ast.children(and);
    assert_eq!(kids.len(), 2);
    assert_eq!(operator_of(&ast, kids[0]), Operator::Like);
    assert_eq!(operator_of(&ast, kids[1]), Operator::Gte);

    let name = only_child(&ast, kids[0]);
    assert_eq!(ast.node(name).key(), Some("donor_name"));
}

#[test]
fn test_missing_final_bracket() {
    let err = compile(
        "[$and:[[x:1]]",
        &|_: &str| Some("x".to_string()),
        &SyntaxSettings::default(),
    )
    .unwrap_err();
    assert_eq!(err, SyntaxError::Parse(ParseError::MissingCloseBracket));
    assert!(err.to_string().ends_with("missing close square brace"));
}

#[test]
fn test_unterminated_quote() {
    let err = compile(
        "[name:$eq:'ali]",
        &donation_columns(),
        &SyntaxSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::Lex(LexError::UnterminatedString { .. })
    ));
    assert!(err.to_string().ends_with("unterminated string literal"));
}

#[test]
fn test_unknown_key_names_the_key() {
    let err = compile(
        "[$or:[fund:'zakat',wallet:3]]",
        &donation_columns(),
        &SyntaxSettings::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        SyntaxError::Parse(ParseError::UnknownColumn {
            key: "wallet".into()
        })
    );
}
