use crate::helpers::{donations, donations_query, request};
use fql_interceptor::{FilterConfig, FilterError, InterceptorFactory, QueryString};
use fql_syntax::{
    KeywordMode, Operator, SyntaxError, SyntaxSettings, lexer::error::LexError,
    parser::error::ParseError,
};
use query_builder::{
    ast::expr::{BinaryOperator, Expr},
    compare, placeholder, qualified,
    value::Value,
};
use serde_json::json;
use tracing_test::traced_test;

#[test]
fn test_scenario_a_single_equality() {
    let factory = InterceptorFactory::default();
    let interceptor = factory
        .create_interceptor(&request("[$eq:[[status:1]]]"), &donations())
        .unwrap()
        .unwrap();

    let ast = interceptor.ast();
    let eq = ast.children(ast.root())[0];
    assert_eq!(ast.node(eq).operator(), Some(Operator::Eq));
    let leaf = ast.children(eq)[0];
    assert_eq!(ast.node(leaf).key(), Some("status"));

    let compiled = interceptor.compile().unwrap();
    assert_eq!(
        compiled.condition,
        compare(qualified("d", "status"), BinaryOperator::Eq, placeholder("status"))
    );
    assert_eq!(serde_json::to_value(&compiled.parameters).unwrap(), json!({"status": 1}));
}

#[test]
fn test_scenario_b_like_and_gte() {
    let select = InterceptorFactory::default()
        .apply(
            &request("[$and:[[name:$like:'ali'],[age:$gte:18]]]"),
            donations_query(&donations()),
            &donations(),
        )
        .unwrap()
        .build();

    assert_eq!(
        select.where_clause,
        Some(Expr::and([
            compare(qualified("d", "name"), BinaryOperator::Like, placeholder("name")),
            compare(qualified("d", "age"), BinaryOperator::GtEq, placeholder("age")),
        ]))
    );
    let parameters: Vec<_> = select.parameters.into_iter().collect();
    assert_eq!(
        parameters,
        vec![
            ("name".to_string(), Value::from("%ali%")),
            ("age".to_string(), Value::Int(18)),
        ]
    );
}

#[test]
fn test_scenario_c_missing_close_bracket() {
    let err = InterceptorFactory::default()
        .apply(&request("[$and:[[status:1]]"), donations_query(&donations()), &donations())
        .unwrap_err();

    match &err {
        FilterError::Syntax(SyntaxError::Parse(ParseError::MissingCloseBracket)) => {}
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("missing close square brace"));
    assert!(err.is_client_error());
}

#[test]
fn test_scenario_d_empty_filter_leaves_builder_alone() {
    let factory = InterceptorFactory::default();
    let query = QueryString::parse("filter=").unwrap();
    assert!(factory.create_interceptor(&query, &donations()).unwrap().is_none());

    let untouched = donations_query(&donations()).build();
    let applied = factory
        .apply(&query, donations_query(&donations()), &donations())
        .unwrap()
        .build();
    assert_eq!(applied, untouched);
}

#[test]
fn test_scenario_e_unterminated_string() {
    let err = InterceptorFactory::default()
        .create_interceptor(&request("[name:$eq:'ali]"), &donations())
        .unwrap_err();

    assert!(matches!(
        err,
        FilterError::Syntax(SyntaxError::Lex(LexError::UnterminatedString { position: 10 }))
    ));
    assert!(err.to_string().contains("unterminated string literal"));
}

#[test]
fn test_unknown_key_names_the_key() {
    let err = InterceptorFactory::default()
        .create_interceptor(&request("[password:'x']"), &donations())
        .unwrap_err();
    assert!(err.to_string().contains("'password'"));
}

#[test]
fn test_excess_close_brackets_are_counted() {
    let err = InterceptorFactory::default()
        .create_interceptor(&request("[status:1]]]"), &donations())
        .unwrap_err();
    assert!(matches!(
        err,
        FilterError::Syntax(SyntaxError::Parse(ParseError::UnmatchedCloseBracket { count: 2 }))
    ));
}

#[test]
fn test_repeated_keys_get_distinct_placeholders() {
    let compiled = InterceptorFactory::default()
        .create_interceptor(&request("[$and:[[amount:$gte:10],[amount:$lte:20]]]"), &donations())
        .unwrap()
        .unwrap()
        .compile()
        .unwrap();

    assert_eq!(
        compiled.condition,
        Expr::and([
            compare(qualified("d", "amount"), BinaryOperator::GtEq, placeholder("amount")),
            compare(qualified("d", "amount"), BinaryOperator::LtEq, placeholder("amount_1")),
        ])
    );
    assert_eq!(
        serde_json::to_value(&compiled.parameters).unwrap(),
        json!({"amount": 10, "amount_1": 20})
    );
}

#[test]
fn test_every_literal_is_bound_once() {
    let compiled = InterceptorFactory::default()
        .create_interceptor(
            &request("[$or:[$and:[[fund:'zakat'],[amount:$gt:100]],[fund:$like:'inf']]]"),
            &donations(),
        )
        .unwrap()
        .unwrap()
        .compile()
        .unwrap();

    let values: Vec<_> = compiled.parameters.iter().map(|(_, v)| v.clone()).collect();
    assert_eq!(
        values,
        vec![Value::from("zakat"), Value::Int(100), Value::from("%inf%")]
    );
}

#[traced_test]
#[test]
fn test_lenient_keyword_is_dropped_and_logged() {
    let config = FilterConfig {
        syntax: SyntaxSettings {
            keyword_mode: KeywordMode::Lenient,
            ..SyntaxSettings::default()
        },
        ..FilterConfig::default()
    };
    let err = InterceptorFactory::new(config)
        .create_interceptor(&request("[$in:[[status:1]]]"), &donations())
        .unwrap_err();

    assert!(matches!(err, FilterError::Syntax(SyntaxError::Parse(_))));
    assert!(logs_contain("Dropping unknown operator keyword"));
    assert!(logs_contain("Rejected filter expression"));
}

#[traced_test]
#[test]
fn test_applying_a_filter_is_logged() {
    InterceptorFactory::default()
        .apply(&request("[status:1]"), donations_query(&donations()), &donations())
        .unwrap();
    assert!(logs_contain("Applying filter condition"));
}
