use crate::fixtures::{filtered, filtered_from, list_query, wallets};
use query_builder::{
    ast::expr::BinaryOperator,
    compare,
    dialect::{MySql, Postgres},
    placeholder, qualified,
    render::render_select,
    value::Value,
};

#[test]
fn test_postgres_positional_parameters_follow_bag_order() {
    let select = filtered(&wallets(), "[$and:[[owner:$like:'ali'],[balance:$gte:100]]]");
    let (sql, params) = render_select(&select, &Postgres).unwrap();

    assert_eq!(
        sql,
        r#"SELECT "w"."id" FROM "funds"."wallets" AS "w" WHERE (("w"."owner_name" LIKE $1) AND ("w"."balance" >= $2))"#
    );
    assert_eq!(params, vec![Value::from("%ali%"), Value::Int(100)]);
}

#[test]
fn test_mysql_or_of_equalities() {
    let select = filtered(&wallets(), "[$or:[[kind:'zakat'],[kind:'waqf']]]");
    let (sql, params) = render_select(&select, &MySql).unwrap();

    assert_eq!(
        sql,
        "SELECT `w`.`id` FROM `funds`.`wallets` AS `w` WHERE ((`w`.`wallet_kind` = ?) OR (`w`.`wallet_kind` = ?))"
    );
    assert_eq!(params, vec![Value::from("zakat"), Value::from("waqf")]);
}

#[test]
fn test_literals_never_reach_the_sql_text() {
    let select = filtered(&wallets(), "[owner:'x\\' OR 1=1 --']");
    let (sql, params) = render_select(&select, &Postgres).unwrap();

    assert!(!sql.contains("OR 1=1"));
    assert_eq!(params, vec![Value::from("x' OR 1=1 --")]);
}

#[test]
fn test_unfiltered_select_has_no_where() {
    let (sql, params) = render_select(&filtered(&wallets(), ""), &Postgres).unwrap();
    assert_eq!(sql, r#"SELECT "w"."id" FROM "funds"."wallets" AS "w""#);
    assert!(params.is_empty());
}

#[test]
fn test_filter_cannot_rebind_the_callers_scope() {
    let entity = wallets();
    let scoped = list_query(&entity)
        .and_where(compare(qualified("w", "tenant_id"), BinaryOperator::Eq, placeholder("tenant_id")))
        .set_parameter("tenant_id", Value::Int(1));

    let select = filtered_from(scoped, &entity, "[tenant:2]");
    let (sql, params) = render_select(&select, &Postgres).unwrap();

    assert_eq!(
        sql,
        r#"SELECT "w"."id" FROM "funds"."wallets" AS "w" WHERE (("w"."tenant_id" = $1) AND ("w"."tenant_id" = $2))"#
    );
    assert_eq!(params, vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(select.parameters.get("tenant_id"), Some(&Value::Int(1)));
    assert_eq!(select.parameters.get("tenant_id_1"), Some(&Value::Int(2)));
}
