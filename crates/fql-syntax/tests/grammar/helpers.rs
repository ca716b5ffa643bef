use fql_syntax::{Ast, NodeId, Operator, SyntaxSettings, compile};
use std::collections::HashMap;

pub fn donation_columns() -> HashMap<String, String> {
    [
        ("name", "donor_name"),
        ("age", "age"),
        ("status", "status"),
        ("amount", "amount"),
        ("fund", "fund_type"),
        ("createdAt", "created_at"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn compile_default(input: &str) -> Ast {
    compile(input, &donation_columns(), &SyntaxSettings::default())
        .unwrap_or_else(|e| panic!("failed to compile {input}: {e}"))
}

pub fn only_child(ast: &Ast, id: NodeId) -> NodeId {
    let kids = ast.children(id);
    assert_eq!(kids.len(), 1, "expected a single child");
    kids[0]
}

pub fn operator_of(ast: &Ast, id: NodeId) -> Operator {
    ast.node(id).operator().expect("composite node")
}
