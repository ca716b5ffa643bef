use crate::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, Ident, LogicalOperator},
    render::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::Placeholder(name) => r.add_named_param(name),
            Expr::BinaryOp(op) => op.render(r),
            Expr::Logical { op, operands } => render_logical(*op, operands, r),
        }
    }
}

fn render_logical(op: LogicalOperator, operands: &[Expr], r: &mut Renderer) {
    let (joiner, empty) = match op {
        LogicalOperator::And => (" AND ", "TRUE"),
        LogicalOperator::Or => (" OR ", "FALSE"),
    };

    match operands {
        [] => r.sql.push_str(empty),
        [single] => single.render(r),
        _ => {
            r.sql.push('(');
            for (i, operand) in operands.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(joiner);
                }
                operand.render(r);
            }
            r.sql.push(')');
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::Like => " LIKE ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
        r.sql.push(')');
    }
}
