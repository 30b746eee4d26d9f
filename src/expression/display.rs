use std::fmt;

use crate::expression::ast::{Expression, OpKind};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn is_sum(expr: &Expression) -> bool {
            matches!(expr.op_kind(), Some(OpKind::Add | OpKind::Sub))
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Tile { value, .. } => write!(f, "{}", value),
                Expression::Op { kind, lhs, rhs, .. } => {
                    // Parenthesize a child only where re-parsing the flat
                    // string would otherwise bind it differently.
                    let (need_l, need_r) = match kind {
                        OpKind::Add => (false, false),
                        OpKind::Mul => (is_sum(lhs), is_sum(rhs)),
                        OpKind::Sub => (false, is_sum(rhs)),
                        OpKind::Div => (
                            matches!(
                                lhs.op_kind(),
                                Some(OpKind::Add | OpKind::Sub | OpKind::Div)
                            ),
                            rhs.op_kind().is_some(),
                        ),
                    };
                    write_with_parens(f, lhs, need_l)?;
                    write!(f, "{}", kind.symbol())?;
                    write_with_parens(f, rhs, need_r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
