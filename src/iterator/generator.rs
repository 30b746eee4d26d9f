use crate::expression::{Expression, OpKind};

pub struct ExpressionGenerator;

impl ExpressionGenerator {
    /// All admissible operator applications between two tile-disjoint
    /// expressions. At most four results, emitted in a fixed order.
    ///
    /// Pruning rules: a zero operand admits nothing; multiplication by one
    /// is skipped; subtraction always runs larger-minus-smaller and is
    /// skipped for equal values; division must be exact and by something
    /// other than one, and may fire in both directions.
    pub fn binary_ops(lhs: &Expression, rhs: &Expression) -> Vec<Expression> {
        let va = lhs.value();
        let vb = rhs.value();

        let mut ops = Vec::new();
        if va == 0 || vb == 0 {
            return ops;
        }

        ops.push(Expression::op(OpKind::Add, lhs.clone(), rhs.clone()));

        if va != 1 && vb != 1 {
            ops.push(Expression::op(OpKind::Mul, lhs.clone(), rhs.clone()));
        }

        match va.cmp(&vb) {
            std::cmp::Ordering::Greater => {
                ops.push(Expression::op(OpKind::Sub, lhs.clone(), rhs.clone()));
            }
            std::cmp::Ordering::Less => {
                ops.push(Expression::op(OpKind::Sub, rhs.clone(), lhs.clone()));
            }
            std::cmp::Ordering::Equal => {}
        }

        if vb != 1 && va % vb == 0 {
            ops.push(Expression::op(OpKind::Div, lhs.clone(), rhs.clone()));
        }
        if va != 1 && vb % va == 0 {
            ops.push(Expression::op(OpKind::Div, rhs.clone(), lhs.clone()));
        }

        ops
    }
}
