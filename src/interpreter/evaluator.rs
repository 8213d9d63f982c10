use crate::ast::{BinaryOperator, Expr};

/// Reduces an expression tree to its numeric value.
///
/// Evaluation is a pure post-order walk: both operands are evaluated, then
/// combined with ordinary IEEE-754 double arithmetic. Nothing here can fail;
/// division by zero yields an infinity, and `0 / 0` yields NaN.
///
/// The walk keeps its own stacks, so a flat chain like `1 + 1 + ... + 1`
/// costs heap, not call depth.
///
/// # Parameters
/// - `expr`: The tree to evaluate.
///
/// # Returns
/// The value of the expression.
///
/// # Example
/// ```
/// use calc::{interpreter::evaluator::evaluate, parse_source};
///
/// let expr = parse_source("16 / 4 / 2").unwrap();
/// assert_eq!(evaluate(&expr), 2.0);
///
/// let expr = parse_source("1 / 0").unwrap();
/// assert_eq!(evaluate(&expr), f64::INFINITY);
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    enum Step<'a> {
        Visit(&'a Expr),
        Apply(BinaryOperator),
    }

    let mut steps = vec![Step::Visit(expr)];
    let mut operands: Vec<f64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Literal { value }) => operands.push(*value),
            Step::Visit(Expr::BinaryOp { left, op, right }) => {
                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            },
            Step::Apply(op) => {
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    unreachable!("both operands are evaluated before their operator")
                };
                operands.push(eval_binary(op, left, right));
            },
        }
    }

    operands.pop().unwrap_or(f64::NAN)
}

/// Applies a binary operator to two already evaluated operands.
///
/// # Example
/// ```
/// use calc::{ast::BinaryOperator, interpreter::evaluator::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 8.0, 3.0), 5.0);
/// assert!(eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => left / right,
    }
}
