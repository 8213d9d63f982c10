/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a strict tree: every `BinaryOp` exclusively owns its two operands
/// and every leaf is a `Literal`. The parser builds it bottom-up and the
/// evaluator consumes it; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a `BinaryOp` node from its operator and operands.
    ///
    /// ## Example
    /// ```
    /// use calc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add,
    ///                         Expr::Literal { value: 1.0 },
    ///                         Expr::Literal { value: 2.0 });
    ///
    /// assert_eq!(expr.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Returns the height of the tree; a lone literal has depth 1.
    ///
    /// ## Example
    /// ```
    /// use calc::parse_source;
    ///
    /// assert_eq!(parse_source("4").unwrap().depth(), 1);
    /// assert_eq!(parse_source("1 + 2 * 3").unwrap().depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Self::BinaryOp { left, right, .. } = node {
                pending.push((left, level + 1));
                pending.push((right, level + 1));
            }
        }
        deepest
    }
}

/// Renders the tree fully parenthesized, so grouping is visible.
///
/// Walks with an explicit stack; a long operator chain is as deep as it is
/// long.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Op(BinaryOperator),
            Close,
        }

        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Self::Literal { value }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right }) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Op(*op));
                    pieces.push(Piece::Node(left));
                },
                Piece::Op(op) => write!(f, " {op} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

/// Tears the tree down with a worklist instead of recursing per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Self::BinaryOp { left, right, .. } = self {
            pending.push(take_node(left));
            pending.push(take_node(right));
        }
        while let Some(mut node) = pending.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut node {
                pending.push(take_node(left));
                pending.push(take_node(right));
            }
        }
    }
}

/// Moves a child out of its box, leaving a leaf that drops without recursion.
fn take_node(slot: &mut Expr) -> Expr {
    std::mem::replace(slot, Expr::Literal { value: 0.0 })
}

/// The four arithmetic operators.
///
/// Precedence is not stored here; it falls out of which grammar level
/// consumes the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
