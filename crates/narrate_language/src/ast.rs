//! Abstract syntax tree for spoken arithmetic.
//!
//! Each node owns its children. Trees are built once by the parser and are
//! never mutated afterwards.

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a ^ b`
    Power,
}

impl BinaryOperator {
    /// The infix symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }
}

/// A unary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-a`
    Negate,
    /// `sqrt(a)`
    Sqrt,
    /// `a%`
    Percent,
}

/// An AST node.
#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// A number like `25`
    Number(f64),
    /// `left op right`
    Binary {
        /// The operator.
        op: BinaryOperator,
        /// Left operand.
        left: Box<Ast>,
        /// Right operand.
        right: Box<Ast>,
    },
    /// `op operand`
    Unary {
        /// The operator.
        op: UnaryOperator,
        /// The operand.
        operand: Box<Ast>,
    },
}

impl Ast {
    /// Creates a number literal.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a binary node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Returns the value if this is a number literal.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if this is a percent node.
    #[must_use]
    pub const fn is_percent(&self) -> bool {
        matches!(
            self,
            Self::Unary {
                op: UnaryOperator::Percent,
                ..
            }
        )
    }

    /// Number of nodes in this tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::Unary { operand, .. } => 1 + operand.node_count(),
        }
    }
}
