use std::fmt;

use crate::ast::{BooleanOp, LogicalOp, MathOp};

/// A parsed token in the flattened program representation.
///
/// The parser does not build a nested expression tree. Each parsed unit
/// becomes a [`Token::SubExpression`] whose body is a flat run of tokens:
/// an operator followed by its operands, each operand again wrapped in its
/// own `SubExpression`.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// One fully parsed expression unit
    ///
    /// # Examples
    /// ```text
    /// (+ 1 2)      // SubExpression([MathOperator(Add), SubExpression([Number(1)]), SubExpression([Number(2)])])
    /// 7            // SubExpression([Number(7)])
    /// ```
    SubExpression(Vec<Token>),

    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// -1
    /// ```
    Number(f64),

    /// Reference to a lambda parameter
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores. `lambda` is reserved.
    ///
    /// # Examples
    /// ```text
    /// x
    /// item_count
    /// _tmp
    /// ```
    Variable(String),

    /// Arithmetic operator
    MathOperator(MathOp),

    /// Comparison operator (a four-operand conditional)
    LogicalOperator(LogicalOp),

    /// Boolean operator (a four-operand conditional)
    BooleanOperator(BooleanOp),

    /// Lambda header carrying its declared parameter names
    ///
    /// The body follows as the next token, then one argument per parameter.
    ///
    /// # Examples
    /// ```text
    /// (lambda (x, y) (+ x y) 3 4)
    /// ```
    LambdaExpression(Vec<String>),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::SubExpression(tokens) => {
                write!(f, "(")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", token)?;
                }
                write!(f, ")")
            }
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable(name) => write!(f, "{}", name),
            Token::MathOperator(op) => write!(f, "{}", op.symbol()),
            Token::LogicalOperator(op) => write!(f, "{}", op.symbol()),
            Token::BooleanOperator(op) => write!(f, "{}", op.symbol()),
            Token::LambdaExpression(params) => write!(f, "lambda ({})", params.join(", ")),
        }
    }
}
