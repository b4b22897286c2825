use std::collections::HashMap;

use crate::{ast::Token, value::Value};

/// Parameter bindings visible while evaluating a lambda body.
///
/// A fresh scope is built for every lambda application and replaces,
/// rather than extends, whatever scope the caller had.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    variables: HashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any earlier binding of the same name.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Scope {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut scope = Scope::new();
        for (name, value) in iter {
            scope.bind(name, value);
        }
        scope
    }
}

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// `evaluate` was handed an empty token sequence
    EmptySequence,

    /// Variable not bound in the current scope
    UnknownVariable(String),

    /// Operator applied to values of the wrong type
    InvalidOperandTypes {
        operator: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// A lambda header not followed by a sub-expression body
    ExpectedSubExpression(String),

    /// Tokens left over after one complete expression
    TooManyTokens(usize),

    /// An operator or lambda ran out of operands
    ExpectedTokenMissing,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::EmptySequence => write!(f, "Invalid token sequence"),
            EvalError::UnknownVariable(name) => write!(f, "Unknown variable: {}", name),
            EvalError::InvalidOperandTypes {
                operator,
                left,
                right,
            } => write!(
                f,
                "Invalid operand types for operator {}: {} and {}",
                operator, left, right
            ),
            EvalError::ExpectedSubExpression(found) => write!(
                f,
                "Unexpected token after lambda expression: {}. Expecting sub expression",
                found
            ),
            EvalError::TooManyTokens(n) => {
                write!(f, "Too many tokens in sequence ({} left over)", n)
            }
            EvalError::ExpectedTokenMissing => write!(f, "Expected token missing"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Read-only cursor over one token sequence.
struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    fn next(&mut self) -> Result<&'a Token, EvalError> {
        let token = self
            .tokens
            .get(self.position)
            .ok_or(EvalError::ExpectedTokenMissing)?;
        self.position += 1;
        Ok(token)
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }
}

/// Evaluates a token sequence that holds exactly one complete expression.
///
/// `scope` supplies the variables visible to the expression. Top-level
/// programs are evaluated with `None`; only lambda bodies see a scope.
///
/// # Examples
///
/// ```
/// use simplelisp::{evaluate, parse, Value};
///
/// let tokens = parse("(lambda (x, y) (+ x y) 3 4)").unwrap();
/// assert_eq!(evaluate(&tokens, None).unwrap(), Value::Number(7.0));
/// ```
pub fn evaluate(tokens: &[Token], scope: Option<&Scope>) -> Result<Value, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::EmptySequence);
    }

    let mut cursor = TokenCursor::new(tokens);
    let value = eval_head(&mut cursor, scope)?;

    match cursor.remaining() {
        0 => Ok(value),
        n => Err(EvalError::TooManyTokens(n)),
    }
}

fn evaluate_token(token: &Token, scope: Option<&Scope>) -> Result<Value, EvalError> {
    evaluate(std::slice::from_ref(token), scope)
}

fn eval_head(cursor: &mut TokenCursor<'_>, scope: Option<&Scope>) -> Result<Value, EvalError> {
    match cursor.next()? {
        Token::SubExpression(children) => evaluate(children, scope),
        Token::Number(n) => Ok(Value::Number(*n)),
        Token::Variable(name) => scope
            .and_then(|s| s.get(name))
            .ok_or_else(|| EvalError::UnknownVariable(name.clone())),
        Token::MathOperator(op) => {
            let (left, right) = numeric_operands(cursor, scope, op.symbol())?;
            Ok(Value::Number(op.apply(left, right)))
        }
        Token::LogicalOperator(op) => {
            let (left, right) = numeric_operands(cursor, scope, op.symbol())?;
            select_branch(cursor, scope, op.compare(left, right))
        }
        Token::BooleanOperator(op) => {
            let left = evaluate_token(cursor.next()?, scope)?;
            let right = evaluate_token(cursor.next()?, scope)?;

            let condition = match (left, right) {
                (Value::Boolean(l), Value::Boolean(r)) => op.combine(l, r),
                (l, r) => {
                    return Err(EvalError::InvalidOperandTypes {
                        operator: op.symbol(),
                        left: l.type_name(),
                        right: r.type_name(),
                    });
                }
            };
            select_branch(cursor, scope, condition)
        }
        Token::LambdaExpression(params) => apply_lambda(cursor, scope, params),
    }
}

fn numeric_operands(
    cursor: &mut TokenCursor<'_>,
    scope: Option<&Scope>,
    operator: &'static str,
) -> Result<(f64, f64), EvalError> {
    let left = evaluate_token(cursor.next()?, scope)?;
    let right = evaluate_token(cursor.next()?, scope)?;

    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((l, r)),
        (l, r) => Err(EvalError::InvalidOperandTypes {
            operator,
            left: l.type_name(),
            right: r.type_name(),
        }),
    }
}

/// With no branches left the condition itself is the result. Otherwise
/// takes both branch tokens but evaluates only the chosen one.
fn select_branch(
    cursor: &mut TokenCursor<'_>,
    scope: Option<&Scope>,
    condition: bool,
) -> Result<Value, EvalError> {
    if cursor.remaining() == 0 {
        return Ok(Value::Boolean(condition));
    }

    let then_branch = cursor.next()?;
    let else_branch = cursor.next()?;

    if condition {
        evaluate_token(then_branch, scope)
    } else {
        evaluate_token(else_branch, scope)
    }
}

fn apply_lambda(
    cursor: &mut TokenCursor<'_>,
    scope: Option<&Scope>,
    params: &[String],
) -> Result<Value, EvalError> {
    let body = match cursor.next()? {
        Token::SubExpression(body) => body,
        other => return Err(EvalError::ExpectedSubExpression(other.to_string())),
    };

    // Arguments see the caller's scope; the body sees only its parameters
    let mut local = Scope::new();
    for param in params {
        let argument = evaluate_token(cursor.next()?, scope)?;
        local.bind(param.as_str(), argument);
    }

    evaluate(body, Some(&local))
}
