pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{BooleanOp, LogicalOp, MathOp, Token};
pub use evaluator::{EvalError, Scope, evaluate};
pub use lexer::{Lexeme, LexemeKind, Lexer, Position};
pub use parser::{ParseError, Parser};
pub use value::Value;

/// Either half of the parse-then-evaluate pipeline failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Parse(ParseError),
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Eval(e) => write!(f, "Evaluation error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Eval(e)
    }
}

/// Parses a SimpleLisp program into its flattened token sequence.
///
/// # Examples
///
/// ```
/// use simplelisp::{parse, MathOp, Token};
///
/// let tokens = parse("(+ 2 3)").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::SubExpression(vec![
///         Token::MathOperator(MathOp::Add),
///         Token::SubExpression(vec![Token::Number(2.0)]),
///         Token::SubExpression(vec![Token::Number(3.0)]),
///     ])]
/// );
/// ```
pub fn parse(source: &str) -> Result<Vec<Token>, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}

/// Parses and evaluates a program with no variables in scope.
///
/// # Examples
///
/// ```
/// use simplelisp::{run, Value};
///
/// assert_eq!(run("(* (+ 1 2) 4)").unwrap(), Value::Number(12.0));
/// assert!(run("(+ 1)").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    let tokens = parse(source)?;
    Ok(evaluate(&tokens, None)?)
}
