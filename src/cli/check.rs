//! Parse and evaluate a single SimpleLisp program

use super::{CliError, value_to_json};
use crate::{Lexer, Parser, Token, Value, evaluate};

/// Options for evaluating one program
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Program source text
    pub source: String,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
    /// Return the parsed token tree instead of evaluating
    pub tokens: bool,
    /// Render the result as JSON
    pub json: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The parsed, flattened token sequence
    Tokens(Vec<Token>),
    /// Program evaluated to a value
    Success(Value),
    /// Program evaluated to a value, rendered as JSON
    Json(serde_json::Value),
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckResult::SyntaxValid => write!(f, "Syntax is valid"),
            CheckResult::Tokens(tokens) => write!(f, "{:#?}", tokens),
            CheckResult::Success(value) => write!(f, "{}", value),
            CheckResult::Json(json) => write!(f, "{}", json),
        }
    }
}

/// Execute a simplelisp check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let mut parser = Parser::new(Lexer::new(&options.source));
    let tokens = parser.parse()?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    if options.tokens {
        return Ok(CheckResult::Tokens(tokens));
    }

    let value = evaluate(&tokens, None)?;

    if options.json {
        Ok(CheckResult::Json(value_to_json(value)))
    } else {
        Ok(CheckResult::Success(value))
    }
}
