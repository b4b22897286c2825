//! Language reference for the simplelisp CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Conditionals,
    Lambdas,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" | "math" => Some(Self::Operators),
            "conditionals" | "conditional" | "if" => Some(Self::Conditionals),
            "lambdas" | "lambda" => Some(Self::Lambdas),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SIMPLELISP DOCUMENTATION

SimpleLisp is a tiny parenthesized expression language. A program is one
expression; evaluating it yields a number or a boolean.

DOCUMENTATION CATEGORIES

  syntax            Programs, literals, variables and parentheses
  operators         Arithmetic operators
  conditionals      Comparison and boolean operators with their branches
  lambdas           Inline lambda application and parameter scope
  errors            Parse and evaluation errors

QUICK REFERENCE

  (+ a b)               Arithmetic: + - * /
  (< a b then else)     Comparison: = < > >= <=
  (& p q then else)     Boolean: & |
  (< a b)  (& p q)      Predicate, returns True or False
  (lambda (x, y) body a b)

Run 'simplelisp doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Conditionals) => Ok(CONDITIONALS_DOC),
        Some(DocCategory::Lambdas) => Ok(LAMBDAS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Programs and Atoms

PROGRAM
  A program is exactly one expression. Anything after it is an error.

NUMBERS
  42  -3  2.5  .5  1e3
    All numbers are 64-bit floats.

VARIABLES
  x  item_count  _tmp
    Letters, digits and underscores, not starting with a digit. Variables
    only exist inside a lambda body. 'lambda' is reserved.

PARENTHESES
  Operator applications must be parenthesized: (+ 1 2).
  Numbers, variables and lambdas may stand alone or in one pair of
  parentheses: 5 and (5) are the same program.

TOKENS
  Tokens are separated by whitespace, '(', ')' and ','. Write '(+ 1 2)',
  not '(+1 2)'.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Arithmetic

  (+ a b)    Addition
  (- a b)    Subtraction
  (* a b)    Multiplication
  (/ a b)    Division

  Both operands must be numbers. Division by zero is not an error:
    (/ 1 0)    => Infinity
    (/ 0 0)    => NaN

  Example:
    (* (+ 1 2) 4)    => 12
"#;

const CONDITIONALS_DOC: &str = r#"CONDITIONALS - Comparison and Boolean Operators

There is no 'if'. Comparisons and boolean operators take two operands and
two branches. Only the selected branch is evaluated.

COMPARISON
  (= a b then else)    (< a b then else)    (> a b then else)
  (>= a b then else)   (<= a b then else)

    Operands must be numbers.

    (< 1 2 (+ 1 1) (/ 1 0))    => 2

BOOLEAN
  (& p q then else)    (| p q then else)

    Operands must be booleans.

    (& (= 1 1) (= 2 2) 10 20)    => 10

PREDICATES
  Without branches, either kind of operator returns the boolean itself.
  This is how boolean operands are written.

    (< 1 2)                      => True
    (| (= 1 2) (> 3 2))          => True
"#;

const LAMBDAS_DOC: &str = r#"LAMBDAS - Inline Application

  (lambda (p1, p2, ...) body arg1 arg2 ...)

    A lambda is applied where it is written. It must be followed by its
    body and then exactly one argument per parameter. At least one
    parameter is required and names must be distinct.

    (lambda (x, y) (+ x y) 3 4)    => 7

SCOPE
  Arguments are evaluated in the caller's scope. The body sees only its
  own parameters: a nested lambda cannot read an outer lambda's
  parameters.

    (lambda (x) (lambda (y) (+ x y) 1) 2)    => Unknown variable: x
"#;

const ERRORS_DOC: &str = r#"ERRORS

PARSE ERRORS
  Unexpected token: <token>. Expecting: <construct>
  Unexpected end of input. Expecting: <construct>
  Mismatched parentheses
  Lambda expression requires at least one parameter
  Duplicate lambda parameter

EVALUATION ERRORS
  Unknown variable: <name>
  Invalid operand types for operator <op>: <type> and <type>
  Expected token missing
  Too many tokens in sequence
  Invalid token sequence

An error stops the program. In the REPL the error is printed and the next
line is read.
"#;
