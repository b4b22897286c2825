use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{BooleanOp, LogicalOp, MathOp, Token},
    lexer::{Lexeme, LexemeKind, Lexer, Position},
};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("number pattern is valid")
});

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

const RESERVED_KEYWORDS: &[&str] = &["lambda"];

/// Errors that can occur while parsing a program.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point
    UnexpectedToken {
        /// Raw text of the offending token
        found: String,
        /// Name of the construct the parser was looking for
        expected: String,
        position: Position,
    },

    /// Input ended in the middle of an expression
    UnexpectedEof { expected: String },

    /// A `)` with no matching `(`
    MismatchedParen { position: Position },

    /// `lambda ()` declares no parameters
    EmptyParameterList { position: Position },

    /// The same name declared twice in one parameter list
    DuplicateParameter { name: String, position: Position },

    /// Tokens left over after the top-level expression
    TrailingInput { found: String, position: Position },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                found,
                expected,
                position,
            } => write!(
                f,
                "Unexpected token: {}. Expecting: {} (at {})",
                found, expected, position
            ),
            ParseError::UnexpectedEof { expected } => {
                write!(f, "Unexpected end of input. Expecting: {}", expected)
            }
            ParseError::MismatchedParen { position } => {
                write!(f, "Mismatched parentheses: unmatched ')' at {}", position)
            }
            ParseError::EmptyParameterList { position } => write!(
                f,
                "Lambda expression requires at least one parameter (at {})",
                position
            ),
            ParseError::DuplicateParameter { name, position } => write!(
                f,
                "Duplicate lambda parameter '{}' (at {})",
                name, position
            ),
            ParseError::TrailingInput { found, position } => write!(
                f,
                "Unexpected token after end of expression: {} (at {})",
                found, position
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser producing the flattened [`Token`] sequence.
///
/// ```text
/// Expression := '(' Operator ')' | ['('] Lambda [')'] | ['('] Number [')'] | ['('] Variable [')']
/// Operator   := MathOp Expression Expression
///             | (CmpOp | BoolOp) Expression Expression [Expression Expression]
/// Lambda     := 'lambda' '(' Variable (',' Variable)* ')' Expression Expression{n}
/// ```
pub struct Parser {
    lexer: Lexer,
    current_token: Lexeme,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    fn check(&self, kind: &LexemeKind) -> bool {
        &self.current_token.kind == kind
    }

    fn optional(&mut self, kind: &LexemeKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &LexemeKind, expected: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match &self.current_token.kind {
            LexemeKind::Eof => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
            kind => ParseError::UnexpectedToken {
                found: kind.text().to_string(),
                expected: expected.to_string(),
                position: self.current_token.position,
            },
        }
    }

    fn current_word(&self) -> Option<&str> {
        match &self.current_token.kind {
            LexemeKind::Word(w) => Some(w.as_str()),
            _ => None,
        }
    }

    /// Parse a complete program: exactly one expression and nothing after it.
    pub fn parse(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = vec![];
        self.parse_expression(&mut tokens)?;

        match &self.current_token.kind {
            LexemeKind::Eof => Ok(tokens),
            LexemeKind::RParen => Err(ParseError::MismatchedParen {
                position: self.current_token.position,
            }),
            kind => Err(ParseError::TrailingInput {
                found: kind.text().to_string(),
                position: self.current_token.position,
            }),
        }
    }

    /// Parse one expression unit and append it to `tokens`, wrapped in a
    /// single `SubExpression`.
    pub fn parse_expression(&mut self, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        let mut body = vec![];
        let has_paren = self.optional(&LexemeKind::LParen);

        if let Some(op) = self.current_word().and_then(MathOp::from_symbol) {
            self.operator_head(has_paren, Token::MathOperator(op), &mut body)?;
            self.parse_operands(2, &mut body)?;
        } else if let Some(op) = self.current_word().and_then(LogicalOp::from_symbol) {
            self.operator_head(has_paren, Token::LogicalOperator(op), &mut body)?;
            self.parse_conditional(&mut body)?;
        } else if let Some(op) = self.current_word().and_then(BooleanOp::from_symbol) {
            self.operator_head(has_paren, Token::BooleanOperator(op), &mut body)?;
            self.parse_conditional(&mut body)?;
        } else if self.optional(&LexemeKind::Lambda) {
            self.parse_lambda(&mut body)?;
        } else if let Some(n) = self.parse_number() {
            body.push(Token::Number(n));
        } else if let Some(name) = self.parse_variable() {
            body.push(Token::Variable(name));
        } else {
            return Err(self.unexpected("expression"));
        }

        if has_paren {
            self.expect(&LexemeKind::RParen, "')'")?;
        }

        tokens.push(Token::SubExpression(body));
        Ok(())
    }

    fn operator_head(
        &mut self,
        has_paren: bool,
        token: Token,
        body: &mut Vec<Token>,
    ) -> Result<(), ParseError> {
        // Operator applications are never bare
        if !has_paren {
            return Err(self.unexpected("'('"));
        }
        self.advance();
        body.push(token);
        Ok(())
    }

    fn parse_operands(&mut self, count: usize, body: &mut Vec<Token>) -> Result<(), ParseError> {
        for _ in 0..count {
            self.parse_expression(body)?;
        }
        Ok(())
    }

    /// Two operands, then either `)` (a predicate) or two branches.
    fn parse_conditional(&mut self, body: &mut Vec<Token>) -> Result<(), ParseError> {
        self.parse_operands(2, body)?;
        if !self.check(&LexemeKind::RParen) {
            self.parse_operands(2, body)?;
        }
        Ok(())
    }

    fn parse_number(&mut self) -> Option<f64> {
        let n = self
            .current_word()
            .filter(|w| NUMBER.is_match(w))
            .and_then(|w| w.parse::<f64>().ok())?;
        self.advance();
        Some(n)
    }

    fn parse_variable(&mut self) -> Option<String> {
        let name = self
            .current_word()
            .filter(|w| IDENTIFIER.is_match(w) && !RESERVED_KEYWORDS.contains(w))?
            .to_string();
        self.advance();
        Some(name)
    }

    fn parse_lambda(&mut self, body: &mut Vec<Token>) -> Result<(), ParseError> {
        let params = self.parse_parameters()?;
        let arity = params.len();

        body.push(Token::LambdaExpression(params));

        // Body, then one argument per parameter
        self.parse_expression(body)?;
        self.parse_operands(arity, body)
    }

    fn parse_parameters(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(&LexemeKind::LParen, "'(' before lambda parameters")?;

        if self.check(&LexemeKind::RParen) {
            return Err(ParseError::EmptyParameterList {
                position: self.current_token.position,
            });
        }

        let mut params: Vec<String> = vec![];
        loop {
            let position = self.current_token.position;
            let name = self
                .parse_variable()
                .ok_or_else(|| self.unexpected("parameter to lambda expression"))?;

            if params.contains(&name) {
                return Err(ParseError::DuplicateParameter { name, position });
            }
            params.push(name);

            if !self.optional(&LexemeKind::Comma) {
                break;
            }
        }

        self.expect(&LexemeKind::RParen, "')' after lambda parameters")?;
        Ok(params)
    }
}

#[test]
fn test_number_words() {
    let cases = vec![
        ("0", Some(0.0)),
        ("42", Some(42.0)),
        ("-3", Some(-3.0)),
        ("2.5", Some(2.5)),
        (".5", Some(0.5)),
        ("1e3", Some(1000.0)),
        ("abc", None),
        ("1x", None),
        ("inf", None),
    ];

    for (input, expected) in cases {
        let mut parser = Parser::new(Lexer::new(input));
        assert_eq!(parser.parse_number(), expected, "Failed for input: {}", input);
    }
}
