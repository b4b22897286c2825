use std::fmt;

/// Location of a lexeme in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Character offset from the start of the input
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Kind of a raw lexeme.
///
/// The lexer only splits text. Operators, numbers and identifiers all come
/// out as [`LexemeKind::Word`] and are classified by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum LexemeKind {
    LParen,
    RParen,
    Comma,
    /// The reserved `lambda` keyword
    Lambda,
    /// Any other run of characters up to the next boundary
    Word(String),
    Eof,
}

impl LexemeKind {
    /// Source text of the lexeme, as shown in error messages
    pub fn text(&self) -> &str {
        match self {
            LexemeKind::LParen => "(",
            LexemeKind::RParen => ")",
            LexemeKind::Comma => ",",
            LexemeKind::Lambda => "lambda",
            LexemeKind::Word(w) => w.as_str(),
            LexemeKind::Eof => "<end of input>",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub position: Position,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

fn is_boundary(ch: char) -> bool {
    ch == '(' || ch == ')' || ch == ',' || ch.is_whitespace()
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        if self.current_char() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn current_position(&self) -> Position {
        Position {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_boundary(ch) {
                break;
            }
            result.push(ch);
            self.advance();
        }
        result
    }

    /// Returns the next lexeme and moves the cursor past it and any
    /// whitespace that follows. Returns `Eof` forever once input runs out.
    pub fn next_token(&mut self) -> Lexeme {
        self.skip_whitespace();

        let position = self.current_position();
        let kind = match self.current_char() {
            None => LexemeKind::Eof,
            Some('(') => {
                self.advance();
                LexemeKind::LParen
            }
            Some(')') => {
                self.advance();
                LexemeKind::RParen
            }
            Some(',') => {
                self.advance();
                LexemeKind::Comma
            }
            Some(_) => {
                let word = self.read_word();
                match word.as_str() {
                    "lambda" => LexemeKind::Lambda,
                    _ => LexemeKind::Word(word),
                }
            }
        };

        self.skip_whitespace();
        Lexeme { kind, position }
    }

    /// Collects every lexeme up to, but not including, `Eof`.
    pub fn tokenize(mut self) -> Vec<Lexeme> {
        let mut lexemes = vec![];
        loop {
            let lexeme = self.next_token();
            if lexeme.kind == LexemeKind::Eof {
                return lexemes;
            }
            lexemes.push(lexeme);
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("lambda lambdas");
    assert_eq!(lexer.next_token().kind, LexemeKind::Lambda);
    assert_eq!(lexer.next_token().kind, LexemeKind::Word("lambdas".to_string()));
    assert_eq!(lexer.next_token().kind, LexemeKind::Eof);
    assert_eq!(lexer.next_token().kind, LexemeKind::Eof);
}

#[test]
fn test_positions() {
    let mut lexer = Lexer::new("(+\n  x)");
    assert_eq!(lexer.next_token().position, Position { offset: 0, line: 1, column: 1 });
    assert_eq!(lexer.next_token().position, Position { offset: 1, line: 1, column: 2 });
    assert_eq!(lexer.next_token().position, Position { offset: 5, line: 2, column: 3 });
    assert_eq!(lexer.next_token().position, Position { offset: 6, line: 2, column: 4 });
}
