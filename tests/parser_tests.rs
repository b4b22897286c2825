// tests/parser_tests.rs

use simplelisp::ast::{BooleanOp, LogicalOp, MathOp, Token};
use simplelisp::lexer::Lexer;
use simplelisp::parser::{ParseError, Parser};
use simplelisp::{Value, evaluate};

fn parse(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut parser = Parser::new(Lexer::new(input));
    parser.parse()
}

fn sub(tokens: Vec<Token>) -> Token {
    Token::SubExpression(tokens)
}

fn num(n: f64) -> Token {
    sub(vec![Token::Number(n)])
}

fn var(name: &str) -> Token {
    sub(vec![Token::Variable(name.to_string())])
}

// ============================================================================
// Atoms
// ============================================================================

#[test]
fn test_number() {
    assert_eq!(parse("42").unwrap(), vec![num(42.0)]);
    assert_eq!(parse("-2.5").unwrap(), vec![num(-2.5)]);
}

#[test]
fn test_parenthesized_atom() {
    assert_eq!(parse("(42)").unwrap(), parse("42").unwrap());
    assert_eq!(parse("(x)").unwrap(), parse("x").unwrap());
}

#[test]
fn test_variable() {
    assert_eq!(parse("item_count").unwrap(), vec![var("item_count")]);
}

#[test]
fn test_number_round_trip() {
    let values = [
        0.0,
        1.0,
        7.25,
        1234567.0,
        -3.5,
        0.001,
        1e-10,
        5e-324,
        -1e300,
        f64::MAX,
        f64::MIN,
    ];

    for n in values {
        let input = n.to_string();
        let tokens = parse(&input).unwrap();
        assert_eq!(tokens, vec![num(n)], "Failed for input: {}", input);
        assert_eq!(
            evaluate(&tokens, None).unwrap(),
            Value::Number(n),
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_math_operators() {
    let test_cases = vec![
        ("+", MathOp::Add),
        ("-", MathOp::Sub),
        ("*", MathOp::Mul),
        ("/", MathOp::Div),
    ];

    for (symbol, op) in test_cases {
        let input = format!("({} 2 3)", symbol);
        assert_eq!(
            parse(&input).unwrap(),
            vec![sub(vec![Token::MathOperator(op), num(2.0), num(3.0)])],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_nested_application() {
    // (* (+ 1 2) 4)
    assert_eq!(
        parse("(* (+ 1 2) 4)").unwrap(),
        vec![sub(vec![
            Token::MathOperator(MathOp::Mul),
            sub(vec![Token::MathOperator(MathOp::Add), num(1.0), num(2.0)]),
            num(4.0),
        ])]
    );
}

#[test]
fn test_comparison_conditional() {
    let test_cases = vec![
        ("=", LogicalOp::Eq),
        ("<", LogicalOp::Lt),
        (">", LogicalOp::Gt),
        (">=", LogicalOp::Ge),
        ("<=", LogicalOp::Le),
    ];

    for (symbol, op) in test_cases {
        let input = format!("({} 1 2 10 20)", symbol);
        assert_eq!(
            parse(&input).unwrap(),
            vec![sub(vec![
                Token::LogicalOperator(op),
                num(1.0),
                num(2.0),
                num(10.0),
                num(20.0),
            ])],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_comparison_predicate() {
    assert_eq!(
        parse("(< 1 2)").unwrap(),
        vec![sub(vec![Token::LogicalOperator(LogicalOp::Lt), num(1.0), num(2.0)])]
    );
}

#[test]
fn test_boolean_conditional() {
    let tokens = parse("(| (= 1 1) (= 2 3) 10 20)").unwrap();

    match &tokens[..] {
        [Token::SubExpression(body)] => {
            assert_eq!(body.len(), 5);
            assert_eq!(body[0], Token::BooleanOperator(BooleanOp::Or));
            assert!(matches!(
                &body[1],
                Token::SubExpression(inner) if inner[0] == Token::LogicalOperator(LogicalOp::Eq)
            ));
        }
        other => panic!("Expected a single sub-expression, got {:?}", other),
    }
}

#[test]
fn test_three_operand_comparison_is_rejected() {
    let err = parse("(= 1 2 3)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { ref found, ref expected, .. }
            if found == ")" && expected == "expression"
    ));
}

// ============================================================================
// Lambdas
// ============================================================================

#[test]
fn test_lambda() {
    assert_eq!(
        parse("(lambda (x, y) (+ x y) 3 4)").unwrap(),
        vec![sub(vec![
            Token::LambdaExpression(vec!["x".to_string(), "y".to_string()]),
            sub(vec![Token::MathOperator(MathOp::Add), var("x"), var("y")]),
            num(3.0),
            num(4.0),
        ])]
    );
}

#[test]
fn test_bare_lambda() {
    assert_eq!(
        parse("lambda (x) x 1").unwrap(),
        parse("(lambda (x) x 1)").unwrap()
    );
}

#[test]
fn test_lambda_argument_count_follows_parameters() {
    // One parameter, so one argument; the trailing 2 is left over
    assert!(parse("(lambda (x) x 1 2)").is_err());
    // Two parameters, one argument
    assert!(parse("(lambda (x, y) x 1)").is_err());
}

#[test]
fn test_lambda_empty_parameters() {
    assert!(matches!(
        parse("(lambda () 1)"),
        Err(ParseError::EmptyParameterList { .. })
    ));
}

#[test]
fn test_lambda_duplicate_parameters() {
    assert!(matches!(
        parse("(lambda (x, x) x 1 2)"),
        Err(ParseError::DuplicateParameter { ref name, .. }) if name == "x"
    ));
}

#[test]
fn test_lambda_bad_parameter() {
    let err = parse("(lambda (x, 3) x 1 2)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected token: 3. Expecting: parameter to lambda expression (at line 1, column 13)"
    );
}

#[test]
fn test_lambda_requires_parameter_list() {
    assert!(matches!(
        parse("(lambda x x 1)"),
        Err(ParseError::UnexpectedToken { ref found, .. }) if found == "x"
    ));
}

#[test]
fn test_lambda_is_reserved() {
    assert!(parse("(+ lambda 1)").is_err());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_operand() {
    let err = parse("(+ 1)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { ref found, ref expected, .. }
            if found == ")" && expected == "expression"
    ));
}

#[test]
fn test_unclosed_paren() {
    assert_eq!(
        parse("(+ 1 2").unwrap_err(),
        ParseError::UnexpectedEof {
            expected: "')'".to_string()
        }
    );
}

#[test]
fn test_extra_closing_paren() {
    assert!(matches!(
        parse("(+ 1 2))"),
        Err(ParseError::MismatchedParen { .. })
    ));
}

#[test]
fn test_trailing_input() {
    assert!(matches!(
        parse("(+ 1 2) 3"),
        Err(ParseError::TrailingInput { ref found, .. }) if found == "3"
    ));
}

#[test]
fn test_bare_operator() {
    assert!(matches!(
        parse("+ 1 2"),
        Err(ParseError::UnexpectedToken { ref found, ref expected, .. })
            if found == "+" && expected == "'('"
    ));
}

#[test]
fn test_unknown_operator() {
    assert!(matches!(
        parse("(foo 1 2)"),
        Err(ParseError::UnexpectedToken { ref found, .. }) if found == "1"
    ));
    assert!(matches!(
        parse("(% 1 2)"),
        Err(ParseError::UnexpectedToken { ref found, .. }) if found == "%"
    ));
}

#[test]
fn test_empty_program() {
    assert_eq!(
        parse("").unwrap_err(),
        ParseError::UnexpectedEof {
            expected: "expression".to_string()
        }
    );
}

#[test]
fn test_error_message_names_token_and_expectation() {
    let err = parse("(* 2 ,)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected token: ,. Expecting: expression (at line 1, column 6)"
    );
}
