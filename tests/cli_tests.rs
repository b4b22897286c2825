#![cfg(feature = "cli")]

use simplelisp::cli::{
    self, CheckOptions, CheckResult, CliError, DocCategory, execute_check, run_repl,
};
use simplelisp::{Token, Value};

fn check(source: &str) -> CheckOptions {
    CheckOptions {
        source: source.to_string(),
        ..CheckOptions::default()
    }
}

#[test]
fn test_check_evaluates() {
    let result = execute_check(&check("(+ 2 3)")).unwrap();
    assert!(matches!(result, CheckResult::Success(Value::Number(n)) if n == 5.0));
    assert_eq!(result.to_string(), "5");
}

#[test]
fn test_check_syntax_only_skips_evaluation() {
    let options = CheckOptions {
        syntax_only: true,
        ..check("(+ x 1)")
    };
    let result = execute_check(&options).unwrap();
    assert!(matches!(result, CheckResult::SyntaxValid));
    assert_eq!(result.to_string(), "Syntax is valid");
}

#[test]
fn test_check_tokens() {
    let options = CheckOptions {
        tokens: true,
        ..check("7")
    };
    match execute_check(&options).unwrap() {
        CheckResult::Tokens(tokens) => {
            assert_eq!(tokens, vec![Token::SubExpression(vec![Token::Number(7.0)])]);
        }
        other => panic!("Expected tokens, got {:?}", other),
    }
}

#[test]
fn test_check_json() {
    let options = CheckOptions {
        json: true,
        ..check("(< 1 2)")
    };
    let result = execute_check(&options).unwrap();
    assert_eq!(result.to_string(), "true");

    let options = CheckOptions {
        json: true,
        ..check("(/ 1 8)")
    };
    assert_eq!(execute_check(&options).unwrap().to_string(), "0.125");
}

#[test]
fn test_check_errors() {
    let err = execute_check(&check("(+ 1")).unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));

    let err = execute_check(&check("(+ 1 x)")).unwrap_err();
    assert!(matches!(err, CliError::Eval(_)));
    assert_eq!(err.to_string(), "Evaluation error: Unknown variable: x");
}

#[test]
fn test_repl_reports_and_continues() {
    let mut output = Vec::new();
    run_repl("(* 6 7)\nnope\n(/ 9 3)\n".as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with(cli::BANNER));
    assert!(output.contains("> 42\n"));
    assert!(output.contains("> Evaluation error: Unknown variable: nope\n"));
    assert!(output.contains("> 3\n"));
}

#[test]
fn test_repl_whitespace_line_does_not_quit() {
    let mut output = Vec::new();
    run_repl("(+ 1 2)\n   \n(* 9 9)\n".as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("> 3\n"));
    assert!(output.contains("> Parse error: Unexpected end of input"));
    assert!(output.contains("> 81\n"));
}

#[test]
fn test_docs() {
    assert!(cli::get_docs_overview().contains("DOCUMENTATION CATEGORIES"));
    assert_eq!(DocCategory::from_name("LAMBDA"), Some(DocCategory::Lambdas));
    assert!(cli::get_doc_category("conditionals").unwrap().contains("(< 1 2)"));
    assert!(matches!(
        cli::get_doc_category("strings"),
        Err(CliError::UnknownCategory(_))
    ));
}
