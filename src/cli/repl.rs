//! Line-by-line interactive evaluator

use std::io::{self, BufRead, Write};

pub const BANNER: &str = "Real time SimpleLisp evaluator.\nType in a line of SimpleLisp code to evaluate it, or an empty line to quit.";

/// Evaluates one program per input line until an empty line or EOF.
///
/// Errors are reported on `output` and never end the session.
pub fn run_repl<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", BANNER)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        // Whitespace-only lines are still evaluated
        if line.is_empty() {
            break;
        }

        match crate::run(&line) {
            Ok(value) => writeln!(output, "{}", value)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    writeln!(output)?;
    Ok(())
}

#[test]
fn test_repl_session() {
    let input = "(+ 1 2)\n(+ 1)\n(< 1 2 10 20)\n\n(* 9 9)\n";
    let mut output = Vec::new();
    run_repl(input.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(output.starts_with(BANNER));
    assert!(lines.contains(&"> 3"));
    assert!(lines.iter().any(|l| l.starts_with("> Parse error: ")));
    assert!(lines.contains(&"> 10"));
    // Session stops at the empty line
    assert!(!output.contains("81"));
}
