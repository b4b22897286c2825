use clap::{Parser as ClapParser, Subcommand};
use simplelisp::cli::{self, CheckOptions, CliError};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "simplelisp")]
#[command(about = "SimpleLisp - a tiny interpreter for arithmetic, conditionals and lambdas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a program file
    Run {
        /// Program file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate an inline expression
    Eval {
        /// The SimpleLisp expression to evaluate
        expression: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,

        /// Print the parsed token tree instead of evaluating
        #[arg(long)]
        tokens: bool,
    },

    /// Start an interactive session, one expression per line
    Repl,

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'simplelisp docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { file, json } => run_file(file, json),
        Commands::Eval {
            expression,
            json,
            syntax_only,
            tokens,
        } => run_check(CheckOptions {
            source: expression,
            syntax_only,
            tokens,
            json,
        }),
        Commands::Repl => {
            let stdin = io::stdin();
            cli::run_repl(stdin.lock(), &mut io::stdout()).map_err(CliError::Io)
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_file(file: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let source = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    run_check(CheckOptions {
        source,
        json,
        ..CheckOptions::default()
    })
}

fn run_check(options: CheckOptions) -> Result<(), CliError> {
    println!("{}", cli::execute_check(&options)?);
    Ok(())
}
