use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use treelox::{Session, init_tracing};

/// treelox is a tree-walking interpreter for the Lox scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints one line per token: kind, lexeme and literal.
    Tokenize {
        /// The script to read.
        file: PathBuf,
    },
    /// Prints the syntax tree in parenthesized prefix notation.
    Parse {
        /// The script to read.
        file: PathBuf,
    },
    /// Evaluates a single expression and prints its value.
    Evaluate {
        /// The script to read.
        file: PathBuf,
    },
    /// Runs a whole program.
    Run {
        /// The script to read.
        file: PathBuf,
    },
}

impl Command {
    fn file(&self) -> &PathBuf {
        match self {
            Self::Tokenize { file }
            | Self::Parse { file }
            | Self::Evaluate { file }
            | Self::Run { file } => file,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let path = args.command.file();
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    let mut session = Session::new();
    match &args.command {
        Command::Tokenize { .. } => {
            let tokens = session.tokenize(&source);
            report(&session);
            for token in tokens {
                println!("{token}");
            }
        },
        Command::Parse { .. } => {
            let tree = session.parse_tree(&source);
            report(&session);
            if let Some(tree) = tree.filter(|tree| !tree.is_empty()) {
                println!("{tree}");
            }
        },
        Command::Evaluate { .. } => {
            let value = session.evaluate(&source);
            report(&session);
            if let Some(value) = value {
                println!("{value}");
            }
        },
        Command::Run { .. } => {
            session.run(&source);
            report(&session);
        },
    }

    ExitCode::from(u8::try_from(session.exit_code()).unwrap_or(1))
}

/// Writes every diagnostic and the runtime error, if any, to standard error.
fn report(session: &Session) {
    for diagnostic in session.diagnostics() {
        eprintln!("{diagnostic}");
    }
    if let Some(error) = session.runtime_error() {
        eprintln!("{error}");
    }
}
