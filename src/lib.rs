//! # treelox
//!
//! treelox is a tree-walking interpreter for Lox, a small dynamically typed
//! scripting language written in Rust.
//! It scans, parses and evaluates programs with variables, block scoping,
//! control flow, and first-class functions with closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree, along with the
/// parenthesized prefix printer. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to the nodes that can fail at runtime.
/// - Shares function declarations so closures never copy a body.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Each error renders as the exact line reported to the
/// user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and offending lexemes for context.
pub mod error;
/// Implements every phase of execution.
///
/// This module ties together the token model, lexing, parsing, evaluation,
/// scopes and value representations.
pub mod interpreter;
/// Per-run orchestration.
///
/// A [`Session`] runs the phases in order for one source text, records their
/// diagnostics and maps the outcome to a process exit status.
pub mod session;

pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// Nothing is installed unless `RUST_LOG` is set, in which case events
/// matching its filter are written to standard error, leaving standard output
/// to the program. Calling this more than once has no further effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry()
                            .with(fmt::layer().with_writer(std::io::stderr)
                                              .with_target(true)
                                              .with_level(true))
                            .with(EnvFilter::from_default_env())
                            .init();
                    }
                });
}
