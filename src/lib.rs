//! An embeddable terminal that answers typed commands with author-defined text.
//!
//! The crate models the small "shell" a portfolio page offers its visitors:
//! a registry of named commands (a built-in set merged with caller overrides),
//! a dispatch step resolving each submitted line to a handler, and the session
//! transcript a host re-renders after every submission. There is no real shell
//! behind it: no pipes, no variables, no processes.
//!
//! The main entry point is [`Interpreter`], constructed from a [`Config`].
//! The public modules [`command`] and [`registry`] expose the handler trait and
//! the effective command table; [`config`] also reads TOML [`Profile`]s so
//! content can live outside the code.

mod builtin;
pub mod command;
pub mod config;
mod error;
mod interpreter;
pub mod registry;
mod repl;
pub mod transcript;

pub use command::{CommandHandler, Output};
pub use config::{Config, Profile};
pub use error::TerminalError;
pub use interpreter::{Interpreter, Submission};
pub use transcript::{Entry, Transcript};
