use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring a terminal.
///
/// Dispatch itself never fails: unknown commands and failing handlers both
/// end up as transcript output.
#[derive(Error, Debug)]
pub enum TerminalError {
    /// The profile file could not be read.
    #[error("failed to read profile {path}: {source}")]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile is not valid TOML or has the wrong shape.
    #[error("invalid profile: {0}")]
    ParseProfile(#[from] toml::de::Error),

    /// A profile command was declared with a blank name.
    #[error("command names must not be empty")]
    EmptyCommandName,

    /// A profile command name contains whitespace and could never be typed.
    #[error("command name {0:?} contains whitespace")]
    InvalidCommandName(String),
}
