use crate::command::{CommandHandler, StaticText};
use crate::error::TerminalError;
use crate::registry::CommandOverride;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_USERNAME: &str = "visitor";
pub const DEFAULT_HOSTNAME: &str = "portfolio";
pub const DEFAULT_WELCOME: &str = "Welcome to my portfolio! Type 'help' to see available commands.";

/// Options an [`Interpreter`](crate::Interpreter) is constructed from.
///
/// `username` and `hostname` only decorate the prompt. `commands` are layered
/// over the built-in set; see [`Registry`](crate::registry::Registry) for how
/// collisions resolve.
pub struct Config {
    pub username: String,
    pub hostname: String,
    pub initial_message: String,
    pub(crate) commands: Vec<CommandOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            initial_message: DEFAULT_WELCOME.to_string(),
            commands: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_initial_message(mut self, message: impl Into<String>) -> Self {
        self.initial_message = message.into();
        self
    }

    /// Register `handler` under `name`, replacing any built-in of that name.
    ///
    /// `name` must be a single token; empty names or names with whitespace
    /// are dropped when the registry is built.
    pub fn with_command(self, name: impl Into<String>, handler: Box<dyn CommandHandler>) -> Self {
        self.push_command(name.into(), None, handler)
    }

    /// Like [`Config::with_command`], with a description for `help`.
    pub fn with_described_command(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Box<dyn CommandHandler>,
    ) -> Self {
        self.push_command(name.into(), Some(description.into()), handler)
    }

    fn push_command(
        mut self,
        name: String,
        description: Option<String>,
        handler: Box<dyn CommandHandler>,
    ) -> Self {
        self.commands.push(CommandOverride {
            name,
            description,
            handler,
        });
        self
    }
}

/// Author-supplied terminal content, read from TOML.
///
/// ```toml
/// username = "guest"
/// initial_message = "hello"
///
/// [commands.projects]
/// description = "Things I built"
/// output = """
/// - a terminal
/// """
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub username: Option<String>,
    pub hostname: Option<String>,
    pub initial_message: Option<String>,
    #[serde(default)]
    pub commands: IndexMap<String, ProfileCommand>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileCommand {
    pub description: Option<String>,
    pub output: String,
}

impl Profile {
    pub fn from_toml_str(s: &str) -> Result<Self, TerminalError> {
        let profile: Profile = toml::from_str(s)?;
        for name in profile.commands.keys() {
            if name.trim().is_empty() {
                return Err(TerminalError::EmptyCommandName);
            }
            if name.chars().any(char::is_whitespace) {
                return Err(TerminalError::InvalidCommandName(name.clone()));
            }
        }
        Ok(profile)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerminalError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TerminalError::ReadProfile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Turn the profile into a [`Config`]; unset fields keep their defaults.
    pub fn into_config(self) -> Config {
        let mut config = Config::default();
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(hostname) = self.hostname {
            config.hostname = hostname;
        }
        if let Some(message) = self.initial_message {
            config.initial_message = message;
        }
        for (name, command) in self.commands {
            let output = command.output.trim_end().to_string();
            config = config.push_command(name, command.description, Box::new(StaticText(output)));
        }
        config
    }
}
