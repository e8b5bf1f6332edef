use crate::builtin::{self, HELP, Help, NO_DESCRIPTION};
use crate::command::{CommandHandler, StaticText};
use indexmap::IndexMap;
use tracing::warn;

/// A caller-supplied command layered over the defaults.
pub(crate) struct CommandOverride {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) handler: Box<dyn CommandHandler>,
}

struct Registered {
    handler: Box<dyn CommandHandler>,
    description: Option<String>,
}

impl Registered {
    fn describe<'a>(&'a self, name: &str) -> &'a str {
        self.description
            .as_deref()
            .or_else(|| builtin::describe(name))
            .unwrap_or(NO_DESCRIPTION)
    }
}

/// Effective mapping of command name to handler.
///
/// Built once from the defaults and the caller's overrides. Names are stored
/// lower-cased and kept in insertion order: defaults first, then any names
/// only the overrides introduce. An override under an existing name keeps
/// that name's position but replaces its handler entirely. Override names that
/// are empty or contain whitespace could never be typed and are skipped.
pub struct Registry {
    commands: IndexMap<String, Registered>,
}

impl Registry {
    pub(crate) fn build(overrides: Vec<CommandOverride>) -> Self {
        let mut commands = IndexMap::new();
        let help_overridden = overrides
            .iter()
            .any(|o| o.name.to_lowercase() == HELP);

        // Holds help's slot until the final name list is known.
        commands.insert(
            HELP.to_string(),
            Registered {
                handler: Box::new(StaticText(String::new())),
                description: None,
            },
        );
        for (name, handler) in builtin::defaults() {
            commands.insert(
                name.to_string(),
                Registered {
                    handler,
                    description: None,
                },
            );
        }
        for o in overrides {
            if o.name.is_empty() || o.name.chars().any(char::is_whitespace) {
                warn!(name = %o.name, "skipping command: names must be a single token");
                continue;
            }
            commands.insert(
                o.name.to_lowercase(),
                Registered {
                    handler: o.handler,
                    description: o.description,
                },
            );
        }

        if !help_overridden {
            let help = Help::new(commands.iter().map(|(name, r)| (name.as_str(), r.describe(name))));
            if let Some(slot) = commands.get_mut(HELP) {
                slot.handler = Box::new(help);
            }
        }

        Self { commands }
    }

    /// Look up a handler by its already lower-cased name.
    pub fn get(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.commands.get(name).map(|r| r.handler.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Command names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Description shown by `help` for `name`, if it is registered.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.commands.get(name).map(|r| r.describe(name))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
