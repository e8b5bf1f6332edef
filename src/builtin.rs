use crate::command::{CommandHandler, Output};
use anyhow::Result;
use std::marker::PhantomData;

/// Fallback shown by `help` for commands nobody described.
pub const NO_DESCRIPTION: &str = "No description available";

/// Built-in commands known to the terminal at compile time.
///
/// Builtins ignore their arguments: each one renders the same text on every call.
pub(crate) trait BuiltinCommand {
    /// Canonical name of the command, e.g. "about" or "clear".
    fn name() -> &'static str;

    /// One-line summary listed by `help`.
    fn description() -> &'static str;

    fn execute() -> Output;
}

/// Adapter registering a [`BuiltinCommand`] as a [`CommandHandler`].
pub(crate) struct Builtin<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for Builtin<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: BuiltinCommand> CommandHandler for Builtin<T> {
    fn run(&self, _args: &[&str]) -> Result<Output> {
        Ok(T::execute())
    }
}

fn entry<T: BuiltinCommand + 'static>() -> (&'static str, Box<dyn CommandHandler>) {
    (T::name(), Box::new(Builtin::<T>::default()))
}

/// The default command set, in the order `help` lists it.
///
/// `help` itself is absent: it depends on the final registry and is rendered
/// by the registry once overrides are merged.
pub(crate) fn defaults() -> Vec<(&'static str, Box<dyn CommandHandler>)> {
    vec![
        entry::<Clear>(),
        entry::<About>(),
        entry::<Education>(),
        entry::<Location>(),
        entry::<Whoami>(),
        entry::<Hobbies>(),
        entry::<Skills>(),
    ]
}

/// Description table for built-in names.
pub(crate) fn describe(name: &str) -> Option<&'static str> {
    let table = [
        (HELP, "Show all available commands"),
        (Clear::name(), Clear::description()),
        (About::name(), About::description()),
        (Education::name(), Education::description()),
        (Location::name(), Location::description()),
        (Whoami::name(), Whoami::description()),
        (Hobbies::name(), Hobbies::description()),
        (Skills::name(), Skills::description()),
    ];
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, description)| *description)
}

pub(crate) const HELP: &str = "help";

/// Lists every command with its description.
pub(crate) struct Help {
    listing: String,
}

impl Help {
    /// Render the listing for `commands`, given as `(name, description)` pairs.
    pub(crate) fn new<'a>(commands: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let lines: Vec<String> = commands
            .into_iter()
            .map(|(name, description)| format!("  {:<12} - {}", name, description))
            .collect();
        let listing = format!(
            "Available commands:\n{}\n\nTry any command to learn more about me!",
            lines.join("\n")
        );
        Self { listing }
    }
}

impl CommandHandler for Help {
    fn run(&self, _args: &[&str]) -> Result<Output> {
        Ok(Output::Text(self.listing.clone()))
    }
}

/// Wipe the transcript.
pub(crate) struct Clear;

impl BuiltinCommand for Clear {
    fn name() -> &'static str {
        "clear"
    }

    fn description() -> &'static str {
        "Clear the terminal screen"
    }

    fn execute() -> Output {
        Output::ClearTranscript
    }
}

pub(crate) struct About;

impl BuiltinCommand for About {
    fn name() -> &'static str {
        "about"
    }

    fn description() -> &'static str {
        "Brief introduction about me"
    }

    fn execute() -> Output {
        Output::text(
            "👋 Hello! I'm a developer who loves to develop and design amazing things.

🎯 I enjoy working on challenging projects and learning new technologies.
Always excited to collaborate and build something great together!

💡 Curious about my background? Try 'education', or 'hobbies'!",
        )
    }
}

pub(crate) struct Education;

impl BuiltinCommand for Education {
    fn name() -> &'static str {
        "education"
    }

    fn description() -> &'static str {
        "My educational background"
    }

    fn execute() -> Output {
        Output::text(
            "🎓 Education:

Bachelor of Science in Information Technology
Nueva Ecija University of Science and Technology | 2023 - 2027
• Currently a 3rd-year student
• Learning full-stack development, diving into Next.js, backend systems, and modern web technologies
• Actively building websites for practice using React to sharpen real-world dev skills

💡 Always growing, committed to mastering both front-end and back-end technologies.",
        )
    }
}

pub(crate) struct Location;

impl BuiltinCommand for Location {
    fn name() -> &'static str {
        "location"
    }

    fn description() -> &'static str {
        "Where I'm based and availability"
    }

    fn execute() -> Output {
        Output::text(
            "🌍 Location & Availability:

📍 Currently based in: Philippines
🕐 Timezone: PHT (UTC+8)
🌐 Work Style: Remote-friendly, open to global collaboration

🏢 Available for:
• Freelance projects
• Part-time work
• Full-time positions",
        )
    }
}

pub(crate) struct Whoami;

impl BuiltinCommand for Whoami {
    fn name() -> &'static str {
        "whoami"
    }

    fn description() -> &'static str {
        "Personal introduction"
    }

    fn execute() -> Output {
        Output::text(
            "👤 About Me:

Name: Reiniel
Role: Web Developer / Designer
Passion: Building clean, functional websites and interfaces
Status: Always learning, always improving

💻 Focused on writing maintainable code
🛠️ Hands-on with both front-end and back-end workflows
🎨 Committed to creating intuitive, user-friendly designs

Type 'hobbies' to see what I do when I'm not coding!",
        )
    }
}

pub(crate) struct Hobbies;

impl BuiltinCommand for Hobbies {
    fn name() -> &'static str {
        "hobbies"
    }

    fn description() -> &'static str {
        "What I do for fun"
    }

    fn execute() -> Output {
        Output::text(
            "🎮 When I'm not coding, I enjoy:

• Gaming, especially competitive or co-op games
• Listening to music, it helps me focus and unwind
• Watching movies and series, from thrillers to anime
• Hanging out and playing with friends, online or in person",
        )
    }
}

pub(crate) struct Skills;

impl BuiltinCommand for Skills {
    fn name() -> &'static str {
        "skills"
    }

    fn description() -> &'static str {
        "Technical skills and expertise"
    }

    fn execute() -> Output {
        Output::text(
            "💻 Technical Skills:

Frontend:
- HTML5, CSS3, Tailwind CSS
- JavaScript (ES6+), React
- Basic TypeScript

Backend:
- Currently learning backend development",
        )
    }
}
