use crate::command::Output;
use crate::config::Config;
use crate::registry::Registry;
use crate::transcript::{Entry, Transcript};
use tracing::{debug, info, warn};

/// Outcome of submitting the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The buffer was empty or whitespace only; nothing happened.
    Ignored,
    /// Exactly one entry was appended to the transcript.
    Appended,
    /// The transcript was reset to empty.
    Cleared,
}

/// An embedded terminal that answers typed commands with canned text.
///
/// The interpreter owns the effective command [`Registry`], the [`Transcript`]
/// of past submissions and the line currently being typed. Dispatch is
/// synchronous: a submitted line is fully handled before `submit` returns.
///
/// Example
/// ```
/// use portfolio_terminal::{Config, Interpreter, Submission};
/// let mut term = Interpreter::new(Config::new().with_initial_message("hi"));
/// assert_eq!(term.transcript().len(), 1);
///
/// assert_eq!(term.submit_line("xyz"), Submission::Appended);
/// assert!(term.transcript().last().unwrap().output.contains("not found"));
///
/// assert_eq!(term.submit_line("clear"), Submission::Cleared);
/// assert!(term.transcript().is_empty());
/// ```
pub struct Interpreter {
    registry: Registry,
    transcript: Transcript,
    input: String,
    username: String,
    hostname: String,
}

impl Interpreter {
    /// Merge the registry and seed the transcript with the welcome entry.
    ///
    /// An empty welcome message starts the session with an empty transcript.
    pub fn new(config: Config) -> Self {
        let registry = Registry::build(config.commands);
        info!(
            commands = registry.len(),
            user = %config.username,
            host = %config.hostname,
            "terminal ready"
        );
        let transcript = if config.initial_message.is_empty() {
            Transcript::default()
        } else {
            Transcript::seeded(config.initial_message)
        };
        Self {
            registry,
            transcript,
            input: String::new(),
            username: config.username,
            hostname: config.hostname,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The line currently being composed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, line: impl Into<String>) {
        self.input = line.into();
    }

    pub fn push_str(&mut self, s: &str) {
        self.input.push_str(s);
    }

    /// Drop the last character of the input buffer, if any.
    pub fn backspace(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Prompt decoration, e.g. `visitor@portfolio:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.username, self.hostname)
    }

    /// Render the transcript for display.
    pub fn render(&self) -> String {
        self.transcript.render(&self.prompt())
    }

    /// Dispatch the input buffer and record the result.
    ///
    /// Blank input is ignored and leaves the buffer as it is. Otherwise the
    /// buffer is cleared and either one entry is appended (pairing the line as
    /// typed with its output) or, for a transcript reset, everything is
    /// dropped with nothing appended.
    pub fn submit(&mut self) -> Submission {
        if self.input.trim().is_empty() {
            return Submission::Ignored;
        }
        let line = std::mem::take(&mut self.input);
        match self.dispatch(&line) {
            Output::Text(output) => {
                self.transcript.push(Entry::new(line, output));
                Submission::Appended
            }
            Output::ClearTranscript => {
                self.transcript.clear();
                Submission::Cleared
            }
        }
    }

    /// Replace the input buffer with `line` and submit it.
    pub fn submit_line(&mut self, line: impl Into<String>) -> Submission {
        self.set_input(line);
        self.submit()
    }

    /// Resolve `line` to its output without touching the transcript.
    ///
    /// The first whitespace-separated token names the command and is matched
    /// case-insensitively; the rest are passed to the handler untouched.
    /// Blank lines produce empty text.
    pub fn dispatch(&self, line: &str) -> Output {
        let mut tokens = line.split_whitespace();
        let Some(typed) = tokens.next() else {
            return Output::Text(String::new());
        };
        let args: Vec<&str> = tokens.collect();
        let name = typed.to_lowercase();

        let Some(handler) = self.registry.get(&name) else {
            debug!(command = typed, "command not found");
            return Output::Text(not_found(typed));
        };

        debug!(command = %name, args = args.len(), "dispatching");
        match handler.run(&args) {
            Ok(output) => output,
            Err(e) => {
                warn!(command = %name, error = %e, "command failed");
                Output::Text(format!("Error running '{}': {}", name, e))
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn not_found(typed: &str) -> String {
    format!(
        "Command not found: {}. Type 'help' to see available commands.",
        typed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandHandler, text};
    use crate::config::DEFAULT_WELCOME;
    use std::cell::Cell;
    use std::rc::Rc;

    fn about_text() -> String {
        match crate::builtin::defaults()
            .into_iter()
            .find(|(name, _)| *name == "about")
            .unwrap()
            .1
            .run(&[])
            .unwrap()
        {
            Output::Text(s) => s,
            Output::ClearTranscript => unreachable!(),
        }
    }

    fn last_output(term: &Interpreter) -> &str {
        &term.transcript().last().unwrap().output
    }

    #[test]
    fn test_default_welcome() {
        let term = Interpreter::default();
        assert_eq!(term.transcript().entries(), &[Entry::new("", DEFAULT_WELCOME)]);
        assert_eq!(term.prompt(), "visitor@portfolio:~$");
    }

    #[test]
    fn test_empty_welcome_is_not_seeded() {
        let mut term = Interpreter::new(Config::new().with_initial_message(""));
        assert!(term.transcript().is_empty());

        term.submit_line("skills");
        assert_eq!(term.transcript().len(), 1);
        assert_eq!(term.transcript().entries()[0].command, "skills");
    }

    #[test]
    fn test_session_scenario() {
        let mut term = Interpreter::new(Config::new().with_initial_message("hi"));
        assert_eq!(term.transcript().entries(), &[Entry::new("", "hi")]);

        assert_eq!(term.submit_line("about"), Submission::Appended);
        assert_eq!(term.transcript().len(), 2);
        assert_eq!(term.transcript().last().unwrap(), &Entry::new("about", about_text()));

        assert_eq!(term.submit_line("clear"), Submission::Cleared);
        assert!(term.transcript().is_empty());

        assert_eq!(term.submit_line("xyz"), Submission::Appended);
        assert_eq!(term.transcript().len(), 1);
        assert!(last_output(&term).contains("xyz"));
        assert!(last_output(&term).contains("not found"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut term = Interpreter::default();
        for blank in ["", "   ", "\t \n"] {
            term.set_input(blank);
            assert_eq!(term.submit(), Submission::Ignored);
            assert_eq!(term.transcript().len(), 1);
            assert_eq!(term.input(), blank);
        }
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut term = Interpreter::default();
        term.push_str("whoam");
        term.push_str("ix");
        assert_eq!(term.backspace(), Some('x'));
        assert_eq!(term.input(), "whoami");
        term.submit();
        assert_eq!(term.input(), "");
        assert_eq!(term.transcript().last().unwrap().command, "whoami");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut term = Interpreter::default();
        term.submit_line("help");
        term.submit_line("HELP");
        term.submit_line("Help");
        let entries = term.transcript().entries();
        assert_eq!(entries[1].output, entries[2].output);
        assert_eq!(entries[2].output, entries[3].output);
        // the line is recorded as typed
        assert_eq!(entries[2].command, "HELP");
    }

    #[test]
    fn test_not_found_echoes_typed_case() {
        let term = Interpreter::default();
        assert_eq!(
            term.dispatch("FooBar baz"),
            Output::text("Command not found: FooBar. Type 'help' to see available commands.")
        );
    }

    #[test]
    fn test_command_line_kept_as_typed() {
        let mut term = Interpreter::default();
        term.submit_line("  About   me ");
        assert_eq!(term.transcript().last().unwrap().command, "  About   me ");
        assert_eq!(last_output(&term), about_text());
    }

    #[test]
    fn test_args_are_passed_through() {
        let config = Config::new().with_command("echo", text(|args| args.join("|")));
        let mut term = Interpreter::new(config);
        term.submit_line("echo  \"a b\"   C");
        assert_eq!(last_output(&term), "\"a|b\"|C");
    }

    #[test]
    fn test_override_never_runs_default() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let handler = move |_: &[&str]| -> anyhow::Result<Output> {
            seen.set(seen.get() + 1);
            Ok(Output::text("custom about"))
        };
        let mut term = Interpreter::new(Config::new().with_command("about", Box::new(handler)));

        term.submit_line("about");
        assert_eq!(last_output(&term), "custom about");
        assert_ne!(last_output(&term), about_text());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_help_lists_every_resolvable_name() {
        let config = Config::new()
            .with_command("projects", text(|_| "p".to_string()))
            .with_described_command("contact", "How to reach me", text(|_| "c".to_string()));
        let mut term = Interpreter::new(config);
        term.submit_line("help");
        let listing = last_output(&term).to_string();

        let names: Vec<String> = term.registry().names().map(str::to_string).collect();
        for name in &names {
            assert!(listing.contains(name.as_str()));
            assert_ne!(term.dispatch(name), Output::text(not_found(name)));
        }
        assert!(listing.contains("projects     - No description available"));
        assert!(listing.contains("contact      - How to reach me"));
    }

    #[test]
    fn test_defaults_are_repeatable() {
        let term = Interpreter::default();
        for name in ["about", "education", "location", "whoami", "hobbies", "skills", "help"] {
            assert_eq!(term.dispatch(name), term.dispatch(name));
        }
    }

    #[test]
    fn test_handler_error_becomes_output() {
        let failing = |_: &[&str]| -> anyhow::Result<Output> { Err(anyhow::anyhow!("boom")) };
        let mut term = Interpreter::new(Config::new().with_command("fail", Box::new(failing)));

        assert_eq!(term.submit_line("fail now"), Submission::Appended);
        assert_eq!(last_output(&term), "Error running 'fail': boom");

        // state is intact afterwards
        assert_eq!(term.submit_line("skills"), Submission::Appended);
        assert_eq!(term.transcript().len(), 3);
    }

    #[test]
    fn test_custom_clear_handler() {
        let reset: Box<dyn CommandHandler> =
            Box::new(|_: &[&str]| -> anyhow::Result<Output> { Ok(Output::ClearTranscript) });
        let mut term = Interpreter::new(Config::new().with_command("cls", reset));
        term.submit_line("about");
        assert_eq!(term.submit_line("CLS"), Submission::Cleared);
        assert!(term.transcript().is_empty());
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Interpreter::default();
        let b = Interpreter::default();
        a.submit_line("about");
        a.submit_line("skills");
        assert_eq!(a.transcript().len(), 3);
        assert_eq!(b.transcript().len(), 1);
    }

    #[test]
    fn test_render_uses_identity() {
        let mut term = Interpreter::new(
            Config::new()
                .with_username("guest")
                .with_hostname("box")
                .with_initial_message("hi")
                .with_command("ping", text(|_| "pong".to_string())),
        );
        term.submit_line("ping");
        assert_eq!(term.render(), "hi\nguest@box:~$ ping\npong\n");
    }
}
