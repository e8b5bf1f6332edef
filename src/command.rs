use anyhow::Result;

/// What a command hands back to the interpreter after running.
///
/// Most commands produce text. `clear` is the exception: it asks the
/// interpreter to wipe the transcript instead of appending anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Text to append to the transcript next to the submitted line.
    Text(String),
    /// Reset the transcript to empty. Nothing is appended for this turn.
    ClearTranscript,
}

impl Output {
    /// Shorthand for `Output::Text`.
    pub fn text(s: impl Into<String>) -> Self {
        Output::Text(s.into())
    }
}

/// Object-safe trait for anything that can be registered under a command name.
///
/// Handlers receive the argument tokens that followed the command name,
/// unmodified. A blanket implementation exists for closures of the shape
/// `Fn(&[&str]) -> anyhow::Result<Output>`.
pub trait CommandHandler {
    /// Run the command with the given argument tokens.
    fn run(&self, args: &[&str]) -> Result<Output>;
}

impl<F> CommandHandler for F
where
    F: Fn(&[&str]) -> Result<Output>,
{
    fn run(&self, args: &[&str]) -> Result<Output> {
        self(args)
    }
}

/// Handler returning the same text for any arguments.
///
/// Used for author-defined commands loaded from a profile.
#[derive(Debug, Clone)]
pub struct StaticText(pub String);

impl CommandHandler for StaticText {
    fn run(&self, _args: &[&str]) -> Result<Output> {
        Ok(Output::Text(self.0.clone()))
    }
}

struct TextFn<F>(F);

impl<F> CommandHandler for TextFn<F>
where
    F: Fn(&[&str]) -> String,
{
    fn run(&self, args: &[&str]) -> Result<Output> {
        Ok(Output::Text((self.0)(args)))
    }
}

/// Wrap a plain `args -> String` function as a handler.
///
/// ```
/// use portfolio_terminal::command::{text, CommandHandler, Output};
/// let shout = text(|args: &[&str]| args.join(" ").to_uppercase());
/// assert_eq!(shout.run(&["hi", "there"]).unwrap(), Output::text("HI THERE"));
/// ```
pub fn text<F>(f: F) -> Box<dyn CommandHandler>
where
    F: Fn(&[&str]) -> String + 'static,
{
    Box::new(TextFn(f))
}
