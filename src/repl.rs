use crate::interpreter::{Interpreter, Submission};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use std::io::{self, Write};
use tracing::debug;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// What the host loop does after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

impl Interpreter {
    /// Host the terminal on stdin/stdout until Ctrl-C, Ctrl-D or `exit`.
    ///
    /// `exit` ends the session only while no command of that name is registered.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = io::stdout();
        write!(stdout, "{}", self.render())?;
        stdout.flush()?;

        loop {
            let readline = rl.readline(&format!("{} ", self.prompt()));
            match readline {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    if self.handle_line(line, &mut stdout)? == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    debug!("input closed");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Submit one line read by the host and write what it produced to `out`.
    ///
    /// The typed line itself is already on screen from the editor, so only the
    /// output (or the clear-screen sequence) is written. `out` is flushed
    /// before returning.
    pub(crate) fn handle_line(&mut self, line: String, out: &mut dyn Write) -> io::Result<Flow> {
        if line.trim().eq_ignore_ascii_case("exit") && !self.registry().contains("exit") {
            return Ok(Flow::Exit);
        }
        self.set_input(line);
        match self.submit() {
            Submission::Ignored => {}
            Submission::Cleared => write!(out, "{}", CLEAR_SCREEN)?,
            Submission::Appended => {
                if let Some(entry) = self.transcript().last() {
                    writeln!(out, "{}", entry.output)?;
                }
            }
        }
        out.flush()?;
        Ok(Flow::Continue)
    }
}
