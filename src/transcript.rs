/// One submitted line and what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The line as typed. Empty for the welcome entry.
    pub command: String,
    pub output: String,
}

impl Entry {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
        }
    }
}

/// Session history, oldest entry first.
///
/// Entries are only ever appended; the single exception is [`Transcript::clear`].
/// No reordering or deduplication happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// A transcript holding only the welcome entry.
    pub fn seeded(welcome: impl Into<String>) -> Self {
        Self {
            entries: vec![Entry::new("", welcome)],
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the whole transcript top to bottom.
    ///
    /// Entries with a command get a `{prompt} {command}` line before their
    /// output; the welcome entry shows its output only.
    pub fn render(&self, prompt: &str) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            render_entry(&mut out, prompt, entry);
        }
        out
    }
}

fn render_entry(out: &mut String, prompt: &str, entry: &Entry) {
    if !entry.command.is_empty() {
        out.push_str(prompt);
        out.push(' ');
        out.push_str(&entry.command);
        out.push('\n');
    }
    if !entry.output.is_empty() {
        out.push_str(&entry.output);
        out.push('\n');
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
