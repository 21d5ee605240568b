//! Command history with bounded recall.

/// Append-only command history plus a recall cursor.
///
/// Recall moves a bounded index from the newest entry backwards; it never
/// mutates the entries themselves, only what the host shows in the input
/// line. Submitting a command resets the cursor to "newest".
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    /// Offset from the newest entry; `None` means not recalling.
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted raw command. Blank input is not appended, but any
    /// submission resets the recall cursor.
    pub fn record(&mut self, raw: &str) {
        if !raw.trim().is_empty() {
            self.entries.push(raw.to_string());
        }
        self.cursor = None;
    }

    /// Move the recall cursor one step older and return that entry.
    ///
    /// Clamps at the oldest entry: pressing "previous" more times than the
    /// history length keeps returning the oldest command.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(offset) => offset.saturating_add(1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        self.entries.get(self.entries.len() - 1 - next).map(String::as_str)
    }

    /// Move the recall cursor one step newer and return that entry.
    ///
    /// Stepping past the newest entry ends recall and returns `None`; the
    /// host clears the input line in response.
    pub fn recall_next(&mut self) -> Option<&str> {
        match self.cursor {
            None | Some(0) => {
                self.cursor = None;
                None
            }
            Some(offset) => {
                self.cursor = Some(offset - 1);
                self.entries
                    .get(self.entries.len() - offset)
                    .map(String::as_str)
            }
        }
    }

    /// All entries in submission order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries paired with 1-based indices, for the `history` verb.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| (i + 1, cmd.as_str()))
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
