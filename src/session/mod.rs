//! Per-visit session state.
//!
//! One interpreter instance exclusively owns one `SessionState`; there is no
//! cross-session sharing and nothing persists across reloads. All mutation
//! happens on the single logical thread driving the interpreter, so no
//! synchronization is needed.

mod history;
mod scrollback;
mod sections;

pub use history::CommandHistory;
pub use scrollback::{PendingToken, Scrollback};
pub use sections::{
    MAXIMIZED_ORIGIN, Section, SectionMatch, SectionRegistry, Transition, WindowState,
};

use crate::error::{Error, Result};
use crate::vfs::{ROOT, VirtualFs};

/// Current working directory, history, scrollback, and window registry for
/// one terminal session.
#[derive(Clone, Debug)]
pub struct SessionState {
    fs: VirtualFs,
    cwd: String,
    history: CommandHistory,
    scrollback: Scrollback,
    sections: SectionRegistry,
}

impl SessionState {
    /// Create a session rooted at `~` over the given filesystem table and
    /// section registry.
    #[must_use]
    pub fn new(fs: VirtualFs, sections: SectionRegistry) -> Self {
        Self {
            fs,
            cwd: ROOT.to_string(),
            history: CommandHistory::new(),
            scrollback: Scrollback::new(),
            sections,
        }
    }

    /// The demo portfolio session.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new(VirtualFs::portfolio(), SectionRegistry::portfolio())
    }

    /// The read-only filesystem table.
    #[must_use]
    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Current working directory (always a valid directory path).
    #[must_use]
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Change directory. On failure the working directory is untouched.
    ///
    /// Error kinds: `NoSuchPath`/`NotADirectory` for a bad target,
    /// `PermissionDenied` only for `..` at the root.
    pub fn change_directory(&mut self, target: &str) -> Result<&str> {
        let path = self.fs.resolve(target, &self.cwd)?;
        if !self.fs.is_directory(&path) {
            return Err(Error::NotADirectory(target.trim().to_string()));
        }
        self.cwd = path;
        Ok(&self.cwd)
    }

    /// Record a submitted command line (blank lines are not appended).
    pub fn record_command(&mut self, raw: &str) {
        self.history.record(raw);
    }

    /// Command history.
    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Command history, for recall navigation.
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// Rendered output log.
    #[must_use]
    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Rendered output log, for appending and pending splices.
    pub fn scrollback_mut(&mut self) -> &mut Scrollback {
        &mut self.scrollback
    }

    /// Section window registry.
    #[must_use]
    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    /// Section window registry, for state transitions.
    pub fn sections_mut(&mut self) -> &mut SectionRegistry {
        &mut self.sections
    }
}
