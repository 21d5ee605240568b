//! `termfolio` - Simulated portfolio shell
//!
//! A headless, embeddable simulation of a Unix-like shell over a read-only
//! in-memory virtual filesystem, with a minimal windowing ("section")
//! registry and a fixed command table. The crate is the command-processing
//! core only; any UI (web view, TUI, demo binary) is a thin host on top.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow SectionRegistry etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented on the enum
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod collab;
pub mod error;
pub mod event;
pub mod host;
pub mod interp;
pub mod session;
pub mod vfs;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use host::{Host, NullHost};
pub use interp::{Completion, Execution, Interpreter, LsFlags, ParsedCommand};
pub use session::{
    CommandHistory, PendingToken, Scrollback, SectionMatch, SectionRegistry, SessionState,
    Transition, WindowState,
};
pub use vfs::{DirEntry, VirtualFs};

// Re-export collaborator interfaces
pub use collab::{
    NetworkProbe, ProbeDelivery, ProbeKind, ProbeReport, ProjectEntry, ProjectStore,
    SimulatedProbe, StaticProjectStore,
};
