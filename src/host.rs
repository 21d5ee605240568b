//! Host interface for embedding the interpreter.
//!
//! The command-processing core never reaches into ambient UI state; instead
//! it receives a small host interface and calls it at well-defined points.
//! This keeps the core testable headlessly.

/// Callbacks the interpreter invokes on its embedding view layer.
pub trait Host {
    /// Called after a command submits, so the view can restore input focus.
    fn focus_input(&mut self) {}

    /// Called after output is appended to the scrollback.
    ///
    /// The view decides whether to honor this (it may suppress auto-scroll
    /// while the user is manually scrolled up).
    fn scroll_to_bottom(&mut self) {}

    /// Called when the `exit` verb runs. Switching away from terminal mode
    /// is entirely the host's concern; the interpreter mutates no state.
    fn exit_requested(&mut self) {}
}

/// A host that ignores every callback. Useful for tests and batch drivers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl Host for NullHost {}
