//! Scrollback buffer with two-phase pending output.
//!
//! Most commands append their output synchronously. Network-backed commands
//! instead append a placeholder ("please wait") line and replace it in place
//! once their collaborator responds. Pending regions are tracked by
//! insertion position, so multiple in-flight commands splice consistently
//! even when responses arrive out of order.

use std::collections::HashMap;

/// Opaque handle for a pending placeholder region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PendingToken(u64);

#[derive(Clone, Debug)]
struct PendingRegion {
    start: usize,
    len: usize,
}

/// The ordered log of rendered terminal output lines.
#[derive(Clone, Debug, Default)]
pub struct Scrollback {
    lines: Vec<String>,
    pending: HashMap<PendingToken, PendingRegion>,
    next_token: u64,
}

impl Scrollback {
    /// Create an empty scrollback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append output lines.
    pub fn append<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Append a single line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Phase one: append placeholder lines and return a token recording
    /// their position.
    pub fn begin_pending<I>(&mut self, placeholder: I) -> PendingToken
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let start = self.lines.len();
        self.append(placeholder);
        let len = self.lines.len() - start;
        let token = PendingToken(self.next_token);
        self.next_token += 1;
        self.pending.insert(token, PendingRegion { start, len });
        token
    }

    /// Phase two: replace the placeholder region with the final output.
    ///
    /// Returns `false` for stale tokens (already completed, or invalidated
    /// by `clear`); the call is then a no-op.
    pub fn complete_pending<I>(&mut self, token: PendingToken, lines: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let Some(region) = self.pending.remove(&token) else {
            return false;
        };
        let replacement: Vec<String> = lines.into_iter().map(Into::into).collect();
        let new_len = replacement.len();
        self.lines
            .splice(region.start..region.start + region.len, replacement);

        // Shift later pending regions by the length delta so their splice
        // positions stay accurate. Regions can share a start only when a
        // placeholder was empty; token order decides which was inserted
        // later there.
        if new_len != region.len {
            for (other_token, other) in &mut self.pending {
                if other.start > region.start
                    || (other.start == region.start && other_token.0 > token.0)
                {
                    other.start = other.start + new_len - region.len;
                }
            }
        }
        true
    }

    /// Convert an unresolved placeholder into a normal error line (e.g. a
    /// host-enforced timeout).
    pub fn fail_pending(&mut self, token: PendingToken, message: &str) -> bool {
        self.complete_pending(token, [message.to_string()])
    }

    /// Number of placeholders still awaiting completion.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// All rendered lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of rendered lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the scrollback is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty the scrollback and invalidate outstanding pending tokens.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_push() {
        let mut sb = Scrollback::new();
        sb.append(["a", "b"]);
        sb.push("c");
        assert_eq!(sb.lines(), ["a", "b", "c"]);
    }

    #[test]
    fn test_pending_replaced_in_place() {
        let mut sb = Scrollback::new();
        sb.push("before");
        let token = sb.begin_pending(["pinging host..."]);
        sb.push("after");
        assert!(sb.complete_pending(token, ["reply 1", "reply 2"]));
        assert_eq!(sb.lines(), ["before", "reply 1", "reply 2", "after"]);
    }

    #[test]
    fn test_out_of_order_completion_keeps_positions() {
        let mut sb = Scrollback::new();
        let first = sb.begin_pending(["waiting on A"]);
        let second = sb.begin_pending(["waiting on B"]);

        // B resolves first, with more lines than its placeholder.
        assert!(sb.complete_pending(second, ["B line 1", "B line 2"]));
        // A resolves second; it must still land where its placeholder was.
        assert!(sb.complete_pending(first, ["A line 1", "A line 2", "A line 3"]));

        assert_eq!(
            sb.lines(),
            ["A line 1", "A line 2", "A line 3", "B line 1", "B line 2"]
        );
    }

    #[test]
    fn test_shrinking_completion_shifts_later_regions() {
        let mut sb = Scrollback::new();
        let first = sb.begin_pending(["a1", "a2", "a3"]);
        let second = sb.begin_pending(["b1"]);
        assert!(sb.complete_pending(first, ["a"]));
        assert!(sb.complete_pending(second, ["b"]));
        assert_eq!(sb.lines(), ["a", "b"]);
    }

    #[test]
    fn test_empty_placeholders_at_same_start_keep_creation_order() {
        let mut sb = Scrollback::new();
        sb.push("before");
        let first = sb.begin_pending(Vec::<String>::new());
        let second = sb.begin_pending(Vec::<String>::new());

        assert!(sb.complete_pending(first, ["a1", "a2"]));
        assert!(sb.complete_pending(second, ["b"]));
        assert_eq!(sb.lines(), ["before", "a1", "a2", "b"]);

        // Same shape, resolved in the opposite order.
        let mut sb = Scrollback::new();
        sb.push("before");
        let first = sb.begin_pending(Vec::<String>::new());
        let second = sb.begin_pending(Vec::<String>::new());

        assert!(sb.complete_pending(second, ["b"]));
        assert!(sb.complete_pending(first, ["a1", "a2"]));
        assert_eq!(sb.lines(), ["before", "a1", "a2", "b"]);
    }

    #[test]
    fn test_stale_token_is_noop() {
        let mut sb = Scrollback::new();
        let token = sb.begin_pending(["waiting"]);
        assert!(sb.complete_pending(token, ["done"]));
        assert!(!sb.complete_pending(token, ["again"]));
        assert_eq!(sb.lines(), ["done"]);
    }

    #[test]
    fn test_clear_invalidates_pending() {
        let mut sb = Scrollback::new();
        let token = sb.begin_pending(["waiting"]);
        sb.clear();
        assert!(sb.is_empty());
        assert_eq!(sb.pending_count(), 0);
        assert!(!sb.complete_pending(token, ["late reply"]));
        assert!(sb.is_empty());
    }

    #[test]
    fn test_fail_pending_renders_error_line() {
        let mut sb = Scrollback::new();
        let token = sb.begin_pending(["pinging..."]);
        assert!(sb.fail_pending(token, "ping: request timed out"));
        assert_eq!(sb.lines(), ["ping: request timed out"]);
    }
}
