//! Property-based tests for path resolution and history recall.
//!
//! Uses proptest to verify the resolution invariants: determinism,
//! idempotence, and the `..` segment arithmetic.

use proptest::prelude::*;
use termfolio::vfs::{ROOT, VirtualFs};
use termfolio::{CommandHistory, SessionState};

// ============================================================================
// Strategies
// ============================================================================

/// A plausible path segment: short, lowercase, no separators.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.-]{0,8}".prop_filter("no dot segments", |s| s != "." && s != "..")
}

/// A relative path of 1..4 segments, possibly sprinkled with `.`.
fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![segment_strategy(), Just(".".to_string())],
        1..4,
    )
    .prop_map(|segments| segments.join("/"))
}

/// An existing directory path in the portfolio tree.
fn portfolio_dir_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "~".to_string(),
        "~/about".to_string(),
        "~/skills".to_string(),
        "~/experience".to_string(),
        "~/projects".to_string(),
        "~/contact".to_string(),
    ])
}

/// Non-blank command lines.
fn command_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,8}( [a-z]{1,8})?"
}

// ============================================================================
// Resolution properties
// ============================================================================

proptest! {
    /// Normalizing an already-normalized path is the identity, regardless of
    /// the cwd it is normalized against.
    #[test]
    fn prop_normalize_is_idempotent(
        target in relative_path_strategy(),
        cwd in portfolio_dir_strategy(),
    ) {
        if let Ok(normalized) = VirtualFs::normalize(&target, &cwd) {
            let again = VirtualFs::normalize(&normalized, "~/about").unwrap();
            prop_assert_eq!(&again, &normalized);
            let third = VirtualFs::normalize(&again, ROOT).unwrap();
            prop_assert_eq!(third, normalized);
        }
    }

    /// Resolution is deterministic: the same inputs give the same output.
    #[test]
    fn prop_resolve_is_deterministic(
        target in relative_path_strategy(),
        cwd in portfolio_dir_strategy(),
    ) {
        let fs = VirtualFs::portfolio();
        prop_assert_eq!(fs.resolve(&target, &cwd), fs.resolve(&target, &cwd));
    }

    /// `..` from any non-root directory strips exactly one segment and lands
    /// on that directory's parent.
    #[test]
    fn prop_dotdot_shortens_by_one_segment(cwd in portfolio_dir_strategy()) {
        let parent = VirtualFs::normalize("..", &cwd);
        if cwd == ROOT {
            prop_assert!(parent.is_err());
        } else {
            let parent = parent.unwrap();
            prop_assert_eq!(cwd.split('/').count() - 1, parent.split('/').count());
            prop_assert!(cwd.starts_with(&parent));
        }
    }

    /// A failed cd never moves the session.
    #[test]
    fn prop_failed_cd_preserves_cwd(target in relative_path_strategy()) {
        let mut session = SessionState::portfolio();
        session.change_directory("about").unwrap();
        let before = session.cwd().to_string();
        if session.change_directory(&target).is_err() {
            prop_assert_eq!(session.cwd(), before);
        }
    }
}

// ============================================================================
// History recall properties
// ============================================================================

proptest! {
    /// Recalling "previous" any number of times clamps at the oldest entry
    /// and never panics or mutates the entries.
    #[test]
    fn prop_recall_previous_clamps(
        commands in prop::collection::vec(command_strategy(), 1..10),
        presses in 1usize..30,
    ) {
        let mut history = CommandHistory::new();
        for cmd in &commands {
            history.record(cmd);
        }
        let snapshot = history.entries().to_vec();

        let mut last = None;
        for _ in 0..presses {
            last = history.recall_previous().map(str::to_string);
        }
        if presses >= commands.len() {
            prop_assert_eq!(last.as_deref(), Some(commands[0].as_str()));
        }
        prop_assert_eq!(history.entries(), snapshot.as_slice());
    }

    /// Walking recall all the way back and then all the way forward returns
    /// `None` exactly at the step past the newest entry.
    #[test]
    fn prop_recall_round_trip(commands in prop::collection::vec(command_strategy(), 1..10)) {
        let mut history = CommandHistory::new();
        for cmd in &commands {
            history.record(cmd);
        }
        for _ in 0..commands.len() {
            prop_assert!(history.recall_previous().is_some());
        }
        for expected in commands.iter().skip(1) {
            prop_assert_eq!(history.recall_next(), Some(expected.as_str()));
        }
        prop_assert_eq!(history.recall_next(), None);
    }
}
