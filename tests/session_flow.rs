//! End-to-end session scenarios through the public interpreter API.
//!
//! Each test drives a fresh portfolio session the way a host would: submit
//! lines, then assert on scrollback content and session state.

use termfolio::{Execution, Interpreter, NullHost, WindowState};

fn lines(interp: &Interpreter<NullHost>) -> Vec<String> {
    interp.session().scrollback().lines().to_vec()
}

#[test]
fn test_fresh_session_navigation_scenario() {
    let mut interp = Interpreter::portfolio();

    interp.execute("pwd");
    assert_eq!(lines(&interp), ["~$ pwd", "~"]);

    interp.execute("cd projects");
    assert_eq!(interp.session().cwd(), "~/projects");

    interp.execute("ls");
    let listing = lines(&interp);
    let tail = &listing[listing.len() - 4..];
    assert_eq!(
        tail,
        ["  config-pusher/", "  latency-atlas/", "  portfolio/", "  topology-mapper/"]
    );

    interp.execute("cd ..");
    assert_eq!(interp.session().cwd(), "~");

    // `..` at the root refuses and leaves cwd unchanged.
    interp.execute("cd ..");
    assert_eq!(interp.session().cwd(), "~");
    assert_eq!(
        lines(&interp).last().map(String::as_str),
        Some("cd: ..: Permission denied")
    );
}

#[test]
fn test_cat_resume_yields_exact_static_lines() {
    let mut interp = Interpreter::portfolio();
    interp.execute("cat resume.txt");
    let lines = lines(&interp);
    assert_eq!(lines[0], "~$ cat resume.txt");
    assert_eq!(lines[1], "ALEX RIVERS");
    assert_eq!(lines[2], "Network Software Engineer");
}

#[test]
fn test_cat_missing_appends_echo_plus_one_error_line() {
    let mut interp = Interpreter::portfolio();
    let before = interp.session().scrollback().len();
    interp.execute("cat does-not-exist.txt");
    let lines = lines(&interp);
    assert_eq!(lines.len(), before + 2);
    assert_eq!(
        lines.last().map(String::as_str),
        Some("cat: does-not-exist.txt: No such file or directory")
    );
}

#[test]
fn test_history_recall_clamps_and_clears() {
    let mut interp = Interpreter::portfolio();
    interp.execute("pwd");
    interp.execute("ls");

    let history = interp.session_mut().history_mut();
    assert_eq!(history.recall_previous(), Some("ls"));
    assert_eq!(history.recall_previous(), Some("pwd"));
    // Clamped at the oldest entry.
    assert_eq!(history.recall_previous(), Some("pwd"));

    assert_eq!(history.recall_next(), Some("ls"));
    // Past the newest: the host clears the input line.
    assert_eq!(history.recall_next(), None);
}

#[test]
fn test_clear_empties_scrollback_not_history() {
    let mut interp = Interpreter::portfolio();
    interp.execute("whoami");
    interp.execute("clear");
    assert!(interp.session().scrollback().is_empty());

    interp.execute("history");
    let lines = lines(&interp);
    assert!(lines.iter().any(|l| l.ends_with("  whoami")));
    assert!(lines.iter().any(|l| l.ends_with("  clear")));
}

#[test]
fn test_focus_leaves_refocused_window_strictly_on_top() {
    let mut interp = Interpreter::portfolio();
    interp.execute("open about");
    interp.execute("open skills");

    let sections = interp.session_mut().sections_mut();
    sections.focus("skills").unwrap();
    sections.focus("about").unwrap();

    let sections = interp.session().sections();
    let about = sections.get("about").unwrap().z_index();
    let skills = sections.get("skills").unwrap().z_index();
    assert!(about > skills);
}

#[test]
fn test_unknown_verb_mutates_only_history() {
    let mut interp = Interpreter::portfolio();
    let cwd_before = interp.session().cwd().to_string();

    let execution = interp.execute("frobnicate all the things");
    assert_eq!(execution, Execution::default());
    assert_eq!(interp.session().cwd(), cwd_before);
    assert!(
        interp
            .session()
            .sections()
            .sections()
            .iter()
            .all(|s| s.state() == WindowState::Closed)
    );
    assert_eq!(
        interp.session().history().numbered().count(),
        1,
        "exactly the one submitted line is recorded"
    );
    assert!(
        lines(&interp)
            .iter()
            .any(|l| l == "frobnicate: command not found")
    );
}

#[test]
fn test_window_lifecycle_through_commands() {
    let mut interp = Interpreter::portfolio();
    interp.execute("open bio");
    assert_eq!(
        interp.session().sections().get("about").unwrap().state(),
        WindowState::Normal
    );

    interp.execute("maximize about");
    assert_eq!(
        interp.session().sections().get("about").unwrap().state(),
        WindowState::Maximized
    );

    interp.execute("maximize about");
    assert_eq!(
        interp.session().sections().get("about").unwrap().state(),
        WindowState::Normal
    );

    interp.execute("close about");
    assert_eq!(
        interp.session().sections().get("about").unwrap().state(),
        WindowState::Closed
    );
}

#[test]
fn test_live_mount_exploration() {
    let mut interp = Interpreter::portfolio();
    interp.execute("cd projects");
    interp.execute("cd config-pusher");
    // Project contents are live-mounted, not static directories: cd stops at
    // the mount, but ls and cat see through it.
    assert_eq!(interp.session().cwd(), "~/projects");
    assert_eq!(
        lines(&interp).last().map(String::as_str),
        Some("cd: config-pusher: No such directory")
    );

    interp.execute("cat config-pusher/README.md");
    assert!(lines(&interp).iter().any(|l| l == "CONFIG PUSHER"));
}

#[test]
fn test_exit_requests_host_exit() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingHost(Arc<AtomicUsize>);

    impl termfolio::Host for RecordingHost {
        fn exit_requested(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let exits = Arc::new(AtomicUsize::new(0));
    let mut interp = Interpreter::with_host(RecordingHost(Arc::clone(&exits)));
    let execution = interp.execute("exit");
    assert!(execution.exit_requested);
    assert_eq!(exits.load(Ordering::SeqCst), 1);
}
