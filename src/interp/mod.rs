//! Command interpreter: tokenize, dispatch, render.
//!
//! `execute` is total: every submitted line produces an echoed prompt line
//! and either command output or a specific error line in the scrollback.
//! Handlers never panic on user input and never return errors upward.

mod builtins;
mod complete;
mod files;
mod parse;
mod suggest;
mod windows;

pub use complete::Completion;
pub use parse::{LsFlags, ParsedCommand};

use std::collections::HashMap;

use crate::collab::{
    NetworkProbe, ProbeDelivery, ProbeKind, ProbeReport, ProjectStore, SimulatedProbe,
    StaticProjectStore,
};
use crate::event::{LogLevel, emit_event, emit_log};
use crate::host::{Host, NullHost};
use crate::session::{PendingToken, SessionState};

/// The fixed command table: verb and help description, in help order.
pub(crate) const VERB_TABLE: &[(&str, &str)] = &[
    ("help", "show this table"),
    ("ls", "list directory contents (-a all, -l long)"),
    ("cd", "change directory"),
    ("pwd", "print working directory"),
    ("cat", "print a file"),
    ("open", "open a section window"),
    ("close", "close a section window"),
    ("minimize", "toggle a window into the dock"),
    ("maximize", "toggle a window full-size"),
    ("clear", "clear the terminal"),
    ("history", "list submitted commands"),
    ("whoami", "print the current user"),
    ("date", "print the current date and time"),
    ("uname", "print system information"),
    ("ping", "send simulated echo requests"),
    ("traceroute", "trace a simulated route"),
    ("netstat", "show simulated socket tables"),
    ("nslookup", "resolve a name (simulated)"),
    ("curl", "fetch response headers (simulated)"),
    ("ifconfig", "show simulated interfaces"),
    ("exit", "leave the terminal"),
];

/// What one `execute` call did, beyond its scrollback output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Execution {
    /// The `exit` verb ran; the host decides what leaving means.
    pub exit_requested: bool,
    /// A network verb deferred to its collaborator; resolve via
    /// [`Interpreter::complete_probe`] or [`Interpreter::fail_probe`].
    pub pending: Option<PendingToken>,
}

/// The command-processing core: owns one session, one host, and the
/// collaborator endpoints.
pub struct Interpreter<H: Host> {
    session: SessionState,
    host: H,
    probe: Box<dyn NetworkProbe>,
    store: Box<dyn ProjectStore>,
    in_flight: HashMap<PendingToken, (ProbeKind, String)>,
}

impl Interpreter<NullHost> {
    /// The demo portfolio interpreter: canned filesystem, sections, project
    /// store, and the offline simulated probe.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new(
            SessionState::portfolio(),
            NullHost,
            Box::new(SimulatedProbe::new()),
            Box::new(StaticProjectStore::portfolio()),
        )
    }
}

impl<H: Host> Interpreter<H> {
    /// Assemble an interpreter from explicit parts.
    pub fn new(
        session: SessionState,
        host: H,
        probe: Box<dyn NetworkProbe>,
        store: Box<dyn ProjectStore>,
    ) -> Self {
        Self {
            session,
            host,
            probe,
            store,
            in_flight: HashMap::new(),
        }
    }

    /// The demo portfolio content with a custom host.
    pub fn with_host(host: H) -> Self {
        Self::new(
            SessionState::portfolio(),
            host,
            Box::new(SimulatedProbe::new()),
            Box::new(StaticProjectStore::portfolio()),
        )
    }

    /// Session state (read access for rendering hosts).
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Session state, for history recall and host-driven window moves.
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Seed the scrollback with the welcome banner.
    pub fn welcome(&mut self) {
        self.session.scrollback_mut().append([
            "Welcome to the portfolio terminal.".to_string(),
            "Type 'help' for available commands, or 'open about' to start.".to_string(),
            String::new(),
        ]);
    }

    /// Tab-complete a partial input line.
    #[must_use]
    pub fn complete_input(&self, input: &str) -> Completion {
        complete::complete(input, &self.session)
    }

    /// Run one submitted line: echo it, record it, dispatch it.
    pub fn execute(&mut self, raw: &str) -> Execution {
        let trimmed = raw.trim().to_string();
        let echo = format!("{}$ {trimmed}", self.session.cwd());
        self.session.scrollback_mut().push(echo);
        self.session.record_command(&trimmed);

        let execution = match ParsedCommand::parse(&trimmed) {
            Some(cmd) => {
                emit_log(LogLevel::Debug, &format!("dispatch: {}", cmd.verb));
                self.dispatch(&cmd)
            }
            None => Execution::default(),
        };

        self.host.scroll_to_bottom();
        self.host.focus_input();
        execution
    }

    fn dispatch(&mut self, cmd: &ParsedCommand) -> Execution {
        let arg = cmd.arg.as_deref();
        let mut execution = Execution::default();

        let lines = match cmd.verb.as_str() {
            "help" => builtins::help(),
            "ls" if arg == Some("sections") => windows::list_sections(&self.session),
            "ls" => files::ls(&self.session, self.store.as_ref(), cmd.flags, arg),
            "cd" => files::cd(&mut self.session, arg),
            "pwd" => vec![self.session.cwd().to_string()],
            "cat" => files::cat(&self.session, self.store.as_ref(), arg),
            "open" => windows::open(&mut self.session, arg),
            "close" => windows::close(&mut self.session, arg),
            "minimize" => windows::minimize(&mut self.session, arg),
            "maximize" => windows::maximize(&mut self.session, arg),
            "clear" => {
                // Clears the echo line too; history keeps the entry.
                self.session.scrollback_mut().clear();
                return execution;
            }
            "history" => builtins::history(&self.session),
            "whoami" => builtins::whoami(),
            "date" => builtins::date(),
            "uname" => builtins::uname(),
            "exit" => {
                self.host.exit_requested();
                execution.exit_requested = true;
                vec!["logout".to_string()]
            }
            verb => {
                if let Some(kind) = ProbeKind::from_verb(verb) {
                    return self.dispatch_probe(kind, arg);
                }
                self.unknown(verb)
            }
        };

        self.session.scrollback_mut().append(lines);
        execution
    }

    fn unknown(&self, verb: &str) -> Vec<String> {
        emit_log(LogLevel::Warn, &format!("unknown verb: {verb}"));
        let mut lines = vec![format!("{verb}: command not found")];
        if let Some(suggestion) =
            suggest::closest_verb(verb, VERB_TABLE.iter().map(|(v, _)| *v))
        {
            lines.push(format!("Did you mean '{suggestion}'?"));
        }
        lines.push("Type 'help' for available commands.".to_string());
        lines
    }

    /// Network verbs: append one placeholder, issue at most one collaborator
    /// request, and resolve through the two-phase scrollback protocol.
    fn dispatch_probe(&mut self, kind: ProbeKind, arg: Option<&str>) -> Execution {
        let verb = kind.verb();
        let Some(target) = arg.or((!kind.needs_target()).then_some("localhost")) else {
            self.session
                .scrollback_mut()
                .push(format!("usage: {verb} <host>"));
            return Execution::default();
        };
        let target = target.to_string();

        let placeholder = format!("{verb}: {target}: please wait ...");
        let token = self.session.scrollback_mut().begin_pending([placeholder]);
        emit_event("probe_started", &format!("{verb} {target}"));

        match self.probe.request(kind, &target) {
            ProbeDelivery::Ready(report) => {
                self.resolve_probe(token, kind, &target, &report);
                Execution::default()
            }
            ProbeDelivery::Deferred => {
                self.in_flight.insert(token, (kind, target));
                Execution {
                    exit_requested: false,
                    pending: Some(token),
                }
            }
        }
    }

    /// Resolve a deferred probe with its collaborator report.
    ///
    /// Returns `false` for stale tokens (already resolved, or invalidated by
    /// `clear`); the scrollback is then untouched.
    pub fn complete_probe(&mut self, token: PendingToken, report: &ProbeReport) -> bool {
        let Some((kind, target)) = self.in_flight.remove(&token) else {
            return false;
        };
        self.resolve_probe(token, kind, &target, report)
    }

    /// Convert a deferred probe into a failure line (host timeout).
    pub fn fail_probe(&mut self, token: PendingToken, reason: &str) -> bool {
        let Some((kind, target)) = self.in_flight.remove(&token) else {
            return false;
        };
        let verb = kind.verb();
        emit_event("probe_failed", &format!("{verb} {target}"));
        self.session
            .scrollback_mut()
            .fail_pending(token, &format!("{verb}: {target}: {reason}"))
    }

    fn resolve_probe(
        &mut self,
        token: PendingToken,
        kind: ProbeKind,
        target: &str,
        report: &ProbeReport,
    ) -> bool {
        let verb = kind.verb();
        let banner = if report.success { "completed" } else { "failed" };
        emit_event(
            if report.success { "probe_completed" } else { "probe_failed" },
            &format!("{verb} {target}"),
        );

        let mut lines = vec![format!("--- {verb} {target} ---")];
        lines.extend(report.output.iter().cloned());
        lines.push(String::new());
        lines.push(format!("{verb}: {target}: {banner}"));
        let spliced = self.session.scrollback_mut().complete_pending(token, lines);
        if spliced {
            self.host.scroll_to_bottom();
        }
        spliced
    }
}
