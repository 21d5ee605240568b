//! Static and derived single-line builtins, plus `help` and `history`.

use chrono::Local;
use unicode_width::UnicodeWidthStr;

use crate::session::SessionState;

use super::VERB_TABLE;

/// Demo identity facts.
pub const USER: &str = "arivers";
const UNAME: &str = "Linux portfolio 6.1.0-demo x86_64 GNU/Linux";

/// Render the verb table with aligned columns.
#[must_use]
pub fn help() -> Vec<String> {
    let column = VERB_TABLE
        .iter()
        .map(|(verb, _)| verb.width())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Available commands:".to_string(), String::new()];
    for (verb, description) in VERB_TABLE {
        let pad = " ".repeat(column - verb.width());
        lines.push(format!("  {verb}{pad}  {description}"));
    }
    lines.extend([
        String::new(),
        "Examples:".to_string(),
        "  open about        open the about section as a window".to_string(),
        "  cat resume.txt    print a file".to_string(),
        "  cd projects       explore the project tree".to_string(),
    ]);
    lines
}

/// `history`: prior commands with 1-based indices.
#[must_use]
pub fn history(session: &SessionState) -> Vec<String> {
    if session.history().is_empty() {
        return vec!["history: no commands recorded".to_string()];
    }
    session
        .history()
        .numbered()
        .map(|(n, cmd)| format!("{n:>3}  {cmd}"))
        .collect()
}

/// `whoami`: the demo user.
#[must_use]
pub fn whoami() -> Vec<String> {
    vec![USER.to_string()]
}

/// `date`: current local time, `date(1)`-style.
#[must_use]
pub fn date() -> Vec<String> {
    vec![Local::now().format("%a %b %e %H:%M:%S %Y").to_string()]
}

/// `uname`: fixed system banner.
#[must_use]
pub fn uname() -> Vec<String> {
    vec![UNAME.to_string()]
}
