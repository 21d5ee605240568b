//! Window verbs: `open`, `close`, `minimize`, `maximize`.

use crate::event::emit_event;
use crate::session::{SectionMatch, SessionState, Transition, WindowState};

/// `open <name>`: open (or restore) a section window and bring it forward.
pub fn open(session: &mut SessionState, arg: Option<&str>) -> Vec<String> {
    let Some(query) = arg else {
        return usage("open", session);
    };
    match session.sections().find(query) {
        SectionMatch::Found(id) => {
            let display = session
                .sections()
                .get(id)
                .map_or_else(|| id.to_string(), |s| s.display_name().to_string());
            if session.sections_mut().open(id).is_err() {
                return not_found(query, session);
            }
            emit_event("section_opened", id);
            vec![format!("Opening {display} ...")]
        }
        SectionMatch::NotFound { .. } => not_found(query, session),
    }
}

/// `close <name>`: close an open section window.
pub fn close(session: &mut SessionState, arg: Option<&str>) -> Vec<String> {
    let Some(query) = arg else {
        return usage("close", session);
    };
    match session.sections().find(query) {
        SectionMatch::Found(id) => {
            let section = session.sections().get(id);
            let Some(section) = section else {
                return not_found(query, session);
            };
            if !section.state().is_open() {
                return vec![format!("close: {id}: window is not open")];
            }
            let display = section.display_name().to_string();
            if session.sections_mut().close(id).is_err() {
                return not_found(query, session);
            }
            emit_event("section_closed", id);
            vec![format!("Closing {display}")]
        }
        SectionMatch::NotFound { .. } => not_found(query, session),
    }
}

/// `minimize <name>`: toggle a window into or out of the dock.
pub fn minimize(session: &mut SessionState, arg: Option<&str>) -> Vec<String> {
    let Some(query) = arg else {
        return usage("minimize", session);
    };
    match session.sections().find(query) {
        SectionMatch::Found(id) => {
            let display = session
                .sections()
                .get(id)
                .map_or_else(|| id.to_string(), |s| s.display_name().to_string());
            match session.sections_mut().minimize(id) {
                Ok(Transition::Engaged) => vec![format!("Minimizing {display}")],
                Ok(Transition::Restored) => vec![format!("Restoring {display}")],
                Err(_) => vec![format!("minimize: {id}: window is not open")],
            }
        }
        SectionMatch::NotFound { .. } => not_found(query, session),
    }
}

/// `maximize <name>`: toggle a window between pinned-full and free-floating.
pub fn maximize(session: &mut SessionState, arg: Option<&str>) -> Vec<String> {
    let Some(query) = arg else {
        return usage("maximize", session);
    };
    match session.sections().find(query) {
        SectionMatch::Found(id) => {
            let display = session
                .sections()
                .get(id)
                .map_or_else(|| id.to_string(), |s| s.display_name().to_string());
            match session.sections_mut().maximize(id) {
                Ok(Transition::Engaged) => {
                    emit_event("section_focused", id);
                    vec![format!("Maximizing {display}")]
                }
                Ok(Transition::Restored) => vec![format!("Restoring {display}")],
                Err(_) => vec![format!("maximize: {id}: window is not open")],
            }
        }
        SectionMatch::NotFound { .. } => not_found(query, session),
    }
}

/// Section registry listing (`ls sections`).
pub fn list_sections(session: &SessionState) -> Vec<String> {
    session
        .sections()
        .sections()
        .iter()
        .map(|s| {
            let state = match s.state() {
                WindowState::Closed => "closed",
                WindowState::Normal => "open",
                WindowState::Minimized => "minimized",
                WindowState::Maximized => "maximized",
            };
            format!("  {:<12} {:<16} [{state}]", s.id(), s.display_name())
        })
        .collect()
}

fn usage(verb: &str, session: &SessionState) -> Vec<String> {
    vec![
        format!("usage: {verb} <section>"),
        format!("sections: {}", known_ids(session).join(", ")),
    ]
}

fn not_found(query: &str, session: &SessionState) -> Vec<String> {
    vec![
        format!("No section matches '{query}'"),
        format!("sections: {}", known_ids(session).join(", ")),
    ]
}

fn known_ids(session: &SessionState) -> Vec<String> {
    session
        .sections()
        .sections()
        .iter()
        .map(|s| s.id().to_string())
        .collect()
}
