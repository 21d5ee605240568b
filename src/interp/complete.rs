//! Tab completion for verbs and path arguments.

use crate::session::SessionState;
use crate::vfs::VirtualFs;

use super::VERB_TABLE;

/// Verbs whose argument completes as a virtual filesystem path.
const PATH_VERBS: &[&str] = &["cd", "cat", "ls"];

/// Outcome of a completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Nothing matched; leave the input untouched.
    None,
    /// Exactly one match: the full replacement input line.
    Single(String),
    /// Several candidates to display; the input is not mutated.
    Multiple(Vec<String>),
}

/// Complete a partial input line against the verb table or, for
/// `cd`/`cat`/`ls`, against the static filesystem. Live-mounted project
/// contents are not completed (they would need a collaborator round trip).
#[must_use]
pub fn complete(input: &str, session: &SessionState) -> Completion {
    if input.trim().is_empty() {
        return Completion::None;
    }

    match input.rfind(char::is_whitespace) {
        None => complete_verb(input),
        Some(pos) => {
            let verb = input.split_whitespace().next().unwrap_or_default();
            if !PATH_VERBS.contains(&verb) {
                return Completion::None;
            }
            // `pos` is a byte index and the separator may be a multi-byte
            // whitespace char (U+00A0, U+2009, ...), so step over its full
            // UTF-8 width rather than a single byte.
            let ws = input[pos..].chars().next().map_or(1, char::len_utf8);
            let partial = &input[pos + ws..];
            complete_path(input, partial, session)
        }
    }
}

fn complete_verb(partial: &str) -> Completion {
    let needle = partial.to_lowercase();
    let matches: Vec<&str> = VERB_TABLE
        .iter()
        .map(|(verb, _)| *verb)
        .filter(|verb| verb.starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [] => Completion::None,
        [only] => Completion::Single(format!("{only} ")),
        many => Completion::Multiple(many.iter().map(ToString::to_string).collect()),
    }
}

fn complete_path(input: &str, partial: &str, session: &SessionState) -> Completion {
    let (dir_part, name_part) = match partial.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => ("", partial),
    };
    let base_target = if dir_part.is_empty() && !partial.contains('/') {
        ".".to_string()
    } else if dir_part.is_empty() {
        // Input like "/x" has no meaning here; "~/x" splits to dir "~".
        return Completion::None;
    } else {
        dir_part.to_string()
    };

    let Ok(base) = VirtualFs::normalize(&base_target, session.cwd()) else {
        return Completion::None;
    };
    let Ok(entries) = session.fs().list(&base) else {
        return Completion::None;
    };

    let matches: Vec<String> = entries
        .into_iter()
        .map(|e| e.name)
        .filter(|name| name.starts_with(name_part))
        .collect();
    match matches.as_slice() {
        [] => Completion::None,
        [only] => {
            let stem = &input[..input.len() - name_part.len()];
            Completion::Single(format!("{stem}{only}"))
        }
        _ => Completion::Multiple(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::portfolio()
    }

    #[test]
    fn test_unique_verb_completes_with_trailing_space() {
        assert_eq!(
            complete("pw", &session()),
            Completion::Single("pwd ".to_string())
        );
    }

    #[test]
    fn test_ambiguous_verb_lists_candidates() {
        let Completion::Multiple(candidates) = complete("c", &session()) else {
            panic!("expected multiple candidates");
        };
        assert!(candidates.contains(&"cd".to_string()));
        assert!(candidates.contains(&"cat".to_string()));
        assert!(candidates.contains(&"clear".to_string()));
    }

    #[test]
    fn test_unique_path_completes_in_place() {
        assert_eq!(
            complete("cd ab", &session()),
            Completion::Single("cd about".to_string())
        );
        assert_eq!(
            complete("cat about/wh", &session()),
            Completion::Single("cat about/whoami.txt".to_string())
        );
    }

    #[test]
    fn test_path_completion_only_for_path_verbs() {
        assert_eq!(complete("open ab", &session()), Completion::None);
    }

    #[test]
    fn test_unicode_whitespace_separator_does_not_panic() {
        // Non-ASCII whitespace is valid input; the separator is multi-byte.
        assert_eq!(
            complete("cd\u{a0}ab", &session()),
            Completion::Single("cd\u{a0}about".to_string())
        );
        assert_eq!(
            complete("cat\u{2009}about/wh", &session()),
            Completion::Single("cat\u{2009}about/whoami.txt".to_string())
        );
        assert_eq!(complete("cd\u{a0}zz", &session()), Completion::None);
    }

    #[test]
    fn test_no_match_leaves_input_alone() {
        assert_eq!(complete("cd zz", &session()), Completion::None);
        assert_eq!(complete("zz", &session()), Completion::None);
    }
}
