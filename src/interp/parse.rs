//! Command-line tokenization.
//!
//! A submitted line is split on whitespace; the first token is the verb
//! (case-normalized), leading `-x` tokens are option flags, and the
//! remaining tokens are rejoined with single spaces into one argument.
//! The join-all rule applies uniformly to every verb, so
//! `open network automation` looks up one section named
//! `network automation`.

use bitflags::bitflags;

bitflags! {
    /// Option flags recognized by `ls`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct LsFlags: u8 {
        /// `-a`: include the synthetic `.`/`..` pair.
        const ALL = 0b0000_0001;
        /// `-l`: fixed-width long rendering with synthetic metadata.
        const LONG = 0b0000_0010;
    }
}

/// Transient parse result of one submitted line. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased verb.
    pub verb: String,
    /// Recognized option flags (`-a`, `-l`, combined `-al`).
    pub flags: LsFlags,
    /// Remaining tokens rejoined with single spaces, if any.
    pub arg: Option<String>,
}

impl ParsedCommand {
    /// Parse a raw line. Returns `None` if the line is blank.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let verb = tokens.next()?.to_lowercase();

        let mut flags = LsFlags::empty();
        let mut rest: Vec<&str> = Vec::new();
        for token in tokens {
            if rest.is_empty() && token.len() > 1 && token.starts_with('-') {
                if let Some(parsed) = parse_flags(token) {
                    flags |= parsed;
                    continue;
                }
            }
            rest.push(token);
        }

        let arg = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };
        Some(Self { verb, flags, arg })
    }

    /// The argument, or `default` when none was given.
    #[must_use]
    pub fn arg_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.arg.as_deref().unwrap_or(default)
    }
}

/// Parse a `-xyz` token into flags; `None` if any letter is unrecognized
/// (the token then falls through as a plain argument).
fn parse_flags(token: &str) -> Option<LsFlags> {
    let mut flags = LsFlags::empty();
    for c in token.chars().skip(1) {
        match c {
            'a' => flags |= LsFlags::ALL,
            'l' => flags |= LsFlags::LONG,
            _ => return None,
        }
    }
    Some(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(ParsedCommand::parse(""), None);
        assert_eq!(ParsedCommand::parse("   "), None);
    }

    #[test]
    fn test_verb_is_case_normalized() {
        let cmd = ParsedCommand::parse("LS").unwrap();
        assert_eq!(cmd.verb, "ls");
    }

    #[test]
    fn test_flags_single_and_combined() {
        let cmd = ParsedCommand::parse("ls -a -l docs").unwrap();
        assert_eq!(cmd.flags, LsFlags::ALL | LsFlags::LONG);
        assert_eq!(cmd.arg.as_deref(), Some("docs"));

        let cmd = ParsedCommand::parse("ls -la").unwrap();
        assert_eq!(cmd.flags, LsFlags::ALL | LsFlags::LONG);
        assert_eq!(cmd.arg, None);
    }

    #[test]
    fn test_multi_word_argument_is_joined() {
        let cmd = ParsedCommand::parse("open network   automation").unwrap();
        assert_eq!(cmd.arg.as_deref(), Some("network automation"));
    }

    #[test]
    fn test_unknown_flag_falls_through_as_argument() {
        let cmd = ParsedCommand::parse("ls -z").unwrap();
        assert_eq!(cmd.flags, LsFlags::empty());
        assert_eq!(cmd.arg.as_deref(), Some("-z"));
    }

    #[test]
    fn test_flags_after_argument_are_literal() {
        // Flags are only recognized before the first plain token.
        let cmd = ParsedCommand::parse("cat notes -l").unwrap();
        assert_eq!(cmd.flags, LsFlags::empty());
        assert_eq!(cmd.arg.as_deref(), Some("notes -l"));
    }
}
