//! Command definitions
//!
//! Represents one parsed input line.

use super::id::ParsedId;
use super::token::tokenize;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `insert <id> <username> <email>`
    Insert {
        id: ParsedId,
        username: String,
        email: String,
    },

    /// `insert` with fewer than three arguments
    MalformedInsert,

    /// `q` or `quit`
    Quit,

    /// Blank or whitespace-only line
    Empty,

    /// Any other first token
    Unrecognized(String),
}

impl Command {
    /// Recognized command names
    pub const KNOWN: [&'static str; 3] = ["insert", "q", "quit"];

    /// Short name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert { .. } | Command::MalformedInsert => "insert",
            Command::Quit => "quit",
            Command::Empty => "empty",
            Command::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Parse a single line into a [`Command`]
///
/// Total: every line maps to some command. Names are case-sensitive and
/// arguments past the third are ignored.
pub fn parse_command(line: &str) -> Command {
    let tokens = tokenize(line);

    let Some((&name, args)) = tokens.split_first() else {
        return Command::Empty;
    };

    match name {
        "q" | "quit" => Command::Quit,
        "insert" => match args {
            [id, username, email, ..] => Command::Insert {
                id: ParsedId::parse(id),
                username: username.to_string(),
                email: email.to_string(),
            },
            _ => Command::MalformedInsert,
        },
        other => Command::Unrecognized(other.to_string()),
    }
}
