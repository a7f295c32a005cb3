//! Response definitions
//!
//! Represents what the command loop prints for one line.

use std::fmt;

use crate::row::{FieldTooLong, Row};

/// Fixed text for a malformed `insert`
pub const SYNTAX_ERROR: &str = "syntax error: insert <id> <username> <email>";

/// Outcome of dispatching one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Row parsed and echoed
    Inserted(Row),

    /// `insert` with missing arguments
    SyntaxError,

    /// Id token rejected in strict mode
    InvalidId(String),

    /// Text field over its bound under the reject policy
    FieldTooLong(FieldTooLong),

    /// Unknown first token
    Unrecognized(String),

    /// Loop should stop
    Quit,

    /// Nothing to print
    Nothing,
}

impl Response {
    /// The output line without its newline, or `None` when silent
    pub fn render(&self) -> Option<String> {
        match self {
            Response::Quit | Response::Nothing => None,
            other => Some(other.to_string()),
        }
    }

    /// True for diagnostics
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Response::SyntaxError
                | Response::InvalidId(_)
                | Response::FieldTooLong(_)
                | Response::Unrecognized(_)
        )
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Inserted(row) => write!(
                f,
                "inserted ID {}, user {}, email {}",
                row.id, row.username, row.email
            ),
            Response::SyntaxError => f.write_str(SYNTAX_ERROR),
            Response::InvalidId(token) => write!(f, "syntax error: invalid id '{}'", token),
            Response::FieldTooLong(e) => write!(
                f,
                "error: {} is too long ({} bytes, max {})",
                e.field, e.len, e.max
            ),
            Response::Unrecognized(token) => write!(f, "Unrecognized command '{}'.", token),
            Response::Quit | Response::Nothing => Ok(()),
        }
    }
}
