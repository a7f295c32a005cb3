//! Protocol Module
//!
//! The line protocol spoken by the command loop.
//!
//! ## Line Format
//! ```text
//! insert <id> <username> <email>     echo a row
//! q | quit                           stop
//! ```
//!
//! Tokens are separated by any run of whitespace.
//!
//! ### Responses
//! - `inserted ID <id>, user <username>, email <email>`
//! - `syntax error: insert <id> <username> <email>`
//! - `Unrecognized command '<token>'.`
//! - `syntax error: invalid id '<token>'` (strict ids only)
//! - `error: <field> is too long (<len> bytes, max <max>)` (reject policy only)

mod command;
mod id;
mod response;
mod token;

pub use command::{parse_command, Command};
pub use id::{permissive_i32, IdMode, ParsedId};
pub use response::{Response, SYNTAX_ERROR};
pub use token::{strip_line_ending, tokenize};
