//! # NanoDB
//!
//! A tiny line-oriented command interpreter:
//! - Reads one line at a time until end of input or `quit`
//! - Tokenizes on whitespace
//! - Echoes `insert <id> <username> <email>` as a transient row
//! - Reports malformed and unknown commands without stopping
//!
//! Nothing is stored. Rows live for exactly one response.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Input (stdin / file)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ one line
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Repl                                  │
//! │            prompt → read → dispatch → print                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │     Row     │
//!   │ (tokenize,  │─────────▶│ (bounds,    │
//!   │  parse)     │          │  policy)    │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod row;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{NanoError, Result};
pub use config::Config;
pub use repl::{Repl, Session, SessionEnd};
pub use row::{FieldPolicy, Row};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of NanoDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
