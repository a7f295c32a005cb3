//! Row data model
//!
//! A [`Row`] is built from one `insert` line, echoed, and dropped. Nothing
//! keeps it around.
//!
//! ## Field Bounds
//! ```text
//! ┌──────────┬──────────────────┬──────────────────────────┐
//! │ id (i32) │ username (≤ 32)  │      email (≤ 255)       │
//! └──────────┴──────────────────┴──────────────────────────┘
//! ```
//!
//! Bounds are in bytes. Whether they are enforced depends on [`FieldPolicy`].

use std::fmt;
use std::str::FromStr;

use crate::error::NanoError;

/// Maximum username length in bytes
pub const USERNAME_MAX_LEN: usize = 32;

/// Maximum email length in bytes
pub const EMAIL_MAX_LEN: usize = 255;

/// What to do with a text field longer than its bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Keep the text as given; bounds are not applied
    #[default]
    Preserve,

    /// Cut the text to the bound, on a char boundary
    Truncate,

    /// Refuse the row
    Reject,
}

impl FromStr for FieldPolicy {
    type Err = NanoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preserve" => Ok(FieldPolicy::Preserve),
            "truncate" => Ok(FieldPolicy::Truncate),
            "reject" => Ok(FieldPolicy::Reject),
            other => Err(NanoError::Config(format!(
                "unknown field policy '{}' (expected preserve, truncate or reject)",
                other
            ))),
        }
    }
}

impl fmt::Display for FieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldPolicy::Preserve => "preserve",
            FieldPolicy::Truncate => "truncate",
            FieldPolicy::Reject => "reject",
        };
        f.write_str(name)
    }
}

/// A field exceeded its bound under [`FieldPolicy::Reject`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTooLong {
    /// Field name (`username` or `email`)
    pub field: &'static str,

    /// Actual length in bytes
    pub len: usize,

    /// Allowed length in bytes
    pub max: usize,
}

/// A transient record echoed back by `insert`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl Row {
    /// Build a row, applying `policy` to both text fields
    pub fn build(
        id: i32,
        username: &str,
        email: &str,
        policy: FieldPolicy,
    ) -> Result<Self, FieldTooLong> {
        let username = apply_policy("username", username, USERNAME_MAX_LEN, policy)?;
        let email = apply_policy("email", email, EMAIL_MAX_LEN, policy)?;

        Ok(Self {
            id,
            username,
            email,
        })
    }
}

fn apply_policy(
    field: &'static str,
    value: &str,
    max: usize,
    policy: FieldPolicy,
) -> Result<String, FieldTooLong> {
    if value.len() <= max {
        return Ok(value.to_string());
    }

    match policy {
        FieldPolicy::Preserve => Ok(value.to_string()),
        FieldPolicy::Truncate => {
            let cut = truncate_at_boundary(value, max);
            tracing::warn!(
                field,
                original_len = value.len(),
                kept_len = cut.len(),
                "Truncated field to fit its bound"
            );
            Ok(cut.to_string())
        }
        FieldPolicy::Reject => Err(FieldTooLong {
            field,
            len: value.len(),
            max,
        }),
    }
}

/// Longest prefix of `value` of at most `max` bytes that ends on a char boundary
pub fn truncate_at_boundary(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }

    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}
