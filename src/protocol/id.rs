//! Row id parsing
//!
//! Ids go through a permissive conversion that never fails: optional
//! leading whitespace, an optional sign, then the longest run of decimal
//! digits. No digits means `0`. Out-of-range values saturate.
//!
//! [`ParsedId`] keeps track of whether the token was a clean integer, so a
//! caller running in [`IdMode::Strict`] can refuse the rest.

use std::fmt;

/// How the command loop treats ids that were not clean integers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdMode {
    /// Accept the permissive value (`"abc"` becomes `0`)
    #[default]
    Permissive,

    /// Report an invalid id instead of echoing the row
    Strict,
}

/// Result of converting an id token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedId {
    /// The whole token was a valid `i32`
    Exact(i32),

    /// The value came from permissive conversion
    Lenient { value: i32, token: String },
}

impl ParsedId {
    /// Convert `token`; never fails
    pub fn parse(token: &str) -> Self {
        match token.parse::<i32>() {
            Ok(value) => ParsedId::Exact(value),
            Err(_) => ParsedId::Lenient {
                value: permissive_i32(token),
                token: token.to_string(),
            },
        }
    }

    /// The integer value, exact or not
    pub fn value(&self) -> i32 {
        match self {
            ParsedId::Exact(value) => *value,
            ParsedId::Lenient { value, .. } => *value,
        }
    }

    /// True when the token was a clean integer
    pub fn is_exact(&self) -> bool {
        matches!(self, ParsedId::Exact(_))
    }
}

impl fmt::Display for ParsedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Leading-digits conversion with saturation
pub fn permissive_i32(token: &str) -> i32 {
    let s = token.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    // One past i32::MAX so that i32::MIN is reachable
    const LIMIT: i64 = i32::MAX as i64 + 1;

    let mut magnitude: i64 = 0;
    for b in digits.bytes().take_while(|b| b.is_ascii_digit()) {
        magnitude = (magnitude * 10 + i64::from(b - b'0')).min(LIMIT);
    }

    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
