//! Tokenizer
//!
//! Splits an input line into a command name and positional arguments.

/// Split `line` on whitespace, dropping empty tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Strip a trailing `\n` or `\r\n`
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
