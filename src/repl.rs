//! Command Loop
//!
//! Prompts, reads one line, dispatches it, and prints the response, until
//! the input ends or a quit command arrives.
//!
//! The loop is generic over [`BufRead`] and [`Write`] so it runs the same way
//! over stdin/stdout, a script file, or in-memory buffers.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{parse_command, strip_line_ending, Command, IdMode, ParsedId, Response};
use crate::row::Row;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Input stream was exhausted
    EndOfInput,

    /// `q` or `quit` was read
    Quit,
}

/// Summary of one run of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Lines read, including blank ones and the quit line
    pub lines_read: u64,

    /// Rows echoed by `insert`
    pub rows_echoed: u64,

    /// Diagnostics printed
    pub errors_reported: u64,

    /// Why the loop stopped
    pub ended: SessionEnd,
}

/// Line-oriented command interpreter
pub struct Repl<R, W> {
    /// Input lines
    reader: R,

    /// Prompt and response sink
    writer: W,

    /// Loop configuration
    config: Config,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a loop over `reader` and `writer`
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Run until end of input or quit
    ///
    /// Only I/O failures are returned as errors; malformed lines produce a
    /// diagnostic and the loop keeps going.
    pub fn run(&mut self) -> Result<Session> {
        let mut session = Session {
            lines_read: 0,
            rows_echoed: 0,
            errors_reported: 0,
            ended: SessionEnd::EndOfInput,
        };

        let mut buf = Vec::new();

        loop {
            self.write_prompt()?;

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("End of input");
                break;
            }
            session.lines_read += 1;

            // Invalid UTF-8 is replaced rather than ending the session
            let raw = String::from_utf8_lossy(&buf);
            let line = strip_line_ending(&raw);
            tracing::trace!(line = %line, "Read line");

            let response = self.execute_line(line);

            if response == Response::Quit {
                session.ended = SessionEnd::Quit;
                break;
            }

            match &response {
                Response::Inserted(_) => session.rows_echoed += 1,
                r if r.is_error() => session.errors_reported += 1,
                _ => {}
            }

            self.write_response(&response)?;
        }

        tracing::info!(
            lines = session.lines_read,
            rows = session.rows_echoed,
            errors = session.errors_reported,
            ended = ?session.ended,
            "Session finished"
        );

        Ok(session)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the output sink
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Take back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn write_prompt(&mut self) -> Result<()> {
        self.writer.write_all(self.config.prompt.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_response(&mut self, response: &Response) -> Result<()> {
        if let Some(text) = response.render() {
            writeln!(self.writer, "{}", text)?;
        }
        Ok(())
    }
}

impl<R, W> Repl<R, W> {
    /// Dispatch a single line without touching the input stream
    pub fn execute_line(&self, line: &str) -> Response {
        let command = parse_command(line);
        tracing::debug!(command = command.name(), "Dispatching");
        self.execute(command)
    }

    /// Turn a parsed command into a response
    pub fn execute(&self, command: Command) -> Response {
        match command {
            Command::Empty => Response::Nothing,
            Command::Quit => Response::Quit,
            Command::MalformedInsert => Response::SyntaxError,
            Command::Unrecognized(token) => Response::Unrecognized(token),
            Command::Insert {
                id,
                username,
                email,
            } => {
                match (&id, self.config.id_mode) {
                    (ParsedId::Lenient { token, .. }, IdMode::Strict) => {
                        return Response::InvalidId(token.clone());
                    }
                    (ParsedId::Lenient { value, .. }, IdMode::Permissive) => {
                        tracing::debug!(id = *value, "Id converted permissively");
                    }
                    (ParsedId::Exact(_), _) => {}
                }

                match Row::build(id.value(), &username, &email, self.config.field_policy) {
                    Ok(row) => Response::Inserted(row),
                    Err(e) => Response::FieldTooLong(e),
                }
            }
        }
    }
}
