//! Interactive input.
//!
//! Values not supplied on the command line are read from stdin after a
//! prompt. Generic over reader and writer so tests can drive it with
//! in-memory buffers.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors reading an interactive value.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid integer: {input:?}")]
    NotAnInteger { input: String },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `prompt`, then read one line and parse it as an integer.
///
/// Surrounding whitespace is ignored. There is no retry: a line that is
/// not an integer is an error.
pub fn prompt_integer<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<i64, InputError>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }

    let trimmed = line.trim();
    trimmed.parse::<i64>().map_err(|_| InputError::NotAnInteger {
        input: trimmed.to_string(),
    })
}
