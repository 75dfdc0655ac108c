//! Whitespace-delimited token input
//!
//! Each guess is one token; a line holding several tokens feeds several turns.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads one whitespace-separated token at a time from a buffered reader
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, blocking until one is available
    ///
    /// Returns `Ok(None)` once the input is exhausted. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected, so any token is a guess.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_into_tokens() {
        let mut reader = TokenReader::new("red  blue\n\n  green\n".as_bytes());

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("red"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("blue"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("green"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn last_line_without_newline() {
        let mut reader = TokenReader::new("3".as_bytes());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_becomes_a_token() {
        let mut reader = TokenReader::new(&b"caf\xe9 red\n"[..]);

        let token = reader.next_token().unwrap().unwrap();
        assert_eq!(token, "caf\u{fffd}");
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("red"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn empty_input() {
        let mut reader = TokenReader::new("".as_bytes());
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
