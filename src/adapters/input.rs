use crate::domain::ports::RadiusSource;
use crate::utils::error::Result;
use std::io::BufRead;

/// Reads the radius from a line-oriented stream such as stdin.
///
/// Blank lines are skipped and only the first token of the first non-blank
/// line is taken, so an interactive session never waits for EOF. Bytes that
/// are not UTF-8 are replaced with U+FFFD and left to the input policy.
#[derive(Debug)]
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> RadiusSource for ReaderSource<R> {
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = self.reader.read_until(b'\n', &mut buf)?;
            if read == 0 {
                tracing::debug!("Reached end of input before a radius token");
                return Ok(None);
            }

            // Invalid UTF-8 is malformed input, not an I/O failure.
            let line = String::from_utf8_lossy(&buf);
            if let Some(token) = line.split_whitespace().next() {
                tracing::debug!("Read radius token: {:?}", token);
                return Ok(Some(token.to_string()));
            }
        }
    }
}

/// A radius supplied up front, e.g. from `--radius`.
#[derive(Debug, Clone)]
pub struct FixedSource {
    value: Option<String>,
}

impl FixedSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl RadiusSource for FixedSource {
    fn read_token(&mut self) -> Result<Option<String>> {
        Ok(self
            .value
            .take()
            .and_then(|v| v.split_whitespace().next().map(str::to_string)))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
