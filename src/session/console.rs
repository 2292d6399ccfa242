use std::io::{BufRead, Write};

use super::SessionError;

/// Line-oriented console transport shared by the interactive sessions.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes text that already carries its own line endings.
    pub fn write_block(&mut self, block: &str) -> Result<(), SessionError> {
        self.output.write_all(block.as_bytes())?;
        Ok(())
    }

    /// Shows `message` and reads one line of input.
    ///
    /// The line terminator is stripped and invalid UTF-8 is replaced with
    /// U+FFFD. Returns `None` once input is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut console = Console::new(Cursor::new("first\r\nsecond\nlast"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("last"));
        assert_eq!(console.prompt("> ").unwrap(), None);
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > > > ");
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() {
        let mut console = Console::new(Cursor::new("  spaced out  \n\n"), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("  spaced out  "));
        assert_eq!(console.prompt("").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(&b"caf\xe9\r\nok\n"[..]), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("caf\u{fffd}"));
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("ok"));
    }

    #[test]
    fn test_write_line_and_block() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.write_line("hello").unwrap();
        console.write_block("a\nb\n").unwrap();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "hello\na\nb\n");
    }
}
