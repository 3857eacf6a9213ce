use crate::domain::ports::Console;
use crate::utils::error::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Cursor, Stdin, StdinLock, Stdout, Write};

/// Console over any buffered reader and writer: the process terminal in
/// the binary, in-memory buffers in tests.
pub struct BufferedConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl BufferedConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl BufferedConsole<Cursor<Vec<u8>>, Vec<u8>> {
    /// Feeds `lines` as operator input, one per `read_line`.
    pub fn scripted(lines: &[&str]) -> Self {
        let mut input = String::new();
        for line in lines {
            input.push_str(line);
            input.push('\n');
        }
        Self::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<R: BufRead, W: Write> Console for BufferedConsole<R, W> {
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so a garbled line reaches the menu as unrecognized text.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn writeln(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
