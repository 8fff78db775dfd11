use std::io::{self, BufRead, BufReader, Read};
use std::ops::RangeInclusive;
use std::str;

/// Reads an input stream one character at a time.
///
/// `\r\n` is folded into a single `\n`. A bare `\r` is passed on as a literal
/// character. Text mixing both is not normalized any further.
///
/// `line` and `column` only feed error locations. The column is the number of
/// characters read on the current line, so the first character is column 1.
#[derive(Debug)]
pub(crate) struct Cursor<R> {
    inner: BufReader<R>,
    pushed_back: Vec<char>,
    last: Option<char>,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl<R: Read> Cursor<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            pushed_back: Vec::with_capacity(2),
            last: None,
            line: 0,
            column: 0,
        }
    }

    pub(crate) fn start_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// Read the next logical character, `None` at end of input.
    pub(crate) fn next_char(&mut self) -> io::Result<Option<char>> {
        let res = self.read_folded();
        self.column += 1;
        let c = res?;
        self.last = c;
        Ok(c)
    }

    /// Return the character read last so that `next_char()` yields it again.
    pub(crate) fn push_back(&mut self) {
        if let Some(c) = self.last.take() {
            self.pushed_back.push(c);
        }
        self.column = self.column.saturating_sub(1);
    }

    fn read_folded(&mut self) -> io::Result<Option<char>> {
        match self.read_char()? {
            Some('\r') => match self.read_char()? {
                Some('\n') => Ok(Some('\n')),
                Some(c) => {
                    self.pushed_back.push(c);
                    Ok(Some('\r'))
                }
                None => Ok(None),
            },
            c => Ok(c),
        }
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pushed_back.pop() {
            return Ok(Some(c));
        }

        let Some(first) = self.peek_byte()? else {
            return Ok(None);
        };
        self.inner.consume(1);

        let width = utf8_width(first);
        match width {
            0 => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            1 => return Ok(Some(char::from(first))),
            _ => {}
        }

        let mut bytes = [first, 0, 0, 0];
        for i in 1..width {
            match self.peek_byte()? {
                Some(b) if continuation_range(first, i).contains(&b) => {
                    bytes[i] = b;
                    self.inner.consume(1);
                }
                // Only the lead byte is replaced here. A continuation byte
                // taken so far is invalid on its own and yields one more
                // replacement each, the offending byte is read next.
                _ => {
                    self.pushed_back
                        .extend(std::iter::repeat(char::REPLACEMENT_CHARACTER).take(i - 1));
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                }
            }
        }

        Ok(str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .or(Some(char::REPLACEMENT_CHARACTER)))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

// bytes allowed at position `i` of a sequence led by `lead`, ruling out
// overlong encodings, surrogates and code points above U+10FFFF
fn continuation_range(lead: u8, i: usize) -> RangeInclusive<u8> {
    match (lead, i) {
        (0xE0, 1) => 0xA0..=0xBF,
        (0xED, 1) => 0x80..=0x9F,
        (0xF0, 1) => 0x90..=0xBF,
        (0xF4, 1) => 0x80..=0x8F,
        _ => 0x80..=0xBF,
    }
}

// expected length of a UTF-8 sequence by its leading byte, 0 if invalid
fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
