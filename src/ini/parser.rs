use log::debug;
use std::io::{self, Read};

use super::constants::*;
use super::cursor::Cursor;
use super::{Document, OptionKey, OptionValue, SectionName};

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    #[source]
    pub kind: ErrorKind,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("invalid section header")]
    InvalidSectionHeader,
    #[error("empty section header")]
    EmptySectionHeader,
    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

// io::Error has no PartialEq of its own, read errors compare by kind
impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidSectionHeader, Self::InvalidSectionHeader) => true,
            (Self::EmptySectionHeader, Self::EmptySectionHeader) => true,
            (Self::Read(a), Self::Read(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

/// Reads sections of options from an INI-style stream.
///
/// A reader is good for exactly one [`Reader::read_all()`] call. Parsing
/// several inputs, possibly on several threads, needs one reader each.
#[derive(Debug)]
pub struct Reader<R> {
    cursor: Cursor<R>,
    field: String,
    current_section: SectionName,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            cursor: Cursor::new(inner),
            field: String::new(),
            current_section: DEFAULT_SECTION.to_owned(),
        }
    }

    #[cold]
    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            line: self.cursor.line,
            column: self.cursor.column,
            kind,
        }
    }

    fn next_char(&mut self) -> ParseResult<Option<char>> {
        self.cursor.next_char().map_err(|e| self.error(e.into()))
    }

    /// Read all sections until the end of the stream.
    ///
    /// Reaching the end of the stream is how a successful read ends, so it is
    /// never reported as an error. On error nothing read so far is returned.
    // DOCUMENT = [COMMENT | SECTION_HEADER | OPTION]*
    pub fn read_all(mut self) -> ParseResult<Document> {
        let mut doc = Document::new();

        loop {
            self.cursor.start_line();
            let Some(c) = self.next_char()? else {
                return Ok(doc);
            };

            match c {
                c if COMMENT_MARKERS.contains(&c) => self.skip_line()?,
                SECTION_HEADER_START => {
                    let section = self.parse_section_header()?;
                    if doc.has_section(&section) {
                        debug!("line {}: continuing section {section:?}", self.cursor.line);
                    } else {
                        debug!("line {}: found section {section:?}", self.cursor.line);
                    }
                    doc.ensure_section(section.as_str());
                    self.current_section = section;
                }
                _ => {
                    self.cursor.push_back();
                    let (key, value) = self.parse_option()?;
                    let key = key.trim();

                    if key.is_empty() {
                        if !value.is_empty() {
                            debug!("line {}: ignoring option without a key", self.cursor.line);
                        }
                        continue;
                    }

                    let replaced = doc
                        .ensure_section(self.current_section.as_str())
                        .insert(key, value);
                    if let Some(old) = replaced {
                        debug!(
                            "line {}: {key:?} in section {:?} replaces earlier value {old:?}",
                            self.cursor.line, self.current_section,
                        );
                    }
                }
            }
        }
    }

    // COMMENT        = ('#' | ';') ANY* NL
    fn skip_line(&mut self) -> ParseResult<()> {
        while let Some(c) = self.next_char()? {
            if c == '\n' {
                break;
            }
        }

        Ok(())
    }

    fn skip_spaces(&mut self) -> ParseResult<()> {
        while let Some(c) = self.next_char()? {
            if c != ' ' {
                self.cursor.push_back();
                break;
            }
        }

        Ok(())
    }

    // SECTION_HEADER = '[' NAME ']' ANY* NL
    // the leading '[' has already been consumed
    fn parse_section_header(&mut self) -> ParseResult<SectionName> {
        self.field.clear();

        loop {
            match self.next_char()? {
                None => return Err(self.error(ErrorKind::InvalidSectionHeader)),
                Some(c) if COMMENT_MARKERS.contains(&c) => {
                    return Err(self.error(ErrorKind::InvalidSectionHeader))
                }
                Some(SECTION_HEADER_END) => break,
                Some(c) => self.field.push(c),
            }
        }

        if self.field.is_empty() {
            return Err(self.error(ErrorKind::EmptySectionHeader));
        }
        let section = self.field.clone();

        // whatever follows the header is ignored, end of input included
        self.skip_line()?;

        Ok(section)
    }

    // OPTION         = KEY [DELIM ' '* VALUE] [' ' COMMENT] NL
    //
    // Without a delimiter the whole line is the key and the value is empty.
    // A comment marker only starts a comment at the start of the key or value
    // or right after a space, that one space is dropped along with the comment.
    fn parse_option(&mut self) -> ParseResult<(OptionKey, OptionValue)> {
        self.field.clear();
        let mut key: Option<OptionKey> = None;

        while let Some(c) = self.next_char()? {
            if COMMENT_MARKERS.contains(&c) && (self.field.is_empty() || self.field.ends_with(' ')) {
                if self.field.ends_with(' ') {
                    self.field.pop();
                }
                self.skip_line()?;
                break;
            }

            match c {
                '\n' => break,
                c if key.is_none() && KV_DELIMITERS.contains(&c) => {
                    key = Some(self.field.clone());
                    self.field.clear();
                    self.skip_spaces()?;
                }
                c => self.field.push(c),
            }
        }

        Ok(match key {
            Some(key) => (key, self.field.clone()),
            None => (self.field.clone(), OptionValue::new()),
        })
    }
}
