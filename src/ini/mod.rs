mod constants;
mod cursor;
mod document;
mod options;
mod parser;

pub use self::constants::DEFAULT_SECTION;
pub use self::document::*;
pub use self::options::*;
pub use self::parser::{ErrorKind, ParseError, ParseResult, Reader};

use std::io::Read;

/// Read all sections from `reader`, see [`Reader::read_all()`]
pub fn read_all<R: Read>(reader: R) -> ParseResult<Document> {
    Reader::new(reader).read_all()
}
