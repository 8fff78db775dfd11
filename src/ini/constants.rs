/// Section that collects options appearing before the first header
pub const DEFAULT_SECTION: &str = "default";

pub(crate) const COMMENT_MARKERS: &[char] = &['#', ';'];
pub(crate) const KV_DELIMITERS: &[char]   = &['=', ':'];

pub(crate) const SECTION_HEADER_START: char = '[';
pub(crate) const SECTION_HEADER_END: char   = ']';
