//! Reads INI-style configuration files.
//!
//! A file contains zero or more sections with zero or more options each.
//! A section starts with a header wrapped in square brackets, every option
//! line after it belongs to that section. Options before the first header
//! belong to the [`DEFAULT_SECTION`].
//!
//! An option is a key and a value separated by `=` or `:`. Spaces around the
//! key are trimmed, spaces right after the separator are skipped. A line
//! without a separator is a key with an empty value.
//!
//! Lines starting with `#` or `;` are comments. Inside an option a `#` or `;`
//! only starts a comment when it follows a space, so `color=red #fav` has the
//! value `red` while `url=a#b` keeps its `#`. Blank lines are ignored and
//! `\r\n` line endings are read as `\n`.
//!
//! ```
//! let doc = iniread::read_all("[server]\nport = 8080 # default\n".as_bytes()).unwrap();
//! assert_eq!(doc.get("server", "port"), Some("8080"));
//! ```

mod ini;

pub use self::ini::*;
