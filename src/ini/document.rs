use ordered_multimap::list_ordered_multimap::ListOrderedMultimap;
use std::str::FromStr;

use super::{OptionMap, ParseError, Reader};

pub type SectionName = String;

/// All sections of a parsed file, keyed by section name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub(crate) sections: ListOrderedMultimap<SectionName, OptionMap>,
}

impl Document {
    /// Makes sure section `name` exists, returning its options
    pub(crate) fn ensure_section<S: Into<SectionName>>(&mut self, name: S) -> &mut OptionMap {
        self.sections
            .entry(name.into())
            .or_insert_entry(OptionMap::default())
            .into_mut()
    }

    /// Look up the value of `key` in section `section`
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|options| options.get(key))
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over `(section name, options)` in the order the sections first appeared
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionMap)> {
        self.sections.iter().map(|(name, options)| (name.as_str(), options))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.keys_len()
    }

    /// Parse a document held in memory
    pub fn load_from_str(data: &str) -> Result<Self, ParseError> {
        Reader::new(data.as_bytes()).read_all()
    }

    pub fn new() -> Self {
        Document {
            sections: Default::default(),
        }
    }

    pub fn section(&self, name: &str) -> Option<&OptionMap> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::load_from_str(s)
    }
}
