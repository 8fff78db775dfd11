use ordered_multimap::ListOrderedMultimap;

pub type OptionKey = String;

pub type OptionValue = String;

/// Options of one section, each key present at most once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionMap {
    pub(crate) data: ListOrderedMultimap<OptionKey, OptionValue>,
}

impl OptionMap {
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Sets `key` to `value`, returning the value it replaced
    pub(crate) fn insert<K, V>(&mut self, key: K, value: V) -> Option<OptionValue>
    where
        K: Into<OptionKey>,
        V: Into<OptionValue>,
    {
        self.data.insert(key.into(), value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over `(key, value)` pairs in the order the keys first appeared
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.keys_len()
    }
}
