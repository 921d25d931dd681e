use super::Value;

use indexmap::IndexMap;

/// An ordered key-value structure produced from a result-set row.
///
/// Key order follows insertion order, which the materializer drives from
/// column order; iteration yields keys in that order. Equality is deep
/// and structural: two documents are equal when they hold the same keys
/// mapped to structurally equal values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Inserts a value under the given key, appending the key if new.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Document {
        Document {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// An ordered sequence value within a [`Document`], mirroring array-typed
/// columns. Element order is the source sequence's order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocumentArray {
    items: Vec<Value>,
}

impl DocumentArray {
    pub fn new() -> DocumentArray {
        DocumentArray::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl From<Vec<Value>> for DocumentArray {
    fn from(items: Vec<Value>) -> DocumentArray {
        DocumentArray { items }
    }
}

impl FromIterator<Value> for DocumentArray {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> DocumentArray {
        DocumentArray {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DocumentArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
