//! Field mappings for structured message records.
//!
//! Structured encode takes a name-to-value mapping and decode returns
//! one. The self-describing CustomStructure format serializes fields in
//! the order the mapping is iterated, so [`FieldMap`] preserves
//! insertion order. Equality is order-insensitive: two maps are equal
//! when they hold the same name-to-value pairs.

use crate::value::Value;

/// An insertion-ordered mapping from field name to value.
///
/// Inserting an existing name replaces its value in place, keeping the
/// original position. Iteration yields fields in insertion order,
/// which is the order CustomStructure serializes them.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMap {
    entries: Vec<(String, Value)>,
}

impl FieldMap {
    /// Create an empty field mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty field mapping with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a field, replacing any existing value for the same name.
    ///
    /// A replaced field keeps its original position; a new field is
    /// appended. Returns the previous value if the name was present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Get the value for a field name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether a field name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of fields in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl PartialEq for FieldMap {
    fn eq(&self, other: &Self) -> bool {
        // Names are unique, so same length plus subset means equal.
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(n, v)| other.get(n) == Some(v))
    }
}

impl FromIterator<(String, Value)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
