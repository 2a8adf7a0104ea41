//! Editor-defined display ordering for collections

use serde::{Deserialize, Serialize};

/// An ordered list of primary keys describing how a collection should be
/// displayed
///
/// The editor UI writes the desired order into `primary_keys`; render-time
/// code applies it with [`SortableCollection::sort_by_key`]. Items whose key
/// is not present in the order keep their relative position at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortableCollection {
    #[serde(default)]
    pub primary_keys: Vec<String>,
}

impl SortableCollection {
    pub fn new(keys: &[&str]) -> Self {
        Self {
            primary_keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Position of a key in the configured order
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.primary_keys.iter().position(|k| k == key)
    }

    /// Sort `items` by the configured order, extracting each item's key with
    /// `key`. The sort is stable; unordered items sink to the end.
    pub fn sort_by_key<T, F>(&self, items: &mut [T], key: F)
    where
        F: Fn(&T) -> String,
    {
        items.sort_by_key(|item| self.position_of(&key(item)).unwrap_or(usize::MAX));
    }
}
