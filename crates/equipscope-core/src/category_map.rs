//! Insertion-ordered `category → value` map.
//!
//! Per-category aggregates keep the order in which categories first appear
//! in the batch, which is the order charts and tables show them in. The map
//! serializes as a plain JSON object.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered map keyed by category label.
///
/// Entries live in a `Vec` in first-seen order; `index` maps each label to
/// its position so lookups stay constant-time however many categories a
/// batch carries.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for CategoryMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> CategoryMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&V> {
        self.index.get(category).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Mutable slot for `category`, inserted with `init` on first sight.
    pub fn entry_or_insert_with(&mut self, category: &str, init: impl FnOnce() -> V) -> &mut V {
        let idx = match self.index.get(category) {
            Some(&i) => i,
            None => self.push(category.to_string(), init()),
        };
        &mut self.entries[idx].1
    }

    /// Insert or overwrite, keeping the original position of an existing key.
    pub fn insert(&mut self, category: impl Into<String>, value: V) {
        let category = category.into();
        match self.index.get(&category) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.push(category, value);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Apply `f` to every value, preserving order.
    pub fn map_values<W>(self, mut f: impl FnMut(V) -> W) -> CategoryMap<W> {
        CategoryMap {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
            index: self.index,
        }
    }

    fn push(&mut self, category: String, value: V) -> usize {
        let idx = self.entries.len();
        self.index.insert(category.clone(), idx);
        self.entries.push((category, value));
        idx
    }
}

impl<V: Serialize> Serialize for CategoryMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for CategoryMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for CategoryMapVisitor<V> {
            type Value = CategoryMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category labels to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = CategoryMap::new();
                while let Some((k, v)) = access.next_entry::<String, V>()? {
                    map.insert(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(CategoryMapVisitor(PhantomData))
    }
}
