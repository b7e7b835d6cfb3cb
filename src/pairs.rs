use serde::{Serialize, Deserialize, Serializer, Deserializer};
use serde::ser::SerializeMap;
use serde::de::{MapAccess, Visitor};

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// An ordered sequence of key-value pairs with unique keys.
///
/// This is both what the generators consume and what they yield. Equality and
/// hashing are positional: `{a: 1, b: 2}` and `{b: 2, a: 1}` are different sequences.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Pairs<K, V> {
    raw: Vec<(K, V)>
}

impl<K, V> Default for Pairs<K, V> {
    fn default() -> Self {
        Pairs::new()
    }
}

impl<K, V> Pairs<K, V> {
    pub fn new() -> Pairs<K, V> {
        Pairs {
            raw: Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.raw.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.raw.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.raw.iter().map(|(_, value)| value)
    }

    pub fn get(&self, key: &K) -> Option<&V>
        where K: PartialEq
    {
        self.raw.iter().find(|(k, _)| k == key).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &K) -> bool
        where K: PartialEq
    {
        self.get(key).is_some()
    }

    pub fn as_slice(&self) -> &[(K, V)] {
        &self.raw
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.raw
    }

    // Caller guarantees the keys are already unique.
    pub(crate) fn from_unique(raw: Vec<(K, V)>) -> Pairs<K, V> {
        Pairs { raw }
    }

    pub(crate) fn prepended(self, head: (K, V)) -> Pairs<K, V> {
        let mut raw = Vec::with_capacity(self.raw.len() + 1);
        raw.push(head);
        raw.extend(self.raw);
        Pairs { raw }
    }
}

/// A repeated key keeps the position of its first occurrence and takes the later value.
impl<K, V> FromIterator<(K, V)> for Pairs<K, V>
where K: Eq + Hash + Clone
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Pairs<K, V> {
        let mut positions: HashMap<K, usize> = HashMap::new();
        let mut raw: Vec<(K, V)> = Vec::new();
        for (key, value) in iter {
            if let Some(&idx) = positions.get(&key) {
                raw[idx].1 = value;
            } else {
                positions.insert(key.clone(), raw.len());
                raw.push((key, value));
            }
        }
        Pairs { raw }
    }
}

impl<K, V> IntoIterator for Pairs<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Pairs<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.iter()
    }
}

impl<K, V> fmt::Display for Pairs<K, V>
where K: fmt::Display, V: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (key, value)) in self.raw.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl<K, V> Serialize for Pairs<K, V>
where K: Serialize, V: Serialize
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.raw.len()))?;
        for (key, value) in &self.raw {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct PairsVisitor<K, V> {
    marker: PhantomData<fn() -> Pairs<K, V>>
}

impl<'de, K, V> Visitor<'de> for PairsVisitor<K, V>
where K: Deserialize<'de> + Eq + Hash + Clone, V: Deserialize<'de>
{
    type Value = Pairs<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map of key-value pairs")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(entries.into_iter().collect())
    }
}

impl<'de, K, V> Deserialize<'de> for Pairs<K, V>
where K: Deserialize<'de> + Eq + Hash + Clone, V: Deserialize<'de>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PairsVisitor { marker: PhantomData })
    }
}

/// Builds a [`Pairs`](crate::pairs::Pairs) from `key => value` entries.
#[macro_export]
macro_rules! pairs {
    () => {
        $crate::pairs::Pairs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$(($key, $value)),+].into_iter().collect::<$crate::pairs::Pairs<_, _>>()
    };
}

#[cfg(test)]
mod test {
    use crate::pairs::*;

    #[test]
    fn test_duplicate_keys() {
        let p: Pairs<&str, i32> = vec![("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(p.into_vec(), vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_accessors() {
        let p = pairs!{"x" => 10, "y" => 20};
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
        assert_eq!(p.get(&"y"), Some(&20));
        assert_eq!(p.get(&"z"), None);
        assert!(p.contains_key(&"x"));
        assert_eq!(p.keys().copied().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(p.values().copied().collect::<Vec<_>>(), vec![10, 20]);
        let empty: Pairs<&str, i32> = pairs!{};
        assert!(empty.is_empty());
        assert_eq!(empty, Pairs::default());
    }

    #[test]
    fn test_positional_equality() {
        assert!(pairs!{"a" => 1, "b" => 2} != pairs!{"b" => 2, "a" => 1});
    }

    #[test]
    fn test_prepended() {
        let p = pairs!{"b" => 2}.prepended(("a", 1));
        assert_eq!(p, pairs!{"a" => 1, "b" => 2});
    }

    #[test]
    fn test_display() {
        assert_eq!(pairs!{"a" => 1, "b" => 2}.to_string(), "{a: 1, b: 2}");
        assert_eq!(Pairs::<&str, i32>::new().to_string(), "{}");
    }

    #[test]
    fn test_json_keeps_document_order() {
        let p: Pairs<String, u64> = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(p.keys().map(|k| k.as_str()).collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_json_duplicate_keys() {
        let p: Pairs<String, u64> = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        assert_eq!(p.get(&"a".to_string()), Some(&3));
        assert_eq!(p.len(), 2);
    }
}
