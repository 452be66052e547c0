//! Character frequency map
//!
//! Counts every character of a value, keyed in first-occurrence order.
//! Serializes as a JSON object whose keys keep that order.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered character counts
///
/// `entries` keeps first-occurrence order; `positions` maps each character
/// to its slot in `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFrequency {
    entries: Vec<(char, usize)>,
    positions: HashMap<char, usize>,
}

impl CharacterFrequency {
    /// Count the characters of `value`, preserving first-seen order
    pub fn from_str_chars(value: &str) -> Self {
        let mut freq = Self::default();
        for c in value.chars() {
            freq.add(c, 1);
        }
        freq
    }

    fn add(&mut self, c: char, count: usize) {
        match self.positions.get(&c) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.positions.insert(c, self.entries.len());
                self.entries.push((c, count));
            }
        }
    }

    fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    /// Occurrence count of `c`, if it occurs at all
    pub fn get(&self, c: char) -> Option<usize> {
        self.positions.get(&c).map(|&slot| self.entries[slot].1)
    }

    /// Iterate `(character, count)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the character length of the counted value
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for CharacterFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        let mut buf = [0u8; 4];
        for (c, count) in &self.entries {
            map.serialize_entry(&*c.encode_utf8(&mut buf), count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CharacterFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FrequencyVisitor)
    }
}

struct FrequencyVisitor;

impl<'de> Visitor<'de> for FrequencyVisitor {
    type Value = CharacterFrequency;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of single characters to counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut freq = CharacterFrequency::default();
        while let Some((key, count)) = access.next_entry::<String, usize>()? {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(de::Error::invalid_value(
                        de::Unexpected::Str(&key),
                        &"a single character",
                    ))
                }
            };
            if freq.contains(c) {
                return Err(de::Error::custom(format!("duplicate character key '{}'", c)));
            }
            freq.add(c, count);
        }
        Ok(freq)
    }
}
