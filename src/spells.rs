//! Spells: the ordered, already-encoded operations a cast executes.

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// A single pre-encoded operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Target contract identifier: an address for v1 accounts, a connector name for v2.
    pub target: String,
    /// Encoded call data for the target.
    pub data: Bytes,
}

impl Spell {
    pub fn new(target: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            target: target.into(),
            data: data.into(),
        }
    }
}

/// An ordered sequence of spells queued for a single cast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spells {
    data: Vec<Spell>,
}

impl Spells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a spell. Returns `self` so calls can be chained.
    pub fn add(&mut self, spell: Spell) -> &mut Self {
        self.data.push(spell);
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spell> {
        self.data.iter()
    }

    /// Split into the parallel `targets` / `spells` sequences the account's
    /// `cast` method takes. Order is preserved and both sides have the same length.
    pub fn encode(&self) -> EncodedSpells {
        let (targets, spells) = self
            .data
            .iter()
            .map(|spell| (spell.target.clone(), spell.data.clone()))
            .unzip();
        EncodedSpells { targets, spells }
    }
}

impl From<Vec<Spell>> for Spells {
    fn from(data: Vec<Spell>) -> Self {
        Self { data }
    }
}

impl FromIterator<Spell> for Spells {
    fn from_iter<I: IntoIterator<Item = Spell>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Spells {
    type Item = &'a Spell;
    type IntoIter = std::slice::Iter<'a, Spell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Index-aligned targets and payloads produced from [`Spells`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedSpells {
    pub targets: Vec<String>,
    pub spells: Vec<Bytes>,
}
