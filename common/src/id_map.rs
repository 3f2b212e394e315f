//! Entries keyed by small integer ids, e.g. the columns of a side-by-side comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type Id = u32;

/// Highest id an entry may carry, in URLs and in allocation.
pub const MAX_ID: Id = 999_999;

/// Ids are never renumbered; a new entry gets `max + 1`, or `0` when the map is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdMap<T>(BTreeMap<Id, T>);

impl<T> Default for IdMap<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T: Clone> IdMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` once the highest id is taken.
    pub fn next_id(&self) -> Option<Id> {
        match self.0.last_key_value() {
            None => Some(0),
            Some((id, _)) => id.checked_add(1).filter(|next| *next <= MAX_ID),
        }
    }

    /// Returns the new map and the id assigned to `value`, or `None` when no id is left.
    pub fn with_added(&self, value: T) -> Option<(Self, Id)> {
        let id = self.next_id()?;
        let mut entries = self.0.clone();
        entries.insert(id, value);
        Some((Self(entries), id))
    }

    pub fn with_replaced(&self, id: Id, value: T) -> Self {
        let mut entries = self.0.clone();
        entries.insert(id, value);
        Self(entries)
    }

    pub fn without(&self, id: Id) -> Self {
        let mut entries = self.0.clone();
        entries.remove(&id);
        Self(entries)
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.0.get(&id)
    }

    /// Ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> {
        self.0.iter().map(|(id, value)| (*id, value))
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> FromIterator<(Id, T)> for IdMap<T> {
    fn from_iter<I: IntoIterator<Item = (Id, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_id_is_zero() {
        let map = IdMap::<&str>::new();
        assert_eq!(map.next_id(), Some(0));
        let (map, id) = map.with_added("JN.1").unwrap();
        assert_eq!(id, 0);
        assert_eq!(map.get(0), Some(&"JN.1"));
    }

    #[test]
    fn removal_does_not_renumber() {
        let map: IdMap<&str> = [(0, "a"), (1, "b"), (2, "c")].into_iter().collect();
        let map = map.without(1);
        assert_eq!(map.ids().collect::<Vec<_>>(), vec![0, 2]);

        let (map, id) = map.with_added("d").unwrap();
        assert_eq!(id, 3);
        assert_eq!(map.ids().collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn removing_the_highest_id_frees_it() {
        let map: IdMap<&str> = [(0, "a"), (5, "b")].into_iter().collect();
        assert_eq!(map.without(5).next_id(), Some(1));
        assert_eq!(map.without(5).without(0).next_id(), Some(0));
    }

    #[test]
    fn exhausted_ids_refuse_new_entries() {
        let map: IdMap<u8> = [(0, 0), (MAX_ID, 1)].into_iter().collect();
        assert_eq!(map.next_id(), None);
        assert_eq!(map.with_added(2), None);

        let map: IdMap<u8> = [(Id::MAX, 1)].into_iter().collect();
        assert_eq!(map.next_id(), None);
    }

    #[test]
    fn replacing_keeps_the_original_untouched() {
        let map: IdMap<&str> = [(0, "a")].into_iter().collect();
        let replaced = map.with_replaced(0, "b");
        assert_eq!(map.get(0), Some(&"a"));
        assert_eq!(replaced.get(0), Some(&"b"));
    }
}
