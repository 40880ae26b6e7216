use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::Hash;
use core::mem;

use hashbrown::HashMap;
use hashbrown::hash_map::{self, DefaultHashBuilder};

use super::sequence::{Sequence, SequenceCounter};
use super::snapshot::Snapshot;

/// A stored value together with the sequence its key was first inserted at.
#[derive(Clone, Debug)]
pub(crate) struct Slot<V> {
    pub(crate) sequence: Sequence,
    pub(crate) value: V,
}

/// The hash table backing `OrderedMap` and, through it, `OrderedSet`.
///
/// Order is not stored explicitly: every slot remembers its [`Sequence`] and
/// ordered views are produced by sorting on demand.
#[derive(Clone, Debug)]
pub(crate) struct RawOrderedMap<K, V> {
    /// Key to slot lookup.
    table: HashMap<K, Slot<V>>,
    /// Source of sequences for keys that are not present yet.
    counter: SequenceCounter,
}

/// A vacant position in the table, paired with the counter that will number it.
pub(crate) struct RawVacant<'a, K, V> {
    pub(crate) entry: hash_map::VacantEntry<'a, K, Slot<V>, DefaultHashBuilder>,
    pub(crate) counter: &'a mut SequenceCounter,
}

/// An occupied position in the table.
pub(crate) type RawOccupied<'a, K, V> = hash_map::OccupiedEntry<'a, K, Slot<V>, DefaultHashBuilder>;

/// Result of [`RawOrderedMap::entry`].
pub(crate) enum RawEntry<'a, K, V> {
    Occupied(RawOccupied<'a, K, V>),
    Vacant(RawVacant<'a, K, V>),
}

impl<'a, K: Hash, V> RawVacant<'a, K, V> {
    /// Fills the position, numbering it after every key inserted so far.
    pub(crate) fn insert(self, value: V) -> &'a mut V {
        let sequence = self.counter.advance();
        &mut self.entry.insert(Slot { sequence, value }).value
    }
}

impl<K, V> RawOrderedMap<K, V> {
    /// Creates a new, empty table.
    pub(crate) fn new() -> Self {
        Self {
            table: HashMap::new(),
            counter: SequenceCounter::new(),
        }
    }

    /// Creates a new table with room for at least `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashMap::with_capacity(capacity),
            counter: SequenceCounter::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes every entry. The counter keeps going so sequences stay unique.
    pub(crate) fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.table.retain(|key, slot| f(key, &mut slot.value));
    }

    /// All entries in insertion order.
    pub(crate) fn snapshot(&self) -> Snapshot<(&K, &V)> {
        Snapshot::from_unsorted(self.table.iter().map(|(key, slot)| (slot.sequence, (key, &slot.value))).collect())
    }

    /// All entries in insertion order, with mutable access to the values.
    pub(crate) fn snapshot_mut(&mut self) -> Snapshot<(&K, &mut V)> {
        Snapshot::from_unsorted(
            self.table
                .iter_mut()
                .map(|(key, slot)| (slot.sequence, (key, &mut slot.value)))
                .collect(),
        )
    }

    /// Consumes the table, yielding owned entries in insertion order.
    pub(crate) fn into_snapshot(self) -> Snapshot<(K, V)> {
        Snapshot::from_unsorted(self.table.into_iter().map(|(key, slot)| (slot.sequence, (key, slot.value))).collect())
    }

    /// The earliest inserted entry still present.
    pub(crate) fn first(&self) -> Option<(&K, &V)> {
        self.table.iter().min_by_key(|(_, slot)| slot.sequence).map(|(key, slot)| (key, &slot.value))
    }

    /// The most recently inserted entry still present.
    pub(crate) fn last(&self) -> Option<(&K, &V)> {
        self.table.iter().max_by_key(|(_, slot)| slot.sequence).map(|(key, slot)| (key, &slot.value))
    }
}

impl<K: Hash + Eq, V> RawOrderedMap<K, V> {
    /// Inserts `value` under `key`.
    ///
    /// A present key keeps its sequence and has its value swapped; the previous
    /// value is returned. An absent key is numbered after every earlier key.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.table.entry(key) {
            hash_map::Entry::Occupied(mut occupied) => Some(mem::replace(&mut occupied.get_mut().value, value)),
            hash_map::Entry::Vacant(vacant) => {
                let sequence = self.counter.advance();
                vacant.insert(Slot { sequence, value });
                None
            }
        }
    }

    pub(crate) fn entry(&mut self, key: K) -> RawEntry<'_, K, V> {
        match self.table.entry(key) {
            hash_map::Entry::Occupied(occupied) => RawEntry::Occupied(occupied),
            hash_map::Entry::Vacant(entry) => RawEntry::Vacant(RawVacant {
                entry,
                counter: &mut self.counter,
            }),
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get(key).map(|slot| &slot.value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get_mut(key).map(|slot| &mut slot.value)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get_key_value(key).map(|(key, slot)| (key, &slot.value))
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.contains_key(key)
    }

    /// Removes `key` and returns its entry. Its sequence is retired for good.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.remove_entry(key).map(|(key, slot)| (key, slot.value))
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }
}
