use alloc::vec::{self, Vec};
use core::iter::FusedIterator;

use super::sequence::Sequence;

/// Entries of a container materialized in insertion order.
///
/// Built by tagging every entry with its [`Sequence`] and sorting once, so the
/// snapshot is independent of the hash table it was taken from.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot<T> {
    entries: vec::IntoIter<(Sequence, T)>,
}

impl<T> Snapshot<T> {
    pub(crate) fn from_unsorted(mut entries: Vec<(Sequence, T)>) -> Self {
        // Sequences are unique, so an unstable sort is deterministic.
        entries.sort_unstable_by_key(|&(sequence, _)| sequence);
        Self {
            entries: entries.into_iter(),
        }
    }

    /// The entries not yet yielded, without consuming them.
    pub(crate) fn remaining(&self) -> impl Iterator<Item = &T> {
        self.entries.as_slice().iter().map(|(_, entry)| entry)
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new().into_iter(),
        }
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.entries.next().map(|(_, entry)| entry)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.entries.next_back().map(|(_, entry)| entry)
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> FusedIterator for Snapshot<T> {}
