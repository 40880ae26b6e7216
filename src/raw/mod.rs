mod raw_ordered_map;
mod sequence;
mod snapshot;

pub(crate) use raw_ordered_map::{RawEntry, RawOccupied, RawOrderedMap, RawVacant};
pub(crate) use snapshot::Snapshot;
