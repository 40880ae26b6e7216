use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use super::OrderedSet;

/// Upper bound on the capacity reserved from an untrusted length hint.
const MAX_PREALLOCATION: usize = 4096;

/// Serializes the set as an array in insertion order.
impl<T> Serialize for OrderedSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Deserializes an array, keeping the first occurrence of every element in the
/// order it appears.
///
/// In human-readable formats `null` yields an empty set.
impl<'de, T> Deserialize<'de> for OrderedSet<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let visitor = OrderedSetVisitor { marker: PhantomData };
        if deserializer.is_human_readable() {
            deserializer.deserialize_option(visitor)
        } else {
            deserializer.deserialize_seq(visitor)
        }
    }
}

struct OrderedSetVisitor<T> {
    marker: PhantomData<fn() -> OrderedSet<T>>,
}

impl<'de, T> Visitor<'de> for OrderedSetVisitor<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an array")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OrderedSet::new())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OrderedSet::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = OrderedSet::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATION));
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        log::trace!("deserialized ordered set with {} elements", set.len());
        Ok(set)
    }
}
