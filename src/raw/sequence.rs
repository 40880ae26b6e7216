use core::num::NonZero;

/// The position an entry was given when its key was first inserted.
///
/// Sequences are strictly increasing within one container and are never
/// handed out twice, even after the entry that held one is removed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub(crate) struct Sequence(NonZero<u64>);

/// Source of fresh [`Sequence`]s for a single container.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SequenceCounter {
    last: u64,
}

impl SequenceCounter {
    pub(crate) const fn new() -> Self {
        Self { last: 0 }
    }

    /// Hands out the next sequence. The first call returns 1.
    #[inline]
    pub(crate) fn advance(&mut self) -> Sequence {
        let next = self
            .last
            .checked_add(1)
            .and_then(NonZero::new)
            .expect("`SequenceCounter::advance()` - sequence numbers exhausted!");
        self.last = next.get();
        Sequence(next)
    }
}
