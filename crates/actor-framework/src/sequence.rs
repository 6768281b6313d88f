//! # Id Sequences
//!
//! Monotonic id allocation owned by a single actor.

/// A strictly increasing `u32` sequence starting at 1.
///
/// The sequence lives inside a `ResourceActor`, so allocation is serialized by the
/// actor's message loop and never hands out the same value twice.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next value and advances the sequence.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one_and_increments() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.next_id(), 3);
    }
}
