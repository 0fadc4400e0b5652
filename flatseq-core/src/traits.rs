use std::iter::FusedIterator;

/// The contract every flattener implements.
///
/// A flattener produces leaves in depth-first, left-to-right order, with
/// container boundaries invisible in the output. Running out of leaves is
/// signalled by `None` and is final.
pub trait Flattener: Iterator + FusedIterator {
    /// Whether leaves are computed on demand rather than held in a
    /// precomputed buffer or walked with an index cursor.
    const LAZY: bool;

    /// Check whether another leaf is available.
    ///
    /// This may skip past empty containers, but it never consumes a leaf.
    fn has_next(&mut self) -> bool;

    /// Collect all remaining leaves.
    fn rest(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.by_ref().collect()
    }
}

/// Whether a flattener is a lazy producer.
pub fn is_lazy<F: Flattener>(_flattener: &F) -> bool {
    F::LAZY
}
