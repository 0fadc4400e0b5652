//! Flattening values nested to any depth.
//!
//! [`PrecomputedIter`] flattens everything up front and then walks the
//! result. [`DepthFirstIter`] and [`IntoLeaves`] produce one leaf at a time,
//! keeping a stack with one frame per container being visited.

use std::iter::FusedIterator;

use crate::nested::Nested;
use crate::traits::Flattener;

/// Recursively collect the leaves of a value, depth-first.
pub(crate) fn flatten_recursive<T>(value: &Nested<T>) -> Vec<&T> {
    let mut result = Vec::new();
    flatten_into(value, &mut result);
    result
}

fn flatten_into<'a, T>(value: &'a Nested<T>, result: &mut Vec<&'a T>) {
    match value {
        Nested::Leaf(leaf) => result.push(leaf),
        Nested::Container(items) => {
            for item in items {
                flatten_into(item, result);
            }
        }
    }
}

/// A cursor over leaves flattened at construction time.
#[derive(Debug, Clone)]
pub struct PrecomputedIter<'a, T> {
    leaves: Vec<&'a T>,
    index: usize,
}

impl<'a, T> PrecomputedIter<'a, T> {
    pub fn new(value: &'a Nested<T>) -> Self {
        let leaves = flatten_recursive(value);
        tracing::debug!(leaves = leaves.len(), "precomputed flattened leaves");
        Self { leaves, index: 0 }
    }

    /// All leaves, including those already produced.
    pub fn leaves(&self) -> &[&'a T] {
        &self.leaves
    }
}

impl<'a, T> Iterator for PrecomputedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let leaf = self.leaves.get(self.index).copied()?;
        self.index += 1;
        Some(leaf)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.leaves.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PrecomputedIter<'_, T> {}

impl<T> FusedIterator for PrecomputedIter<'_, T> {}

impl<T> Flattener for PrecomputedIter<'_, T> {
    const LAZY: bool = false;

    fn has_next(&mut self) -> bool {
        self.index < self.leaves.len()
    }
}

/// Flatten a value up front and cursor over the result.
pub fn precomputed<T>(value: &Nested<T>) -> PrecomputedIter<'_, T> {
    PrecomputedIter::new(value)
}

/// A lazy depth-first producer over a borrowed value.
///
/// Memory use is proportional to the nesting depth, not the number of
/// leaves.
#[derive(Debug, Clone)]
pub struct DepthFirstIter<'a, T> {
    stack: Vec<std::slice::Iter<'a, Nested<T>>>,
}

impl<'a, T> DepthFirstIter<'a, T> {
    pub fn new(value: &'a Nested<T>) -> Self {
        // the root is a frame of one, so a root leaf is produced directly
        Self {
            stack: vec![std::slice::from_ref(value).iter()],
        }
    }

    /// The number of frames currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, T> Iterator for DepthFirstIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.next() {
                Some(Nested::Leaf(leaf)) => return Some(leaf),
                Some(Nested::Container(items)) => {
                    tracing::trace!(len = items.len(), depth = self.stack.len(), "enter");
                    self.stack.push(items.iter());
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every remaining element of the innermost frame may be an empty
        // container, so only emptiness gives a useful bound
        if self.stack.iter().all(|frame| frame.len() == 0) {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<T> FusedIterator for DepthFirstIter<'_, T> {}

impl<T> Flattener for DepthFirstIter<'_, T> {
    const LAZY: bool = true;

    fn has_next(&mut self) -> bool {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                return false;
            };
            match frame.as_slice().first() {
                Some(Nested::Leaf(_)) => return true,
                Some(Nested::Container(items)) => {
                    frame.next();
                    self.stack.push(items.iter());
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Flatten a borrowed value lazily.
pub fn depth_first<T>(value: &Nested<T>) -> DepthFirstIter<'_, T> {
    DepthFirstIter::new(value)
}

/// A lazy depth-first producer that takes ownership of the value.
#[derive(Debug, Clone)]
pub struct IntoLeaves<T> {
    stack: Vec<std::vec::IntoIter<Nested<T>>>,
}

impl<T> IntoLeaves<T> {
    pub fn new(value: Nested<T>) -> Self {
        Self {
            stack: vec![vec![value].into_iter()],
        }
    }
}

impl<T> Iterator for IntoLeaves<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.next() {
                Some(Nested::Leaf(leaf)) => return Some(leaf),
                Some(Nested::Container(items)) => {
                    tracing::trace!(len = items.len(), depth = self.stack.len(), "enter");
                    self.stack.push(items.into_iter());
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.iter().all(|frame| frame.len() == 0) {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<T> FusedIterator for IntoLeaves<T> {}

impl<T> Flattener for IntoLeaves<T> {
    const LAZY: bool = true;

    fn has_next(&mut self) -> bool {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                return false;
            };
            match frame.as_slice().first() {
                Some(Nested::Leaf(_)) => return true,
                Some(Nested::Container(_)) => {
                    if let Some(Nested::Container(items)) = frame.next() {
                        self.stack.push(items.into_iter());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
