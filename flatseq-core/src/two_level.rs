//! Flattening a sequence of sequences.
//!
//! Two strategies: [`CursorIter`] walks a slice of rows with an outer and an
//! inner index, and [`LazyIter`] pulls rows from any iterator only when the
//! current one runs out.

use std::iter::{Fuse, FusedIterator, Peekable};
use std::marker::PhantomData;

use crate::traits::Flattener;

/// A cursor over a slice of rows.
///
/// Each row is anything that can be viewed as a slice of leaves: `Vec<T>`,
/// `&[T]`, `[T; N]`.
pub struct CursorIter<'a, S, T> {
    rows: &'a [S],
    outer: usize,
    inner: usize,
    remaining: usize,
    leaf: PhantomData<&'a T>,
}

impl<'a, S, T> CursorIter<'a, S, T>
where
    S: AsRef<[T]>,
{
    pub fn new(rows: &'a [S]) -> Self {
        let remaining = rows.iter().map(|row| row.as_ref().len()).sum();
        Self {
            rows,
            outer: 0,
            inner: 0,
            remaining,
            leaf: PhantomData,
        }
    }

    /// The current position as `(row, index within row)`.
    pub fn position(&self) -> (usize, usize) {
        (self.outer, self.inner)
    }
}

impl<'a, S, T> Iterator for CursorIter<'a, S, T>
where
    S: AsRef<[T]>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let rows: &'a [S] = self.rows;
        // a loop, not a recursive retry: runs of empty rows cost no stack
        loop {
            let row = rows.get(self.outer)?.as_ref();
            if let Some(item) = row.get(self.inner) {
                self.inner += 1;
                self.remaining -= 1;
                return Some(item);
            }
            self.outer += 1;
            self.inner = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S, T> ExactSizeIterator for CursorIter<'_, S, T> where S: AsRef<[T]> {}

impl<S, T> FusedIterator for CursorIter<'_, S, T> where S: AsRef<[T]> {}

impl<S, T> Flattener for CursorIter<'_, S, T>
where
    S: AsRef<[T]>,
{
    const LAZY: bool = false;

    fn has_next(&mut self) -> bool {
        loop {
            match self.rows.get(self.outer) {
                None => return false,
                Some(row) if self.inner < row.as_ref().len() => return true,
                Some(_) => {
                    self.outer += 1;
                    self.inner = 0;
                }
            }
        }
    }
}

/// Flatten rows with a cursor.
pub fn cursor<S, T>(rows: &[S]) -> CursorIter<'_, S, T>
where
    S: AsRef<[T]>,
{
    CursorIter::new(rows)
}

/// A lazy producer over rows pulled from an iterator.
///
/// The next row is only requested once the current one is exhausted. Nothing
/// is buffered beyond a single lookahead leaf, and only when
/// [`Flattener::has_next`] asks for it.
pub struct LazyIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    rows: Fuse<I>,
    current: Option<Peekable<<I::Item as IntoIterator>::IntoIter>>,
}

impl<I> LazyIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    pub fn new(rows: I) -> Self {
        Self {
            rows: rows.fuse(),
            current: None,
        }
    }
}

impl<I> Iterator for LazyIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let row = self.rows.next()?;
            self.current = Some(row.into_iter().peekable());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = match &self.current {
            Some(current) => current.size_hint(),
            None => (0, Some(0)),
        };
        // rows still to come may hold any number of leaves, unless there
        // are no rows left at all
        match self.rows.size_hint() {
            (0, Some(0)) => (lower, upper),
            _ => (lower, None),
        }
    }
}

impl<I> FusedIterator for LazyIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
}

impl<I> Flattener for LazyIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    const LAZY: bool = true;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(current) = &mut self.current {
                if current.peek().is_some() {
                    return true;
                }
                self.current = None;
            }
            match self.rows.next() {
                Some(row) => self.current = Some(row.into_iter().peekable()),
                None => return false,
            }
        }
    }
}

/// Flatten rows lazily.
///
/// Each call produces a fresh, independent producer.
pub fn lazy<R>(rows: R) -> LazyIter<R::IntoIter>
where
    R: IntoIterator,
    R::Item: IntoIterator,
{
    LazyIter::new(rows.into_iter())
}
