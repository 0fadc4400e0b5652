use crate::deep::{self, DepthFirstIter, IntoLeaves};
use crate::error::{self, Path};

/// A value that is either a leaf or a container of further values.
///
/// Containers own their elements, so a container can never contain itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// Any non-container value.
    Leaf(T),
    /// An ordered sequence of values. May be empty.
    Container(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn container(items: Vec<Nested<T>>) -> Self {
        Nested::Container(items)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Nested::Container(_))
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Leaf(_) => None,
            Nested::Container(items) => Some(items),
        }
    }

    /// The number of leaves reachable from this value.
    ///
    /// This is the number of items any flattener produces for it.
    pub fn leaf_count(&self) -> usize {
        self.iter().count()
    }

    /// The nesting depth.
    ///
    /// A leaf has depth 0. A container is one deeper than its deepest
    /// element, so an empty container has depth 1.
    pub fn depth(&self) -> usize {
        // walk with an explicit stack so very deep values don't overflow
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((value, depth)) = stack.pop() {
            if let Nested::Container(items) = value {
                deepest = deepest.max(depth + 1);
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
        }
        deepest
    }

    /// Lazily iterate over the leaves, depth-first.
    pub fn iter(&self) -> DepthFirstIter<'_, T> {
        DepthFirstIter::new(self)
    }

    /// Lazily iterate over the leaves, depth-first, taking ownership.
    pub fn into_leaves(self) -> IntoLeaves<T> {
        IntoLeaves::new(self)
    }

    /// Collect all leaves, depth-first.
    pub fn flatten(&self) -> Vec<&T> {
        deep::flatten_recursive(self)
    }

    /// View this value as a two-level input: a container of containers of
    /// leaves.
    ///
    /// Fails at the first element that does not fit that shape.
    pub fn to_rows(&self) -> error::Result<Vec<Vec<&T>>> {
        let rows = self
            .as_container()
            .ok_or(error::Error::NotAContainer { path: Path::root() })?;
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.as_container().ok_or(error::Error::NotAContainer {
                    path: vec![i].into(),
                })?;
                row.iter()
                    .enumerate()
                    .map(|(j, item)| match item {
                        Nested::Leaf(value) => Ok(value),
                        Nested::Container(_) => Err(error::Error::UnexpectedContainer {
                            path: vec![i, j].into(),
                        }),
                    })
                    .collect::<error::Result<Vec<_>>>()
            })
            .collect()
    }

    /// Like [`Nested::to_rows`], taking ownership.
    pub fn into_rows(self) -> error::Result<Vec<Vec<T>>> {
        let rows = match self {
            Nested::Leaf(_) => {
                return Err(error::Error::NotAContainer { path: Path::root() });
            }
            Nested::Container(rows) => rows,
        };
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let row = match row {
                    Nested::Leaf(_) => {
                        return Err(error::Error::NotAContainer {
                            path: vec![i].into(),
                        })
                    }
                    Nested::Container(row) => row,
                };
                row.into_iter()
                    .enumerate()
                    .map(|(j, item)| match item {
                        Nested::Leaf(value) => Ok(value),
                        Nested::Container(_) => Err(error::Error::UnexpectedContainer {
                            path: vec![i, j].into(),
                        }),
                    })
                    .collect::<error::Result<Vec<_>>>()
            })
            .collect()
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::Container(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Nested<T> {
    type Item = &'a T;
    type IntoIter = DepthFirstIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Nested<T> {
    type Item = T;
    type IntoIter = IntoLeaves<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_leaves()
    }
}

/// Build a `Nested<Leaf>` from an array literal.
///
/// Arrays become containers, `null` becomes [`crate::Leaf::Null`] and any
/// other token is converted with `Into<Leaf>`. Negative numbers and other
/// multi-token expressions need parentheses.
///
/// ```
/// use flatseq_core::{nested, Leaf};
///
/// let value = nested!([["a", (-1)], [null, false, []]]);
/// assert_eq!(value.leaf_count(), 4);
/// assert_eq!(value.flatten()[2], &Leaf::Null);
/// ```
#[macro_export]
macro_rules! nested {
    ([ $($item:tt),* $(,)? ]) => {
        $crate::Nested::<$crate::Leaf>::Container(vec![$($crate::nested!($item)),*])
    };
    (null) => {
        $crate::Nested::<$crate::Leaf>::Leaf($crate::Leaf::Null)
    };
    ($value:tt) => {
        $crate::Nested::<$crate::Leaf>::Leaf($crate::Leaf::from($value))
    };
}
