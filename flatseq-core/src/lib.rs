//! Flatten nested sequences into a single ordered sequence of leaves.
//!
//! Two shapes are supported. A two-level input is a sequence of sequences
//! of leaves; see [`two_level`]. A deep input nests sequences to any depth;
//! see [`deep`] and [`Nested`].
//!
//! Every flattener yields leaves in depth-first, left-to-right order and
//! implements [`Flattener`]. There is a stateful cursor and a lazy producer
//! for each shape:
//!
//! ```
//! use flatseq_core::{deep, nested, two_level, Leaf};
//!
//! let rows = vec![vec![1, 2], vec![], vec![3]];
//! let leaves = two_level::lazy(&rows).copied().collect::<Vec<_>>();
//! assert_eq!(leaves, [1, 2, 3]);
//!
//! let value = nested!([["a"], [[["b"]], []], null]);
//! let leaves = deep::depth_first(&value).collect::<Vec<_>>();
//! assert_eq!(leaves, [&Leaf::from("a"), &Leaf::from("b"), &Leaf::Null]);
//! ```

pub mod deep;
pub mod error;
pub mod json;
mod leaf;
mod nested;
mod traits;
pub mod two_level;

pub use error::{Error, Path};
pub use leaf::{display_leaves, Leaf, LeafKind};
pub use nested::Nested;
pub use traits::{is_lazy, Flattener};
