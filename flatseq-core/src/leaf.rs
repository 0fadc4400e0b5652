use std::fmt;

use ordered_float::OrderedFloat;
use strum_macros::{Display, EnumIter};

/// A dynamically typed leaf value.
///
/// This is the leaf type produced by [`crate::json::parse`] and by the
/// [`crate::nested!`] macro. The flatteners themselves are generic and work
/// with any leaf type.
///
/// `Null`, `false`, `0` and the empty string are ordinary leaves. They are
/// emitted and counted like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Leaf {
    /// The null marker.
    Null,
    /// A boolean.
    Boolean(bool),
    /// An integer that fits in 64 bits.
    Integer(i64),
    /// Any other number.
    Float(OrderedFloat<f64>),
    /// A string. Strings are leaves, never containers.
    String(String),
}

/// The kind of a leaf value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LeafKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
}

impl Leaf {
    pub fn kind(&self) -> LeafKind {
        match self {
            Leaf::Null => LeafKind::Null,
            Leaf::Boolean(_) => LeafKind::Boolean,
            Leaf::Integer(_) => LeafKind::Integer,
            Leaf::Float(_) => LeafKind::Float,
            Leaf::String(_) => LeafKind::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Leaf::Null)
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Null => write!(f, "null"),
            Leaf::Boolean(b) => write!(f, "{}", b),
            Leaf::Integer(i) => write!(f, "{}", i),
            Leaf::Float(n) => {
                let n = n.into_inner();
                // keep floats recognizable as floats
                if n.is_finite() && n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Leaf::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Leaf {
    fn from(b: bool) -> Self {
        Leaf::Boolean(b)
    }
}

impl From<i32> for Leaf {
    fn from(i: i32) -> Self {
        Leaf::Integer(i.into())
    }
}

impl From<i64> for Leaf {
    fn from(i: i64) -> Self {
        Leaf::Integer(i)
    }
}

impl From<u32> for Leaf {
    fn from(i: u32) -> Self {
        Leaf::Integer(i.into())
    }
}

impl From<f64> for Leaf {
    fn from(n: f64) -> Self {
        Leaf::Float(OrderedFloat(n))
    }
}

impl From<&str> for Leaf {
    fn from(s: &str) -> Self {
        Leaf::String(s.to_string())
    }
}

impl From<String> for Leaf {
    fn from(s: String) -> Self {
        Leaf::String(s)
    }
}

impl<T> From<Option<T>> for Leaf
where
    T: Into<Leaf>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Leaf::Null,
        }
    }
}

/// Render leaves as a bracketed, comma separated list.
pub fn display_leaves<'a, I>(leaves: I) -> String
where
    I: IntoIterator<Item = &'a Leaf>,
{
    let rendered = leaves
        .into_iter()
        .map(|leaf| leaf.to_string())
        .collect::<Vec<_>>();
    format!("[{}]", rendered.join(", "))
}
