use std::fmt;

/// The position of an element inside a nested value.
///
/// Each entry is the index of the element within its enclosing container,
/// starting from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(pub Vec<usize>);

impl Path {
    pub(crate) fn root() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// The indices, outermost first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}

/// Errors raised while building flattener input.
///
/// Traversal itself never fails: running out of leaves is signalled by
/// `None`, not by an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A two-level row (or the root) is a leaf.
    #[error("expected a container at {path}, found a leaf")]
    NotAContainer { path: Path },
    /// A two-level row holds a container where only leaves may appear.
    #[error("expected a leaf at {path}, found a container")]
    UnexpectedContainer { path: Path },
    /// JSON objects are keyed structures and cannot be flattened.
    #[error("unsupported JSON object at {path}")]
    UnsupportedObject { path: Path },
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] json::Error),
}

impl Error {
    /// The path of the offending element, if the error has one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::NotAContainer { path }
            | Error::UnexpectedContainer { path }
            | Error::UnsupportedObject { path } => Some(path),
            Error::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
