//! Configuration errors for the override checker
//!
//! These are fatal to a `check` call: once the inheritance forest is known
//! to be malformed, the ancestor walk cannot be trusted, so analysis aborts
//! instead of producing partial diagnostics.

use std::error::Error;
use std::fmt;

/// A malformed inheritance forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Two class declarations share the same name
    DuplicateClass { name: String },

    /// A class names a parent that is not in the analyzed set
    UnresolvedParent { class: String, parent: String },

    /// Following parent references revisits a class before reaching a root.
    /// `path` lists the class names in walk order, ending at the repeat.
    InheritanceCycle { path: Vec<String> },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::DuplicateClass { name } => {
                write!(f, "duplicate class declaration '{}'", name)
            }
            ConfigurationError::UnresolvedParent { class, parent } => {
                write!(
                    f,
                    "class '{}' extends unknown class '{}'",
                    class, parent
                )
            }
            ConfigurationError::InheritanceCycle { path } => {
                write!(f, "inheritance cycle: {}", path.join(" -> "))
            }
        }
    }
}

impl Error for ConfigurationError {}
