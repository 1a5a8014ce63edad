//! Class declaration graph for override analysis
//!
//! Classes are modeled as plain declaration records linked into a named
//! inheritance forest: each class optionally names its parent, and the
//! ancestor chain is derived by following those references. The checker
//! never inspects live method bindings, only declared names.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A single class declaration: name, optional parent, declared methods,
/// and the subset of methods that claim to override an ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class name, unique within the analyzed set
    pub name: String,

    /// Parent class name; `None` for a root class
    #[serde(default)]
    pub parent: Option<String>,

    /// Method names declared directly on this class, in declaration order
    #[serde(default)]
    pub methods: IndexSet<String>,

    /// Methods marked as intending to override an ancestor method
    #[serde(default)]
    pub claimed_overrides: IndexSet<String>,
}

impl ClassDecl {
    /// Create a root class declaration with no methods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            methods: IndexSet::new(),
            claimed_overrides: IndexSet::new(),
        }
    }

    /// Set the parent class name
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declare a method on this class
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.methods.insert(name.into());
        self
    }

    /// Declare a method that claims to override an ancestor method
    pub fn override_method(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.methods.insert(name.clone());
        self.claimed_overrides.insert(name);
        self
    }

    /// Whether this class declares a method with the given name
    pub fn declares_method(&self, name: &str) -> bool {
        self.methods.contains(name)
    }
}

/// An inheritance forest of class declarations, keyed by class name.
///
/// Iteration order follows the order declarations were supplied in, which
/// in turn fixes the order of emitted diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ClassGraph {
    classes: IndexMap<String, ClassDecl>,
}

impl ClassGraph {
    /// Build a graph from a sequence of declarations.
    ///
    /// Fails with `ConfigurationError::DuplicateClass` if two declarations
    /// share a name. A claimed override missing from `methods` is
    /// normalized into `methods` here, so the subset invariant holds by
    /// construction.
    pub fn build(
        decls: impl IntoIterator<Item = ClassDecl>,
    ) -> Result<Self, ConfigurationError> {
        let mut classes = IndexMap::new();

        for mut decl in decls {
            for claimed in &decl.claimed_overrides {
                if !decl.methods.contains(claimed) {
                    decl.methods.insert(claimed.clone());
                }
            }

            if classes.contains_key(&decl.name) {
                return Err(ConfigurationError::DuplicateClass {
                    name: decl.name,
                });
            }
            classes.insert(decl.name.clone(), decl);
        }

        Ok(Self { classes })
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(name)
    }

    /// All class declarations, in input order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over the ancestors of a class, nearest parent first.
    ///
    /// The iterator stops at the first unresolved parent reference; callers
    /// that need the forest invariant checked should validate through the
    /// override checker, which reports unresolved parents and cycles as
    /// configuration errors before walking.
    pub fn ancestors<'a>(&'a self, class: &'a ClassDecl) -> AncestorIter<'a> {
        AncestorIter {
            graph: self,
            next: class.parent.as_deref(),
        }
    }
}

/// Iterator over a class's ancestor chain, nearest parent first
pub struct AncestorIter<'a> {
    graph: &'a ClassGraph,
    next: Option<&'a str>,
}

impl<'a> Iterator for AncestorIter<'a> {
    type Item = &'a ClassDecl;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.next?;
        let decl = self.graph.get(name)?;
        self.next = decl.parent.as_deref();
        Some(decl)
    }
}
