//! Override-consistency analysis
//!
//! The `OverrideChecker` walks a validated class graph and reports every
//! claimed-override method whose name is absent from the whole ancestor
//! chain of its class. A claimed override on a root class is always
//! reported, since the chain is vacuous.
//!
//! Diagnostics are the normal output of the check and are returned, never
//! raised, so a caller sees all mismatches at once. A malformed forest
//! (unresolved parent, cycle) is a `ConfigurationError` instead and aborts
//! the check before any diagnostic is produced.

use diagnostics::{DiagnosticBuilder, Diagnostics};
use fxhash::FxHashSet;
use log::{debug, info, trace};

use crate::class_graph::{ClassDecl, ClassGraph};
use crate::error::ConfigurationError;

/// Error code for a claimed override with no matching ancestor method
pub const ERROR_CODE_BAD_OVERRIDE: &str = "E2510";

/// Override-consistency checker over a prebuilt class graph
pub struct OverrideChecker<'a> {
    graph: &'a ClassGraph,
}

impl<'a> OverrideChecker<'a> {
    /// Create a checker for the given class graph
    pub fn new(graph: &'a ClassGraph) -> Self {
        Self { graph }
    }

    /// Run the analysis.
    ///
    /// Diagnostics are emitted in deterministic order: classes in input
    /// order, claimed overrides in declaration order.
    pub fn check(&self) -> Result<Diagnostics, ConfigurationError> {
        info!(
            "checking override consistency for {} classes",
            self.graph.len()
        );

        // Validate the whole forest first, so a broken parent reference or
        // cycle anywhere aborts without partial diagnostics.
        for class in self.graph.classes() {
            self.validate_chain(class)?;
        }

        let mut diagnostics = Diagnostics::new();

        for class in self.graph.classes() {
            if class.claimed_overrides.is_empty() {
                continue;
            }
            debug!(
                "class '{}': {} claimed override(s)",
                class.name,
                class.claimed_overrides.len()
            );

            for method in &class.claimed_overrides {
                if self.ancestor_declares(class, method) {
                    trace!("'{}.{}' matches an ancestor method", class.name, method);
                    continue;
                }

                diagnostics.push(
                    DiagnosticBuilder::error(
                        &class.name,
                        method,
                        format!(
                            "method '{}' in class '{}' does not override any ancestor method",
                            method, class.name
                        ),
                    )
                    .code(ERROR_CODE_BAD_OVERRIDE)
                    .note(match &class.parent {
                        Some(parent) => {
                            format!("no class in the ancestor chain of '{}' (starting at '{}') declares '{}'", class.name, parent, method)
                        }
                        None => {
                            format!("class '{}' has no parent class", class.name)
                        }
                    })
                    .help("remove the override marker, or rename the method to match the ancestor declaration")
                    .build(),
                );
            }
        }

        info!("override check produced {} diagnostic(s)", diagnostics.len());
        Ok(diagnostics)
    }

    /// Walk the ancestor chain of `class`, checking that every parent
    /// reference resolves and that no class repeats before a root.
    fn validate_chain(&self, class: &ClassDecl) -> Result<(), ConfigurationError> {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut path: Vec<String> = vec![class.name.clone()];
        visited.insert(class.name.as_str());

        let mut current = class;
        while let Some(parent_name) = current.parent.as_deref() {
            let parent = self.graph.get(parent_name).ok_or_else(|| {
                ConfigurationError::UnresolvedParent {
                    class: current.name.clone(),
                    parent: parent_name.to_string(),
                }
            })?;

            path.push(parent.name.clone());
            if !visited.insert(parent.name.as_str()) {
                return Err(ConfigurationError::InheritanceCycle { path });
            }
            current = parent;
        }

        Ok(())
    }

    /// Whether any ancestor of `class` declares a method named `method`
    fn ancestor_declares(&self, class: &ClassDecl, method: &str) -> bool {
        self.graph
            .ancestors(class)
            .any(|ancestor| ancestor.declares_method(method))
    }
}

/// Convenience entry point: build a graph from declarations and check it.
pub fn check(
    decls: impl IntoIterator<Item = ClassDecl>,
) -> Result<Diagnostics, ConfigurationError> {
    let graph = ClassGraph::build(decls)?;
    OverrideChecker::new(&graph).check()
}
