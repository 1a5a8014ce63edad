//! Override-consistency analysis over a declared inheritance forest
//!
//! Given a set of class declarations, each with an optional parent and a
//! set of method names of which some claim to override an ancestor method,
//! this crate reports one diagnostic per claimed override whose name is
//! absent from the whole ancestor chain.
//!
//! ```
//! use checker::{check, ClassDecl};
//!
//! let diagnostics = check(vec![
//!     ClassDecl::new("Animal").method("make_sound"),
//!     ClassDecl::new("Dog").parent("Animal").override_method("make_sound"),
//!     ClassDecl::new("Cat").parent("Animal").override_method("make_noise"),
//! ])
//! .unwrap();
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics.diagnostics[0].class_name, "Cat");
//! ```

pub mod class_graph;
pub mod error;
pub mod logging;
pub mod override_checker;

pub use class_graph::{ClassDecl, ClassGraph};
pub use error::ConfigurationError;
pub use override_checker::{check, OverrideChecker, ERROR_CODE_BAD_OVERRIDE};
