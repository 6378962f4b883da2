//! # Canopy Grammars
//!
//! Tree-sitter grammar bindings behind one uniform, typed API. Each bound
//! language contributes a module implementing [`GrammarBinding`]; the
//! [`registry`] maps a [`Language`] identifier to its binding and the
//! [`loader`] turns a binding into a configured [`tree_sitter::Parser`].
//!
//! ## Feature Flags
//!
//! Each grammar can be enabled/disabled for minimal builds:
//!
//! ```toml
//! [dependencies]
//! canopy-grammars = { version = "0.1", default-features = false, features = ["lang-kotlin"] }
//! ```
//!
//! `lang-all` (the default) enables every registry-crate grammar. The
//! `lang-resources` binding is opt-in: its grammar is an out-of-tree native
//! archive that must be present at link time.
//!
//! ## Usage
//!
//! ```ignore
//! use canopy_grammars::{loader, Language};
//!
//! let mut parser = loader::parser_for(Language::Kotlin)?;
//! let tree = parser.parse("fun main() {}", None);
//! ```

// Re-export canopy-domain types commonly used with the bindings
pub use canopy_domain::{Error, Language, Result};

/// Grammar binding modules, one per language
pub mod language;

/// Parser construction and grammar load checks
pub mod loader;

/// Binding registry keyed by [`Language`]
pub mod registry;

pub use language::GrammarBinding;
pub use loader::{GrammarReport, load_check, load_check_all, parser_for};
