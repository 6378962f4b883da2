//! Grammar binding trait
//!
//! A binding hands out the opaque grammar handle and enough metadata to
//! health-check it. The handle itself is a black box: nothing in this
//! workspace reads tree contents beyond the root node.

use canopy_domain::Language;

/// Uniform interface over one bound grammar
pub trait GrammarBinding: Send + Sync {
    /// The identifier this binding answers to
    fn language(&self) -> Language;

    /// The opaque grammar handle
    ///
    /// Never fails at runtime: a missing native symbol is a link-time
    /// failure, outside this code's detection responsibility.
    fn grammar(&self) -> tree_sitter::Language;

    /// A minimal well-formed source snippet in this language
    ///
    /// Used by the loader's load check to confirm the handle actually
    /// drives a parse.
    fn sample(&self) -> &'static str;
}
