//! Resources grammar binding.
//!
//! The resources grammar ships as a prebuilt native archive, not a registry
//! crate, so this module declares the exported symbol directly. The archive
//! is located at link time via `TREE_SITTER_RESOURCES_LIB_DIR` (see
//! `build.rs`); a missing archive fails the link, not this code.

#![allow(unsafe_code)]

use crate::language::binding::GrammarBinding;
use canopy_domain::Language;
use tree_sitter_language::LanguageFn;

unsafe extern "C" {
    fn tree_sitter_resources() -> *const ();
}

/// The raw grammar entry point, wrapped for the tree-sitter runtime.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_resources) };

/// The out-of-tree resources grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResourcesGrammar;

impl GrammarBinding for ResourcesGrammar {
    fn language(&self) -> Language {
        Language::Resources
    }

    fn grammar(&self) -> tree_sitter::Language {
        LANGUAGE.into()
    }

    fn sample(&self) -> &'static str {
        // Grammar rules live out of tree; the empty input is the only
        // snippet every revision of the grammar accepts.
        ""
    }
}

#[cfg(test)]
mod tests {
    use canopy_domain::Language;

    use crate::loader;

    #[test]
    fn loads_grammar() {
        let report =
            loader::load_check(Language::Resources).expect("Error loading Resources grammar");
        assert!(report.node_kind_count > 0);
    }
}
