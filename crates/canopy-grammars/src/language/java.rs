//! Java grammar binding.

use crate::language::binding::GrammarBinding;
use canopy_domain::Language;

/// Java grammar backed by `tree-sitter-java`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaGrammar;

impl GrammarBinding for JavaGrammar {
    fn language(&self) -> Language {
        Language::Java
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_java::LANGUAGE.into()
    }

    fn sample(&self) -> &'static str {
        "class Main {\n    void run() {\n    }\n}\n"
    }
}
