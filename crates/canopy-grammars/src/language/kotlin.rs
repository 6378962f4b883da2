//! Kotlin grammar binding.

use crate::language::binding::GrammarBinding;
use canopy_domain::Language;

/// Kotlin grammar backed by `tree-sitter-kotlin-ng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KotlinGrammar;

impl GrammarBinding for KotlinGrammar {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_kotlin_ng::LANGUAGE.into()
    }

    fn sample(&self) -> &'static str {
        "fun main() {\n    println(\"hello\")\n}\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    #[test]
    fn loads_grammar() {
        let report = loader::load_check(Language::Kotlin).expect("Error loading Kotlin grammar");
        assert!(report.node_kind_count > 0);
    }

    #[test]
    fn parses_sample() {
        let mut parser = loader::parser_for(Language::Kotlin).unwrap();
        let tree = parser.parse(KotlinGrammar.sample(), None).unwrap();
        assert!(!tree.root_node().has_error());
    }
}
