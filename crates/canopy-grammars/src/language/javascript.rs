//! JavaScript grammar binding.

use crate::language::binding::GrammarBinding;
use canopy_domain::Language;

/// JavaScript grammar backed by `tree-sitter-javascript`.
///
/// Covers the `js`/`jsx`/`cjs`/`mjs` family; TypeScript is a separate
/// grammar and is deliberately not bound here.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaScriptGrammar;

impl GrammarBinding for JavaScriptGrammar {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn sample(&self) -> &'static str {
        "function hello() {\n  return 1;\n}\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    #[test]
    fn loads_grammar() {
        let report =
            loader::load_check(Language::JavaScript).expect("Error loading JavaScript grammar");
        assert!(report.node_kind_count > 0);
    }

    #[test]
    fn parses_sample() {
        let mut parser = loader::parser_for(Language::JavaScript).unwrap();
        let tree = parser.parse(JavaScriptGrammar.sample(), None).unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }
}
