//! TOML grammar binding.

use crate::language::binding::GrammarBinding;
use canopy_domain::Language;

/// TOML grammar backed by `tree-sitter-toml-ng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlGrammar;

impl GrammarBinding for TomlGrammar {
    fn language(&self) -> Language {
        Language::Toml
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_toml_ng::LANGUAGE.into()
    }

    fn sample(&self) -> &'static str {
        "[package]\nname = \"canopy\"\n"
    }
}
