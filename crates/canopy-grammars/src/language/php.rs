//! PHP grammar binding.

use crate::language::binding::GrammarBinding;
use canopy_domain::Language;

/// PHP grammar backed by `tree-sitter-php`.
///
/// Uses the full grammar (HTML interleaving included) rather than the
/// `php_only` variant, matching how `.php` files appear in the wild.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhpGrammar;

impl GrammarBinding for PhpGrammar {
    fn language(&self) -> Language {
        Language::Php
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_php::LANGUAGE_PHP.into()
    }

    fn sample(&self) -> &'static str {
        "<?php\nfunction hello() {\n    return 1;\n}\n"
    }
}
