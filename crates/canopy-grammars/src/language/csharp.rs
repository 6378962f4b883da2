//! C# grammar binding.

use crate::language::binding::GrammarBinding;
use canopy_domain::Language;

/// C# grammar backed by `tree-sitter-c-sharp`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpGrammar;

impl GrammarBinding for CSharpGrammar {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_c_sharp::LANGUAGE.into()
    }

    fn sample(&self) -> &'static str {
        "class Program {\n    static void Main() {\n    }\n}\n"
    }
}
