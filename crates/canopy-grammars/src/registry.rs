//! Binding registry
//!
//! Maps a [`Language`] identifier to its compiled-in [`GrammarBinding`].
//! The map is built once behind a [`LazyLock`] and never mutated afterwards,
//! so lookups are lock-free and safe from any thread.

use std::collections::HashMap;
use std::sync::LazyLock;

use canopy_domain::Language;

use crate::language::GrammarBinding;

/// Grammar binding registry
static BINDINGS: LazyLock<HashMap<Language, Box<dyn GrammarBinding>>> = LazyLock::new(|| {
    let mut bindings: HashMap<Language, Box<dyn GrammarBinding>> = HashMap::new();

    #[cfg(feature = "lang-csharp")]
    bindings.insert(
        Language::CSharp,
        Box::new(crate::language::CSharpGrammar) as Box<dyn GrammarBinding>,
    );
    #[cfg(feature = "lang-java")]
    bindings.insert(
        Language::Java,
        Box::new(crate::language::JavaGrammar) as Box<dyn GrammarBinding>,
    );
    #[cfg(feature = "lang-javascript")]
    bindings.insert(
        Language::JavaScript,
        Box::new(crate::language::JavaScriptGrammar) as Box<dyn GrammarBinding>,
    );
    #[cfg(feature = "lang-kotlin")]
    bindings.insert(
        Language::Kotlin,
        Box::new(crate::language::KotlinGrammar) as Box<dyn GrammarBinding>,
    );
    #[cfg(feature = "lang-php")]
    bindings.insert(
        Language::Php,
        Box::new(crate::language::PhpGrammar) as Box<dyn GrammarBinding>,
    );
    #[cfg(feature = "lang-toml")]
    bindings.insert(
        Language::Toml,
        Box::new(crate::language::TomlGrammar) as Box<dyn GrammarBinding>,
    );
    #[cfg(feature = "lang-resources")]
    bindings.insert(
        Language::Resources,
        Box::new(crate::language::ResourcesGrammar) as Box<dyn GrammarBinding>,
    );

    bindings
});

/// Look up the binding for a language, if compiled in
pub fn get(language: Language) -> Option<&'static dyn GrammarBinding> {
    BINDINGS.get(&language).map(AsRef::as_ref)
}

/// Whether a binding for the language is compiled into this build
pub fn is_supported(language: Language) -> bool {
    BINDINGS.contains_key(&language)
}

/// Compiled-in languages, in declaration order
pub fn supported() -> Vec<Language> {
    Language::ALL
        .iter()
        .copied()
        .filter(|lang| BINDINGS.contains_key(lang))
        .collect()
}
