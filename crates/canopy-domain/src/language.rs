//! Language identifiers and their static metadata
//!
//! [`Language`] is the key every other crate in the workspace is indexed by.
//! A variant existing here does not mean its grammar is compiled into a given
//! build; it only means the identifier is known. Whether a binding is present
//! is a property of the `canopy-grammars` registry and its feature flags.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Languages Canopy knows how to bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C# via `tree_sitter_c_sharp`
    CSharp,
    /// Java via `tree_sitter_java`
    Java,
    /// JavaScript via `tree_sitter_javascript`
    JavaScript,
    /// Kotlin via `tree_sitter_kotlin`
    Kotlin,
    /// PHP via `tree_sitter_php`
    Php,
    /// TOML via `tree_sitter_toml`
    Toml,
    /// The out-of-tree `resources` grammar via `tree_sitter_resources`
    Resources,
}

impl Language {
    /// Every known language, in stable declaration order
    pub const ALL: &'static [Language] = &[
        Language::CSharp,
        Language::Java,
        Language::JavaScript,
        Language::Kotlin,
        Language::Php,
        Language::Toml,
        Language::Resources,
    ];

    /// Display name, used verbatim in grammar load failure messages
    pub fn name(self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Kotlin => "Kotlin",
            Language::Php => "PHP",
            Language::Toml => "TOML",
            Language::Resources => "Resources",
        }
    }

    /// The C symbol the native grammar exports
    pub fn entry_point(self) -> &'static str {
        match self {
            Language::CSharp => "tree_sitter_c_sharp",
            Language::Java => "tree_sitter_java",
            Language::JavaScript => "tree_sitter_javascript",
            Language::Kotlin => "tree_sitter_kotlin",
            Language::Php => "tree_sitter_php",
            Language::Toml => "tree_sitter_toml",
            Language::Resources => "tree_sitter_resources",
        }
    }

    /// File extensions associated with the language
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::CSharp => &["cs"],
            Language::Java => &["java"],
            Language::JavaScript => &["js", "jsx", "cjs", "mjs"],
            Language::Kotlin => &["kt", "kts"],
            Language::Php => &["php", "phps", "phtml", "pht"],
            Language::Toml => &["toml"],
            // The resources grammar parses embedded snippets, not files.
            Language::Resources => &[],
        }
    }

    /// Canonical extension, where the language has one
    pub fn default_extension(self) -> Option<&'static str> {
        self.extensions().first().copied()
    }

    /// Detect a language from a bare file extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Language> {
        if extension.is_empty() {
            return None;
        }
        let ext = extension.to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Language::CSharp => "csharp",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Kotlin => "kotlin",
            Language::Php => "php",
            Language::Toml => "toml",
            Language::Resources => "resources",
        };
        write!(f, "{id}")
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "java" => Ok(Language::Java),
            "javascript" | "js" => Ok(Language::JavaScript),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "php" => Ok(Language::Php),
            "toml" => Ok(Language::Toml),
            "resources" => Ok(Language::Resources),
            _ => Err(Error::UnsupportedLanguage {
                language: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_language_from_extension() {
        assert_eq!(Language::from_extension("cs"), Some(Language::CSharp));
        assert_eq!(Language::from_extension("java"), Some(Language::Java));
        assert_eq!(Language::from_extension("mjs"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("kts"), Some(Language::Kotlin));
        assert_eq!(Language::from_extension("phtml"), Some(Language::Php));
        assert_eq!(Language::from_extension("toml"), Some(Language::Toml));
        assert_eq!(Language::from_extension("KT"), Some(Language::Kotlin));
        assert_eq!(Language::from_extension("rs"), None);
        assert_eq!(Language::from_extension(""), None);
    }

    #[test]
    fn parses_ids_and_aliases() {
        assert_eq!("kotlin".parse::<Language>().unwrap(), Language::Kotlin);
        assert_eq!("c#".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!("JS".parse::<Language>().unwrap(), Language::JavaScript);
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), *lang);
        }
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, "\"csharp\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::CSharp);
    }

    #[test]
    fn every_language_has_an_entry_point() {
        for lang in Language::ALL {
            assert!(lang.entry_point().starts_with("tree_sitter_"));
        }
    }
}
