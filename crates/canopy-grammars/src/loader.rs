//! Parser construction and grammar load checks
//!
//! The loader is the only place the workspace talks to the tree-sitter
//! runtime. [`parser_for`] builds a parser for a bound language;
//! [`load_check`] is the health check: it confirms the opaque handle is
//! accepted by the runtime and drives a real parse of the binding's sample.

use canopy_domain::{Error, Language, Result};
use serde::Serialize;
use tracing::{debug, warn};
use tree_sitter::Parser;

use crate::registry;

/// Metadata read from a successfully loaded grammar
///
/// The handle stays a black box; these fields are the only things ever read
/// from it, and only for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct GrammarReport {
    /// The language that was checked
    pub language: Language,
    /// ABI version the grammar was generated against
    pub abi_version: usize,
    /// Number of node kinds the grammar defines
    pub node_kind_count: usize,
}

/// Build a parser configured for the given language
///
/// Fails with [`Error::UnsupportedLanguage`] when no binding is compiled in,
/// or [`Error::Grammar`] when the runtime rejects the handle.
pub fn parser_for(language: Language) -> Result<Parser> {
    let binding = registry::get(language).ok_or_else(|| Error::UnsupportedLanguage {
        language: language.to_string(),
    })?;

    let grammar = binding.grammar();
    let mut parser = Parser::new();
    parser.set_language(&grammar).map_err(|e| Error::Grammar {
        language: language.name().to_string(),
        message: e.to_string(),
    })?;

    debug!(language = %language, abi = grammar.abi_version(), "parser ready");
    Ok(parser)
}

/// Run the load check for one language
///
/// Confirms the binding's handle is accepted by the runtime and that it
/// parses the builtin sample to a root node spanning the whole input.
pub fn load_check(language: Language) -> Result<GrammarReport> {
    let binding = registry::get(language).ok_or_else(|| Error::UnsupportedLanguage {
        language: language.to_string(),
    })?;

    let mut parser = parser_for(language)?;
    let sample = binding.sample();
    let tree = parser.parse(sample, None).ok_or_else(|| Error::Parse {
        language: language.name().to_string(),
        message: "parser returned no tree for the builtin sample".to_string(),
    })?;

    let root = tree.root_node();
    if root.end_byte() != sample.len() {
        return Err(Error::Parse {
            language: language.name().to_string(),
            message: format!(
                "sample parse covered {} of {} bytes",
                root.end_byte(),
                sample.len()
            ),
        });
    }

    let grammar = binding.grammar();
    Ok(GrammarReport {
        language,
        abi_version: grammar.abi_version(),
        node_kind_count: grammar.node_kind_count(),
    })
}

/// Run the load check for every compiled-in language
///
/// Results are independent: one failing grammar does not stop the rest.
pub fn load_check_all() -> Vec<(Language, Result<GrammarReport>)> {
    registry::supported()
        .into_iter()
        .map(|language| {
            let result = load_check(language);
            if let Err(err) = &result {
                warn!(language = %language, %err, "grammar load check failed");
            }
            (language, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_language_is_an_error_not_a_panic() {
        // Resources is not in the default feature set; with it enabled this
        // exercises nothing, so pick the first missing language instead.
        let Some(missing) = Language::ALL
            .iter()
            .copied()
            .find(|l| !registry::is_supported(*l))
        else {
            return;
        };
        let err = match parser_for(missing) {
            Ok(_) => panic!("expected parser_for to fail for an unsupported language"),
            Err(e) => e,
        };
        assert!(matches!(err, Error::UnsupportedLanguage { .. }));
    }

    #[test]
    fn load_check_is_idempotent() {
        for language in registry::supported() {
            let first = load_check(language).unwrap();
            let second = load_check(language).unwrap();
            assert_eq!(first.abi_version, second.abi_version);
            assert_eq!(first.node_kind_count, second.node_kind_count);
        }
    }

    #[test]
    fn report_serializes_with_lowercase_language_id() {
        let Some(language) = registry::supported().first().copied() else {
            return;
        };
        let report = load_check(language).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["language"], language.to_string());
    }
}
