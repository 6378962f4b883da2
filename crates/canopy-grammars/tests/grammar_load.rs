//! Load checks across the whole binding pack
//!
//! Every compiled-in grammar must hand back a usable handle. These tests are
//! order-independent: each builds its own parser and shares no state.

use canopy_grammars::{load_check, load_check_all, registry};

#[test]
fn every_supported_grammar_loads() {
    let supported = registry::supported();
    assert!(!supported.is_empty());

    for language in supported {
        let report = load_check(language)
            .unwrap_or_else(|_| panic!("Error loading {} grammar", language.name()));
        assert!(report.abi_version >= tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION);
        assert!(report.abi_version <= tree_sitter::LANGUAGE_VERSION);
        assert!(report.node_kind_count > 0);
    }
}

#[test]
fn load_check_all_covers_every_supported_language() {
    let results = load_check_all();
    assert_eq!(
        results.iter().map(|(l, _)| *l).collect::<Vec<_>>(),
        registry::supported()
    );
    for (language, result) in results {
        assert!(
            result.is_ok(),
            "Error loading {} grammar",
            language.name()
        );
    }
}

#[test]
fn checks_are_order_independent() {
    let mut reversed = registry::supported();
    reversed.reverse();
    for language in reversed {
        assert!(load_check(language).is_ok());
    }
}

#[cfg(feature = "lang-kotlin")]
#[test]
fn kotlin_parser_survives_reuse() {
    let mut parser = canopy_grammars::parser_for(canopy_grammars::Language::Kotlin).unwrap();
    for source in ["fun a() {}", "val x = 1", "class C"] {
        let tree = parser.parse(source, None).unwrap();
        assert!(tree.root_node().end_byte() > 0);
    }
}
