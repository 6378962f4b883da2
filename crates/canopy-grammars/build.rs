//! Link directives for the out-of-tree `resources` grammar.
//!
//! The resources grammar has no registry crate; its compiled archive is an
//! external artifact. `TREE_SITTER_RESOURCES_LIB_DIR` names the directory
//! holding `libtree-sitter-resources.a`. Everything else in this crate links
//! through ordinary grammar crates and needs no help from a build script.

fn main() {
    println!("cargo:rerun-if-env-changed=TREE_SITTER_RESOURCES_LIB_DIR");

    if std::env::var_os("CARGO_FEATURE_LANG_RESOURCES").is_some() {
        if let Some(dir) = std::env::var_os("TREE_SITTER_RESOURCES_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
        }
        println!("cargo:rustc-link-lib=static=tree-sitter-resources");
    }
}
