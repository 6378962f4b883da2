//! Grammar binding implementations
//!
//! One module per bound language, each exposing a unit struct that
//! implements [`GrammarBinding`]. Modules are feature-gated so a build only
//! links the grammars it asked for.
//!
//! ## Available Bindings
//!
//! | Binding | Language | Source crate |
//! |---------|----------|--------------|
//! | [`CSharpGrammar`] | C# | `tree-sitter-c-sharp` |
//! | [`JavaGrammar`] | Java | `tree-sitter-java` |
//! | [`JavaScriptGrammar`] | JavaScript | `tree-sitter-javascript` |
//! | [`KotlinGrammar`] | Kotlin | `tree-sitter-kotlin-ng` |
//! | [`PhpGrammar`] | PHP | `tree-sitter-php` |
//! | [`TomlGrammar`] | TOML | `tree-sitter-toml-ng` |
//! | [`ResourcesGrammar`] | Resources | out-of-tree archive (`lang-resources`) |

/// Binding trait shared by all grammar modules
pub mod binding;

#[cfg(feature = "lang-csharp")]
pub mod csharp;
#[cfg(feature = "lang-java")]
pub mod java;
#[cfg(feature = "lang-javascript")]
pub mod javascript;
#[cfg(feature = "lang-kotlin")]
pub mod kotlin;
#[cfg(feature = "lang-php")]
pub mod php;
#[cfg(feature = "lang-resources")]
pub mod resources;
#[cfg(feature = "lang-toml")]
pub mod toml;

pub use binding::GrammarBinding;

#[cfg(feature = "lang-csharp")]
pub use csharp::CSharpGrammar;
#[cfg(feature = "lang-java")]
pub use java::JavaGrammar;
#[cfg(feature = "lang-javascript")]
pub use javascript::JavaScriptGrammar;
#[cfg(feature = "lang-kotlin")]
pub use kotlin::KotlinGrammar;
#[cfg(feature = "lang-php")]
pub use php::PhpGrammar;
#[cfg(feature = "lang-resources")]
pub use resources::ResourcesGrammar;
#[cfg(feature = "lang-toml")]
pub use toml::TomlGrammar;
