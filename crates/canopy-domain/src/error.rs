//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Canopy grammar pack
#[derive(Error, Debug)]
pub enum Error {
    /// The runtime rejected a grammar handle (ABI mismatch or similar)
    #[error("Error loading {language} grammar: {message}")]
    Grammar {
        /// Display name of the language whose grammar failed to load
        language: String,
        /// Reason reported by the tree-sitter runtime
        message: String,
    },

    /// No binding for the requested language is compiled into this build
    #[error("Unsupported language: {language}")]
    UnsupportedLanguage {
        /// The language identifier that was requested
        language: String,
    },

    /// A file extension that maps to no bound language
    #[error("Unknown file extension: {extension}")]
    UnknownExtension {
        /// The extension that was looked up
        extension: String,
    },

    /// A loaded grammar failed to parse its builtin sample
    #[error("{language} grammar failed its sample parse: {message}")]
    Parse {
        /// Display name of the language whose sample parse failed
        language: String,
        /// Description of the parse failure
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_error_uses_fixed_load_message() {
        let err = Error::Grammar {
            language: "Kotlin".to_string(),
            message: "Incompatible language version".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error loading Kotlin grammar: Incompatible language version"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
    }
}
