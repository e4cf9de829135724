//! Result and Error types for ncards-grammar

/// Type alias for `Result<T, grammar::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// Granularity at which a problem was found
///
/// Cards contain options, and both contain entries (the individual words or
/// fixed groups of words inside a field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Card,
    Option,
    Entry,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Card => "card",
            Self::Option => "option",
            Self::Entry => "entry",
        };
        write!(f, "{name}")
    }
}

/// The error type for the `ncards-grammar` crate
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid {level} syntax \"{text}\"")]
    Syntax { level: Level, text: String },

    #[error("failed to infer particle from \"{0}\"")]
    FailedToInferParticle(String),
}

impl Error {
    /// Syntax error for text that did not match the expected grammar
    pub fn syntax(level: Level, text: impl Into<String>) -> Self {
        Self::Syntax {
            level,
            text: text.into(),
        }
    }

    /// The granularity of the failure, particles always being an entry
    pub fn level(&self) -> Level {
        match self {
            Self::Syntax { level, .. } => *level,
            Self::FailedToInferParticle(_) => Level::Entry,
        }
    }
}
