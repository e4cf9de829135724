//! Result and Error types for ncards-cards

use ncards_grammar::Level;

/// Type alias for `Result<T, cards::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ncards-cards` crate
///
/// Every failure is either a syntax error (the text does not fit the card
/// layout) or a semantics error (it fits, but a value breaks a rule). Both
/// carry the [Level] they were found at. See [Error::is_syntax] and
/// [Error::is_semantics].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] ncards_grammar::Error),

    #[error("invalid {level} syntax for `{keyword}` in \"{text}\"")]
    Syntax {
        level: Level,
        keyword: String,
        text: String,
    },

    #[error("invalid {level} value {value} for `{field}` on `{keyword}`, expected {rule}")]
    Semantics {
        level: Level,
        keyword: String,
        field: String,
        value: String,
        rule: String,
    },

    #[error("no card schema for keyword \"{0}\"")]
    UnknownKeyword(String),

    #[error("`{keyword}` has no field named `{field}`")]
    UnknownField { keyword: String, field: String },

    #[error("`{keyword}` has no option named `{option}`")]
    UnknownOption { keyword: String, option: String },

    #[error("failed to serialise card")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Text did not match the grammar of a card, option, or entry
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::Grammar(_) | Self::Syntax { .. } | Self::UnknownKeyword(_)
        )
    }

    /// Text matched, but a decoded value broke one of the card rules
    pub fn is_semantics(&self) -> bool {
        matches!(self, Self::Semantics { .. })
    }

    /// Granularity the error was found at, if it relates to card content
    pub fn level(&self) -> Option<Level> {
        match self {
            Self::Grammar(e) => Some(e.level()),
            Self::Syntax { level, .. } | Self::Semantics { level, .. } => Some(*level),
            Self::UnknownKeyword(_) => Some(Level::Card),
            _ => None,
        }
    }

    /// Name of the offending field for semantics errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Semantics { field, .. } => Some(field),
            _ => None,
        }
    }
}
