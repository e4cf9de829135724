//! Result and Error types for ncards-deck

/// Type alias for `Result<T, deck::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `ncards-deck`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// A data card in the deck failed to parse or validate
    #[error("invalid card on line {line}")]
    Card {
        line: usize,
        source: ncards_cards::Error,
    },

    /// Nothing in the deck to use as a title
    #[error("deck has no title card")]
    MissingTitle,
}
