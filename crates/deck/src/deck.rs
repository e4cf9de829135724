//! In-memory representation of an input deck

use ncards_cards::Card;
use ncards_utils::f;

use crate::writer::wrap;

/// A data card, parsed when its keyword is in the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum DataCard {
    /// Validated card
    Card(Card),
    /// Card with a keyword outside the catalog, kept as written
    Raw(String),
}

impl DataCard {
    /// The parsed card, if there is one
    pub fn card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card),
            Self::Raw(_) => None,
        }
    }

    /// Card text on a single line
    pub fn to_mcnp(&self) -> String {
        match self {
            Self::Card(card) => card.to_mcnp(),
            Self::Raw(text) => text.clone(),
        }
    }
}

impl From<Card> for DataCard {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}

/// Complete MCNP input deck
///
/// Cells and surfaces are logical cards with comments removed and
/// continuation lines joined, in the order they were given.
///
/// ```rust
/// # use ncards_cards::Card;
/// # use ncards_deck::Deck;
/// let mut deck = Deck::new("simple sphere");
/// deck.cells.push("1 0 -1 imp:n=1".to_string());
/// deck.cells.push("2 0 1 imp:n=0".to_string());
/// deck.surfaces.push("1 so 10".to_string());
/// deck.push(Card::from_mcnp("nps 1000").unwrap());
///
/// assert_eq!(deck.find("nps").count(), 1);
/// assert!(deck.to_mcnp().starts_with("simple sphere\n1 0 -1 imp:n=1\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    /// Text of the `message:` block, without the keyword
    pub message: Option<String>,
    pub title: String,
    pub cells: Vec<String>,
    pub surfaces: Vec<String>,
    pub data: Vec<DataCard>,
}

impl Deck {
    /// Empty deck with a title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Every parsed data card
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.data.iter().filter_map(DataCard::card)
    }

    /// Parsed data cards with a keyword, ignoring case
    pub fn find<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Card> {
        self.cards()
            .filter(move |card| card.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Data cards kept as text
    pub fn raw(&self) -> impl Iterator<Item = &str> {
        self.data.iter().filter_map(|card| match card {
            DataCard::Raw(text) => Some(text.as_str()),
            DataCard::Card(_) => None,
        })
    }

    /// Append a data card
    pub fn push(&mut self, card: impl Into<DataCard>) {
        self.data.push(card.into());
    }

    /// Full deck text, with long cards wrapped onto continuation lines
    pub fn to_mcnp(&self) -> String {
        let mut lines = Vec::new();

        if let Some(message) = &self.message {
            lines.push(f!("message: {message}"));
            lines.push(String::new());
        }

        lines.push(self.title.clone());
        lines.extend(self.cells.iter().map(|c| wrap(c)));
        lines.push(String::new());
        lines.extend(self.surfaces.iter().map(|s| wrap(s)));
        lines.push(String::new());
        lines.extend(self.data.iter().map(|d| wrap(&d.to_mcnp())));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_mcnp())
    }
}
