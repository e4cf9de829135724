//! Splitting deck text into blocks and logical cards

// standard library
use std::path::Path;

use log::{debug, trace, warn};
use rayon::prelude::*;

use ncards_cards::Card;
use ncards_grammar::lexer::{flatten, strip_comment};

// crate modules
use crate::deck::{DataCard, Deck};
use crate::error::{Error, Result};

/// One card as written, possibly over several lines
#[derive(Debug, Clone, PartialEq)]
struct Unit {
    /// Line number of the first line
    line: usize,
    text: String,
}

/// Read an MCNP input file into a [Deck]
///
/// ```rust, no_run
/// # use ncards_deck::read_deck;
/// let deck = read_deck("./data/simple.i").unwrap();
/// for card in deck.cards() {
///     println!("{card}");
/// }
/// ```
pub fn read_deck<P: AsRef<Path>>(path: P) -> Result<Deck> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    parse_deck(&std::fs::read_to_string(path)?)
}

/// Parse MCNP input text into a [Deck]
///
/// Data cards with a keyword outside the catalog are kept as text with a
/// warning. Any other failure is an error that names the line the card
/// starts on.
///
/// ```rust
/// # use ncards_deck::parse_deck;
/// let text = "\
/// simple sphere
/// 1 0 -1 imp:n=1
/// 2 0  1 imp:n=0
///
/// 1 so 10
///
/// c run control
/// nps 1000
/// ctme 30 $ minutes
/// ";
/// let deck = parse_deck(text).unwrap();
/// assert_eq!(deck.title, "simple sphere");
/// assert_eq!(deck.cells.len(), 2);
/// assert_eq!(deck.cards().count(), 2);
/// ```
pub fn parse_deck(text: &str) -> Result<Deck> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line)).peekable();

    let mut deck = Deck::default();

    if lines
        .peek()
        .is_some_and(|(_, line)| is_message(line))
    {
        let mut message = Vec::new();
        for (_, line) in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            message.push(line.trim());
        }
        let message = message.join(" ");
        deck.message = Some(message[message.find(':').map_or(0, |i| i + 1)..].trim().to_string());
    }

    let (_, title) = lines.next().ok_or(Error::MissingTitle)?;
    deck.title = title.trim_end().to_string();

    // cells, surfaces, and data, anything after is ignored
    let mut blocks: Vec<Vec<(usize, &str)>> = vec![Vec::new()];
    for (n, line) in lines {
        if !line.trim().is_empty() {
            if let Some(block) = blocks.last_mut() {
                block.push((n, line));
            }
        } else if blocks.len() < 3 {
            blocks.push(Vec::new());
        } else {
            trace!("ignoring text after line {n}");
            break;
        }
    }
    blocks.resize_with(3, Vec::new);

    deck.cells = units(&blocks[0]).into_iter().map(|u| flatten(&u.text)).collect();
    deck.surfaces = units(&blocks[1]).into_iter().map(|u| flatten(&u.text)).collect();
    deck.data = units(&blocks[2])
        .par_iter()
        .map(data_card)
        .collect::<Result<Vec<DataCard>>>()?;

    debug!(
        "{} cells, {} surfaces, {} data cards",
        deck.cells.len(),
        deck.surfaces.len(),
        deck.data.len()
    );
    Ok(deck)
}

fn data_card(unit: &Unit) -> Result<DataCard> {
    match Card::from_mcnp(&unit.text) {
        Ok(card) => Ok(DataCard::Card(card)),
        Err(ncards_cards::Error::UnknownKeyword(keyword)) => {
            warn!("line {}: keeping \"{keyword}\" card as written", unit.line);
            Ok(DataCard::Raw(flatten(&unit.text)))
        }
        Err(source) => Err(Error::Card {
            line: unit.line,
            source,
        }),
    }
}

/// Group the lines of a block into logical cards
///
/// A line continues the previous card if that card ended with `&`, or if
/// it starts with five blanks. Comment lines are dropped.
fn units(lines: &[(usize, &str)]) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    let mut continued = false;

    for &(n, line) in lines {
        if is_comment(line) {
            continue;
        }

        match units.last_mut() {
            Some(unit) if continued || line.starts_with("     ") => {
                unit.text.push('\n');
                unit.text.push_str(line);
            }
            _ => units.push(Unit {
                line: n,
                text: line.to_string(),
            }),
        }

        continued = strip_comment(line).trim_end().ends_with('&');
    }

    units
}

/// A `c` in the first five columns, followed by a blank or nothing
fn is_comment(line: &str) -> bool {
    let content = line.trim_start();
    if line.len() - content.len() >= 5 {
        return false;
    }
    matches!(content.as_bytes(), [b'c' | b'C'] | [b'c' | b'C', b' ' | b'\t', ..])
}

fn is_message(line: &str) -> bool {
    line.trim_start()
        .get(..8)
        .is_some_and(|start| start.eq_ignore_ascii_case("message:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines() {
        assert!(is_comment("c comment"));
        assert!(is_comment("C"));
        assert!(is_comment("   c indented"));
        assert!(!is_comment("     c five blanks is a continuation"));
        assert!(!is_comment("ctme 30"));
        assert!(!is_comment("cut:n j 0.1"));
    }

    #[test]
    fn continuation_lines() {
        let lines = [
            (1, "m1 1001.80c 2 &"),
            (2, "8016.80c 1"),
            (3, "c water"),
            (4, "e4 1 2"),
            (5, "     3 4"),
            (6, "nps 10"),
        ];
        let units = units(&lines);
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].line, 1);
        assert_eq!(units[1].text, "e4 1 2\n     3 4");
        assert_eq!(units[2].line, 6);
    }

    #[test]
    fn message_block() {
        let text = "message: xsdir=xs\n  runtpe=r\n\ntitle\n1 0 -1\n\n1 so 1\n\nnps 10\n";
        let deck = parse_deck(text).unwrap();
        assert_eq!(deck.message.as_deref(), Some("xsdir=xs runtpe=r"));
        assert_eq!(deck.title, "title");
    }

    #[test]
    fn empty_decks() {
        assert!(matches!(parse_deck(""), Err(Error::MissingTitle)));
        let deck = parse_deck("only a title").unwrap();
        assert!(deck.cells.is_empty() && deck.data.is_empty());
    }

    #[test]
    fn errors_name_the_line() {
        let text = "title\n1 0 -1\n\n1 so 1\n\nnps 10\nctme -1\n";
        match parse_deck(text) {
            Err(Error::Card { line, source }) => {
                assert_eq!(line, 7);
                assert!(source.is_semantics());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
