//! Write operations for decks

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

// crate modules
use crate::deck::Deck;
use crate::error::Result;

/// Maximum line length accepted by MCNP
const WIDTH: usize = 80;

/// Five blanks mark a continuation line
const CONTINUATION: &str = "     ";

/// Cards longer than this are split by hand
const LONG_CARD: usize = 50 * WIDTH;

/// Write a [Deck] to an MCNP input file
///
/// Every card is written in its canonical form, wrapped onto continuation
/// lines where it would run past 80 columns.
///
/// ```rust, no_run
/// # use ncards_deck::{read_deck, write_deck};
/// let deck = read_deck("./data/simple.i").unwrap();
/// write_deck(&deck, "./simple_out.i").unwrap();
/// ```
pub fn write_deck<P: AsRef<Path>>(deck: &Deck, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("writing {} data cards to {}", deck.data.len(), path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(deck.to_mcnp().as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Wrap a single-line card at word boundaries
///
/// Words are never split, so a single word longer than a line is left to
/// overrun rather than broken.
pub(crate) fn wrap(card: &str) -> String {
    // textwrap extremely slow on large lines, just split as we go
    if card.len() > LONG_CARD {
        return split_lines(card);
    }

    let options = Options::new(WIDTH)
        .subsequent_indent(CONTINUATION)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(false);
    textwrap::fill(card, options)
}

/// Greedy first-fit wrapping, one pass over the words
fn split_lines(card: &str) -> String {
    let mut s = String::with_capacity(card.len() + card.len() / 8);
    let mut line = 0;

    for word in card.split_ascii_whitespace() {
        if line == 0 {
            s += word;
            line = word.len();
        } else if line + 1 + word.len() <= WIDTH {
            s.push(' ');
            s += word;
            line += 1 + word.len();
        } else {
            s.push('\n');
            s += CONTINUATION;
            s += word;
            line = CONTINUATION.len() + word.len();
        }
    }
    s
}
