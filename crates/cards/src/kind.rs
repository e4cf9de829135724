//! The shape of a single card field

use itertools::Itertools;

use ncards_grammar::lexer::{expand_jumps, flatten, is_verbatim, jump_count, words};
use ncards_grammar::{Designator, Integer, Level, OrJump, Real, Text, Token, Tuple};
use ncards_utils::f;

use crate::error::{Error, Result};
use crate::value::Value;

/// What a field holds, and therefore how many words it consumes
///
/// Scalars take exactly one word, entries a fixed number of words, tuples a
/// variable number of whole elements, and a line everything that is left.
/// Tuple elements must be fixed width (a scalar or an entry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// Signed integer
    Integer,
    /// Real number, integers are promoted
    Real,
    /// Any single word
    Text,
    /// One word from a fixed, case-insensitive list
    Choice(&'static [&'static str]),
    /// Particle designator, e.g. `n,p`
    Designator,
    /// Integer or `j`
    IntegerOrJump,
    /// Real or `j`
    RealOrJump,
    /// All remaining words as free text
    Line,
    /// Fixed group of kinds, e.g. a `zaid fraction` pair
    Entry(&'static [Kind]),
    /// One or more repetitions of a fixed width kind
    Tuple(&'static Kind),
}

impl Kind {
    /// Whether `j` is an acceptable value in place of this field
    pub fn allows_jump(&self) -> bool {
        matches!(self, Self::IntegerOrJump | Self::RealOrJump)
    }

    /// Number of words taken by a fixed width kind
    pub fn width(&self) -> Option<usize> {
        match self {
            Self::Entry(kinds) => kinds.iter().map(Kind::width).sum(),
            Self::Tuple(_) | Self::Line => None,
            _ => Some(1),
        }
    }

    /// Short description of the accepted text
    ///
    /// ```rust
    /// # use ncards_cards::Kind;
    /// assert_eq!(Kind::RealOrJump.grammar(), "real|j");
    /// assert_eq!(Kind::Entry(&[Kind::Text, Kind::Real]).grammar(), "(text real)");
    /// assert_eq!(Kind::Tuple(&Kind::Integer).grammar(), "integer...");
    /// ```
    pub fn grammar(&self) -> String {
        match self {
            Self::Integer => Integer::grammar(),
            Self::Real => Real::grammar(),
            Self::Text => Text::grammar(),
            Self::Choice(choices) => choices.join("|"),
            Self::Designator => Designator::grammar(),
            Self::IntegerOrJump => OrJump::<Integer>::grammar(),
            Self::RealOrJump => OrJump::<Real>::grammar(),
            Self::Line => "text...".to_string(),
            Self::Entry(kinds) => f!("({})", kinds.iter().map(Kind::grammar).join(" ")),
            Self::Tuple(kind) => f!("{}...", kind.grammar()),
        }
    }

    /// Check that a value has the structure of this kind
    ///
    /// Text is only accepted if it would be read back from a card unchanged,
    /// so a single word may not hold `=`, `$`, or look like a jump.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Integer, Value::Integer(_))
            | (Self::Designator, Value::Designator(_))
            | (Self::IntegerOrJump, Value::Integer(_) | Value::Jump)
            | (Self::RealOrJump, Value::Jump) => true,
            (Self::Real | Self::RealOrJump, Value::Real(r)) => r.value().is_finite(),
            (Self::Line, Value::Text(text)) => is_verbatim(text.as_str()),
            (Self::Text, Value::Text(text)) => {
                let text = text.as_str();
                is_verbatim(text) && !text.contains(' ') && jump_count(text).is_none()
            }
            (Self::Choice(choices), Value::Text(text)) => text.is_one_of(choices),
            (Self::Entry(kinds), Value::Entry(values)) => {
                kinds.len() == values.len() && kinds.iter().zip(values).all(|(k, v)| k.accepts(v))
            }
            (Self::Tuple(kind), Value::Tuple(values)) => values.iter().all(|v| kind.accepts(v)),
            _ => false,
        }
    }

    /// Decode free-standing text as a value of this kind
    ///
    /// The text is split into words as it would be on a card, and every word
    /// must be used. Jumps are expanded everywhere except in free text.
    pub fn parse_text(&self, text: &str) -> Result<Value> {
        let line = flatten(text);
        let words = words(&line);

        let value = match self {
            Self::Line => (!words.is_empty()).then(|| Value::Text(Text::new(words.join(" ")))),
            Self::Tuple(element) => {
                let words = expand_jumps(&words);
                let elements = element.repeat(&words);
                let complete = elements.last().is_some_and(|(_, used)| *used == words.len());
                match complete {
                    true => Tuple::new(elements.into_iter().map(|(value, _)| value).collect())
                        .map(Value::Tuple),
                    false => None,
                }
            }
            kind => {
                let words = expand_jumps(&words);
                kind.fixed(&words)
                    .filter(|(_, used)| *used == words.len())
                    .map(|(value, _)| value)
            }
        };

        value.ok_or_else(|| syntax(text))
    }

    /// Decode as many elements of this fixed width kind as the words allow
    ///
    /// Each element comes with the number of words used up to and including
    /// it. Decoding stops at the first word that does not fit.
    pub(crate) fn repeat(&self, words: &[&str]) -> Vec<(Value, usize)> {
        let mut elements = Vec::new();
        let mut used = 0;

        while let Some((element, n)) = self.fixed(&words[used..]) {
            if n == 0 {
                break;
            }
            used += n;
            elements.push((element, used));
        }

        elements
    }

    /// Decode the leading words for a fixed width kind
    pub(crate) fn fixed(&self, words: &[&str]) -> Option<(Value, usize)> {
        match self {
            Self::Entry(kinds) => {
                let mut values = Vec::with_capacity(kinds.len());
                let mut used = 0;
                for kind in kinds.iter() {
                    let (value, n) = kind.fixed(&words[used..])?;
                    values.push(value);
                    used += n;
                }
                Some((Value::Entry(values), used))
            }
            Self::Tuple(_) | Self::Line => None,
            scalar => scalar.word(words.first()?).map(|value| (value, 1)),
        }
    }

    /// Decode a single word for a scalar kind
    fn word(&self, word: &str) -> Option<Value> {
        let value = match self {
            Self::Integer => Value::Integer(Integer::from_mcnp(word).ok()?),
            Self::Real => Value::Real(Real::from_mcnp(word).ok()?),
            Self::Text => Value::Text(Text::from_mcnp(word).ok()?),
            Self::Designator => Value::Designator(Designator::from_mcnp(word).ok()?),
            Self::IntegerOrJump => OrJump::<Integer>::from_mcnp(word).ok()?.into(),
            Self::RealOrJump => OrJump::<Real>::from_mcnp(word).ok()?.into(),
            Self::Choice(choices) => {
                let text = Text::from_mcnp(word).ok()?;
                text.is_one_of(choices).then_some(Value::Text(text))?
            }
            _ => return None,
        };
        Some(value)
    }
}

fn syntax(text: &str) -> Error {
    Error::Grammar(ncards_grammar::Error::syntax(Level::Entry, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(Kind::Real.width(), Some(1));
        assert_eq!(Kind::Entry(&[Kind::Real, Kind::Real, Kind::Real]).width(), Some(3));
        assert_eq!(Kind::Tuple(&Kind::Real).width(), None);
        assert_eq!(Kind::Line.width(), None);
    }

    #[test]
    fn repeat_stops_at_first_misfit() {
        let elements = Kind::Real.repeat(&["1", "2", "x", "3"]);
        let used: Vec<usize> = elements.iter().map(|(_, n)| *n).collect();
        assert_eq!(used, vec![1, 2]);
    }

    #[test]
    fn repeated_entries() {
        let kind = Kind::Entry(&[Kind::Text, Kind::Real]);
        let elements = kind.repeat(&["1001.80c", "2", "8016.80c", "1", "extra"]);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].1, 4);
    }

    #[test]
    fn choices_are_syntactic() {
        let kind = Kind::Choice(&["log", "lin"]);
        assert!(kind.fixed(&["LOG"]).is_some());
        assert!(kind.fixed(&["1"]).is_none());
    }

    #[test]
    fn parse_text_uses_every_word() {
        let kind = Kind::Tuple(&Kind::RealOrJump);
        let value = kind.parse_text("1 2j 4").unwrap();
        assert_eq!(value.to_string(), "1.0 j j 4.0");
        assert!(Kind::Real.parse_text("1 2").is_err());
        assert!(Kind::Line.parse_text("  ").is_err());
        assert!(Kind::Tuple(&Kind::Real).parse_text("1 x").is_err());
    }

    #[test]
    fn free_text_is_read_as_on_a_card() {
        let value = Kind::Line.parse_text("see  2j  a=b").unwrap();
        assert_eq!(value.to_string(), "see 2j a b");
    }

    #[test]
    fn accepts_structure() {
        assert!(Kind::RealOrJump.accepts(&Value::Jump));
        assert!(!Kind::Real.accepts(&Value::Jump));
        assert!(!Kind::Text.accepts(&Value::Text(Text::new("two words"))));
        assert!(!Kind::Real.accepts(&Value::Real(f64::INFINITY.into())));
    }

    #[test]
    fn accepts_only_text_that_reads_back() {
        assert!(Kind::Text.accepts(&Value::Text(Text::new("lwtr.20t"))));
        for text in ["a=b", "a$b", "a&", "3j", "j", ""] {
            assert!(!Kind::Text.accepts(&Value::Text(Text::new(text))), "{text}");
        }
        assert!(Kind::Line.accepts(&Value::Text(Text::new("see 2j"))));
        assert!(!Kind::Line.accepts(&Value::Text(Text::new("cost $5"))));
    }
}
