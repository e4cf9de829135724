//! Assignment of card words to schema fields
//!
//! Fields are matched in declaration order with backtracking. A scalar takes
//! one word and an entry a fixed number, a tuple tries 1, 2, 3... elements,
//! and an optional field is tried present before absent. The first complete
//! assignment that uses every word wins.
//!
//! `Nj` jumps are expanded before matching, except in free text, which keeps
//! the words exactly as they were written.

use log::trace;

use ncards_grammar::lexer::expand_jumps_indexed;
use ncards_grammar::{Jump, Level, Text, Tuple};
use ncards_utils::f;

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::schema::{Field, Schema};
use crate::value::Value;

/// Option words grouped by the option they follow
pub(crate) type Groups<'a> = Vec<(&'static Schema, Vec<&'a str>)>;

/// Assign every word to the fields, `None` if no assignment fits
pub(crate) fn assign(fields: &[Field], words: &[&str]) -> Option<Vec<Option<Value>>> {
    let words = Words::new(words);
    let mut values = Vec::with_capacity(fields.len());
    match words.assign_from(fields, 0, &mut values) {
        true => Some(values),
        false => {
            trace!("no assignment of {} words to {} fields", words.raw.len(), fields.len());
            None
        }
    }
}

/// Card words with jumps expanded, remembering where each one came from
struct Words<'w, 'a> {
    raw: &'w [&'a str],
    expanded: Vec<&'a str>,
    /// Index into `raw` of the word each expanded word came from
    origins: Vec<usize>,
}

impl<'w, 'a> Words<'w, 'a> {
    fn new(raw: &'w [&'a str]) -> Self {
        let (expanded, origins) = expand_jumps_indexed(raw).into_iter().unzip();
        Self {
            raw,
            expanded,
            origins,
        }
    }

    /// Match `fields` against the expanded words from `at` onwards
    ///
    /// On failure `values` is left as it was found.
    fn assign_from(&self, fields: &[Field], at: usize, values: &mut Vec<Option<Value>>) -> bool {
        let Some((field, rest)) = fields.split_first() else {
            return at == self.expanded.len();
        };

        let matched = match field.kind {
            Kind::Tuple(element) => self.assign_tuple(element, rest, at, values),
            Kind::Line => match self.line(at) {
                Some(value) => self.assign_value(Some(value), rest, self.expanded.len(), values),
                None => false,
            },
            kind => match kind.fixed(&self.expanded[at..]) {
                Some((value, used)) => self.assign_value(Some(value), rest, at + used, values),
                None => false,
            },
        };

        if matched {
            return true;
        }

        field.optional && self.assign_value(None, rest, at, values)
    }

    fn assign_value(
        &self,
        value: Option<Value>,
        rest: &[Field],
        next: usize,
        values: &mut Vec<Option<Value>>,
    ) -> bool {
        values.push(value);
        if self.assign_from(rest, next, values) {
            return true;
        }
        values.pop();
        false
    }

    /// Shortest tuple that lets the remaining fields match
    ///
    /// Elements are decoded once, and only the tuple that is kept is built.
    fn assign_tuple(
        &self,
        element: &Kind,
        rest: &[Field],
        at: usize,
        values: &mut Vec<Option<Value>>,
    ) -> bool {
        let mut elements = element.repeat(&self.expanded[at..]);

        let slot = values.len();
        values.push(None);

        for count in 1..=elements.len() {
            let next = at + elements[count - 1].1;
            if self.assign_from(rest, next, values) {
                elements.truncate(count);
                let elements = std::mem::take(&mut elements);
                values[slot] =
                    Tuple::new(elements.into_iter().map(|(value, _)| value).collect())
                        .map(Value::Tuple);
                return true;
            }
        }

        values.pop();
        false
    }

    /// Free text from the expanded word `at` to the end, as it was written
    fn line(&self, at: usize) -> Option<Value> {
        let &origin = self.origins.get(at)?;
        let mut words = Vec::new();

        // an earlier field may have taken part of an `Nj`
        let split = at > 0 && self.origins[at - 1] == origin;
        let first = match split {
            true => {
                let left = self.origins[at..].iter().take_while(|&&o| o == origin).count();
                words.push(Jump::new(u32::try_from(left).ok()?)?.to_string());
                origin + 1
            }
            false => origin,
        };
        words.extend(self.raw[first..].iter().map(|word| word.to_string()));

        Some(Value::Text(Text::new(words.join(" "))))
    }
}

/// Split the positional words from the words of each named option
///
/// Options start at the first option keyword, and each option takes the
/// words up to the next keyword. Giving an option twice is an error.
pub(crate) fn split_options<'a>(
    schema: &Schema,
    words: &[&'a str],
) -> Result<(Vec<&'a str>, Groups<'a>)> {
    let mut positional = Vec::new();
    let mut groups: Groups<'a> = Vec::new();

    for &word in words {
        if let Some(option) = schema.option(word) {
            if groups.iter().any(|(o, _)| std::ptr::eq(*o, option)) {
                return Err(Error::Syntax {
                    level: Level::Option,
                    keyword: schema.keyword.to_string(),
                    text: f!("{} given more than once", option.keyword),
                });
            }
            groups.push((option, Vec::new()));
        } else if let Some((_, option_words)) = groups.last_mut() {
            option_words.push(word);
        } else {
            positional.push(word);
        }
    }

    Ok((positional, groups))
}
