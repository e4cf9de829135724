//! Parsed, validated cards

use log::debug;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use ncards_grammar::lexer::compress_jumps;
use ncards_grammar::{Designator, Integer};
use ncards_utils::f;

use crate::builder::Builder;
use crate::catalog;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::schema::{Field, Schema};
use crate::validate::validate;
use crate::value::Value;

/// A card that has passed every syntax and semantics check
///
/// Cards are immutable. Use [Card::with] for a one-field change, or
/// [Card::to_builder] to change several fields at once. Either way the
/// result is validated again from scratch.
///
/// Fields are read by name with [Card::get], or by indexing, which panics if
/// the field was not given.
///
/// ```rust
/// # use ncards_cards::Card;
/// let card = Card::from_mcnp("sb -21 3.0").unwrap();
/// assert_eq!(card.name(), "sb_function");
/// assert_eq!(card["function"], -21);
/// assert_eq!(card["a"], 3.0);
/// assert!(card.get("b").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Card {
    schema: &'static Schema,
    suffix: Option<Integer>,
    designator: Option<Designator>,
    values: Vec<Option<Value>>,
    options: Vec<Card>,
}

impl Card {
    /// Assemble and validate
    pub(crate) fn new(
        schema: &'static Schema,
        suffix: Option<Integer>,
        designator: Option<Designator>,
        values: Vec<Option<Value>>,
        options: Vec<Card>,
    ) -> Result<Self> {
        let card = Self::assemble(schema, suffix, designator, values, options);
        validate(&card)?;
        debug!("{}: validated \"{}\"", schema.name, card.to_mcnp());
        Ok(card)
    }

    /// Assemble without any validation
    pub(crate) fn assemble(
        schema: &'static Schema,
        suffix: Option<Integer>,
        designator: Option<Designator>,
        values: Vec<Option<Value>>,
        options: Vec<Card>,
    ) -> Self {
        Self {
            schema,
            suffix,
            designator,
            values,
            options,
        }
    }

    /// Parse card text, finding the layout from the catalog
    ///
    /// See [catalog::parse] for how alternative layouts are chosen.
    pub fn from_mcnp(text: &str) -> Result<Self> {
        catalog::parse(text)
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Name of the layout, which differs from the keyword for alternatives
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub fn keyword(&self) -> &'static str {
        self.schema.keyword
    }

    /// Numeric suffix, e.g. the `4` of `f4:n`
    pub fn suffix(&self) -> Option<Integer> {
        self.suffix
    }

    /// Particle designator, e.g. the `n` of `f4:n`
    pub fn designator(&self) -> Option<&Designator> {
        self.designator.as_ref()
    }

    /// Value of a field, `None` if it was left out or does not exist
    pub fn get(&self, name: &str) -> Option<&Value> {
        let (index, _) = self.schema.field(name)?;
        self.values.get(index)?.as_ref()
    }

    /// Numeric value of a field, `None` if absent, a jump, or not a number
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_number()
    }

    /// Every field in declaration order, with its value if given
    pub fn fields(&self) -> impl Iterator<Item = (&'static Field, Option<&Value>)> {
        self.schema
            .fields
            .iter()
            .zip(self.values.iter().map(Option::as_ref))
    }

    pub(crate) fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Options in the order given
    pub fn options(&self) -> &[Card] {
        &self.options
    }

    /// Find an option by keyword, ignoring case
    pub fn option(&self, keyword: &str) -> Option<&Card> {
        self.options
            .iter()
            .find(|option| option.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Builder holding every value of this card
    pub fn to_builder(&self) -> Builder {
        Builder::unbuild(self)
    }

    /// Copy of the card with one field replaced
    ///
    /// ```rust
    /// # use ncards_cards::Card;
    /// let card = Card::from_mcnp("lost 5 2").unwrap();
    /// let edited = card.with("lost2", 10).unwrap();
    /// assert_eq!(edited.to_mcnp(), "lost 5 10");
    ///
    /// // the original is untouched, and edits are validated
    /// assert_eq!(card["lost2"], 2);
    /// assert!(card.with("lost2", -1).is_err());
    /// ```
    pub fn with(&self, name: &str, input: impl Into<Input>) -> Result<Card> {
        self.to_builder().set(name, input).build()
    }

    /// Canonical MCNP text on a single line
    ///
    /// Runs of jumps are written with the `Nj` shorthand and options as
    /// `keyword=values`.
    pub fn to_mcnp(&self) -> String {
        let mut head = self.schema.keyword.to_string();
        if let Some(suffix) = self.suffix {
            head.push_str(&suffix.to_string());
        }
        if let Some(designator) = &self.designator {
            head.push(':');
            head.push_str(&designator.to_string());
        }

        let mut words = vec![head];
        words.extend(self.body());
        words.extend(self.options.iter().map(Card::option_text));
        words.join(" ")
    }

    /// Serialise the card as a JSON object keyed by field names
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }

    fn body(&self) -> Vec<String> {
        let words = self.values.iter().flatten().flat_map(Value::words).collect();
        compress_jumps(words)
    }

    fn option_text(&self) -> String {
        let body = self.body();
        match body.is_empty() {
            true => self.keyword().to_string(),
            false => f!("{}={}", self.keyword(), body.join(" ")),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_mcnp())
    }
}

/// Cards are equal when they share a layout and all of their values
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name == other.schema.name
            && self.suffix == other.suffix
            && self.designator == other.designator
            && self.values == other.values
            && self.options == other.options
    }
}

impl std::ops::Index<&str> for Card {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("`{}` has no value for `{name}`", self.schema.keyword),
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("keyword", self.keyword())?;
        if let Some(suffix) = &self.suffix {
            map.serialize_entry("suffix", suffix)?;
        }
        if let Some(designator) = &self.designator {
            map.serialize_entry("designator", &designator.to_string())?;
        }
        for (field, value) in self.fields() {
            if let Some(value) = value {
                map.serialize_entry(field.name, value)?;
            }
        }
        for option in &self.options {
            map.serialize_entry(option.keyword(), option)?;
        }
        map.end()
    }
}
