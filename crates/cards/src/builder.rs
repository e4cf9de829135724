//! Field-by-field card construction

use crate::card::Card;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::kind::Kind;
use crate::schema::Schema;
use crate::value::Value;

/// Mutable staging area for a card
///
/// Values are held as loose [Input]s until [Builder::build], where they are
/// decoded with the field kinds and the whole card is validated exactly as a
/// parsed card would be.
///
/// ```rust
/// # use ncards_cards::{catalog, Builder};
/// let schema = catalog::schema("kcode").unwrap();
/// let card = Builder::new(schema)
///     .set("nsrck", 10000)
///     .set("rkk", 1.0)
///     .set("kct", 250)
///     .build()
///     .unwrap();
///
/// // skipped fields before a given one become jumps
/// assert_eq!(card.to_mcnp(), "kcode 10000 1.0 j 250");
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    schema: &'static Schema,
    suffix: Option<Input>,
    designator: Option<Input>,
    fields: Vec<Option<Input>>,
    options: Vec<Card>,
    unknown: Option<String>,
}

impl Builder {
    /// Empty builder for a layout
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            suffix: None,
            designator: None,
            fields: vec![None; schema.fields.len()],
            options: Vec::new(),
            unknown: None,
        }
    }

    /// Builder holding every value of an existing card
    ///
    /// Building it again without changes gives an equal card.
    pub fn unbuild(card: &Card) -> Self {
        Self {
            schema: card.schema(),
            suffix: card.suffix().map(|s| Input::Value(Value::Integer(s))),
            designator: card
                .designator()
                .map(|d| Input::Value(Value::Designator(d.clone()))),
            fields: card
                .values()
                .iter()
                .map(|value| value.clone().map(Input::Value))
                .collect(),
            options: card.options().to_vec(),
            unknown: None,
        }
    }

    pub fn suffix(mut self, input: impl Into<Input>) -> Self {
        self.suffix = Some(input.into());
        self
    }

    pub fn designator(mut self, input: impl Into<Input>) -> Self {
        self.designator = Some(input.into());
        self
    }

    /// Set a field by name, ignoring case
    ///
    /// An unknown name is reported when the card is built.
    pub fn set(mut self, name: &str, input: impl Into<Input>) -> Self {
        match self.schema.field(name) {
            Some((index, _)) => self.fields[index] = Some(input.into()),
            None => {
                self.unknown.get_or_insert(name.to_string());
            }
        }
        self
    }

    /// Leave a field out
    pub fn clear(mut self, name: &str) -> Self {
        match self.schema.field(name) {
            Some((index, _)) => self.fields[index] = None,
            None => {
                self.unknown.get_or_insert(name.to_string());
            }
        }
        self
    }

    /// Add an option, replacing any earlier option with the same keyword
    pub fn option(mut self, option: Card) -> Self {
        match self
            .options
            .iter()
            .position(|o| o.keyword().eq_ignore_ascii_case(option.keyword()))
        {
            Some(index) => self.options[index] = option,
            None => self.options.push(option),
        }
        self
    }

    /// Decode every input and validate the card
    pub fn build(self) -> Result<Card> {
        let schema = self.schema;

        if let Some(field) = self.unknown {
            return Err(Error::UnknownField {
                keyword: schema.keyword.to_string(),
                field,
            });
        }

        if let Some(option) = self
            .options
            .iter()
            .find(|o| schema.option(o.keyword()).is_none())
        {
            return Err(Error::UnknownOption {
                keyword: schema.keyword.to_string(),
                option: option.keyword().to_string(),
            });
        }

        let suffix = self
            .suffix
            .map(|s| s.into_value(&Kind::Integer))
            .transpose()?
            .and_then(|v| v.as_integer());

        let designator = self
            .designator
            .map(|d| d.into_value(&Kind::Designator))
            .transpose()?
            .and_then(|v| v.as_designator().cloned());

        let mut values = schema
            .fields
            .iter()
            .zip(self.fields)
            .map(|(field, input)| input.map(|i| i.into_value(&field.kind)).transpose())
            .collect::<Result<Vec<Option<Value>>>>()?;

        fill_jumps(schema, &mut values);
        Card::new(schema, suffix, designator, values, self.options)
    }
}

/// Positional fields cannot be skipped, so an absent field that may be
/// jumped becomes `j` when anything after it is given
fn fill_jumps(schema: &Schema, values: &mut [Option<Value>]) {
    let Some(last) = values.iter().rposition(Option::is_some) else {
        return;
    };

    for (field, value) in schema.fields.iter().zip(values.iter_mut()).take(last) {
        if value.is_none() && field.kind.allows_jump() {
            *value = Some(Value::Jump);
        }
    }
}

impl From<&Card> for Builder {
    fn from(card: &Card) -> Self {
        Self::unbuild(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn unknown_names() {
        let schema = catalog::schema("ctme").unwrap();
        let error = Builder::new(schema).set("time", 1).build().unwrap_err();
        assert!(matches!(error, Error::UnknownField { .. }));
    }

    #[test]
    fn foreign_options() {
        let geom = Card::from_mcnp("fmesh4:n geom=cyl").unwrap();
        let option = geom.option("geom").unwrap().clone();
        let schema = catalog::schema("rand").unwrap();
        let error = Builder::new(schema).option(option).build().unwrap_err();
        assert!(matches!(error, Error::UnknownOption { .. }));
    }

    #[test]
    fn suffix_and_designator() {
        let schema = catalog::schema("imp").unwrap();
        let card = Builder::new(schema)
            .designator("n")
            .set("importances", vec![1, 1, 0])
            .build()
            .unwrap();
        assert_eq!(card.to_mcnp(), "imp:n 1.0 1.0 0.0");
    }

    #[test]
    fn missing_required_fields() {
        let schema = catalog::schema("ctme").unwrap();
        let error = Builder::new(schema).build().unwrap_err();
        assert_eq!(error.field(), Some("tme"));
    }

    #[test]
    fn clear_leaves_field_out() {
        let card = Card::from_mcnp("sb -21 3.0 0.5").unwrap();
        let card = card.to_builder().clear("b").build().unwrap();
        assert_eq!(card.to_mcnp(), "sb -21 3.0");
    }
}
