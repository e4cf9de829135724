//! Fail-fast semantic validation of assembled cards
//!
//! Checks run in a fixed order and stop at the first failure: suffix,
//! designator, each field in declaration order, each option in card order,
//! then the cross-field checks.

use itertools::Itertools;

use ncards_grammar::Level;
use ncards_utils::{f, OptionExt};

use crate::card::Card;
use crate::error::{Error, Result};
use crate::schema::{Field, Presence};
use crate::value::Value;

pub(crate) fn validate(card: &Card) -> Result<()> {
    let schema = card.schema();

    match (schema.suffix, card.suffix()) {
        (Presence::Required, None) => return Err(missing(card, "suffix")),
        (Presence::Never, Some(suffix)) => {
            return Err(unexpected(card, "suffix", suffix.to_string()))
        }
        (_, Some(suffix)) if !schema.suffix_rule.check(&Value::Integer(suffix)) => {
            return Err(semantics(
                card,
                schema.level,
                "suffix",
                suffix.to_string(),
                schema.suffix_rule.describe(),
            ))
        }
        _ => (),
    }

    match (schema.designator, card.designator()) {
        (Presence::Required, None) => return Err(missing(card, "designator")),
        (Presence::Never, Some(designator)) => {
            return Err(unexpected(card, "designator", designator.to_string()))
        }
        (_, Some(designator))
            if !schema.particles.is_empty()
                && !designator.particles().iter().all(|p| schema.particles.contains(p)) =>
        {
            return Err(semantics(
                card,
                schema.level,
                "designator",
                designator.to_string(),
                f!("one of {{{}}}", schema.particles.iter().join(", ")),
            ))
        }
        _ => (),
    }

    for (field, value) in card.fields() {
        match value {
            Some(value) => field_value(card, field, value)?,
            None if field.optional => (),
            None => return Err(missing(card, field.name)),
        }
    }

    for option in card.options() {
        validate(option)?;
    }

    for check in schema.checks {
        if !(check.test)(card) {
            let value = check
                .fields
                .iter()
                .map(|name| card.get(name).display())
                .join(", ");
            return Err(semantics(
                card,
                schema.level,
                &check.fields.join(", "),
                value,
                check.describe.to_string(),
            ));
        }
    }

    Ok(())
}

fn field_value(card: &Card, field: &Field, value: &Value) -> Result<()> {
    if let Some((index, element)) = field.rule.first_failure(value) {
        return Err(semantics(
            card,
            Level::Entry,
            &f!("{}[{index}]", field.name),
            element.to_string(),
            field.rule.describe(),
        ));
    }

    match field.rule.check(value) {
        true => Ok(()),
        false => Err(semantics(
            card,
            card.schema().level,
            field.name,
            value.to_string(),
            field.rule.describe(),
        )),
    }
}

fn missing(card: &Card, field: &str) -> Error {
    semantics(
        card,
        card.schema().level,
        field,
        "none".to_string(),
        "a value".to_string(),
    )
}

fn unexpected(card: &Card, field: &str, value: String) -> Error {
    semantics(card, card.schema().level, field, value, "nothing".to_string())
}

fn semantics(card: &Card, level: Level, field: &str, value: String, rule: String) -> Error {
    Error::Semantics {
        level,
        keyword: card.keyword().to_string(),
        field: field.to_string(),
        value,
        rule,
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog;
    use crate::Builder;

    #[test]
    fn header_parts_from_builders() {
        let ctme = catalog::schema("ctme").unwrap();
        let error = Builder::new(ctme).suffix(1).set("tme", 1).build().unwrap_err();
        assert_eq!(error.field(), Some("suffix"));

        let phys = catalog::schema("phys_n").unwrap();
        let error = Builder::new(phys).designator("p").build().unwrap_err();
        assert_eq!(error.field(), Some("designator"));

        let imp = catalog::schema("imp").unwrap();
        let error = Builder::new(imp).set("importances", 1).build().unwrap_err();
        assert_eq!(error.field(), Some("designator"));
    }
}
