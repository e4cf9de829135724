//! Standard tally cards

use ncards_utils::SliceExt;

use crate::card::Card;
use crate::kind::Kind;
use crate::rule::Rule;
use crate::schema::{Check, Field, Presence, Schema};
use crate::value::Value;

const NON_NEGATIVE: Rule = Rule::Min(0.0);
const COSINE: Rule = Rule::Range(-1.0, 1.0);
const TALLY_NUMBER: Rule = Rule::Custom(
    is_tally_number,
    "a tally number ending in 1, 2, 4, 5, 6, 7, or 8",
);
const ANY_NUMBER: Rule = Rule::Range(0.0, 99_999_999.0);

/// `fn:pl bins...` tally type and bins
pub static F: Schema = Schema {
    name: "f",
    keyword: "f",
    suffix: Presence::Required,
    suffix_rule: TALLY_NUMBER,
    designator: Presence::Required,
    fields: &[Field::new("bins", Kind::Tuple(&Kind::Text))],
    ..Schema::CARD
};

/// `fcn text...` tally comment
pub static FC: Schema = Schema {
    name: "fc",
    keyword: "fc",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[Field::new("comment", Kind::Line)],
    ..Schema::CARD
};

/// `en bounds...` energy bin upper bounds, `e0` for every tally
pub static E: Schema = Schema {
    name: "e",
    keyword: "e",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[Field::new("bounds", Kind::Tuple(&Kind::Real)).rule(Rule::Ascending)],
    ..Schema::CARD
};

/// `tn bounds...` time bin upper bounds in shakes
pub static T: Schema = Schema {
    name: "t",
    keyword: "t",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[Field::new("bounds", Kind::Tuple(&Kind::Real)).rule(Rule::Ascending)],
    ..Schema::CARD
};

/// `cn cosines...` cosine bin upper bounds
pub static C: Schema = Schema {
    name: "c",
    keyword: "c",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[Field::new("cosines", Kind::Tuple(&Kind::Real)).rule(Rule::Each(&COSINE))],
    checks: &[Check {
        fields: &["cosines"],
        test: cosines_end_at_one,
        describe: "ascending cosines ending at 1",
    }],
    ..Schema::CARD
};

/// `fmn multipliers...` tally multipliers
pub static FM: Schema = Schema {
    name: "fm",
    keyword: "fm",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[Field::new("multipliers", Kind::Tuple(&Kind::Text))],
    ..Schema::CARD
};

/// `fqn order...` print hierarchy of tally bins
pub static FQ: Schema = Schema {
    name: "fq",
    keyword: "fq",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[Field::new(
        "order",
        Kind::Tuple(&Kind::Choice(&["f", "d", "u", "s", "m", "c", "e", "t"])),
    )],
    ..Schema::CARD
};

/// `den [method] energies...` dose energies
pub static DE: Schema = Schema {
    name: "de",
    keyword: "de",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[
        Field::new("method", Kind::Choice(&["log", "lin"])).optional(),
        Field::new("energies", Kind::Tuple(&Kind::Real)).rule(Rule::Ascending),
    ],
    ..Schema::CARD
};

/// `dfn [method] values...` dose function values
pub static DF: Schema = Schema {
    name: "df",
    keyword: "df",
    suffix: Presence::Required,
    suffix_rule: ANY_NUMBER,
    fields: &[
        Field::new("method", Kind::Choice(&["log", "lin"])).optional(),
        Field::new("values", Kind::Tuple(&Kind::Real)).rule(Rule::Each(&NON_NEGATIVE)),
    ],
    ..Schema::CARD
};

fn is_tally_number(value: &Value) -> bool {
    let Some(n) = value.as_integer().map(|n| n.value()) else {
        return false;
    };
    (1..=99_999_999).contains(&n) && [1, 2, 4, 5, 6, 7, 8].contains(&(n % 10))
}

fn cosines_end_at_one(card: &Card) -> bool {
    let Some(cosines) = card.get("cosines").and_then(Value::numbers) else {
        return false;
    };
    cosines.is_ascending()
        && cosines.try_max().is_ok_and(|max| max == 1.0)
        && cosines.last() == Some(&1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_numbers() {
        assert!(F.parse("f4:n 1 2 3").is_ok());
        assert!(F.parse("f104:n,p (1 2) 3 t").is_ok());
        let error = F.parse("f3:n 1").unwrap_err();
        assert_eq!(error.field(), Some("suffix"));
        assert!(F.parse("f4 1").unwrap_err().is_syntax());
    }

    #[test]
    fn comments_keep_every_word() {
        let card = FC.parse("fc4 flux in the   cell $ note").unwrap();
        assert_eq!(card["comment"], "flux in the cell");
    }

    #[test]
    fn energies_ascend() {
        assert!(E.parse("e0 1e-5 1 14").is_ok());
        assert_eq!(E.parse("e4 1 1 2").unwrap_err().field(), Some("bounds"));
    }

    #[test]
    fn cosine_bins() {
        assert!(C.parse("c2 -0.5 0 1").is_ok());
        assert_eq!(C.parse("c2 0 0.5").unwrap_err().field(), Some("cosines"));
        assert_eq!(C.parse("c2 -2 1").unwrap_err().field(), Some("cosines[0]"));
    }

    #[test]
    fn dose_functions() {
        let card = DE.parse("de4 log 1 2 3").unwrap();
        assert_eq!(card["method"], "log");
        assert!(DF.parse("df4 1 -2").is_err());
        assert!(FQ.parse("fq4 e f").is_ok());
        assert!(FQ.parse("fq4 e q").is_err());
    }
}
