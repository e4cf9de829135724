//! Superimposed mesh tallies

use crate::card::Card;
use crate::kind::Kind;
use crate::rule::Rule;
use crate::schema::{Check, Field, Presence, Schema};
use crate::value::Value;

const POSITIVE: Rule = Rule::Above(0.0);
const POSITIVE_COUNTS: Rule = Rule::Each(&POSITIVE);
const VECTOR: Kind = Kind::Entry(&[Kind::Real, Kind::Real, Kind::Real]);

const fn bounds(keyword: &'static str) -> Schema {
    Schema {
        name: keyword,
        keyword,
        fields: BOUNDS,
        ..Schema::OPTION
    }
}

const fn counts(keyword: &'static str) -> Schema {
    Schema {
        name: keyword,
        keyword,
        fields: COUNTS,
        ..Schema::OPTION
    }
}

const fn vector(keyword: &'static str) -> Schema {
    Schema {
        name: keyword,
        keyword,
        fields: VECTORS,
        ..Schema::OPTION
    }
}

const BOUNDS: &[Field] = &[Field::new("bounds", Kind::Tuple(&Kind::Real)).rule(Rule::Ascending)];
const COUNTS: &[Field] = &[Field::new("counts", Kind::Tuple(&Kind::Integer)).rule(POSITIVE_COUNTS)];
const VECTORS: &[Field] = &[Field::new("vector", VECTOR)];

/// `fmeshn:pl geom= origin= imesh= ...` mesh tally definition
pub static FMESH: Schema = Schema {
    name: "fmesh",
    keyword: "fmesh",
    suffix: Presence::Required,
    suffix_rule: Rule::Custom(is_mesh_number, "a tally number ending in 4"),
    designator: Presence::Required,
    options: &[
        Schema {
            name: "geom",
            keyword: "geom",
            fields: &[Field::new(
                "geom",
                Kind::Choice(&["xyz", "rec", "cyl", "rzt", "sph", "rpt"]),
            )],
            ..Schema::OPTION
        },
        vector("origin"),
        vector("axs"),
        vector("vec"),
        bounds("imesh"),
        counts("iints"),
        bounds("jmesh"),
        counts("jints"),
        bounds("kmesh"),
        counts("kints"),
        bounds("emesh"),
        counts("eints"),
        Schema {
            name: "out",
            keyword: "out",
            fields: &[Field::new(
                "out",
                Kind::Choice(&["col", "cf", "ij", "ik", "jk", "cuv", "none", "xdmf"]),
            )],
            ..Schema::OPTION
        },
        Schema {
            name: "factor",
            keyword: "factor",
            fields: &[Field::new("factor", Kind::Real)],
            ..Schema::OPTION
        },
        Schema {
            name: "tr",
            keyword: "tr",
            fields: &[Field::new("tr", Kind::Integer).rule(POSITIVE)],
            ..Schema::OPTION
        },
    ],
    checks: &[
        Check {
            fields: &["imesh", "iints"],
            test: i_counts,
            describe: "one fine mesh count per coarse mesh bound",
        },
        Check {
            fields: &["jmesh", "jints"],
            test: j_counts,
            describe: "one fine mesh count per coarse mesh bound",
        },
        Check {
            fields: &["kmesh", "kints"],
            test: k_counts,
            describe: "one fine mesh count per coarse mesh bound",
        },
    ],
    ..Schema::CARD
};

fn is_mesh_number(value: &Value) -> bool {
    value.as_integer().is_some_and(|n| n.value() > 0 && n.value() % 10 == 4)
}

fn i_counts(card: &Card) -> bool {
    same_length(card, "imesh", "iints")
}

fn j_counts(card: &Card) -> bool {
    same_length(card, "jmesh", "jints")
}

fn k_counts(card: &Card) -> bool {
    same_length(card, "kmesh", "kints")
}

/// Fine mesh counts, when given, match the coarse mesh bounds one to one
fn same_length(card: &Card, mesh: &str, ints: &str) -> bool {
    let length = |keyword: &str| {
        card.option(keyword)
            .and_then(|option| option.fields().next())
            .and_then(|(_, value)| value?.as_list().map(<[Value]>::len))
    };

    match (length(mesh), length(ints)) {
        (Some(mesh), Some(ints)) => mesh == ints,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncards_grammar::Level;

    #[test]
    fn cylindrical_mesh() {
        let text = "fmesh14:n geom=cyl origin=0 0 -50 axs=0 0 1 vec=1 0 0 \
                    imesh=10 iints=5 jmesh=100 jints=10 kmesh=1 kints=1 out=cf";
        let card = FMESH.parse(text).unwrap();
        assert_eq!(card.options().len(), 11);
        assert_eq!(card.option("geom").unwrap()["geom"], "cyl");
        assert_eq!(card.suffix().unwrap(), 14);
    }

    #[test]
    fn mesh_numbers() {
        assert_eq!(FMESH.parse("fmesh12:n").unwrap_err().field(), Some("suffix"));
    }

    #[test]
    fn counts_match_bounds() {
        let error = FMESH.parse("fmesh4:n imesh 1 2 iints 3").unwrap_err();
        assert_eq!(error.field(), Some("imesh, iints"));
    }

    #[test]
    fn option_errors() {
        let error = FMESH.parse("fmesh4:n imesh 2 1").unwrap_err();
        assert_eq!(error.level(), Some(Level::Option));
        assert!(FMESH.parse("fmesh4:n origin 1 2").unwrap_err().is_syntax());
        assert!(FMESH.parse("fmesh4:n geom=box").unwrap_err().is_syntax());
    }
}
