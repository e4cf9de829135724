//! Every supported card layout
//!
//! The catalog is an ordered table of static [Schema]s. Several layouts may
//! share a keyword (`sb` has a tabular and a function form, `phys` one per
//! particle), in which case they are tried in table order.
//!
//! | Module     | Cards                                              |
//! | ---------- | -------------------------------------------------- |
//! | [control]  | nps ctme lost prdmp print dbcn rand mode           |
//! | [source]   | sdef si sp sb kcode ksrc                           |
//! | [tally]    | f fc e t c fm fq de df                             |
//! | [mesh]     | fmesh                                              |
//! | [material] | m mt tr                                            |
//! | [physics]  | phys cut void nonu                                 |
//! | [variance] | imp wwp wwe wwn ptrac                              |

pub mod control;
pub mod material;
pub mod mesh;
pub mod physics;
pub mod source;
pub mod tally;
pub mod variance;

use log::{debug, trace};
use nom::character::complete::{alpha1, space0};
use nom::sequence::preceded;
use nom::IResult;

use ncards_grammar::lexer::flatten;

use crate::card::Card;
use crate::error::{Error, Result};
use crate::schema::Schema;

/// All layouts in the order they are tried
pub static CATALOG: &[&Schema] = &[
    // control
    &control::NPS,
    &control::CTME,
    &control::LOST,
    &control::PRDMP,
    &control::PRINT,
    &control::DBCN,
    &control::RAND,
    &control::MODE,
    // source
    &source::SDEF,
    &source::SI,
    &source::SP_FUNCTION,
    &source::SP_TABULAR,
    &source::SB_FUNCTION,
    &source::SB_TABULAR,
    &source::KCODE,
    &source::KSRC,
    // tally
    &tally::F,
    &tally::FC,
    &tally::E,
    &tally::T,
    &tally::C,
    &tally::FM,
    &tally::FQ,
    &tally::DE,
    &tally::DF,
    &mesh::FMESH,
    // material
    &material::M,
    &material::MT,
    &material::TR,
    // physics
    &physics::PHYS_N,
    &physics::PHYS_P,
    &physics::PHYS_E,
    &physics::PHYS_H,
    &physics::CUT,
    &physics::VOID,
    &physics::NONU,
    // variance reduction
    &variance::IMP,
    &variance::WWP,
    &variance::WWE,
    &variance::WWN,
    &variance::PTRAC,
];

/// Layouts for a keyword, in catalog order
pub fn lookup(keyword: &str) -> impl Iterator<Item = &'static Schema> + '_ {
    CATALOG
        .iter()
        .copied()
        .filter(move |schema| schema.keyword.eq_ignore_ascii_case(keyword))
}

/// Find a layout by its unique name
pub fn schema(name: &str) -> Option<&'static Schema> {
    CATALOG
        .iter()
        .copied()
        .find(|schema| schema.name.eq_ignore_ascii_case(name))
}

/// Parse card text with whichever layout fits
///
/// Every layout for the keyword is tried in catalog order:
///
/// 1. the first card that passes validation is returned
/// 2. otherwise the semantics error of the first layout that matched the
///    syntax, since the text was clearly meant for it
/// 3. otherwise the syntax error of the first layout
///
/// ```rust
/// # use ncards_cards::catalog;
/// let card = catalog::parse("sb1 0.0 1.0 2.0").unwrap();
/// assert_eq!(card.name(), "sb_tabular");
///
/// let error = catalog::parse("sb -99 3.0").unwrap_err();
/// assert!(error.is_semantics());
///
/// let error = catalog::parse("xyz 1 2").unwrap_err();
/// assert!(error.is_syntax());
/// ```
pub fn parse(text: &str) -> Result<Card> {
    let line = flatten(text);
    let keyword = match leading_keyword(&line) {
        Ok((_, keyword)) => keyword.to_lowercase(),
        Err(_) => return Err(Error::UnknownKeyword(line)),
    };

    let mut syntax = None;
    let mut semantics = None;

    for schema in lookup(&keyword) {
        trace!("trying {} for \"{line}\"", schema.name);
        match schema.parse(&line) {
            Ok(card) => return Ok(card),
            Err(e) if e.is_semantics() => {
                semantics.get_or_insert(e);
            }
            Err(e) => {
                syntax.get_or_insert(e);
            }
        }
    }

    let error = semantics
        .or(syntax)
        .unwrap_or(Error::UnknownKeyword(keyword));
    debug!("{error}");
    Err(error)
}

/// Alphabetic start of the card, e.g. `fmesh` of `fmesh14:n`
fn leading_keyword(i: &str) -> IResult<&str, &str> {
    preceded(space0, alpha1)(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn lookup_keeps_order() {
        let names: Vec<&str> = lookup("SB").map(|s| s.name).collect();
        assert_eq!(names, vec!["sb_function", "sb_tabular"]);
        assert_eq!(lookup("nothing").count(), 0);
    }

    #[test]
    fn rules_never_fail_on_jumps() {
        // every field that allows a jump must accept one whatever the rule
        for schema in CATALOG {
            for field in schema.fields.iter().filter(|f| f.kind.allows_jump()) {
                assert!(field.rule.check(&crate::Value::Jump), "{}", field.name);
            }
        }
    }
}
