//! Static descriptions of card layouts

use itertools::Itertools;
use log::trace;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{eof, map, map_res, opt, verify};
use nom::sequence::preceded;
use nom::IResult;

use ncards_grammar::lexer::{flatten, words};
use ncards_grammar::{Designator, Integer, Level, Particle, Token};
use ncards_utils::f;

use crate::builder::Builder;
use crate::card::Card;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::matcher::{assign, split_options};
use crate::rule::Rule;

/// Whether a part of the card header may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Never,
    Optional,
    Required,
}

/// A named positional field
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub optional: bool,
    pub rule: Rule,
}

impl Field {
    /// Required field of the given kind, with no rule
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            optional: false,
            rule: Rule::Any,
        }
    }

    /// Field that may be left out
    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    /// Constrain the field value
    pub const fn rule(self, rule: Rule) -> Self {
        Self { rule, ..self }
    }
}

/// Relation between fields, checked after every field is valid on its own
#[derive(Debug, Clone, Copy)]
pub struct Check {
    /// Fields involved, reported in the error
    pub fields: &'static [&'static str],
    pub test: fn(&Card) -> bool,
    pub describe: &'static str,
}

/// Layout of a card, or of a named option inside a card
///
/// Schemas are plain static data. Start from [Schema::CARD] or
/// [Schema::OPTION] and override what is needed.
///
/// ```rust
/// # use ncards_cards::{Field, Kind, Presence, Rule, Schema};
/// static TME: Schema = Schema {
///     name: "ctme",
///     keyword: "ctme",
///     fields: &[Field::new("tme", Kind::Real).rule(Rule::Min(0.0))],
///     ..Schema::CARD
/// };
///
/// let card = TME.parse("ctme 30").unwrap();
/// assert_eq!(card["tme"], 30);
/// assert!(TME.parse("ctme -1").unwrap_err().is_semantics());
/// ```
#[derive(Debug)]
pub struct Schema {
    /// Unique name, distinguishes alternative layouts of one keyword
    pub name: &'static str,
    pub keyword: &'static str,
    pub level: Level,
    pub suffix: Presence,
    pub suffix_rule: Rule,
    pub designator: Presence,
    /// Particles allowed in the designator, any if empty
    pub particles: &'static [Particle],
    pub fields: &'static [Field],
    pub options: &'static [Schema],
    pub checks: &'static [Check],
}

impl Schema {
    /// Defaults for a top level card
    pub const CARD: Schema = Schema {
        name: "",
        keyword: "",
        level: Level::Card,
        suffix: Presence::Never,
        suffix_rule: Rule::Any,
        designator: Presence::Never,
        particles: &[],
        fields: &[],
        options: &[],
        checks: &[],
    };

    /// Defaults for an option within a card
    pub const OPTION: Schema = Schema {
        level: Level::Option,
        ..Self::CARD
    };

    /// Find a field and its position by name, ignoring case
    pub fn field(&self, name: &str) -> Option<(usize, &'static Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name.eq_ignore_ascii_case(name))
    }

    /// Find an option layout by keyword, ignoring case
    pub fn option(&self, keyword: &str) -> Option<&'static Schema> {
        self.options
            .iter()
            .find(|option| option.keyword.eq_ignore_ascii_case(keyword))
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    /// Human readable layout, e.g. `sb[n] function a [b]`
    pub fn grammar(&self) -> String {
        let mut head = self.keyword.to_string();
        match self.suffix {
            Presence::Never => (),
            Presence::Optional => head.push_str("[n]"),
            Presence::Required => head.push('n'),
        }
        match self.designator {
            Presence::Never => (),
            Presence::Optional => head.push_str("[:d]"),
            Presence::Required => head.push_str(":d"),
        }

        let fields = self.fields.iter().map(|field| {
            let name = match field.kind {
                Kind::Tuple(_) | Kind::Line => f!("{}...", field.name),
                _ => field.name.to_string(),
            };
            match field.optional {
                true => f!("[{name}]"),
                false => name,
            }
        });

        let options = self.options.iter().map(|option| match option.fields.is_empty() {
            true => f!("[{}]", option.keyword),
            false => f!("[{}={}]", option.keyword, option.field_names().join(" ")),
        });

        std::iter::once(head).chain(fields).chain(options).join(" ")
    }

    /// Parse card text with this layout
    ///
    /// The text may span several lines with `&` continuations and `$`
    /// comments. Syntax is checked completely before any value is validated.
    pub fn parse(&'static self, text: &str) -> Result<Card> {
        let line = flatten(text);

        let (rest, (suffix, designator)) =
            header(self, &line).map_err(|_| self.syntax(self.level, &line))?;

        let words = words(rest);
        trace!("{}: {} words after header", self.name, words.len());

        let (positional, groups) = split_options(self, &words)?;
        let values = assign(self.fields, &positional).ok_or_else(|| self.syntax(self.level, &line))?;

        let options = groups
            .into_iter()
            .map(|(option, words)| {
                assign(option.fields, &words)
                    .map(|values| Card::assemble(option, None, None, values, Vec::new()))
                    .ok_or_else(|| option.syntax(option.level, &words.join(" ")))
            })
            .collect::<Result<Vec<Card>>>()?;

        Card::new(self, suffix, designator, values, options)
    }

    /// Start building a card with this layout
    pub fn builder(&'static self) -> Builder {
        Builder::new(self)
    }

    pub(crate) fn syntax(&self, level: Level, text: &str) -> Error {
        Error::Syntax {
            level,
            keyword: self.keyword.to_string(),
            text: text.to_string(),
        }
    }
}

type Header = (Option<Integer>, Option<Designator>);

/// Keyword, suffix, and designator, up to the first separator
fn header<'a>(schema: &Schema, i: &'a str) -> IResult<&'a str, Header> {
    let (i, _) = tag_no_case(schema.keyword)(i)?;

    let (i, suffix) = match schema.suffix {
        Presence::Never => (i, None),
        Presence::Optional => opt(suffix)(i)?,
        Presence::Required => map(suffix, Some)(i)?,
    };

    let particles = |i: &'a str| designator(schema.particles, i);
    let (i, designator) = match schema.designator {
        Presence::Never => (i, None),
        Presence::Optional => opt(particles)(i)?,
        Presence::Required => map(particles, Some)(i)?,
    };

    // must end the word, so `fc4` is never read as `f` with junk
    let (i, _) = alt((space1, eof))(i)?;
    Ok((i, (suffix, designator)))
}

fn suffix(i: &str) -> IResult<&str, Integer> {
    map_res(digit1, |digits: &str| digits.parse::<i64>().map(Integer::from))(i)
}

fn designator<'a>(particles: &[Particle], i: &'a str) -> IResult<&'a str, Designator> {
    verify(preceded(char(':'), Designator::parse), |d: &Designator| {
        particles.is_empty() || d.particles().iter().all(|p| particles.contains(p))
    })(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{material, source};

    static EXAMPLE: Schema = Schema {
        name: "example",
        keyword: "ex",
        suffix: Presence::Optional,
        designator: Presence::Optional,
        particles: &[Particle::Neutron, Particle::Photon],
        ..Schema::CARD
    };

    #[test]
    fn header_parts() {
        let (rest, (suffix, designator)) = header(&EXAMPLE, "ex12:n,p 1 2").unwrap();
        assert_eq!(rest, "1 2");
        assert_eq!(suffix, Some(Integer::from(12)));
        assert_eq!(designator.unwrap().to_string(), "n,p");

        assert!(header(&EXAMPLE, "ex").is_ok());
        assert!(header(&EXAMPLE, "exa 1").is_err());
        assert!(header(&EXAMPLE, "ex:e 1").is_err());
    }

    #[test]
    fn rendered_grammar() {
        assert_eq!(source::SB_FUNCTION.grammar(), "sb[n] function a [b]");
        assert_eq!(material::MT.grammar(), "mtn tables...");
    }

    #[test]
    fn lookups_ignore_case() {
        assert_eq!(source::SB_FUNCTION.field("FUNCTION").map(|(i, _)| i), Some(0));
        assert!(source::SB_FUNCTION.field("c").is_none());
        assert!(material::M.option("NLIB").is_some());
    }
}
