//! nom parsers for the primitive tokens

// ncards modules
use ncards_utils::f;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag_no_case};
use nom::character::complete::{anychar, char, digit0, digit1, one_of, satisfy};
use nom::combinator::{map_opt, map_res, not, opt, recognize};
use nom::error::{Error, ErrorKind};
use nom::multi::separated_list1;
use nom::sequence::{pair, preceded};
use nom::IResult;

use crate::token::Particle;

/// More convenient error creation for nom
pub(crate) fn cause(s: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(s, ErrorKind::Fail))
}

/// Signed integer value, e.g. `104`, `-21`, `+3`
pub(crate) fn integer(i: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), str::parse::<i64>)(i)
}

/// Signed real value, including the MCNP exponent shorthand
///
/// All of `1.5e3`, `1.5E+3`, `1.5+3`, `15e2`, and `1500.` are the same value.
/// Integers are valid reals. Values that overflow to infinity are rejected,
/// since MCNP has no way to write them back.
pub(crate) fn real(i: &str) -> IResult<&str, f64> {
    let (rest, mantissa) = mantissa(i)?;
    let (rest, exponent) = opt(exponent)(rest)?;

    let text = match exponent {
        Some(exponent) => f!("{mantissa}e{exponent}"),
        None => mantissa.to_string(),
    };

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok((rest, value)),
        _ => Err(cause(i)),
    }
}

/// Signed digits with an optional decimal point, e.g. `-1.`, `.5`, `2.25`
fn mantissa(i: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    ))(i)
}

/// Exponent digits, with or without the leading `e`
///
/// Only the signed digits are returned, so `e+03`, `E3`, and `+3` give `+03`,
/// `3`, and `+3` respectively. Without an `e` the sign is mandatory.
fn exponent(i: &str) -> IResult<&str, &str> {
    alt((
        preceded(one_of("eE"), recognize(pair(opt(one_of("+-")), digit1))),
        recognize(pair(one_of("+-"), digit1)),
    ))(i)
}

/// Jump with an optional repeat count, e.g. `j` or `3J`
pub(crate) fn jump(i: &str) -> IResult<&str, u32> {
    let (i, count) = opt(map_res(digit1, str::parse::<u32>))(i)?;
    let (i, _) = tag_no_case("j")(i)?;
    // must not run on into a word like `jmesh`
    let (i, _) = not(satisfy(|c: char| c.is_alphanumeric()))(i)?;

    match count {
        Some(0) => Err(cause(i)),
        Some(n) => Ok((i, n)),
        None => Ok((i, 1)),
    }
}

/// Any run of characters up to the next whitespace
pub(crate) fn word(i: &str) -> IResult<&str, &str> {
    is_not(" \t\r\n")(i)
}

/// A single particle symbol such as `n`, `|`, or `#`
pub(crate) fn particle(i: &str) -> IResult<&str, Particle> {
    map_opt(anychar, Particle::from_symbol)(i)
}

/// Comma separated list of particle symbols, e.g. `n,p,e`
pub(crate) fn particle_list(i: &str) -> IResult<&str, Vec<Particle>> {
    separated_list1(char(','), particle)(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_test() {
        assert_eq!(integer("104"), Ok(("", 104)));
        assert_eq!(integer("-21 3.0"), Ok((" 3.0", -21)));
        assert_eq!(integer("+7"), Ok(("", 7)));
        assert!(integer("j").is_err());
        assert!(integer("-").is_err());
    }

    #[test]
    fn integer_width() {
        assert_eq!(integer("9223372036854775807"), Ok(("", i64::MAX)));
        assert!(integer("9223372036854775808").is_err());
    }

    #[test]
    fn real_test() {
        assert_eq!(real("1.5e3"), Ok(("", 1500.0)));
        assert_eq!(real("1.5E+3"), Ok(("", 1500.0)));
        assert_eq!(real("1.5+3"), Ok(("", 1500.0)));
        assert_eq!(real("2.0-1"), Ok(("", 0.2)));
        assert_eq!(real("-.5"), Ok(("", -0.5)));
        assert_eq!(real("14."), Ok(("", 14.0)));
        assert_eq!(real("3"), Ok(("", 3.0)));
        // a dangling exponent marker is left behind
        assert_eq!(real("1e"), Ok(("e", 1.0)));
        assert!(real(".").is_err());
        assert!(real("e5").is_err());
    }

    #[test]
    fn real_overflow() {
        assert!(real("1e999").is_err());
        assert!(real("-1.5+400").is_err());
        assert_eq!(real("1.7e308"), Ok(("", 1.7e308)));
        assert_eq!(real("1e-999"), Ok(("", 0.0)));
    }

    #[test]
    fn jump_test() {
        assert_eq!(jump("j"), Ok(("", 1)));
        assert_eq!(jump("J 2"), Ok((" 2", 1)));
        assert_eq!(jump("3j"), Ok(("", 3)));
        assert!(jump("0j").is_err());
        assert!(jump("jmesh").is_err());
        assert!(jump("3").is_err());
    }

    #[test]
    fn particle_list_test() {
        assert_eq!(particle_list("n"), Ok(("", vec![Particle::Neutron])));
        assert_eq!(
            particle_list("n,p e"),
            Ok((" e", vec![Particle::Neutron, Particle::Photon]))
        );
        assert!(particle_list("$").is_err());
    }
}
