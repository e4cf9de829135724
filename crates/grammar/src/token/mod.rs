//! Primitive token types and the [Token] trait they share

mod designator;
mod integer;
mod jump;
mod or_jump;
mod particle;
mod real;
mod text;
mod tuple;

pub use designator::Designator;
pub use integer::Integer;
pub use jump::Jump;
pub use or_jump::OrJump;
pub use particle::Particle;
pub use real::Real;
pub use text::Text;
pub use tuple::Tuple;

use nom::combinator::all_consuming;
use nom::IResult;

use crate::error::{Error, Level, Result};

/// Common behaviour of every primitive card value
///
/// Implementors provide a nom parser recognising exactly their own span, so
/// that larger grammars can be composed from them, and a canonical text form
/// through `Display`.
pub trait Token: Sized + Clone + PartialEq + std::fmt::Display {
    /// Short description of the accepted text, used in rendered card grammars
    fn grammar() -> String;

    /// nom parser for exactly the span of this token
    fn parse(i: &str) -> IResult<&str, Self>;

    /// Parse the whole of `s` as this token
    ///
    /// Leading and trailing whitespace is ignored, but anything else left
    /// over after the token is a syntax error carrying the original text.
    fn from_mcnp(s: &str) -> Result<Self> {
        all_consuming(Self::parse)(s.trim())
            .map(|(_, token)| token)
            .map_err(|_| Error::syntax(Level::Entry, s))
    }

    /// Canonical MCNP text for the token
    fn to_mcnp(&self) -> String {
        self.to_string()
    }
}
