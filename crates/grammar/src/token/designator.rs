use itertools::Itertools;
use nom::combinator::map;
use nom::IResult;
use serde::Serialize;

use crate::parsers;
use crate::token::{Particle, Token};

/// One or more particle types, e.g. the `n` of `imp:n` or `n,p` of `f4:n,p`
///
/// Hashable so it can be used as a lookup key, and written out as comma
/// separated symbols.
///
/// ```rust
/// # use ncards_grammar::{Designator, Particle, Token};
/// let designator = Designator::from_mcnp("N,P").unwrap();
/// assert_eq!(designator.particles(), &[Particle::Neutron, Particle::Photon]);
/// assert!(designator.contains(Particle::Photon));
/// assert_eq!(designator.to_mcnp(), "n,p");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Designator(Vec<Particle>);

impl Designator {
    /// Designator for a list of particles, `None` if the list is empty
    pub fn new(particles: Vec<Particle>) -> Option<Self> {
        (!particles.is_empty()).then_some(Self(particles))
    }

    /// Particles in the order they were given
    pub fn particles(&self) -> &[Particle] {
        &self.0
    }

    /// Check whether a particle type is included
    pub fn contains(&self, particle: Particle) -> bool {
        self.0.contains(&particle)
    }
}

impl Token for Designator {
    fn grammar() -> String {
        "particle[,particle...]".to_string()
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        map(parsers::particle_list, Self)(i)
    }
}

impl From<Particle> for Designator {
    fn from(particle: Particle) -> Self {
        Self(vec![particle])
    }
}

impl std::fmt::Display for Designator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}
