//! Perturbation sources: the bounded random adjustment applied to every score.
//!
//! Scores are `clamp(base + offset, 0, 100)` rounded to the nearest integer, with one
//! offset drawn per score. Sources are created per analysis and passed by `&mut`,
//! so concurrent analyses never share a generator.
//!
//! `ScoringMode` selects the source at startup:
//! - `random`   - entropy-seeded `StdRng` per analysis (default)
//! - `off`      - offset is always 0
//! - `seed:<n>` - `StdRng::seed_from_u64(n)` per analysis; identical input, identical output

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the uniform offset range.
pub const PERTURBATION_SPAN: f64 = 10.0;

/// A source of score offsets.
pub trait Perturbation: Send {
    fn offset(&mut self) -> f64;
}

/// Uniform offsets in `[-PERTURBATION_SPAN, +PERTURBATION_SPAN]`.
pub struct UniformPerturbation<R: Rng> {
    rng: R,
}

impl UniformPerturbation<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + Send> Perturbation for UniformPerturbation<R> {
    fn offset(&mut self) -> f64 {
        self.rng.gen_range(-PERTURBATION_SPAN..=PERTURBATION_SPAN)
    }
}

/// Always 0: scores equal their base values.
pub struct NoPerturbation;

impl Perturbation for NoPerturbation {
    fn offset(&mut self) -> f64 {
        0.0
    }
}

/// Applies one offset to `base` and returns the clamped, rounded score.
pub fn perturb(base: f64, perturbation: &mut dyn Perturbation) -> u32 {
    (base + perturbation.offset()).clamp(0.0, 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    #[default]
    Random,
    Disabled,
    Seeded(u64),
}

impl ScoringMode {
    /// Fresh source for one analysis run.
    pub fn perturbation(&self) -> Box<dyn Perturbation> {
        match self {
            ScoringMode::Random => Box::new(UniformPerturbation::from_entropy()),
            ScoringMode::Disabled => Box::new(NoPerturbation),
            ScoringMode::Seeded(seed) => Box::new(UniformPerturbation::seeded(*seed)),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        !matches!(self, ScoringMode::Random)
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        match value.as_str() {
            "random" | "" => Ok(ScoringMode::Random),
            "off" | "none" | "disabled" => Ok(ScoringMode::Disabled),
            other => match other.strip_prefix("seed:") {
                Some(seed) => seed
                    .trim()
                    .parse::<u64>()
                    .map(ScoringMode::Seeded)
                    .map_err(|e| format!("invalid seed '{seed}': {e}")),
                None => Err(format!(
                    "unknown scoring mode '{s}' (expected random, off or seed:<n>)"
                )),
            },
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Random => write!(f, "random"),
            ScoringMode::Disabled => write!(f, "off"),
            ScoringMode::Seeded(seed) => write!(f, "seed:{seed}"),
        }
    }
}

/// Test source returning the same offset on every draw.
#[cfg(test)]
pub struct FixedPerturbation(pub f64);

#[cfg(test)]
impl Perturbation for FixedPerturbation {
    fn offset(&mut self) -> f64 {
        self.0
    }
}
