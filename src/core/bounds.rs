//! Secret domain, narrowing bounds and proximity bands

use std::fmt;

/// Smallest value a secret (or a guess) can take
pub const SECRET_MIN: u32 = 1;

/// Largest value a secret (or a guess) can take
pub const SECRET_MAX: u32 = 100;

/// Closed interval `[min, max]` known to contain the secret
///
/// Starts as the whole domain and only ever shrinks: `min` never decreases
/// and `max` never increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: u32,
    max: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl Bounds {
    /// The whole secret domain
    pub const FULL: Self = Self {
        min: SECRET_MIN,
        max: SECRET_MAX,
    };

    /// Lowest value still possible
    #[inline]
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Highest value still possible
    #[inline]
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Width of the interval (`max - min`), not the number of values in it
    #[inline]
    #[must_use]
    pub const fn span(self) -> u32 {
        self.max.saturating_sub(self.min)
    }

    /// Bounds clamped to the legal domain
    #[must_use]
    pub fn clamped(self) -> (u32, u32) {
        (self.min.max(SECRET_MIN), self.max.min(SECRET_MAX))
    }

    /// Midpoint of the interval, rounded down
    #[must_use]
    pub const fn midpoint(self) -> u32 {
        self.min + self.span() / 2
    }

    /// Narrow the interval after a guess that missed `secret`
    ///
    /// A guess equal to the secret leaves the bounds untouched.
    #[must_use]
    pub fn narrowed(self, guess: u32, secret: u32) -> Self {
        if guess < secret {
            Self {
                min: self.min.max(guess + 1),
                max: self.max,
            }
        } else if guess > secret {
            Self {
                min: self.min,
                max: self.max.min(guess - 1),
            }
        } else {
            self
        }
    }

    /// Check whether a value lies inside the interval
    #[inline]
    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Coarse distance-to-secret classification for a missed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityBand {
    /// Within 5
    VeryHot,
    /// Within 10
    Warm,
    /// Within 20
    Cool,
    /// More than 20 away
    Cold,
}

impl ProximityBand {
    /// Classify the distance between a guess and the secret
    ///
    /// Boundary values belong to the tighter band.
    #[must_use]
    pub const fn classify(guess: u32, secret: u32) -> Self {
        match guess.abs_diff(secret) {
            0..=5 => Self::VeryHot,
            6..=10 => Self::Warm,
            11..=20 => Self::Cool,
            _ => Self::Cold,
        }
    }
}

impl fmt::Display for ProximityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VeryHot => write!(f, "You're very hot (within 5)!"),
            Self::Warm => write!(f, "You're warm (within 10)."),
            Self::Cool => write!(f, "You're cool (within 20)."),
            Self::Cold => write!(f, "You're cold (more than 20 away)."),
        }
    }
}
