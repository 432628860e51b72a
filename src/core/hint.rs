//! Hint categories and the per-round hint cycle
//!
//! Hints are resolved in a fixed priority order. Each category is shown at
//! most once per round; once every category has been shown, the range hint
//! repeats with the current bounds so a hint is always available.

use super::bounds::Bounds;
use std::fmt;

/// The four kinds of hint, in the order they are handed out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintCategory {
    Range,
    Parity,
    Divisibility,
    ProximityBand,
}

impl HintCategory {
    /// All categories in priority order
    pub const ALL: [Self; 4] = [
        Self::Range,
        Self::Parity,
        Self::Divisibility,
        Self::ProximityBand,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::Range => 0b0001,
            Self::Parity => 0b0010,
            Self::Divisibility => 0b0100,
            Self::ProximityBand => 0b1000,
        }
    }

    /// Short label for status displays
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Parity => "parity",
            Self::Divisibility => "divisibility",
            Self::ProximityBand => "proximity",
        }
    }
}

/// Set of hint categories already shown this round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintSet(u8);

impl HintSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, category: HintCategory) -> bool {
        self.0 & category.bit() != 0
    }

    /// Return a copy of the set with `category` added
    #[inline]
    #[must_use]
    pub const fn with(self, category: HintCategory) -> Self {
        Self(self.0 | category.bit())
    }

    /// Number of distinct categories shown
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True once every category has been shown
    #[inline]
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.len() == HintCategory::ALL.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub const fn of(value: u32) -> Self {
        if value % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

/// Coarse band derived from the width of the known interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanBand {
    Tight,
    Moderate,
    Broad,
}

impl SpanBand {
    #[must_use]
    pub const fn classify(span: u32) -> Self {
        match span {
            0..=10 => Self::Tight,
            11..=20 => Self::Moderate,
            _ => Self::Broad,
        }
    }
}

/// Divisors tried by the divisibility hint, in order
pub const HINT_DIVISORS: [u32; 3] = [3, 5, 7];

/// A resolved hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// The secret lies in `[lower, upper]`
    Range { lower: u32, upper: u32 },
    Parity(Parity),
    /// First of [`HINT_DIVISORS`] dividing the secret, or `None`
    Divisibility(Option<u32>),
    ProximityBand(SpanBand),
}

impl Hint {
    #[must_use]
    pub const fn category(self) -> HintCategory {
        match self {
            Self::Range { .. } => HintCategory::Range,
            Self::Parity(_) => HintCategory::Parity,
            Self::Divisibility(_) => HintCategory::Divisibility,
            Self::ProximityBand(_) => HintCategory::ProximityBand,
        }
    }

    fn range(bounds: Bounds) -> Self {
        let (lower, upper) = bounds.clamped();
        Self::Range { lower, upper }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { lower, upper } => {
                write!(f, "Hint: The number is between {lower} and {upper}.")
            }
            Self::Parity(Parity::Even) => write!(f, "Hint: The number is even."),
            Self::Parity(Parity::Odd) => write!(f, "Hint: The number is odd."),
            Self::Divisibility(Some(d)) => write!(f, "Hint: The number is divisible by {d}."),
            Self::Divisibility(None) => {
                write!(f, "Hint: The number is not divisible by 3, 5, or 7.")
            }
            Self::ProximityBand(SpanBand::Tight) => {
                write!(f, "Hint: You are very close (tight range)!")
            }
            Self::ProximityBand(SpanBand::Moderate) => {
                write!(f, "Hint: You are getting warmer (moderate range).")
            }
            Self::ProximityBand(SpanBand::Broad) => {
                write!(f, "Hint: Still quite broad; try splitting the range.")
            }
        }
    }
}

/// Resolve the next hint for a round
///
/// Picks the first category not yet in `given`, in [`HintCategory::ALL`]
/// order, and returns the hint together with the updated set. When every
/// category has already been shown the range hint repeats and the set is
/// returned unchanged.
///
/// # Examples
/// ```
/// use number_guess::core::{Bounds, Hint, HintCategory, HintSet, next_hint};
///
/// let (hint, given) = next_hint(42, Bounds::FULL, HintSet::new());
/// assert_eq!(hint, Hint::Range { lower: 1, upper: 100 });
/// assert!(given.contains(HintCategory::Range));
/// ```
#[must_use]
pub fn next_hint(secret: u32, bounds: Bounds, given: HintSet) -> (Hint, HintSet) {
    let Some(category) = HintCategory::ALL
        .into_iter()
        .find(|&category| !given.contains(category))
    else {
        return (Hint::range(bounds), given);
    };

    let hint = match category {
        HintCategory::Range => Hint::range(bounds),
        HintCategory::Parity => Hint::Parity(Parity::of(secret)),
        HintCategory::Divisibility => {
            Hint::Divisibility(HINT_DIVISORS.into_iter().find(|d| secret % d == 0))
        }
        HintCategory::ProximityBand => Hint::ProximityBand(SpanBand::classify(bounds.span())),
    };

    (hint, given.with(category))
}
