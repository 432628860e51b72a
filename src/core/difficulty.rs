//! Difficulty levels and their attempt budgets

use std::fmt;

/// A named difficulty with a fixed attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    name: &'static str,
    attempt_budget: u32,
}

/// Known difficulties in menu order
pub const DIFFICULTIES: [Difficulty; 3] = [
    Difficulty::new("Easy", 10),
    Difficulty::new("Medium", 5),
    Difficulty::new("Hard", 3),
];

impl Difficulty {
    /// # Panics
    /// Panics (at compile time for consts) if `attempt_budget` is zero.
    #[must_use]
    pub const fn new(name: &'static str, attempt_budget: u32) -> Self {
        assert!(attempt_budget > 0, "attempt budget must be positive");
        Self {
            name,
            attempt_budget,
        }
    }

    /// Display name, also the ledger key
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[inline]
    #[must_use]
    pub const fn attempt_budget(self) -> u32 {
        self.attempt_budget
    }

    /// Find a difficulty by 1-based menu index or case-insensitive name
    ///
    /// # Examples
    /// ```
    /// use number_guess::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_choice("2").unwrap().name(), "Medium");
    /// assert_eq!(Difficulty::from_choice("hard").unwrap().attempt_budget(), 3);
    /// assert!(Difficulty::from_choice("4").is_none());
    /// ```
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();

        if let Ok(index) = choice.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| DIFFICULTIES.get(i))
                .copied();
        }

        DIFFICULTIES
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(choice))
            .copied()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budgets_are_positive() {
        assert!(DIFFICULTIES.iter().all(|d| d.attempt_budget() > 0));
    }

    #[test]
    fn menu_order() {
        let names: Vec<_> = DIFFICULTIES.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["Easy", "Medium", "Hard"]);
        assert_eq!(DIFFICULTIES[0].attempt_budget(), 10);
        assert_eq!(DIFFICULTIES[1].attempt_budget(), 5);
        assert_eq!(DIFFICULTIES[2].attempt_budget(), 3);
    }

    #[test]
    fn from_choice_by_index() {
        assert_eq!(Difficulty::from_choice("1"), Some(DIFFICULTIES[0]));
        assert_eq!(Difficulty::from_choice(" 3 "), Some(DIFFICULTIES[2]));
        assert_eq!(Difficulty::from_choice("0"), None);
        assert_eq!(Difficulty::from_choice("4"), None);
    }

    #[test]
    fn from_choice_by_name() {
        assert_eq!(Difficulty::from_choice("MEDIUM"), Some(DIFFICULTIES[1]));
        assert_eq!(Difficulty::from_choice("easy"), Some(DIFFICULTIES[0]));
        assert_eq!(Difficulty::from_choice("nightmare"), None);
        assert_eq!(Difficulty::from_choice(""), None);
    }
}
