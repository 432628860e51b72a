//! Formatting utilities for terminal output

use crate::core::{HintCategory, HintSet};
use crate::engine::Feedback;
use colored::{ColoredString, Colorize};

/// Colour a feedback line by what it tells the player
#[must_use]
pub fn styled_feedback(feedback: &Feedback) -> ColoredString {
    let text = feedback.to_string();
    match feedback {
        Feedback::Higher(_) | Feedback::Lower(_) => text.normal(),
        Feedback::Proximity(_) => text.bright_magenta(),
        Feedback::Hint(_) | Feedback::AutoHint(_) => text.bright_cyan(),
        Feedback::HintUsed { .. } => text.bright_black(),
        Feedback::Won { .. } => text.green().bold(),
        Feedback::NewRecord { .. } => text.bright_yellow().bold(),
        Feedback::RecordRetained { .. } => text.yellow(),
        Feedback::Quit => text.white(),
        Feedback::Exhausted { .. } => text.red().bold(),
    }
}

/// Human label for a stored best score
#[must_use]
pub fn best_label(best: Option<u32>) -> String {
    best.map_or_else(|| "no record".to_string(), |n| format!("{n} attempts"))
}

/// Categories of a hint set as check marks, in cycle order
#[must_use]
pub fn hint_checklist(given: HintSet) -> String {
    HintCategory::ALL
        .iter()
        .map(|&category| {
            let mark = if given.contains(category) { '✔' } else { '·' };
            format!("{mark} {}", category.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
