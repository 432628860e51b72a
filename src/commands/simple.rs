//! Simple interactive CLI mode
//!
//! Line-oriented session: pick a difficulty, play rounds, replay on demand.

use crate::core::Difficulty;
use crate::engine::{Game, RoundResult};
use crate::output::styled_feedback;
use crate::scores::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Reads player input from `input` and writes everything to `out`. End of
/// input finishes the session cleanly.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, R, I, O>(
    game: &mut Game<S, R>,
    preset: Option<Difficulty>,
    input: &mut I,
    out: &mut O,
) -> Result<()>
where
    S: ScoreStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(
        out,
        "{}",
        "Welcome to the Number Guessing Game!".bright_cyan().bold()
    )?;
    writeln!(out, "I'm thinking of a number between 1 and 100.")?;

    let difficulty = match preset {
        Some(difficulty) => difficulty,
        None => match select_difficulty(game, input, out)? {
            Some(difficulty) => difficulty,
            None => return Ok(()),
        },
    };

    writeln!(
        out,
        "Great! You have selected the {} difficulty level",
        difficulty.name().bright_yellow()
    )?;
    writeln!(out, "Let's start the game!")?;

    loop {
        let finished = play_round(game, difficulty, input, out)?;

        if let Some(best) = game.ledger().best(difficulty.name()) {
            writeln!(
                out,
                "Current high score for {}: {best} attempts",
                difficulty.name()
            )?;
        }

        if finished.is_none() {
            break;
        }

        let again = prompt(input, out, "Do you want to play again? (yes/no): ")?;
        if !matches!(
            again.as_deref().map(str::to_lowercase).as_deref(),
            Some("yes" | "y")
        ) {
            break;
        }
    }

    writeln!(out, "{}", "Thank you for playing!".bright_cyan())?;
    Ok(())
}

fn select_difficulty<S, R, I, O>(
    game: &Game<S, R>,
    input: &mut I,
    out: &mut O,
) -> Result<Option<Difficulty>>
where
    S: ScoreStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "Please select the difficulty level:")?;
    for entry in game.list_difficulties() {
        let high_score = entry
            .best
            .map(|best| format!(" | High score: {best} attempts"))
            .unwrap_or_default();
        writeln!(
            out,
            "{}. {} ({} chances){}",
            entry.index,
            entry.difficulty.name(),
            entry.difficulty.attempt_budget(),
            high_score.bright_black()
        )?;
    }

    loop {
        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            return Ok(None);
        };

        if let Some(difficulty) = Difficulty::from_choice(&choice) {
            return Ok(Some(difficulty));
        }

        if choice.trim().parse::<i64>().is_ok() {
            writeln!(out, "{}", "Invalid choice. Please try again.".yellow())?;
        } else {
            writeln!(out, "{}", "Please enter a number.".yellow())?;
        }
    }
}

/// Play one round; `None` means input ended mid-round
fn play_round<S, R, I, O>(
    game: &mut Game<S, R>,
    difficulty: Difficulty,
    input: &mut I,
    out: &mut O,
) -> Result<Option<RoundResult>>
where
    S: ScoreStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let budget = difficulty.attempt_budget();
    let mut round = game.start_round(difficulty);

    writeln!(out, "\nGuess the number (1-100). You have {budget} attempts.")?;
    writeln!(
        out,
        "Type 'hint' for a clue (costs 1 attempt), or 'quit' to end the round."
    )?;

    loop {
        let label = format!(
            "Attempt {}/{budget} - Enter your guess: ",
            round.attempts_used() + 1
        );
        let Some(line) = prompt(input, out, &label)? else {
            let _ = game.submit_quit(&mut round);
            return Ok(None);
        };

        match game.submit(&mut round, &line) {
            Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
            Ok(output) => {
                for feedback in &output.messages {
                    writeln!(out, "{}", styled_feedback(feedback))?;
                }
                if let Some(result) = output.terminal {
                    return Ok(Some(result));
                }
            }
        }
    }
}

/// Print `label` and read one line; `None` at end of input
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DIFFICULTIES;
    use crate::engine::Round;
    use crate::scores::{MemoryStore, ScoreLedger};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const SEED: u64 = 2024;

    fn game(ledger: &str) -> Game<MemoryStore> {
        Game::new(
            ScoreLedger::load(MemoryStore::with_contents(ledger)),
            StdRng::seed_from_u64(SEED),
        )
    }

    fn first_secret() -> u32 {
        Round::start(DIFFICULTIES[0], &mut StdRng::seed_from_u64(SEED)).secret()
    }

    fn run(game: &mut Game<MemoryStore>, preset: Option<Difficulty>, input: &str) -> String {
        colored::control::set_override(false);
        let mut reader = Cursor::new(input.to_string());
        let mut out = Vec::new();
        run_simple(game, preset, &mut reader, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_input_exits_gracefully() {
        let mut game = game("{}");
        let text = run(&mut game, None, "");

        assert!(text.contains("Welcome to the Number Guessing Game!"));
        assert!(text.contains("1. Easy (10 chances)"));
        assert!(!text.contains("Thank you for playing!"));
    }

    #[test]
    fn menu_shows_existing_high_score() {
        let mut game = game(r#"{"Hard": 2}"#);
        let text = run(&mut game, None, "");

        assert!(text.contains("3. Hard (3 chances) | High score: 2 attempts"));
        assert!(text.contains("2. Medium (5 chances)\n"));
    }

    #[test]
    fn invalid_menu_choices_reprompt() {
        let mut game = game("{}");
        let text = run(&mut game, None, "9\nabc\n3\nquit\nno\n");

        assert!(text.contains("Invalid choice. Please try again."));
        assert!(text.contains("Please enter a number."));
        assert!(text.contains("You have selected the Hard difficulty level"));
        assert!(text.contains("Round ended. Better luck next time!"));
        assert!(text.contains("Thank you for playing!"));
    }

    #[test]
    fn winning_round_records_high_score() {
        let mut game = game("{}");
        let input = format!("2\nabc\n150\n{}\nno\n", first_secret());
        let text = run(&mut game, None, &input);

        assert!(text.contains("Please enter a valid number, 'hint', or 'quit'."));
        assert!(text.contains("Your guess must be between 1 and 100."));
        assert!(text.contains("Attempt 1/5 - Enter your guess:"));
        assert!(!text.contains("Attempt 2/5"));
        assert!(text.contains("Congratulations! You guessed the number in 1 attempts"));
        assert!(text.contains("New high score for Medium: 1 attempts!"));
        assert!(text.contains("Current high score for Medium: 1 attempts"));
        assert_eq!(game.ledger().best("Medium"), Some(1));
    }

    #[test]
    fn hint_consumes_attempt_in_prompt() {
        let mut game = game("{}");
        let text = run(&mut game, Some(DIFFICULTIES[0]), "hint\nquit\nn\n");

        assert!(text.contains("Hint: The number is between 1 and 100."));
        assert!(text.contains("(Hint used. Attempts remaining: 9)"));
        assert!(text.contains("Attempt 2/10 - Enter your guess:"));
    }

    #[test]
    fn replay_starts_new_round() {
        let mut game = game("{}");
        let text = run(&mut game, Some(DIFFICULTIES[2]), "quit\nyes\nquit\nno\n");

        assert_eq!(text.matches("Guess the number (1-100).").count(), 2);
        assert!(text.ends_with("Thank you for playing!\n"));
    }

    #[test]
    fn exhausted_round_reveals_secret() {
        let secret = first_secret();
        let wrong = if secret > 50 { 1 } else { 100 };
        let input = format!("{wrong}\n{wrong}\n{wrong}\nno\n");

        let mut game = game("{}");
        let text = run(&mut game, Some(DIFFICULTIES[2]), &input);

        assert!(text.contains(&format!("Out of attempts! The number was {secret}.")));
        assert_eq!(game.ledger().best("Hard"), None);
    }

    #[test]
    fn input_ending_mid_round_stops_session() {
        let miss = if first_secret() == 50 { 51 } else { 50 };
        let mut game = game("{}");
        let text = run(&mut game, Some(DIFFICULTIES[0]), &format!("{miss}\n"));

        assert!(text.contains("Attempt 2/10"));
        assert!(!text.contains("play again"));
    }
}
