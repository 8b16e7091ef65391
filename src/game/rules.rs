//! Guess evaluation.

use super::MAX_ATTEMPTS;
use super::normalize::normalize_name;
use super::subject::Subject;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of judging one validated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess named the subject; `attempts` includes the winning guess.
    Won {
        /// Attempts taken.
        attempts: usize,
    },
    /// The attempt budget is spent.
    Lost,
    /// Wrong guess with attempts remaining.
    Continue,
}

impl GuessOutcome {
    /// Returns true if this outcome ends the game.
    pub fn is_final(&self) -> bool {
        !matches!(self, GuessOutcome::Continue)
    }

    /// Status line shown to the player for this outcome.
    pub fn message(&self, subject: &Subject) -> String {
        match self {
            GuessOutcome::Won { attempts } => format!(
                "Correct! It's {}! You got it in {} {}.",
                subject.display_name(),
                attempts,
                if *attempts == 1 { "try" } else { "tries" }
            ),
            GuessOutcome::Lost => {
                format!("Out of guesses! It was {}.", subject.display_name())
            }
            GuessOutcome::Continue => "Not quite. A new hint is unlocked, guess again!".to_string(),
        }
    }
}

/// Returns true if `guess` names `subject` once both are normalized.
pub fn is_correct(guess: &str, subject: &Subject) -> bool {
    normalize_name(guess) == normalize_name(subject.name())
}

/// Judges a guess; `attempts` already counts this guess.
#[instrument(skip(subject), fields(answer = %subject.name()))]
pub fn evaluate_guess(guess: &str, subject: &Subject, attempts: usize) -> GuessOutcome {
    let outcome = if is_correct(guess, subject) {
        GuessOutcome::Won { attempts }
    } else if attempts >= MAX_ATTEMPTS {
        GuessOutcome::Lost
    } else {
        GuessOutcome::Continue
    };
    debug!(?outcome, "Guess evaluated");
    outcome
}
