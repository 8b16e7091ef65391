//! A single game session and its phase transitions.

use super::MAX_ATTEMPTS;
use super::hints::visible_hints;
use super::rules::{GuessOutcome, evaluate_guess};
use super::subject::Subject;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, instrument, warn};

/// Status shown while a subject is loading.
pub const LOADING_MESSAGE: &str = "Loading a new Pokémon...";

/// Status shown once the first hint is available.
pub const FIRST_HINT_MESSAGE: &str = "First hint unlocked! Who's that Pokémon?";

/// User-facing text for any load failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load a Pokémon. Press 'r' to try again.";

/// Discrete game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Waiting for the catalog.
    Loading,
    /// Accepting guesses.
    Playing,
    /// The player named the subject.
    Won,
    /// The attempt budget ran out.
    Lost,
    /// The subject could not be loaded.
    Error,
}

impl Phase {
    /// Returns true for phases that only allow starting over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost | Phase::Error)
    }
}

/// Mutable state of one game. Replaced wholesale on start and replay.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    subject: Option<Subject>,
    phase: Phase,
    attempts: usize,
    message: String,
    error: Option<String>,
}

impl Session {
    /// A fresh session waiting for its subject.
    #[instrument]
    pub fn loading() -> Self {
        debug!("Creating loading session");
        Self {
            subject: None,
            phase: Phase::Loading,
            attempts: 0,
            message: LOADING_MESSAGE.to_string(),
            error: None,
        }
    }

    /// Binds the fetched subject and starts play. Ignored unless loading.
    #[instrument(skip(self, subject), fields(subject = %subject.name(), phase = %self.phase))]
    pub fn bind(&mut self, subject: Subject) -> bool {
        if self.phase != Phase::Loading {
            warn!("Cannot bind subject outside the loading phase");
            return false;
        }
        info!(id = subject.id(), "Subject bound, play begins");
        self.subject = Some(subject);
        self.phase = Phase::Playing;
        self.message = FIRST_HINT_MESSAGE.to_string();
        true
    }

    /// Marks the load as failed. Ignored unless loading.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn fail(&mut self) -> bool {
        if self.phase != Phase::Loading {
            warn!("Cannot fail a session outside the loading phase");
            return false;
        }
        self.phase = Phase::Error;
        self.message = LOAD_FAILED_MESSAGE.to_string();
        self.error = Some(LOAD_FAILED_MESSAGE.to_string());
        true
    }

    /// Submits a guess.
    ///
    /// Returns `None` without touching state when not playing or when the
    /// trimmed guess is empty. Otherwise the attempt is counted, even a
    /// winning one.
    #[instrument(skip(self), fields(phase = %self.phase, attempts = self.attempts))]
    pub fn submit_guess(&mut self, guess: &str) -> Option<GuessOutcome> {
        if self.phase != Phase::Playing {
            debug!("Guess ignored outside the playing phase");
            return None;
        }
        let guess = guess.trim();
        if guess.is_empty() {
            debug!("Empty guess ignored");
            return None;
        }
        let subject = self.subject.as_ref()?;

        self.attempts = self.attempts.saturating_add(1).min(MAX_ATTEMPTS);
        let outcome = evaluate_guess(guess, subject, self.attempts);
        self.message = outcome.message(subject);
        self.phase = match outcome {
            GuessOutcome::Won { .. } => Phase::Won,
            GuessOutcome::Lost => Phase::Lost,
            GuessOutcome::Continue => Phase::Playing,
        };
        info!(?outcome, attempts = self.attempts, "Guess submitted");
        Some(outcome)
    }

    /// Hints currently visible; empty until a subject is bound.
    pub fn visible_hints(&self) -> Vec<String> {
        self.subject
            .as_ref()
            .map(|subject| visible_hints(subject, self.attempts))
            .unwrap_or_default()
    }

    /// The attempt cap.
    pub fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }

    /// Attempts left before the game is lost.
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempts
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
