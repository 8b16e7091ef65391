//! Session controller — single writer of the game session.
//!
//! Loads are split into [`SessionController::start`], which hands out a
//! [`LoadTicket`], and [`SessionController::resolve`], which applies the
//! fetch result only if the ticket still belongs to the current session.
//! A replay started while an older fetch is in flight therefore cannot be
//! overwritten by that older result.

use crate::catalog::SubjectSource;
use crate::config::GameConfig;
use crate::error::FetchError;
use crate::game::{GuessOutcome, IdSampler, Phase, Session, Subject};
use tracing::{debug, error, info, instrument, warn};

/// Claim on the session generation a fetch was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    generation: u64,
    id: u32,
}

impl LoadTicket {
    /// Session generation this load belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identifier to fetch.
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Owns the current [`Session`] and drives its transitions.
#[derive(Debug)]
pub struct SessionController {
    session: Session,
    sampler: IdSampler,
    generation: u64,
}

impl SessionController {
    /// Creates a controller drawing identifiers with `sampler`.
    #[instrument]
    pub fn new(sampler: IdSampler) -> Self {
        info!(range = ?sampler.range(), "Creating session controller");
        Self {
            session: Session::loading(),
            sampler,
            generation: 0,
        }
    }

    /// Creates a controller using the configured identifier range.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(IdSampler::new(*config.min_id(), *config.max_id()))
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current session generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the session with a fresh loading one and draws the next identifier.
    #[instrument(skip(self), fields(previous_phase = %self.session.phase()))]
    pub fn start(&mut self) -> LoadTicket {
        self.generation += 1;
        self.session = Session::loading();
        let ticket = LoadTicket {
            generation: self.generation,
            id: self.sampler.draw(),
        };
        info!(generation = ticket.generation, id = ticket.id, "Session started");
        ticket
    }

    /// Applies a finished fetch. Returns false if the ticket is stale.
    #[instrument(skip(self, result), fields(generation = ticket.generation, id = ticket.id))]
    pub fn resolve(&mut self, ticket: LoadTicket, result: Result<Subject, FetchError>) -> bool {
        if ticket.generation != self.generation {
            warn!(
                current_generation = self.generation,
                "Discarding load for a superseded session"
            );
            return false;
        }
        if *self.session.phase() != Phase::Loading {
            warn!(phase = %self.session.phase(), "Discarding load, session is no longer loading");
            return false;
        }
        match result {
            Ok(subject) => self.session.bind(subject),
            Err(e) => {
                error!(error = %e, "Failed to load subject");
                self.session.fail()
            }
        }
    }

    /// Starts a session and loads it from `source` in one step.
    #[instrument(skip(self, source))]
    pub async fn load(&mut self, source: &dyn SubjectSource) -> Phase {
        let ticket = self.start();
        let result = source.fetch_subject(ticket.id).await;
        self.resolve(ticket, result);
        *self.session.phase()
    }

    /// Submits a guess to the current session; `None` if it was ignored.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, guess: &str) -> Option<GuessOutcome> {
        let outcome = self.session.submit_guess(guess);
        if outcome.is_none() {
            debug!(phase = %self.session.phase(), "Guess not accepted");
        }
        outcome
    }

    /// Phase of the current session.
    pub fn phase(&self) -> Phase {
        *self.session.phase()
    }

    /// Attempts spent in the current session.
    pub fn attempts(&self) -> usize {
        *self.session.attempts()
    }

    /// The attempt cap.
    pub fn max_attempts(&self) -> usize {
        self.session.max_attempts()
    }

    /// Hints visible right now, in disclosure order.
    pub fn visible_hints(&self) -> Vec<String> {
        self.session.visible_hints()
    }

    /// Latest status line.
    pub fn message(&self) -> &str {
        self.session.message()
    }

    /// User-facing error, if the load failed.
    pub fn error(&self) -> Option<&str> {
        self.session.error().as_deref()
    }

    /// The bound subject, if any.
    pub fn subject(&self) -> Option<&Subject> {
        self.session.subject().as_ref()
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(IdSampler::default())
    }
}
