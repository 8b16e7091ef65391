//! Strictly Creatures library - a hint-driven creature guessing game
//!
//! A random creature is drawn from the PokéAPI catalog; one hint is shown
//! straight away and each wrong guess unlocks another, up to five guesses.
//!
//! # Architecture
//!
//! - **Game**: subject model, name normalization, hint table, guess rules, sessions
//! - **Catalog**: HTTP fetcher turning two catalog documents into a [`Subject`]
//! - **Controller**: single owner of the session, discards stale loads
//! - **TUI**: ratatui front-end
//!
//! # Example
//!
//! ```no_run
//! use strictly_creatures::{CatalogClient, GameConfig, Phase, SessionController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let client = CatalogClient::new(&config)?;
//! let mut controller = SessionController::from_config(&config);
//!
//! if controller.load(&client).await == Phase::Playing {
//!     println!("{:?}", controller.visible_hints());
//!     controller.submit_guess("pikachu");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod controller;
mod error;
mod game;
mod tui;

// Crate-level exports - Catalog
pub use catalog::{CatalogClient, GENUS_LOCALE, SubjectSource};

// Crate-level exports - Configuration
pub use config::GameConfig;

// Crate-level exports - Session control
pub use controller::{LoadTicket, SessionController};

// Crate-level exports - Errors
pub use error::{ConfigError, FetchError, FetchErrorKind, FetchStage};

// Crate-level exports - Game core
pub use game::{
    AUDIO_PLACEHOLDER, DEFAULT_MAX_ID, DEFAULT_MIN_ID, FIRST_HINT_MESSAGE, GuessOutcome, HINT_COUNT,
    HINTS, HintFn, IdSampler, LOAD_FAILED_MESSAGE, LOADING_MESSAGE, MAX_ATTEMPTS, Phase, Session,
    Subject, UNKNOWN_GENUS, UNKNOWN_LABEL, display_case, evaluate_guess, format_generation,
    is_correct, normalize_name, visible_hint_count, visible_hints,
};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, LoadEvent, run_tui};
