//! Guessing game core: subject model, name normalization, hints, rules and sessions.

mod hints;
mod normalize;
mod rules;
mod sampler;
mod session;
mod subject;

pub use hints::{AUDIO_PLACEHOLDER, HINTS, HintFn, format_generation, visible_hint_count, visible_hints};
pub use normalize::normalize_name;
pub use rules::{GuessOutcome, evaluate_guess, is_correct};
pub use sampler::IdSampler;
pub use session::{FIRST_HINT_MESSAGE, LOAD_FAILED_MESSAGE, LOADING_MESSAGE, Phase, Session};
pub use subject::{Subject, UNKNOWN_GENUS, UNKNOWN_LABEL, display_case};

/// Guesses allowed per session.
pub const MAX_ATTEMPTS: usize = 5;

/// Number of hints in the disclosure table.
pub const HINT_COUNT: usize = 5;

/// Default lowest catalog identifier.
pub const DEFAULT_MIN_ID: u32 = 1;

/// Default highest catalog identifier.
pub const DEFAULT_MAX_ID: u32 = 898;
