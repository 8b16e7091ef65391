//! Hint table and visibility rule.

use super::subject::{Subject, UNKNOWN_LABEL, display_case};
use super::{HINT_COUNT, MAX_ATTEMPTS};
use tracing::instrument;

/// Text shown for the audio hint until cries are wired up.
pub const AUDIO_PLACEHOLDER: &str = "Cry: audio hints are not available yet";

/// Prefix the catalog puts in front of generation numerals.
const GENERATION_MARKER: &str = "generation-";

/// One hint, computed from the subject on demand.
pub type HintFn = fn(&Subject) -> String;

/// Hints in disclosure order.
pub const HINTS: [HintFn; HINT_COUNT] = [
    category_hint,
    generation_hint,
    color_hint,
    species_hint,
    audio_hint,
];

fn category_hint(subject: &Subject) -> String {
    let categories: Vec<String> = subject
        .categories()
        .iter()
        .map(|c| display_case(c))
        .collect();
    format!("Type: {}", categories.join(" / "))
}

fn generation_hint(subject: &Subject) -> String {
    format!("Generation: {}", format_generation(subject.generation()))
}

fn color_hint(subject: &Subject) -> String {
    format!("Color: {}", display_case(subject.color()))
}

fn species_hint(subject: &Subject) -> String {
    format!("Species: {}", subject.genus())
}

fn audio_hint(_subject: &Subject) -> String {
    AUDIO_PLACEHOLDER.to_string()
}

/// Formats a catalog generation label: `generation-iii` becomes `Generation III`.
///
/// An empty or `unknown` label formats as `Unknown`.
pub fn format_generation(label: &str) -> String {
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case(UNKNOWN_LABEL) {
        return "Unknown".to_string();
    }
    let suffix = label.strip_prefix(GENERATION_MARKER).unwrap_or(label);
    format!("Generation {}", suffix.to_uppercase())
}

/// Number of hints visible after `attempts` guesses.
pub fn visible_hint_count(attempts: usize) -> usize {
    attempts.saturating_add(1).min(MAX_ATTEMPTS).min(HINT_COUNT)
}

/// The first [`visible_hint_count`] hints for `subject`, recomputed on each call.
#[instrument(skip(subject), fields(subject = %subject.name()))]
pub fn visible_hints(subject: &Subject, attempts: usize) -> Vec<String> {
    HINTS
        .iter()
        .take(visible_hint_count(attempts))
        .map(|hint| hint(subject))
        .collect()
}
