//! Learning domain: content store, progression engine, quiz sessions,
//! achievements, roster queries and the playback simulation. The [`Academy`]
//! container owns all of it; views hold a reference and call operations
//! directly.

pub mod achievement;
pub mod content;
pub mod errors;
pub mod playback;
pub mod progression;
pub mod quiz;
pub mod roster;
pub mod seed_loader;
pub mod state;
pub mod types;

pub use content::ContentStore;
pub use errors::AcademyError;
pub use playback::{PlaybackHandle, PlaybackSettings};
pub use progression::level_for_xp;
pub use quiz::{Advance, AnswerFeedback, QuizOutcome, QuizSession, SessionPhase};
pub use roster::{export_csv, EXPORT_HEADER};
pub use seed_loader::{
    load_achievements_from_json, load_lessons_from_json, load_quizzes_from_json,
    load_seed_dir, load_vendors_from_json, SeedBundle,
};
pub use state::{
    seed_achievements, seed_lessons, seed_progress, seed_quizzes, seed_vendors, Academy,
};
pub use types::*;
