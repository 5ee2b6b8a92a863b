//! Seed data loaders for data-driven content initialization.
//!
//! Starter content ships as JSON under `data/seeds/` so operators can
//! customize lessons, quizzes, achievements and the roster without
//! recompiling. Loaded entities pass the same invariants the authoring
//! operations enforce.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::academy::content::ContentStore;
use crate::academy::errors::AcademyError;
use crate::academy::state::Academy;
use crate::academy::types::{
    Achievement, AchievementTrigger, Lesson, LessonStatus, Quiz, VendorProgress, VendorRecord,
};
use crate::config::GamificationConfig;
use crate::validation::require_answer_in_range;

#[derive(Debug, Deserialize)]
struct LessonSeed {
    id: u32,
    title: String,
    thumbnail: String,
    video_url: String,
    #[serde(default)]
    progress: u8,
    status: LessonStatus,
    level_required: u32,
    points: u32,
    description: String,
}

#[derive(Debug, Deserialize)]
struct QuizSeed {
    id: u32,
    lesson_id: u32,
    question: String,
    options: Vec<String>,
    correct_answer: usize,
    points: u32,
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct AchievementSeed {
    id: u32,
    title: String,
    description: String,
    icon: String,
    trigger: AchievementTrigger,
    #[serde(default)]
    unlocked: bool,
}

#[derive(Debug, Deserialize)]
struct VendorSeed {
    id: u32,
    username: String,
    email: String,
    level: u32,
    xp: u32,
    lessons_completed: u32,
    quizzes_passed: u32,
    last_active: DateTime<Utc>,
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, AcademyError> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| AcademyError::SeedData(format!("failed to parse {}: {}", path.display(), e)))
}

/// Load lessons from `lessons.json`. Completed entries are normalized to
/// 100% progress.
pub fn load_lessons_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Lesson>, AcademyError> {
    let seeds: Vec<LessonSeed> = parse(path.as_ref())?;
    let mut lessons = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if seed.progress > 100 {
            return Err(AcademyError::SeedData(format!(
                "lesson {}: progress {} is out of range",
                seed.id, seed.progress
            )));
        }
        let progress = if seed.status == LessonStatus::Completed {
            100
        } else {
            seed.progress
        };
        lessons.push(Lesson {
            id: seed.id,
            title: seed.title,
            thumbnail: seed.thumbnail,
            video_url: seed.video_url,
            progress,
            status: seed.status,
            level_required: seed.level_required,
            points: seed.points,
            description: seed.description,
        });
    }
    Ok(lessons)
}

/// Load quiz questions from `quizzes.json`, rejecting any whose correct
/// answer does not index its options.
pub fn load_quizzes_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Quiz>, AcademyError> {
    let seeds: Vec<QuizSeed> = parse(path.as_ref())?;
    let mut quizzes = Vec::with_capacity(seeds.len());
    for seed in seeds {
        require_answer_in_range(&seed.options, seed.correct_answer)
            .map_err(|e| AcademyError::SeedData(format!("quiz {}: {}", seed.id, e)))?;
        quizzes.push(Quiz {
            id: seed.id,
            lesson_id: seed.lesson_id,
            question: seed.question,
            options: seed.options,
            correct_answer: seed.correct_answer,
            points: seed.points,
            explanation: seed.explanation,
        });
    }
    Ok(quizzes)
}

/// Load achievements from `achievements.json`. Entries flagged unlocked are
/// stamped with the provided time.
pub fn load_achievements_from_json<P: AsRef<Path>>(
    path: P,
    now: DateTime<Utc>,
) -> Result<Vec<Achievement>, AcademyError> {
    let seeds: Vec<AchievementSeed> = parse(path.as_ref())?;
    Ok(seeds
        .into_iter()
        .map(|seed| {
            let achievement = Achievement::new(
                seed.id,
                &seed.title,
                &seed.description,
                &seed.icon,
                seed.trigger,
            );
            if seed.unlocked {
                achievement.with_unlocked(now)
            } else {
                achievement
            }
        })
        .collect())
}

/// Load roster rows from `vendors.json`.
pub fn load_vendors_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<VendorRecord>, AcademyError> {
    let seeds: Vec<VendorSeed> = parse(path.as_ref())?;
    Ok(seeds
        .into_iter()
        .map(|seed| VendorRecord {
            id: seed.id,
            username: seed.username,
            email: seed.email,
            level: seed.level,
            xp: seed.xp,
            lessons_completed: seed.lessons_completed,
            quizzes_passed: seed.quizzes_passed,
            last_active: seed.last_active,
        })
        .collect())
}

/// Everything a seed directory provides.
#[derive(Debug, Clone)]
pub struct SeedBundle {
    pub lessons: Vec<Lesson>,
    pub quizzes: Vec<Quiz>,
    pub achievements: Vec<Achievement>,
    pub vendors: Vec<VendorRecord>,
}

/// Load the full seed bundle from a directory holding `lessons.json`,
/// `quizzes.json`, `achievements.json` and `vendors.json`.
pub fn load_seed_dir<P: AsRef<Path>>(
    dir: P,
    now: DateTime<Utc>,
) -> Result<SeedBundle, AcademyError> {
    let dir = dir.as_ref();
    Ok(SeedBundle {
        lessons: load_lessons_from_json(dir.join("lessons.json"))?,
        quizzes: load_quizzes_from_json(dir.join("quizzes.json"))?,
        achievements: load_achievements_from_json(dir.join("achievements.json"), now)?,
        vendors: load_vendors_from_json(dir.join("vendors.json"))?,
    })
}

impl Academy {
    /// Build an academy from a seed directory, starting a fresh vendor at
    /// tier 0 over the loaded content.
    pub fn from_seed_dir<P: AsRef<Path>>(
        config: GamificationConfig,
        dir: P,
        now: DateTime<Utc>,
    ) -> Result<Self, AcademyError> {
        let bundle = load_seed_dir(dir, now)?;
        let mut academy = Self::new(config);
        academy.content = ContentStore::from_parts(bundle.lessons, bundle.quizzes);
        academy.achievements = bundle.achievements;
        academy.vendors = bundle.vendors;
        academy.progress = VendorProgress::new();
        Ok(academy)
    }
}
