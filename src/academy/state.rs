//! The `Academy` state container and the canonical starter content it is
//! seeded with. Seed timestamps are deterministic from the `now` provided so
//! tests can supply a fixed value; production callers pass `Utc::now()`.

use chrono::{DateTime, Duration, Utc};

use crate::academy::content::ContentStore;
use crate::academy::types::{
    Achievement, AchievementTrigger, Lesson, LessonStatus, Quiz, VendorProgress, VendorRecord,
};
use crate::config::GamificationConfig;

/// Process-wide learning state: content, the active vendor's progression,
/// achievements, and the roster. Owned explicitly and passed to views by
/// reference; there are no hidden globals.
#[derive(Debug, Clone)]
pub struct Academy {
    config: GamificationConfig,
    pub content: ContentStore,
    pub progress: VendorProgress,
    pub achievements: Vec<Achievement>,
    pub vendors: Vec<VendorRecord>,
}

impl Academy {
    /// An empty academy with no content, at level tier 0.
    pub fn new(config: GamificationConfig) -> Self {
        Self {
            config,
            content: ContentStore::new(),
            progress: VendorProgress::new(),
            achievements: Vec::new(),
            vendors: Vec::new(),
        }
    }

    /// An academy populated with the canonical starter content.
    pub fn seeded(config: GamificationConfig, now: DateTime<Utc>) -> Self {
        Self {
            config,
            content: ContentStore::from_parts(seed_lessons(), seed_quizzes()),
            progress: seed_progress(now),
            achievements: seed_achievements(now),
            vendors: seed_vendors(now),
        }
    }

    pub fn config(&self) -> &GamificationConfig {
        &self.config
    }

    /// Title of the active vendor's current tier.
    pub fn level_title(&self) -> &str {
        self.config.level_title(self.progress.level)
    }
}

/// Starter lessons: one finished, one underway, one ready, one gated.
pub fn seed_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: 1,
            title: "How to Upload Products like a Boss".to_string(),
            thumbnail: "https://images.example.com/uploads.jpg".to_string(),
            video_url: "https://videos.example.com/uploads".to_string(),
            progress: 100,
            status: LessonStatus::Completed,
            level_required: 1,
            points: 25,
            description: "Master the art of product uploads with pro tips".to_string(),
        },
        Lesson {
            id: 2,
            title: "Price Like a Pro: Strategy Secrets".to_string(),
            thumbnail: "https://images.example.com/pricing.jpg".to_string(),
            video_url: "https://videos.example.com/pricing".to_string(),
            progress: 60,
            status: LessonStatus::InProgress,
            level_required: 2,
            points: 30,
            description: "Learn insider pricing strategies that convert".to_string(),
        },
        Lesson {
            id: 3,
            title: "Customer Reviews: Turn Feedback into Gold".to_string(),
            thumbnail: "https://images.example.com/reviews.jpg".to_string(),
            video_url: "https://videos.example.com/reviews".to_string(),
            progress: 0,
            status: LessonStatus::Available,
            level_required: 2,
            points: 35,
            description: "Transform customer feedback into business growth".to_string(),
        },
        Lesson {
            id: 4,
            title: "Analytics Dashboard: Your Crystal Ball".to_string(),
            thumbnail: "https://images.example.com/analytics.jpg".to_string(),
            video_url: "https://videos.example.com/analytics".to_string(),
            progress: 0,
            status: LessonStatus::Locked,
            level_required: 3,
            points: 40,
            description: "Unlock the secrets hidden in your data".to_string(),
        },
    ]
}

/// Starter quiz questions for the first two lessons.
pub fn seed_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 1,
            lesson_id: 1,
            question: "What's the secret to writing product descriptions that sell?".to_string(),
            options: vec![
                "Write a novel about the product".to_string(),
                "Focus on benefits, not just features".to_string(),
                "Use as many emojis as possible".to_string(),
                "Copy from competitors".to_string(),
            ],
            correct_answer: 1,
            points: 20,
            explanation: "Benefits tell customers how the product improves their life!"
                .to_string(),
        },
        Quiz {
            id: 2,
            lesson_id: 2,
            question: "Which pricing strategy works best for new products?".to_string(),
            options: vec![
                "Always lowest price".to_string(),
                "Market research first".to_string(),
                "Copy competitors".to_string(),
                "Random pricing".to_string(),
            ],
            correct_answer: 1,
            points: 25,
            explanation:
                "Market research helps you understand your competition and customer willingness to pay."
                    .to_string(),
        },
    ]
}

/// Starter achievements. Each maps to a measurable trigger so the unlock
/// pass can evaluate it from the vendor's stats.
pub fn seed_achievements(now: DateTime<Utc>) -> Vec<Achievement> {
    vec![
        Achievement::new(
            1,
            "Dashboard Ninja",
            "Completed your first lesson",
            "⚡",
            AchievementTrigger::LessonsCompleted { required: 1 },
        )
        .with_unlocked(now),
        Achievement::new(
            2,
            "Price Tag Warrior",
            "Earned 300 XP mastering your pricing",
            "💪",
            AchievementTrigger::XpEarned { required: 300 },
        ),
        Achievement::new(
            3,
            "Review Responder",
            "Passed 10 quizzes",
            "🗣️",
            AchievementTrigger::QuizzesPassed { required: 10 },
        ),
        Achievement::new(
            4,
            "Analytics Wizard",
            "Reached the Super Seller tier",
            "🧙",
            AchievementTrigger::LevelReached { level: 4 },
        ),
    ]
}

/// Starter roster rows for the leaderboard and progress export.
pub fn seed_vendors(now: DateTime<Utc>) -> Vec<VendorRecord> {
    vec![
        VendorRecord {
            id: 1,
            username: "sarah_seller".to_string(),
            email: "sarah@example.com".to_string(),
            level: 3,
            xp: 892,
            lessons_completed: 8,
            quizzes_passed: 6,
            last_active: now - Duration::hours(2),
        },
        VendorRecord {
            id: 2,
            username: "mike_merchant".to_string(),
            email: "mike@example.com".to_string(),
            level: 2,
            xp: 456,
            lessons_completed: 5,
            quizzes_passed: 3,
            last_active: now - Duration::days(1),
        },
    ]
}

/// The active vendor's starting progression: tier 1 (displayed as level 2)
/// with 145 XP and a three-day streak.
pub fn seed_progress(now: DateTime<Utc>) -> VendorProgress {
    VendorProgress {
        level: 1,
        xp: 145,
        daily_streak: 3,
        lessons_completed: 1,
        quizzes_passed: 1,
        last_login: Some(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::academy::progression::level_for_xp;

    #[test]
    fn seeded_level_is_derived_from_seeded_xp() {
        let config = GamificationConfig::default();
        let academy = Academy::seeded(config, Utc::now());
        assert_eq!(
            academy.progress.level,
            level_for_xp(academy.progress.xp, &academy.config().level_thresholds)
        );
        assert_eq!(academy.progress.display_level(), 2);
        assert_eq!(academy.level_title(), "Marketplace Explorer");
    }

    #[test]
    fn seed_content_is_linked() {
        let academy = Academy::seeded(GamificationConfig::default(), Utc::now());
        for quiz in academy.content.quizzes() {
            assert!(academy.content.lesson(quiz.lesson_id).is_some());
        }
        assert_eq!(academy.content.lessons().len(), 4);
        assert_eq!(academy.achievements.len(), 4);
        assert!(academy.achievements[0].unlocked);
    }
}
