use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a lesson as seen on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LessonStatus {
    /// Gated behind a level the vendor has not reached yet.
    Locked,
    /// Unlocked and ready to start.
    Available,
    /// Started but not finished (partial watch progress).
    InProgress,
    /// Finished; progress is pinned at 100.
    Completed,
}

impl std::fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LessonStatus::Locked => "locked",
            LessonStatus::Available => "available",
            LessonStatus::InProgress => "in-progress",
            LessonStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A video lesson with its unlock gate and XP reward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub thumbnail: String,
    pub video_url: String,
    /// Watch progress percentage, 0-100.
    pub progress: u8,
    pub status: LessonStatus,
    /// Display (1-based) level needed to unlock this lesson.
    pub level_required: u32,
    /// XP awarded on completion.
    pub points: u32,
    pub description: String,
}

impl Lesson {
    /// Build a lesson from an authoring draft. New lessons start available
    /// with zero progress; level gating is applied on the next level check.
    pub fn from_draft(id: u32, draft: LessonDraft) -> Self {
        Self {
            id,
            title: draft.title,
            thumbnail: draft.thumbnail,
            video_url: draft.video_url,
            progress: 0,
            status: LessonStatus::Available,
            level_required: draft.level_required,
            points: draft.points,
            description: draft.description,
        }
    }
}

/// Fixed-shape input for creating a lesson (what the authoring form binds to).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonDraft {
    pub title: String,
    pub thumbnail: String,
    pub video_url: String,
    pub level_required: u32,
    pub points: u32,
    pub description: String,
}

/// A single quiz question attached to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quiz {
    pub id: u32,
    pub lesson_id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`.
    pub correct_answer: usize,
    /// XP contributed to the session score when answered correctly.
    pub points: u32,
    pub explanation: String,
}

impl Quiz {
    pub fn from_draft(id: u32, draft: QuizDraft) -> Self {
        Self {
            id,
            lesson_id: draft.lesson_id,
            question: draft.question,
            options: draft.options,
            correct_answer: draft.correct_answer,
            points: draft.points,
            explanation: draft.explanation,
        }
    }
}

/// Fixed-shape input for creating a quiz question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDraft {
    pub lesson_id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub points: u32,
    pub explanation: String,
}

/// Condition that unlocks an achievement. Progress is read off the vendor's
/// stats, so checks are cheap enough to run after every award.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementTrigger {
    LessonsCompleted { required: u32 },
    QuizzesPassed { required: u32 },
    /// 0-based tier to reach.
    LevelReached { level: u32 },
    XpEarned { required: u32 },
}

/// A badge on the achievement showcase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub trigger: AchievementTrigger,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn new(
        id: u32,
        title: &str,
        description: &str,
        icon: &str,
        trigger: AchievementTrigger,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            trigger,
            unlocked: false,
            unlocked_at: None,
        }
    }

    /// Builder for seeds that start already earned.
    pub fn with_unlocked(mut self, at: DateTime<Utc>) -> Self {
        self.unlocked = true;
        self.unlocked_at = Some(at);
        self
    }
}

/// One vendor's row in the progress roster (leaderboard and CSV export).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorRecord {
    pub id: u32,
    pub username: String,
    pub email: String,
    /// Display (1-based) level as shown on the dashboard.
    pub level: u32,
    pub xp: u32,
    pub lessons_completed: u32,
    pub quizzes_passed: u32,
    pub last_active: DateTime<Utc>,
}

/// The active vendor's progression state.
///
/// `level` is a 0-based tier index and is always derived from `xp` against
/// the configured threshold table; it is never written independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorProgress {
    pub level: u32,
    pub xp: u32,
    pub daily_streak: u32,
    pub lessons_completed: u32,
    pub quizzes_passed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl VendorProgress {
    /// Fresh state for a brand-new vendor.
    pub fn new() -> Self {
        Self {
            level: 0,
            xp: 0,
            daily_streak: 0,
            lessons_completed: 0,
            quizzes_passed: 0,
            last_login: None,
        }
    }

    /// 1-based level for display ("Level 2 - Marketplace Explorer").
    pub fn display_level(&self) -> u32 {
        self.level + 1
    }

    /// XP cutoff for the next tier, or `None` at the top of the table.
    pub fn next_threshold(&self, thresholds: &[u32]) -> Option<u32> {
        thresholds.get(self.level as usize + 1).copied()
    }
}

impl Default for VendorProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a progression operation: what changed and what it unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    /// XP added by this operation (0 for no-ops).
    pub xp_awarded: u32,
    pub new_xp: u32,
    pub previous_level: u32,
    pub new_level: u32,
    /// Lessons flipped from locked to available by a level-up.
    pub unlocked_lessons: Vec<u32>,
    /// Achievements earned during this operation.
    pub unlocked_achievements: Vec<u32>,
}

impl ProgressReport {
    /// Report for an operation that changed nothing.
    pub fn unchanged(progress: &VendorProgress) -> Self {
        Self {
            xp_awarded: 0,
            new_xp: progress.xp,
            previous_level: progress.level,
            new_level: progress.level,
            unlocked_lessons: Vec::new(),
            unlocked_achievements: Vec::new(),
        }
    }

    pub fn leveled_up(&self) -> bool {
        self.new_level > self.previous_level
    }
}

/// Totals for the admin analytics tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsSummary {
    pub vendors: usize,
    pub lessons: usize,
    pub quizzes: usize,
}
