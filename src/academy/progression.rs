//! Progression engine: XP accrual, level computation, and unlock
//! propagation. Levels are never stored independently; they are recomputed
//! from XP against the configured threshold table on every award, so the
//! "level is a pure function of XP" invariant holds even after out-of-band
//! edits.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::academy::errors::AcademyError;
use crate::academy::quiz::QuizOutcome;
use crate::academy::state::Academy;
use crate::academy::types::{LessonStatus, ProgressReport};
use crate::logutil::escape_log;

/// The 0-based tier for an XP total: the largest index whose cutoff is at or
/// below `xp`. Open-ended past the last cutoff. `thresholds` must be
/// ascending and start at 0 (enforced by config validation).
pub fn level_for_xp(xp: u32, thresholds: &[u32]) -> u32 {
    let mut tier = 0;
    for (index, &cutoff) in thresholds.iter().enumerate() {
        if xp >= cutoff {
            tier = index as u32;
        } else {
            break;
        }
    }
    tier
}

impl Academy {
    /// Add XP and recompute the tier. On a level-up, every locked lesson
    /// whose required level is now within reach flips to available. A zero
    /// amount is ignored and reports no change.
    pub fn award_xp(&mut self, amount: u32) -> ProgressReport {
        if amount == 0 {
            debug!("ignoring zero XP award");
            return ProgressReport::unchanged(&self.progress);
        }

        let previous_level = self.progress.level;
        self.progress.xp = self.progress.xp.saturating_add(amount);
        let new_level = level_for_xp(self.progress.xp, &self.config().level_thresholds);
        self.progress.level = new_level;

        let mut unlocked_lessons = Vec::new();
        if new_level > previous_level {
            info!(
                "level up: tier {} -> {} at {} XP ({})",
                previous_level,
                new_level,
                self.progress.xp,
                self.level_title()
            );
            let display_level = new_level + 1;
            for lesson in self.content.lessons_mut() {
                if lesson.status == LessonStatus::Locked && lesson.level_required <= display_level {
                    lesson.status = LessonStatus::Available;
                    unlocked_lessons.push(lesson.id);
                }
            }
            if !unlocked_lessons.is_empty() {
                info!("unlocked {} lesson(s)", unlocked_lessons.len());
            }
        }

        let unlocked_achievements = self.check_achievements();
        ProgressReport {
            xp_awarded: amount,
            new_xp: self.progress.xp,
            previous_level,
            new_level,
            unlocked_lessons,
            unlocked_achievements,
        }
    }

    /// Mark a lesson completed and award its points. Completing an already
    /// completed lesson is a no-op reported as unchanged; an unknown id is a
    /// `NotFound` error rather than a silent skip.
    pub fn complete_lesson(&mut self, lesson_id: u32) -> Result<ProgressReport, AcademyError> {
        let lesson = self
            .content
            .lesson_mut(lesson_id)
            .ok_or(AcademyError::NotFound {
                entity: "lesson",
                id: lesson_id,
            })?;

        if lesson.status == LessonStatus::Completed {
            debug!("lesson {} already completed", lesson_id);
            return Ok(ProgressReport::unchanged(&self.progress));
        }

        lesson.status = LessonStatus::Completed;
        lesson.progress = 100;
        let points = lesson.points;
        let title = lesson.title.clone();

        self.progress.lessons_completed += 1;
        info!(
            "lesson {} completed for {} XP: {}",
            lesson_id,
            points,
            escape_log(&title)
        );
        Ok(self.award_xp(points))
    }

    /// Bank a finished quiz session. The outcome can only come from a
    /// [`crate::academy::quiz::QuizSession`] that reached its final
    /// question, so the session's accounting is the score of record.
    pub fn record_quiz(&mut self, outcome: QuizOutcome) -> ProgressReport {
        info!(
            "quiz finished: {}/{} correct for {} XP",
            outcome.correct(),
            outcome.questions(),
            outcome.score()
        );
        if outcome.score() > 0 {
            self.progress.quizzes_passed += 1;
        }
        self.award_xp(outcome.score())
    }

    /// Register a login. The first login of a UTC day extends the streak
    /// (or restarts it at 1 after a missed day) and awards the configured
    /// streak XP; repeat logins the same day report no change.
    pub fn record_daily_login(&mut self, now: DateTime<Utc>) -> ProgressReport {
        let today = now.date_naive();
        match self.progress.last_login.map(|t| t.date_naive()) {
            Some(last) if last == today => {
                debug!("repeat login on {}", today);
                return ProgressReport::unchanged(&self.progress);
            }
            Some(last) if last.succ_opt() == Some(today) => {
                self.progress.daily_streak += 1;
                info!("daily streak extended to {}", self.progress.daily_streak);
            }
            _ => {
                self.progress.daily_streak = 1;
                info!("daily streak restarted");
            }
        }
        self.progress.last_login = Some(now);
        let streak_xp = self.config().streak_xp;
        self.award_xp(streak_xp)
    }
}
