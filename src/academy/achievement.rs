//! Achievement unlocking. Triggers are evaluated against the vendor's
//! running stats after every XP award, so a single big award can unlock
//! several badges at once.

use chrono::Utc;
use log::info;

use crate::academy::state::Academy;
use crate::academy::types::{AchievementTrigger, VendorProgress};
use crate::logutil::escape_log;

/// Whether a trigger condition is satisfied by the current stats.
fn trigger_met(trigger: &AchievementTrigger, progress: &VendorProgress) -> bool {
    match *trigger {
        AchievementTrigger::LessonsCompleted { required } => {
            progress.lessons_completed >= required
        }
        AchievementTrigger::QuizzesPassed { required } => progress.quizzes_passed >= required,
        AchievementTrigger::LevelReached { level } => progress.level >= level,
        AchievementTrigger::XpEarned { required } => progress.xp >= required,
    }
}

impl Academy {
    /// Run the unlock pass and return the ids of newly earned achievements.
    /// Already-unlocked badges are skipped, so the pass is idempotent.
    pub fn check_achievements(&mut self) -> Vec<u32> {
        let progress = self.progress.clone();
        let mut newly_unlocked = Vec::new();
        for achievement in &mut self.achievements {
            if achievement.unlocked {
                continue;
            }
            if trigger_met(&achievement.trigger, &progress) {
                achievement.unlocked = true;
                achievement.unlocked_at = Some(Utc::now());
                info!(
                    "achievement {} unlocked: {}",
                    achievement.id,
                    escape_log(&achievement.title)
                );
                newly_unlocked.push(achievement.id);
            }
        }
        newly_unlocked
    }

    /// Earned badges, most recent last (seed order is stable).
    pub fn earned_achievements(&self) -> impl Iterator<Item = &crate::academy::types::Achievement> {
        self.achievements.iter().filter(|a| a.unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::academy::types::Achievement;
    use crate::config::GamificationConfig;

    fn academy_with(trigger: AchievementTrigger) -> Academy {
        let mut academy = Academy::new(GamificationConfig::default());
        academy
            .achievements
            .push(Achievement::new(1, "Badge", "desc", "*", trigger));
        academy
    }

    #[test]
    fn xp_trigger_unlocks_on_award() {
        let mut academy = academy_with(AchievementTrigger::XpEarned { required: 50 });
        let report = academy.award_xp(49);
        assert!(report.unlocked_achievements.is_empty());
        let report = academy.award_xp(1);
        assert_eq!(report.unlocked_achievements, vec![1]);
        assert!(academy.achievements[0].unlocked_at.is_some());
    }

    #[test]
    fn unlock_pass_is_idempotent() {
        let mut academy = academy_with(AchievementTrigger::XpEarned { required: 10 });
        academy.award_xp(20);
        assert!(academy.check_achievements().is_empty());
        assert_eq!(academy.earned_achievements().count(), 1);
    }

    #[test]
    fn level_trigger_tracks_tiers() {
        let mut academy = academy_with(AchievementTrigger::LevelReached { level: 2 });
        academy.award_xp(299);
        assert!(!academy.achievements[0].unlocked);
        academy.award_xp(1);
        assert!(academy.achievements[0].unlocked);
    }
}
