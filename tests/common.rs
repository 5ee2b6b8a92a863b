//! Test utilities & fixtures shared by the integration suites.

use chrono::{DateTime, TimeZone, Utc};
use sellerdojo::academy::Academy;
use sellerdojo::config::GamificationConfig;

/// Initialize test logging once; safe to call from every test.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed timestamp so seeded state is deterministic across runs.
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A canonically seeded academy with default gamification settings.
#[allow(dead_code)]
pub fn seeded_academy() -> Academy {
    Academy::seeded(GamificationConfig::default(), fixed_now())
}
