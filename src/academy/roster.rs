//! Vendor roster queries: the leaderboard, the progress CSV export, and the
//! admin analytics totals.

use std::fmt::Write as _;

use crate::academy::state::Academy;
use crate::academy::types::{AnalyticsSummary, VendorRecord};

/// Column header of the progress export, in contract order.
pub const EXPORT_HEADER: &str =
    "Username,Email,Level,XP,Lessons Completed,Quizzes Passed,Last Active";

/// Render the vendor-progress export. Plain comma separation with no quoting
/// or escaping; fields are written as-is.
pub fn export_csv(vendors: &[VendorRecord]) -> String {
    let mut out = String::with_capacity(64 * (vendors.len() + 1));
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for vendor in vendors {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            vendor.username,
            vendor.email,
            vendor.level,
            vendor.xp,
            vendor.lessons_completed,
            vendor.quizzes_passed,
            vendor.last_active.format("%Y-%m-%d %H:%M"),
        );
    }
    out
}

impl Academy {
    /// Vendors ranked by XP, highest first. Ties keep roster order.
    pub fn leaderboard(&self) -> Vec<&VendorRecord> {
        let mut ranked: Vec<&VendorRecord> = self.vendors.iter().collect();
        ranked.sort_by(|a, b| b.xp.cmp(&a.xp));
        ranked
    }

    pub fn vendor(&self, id: u32) -> Option<&VendorRecord> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Totals for the analytics tiles.
    pub fn analytics(&self) -> AnalyticsSummary {
        AnalyticsSummary {
            vendors: self.vendors.len(),
            lessons: self.content.lessons().len(),
            quizzes: self.content.quizzes().len(),
        }
    }

    pub fn export_progress_csv(&self) -> String {
        export_csv(&self.vendors)
    }
}
