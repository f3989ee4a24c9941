//! Dashboard aggregate types.

use serde::Serialize;

/// Per-section row counts shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct SectionCounts {
    pub education: i64,
    pub experience: i64,
    pub skills: i64,
    pub projects: i64,
    pub pictures: i64,
    pub references: i64,
}
