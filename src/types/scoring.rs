use serde::Serialize;

pub type Score = f32;

/// Display scale for category and overall scores.
pub const SCALE_MAX: Score = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: Score,
}

/// Scoring engine output: per-category scores in catalog order plus the
/// overall mean. Recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSet {
    pub categories: Vec<CategoryScore>,
    pub overall: Score,
}
