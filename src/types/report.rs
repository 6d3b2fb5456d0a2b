use crate::types::scoring::{CategoryScore, Score};
use serde::Serialize;

/// Coarse qualitative band derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Fair => "Fair",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Either the single overall verdict or an action list for one category
/// scoring below the excellence threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    Overall {
        tier: Tier,
        message: &'static str,
    },
    Category {
        category: String,
        score: Score,
        actions: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub overall_score: Score,
    pub tier: Tier,
    pub category_scores: Vec<CategoryScore>,
    pub recommendations: Vec<Recommendation>,
}
