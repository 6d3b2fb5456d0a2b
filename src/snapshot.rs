use crate::error::Result;
use crate::types::responses::ResponseSet;
use crate::types::scoring::{Score, ScoreSet};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable export record of one completed assessment. Construction is
/// pure; the clock is injected by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSnapshot {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub overall_score: Score,
    pub category_scores: BTreeMap<String, Score>,
    pub responses: BTreeMap<String, Vec<i64>>,
}

impl AssessmentSnapshot {
    pub fn new(responses: &ResponseSet, scores: &ScoreSet, now: DateTime<Utc>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: now,
            overall_score: scores.overall,
            category_scores: scores
                .categories
                .iter()
                .map(|category| (category.name.clone(), category.score))
                .collect(),
            responses: responses.answers.clone(),
        }
    }
}

/// Writes the snapshot as pretty JSON under `dir`, named by its own
/// timestamp, and returns the path.
pub fn write_snapshot(dir: &Path, snapshot: &AssessmentSnapshot) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let stamp = snapshot.timestamp.format("%Y%m%dT%H%M%SZ");
    let out_path = dir.join(format!("assessment-{stamp}.json"));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&out_path, json)?;
    Ok(out_path)
}
