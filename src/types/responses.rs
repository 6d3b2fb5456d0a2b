use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One session's answers: category name to answer indexes, one per question
/// in the catalog's question order. Answers deserialize as signed integers
/// so out-of-range values (including negatives) reach the validator instead
/// of failing inside the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    pub answers: BTreeMap<String, Vec<i64>>,
}

impl ResponseSet {
    pub fn answers_for(&self, category: &str) -> Option<&[i64]> {
        self.answers.get(category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }

    pub fn insert(&mut self, category: impl Into<String>, answers: Vec<i64>) {
        self.answers.insert(category.into(), answers);
    }
}
