use crate::catalog::{Catalog, Question};
use crate::error::{BedsideError, Result};
use crate::types::responses::ResponseSet;
use crate::types::scoring::{CategoryScore, Score, ScoreSet, SCALE_MAX};

/// Checks the completeness invariant: every catalog category answered, one
/// answer per question, each answer within its question's option range, and
/// no categories the catalog does not know. Runs in full before any score
/// is computed; nothing is clamped or defaulted.
pub fn validate(catalog: &Catalog, responses: &ResponseSet) -> Result<()> {
    for category in &catalog.categories {
        let answers = responses.answers_for(category.name).ok_or_else(|| {
            BedsideError::MissingCategory {
                category: category.name.to_string(),
            }
        })?;
        if answers.len() != category.questions.len() {
            return Err(BedsideError::AnswerCountMismatch {
                category: category.name.to_string(),
                expected: category.questions.len(),
                found: answers.len(),
            });
        }
        for (index, (answer, question)) in
            answers.iter().zip(&category.questions).enumerate()
        {
            let max = question.max_index();
            if *answer < 0 || *answer as usize > max {
                return Err(BedsideError::AnswerOutOfRange {
                    category: category.name.to_string(),
                    index,
                    value: *answer,
                    max,
                });
            }
        }
    }

    for name in responses.categories() {
        if catalog.category(name).is_none() {
            return Err(BedsideError::UnexpectedCategory {
                category: name.to_string(),
            });
        }
    }

    Ok(())
}

/// Scores a complete response set. Each category's raw answer sum is
/// rescaled linearly onto [0, 5]: the divisor is the sum of per-question
/// maximum indexes (option count minus one), so all-top answers land on
/// exactly 5.0 and all-bottom answers on exactly 0.0. The overall score is
/// the mean of the category scores, accumulated in catalog order.
pub fn score(catalog: &Catalog, responses: &ResponseSet) -> Result<ScoreSet> {
    validate(catalog, responses)?;

    let mut categories = Vec::with_capacity(catalog.categories.len());
    for category in &catalog.categories {
        let answers = responses.answers_for(category.name).ok_or_else(|| {
            BedsideError::MissingCategory {
                category: category.name.to_string(),
            }
        })?;
        let total: i64 = answers.iter().sum();
        let max_possible: usize = category.questions.iter().map(Question::max_index).sum();
        let score = if max_possible > 0 {
            total as Score / max_possible as Score * SCALE_MAX
        } else {
            0.0
        };
        categories.push(CategoryScore {
            name: category.name.to_string(),
            score,
        });
    }

    let overall = if categories.is_empty() {
        0.0
    } else {
        categories.iter().map(|category| category.score).sum::<Score>()
            / categories.len() as Score
    };

    Ok(ScoreSet { categories, overall })
}
