use crate::error::{BedsideError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// One Likert-style question. Options are ordinal: index 0 is the worst
/// answer, the last index the best.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    /// Highest valid answer index, derived from the option list.
    pub fn max_index(&self) -> usize {
        self.options.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub questions: Vec<Question>,
}

/// The fixed questionnaire: ordered categories of ordered questions.
/// Built once at process start and never mutated; consumers rely on the
/// category and question order staying stable across reads.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

const FREQUENCY: &[&str] = &["Never", "Rarely", "Sometimes", "Often", "Always"];

fn question(text: &'static str, options: &'static [&'static str]) -> Question {
    Question { text, options }
}

impl Catalog {
    /// The patient-centered care questionnaire, after "5 Questions Patients
    /// Have but Never Ask" (JAMA Neurology, 2018).
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category {
                    name: "Personal Connect (Do You Care About Me?)",
                    questions: vec![
                        question(
                            "How often do you call patients by name and make personal contact?",
                            FREQUENCY,
                        ),
                        question(
                            "Do you sit down with patients (not standing) during consultations?",
                            FREQUENCY,
                        ),
                        question(
                            "How frequently do you telephone patients to check on them after procedures or missed appointments?",
                            FREQUENCY,
                        ),
                        question(
                            "Do you show empathy and listen actively to patients' stories?",
                            FREQUENCY,
                        ),
                        question(
                            "How often do you discuss patients' personal life, hobbies, likes, and dislikes?",
                            FREQUENCY,
                        ),
                    ],
                },
                Category {
                    name: "Trust of Your Trade (Are You the Best?)",
                    questions: vec![
                        question(
                            "How regularly do you attend lectures and national meetings?",
                            &[
                                "Never",
                                "Once a year",
                                "2-3 times/year",
                                "Quarterly",
                                "Monthly or more",
                            ],
                        ),
                        question(
                            "How often do you read the latest research in your area of practice?",
                            &["Never", "Rarely", "Monthly", "Weekly", "Daily"],
                        ),
                        question(
                            "Do you pursue continuing medical education and skill development?",
                            &["Never", "Rarely", "Sometimes", "Often", "Consistently"],
                        ),
                        question(
                            "How confident are you in acknowledging when you need refreshers in certain areas?",
                            &[
                                "Not confident",
                                "Slightly confident",
                                "Moderately confident",
                                "Very confident",
                                "Extremely confident",
                            ],
                        ),
                        question(
                            "Do you strive for excellence beyond just avoiding malpractice?",
                            FREQUENCY,
                        ),
                    ],
                },
                Category {
                    name: "Social Trust (Can I Trust You?)",
                    questions: vec![
                        question(
                            "How much time do you invest in building trust with patients from different backgrounds?",
                            &[
                                "No effort",
                                "Minimal effort",
                                "Moderate effort",
                                "Significant effort",
                                "Maximum effort",
                            ],
                        ),
                        question(
                            "Do you create a safe environment for patients to share sensitive issues (substance use, mental health)?",
                            FREQUENCY,
                        ),
                        question(
                            "How reliable are you in following up on patient concerns?",
                            &[
                                "Unreliable",
                                "Somewhat reliable",
                                "Moderately reliable",
                                "Very reliable",
                                "Completely reliable",
                            ],
                        ),
                        question(
                            "Do you demonstrate care about patients' wellbeing in your actions?",
                            FREQUENCY,
                        ),
                        question(
                            "How well do you encourage patients to share when they're feeling sad, depressed, or lonely?",
                            &["Not at all", "Poorly", "Adequately", "Well", "Excellently"],
                        ),
                    ],
                },
                Category {
                    name: "Treating Style (Are You Treating Me Differently?)",
                    questions: vec![
                        question(
                            "How conscious are you of health disparities affecting different populations?",
                            &[
                                "Not conscious",
                                "Slightly conscious",
                                "Moderately conscious",
                                "Very conscious",
                                "Extremely conscious",
                            ],
                        ),
                        question(
                            "Do you examine your own biases regarding race, ethnicity, sex, or socioeconomic status?",
                            &["Never", "Rarely", "Sometimes", "Often", "Regularly"],
                        ),
                        question(
                            "How carefully do you ensure equitable treatment across all patient demographics?",
                            &[
                                "Not carefully",
                                "Somewhat carefully",
                                "Moderately carefully",
                                "Very carefully",
                                "Extremely carefully",
                            ],
                        ),
                        question(
                            "Do you stay informed about social determinants of health?",
                            &[
                                "Not informed",
                                "Slightly informed",
                                "Moderately informed",
                                "Well informed",
                                "Expert level",
                            ],
                        ),
                        question(
                            "How often do you reflect on whether you might be perceived as judging patients?",
                            FREQUENCY,
                        ),
                    ],
                },
            ],
        }
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Category names are identity keys; duplicates would make response
    /// alignment and advice lookup ambiguous.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.name) {
                return Err(BedsideError::DuplicateCategory {
                    category: category.name.to_string(),
                });
            }
        }
        Ok(())
    }
}
