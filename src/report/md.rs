use crate::advice::EXCELLENCE_THRESHOLD;
use crate::catalog::Catalog;
use crate::types::report::{AssessmentReport, Recommendation};

pub fn to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Results\n\n");
    output.push_str(&format!(
        "Overall score: {:.2} / 5.0 ({})\n\n",
        report.overall_score,
        report.tier.label()
    ));

    output.push_str("## Category Scores\n\n");
    for category in &report.category_scores {
        let marker = if category.score < EXCELLENCE_THRESHOLD {
            " (below target)"
        } else {
            ""
        };
        output.push_str(&format!(
            "- {}: {:.2} / 5.0{}\n",
            category.name, category.score, marker
        ));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    for recommendation in &report.recommendations {
        match recommendation {
            Recommendation::Overall { message, .. } => {
                output.push_str(&format!("{message}\n"));
            }
            Recommendation::Category {
                category,
                score,
                actions,
            } => {
                output.push_str(&format!("\n### {} - {:.2} / 5.0\n\n", category, score));
                for action in actions {
                    output.push_str(&format!("- {action}\n"));
                }
            }
        }
    }

    output
}

/// Renders the question catalog so a responses file can be filled in by
/// hand: one numbered question list per category with the option legend.
pub fn catalog_to_markdown(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("# Self-Assessment Questions\n\n");
    output.push_str("Answers are recorded as option indexes: 0 is the first option listed.\n\n");
    for category in &catalog.categories {
        output.push_str(&format!("## {}\n\n", category.name));
        for (number, question) in category.questions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", number + 1, question.text));
            for (value, option) in question.options.iter().enumerate() {
                output.push_str(&format!("   - {value} = {option}\n"));
            }
        }
        output.push('\n');
    }
    output
}
