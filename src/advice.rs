use crate::catalog::Catalog;
use crate::error::{BedsideError, Result};
use crate::types::report::{Recommendation, Tier};
use crate::types::scoring::{Score, ScoreSet};

/// Categories scoring below this line receive an action list.
pub const EXCELLENCE_THRESHOLD: Score = 4.0;

/// Improvement actions per category, keyed by the exact catalog name.
/// Lookup is identity-based on purpose: a renamed category must fail
/// startup validation instead of silently losing its advice.
const ACTION_SETS: &[(&str, &[&str])] = &[
    (
        "Personal Connect (Do You Care About Me?)",
        &[
            "Make it a habit to sit down during patient consultations",
            "Call patients by name and ask about their personal interests",
            "Set reminders to follow up with patients after procedures",
            "Practice active listening - let patients finish their stories",
            "Schedule slightly longer appointments to allow for personal connection",
        ],
    ),
    (
        "Trust of Your Trade (Are You the Best?)",
        &[
            "Subscribe to key journals in your specialty",
            "Register for at least 2-3 conferences per year",
            "Join a journal club or peer learning group",
            "Set aside 30 minutes weekly for reading latest research",
            "Pursue additional certifications or CME credits",
        ],
    ),
    (
        "Social Trust (Can I Trust You?)",
        &[
            "Create protocols for discussing sensitive topics (substance use, mental health)",
            "Use open-ended questions to encourage patient sharing",
            "Demonstrate reliability by following up on every concern",
            "Build rapport before diving into medical history",
            "Show genuine concern through both words and actions",
        ],
    ),
    (
        "Treating Style (Are You Treating Me Differently?)",
        &[
            "Take implicit bias training",
            "Study health disparities in your patient population",
            "Regularly self-reflect on your treatment decisions across demographics",
            "Learn about social determinants of health",
            "Develop cultural competence through education and exposure",
        ],
    ),
];

pub fn overall_tier(overall: Score) -> Tier {
    if overall >= 4.5 {
        Tier::Excellent
    } else if overall >= 3.5 {
        Tier::Good
    } else if overall >= 2.5 {
        Tier::Fair
    } else {
        Tier::NeedsImprovement
    }
}

pub fn tier_message(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => {
            "You demonstrate exceptional patient-centered care across all dimensions. \
             Continue your excellent work!"
        }
        Tier::Good => {
            "You show strong patient care skills. Focus on the areas below to reach excellence."
        }
        Tier::Fair => {
            "You have a foundation to build on. Significant improvement needed in several areas."
        }
        Tier::NeedsImprovement => {
            "Your patient care approach needs substantial development. \
             Prioritize the recommendations below."
        }
    }
}

pub fn actions_for(category: &str) -> Option<&'static [&'static str]> {
    ACTION_SETS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, actions)| *actions)
}

/// Startup check that every catalog category has an action list, so a
/// below-threshold score can never hit a missing lookup at recommendation
/// time.
pub fn validate_advice_coverage(catalog: &Catalog) -> Result<()> {
    for category in &catalog.categories {
        if actions_for(category.name).is_none() {
            return Err(BedsideError::MissingActions {
                category: category.name.to_string(),
            });
        }
    }
    Ok(())
}

/// Builds the recommendation list: the overall tier verdict first, then one
/// entry per category scoring strictly below the excellence threshold, in
/// catalog order.
pub fn recommend(catalog: &Catalog, scores: &ScoreSet) -> Vec<Recommendation> {
    let tier = overall_tier(scores.overall);
    let mut recommendations = vec![Recommendation::Overall {
        tier,
        message: tier_message(tier),
    }];

    for category in &catalog.categories {
        let Some(category_score) = scores
            .categories
            .iter()
            .find(|score| score.name == category.name)
        else {
            continue;
        };
        if category_score.score < EXCELLENCE_THRESHOLD {
            recommendations.push(Recommendation::Category {
                category: category.name.to_string(),
                score: category_score.score,
                actions: actions_for(category.name).unwrap_or_default().to_vec(),
            });
        }
    }

    recommendations
}
