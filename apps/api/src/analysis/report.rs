//! Report Composer: turns category scores into the narrative parts of the report.
//!
//! Every list it produces is non-empty: when nothing qualifies, a single sentinel
//! string is substituted.

use crate::analysis::aggregate::{compute_overall_score, recommendation_tier};
use crate::analysis::models::{AnalysisReport, Category, CategoryScores, MetricScore, ScoreBand};

pub const NO_STRENGTHS: &str = "No significant strengths identified";
pub const NO_WEAKNESSES: &str = "No significant weaknesses identified";
pub const NO_RECOMMENDATIONS: &str = "No specific recommendations available";

const STRENGTH_THRESHOLD: u32 = 70;
const WEAKNESS_THRESHOLD: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Metric descriptions
// ────────────────────────────────────────────────────────────────────────────

/// Fixed description for a category at a given score.
pub fn metric_description(category: Category, score: u32) -> &'static str {
    use Category::*;
    use ScoreBand::*;

    match (category, ScoreBand::from_score(score)) {
        (Leadership, Exceptional) => "Extensive leadership experience with proven track record",
        (Leadership, High) => "Significant leadership roles in professional settings",
        (Leadership, Moderate) => "Some leadership experience but limited scope",
        (Leadership, Limited) => "Limited leadership experience",

        (Technical, Exceptional) => "Expert-level technical skills with diverse technology stack",
        (Technical, High) => "Strong technical background with specialized skills",
        (Technical, Moderate) => "Moderate technical skills in relevant areas",
        (Technical, Limited) => "Limited technical expertise",

        (Entrepreneurial, Exceptional) => "Successful prior founding experience",
        (Entrepreneurial, High) => "Previous startup experience or entrepreneurial initiatives",
        (Entrepreneurial, Moderate) => "Some entrepreneurial activities but limited scale",
        (Entrepreneurial, Limited) => "Limited entrepreneurial experience",

        (Education, Exceptional) => "Advanced degrees from top institutions",
        (Education, High) => "Relevant degrees with specialized knowledge",
        (Education, Moderate) => "Standard educational background",
        (Education, Limited) => "Limited formal education in relevant fields",

        (Network, Exceptional) => "Extensive network with industry leaders",
        (Network, High) => "Strong professional connections in relevant sectors",
        (Network, Moderate) => "Moderate network with some valuable connections",
        (Network, Limited) => "Limited professional network",

        (Industry, Exceptional) => "10+ years of relevant industry experience",
        (Industry, High) => "5-10 years of industry experience",
        (Industry, Moderate) => "2-5 years of industry experience",
        (Industry, Limited) => "Limited industry experience",
    }
}

/// Six metrics in fixed category order.
pub fn build_metrics(scores: &CategoryScores) -> Vec<MetricScore> {
    scores
        .iter()
        .map(|(category, score)| MetricScore {
            name: category.metric_name().to_string(),
            score,
            description: metric_description(category, score).to_string(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Strengths / weaknesses
// ────────────────────────────────────────────────────────────────────────────

pub fn strengths(metrics: &[MetricScore]) -> Vec<String> {
    describe_where(metrics, |score| score >= STRENGTH_THRESHOLD, NO_STRENGTHS)
}

pub fn weaknesses(metrics: &[MetricScore]) -> Vec<String> {
    describe_where(metrics, |score| score < WEAKNESS_THRESHOLD, NO_WEAKNESSES)
}

fn describe_where(
    metrics: &[MetricScore],
    qualifies: impl Fn(u32) -> bool,
    sentinel: &str,
) -> Vec<String> {
    let items: Vec<String> = metrics
        .iter()
        .filter(|m| qualifies(m.score))
        .map(|m| format!("{}: {}", m.name, m.description))
        .collect();
    non_empty_or(items, sentinel)
}

fn non_empty_or(items: Vec<String>, sentinel: &str) -> Vec<String> {
    if items.is_empty() {
        vec![sentinel.to_string()]
    } else {
        items
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

/// The two highest-scoring categories. Ties keep declaration order.
pub fn top_categories(scores: &CategoryScores) -> [Category; 2] {
    let mut ranked: Vec<(Category, u32)> = scores.iter().collect();
    // sort_by is stable, so equal scores stay in Category::ALL order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    [ranked[0].0, ranked[1].0]
}

pub fn compose_summary(name: &str, overall_score: u32, scores: &CategoryScores) -> String {
    let adjective = ScoreBand::from_score(overall_score).adjective();
    let [first, second] = top_categories(scores);
    format!(
        "{name} shows {adjective} founder potential based on our analysis. Key strengths include {} and {}.",
        first.summary_phrase(),
        second.summary_phrase()
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

/// One conditional row of the recommendation table.
struct RecommendationRule {
    applies: fn(&CategoryScores) -> bool,
    text: &'static str,
}

/// Non-exclusive: every rule that applies contributes, in table order.
const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: |s| s.get(Category::Technical) >= 70 && s.get(Category::Leadership) >= 60,
        text: "Strong potential as a technical co-founder",
    },
    RecommendationRule {
        applies: |s| s.get(Category::Leadership) >= 70 && s.get(Category::Industry) >= 60,
        text: "Well-suited for business-focused founder role",
    },
    RecommendationRule {
        applies: |s| s.get(Category::Technical) >= 70 && s.get(Category::Leadership) < 60,
        text: "Would benefit from pairing with a business-focused co-founder",
    },
    RecommendationRule {
        applies: |s| s.get(Category::Leadership) >= 70 && s.get(Category::Technical) < 60,
        text: "Would benefit from pairing with a technical co-founder",
    },
    RecommendationRule {
        applies: |s| s.get(Category::Entrepreneurial) < 60,
        text: "Could benefit from mentorship by experienced entrepreneurs",
    },
];

/// Closing recommendation keyed on the unweighted mean of all six scores.
fn readiness_recommendation(scores: &CategoryScores) -> &'static str {
    let mean = scores.mean();
    if mean >= 75.0 {
        "High priority candidate for investment consideration"
    } else if mean >= 60.0 {
        "Consider for investment with appropriate support structure"
    } else {
        "Requires significant development before founder readiness"
    }
}

pub fn compose_recommendations(scores: &CategoryScores) -> Vec<String> {
    let mut items: Vec<String> = RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(scores))
        .map(|rule| rule.text.to_string())
        .collect();
    items.push(readiness_recommendation(scores).to_string());
    non_empty_or(items, NO_RECOMMENDATIONS)
}

// ────────────────────────────────────────────────────────────────────────────
// Full report
// ────────────────────────────────────────────────────────────────────────────

pub fn compose_report(
    name: &str,
    profile_image: Option<String>,
    scores: &CategoryScores,
) -> AnalysisReport {
    let overall_score = compute_overall_score(scores);
    let metrics = build_metrics(scores);

    AnalysisReport {
        name: name.to_string(),
        profile_image,
        overall_score,
        recommendation: recommendation_tier(overall_score).to_string(),
        summary: compose_summary(name, overall_score, scores),
        strengths: strengths(&metrics),
        weaknesses: weaknesses(&metrics),
        recommendations: compose_recommendations(scores),
        metrics,
    }
}
