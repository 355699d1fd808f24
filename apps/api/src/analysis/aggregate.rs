use crate::analysis::models::{Category, CategoryScores, ScoreBand};

/// Fixed weight per category in the overall score. Sums to 1.0.
pub const CATEGORY_WEIGHTS: &[(Category, f64)] = &[
    (Category::Leadership, 0.25),
    (Category::Technical, 0.20),
    (Category::Entrepreneurial, 0.25),
    (Category::Education, 0.10),
    (Category::Network, 0.10),
    (Category::Industry, 0.10),
];

/// Weighted sum of the category scores, rounded to the nearest integer.
pub fn compute_overall_score(scores: &CategoryScores) -> u32 {
    let weighted: f64 = CATEGORY_WEIGHTS
        .iter()
        .map(|(category, weight)| scores.get(*category) as f64 * weight)
        .sum();
    weighted.clamp(0.0, 100.0).round() as u32
}

/// Tier label for an overall score.
pub fn recommendation_tier(overall_score: u32) -> &'static str {
    ScoreBand::from_score(overall_score).tier_label()
}
