//! Advanced Analysis: supplementary heuristics computed from the structured profile
//! instead of raw text.
//!
//! Each heuristic is independent: an empty input returns its fixed default as-is,
//! otherwise a count-based base goes through the same perturbation as category scores.

use crate::analysis::models::AdvancedMetrics;
use crate::analysis::perturbation::{perturb, Perturbation};
use crate::profile::models::ProfileSections;

/// Count-driven heuristic: `default` when `count == 0`, else `perturb(base(count))`.
fn heuristic(
    count: usize,
    default: u32,
    base: impl Fn(f64) -> f64,
    perturbation: &mut dyn Perturbation,
) -> u32 {
    if count == 0 {
        return default;
    }
    perturb(base(count as f64), perturbation)
}

/// More roles means more job changes, so stability falls with the entry count.
pub fn job_stability(entries: usize, perturbation: &mut dyn Perturbation) -> u32 {
    heuristic(entries, 30, |n| (100.0 - 10.0 * n).max(30.0), perturbation)
}

pub fn career_progression(entries: usize, perturbation: &mut dyn Perturbation) -> u32 {
    heuristic(entries, 40, |n| (15.0 * n).min(80.0), perturbation)
}

pub fn education_relevance(entries: usize, perturbation: &mut dyn Perturbation) -> u32 {
    heuristic(entries, 50, |n| (25.0 * n).min(90.0), perturbation)
}

pub fn skill_diversity(skills: usize, perturbation: &mut dyn Perturbation) -> u32 {
    heuristic(skills, 30, |n| (5.0 * n).min(85.0), perturbation)
}

pub fn social_proof(recommendations: usize, perturbation: &mut dyn Perturbation) -> u32 {
    heuristic(recommendations, 40, |n| (20.0 * n).min(90.0), perturbation)
}

/// Runs all five heuristics in a fixed order.
pub fn perform_advanced_analysis(
    profile: &ProfileSections,
    perturbation: &mut dyn Perturbation,
) -> AdvancedMetrics {
    AdvancedMetrics {
        job_stability: job_stability(profile.experience.len(), perturbation),
        career_progression: career_progression(profile.experience.len(), perturbation),
        education_relevance: education_relevance(profile.education.len(), perturbation),
        skill_diversity: skill_diversity(profile.skills.len(), perturbation),
        social_proof: social_proof(profile.recommendations.len(), perturbation),
    }
}
