//! Category Scoring: pluggable, trait-based scorer that turns document text into
//! the six category scores.
//!
//! Default: `KeywordScorer` (keyword frequency over the whole document).
//!
//! `AppState` holds an `Arc<dyn ProfileScorer>`; handlers never name a concrete backend.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::keywords::KeywordCatalog;
use crate::analysis::models::CategoryScores;
use crate::analysis::perturbation::{perturb, Perturbation};

/// Points per keyword hit before the 100 cap.
pub const POINTS_PER_MATCH: usize = 5;

/// The scorer trait. Implement this to swap backends without touching the
/// pipeline or the handlers.
pub trait ProfileScorer: Send + Sync {
    fn score(&self, text: &str, perturbation: &mut dyn Perturbation) -> CategoryScores;

    /// Short label reported alongside results, e.g. `"keyword"`.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordScorer
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-frequency scorer.
///
/// Algorithm, per category in fixed order:
/// 1. raw count = whole-word, case-insensitive hits of every catalog phrase
/// 2. base = min(count × 5, 100)
/// 3. final = round(clamp(base + offset, 0, 100)), one offset drawn per category
pub struct KeywordScorer {
    catalog: Arc<KeywordCatalog>,
}

impl KeywordScorer {
    pub fn new(catalog: Arc<KeywordCatalog>) -> Self {
        Self { catalog }
    }
}

impl ProfileScorer for KeywordScorer {
    fn score(&self, text: &str, perturbation: &mut dyn Perturbation) -> CategoryScores {
        // from_fn visits Category::ALL in order, so offsets are drawn in a fixed sequence.
        CategoryScores::from_fn(|category| {
            let count = self.catalog.count_matches(category, text);
            let score = perturb(base_score(count), perturbation);
            debug!(category = category.key(), count, score, "Category scored");
            score
        })
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// `min(count × 5, 100)`.
pub fn base_score(count: usize) -> f64 {
    count.saturating_mul(POINTS_PER_MATCH).min(100) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Category;
    use crate::analysis::perturbation::{FixedPerturbation, NoPerturbation, UniformPerturbation};

    fn scorer() -> KeywordScorer {
        KeywordScorer::new(Arc::new(KeywordCatalog::default()))
    }

    #[test]
    fn test_base_score_scales_and_caps() {
        assert_eq!(base_score(0), 0.0);
        assert_eq!(base_score(3), 15.0);
        assert_eq!(base_score(20), 100.0);
        assert_eq!(base_score(500), 100.0);
    }

    #[test]
    fn test_zero_matches_without_perturbation_is_zero() {
        let scores = scorer().score("zzz qqq xyz", &mut NoPerturbation);
        for (category, score) in scores.iter() {
            assert_eq!(score, 0, "{} should be 0", category.key());
        }
    }

    #[test]
    fn test_counts_drive_scores() {
        // leadership: ceo, founder, cto → 3 hits; entrepreneurial: founder, startup → 2 hits
        let text = "CEO and founder of a startup. Former CTO.";
        let scores = scorer().score(text, &mut NoPerturbation);
        assert_eq!(scores.get(Category::Leadership), 15);
        assert_eq!(scores.get(Category::Entrepreneurial), 10);
        assert_eq!(scores.get(Category::Technical), 0);
    }

    #[test]
    fn test_perturbation_is_clamped() {
        let low = scorer().score("", &mut FixedPerturbation(-10.0));
        assert!(low.iter().all(|(_, s)| s == 0));

        let text = "ceo ".repeat(30);
        let high = scorer().score(&text, &mut FixedPerturbation(10.0));
        assert_eq!(high.get(Category::Leadership), 100);
    }

    #[test]
    fn test_random_scores_stay_in_range() {
        let text = "Founder CEO engineer university mentor industry ".repeat(4);
        let mut source = UniformPerturbation::seeded(1);
        for _ in 0..200 {
            let scores = scorer().score(&text, &mut source);
            assert!(scores.iter().all(|(_, s)| s <= 100));
        }
    }

    #[test]
    fn test_seeded_scoring_is_repeatable() {
        let text = "Co-founder and CTO. Built the data platform.";
        let a = scorer().score(text, &mut UniformPerturbation::seeded(99));
        let b = scorer().score(text, &mut UniformPerturbation::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_backend_label_is_keyword() {
        assert_eq!(scorer().backend(), "keyword");
    }
}
