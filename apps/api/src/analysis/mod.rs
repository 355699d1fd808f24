// Founder potential analysis: profile text -> scored, explainable report.
// Implements: keyword scoring, aggregation, report composition, advanced heuristics.
// Every random draw goes through the caller's Perturbation; nothing here is global.

pub mod advanced;
pub mod aggregate;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod perturbation;
pub mod report;
pub mod scoring;

use tracing::info;

use crate::analysis::advanced::perform_advanced_analysis;
use crate::analysis::models::{AdvancedMetrics, AnalysisReport};
use crate::analysis::perturbation::Perturbation;
use crate::analysis::report::compose_report;
use crate::analysis::scoring::ProfileScorer;
use crate::errors::AnalysisError;
use crate::profile::document::validate_text;
use crate::profile::extract_profile;
use crate::profile::models::ProfileSections;

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub profile: ProfileSections,
    pub report: AnalysisReport,
    pub advanced: AdvancedMetrics,
}

/// Runs the full pipeline over one document.
///
/// Draw order on `perturbation`: the six category scores, then the advanced
/// heuristics. The only error is text that is not a document at all.
pub fn analyze_document(
    text: &str,
    profile_image: Option<String>,
    scorer: &dyn ProfileScorer,
    perturbation: &mut dyn Perturbation,
) -> Result<Analysis, AnalysisError> {
    let text = validate_text(text)?;

    let profile = extract_profile(text);
    let scores = scorer.score(text, perturbation);
    let report = compose_report(&profile.name, profile_image, &scores);
    let advanced = perform_advanced_analysis(&profile, perturbation);

    info!(
        overall_score = report.overall_score,
        tier = %report.recommendation,
        backend = scorer.backend(),
        "Analysis complete"
    );

    Ok(Analysis {
        profile,
        report,
        advanced,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::keywords::KeywordCatalog;
    use crate::analysis::models::Category;
    use crate::analysis::perturbation::{NoPerturbation, UniformPerturbation};
    use crate::analysis::report::{NO_STRENGTHS, NO_WEAKNESSES};
    use crate::analysis::scoring::KeywordScorer;

    const FOUNDER_PROFILE: &str = r#"Priya Nair
Co-Founder & CEO at Finch
Summary
Serial founder and former engineering lead. Launched and scaled two startups;
the first ended in an acquisition. Angel investor and mentor.

Experience
Co-Founder & CEO
Finch
Founded the company, built the product and raised a Series A from top investors.
Scaled the team from 3 to 60.

VP of Engineering
Ledgerly
Led a team of 40 software engineers building cloud infrastructure and data pipelines.

Education
Stanford University
MBA

IIT Bombay
Bachelor of Technology, Computer Science

Skills
Leadership
Machine Learning
Fundraising

Recommendations
Daniel Ortiz
Priya is a natural founder and an exceptional executive.
"#;

    fn scorer() -> KeywordScorer {
        KeywordScorer::new(Arc::new(KeywordCatalog::default()))
    }

    #[test]
    fn test_empty_document_does_not_fail() {
        let analysis =
            analyze_document("", None, &scorer(), &mut NoPerturbation).unwrap();
        let report = &analysis.report;
        assert_eq!(report.name, "Unknown");
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.recommendation, "Limited Founder Potential");
        assert_eq!(report.metrics.len(), 6);
        assert!(report.metrics.iter().all(|m| m.score == 0));
        assert_eq!(report.strengths, vec![NO_STRENGTHS]);
        assert_eq!(
            report.recommendations,
            vec![
                "Could benefit from mentorship by experienced entrepreneurs",
                "Requires significant development before founder readiness",
            ]
        );
        assert!(analysis.profile.experience.is_empty());
        assert_eq!(analysis.advanced.job_stability, 30);
    }

    #[test]
    fn test_empty_document_with_random_perturbation() {
        let mut source = UniformPerturbation::seeded(3);
        let report = analyze_document("", None, &scorer(), &mut source)
            .unwrap()
            .report;
        // Base scores are all 0, so perturbed scores stay within [0, 10].
        assert!(report.metrics.iter().all(|m| m.score <= 10));
        assert_eq!(report.strengths, vec![NO_STRENGTHS]);
        assert!(!report.weaknesses.is_empty());
        assert_ne!(report.weaknesses, vec![NO_WEAKNESSES]);
    }

    #[test]
    fn test_seeded_runs_are_byte_identical() {
        let run = || {
            let mut source = UniformPerturbation::seeded(2024);
            let analysis = analyze_document(
                FOUNDER_PROFILE,
                Some("avatar-17".to_string()),
                &scorer(),
                &mut source,
            )
            .unwrap();
            (
                serde_json::to_string(&analysis.report).unwrap(),
                serde_json::to_string(&analysis.advanced).unwrap(),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_founder_profile_scores_leadership_and_entrepreneurship() {
        let analysis =
            analyze_document(FOUNDER_PROFILE, None, &scorer(), &mut NoPerturbation).unwrap();
        let report = &analysis.report;
        assert_eq!(report.name, "Priya Nair");
        assert_eq!(analysis.profile.experience.len(), 2);
        assert_eq!(analysis.profile.education.len(), 2);
        assert_eq!(analysis.profile.recommendations.len(), 1);

        let leadership = report
            .metrics
            .iter()
            .find(|m| m.name == Category::Leadership.metric_name())
            .unwrap();
        assert!(leadership.score >= 40, "leadership was {}", leadership.score);
        assert!(report.summary.starts_with("Priya Nair shows "));
        assert!(report.overall_score <= 100);
    }

    #[test]
    fn test_scores_always_in_range() {
        let text = FOUNDER_PROFILE.repeat(10);
        let mut source = UniformPerturbation::seeded(11);
        for _ in 0..50 {
            let report = analyze_document(&text, None, &scorer(), &mut source)
                .unwrap()
                .report;
            assert!(report.overall_score <= 100);
            assert_eq!(report.metrics.len(), 6);
            assert!(report.metrics.iter().all(|m| m.score <= 100));
            assert!(!report.strengths.is_empty());
            assert!(!report.weaknesses.is_empty());
            assert!(!report.recommendations.is_empty());
        }
    }

    #[test]
    fn test_binary_payload_is_invalid_input() {
        let err = analyze_document("%PDF-1.7\0\0", None, &scorer(), &mut NoPerturbation)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }
}
