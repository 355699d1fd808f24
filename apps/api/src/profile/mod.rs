// Profile extraction: raw text -> ProfileSections.
// Pure functions only; no I/O and no randomness.

pub mod document;
pub mod entries;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod sections;

use tracing::debug;

use crate::profile::entries::{
    parse_certifications, parse_education, parse_experience, parse_recommendations, parse_skills,
};
use crate::profile::fields::{extract_headline, extract_name, extract_summary};
use crate::profile::models::ProfileSections;
use crate::profile::sections::{segment_sections, SectionKind};

/// Builds the structured profile for one document. Never fails: missing sections
/// become empty lists and missing scalars fall back to their defaults.
pub fn extract_profile(text: &str) -> ProfileSections {
    let blocks = segment_sections(text);

    let profile = ProfileSections {
        name: extract_name(text),
        headline: extract_headline(text),
        summary: extract_summary(text),
        experience: parse_experience(blocks.block(SectionKind::Experience)),
        education: parse_education(blocks.block(SectionKind::Education)),
        skills: parse_skills(blocks.block(SectionKind::Skills)),
        certifications: parse_certifications(blocks.block(SectionKind::Certifications)),
        recommendations: parse_recommendations(blocks.block(SectionKind::Recommendations)),
    };

    debug!(
        experience = profile.experience.len(),
        education = profile.education.len(),
        skills = profile.skills.len(),
        certifications = profile.certifications.len(),
        recommendations = profile.recommendations.len(),
        "Profile sections extracted"
    );

    profile
}
