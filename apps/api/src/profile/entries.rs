//! Entity List Parser: turns a section block into structured entries.
//!
//! A block is split on runs of blank lines; each resulting chunk is reduced to its
//! trimmed non-blank lines and handed to the entry kind's mapping function.
//! Field mapping is positional: line 0 is the primary field, line 1 the secondary
//! field, the rest (joined with `\n`) the free-text tail.

use crate::profile::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, RecommendationEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Education,
    Certification,
    Recommendation,
}

/// One parsed record, tagged by the kind that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedEntry {
    Experience(ExperienceEntry),
    Education(EducationEntry),
    Certification(CertificationEntry),
    Recommendation(RecommendationEntry),
}

impl EntryKind {
    /// Fewest non-blank lines a chunk needs before it becomes an entry.
    pub fn min_lines(&self) -> usize {
        match self {
            EntryKind::Experience | EntryKind::Education | EntryKind::Certification => 1,
            EntryKind::Recommendation => 2,
        }
    }

    /// Maps a chunk's lines to an entry, or `None` when the chunk is too short.
    pub fn map_lines(&self, lines: &[&str]) -> Option<ParsedEntry> {
        if lines.is_empty() || lines.len() < self.min_lines() {
            return None;
        }

        let entry = match self {
            EntryKind::Experience => ParsedEntry::Experience(ExperienceEntry {
                title: line_at(lines, 0),
                company: line_at(lines, 1),
                description: join_from(lines, 2),
            }),
            EntryKind::Education => ParsedEntry::Education(EducationEntry {
                institution: line_at(lines, 0),
                degree: line_at(lines, 1),
                description: join_from(lines, 2),
            }),
            EntryKind::Certification => ParsedEntry::Certification(CertificationEntry {
                name: line_at(lines, 0),
                issuer: line_at(lines, 1),
                date: line_at(lines, 2),
            }),
            EntryKind::Recommendation => ParsedEntry::Recommendation(RecommendationEntry {
                recommender: line_at(lines, 0),
                content: join_from(lines, 1),
            }),
        };
        Some(entry)
    }
}

fn line_at(lines: &[&str], index: usize) -> String {
    lines.get(index).map(|l| l.to_string()).unwrap_or_default()
}

fn join_from(lines: &[&str], index: usize) -> String {
    lines.get(index..).map(|rest| rest.join("\n")).unwrap_or_default()
}

/// Splits a block into chunks of trimmed, non-blank lines.
/// One or more consecutive blank lines separate chunks; empty chunks never appear.
pub fn split_chunks(block: &str) -> Vec<Vec<&str>> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Parses every chunk of `block` as `kind`, silently dropping chunks that are too short.
pub fn parse_entries(block: &str, kind: EntryKind) -> Vec<ParsedEntry> {
    split_chunks(block)
        .iter()
        .filter_map(|lines| kind.map_lines(lines))
        .collect()
}

pub fn parse_experience(block: &str) -> Vec<ExperienceEntry> {
    parse_entries(block, EntryKind::Experience)
        .into_iter()
        .filter_map(|entry| match entry {
            ParsedEntry::Experience(e) => Some(e),
            _ => None,
        })
        .collect()
}

pub fn parse_education(block: &str) -> Vec<EducationEntry> {
    parse_entries(block, EntryKind::Education)
        .into_iter()
        .filter_map(|entry| match entry {
            ParsedEntry::Education(e) => Some(e),
            _ => None,
        })
        .collect()
}

pub fn parse_certifications(block: &str) -> Vec<CertificationEntry> {
    parse_entries(block, EntryKind::Certification)
        .into_iter()
        .filter_map(|entry| match entry {
            ParsedEntry::Certification(c) => Some(c),
            _ => None,
        })
        .collect()
}

pub fn parse_recommendations(block: &str) -> Vec<RecommendationEntry> {
    parse_entries(block, EntryKind::Recommendation)
        .into_iter()
        .filter_map(|entry| match entry {
            ParsedEntry::Recommendation(r) => Some(r),
            _ => None,
        })
        .collect()
}

/// Skills have no entry structure: every non-blank line is one skill.
pub fn parse_skills(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_chunks_on_blank_runs() {
        let block = "\nA\nB\n\n\n  \nC\n\nD\nE\nF\n";
        let chunks = split_chunks(block);
        assert_eq!(chunks, vec![vec!["A", "B"], vec!["C"], vec!["D", "E", "F"]]);
    }

    #[test]
    fn test_split_chunks_handles_crlf() {
        let chunks = split_chunks("A\r\nB\r\n\r\nC\r\n");
        assert_eq!(chunks, vec![vec!["A", "B"], vec!["C"]]);
    }

    #[test]
    fn test_experience_positional_mapping() {
        let entries = parse_experience("Engineer\nAcme Corp\nBuilt stuff\nShipped more\n\nDirector\nBeta Inc\n");
        assert_eq!(
            entries,
            vec![
                ExperienceEntry {
                    title: "Engineer".to_string(),
                    company: "Acme Corp".to_string(),
                    description: "Built stuff\nShipped more".to_string(),
                },
                ExperienceEntry {
                    title: "Director".to_string(),
                    company: "Beta Inc".to_string(),
                    description: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_single_line_experience_is_partial_entry() {
        let entries = parse_experience("Freelancer\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Freelancer");
        assert_eq!(entries[0].company, "");
    }

    #[test]
    fn test_education_without_degree() {
        let entries = parse_education("Stanford University\n");
        assert_eq!(entries[0].institution, "Stanford University");
        assert_eq!(entries[0].degree, "");
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_certification_defaults_issuer_and_date() {
        let entries = parse_certifications("CKA\n\nAWS Solutions Architect\nAmazon\n2022\nextra line\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "CKA");
        assert_eq!(entries[0].issuer, "");
        assert_eq!(entries[0].date, "");
        assert_eq!(entries[1].issuer, "Amazon");
        assert_eq!(entries[1].date, "2022");
    }

    #[test]
    fn test_single_line_recommendation_is_dropped() {
        let entries = parse_recommendations("Only A Name\n\nJohn Smith\nGreat to work with.\nWould hire again.\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].recommender, "John Smith");
        assert_eq!(entries[0].content, "Great to work with.\nWould hire again.");
    }

    #[test]
    fn test_min_lines_policy() {
        assert_eq!(EntryKind::Experience.min_lines(), 1);
        assert_eq!(EntryKind::Education.min_lines(), 1);
        assert_eq!(EntryKind::Certification.min_lines(), 1);
        assert_eq!(EntryKind::Recommendation.min_lines(), 2);
        assert!(EntryKind::Experience.map_lines(&[]).is_none());
        assert!(EntryKind::Recommendation.map_lines(&["Solo"]).is_none());
    }

    #[test]
    fn test_skills_one_per_line() {
        let skills = parse_skills("\n  Rust \nDistributed Systems\n\nGo\n");
        assert_eq!(skills, vec!["Rust", "Distributed Systems", "Go"]);
    }

    #[test]
    fn test_empty_block_yields_nothing() {
        assert!(parse_experience("").is_empty());
        assert!(parse_recommendations("   \n\n").is_empty());
        assert!(parse_skills("").is_empty());
    }
}
