//! Section Segmenter: splits a profile document into heading-anchored blocks.
//!
//! Boundaries come from one declarative table (`SECTION_RULES`): each section names
//! its heading tokens and the headings that may close it. A single routine
//! (`capture_section`) walks that table for every section.
//!
//! Algorithm for section S:
//! 1. Find the first line-anchored, case-insensitive, whole-word match of S's heading
//! 2. Starting right after the heading, find the earliest heading among S's successors
//! 3. Capture the text in between, or up to end-of-document when no successor follows
//!
//! A heading that never appears yields an empty block.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Recommendations,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Certifications,
        SectionKind::Recommendations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Recommendations => "recommendations",
        }
    }

    fn rule(&self) -> &'static SectionRule {
        // SECTION_RULES has exactly one row per kind, in `ALL` order.
        &SECTION_RULES[*self as usize]
    }
}

/// One row of the boundary table.
#[derive(Debug)]
pub struct SectionRule {
    pub kind: SectionKind,
    pub headings: &'static [&'static str],
    pub successors: &'static [SectionKind],
}

pub const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        kind: SectionKind::Summary,
        headings: &["summary", "about"],
        successors: &[SectionKind::Experience, SectionKind::Education],
    },
    SectionRule {
        kind: SectionKind::Experience,
        headings: &["experience"],
        successors: &[SectionKind::Education, SectionKind::Skills],
    },
    SectionRule {
        kind: SectionKind::Education,
        headings: &["education"],
        successors: &[SectionKind::Skills, SectionKind::Certifications],
    },
    SectionRule {
        kind: SectionKind::Skills,
        headings: &["skills"],
        successors: &[SectionKind::Certifications, SectionKind::Recommendations],
    },
    SectionRule {
        kind: SectionKind::Certifications,
        headings: &["certifications"],
        successors: &[SectionKind::Recommendations],
    },
    SectionRule {
        kind: SectionKind::Recommendations,
        headings: &["recommendations"],
        successors: &[],
    },
];

/// Compiled heading matcher per section: line start, optional indent, whole word.
static HEADING_PATTERNS: Lazy<HashMap<SectionKind, Regex>> = Lazy::new(|| {
    SECTION_RULES
        .iter()
        .map(|rule| {
            let alternatives = rule
                .headings
                .iter()
                .map(|h| regex::escape(h))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?im)^[ \t]*(?:{alternatives})\b");
            let regex = Regex::new(&pattern).expect("section heading pattern is valid");
            (rule.kind, regex)
        })
        .collect()
});

/// Captured text block for every known section of one document.
#[derive(Debug, Clone)]
pub struct SectionBlocks<'a> {
    blocks: HashMap<SectionKind, &'a str>,
}

impl<'a> SectionBlocks<'a> {
    pub fn block(&self, kind: SectionKind) -> &'a str {
        self.blocks.get(&kind).copied().unwrap_or("")
    }
}

/// Segments the whole document in one call.
pub fn segment_sections(text: &str) -> SectionBlocks<'_> {
    let blocks = SectionKind::ALL
        .iter()
        .map(|&kind| {
            let block = capture_section(text, kind);
            debug!(section = kind.as_str(), len = block.len(), "Section captured");
            (kind, block)
        })
        .collect();
    SectionBlocks { blocks }
}

/// Returns the block following `kind`'s heading, or `""` when the heading is absent.
pub fn capture_section(text: &str, kind: SectionKind) -> &str {
    let Some(heading) = HEADING_PATTERNS[&kind].find(text) else {
        return "";
    };
    let start = heading.end();

    // find_at keeps the surrounding text as context, so `^` still means a real line start.
    let end = kind
        .rule()
        .successors
        .iter()
        .filter_map(|successor| HEADING_PATTERNS[successor].find_at(text, start))
        .map(|m| m.start())
        .min()
        .unwrap_or(text.len());

    &text[start..end]
}
