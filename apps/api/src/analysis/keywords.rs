//! Keyword catalog: the immutable category → phrase lists used by the keyword scorer.
//!
//! Each phrase is compiled into its own case-insensitive, whole-word pattern and
//! counted independently, so overlapping phrases ("founder" and "co-founder") both
//! count when they both match. Lists are not required to be disjoint.

use std::collections::HashMap;

use regex::Regex;

use crate::analysis::models::Category;
use crate::errors::AnalysisError;

const DEFAULT_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Leadership,
        &[
            "lead", "manager", "director", "head of", "chief", "founder", "co-founder",
            "president", "vp", "vice president", "executive", "ceo", "cto", "cfo", "coo",
        ],
    ),
    (
        Category::Technical,
        &[
            "engineer", "developer", "architect", "programmer", "technical", "technology",
            "software", "data", "ai", "machine learning", "algorithm", "hardware",
            "infrastructure", "cloud", "devops",
        ],
    ),
    (
        Category::Entrepreneurial,
        &[
            "founder", "co-founder", "entrepreneur", "startup", "launched", "created", "built",
            "established", "initiated", "venture", "entrepreneurship", "bootstrapped", "scaled",
            "exit", "acquisition",
        ],
    ),
    (
        Category::Education,
        &[
            "university", "college", "bachelor", "master", "phd", "mba", "degree", "diploma",
            "certificate", "thesis", "research", "postgraduate", "academic", "graduated",
            "student",
        ],
    ),
    (
        Category::Network,
        &[
            "connection", "recommendation", "endorsement", "network", "collaborate",
            "partnership", "team", "community", "mentor", "advisor", "board", "angel",
            "investor", "committee",
        ],
    ),
    (
        Category::Industry,
        &[
            "experience", "industry", "sector", "field", "market", "domain", "product",
            "professional", "career", "specialist", "expert", "consulting", "business",
            "corporate", "enterprise",
        ],
    ),
];

#[derive(Debug, Clone)]
struct KeywordSet {
    phrases: Vec<String>,
    patterns: Vec<Regex>,
}

#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    sets: HashMap<Category, KeywordSet>,
}

impl KeywordCatalog {
    /// Builds a catalog from explicit lists. Every category must be present.
    pub fn new(lists: HashMap<Category, Vec<String>>) -> Result<Self, AnalysisError> {
        let mut sets = HashMap::new();

        for category in Category::ALL {
            let raw = lists.get(&category).ok_or_else(|| {
                AnalysisError::Keywords(format!("missing category '{}'", category.key()))
            })?;

            let mut phrases = Vec::with_capacity(raw.len());
            let mut patterns = Vec::with_capacity(raw.len());
            for phrase in raw {
                let phrase = phrase.trim().to_lowercase();
                if phrase.is_empty() {
                    return Err(AnalysisError::Keywords(format!(
                        "empty phrase in category '{}'",
                        category.key()
                    )));
                }
                patterns.push(phrase_pattern(&phrase)?);
                phrases.push(phrase);
            }

            sets.insert(category, KeywordSet { phrases, patterns });
        }

        Ok(Self { sets })
    }

    /// Parses a JSON object mapping category keys to phrase arrays, e.g.
    /// `{"leadership": ["ceo", "head of"], "technical": [...], ...}`.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let lists: HashMap<Category, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| AnalysisError::Keywords(format!("malformed keyword file: {e}")))?;
        Self::new(lists)
    }

    pub fn phrases(&self, category: Category) -> &[String] {
        self.sets
            .get(&category)
            .map(|set| set.phrases.as_slice())
            .unwrap_or_default()
    }

    /// Total whole-word, case-insensitive matches of every phrase in `category`.
    pub fn count_matches(&self, category: Category, text: &str) -> usize {
        self.sets
            .get(&category)
            .map(|set| {
                set.patterns
                    .iter()
                    .map(|pattern| pattern.find_iter(text).count())
                    .sum()
            })
            .unwrap_or(0)
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        let lists = DEFAULT_KEYWORDS
            .iter()
            .map(|(category, phrases)| {
                (*category, phrases.iter().map(|p| p.to_string()).collect())
            })
            .collect();
        Self::new(lists).expect("built-in keyword lists are valid")
    }
}

/// `\b` is only meaningful next to a word character, so a phrase edge such as the
/// `+` in "c++" is matched without a boundary assertion.
fn phrase_pattern(phrase: &str) -> Result<Regex, AnalysisError> {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(phrase.chars().next()) { r"\b" } else { "" };
    let trail = if is_word(phrase.chars().last()) { r"\b" } else { "" };
    let pattern = format!("(?i){lead}{}{trail}", regex::escape(phrase));
    Regex::new(&pattern)
        .map_err(|e| AnalysisError::Keywords(format!("cannot compile '{phrase}': {e}")))
}
