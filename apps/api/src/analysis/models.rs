use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Categories and bands
// ────────────────────────────────────────────────────────────────────────────

/// The six scored categories, in their fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Leadership,
    Technical,
    Entrepreneurial,
    Education,
    Network,
    Industry,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Leadership,
        Category::Technical,
        Category::Entrepreneurial,
        Category::Education,
        Category::Network,
        Category::Industry,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Leadership => "leadership",
            Category::Technical => "technical",
            Category::Entrepreneurial => "entrepreneurial",
            Category::Education => "education",
            Category::Network => "network",
            Category::Industry => "industry",
        }
    }

    /// Display name used in `MetricScore.name` and in strengths/weaknesses.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Category::Leadership => "Leadership Experience",
            Category::Technical => "Technical Skills",
            Category::Entrepreneurial => "Entrepreneurial Experience",
            Category::Education => "Education",
            Category::Network => "Network Strength",
            Category::Industry => "Industry Experience",
        }
    }

    /// Lowercase phrase used when the category is named in the summary sentence.
    pub fn summary_phrase(&self) -> &'static str {
        match self {
            Category::Leadership => "leadership experience",
            Category::Technical => "technical skills",
            Category::Entrepreneurial => "entrepreneurial background",
            Category::Education => "educational qualifications",
            Category::Network => "professional network",
            Category::Industry => "industry experience",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Four-way split of a 0–100 score. Shared by the recommendation tier, the summary
/// adjective and the metric description table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Exceptional, // ≥ 85
    High,        // ≥ 70
    Moderate,    // ≥ 50
    Limited,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => ScoreBand::Exceptional,
            s if s >= 70 => ScoreBand::High,
            s if s >= 50 => ScoreBand::Moderate,
            _ => ScoreBand::Limited,
        }
    }

    pub fn tier_label(&self) -> &'static str {
        match self {
            ScoreBand::Exceptional => "Exceptional Founder Potential",
            ScoreBand::High => "High Founder Potential",
            ScoreBand::Moderate => "Moderate Founder Potential",
            ScoreBand::Limited => "Limited Founder Potential",
        }
    }

    pub fn adjective(&self) -> &'static str {
        match self {
            ScoreBand::Exceptional => "exceptional",
            ScoreBand::High => "strong",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Limited => "limited",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

/// Final (post-perturbation) score per category, each in 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScores([u32; 6]);

impl CategoryScores {
    pub fn from_fn(mut f: impl FnMut(Category) -> u32) -> Self {
        let mut scores = [0; 6];
        for category in Category::ALL {
            scores[category.index()] = f(category).min(100);
        }
        Self(scores)
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    /// Scores in fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Unweighted mean of the six scores.
    pub fn mean(&self) -> f64 {
        self.0.iter().map(|&s| s as f64).sum::<f64>() / self.0.len() as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub name: String,
    pub score: u32,
    pub description: String,
}

/// The analysis result handed to report renderers. Field names are part of the
/// external contract and serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub name: String,
    /// Opaque reference supplied by the caller; never interpreted here.
    pub profile_image: Option<String>,
    pub overall_score: u32,
    pub recommendation: String,
    pub summary: String,
    pub metrics: Vec<MetricScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Supplementary heuristics computed from the structured profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedMetrics {
    pub job_stability: u32,
    pub career_progression: u32,
    pub education_relevance: u32,
    pub skill_diversity: u32,
    pub social_proof: u32,
}
