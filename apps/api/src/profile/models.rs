use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub recommender: String,
    pub content: String,
}

/// Structured view of a profile document.
///
/// Every list defaults to empty. A section that is missing from the source
/// text is an empty list, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSections {
    pub name: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub recommendations: Vec<RecommendationEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_deserialize_as_empty() {
        let json = r#"{"name": "Jane Doe", "headline": "", "summary": ""}"#;
        let profile: ProfileSections = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert!(profile.experience.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.recommendations.is_empty());
    }

    #[test]
    fn test_default_profile_serializes_every_list() {
        let value = serde_json::to_value(ProfileSections::default()).unwrap();
        for key in [
            "experience",
            "education",
            "skills",
            "certifications",
            "recommendations",
        ] {
            assert_eq!(value[key], serde_json::json!([]), "{key} should be []");
        }
    }
}
