use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An opportunity (industrial visit, internship, mentorship) a student may apply to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Listing type, e.g. "Industrial Visit", "Internship", "Mentorship"
    #[serde(alias = "visitType", default)]
    pub category: String,
    #[serde(rename = "organizationName", alias = "companyName", default)]
    pub organization_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Opportunity {
    /// Text bundle the opportunity is matched on
    pub fn match_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.description, self.category, self.organization_name
        )
    }
}

/// A student's matching profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub skills: Option<String>,
}

/// Opportunity annotated with its similarity to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOpportunity {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
}
