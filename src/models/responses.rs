use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredOpportunity;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub recommendations: Vec<ScoredOpportunity>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the similarity endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub score: f64,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
}

/// Response for the keywords endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

/// Top picks for a student's dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecommendationsResponse {
    #[serde(rename = "studentId")]
    pub student_id: i64,
    pub recommendations: Vec<ScoredOpportunity>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
