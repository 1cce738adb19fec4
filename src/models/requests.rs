use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Opportunity;

/// Request to rank a batch of opportunities against a skills profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub skills: Option<String>,
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
}

/// Request to score a single profile/opportunity text pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarityRequest {
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub skills: Option<String>,
    #[validate(length(max = 20000))]
    #[serde(default)]
    pub text: Option<String>,
}

/// Request to extract keywords from a text
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KeywordsRequest {
    #[validate(length(max = 20000))]
    #[serde(default)]
    pub text: Option<String>,
}

/// Query string for the student dashboard recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsQuery {
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
