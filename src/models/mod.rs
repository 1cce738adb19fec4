// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Opportunity, ScoredOpportunity, StudentProfile};
pub use requests::{KeywordsRequest, RankRequest, RecommendationsQuery, SimilarityRequest};
pub use responses::{
    ErrorResponse, HealthResponse, KeywordsResponse, RankResponse, SimilarityResponse,
    StudentRecommendationsResponse,
};
