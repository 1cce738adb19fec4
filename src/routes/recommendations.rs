use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{keywords::sorted_keywords, select_top_picks, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, KeywordsRequest, KeywordsResponse, RankRequest, RankResponse,
    RecommendationsQuery, SimilarityRequest, SimilarityResponse, StudentRecommendationsResponse,
};
use crate::services::{PostgresClient, PostgresError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    pub top_picks: usize,
    pub max_limit: usize,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations/rank", web::post().to(rank))
        .route("/recommendations/similarity", web::post().to(similarity))
        .route("/recommendations/keywords", web::post().to(keywords))
        .route("/students/{student_id}/recommendations", web::get().to(student_recommendations));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "validation_failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank opportunities supplied by the caller
///
/// POST /api/v1/recommendations/rank
///
/// Request body:
/// ```json
/// {
///   "skills": "string",
///   "opportunities": [{"id": 1, "title": "...", "description": "...",
///                      "category": "...", "organizationName": "..."}]
/// }
/// ```
async fn rank(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return validation_error(errors);
    }

    let RankRequest { skills, opportunities } = req.into_inner();
    let result = state.matcher.rank(skills.as_deref(), opportunities);

    tracing::debug!("Ranked {} opportunities", result.total_candidates);

    HttpResponse::Ok().json(RankResponse {
        recommendations: result.recommendations,
        total_candidates: result.total_candidates,
    })
}

/// Score one profile against one opportunity text
///
/// POST /api/v1/recommendations/similarity
async fn similarity(
    state: web::Data<AppState>,
    req: web::Json<SimilarityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let (score, matched_keywords) = state
        .matcher
        .similarity(req.skills.as_deref(), req.text.as_deref());

    HttpResponse::Ok().json(SimilarityResponse {
        score,
        matched_keywords,
    })
}

/// Extract the keyword set of a text
///
/// POST /api/v1/recommendations/keywords
async fn keywords(state: web::Data<AppState>, req: web::Json<KeywordsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let keywords = state.matcher.extractor().extract_opt(req.text.as_deref());

    HttpResponse::Ok().json(KeywordsResponse {
        keywords: sorted_keywords(&keywords),
    })
}

/// Number of picks to return for a dashboard request
///
/// Falls back to the configured default and never exceeds the configured cap.
pub fn resolve_limit(requested: Option<u16>, top_picks: usize, max_limit: usize) -> usize {
    requested
        .map(usize::from)
        .unwrap_or(top_picks)
        .min(max_limit)
}

fn student_lookup_error(student_id: i64, err: PostgresError) -> HttpResponse {
    match err {
        PostgresError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "student_not_found".to_string(),
            message,
            status_code: 404,
        }),
        e => {
            tracing::error!("Failed to fetch student {}: {}", student_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "student_lookup_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Top picks for a student's dashboard
///
/// GET /api/v1/students/{student_id}/recommendations?limit={limit}
///
/// Ranks every approved opportunity against the student's skills, then drops
/// the ones already applied to and the ones with no overlap.
async fn student_recommendations(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let student_id = path.into_inner();
    let limit = resolve_limit(query.limit, state.top_picks, state.max_limit);

    tracing::info!("Finding recommendations for student: {}, limit: {}", student_id, limit);

    let student = match state.postgres.get_student(student_id).await {
        Ok(student) => student,
        Err(e) => return student_lookup_error(student_id, e),
    };

    let applied_ids = match state.postgres.get_applied_opportunity_ids(student_id).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Failed to fetch applications for {}: {}", student_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "applications_lookup_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let opportunities = match state.postgres.list_approved_opportunities().await {
        Ok(opportunities) => opportunities,
        Err(e) => {
            tracing::error!("Failed to load opportunities for {}: {}", student_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "opportunities_lookup_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = state.matcher.rank(student.skills.as_deref(), opportunities);
    let recommendations = select_top_picks(result.recommendations, &applied_ids, limit);

    tracing::info!(
        "Returning {} recommendations for student {} (from {} candidates)",
        recommendations.len(),
        student_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(StudentRecommendationsResponse {
        student_id,
        recommendations,
        total_candidates: result.total_candidates,
    })
}
