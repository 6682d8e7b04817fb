use crate::core::{skills::group_by_owner, Matcher};
use crate::models::{
    CandidateProfile, ErrorResponse, FindMatchesRequest, HealthResponse, SkillKind, SkillMatch,
    SkillProfile,
};
use crate::services::{CacheKey, CacheManager, DirectoryClient, DirectoryError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let directory_healthy = state.directory.health_check().await.unwrap_or(false);

    let status = if directory_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string"
/// }
/// ```
///
/// Responds with a JSON array of match objects, pre-sorted by matchScore
/// descending. Any directory failure fails the whole request; no partial
/// lists are returned.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;

    tracing::info!("Finding matches for participant: {}", user_id);

    // Serve a recent result if one is still fresh
    let cache_key = CacheKey::matches(user_id);
    if let Ok(cached) = state.cache.get::<Vec<SkillMatch>>(&cache_key).await {
        tracing::debug!("Serving cached matches for {}", user_id);
        return HttpResponse::Ok().json(cached);
    }

    // Fetch the requester's own declared skills, one call per kind
    let teach = match state
        .directory
        .find_by_owner_and_kind(user_id, SkillKind::Teach)
        .await
    {
        Ok(skills) => skills,
        Err(e) => return dependency_failure(user_id, "teach skills", e),
    };

    let learn = match state
        .directory
        .find_by_owner_and_kind(user_id, SkillKind::Learn)
        .await
    {
        Ok(skills) => skills,
        Err(e) => return dependency_failure(user_id, "learn skills", e),
    };

    let requester = SkillProfile { teach, learn };

    // Nothing declared means nothing can overlap; skip the candidate fetch
    if requester.is_empty() {
        tracing::debug!("Participant {} has no declared skills", user_id);
        return HttpResponse::Ok().json(Vec::<SkillMatch>::new());
    }

    let participants = match state.directory.find_all_except(user_id).await {
        Ok(participants) => participants,
        Err(e) => return dependency_failure(user_id, "participants", e),
    };

    // One batch fetch for every candidate's skills, joined in memory
    let candidate_ids: Vec<String> = participants.iter().map(|p| p.id.clone()).collect();
    let records = match state.directory.list_skills(&candidate_ids).await {
        Ok(records) => records,
        Err(e) => return dependency_failure(user_id, "candidate skills", e),
    };

    let mut profiles = group_by_owner(records);
    let candidates: Vec<CandidateProfile> = participants
        .into_iter()
        .map(|participant| CandidateProfile {
            skills: profiles.remove(&participant.id).unwrap_or_default(),
            participant,
        })
        .collect();

    let result = state.matcher.compute_matches(&requester, candidates);

    if let Err(e) = state.cache.set(&cache_key, &result.matches).await {
        tracing::warn!("Failed to cache matches for {}: {}", user_id, e);
    }

    tracing::info!(
        "Returning {} matches for participant {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(result.matches)
}

fn dependency_failure(user_id: &str, what: &str, e: DirectoryError) -> HttpResponse {
    tracing::error!("Failed to fetch {} for {}: {}", what, user_id, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: format!("Failed to fetch {}", what),
        message: e.to_string(),
        status_code: 500,
    })
}
