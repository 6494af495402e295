//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::recommend::ranker::{recommend_jobs, ScoredJob};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub skills_required: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub job_id: Uuid,
    pub job: JobSummary,
    /// Score with exactly three decimals, e.g. "0.482".
    pub similarity: String,
}

impl From<ScoredJob<'_>> for RecommendationItem {
    fn from(scored: ScoredJob<'_>) -> Self {
        let job = scored.job;
        RecommendationItem {
            job_id: job.id,
            job: JobSummary {
                id: job.id,
                title: job.title.clone(),
                company_name: job.company_name.clone(),
                location: job.location.clone(),
                skills_required: job.skills_required.clone(),
                description: job.description.clone(),
            },
            similarity: format_score(scored.score),
        }
    }
}

/// Formats a score with three decimals, rounding exact ties upward.
///
/// `format!("{:.3}")` rounds ties half-to-even, so a score of exactly 0.0625
/// would print "0.062". Scores that are an exact binary tie at the third
/// decimal (2000 × score is an odd integer) round to the larger neighbour.
fn format_score(score: f64) -> String {
    let doubled = score * 2000.0;
    // mul_add yields the exact rounding error of the product
    let exact = score.mul_add(2000.0, -doubled) == 0.0;
    let is_tie = score >= 0.0 && exact && doubled.fract() == 0.0 && doubled % 2.0 == 1.0;

    if is_tie && doubled < u64::MAX as f64 {
        let millis = (doubled as u64 + 1) / 2;
        return format!("{}.{:03}", millis / 1000, millis % 1000);
    }
    format!("{score:.3}")
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/recommend/:id
///
/// Top jobs for a stored candidate profile.
pub async fn handle_recommend_for_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<Vec<RecommendationItem>>, AppError> {
    let candidate = state
        .catalog
        .find_candidate(candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let items = recommend_against_active_jobs(&state, candidate).await?;
    info!(
        "Returned {} recommendations for candidate {candidate_id}",
        items.len()
    );
    Ok(Json(items))
}

/// POST /api/v1/recommend
///
/// Top jobs for an ad-hoc profile supplied in the request body. A profile
/// with no usable text is not an error: every job scores 0 in storage order.
pub async fn handle_recommend_for_profile(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<Vec<RecommendationItem>>, AppError> {
    let items = recommend_against_active_jobs(&state, profile).await?;
    info!("Returned {} recommendations for ad-hoc profile", items.len());
    Ok(Json(items))
}

/// Loads active jobs and ranks them on the blocking pool.
async fn recommend_against_active_jobs(
    state: &AppState,
    candidate: CandidateProfile,
) -> Result<Vec<RecommendationItem>, AppError> {
    let jobs = state.catalog.active_jobs().await?;
    if jobs.is_empty() {
        return Err(AppError::NotFound("No active jobs found".to_string()));
    }

    let limit = state.recommendation_limit;
    tokio::task::spawn_blocking(move || rank(&candidate, &jobs, limit))
        .await
        .map_err(|e| AppError::Recommendation(e.to_string()))
}

fn rank(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    limit: usize,
) -> Vec<RecommendationItem> {
    recommend_jobs(candidate, jobs, limit)
        .into_iter()
        .map(RecommendationItem::from)
        .collect()
}
