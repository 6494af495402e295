//! Recommendation Ranker — scores every supplied job against a candidate and keeps the best.
//!
//! Callers must pass only eligible (active) jobs; the ranker does not re-check status.

use tracing::debug;

use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::recommend::similarity::compute_similarity;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// A job paired with its similarity to the candidate. Lives for one call only.
#[derive(Debug, Clone)]
pub struct ScoredJob<'a> {
    pub job: &'a JobPosting,
    pub score: f64,
}

/// Skills, experience and education as one whitespace-separated blob.
pub fn candidate_text(candidate: &CandidateProfile) -> String {
    let experience = candidate
        .experience_years
        .map(|y| y.to_string())
        .unwrap_or_default();

    [
        candidate.skills.join(" "),
        experience,
        candidate.education.clone().unwrap_or_default(),
    ]
    .join(" ")
}

/// Required skills, title and description as one whitespace-separated blob.
pub fn job_text(job: &JobPosting) -> String {
    [
        job.skills_required.join(" "),
        job.title.clone().unwrap_or_default(),
        job.description.clone().unwrap_or_default(),
    ]
    .join(" ")
}

/// Ranks `jobs` by descending similarity to `candidate`, keeping at most `limit`.
///
/// The sort is stable: equal scores keep the order the jobs were supplied in.
pub fn recommend_jobs<'a>(
    candidate: &CandidateProfile,
    jobs: &'a [JobPosting],
    limit: usize,
) -> Vec<ScoredJob<'a>> {
    if jobs.is_empty() {
        return Vec::new();
    }

    let text = candidate_text(candidate);

    let mut scored: Vec<ScoredJob<'a>> = jobs
        .iter()
        .map(|job| {
            let score = compute_similarity(&text, &job_text(job));
            debug!(job_id = %job.id, score, "Scored job");
            ScoredJob { job, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);

    debug!(
        considered = jobs.len(),
        returned = scored.len(),
        "Ranked jobs for candidate"
    );
    scored
}
