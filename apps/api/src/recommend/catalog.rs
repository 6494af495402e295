//! Catalog — where the recommender gets candidates and eligible jobs from.
//!
//! `AppState` holds an `Arc<dyn Catalog>`; `PgCatalog` is the production backend.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateProfile, CandidateRow};
use crate::models::job::{JobPosting, JobRow, JobStatus};

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn find_candidate(&self, id: Uuid) -> Result<Option<CandidateProfile>, AppError>;

    /// All jobs with status `active`, in a stable storage order.
    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError>;
}

pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn find_candidate(&self, id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        let row = sqlx::query_as::<_, CandidateRow>(
            "SELECT skills, experience_years, education FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CandidateProfile::from))
    }

    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, description, skills_required, location, company_name, status \
             FROM jobs WHERE status = $1 ORDER BY created_at, id",
        )
        .bind(JobStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| JobPosting::try_from(row).map_err(AppError::Internal))
            .collect()
    }
}
