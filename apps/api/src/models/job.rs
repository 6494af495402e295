use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Job lifecycle. Only `Active` jobs are eligible for recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Active,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(JobStatus::Pending),
            "active" => Some(JobStatus::Active),
            "closed" => Some(JobStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills_required: Vec<String>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub status: JobStatus,
}

/// The `jobs` columns the recommender selects.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills_required: Vec<String>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub status: String,
}

impl TryFrom<JobRow> for JobPosting {
    type Error = anyhow::Error;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let status = JobStatus::parse(&row.status)
            .ok_or_else(|| anyhow::anyhow!("job {} has unknown status '{}'", row.id, row.status))?;

        Ok(JobPosting {
            id: row.id,
            title: row.title,
            description: row.description,
            skills_required: row.skills_required,
            location: row.location,
            company_name: row.company_name,
            status,
        })
    }
}
