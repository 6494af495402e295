use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Profile fields the recommender reads. Everything is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub education: Option<String>,
}

/// The `users` columns the recommender selects.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub skills: Vec<String>,
    pub experience_years: Option<i32>,
    pub education: Option<String>,
}

impl From<CandidateRow> for CandidateProfile {
    fn from(row: CandidateRow) -> Self {
        CandidateProfile {
            skills: row.skills,
            // negative years are nonsense in storage; treat as absent
            experience_years: row.experience_years.and_then(|y| u32::try_from(y).ok()),
            education: row.education,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(experience_years: Option<i32>) -> CandidateRow {
        CandidateRow {
            skills: vec!["rust".to_string()],
            experience_years,
            education: Some("BSc Computer Science".to_string()),
        }
    }

    #[test]
    fn test_row_into_profile() {
        let profile = CandidateProfile::from(row(Some(4)));
        assert_eq!(profile.skills, vec!["rust"]);
        assert_eq!(profile.experience_years, Some(4));
        assert_eq!(profile.education.as_deref(), Some("BSc Computer Science"));
    }

    #[test]
    fn test_negative_experience_dropped() {
        assert_eq!(CandidateProfile::from(row(Some(-2))).experience_years, None);
    }

    #[test]
    fn test_partial_json_deserializes() {
        let profile: CandidateProfile = serde_json::from_str(r#"{"skills":["go"]}"#).unwrap();
        assert_eq!(profile.skills, vec!["go"]);
        assert!(profile.education.is_none());
    }
}
