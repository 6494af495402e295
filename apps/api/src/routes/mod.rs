pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommend",
            post(handlers::handle_recommend_for_profile),
        )
        .route(
            "/api/v1/recommend/:id",
            get(handlers::handle_recommend_for_candidate),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::models::candidate::CandidateProfile;
    use crate::models::job::{JobPosting, JobStatus};
    use crate::recommend::catalog::memory::MemoryCatalog;

    fn router(catalog: MemoryCatalog) -> Router {
        build_router(AppState {
            catalog: Arc::new(catalog),
            recommendation_limit: 5,
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn active_job(skills: &[&str], title: &str) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: Some(title.to_string()),
            description: None,
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            location: Some("Berlin".to_string()),
            company_name: None,
            status: JobStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = router(MemoryCatalog::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobrec-api");
    }

    #[tokio::test]
    async fn test_missing_candidate_returns_404_envelope() {
        let response = router(MemoryCatalog::default())
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/recommend/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "User not found");
    }

    #[tokio::test]
    async fn test_malformed_id_rejected() {
        let response = router(MemoryCatalog::default())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/recommend/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommendations_json_shape() {
        let id = Uuid::new_v4();
        let job = active_job(&["rust", "axum"], "Rust Engineer");
        let mut catalog = MemoryCatalog::default();
        catalog.candidates.insert(
            id,
            CandidateProfile {
                skills: vec!["rust".to_string()],
                experience_years: Some(4),
                education: None,
            },
        );
        catalog.jobs.push(job.clone());

        let response = router(catalog)
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/recommend/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["job_id"], job.id.to_string());
        assert_eq!(items[0]["job"]["title"], "Rust Engineer");
        assert_eq!(items[0]["job"]["location"], "Berlin");
        assert_eq!(items[0]["job"]["skills_required"][1], "axum");
        assert_eq!(items[0]["similarity"], "1.000");
    }

    #[tokio::test]
    async fn test_post_profile() {
        let mut catalog = MemoryCatalog::default();
        catalog.jobs.push(active_job(&["go"], "Go Developer"));

        let response = router(catalog)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommend")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"skills":["go","grpc"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    async fn post_profile(body: &'static str) -> (StatusCode, Value) {
        let mut catalog = MemoryCatalog::default();
        catalog.jobs.push(active_job(&["rust"], "Rust Engineer"));
        catalog.jobs.push(active_job(&["go"], "Go Developer"));

        let response = router(catalog)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommend")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    fn assert_all_zero_in_storage_order(body: &Value) {
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["job"]["title"], "Rust Engineer");
        assert_eq!(items[1]["job"]["title"], "Go Developer");
        assert!(items.iter().all(|i| i["similarity"] == "0.000"));
    }

    #[tokio::test]
    async fn test_post_empty_profile_scores_zero() {
        let (status, body) = post_profile("{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_all_zero_in_storage_order(&body);
    }

    #[tokio::test]
    async fn test_post_experience_only_profile_scores_zero() {
        let (status, body) = post_profile(r#"{"experience_years":3}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_all_zero_in_storage_order(&body);
    }

    #[tokio::test]
    async fn test_post_stopword_only_profile_scores_zero() {
        let (status, body) = post_profile(r#"{"skills":["the","and"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_all_zero_in_storage_order(&body);
    }
}
