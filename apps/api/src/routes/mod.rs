pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai;
use crate::content::handlers as content;
use crate::life::handlers as life;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/posts", get(content::handle_list_posts))
        .route("/api/posts/:slug", get(content::handle_get_post))
        .route("/api/courses", get(content::handle_list_courses))
        .route("/api/courses/facets", get(content::handle_course_facets))
        .route("/api/courses/:id", get(content::handle_get_course))
        .route("/api/projects", get(content::handle_list_projects))
        .route("/api/projects/tags", get(content::handle_project_tags))
        .route("/api/projects/:id", get(content::handle_get_project))
        .route("/api/leaderboard", get(content::handle_leaderboard))
        // Life timeline
        .route("/api/life/stages/default", get(life::handle_default_stages))
        .route("/api/life/stages", post(life::handle_edit_stages))
        .route("/api/life/timeline", post(life::handle_timeline))
        // AI tools
        .route("/api/ai/recommend-courses", post(ai::handle_recommend_courses))
        .route("/api/ai/blog-titles", post(ai::handle_blog_titles))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, LifeDefaults};
    use crate::content::store::SeedStore;
    use crate::llm_client::LlmClient;

    fn test_state() -> AppState {
        AppState {
            content: Arc::new(SeedStore::seeded()),
            llm: LlmClient::new("test-key".to_string()).unwrap(),
            config: Config {
                database_url: None,
                anthropic_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                cors_origin: None,
                life: LifeDefaults::default(),
            },
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_posts_omits_content() {
        let (status, body) = get_json("/api/posts").await;
        assert_eq!(status, StatusCode::OK);
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.get("content").is_none()));
    }

    #[tokio::test]
    async fn test_get_post_by_slug() {
        let (status, body) = get_json("/api/posts/getting-started-with-nextjs-14").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["content"].is_string());
        assert_eq!(body["author"]["name"], "Admin User");
    }

    #[tokio::test]
    async fn test_unknown_post_is_404_envelope() {
        let (status, body) = get_json("/api/posts/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_courses_filtered_by_query() {
        let (status, body) = get_json("/api/courses?level=Beginner").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (_, body) = get_json("/api/courses?search=DESIGN&category=all").await;
        assert_eq!(body[0]["title"], "UI/UX Design Masterclass");
    }

    #[tokio::test]
    async fn test_course_facets_and_detail() {
        let (status, body) = get_json("/api/courses/facets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"].as_array().unwrap().len(), 4);
        assert_eq!(body["levels"].as_array().unwrap().len(), 3);

        let (status, body) = get_json("/api/courses/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lessons"].as_array().unwrap().len(), 3);
        assert_eq!(body["studentCount"], 1250);
    }

    #[tokio::test]
    async fn test_projects_by_tag_and_tags() {
        let (_, body) = get_json("/api/projects?tag=Rust").await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = get_json("/api/projects/tags").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().contains(&json!("Firebase")));

        let (status, _) = get_json("/api/projects/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_leaderboard_ordered() {
        let (status, body) = get_json("/api/leaderboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["rank"], 1);
        assert_eq!(body[0]["name"], "Alice Wonderland");
    }

    #[tokio::test]
    async fn test_default_stages() {
        let (status, body) = get_json("/api/life/stages/default").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["endAgeYears"], 12);
    }

    #[tokio::test]
    async fn test_edit_stages_returns_new_table() {
        let (status, body) = post_json(
            "/api/life/stages",
            json!({
                "stages": [{"name": "Kid", "color": "a", "endAgeYears": 12}],
                "edit": {"type": "add"}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[1]["name"], "New Stage");
        assert_eq!(body[1]["endAgeYears"], 22);

        let (status, _) = post_json(
            "/api/life/stages",
            json!({"stages": [], "edit": {"type": "delete", "index": 0}}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_timeline_without_birth_date_requests_setup() {
        let (status, body) = post_json("/api/life/timeline", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "setup_required"}));
    }

    #[tokio::test]
    async fn test_timeline_ready() {
        let (status, body) = post_json(
            "/api/life/timeline",
            json!({
                "birthDate": "1990-01-01",
                "currentDate": "2024-06-01",
                "stages": [
                    {"name": "A", "color": "a", "endAgeYears": 12},
                    {"name": "B", "color": "b", "endAgeYears": 19},
                    {"name": "C", "color": "c", "endAgeYears": 100}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["totalWeeks"], 4420);
        assert_eq!(body["weeks"].as_array().unwrap().len(), 4420);
        assert_eq!(body["bands"][2]["endAgeYears"], 85);
        assert_eq!(body["nextBirthday"], "2025-01-01");
        assert_eq!(body["nextBirthdayWeek"], "2024-12-29");
        assert_eq!(body["weeks"][0]["startDate"], "1989-12-31");
        assert_eq!(body["weeks"][0]["isPast"], true);
    }

    #[tokio::test]
    async fn test_timeline_rejects_zero_lifespan() {
        let (status, body) = post_json(
            "/api/life/timeline",
            json!({"birthDate": "1990-01-01", "expectedLifespanYears": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_timeline_rejects_birth_date_near_calendar_end() {
        let (status, body) = post_json(
            "/api/life/timeline",
            json!({"birthDate": "+262100-01-01", "expectedLifespanYears": 150}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ai_tools_validate_before_calling_model() {
        let (status, _) = post_json("/api/ai/blog-titles", json!({"keywords": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_json(
            "/api/ai/recommend-courses",
            json!({"interests": "", "pastActivity": "sql"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "interests cannot be empty");
    }
}
