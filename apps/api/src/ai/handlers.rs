//! Axum route handlers for the AI tools.

use axum::{extract::State, Json};
use tracing::info;

use crate::ai::recommend::{recommend_courses, RecommendCoursesInput, RecommendedCourse};
use crate::ai::titles::{suggest_blog_titles, SuggestBlogTitleInput, SuggestBlogTitleOutput};
use crate::errors::AppError;
use crate::state::AppState;

fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// POST /api/ai/recommend-courses
pub async fn handle_recommend_courses(
    State(state): State<AppState>,
    Json(input): Json<RecommendCoursesInput>,
) -> Result<Json<Vec<RecommendedCourse>>, AppError> {
    require_text(&input.interests, "interests")?;
    require_text(&input.past_activity, "pastActivity")?;

    let courses = recommend_courses(&input, &state.llm).await?;
    info!("Recommended {} courses", courses.len());
    Ok(Json(courses))
}

/// POST /api/ai/blog-titles
pub async fn handle_blog_titles(
    State(state): State<AppState>,
    Json(input): Json<SuggestBlogTitleInput>,
) -> Result<Json<SuggestBlogTitleOutput>, AppError> {
    require_text(&input.keywords, "keywords")?;

    let output = suggest_blog_titles(&input, &state.llm).await?;
    info!("Suggested {} blog titles", output.title_suggestions.len());
    Ok(Json(output))
}
