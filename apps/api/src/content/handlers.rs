use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::content::filter::{
    course_categories, course_levels, order_leaderboard, project_tags, CourseFilter,
    ProjectFilter,
};
use crate::errors::AppError;
use crate::models::catalog::{BlogPost, Course, LeaderboardEntry, Project};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CourseFacets {
    pub categories: Vec<String>,
    pub levels: Vec<String>,
}

/// GET /api/posts
pub async fn handle_list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    Ok(Json(state.content.list_posts().await?))
}

/// GET /api/posts/:slug
pub async fn handle_get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    let post = state
        .content
        .post_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post '{slug}' not found")))?;
    Ok(Json(post))
}

/// GET /api/courses?search=&category=&level=
pub async fn handle_list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.content.list_courses().await?;
    Ok(Json(filter.apply(courses)))
}

/// GET /api/courses/facets
pub async fn handle_course_facets(
    State(state): State<AppState>,
) -> Result<Json<CourseFacets>, AppError> {
    let courses = state.content.list_courses().await?;
    Ok(Json(CourseFacets {
        categories: course_categories(&courses),
        levels: course_levels(&courses),
    }))
}

/// GET /api/courses/:id
pub async fn handle_get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course = state
        .content
        .course_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course {id} not found")))?;
    Ok(Json(course))
}

/// GET /api/projects?search=&tag=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.content.list_projects().await?;
    Ok(Json(filter.apply(projects)))
}

/// GET /api/projects/tags
pub async fn handle_project_tags(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let projects = state.content.list_projects().await?;
    Ok(Json(project_tags(&projects)))
}

/// GET /api/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let project = state
        .content
        .project_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;
    Ok(Json(project))
}

/// GET /api/leaderboard
pub async fn handle_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let mut entries = state.content.leaderboard().await?;
    order_leaderboard(&mut entries);
    Ok(Json(entries))
}
