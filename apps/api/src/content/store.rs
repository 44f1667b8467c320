//! Content store: the pluggable catalog backend behind the content routes.
//!
//! `AppState` holds an `Arc<dyn ContentStore>`: `PgContentStore` when
//! `DATABASE_URL` is set, `SeedStore` otherwise.

use async_trait::async_trait;

use crate::content::seed;
use crate::errors::AppError;
use crate::models::catalog::{BlogPost, Course, LeaderboardEntry, Project};

/// Read-only access to the site catalog. Lookups return `Ok(None)` for
/// unknown ids; handlers turn that into 404.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Post summaries (no `content`).
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError>;
    async fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn course_by_id(&self, id: &str) -> Result<Option<Course>, AppError>;
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn project_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;
    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError>;

    /// Backend name, for startup logs.
    fn backend(&self) -> &'static str;
}

/// Immutable in-memory catalog.
#[derive(Debug, Clone)]
pub struct SeedStore {
    posts: Vec<BlogPost>,
    courses: Vec<Course>,
    projects: Vec<Project>,
    leaderboard: Vec<LeaderboardEntry>,
}

impl SeedStore {
    pub fn new(
        posts: Vec<BlogPost>,
        courses: Vec<Course>,
        projects: Vec<Project>,
        leaderboard: Vec<LeaderboardEntry>,
    ) -> Self {
        Self {
            posts,
            courses,
            projects,
            leaderboard,
        }
    }

    /// Store filled with the bundled sample catalog.
    pub fn seeded() -> Self {
        Self::new(
            seed::posts(),
            seed::courses(),
            seed::projects(),
            seed::leaderboard(),
        )
    }
}

#[async_trait]
impl ContentStore for SeedStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.posts.iter().map(BlogPost::summary_view).collect())
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.clone())
    }

    async fn course_by_id(&self, id: &str) -> Result<Option<Course>, AppError> {
        Ok(self.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.clone())
    }

    async fn project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        Ok(self.leaderboard.clone())
    }

    fn backend(&self) -> &'static str {
        "seed"
    }
}
