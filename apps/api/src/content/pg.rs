//! PostgreSQL catalog backend. Schema: `migrations/0001_catalog.sql`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::content::store::ContentStore;
use crate::errors::AppError;
use crate::models::catalog::{
    BlogPost, Course, CourseInstructor, CourseLesson, LeaderboardEntry, PostAuthor, Project,
};

const POST_COLUMNS: &str = r#"
    p.id, p.slug, p.title, p.summary, p.image_url,
    u.name AS author_name, u.image_url AS author_avatar_url,
    p.published_at, p.tags"#;

const COURSE_SELECT: &str = r#"
    SELECT c.id, c.title, c.description, c.image_url, c.author_name,
           i.name AS instructor_name, i.bio AS instructor_bio,
           i.avatar_url AS instructor_avatar_url,
           c.rating, c.student_count, c.price, c.category, c.level, c.duration
    FROM courses c
    LEFT JOIN instructors i ON i.id = c.instructor_id"#;

const PROJECT_SELECT: &str = r#"
    SELECT id, title, description, long_description, image_url, tags,
           technologies, live_link, repo_link, date
    FROM projects"#;

#[derive(Debug, FromRow)]
struct PostRow {
    id: String,
    slug: String,
    title: String,
    summary: String,
    image_url: String,
    author_name: String,
    author_avatar_url: String,
    published_at: Option<DateTime<Utc>>,
    tags: Vec<String>,
}

impl PostRow {
    fn into_post(self, content: Option<String>) -> BlogPost {
        BlogPost {
            id: self.id,
            slug: self.slug,
            title: self.title,
            summary: self.summary,
            image_url: self.image_url,
            author: PostAuthor {
                name: self.author_name,
                avatar_url: self.author_avatar_url,
            },
            published_at: self.published_at,
            tags: self.tags,
            content,
        }
    }
}

#[derive(Debug, FromRow)]
struct PostDetailRow {
    #[sqlx(flatten)]
    post: PostRow,
    content: Option<String>,
}

#[derive(Debug, FromRow)]
struct CourseRow {
    id: String,
    title: String,
    description: String,
    image_url: String,
    author_name: String,
    instructor_name: Option<String>,
    instructor_bio: Option<String>,
    instructor_avatar_url: Option<String>,
    rating: Option<f64>,
    student_count: Option<i32>,
    price: String,
    category: String,
    level: String,
    duration: Option<String>,
}

impl CourseRow {
    fn into_course(self, lessons: Option<Vec<CourseLesson>>) -> Course {
        // An instructor is only reported when the join produced a name.
        let instructor = self.instructor_name.map(|name| CourseInstructor {
            name,
            bio: self.instructor_bio.unwrap_or_default(),
            avatar_url: self.instructor_avatar_url.unwrap_or_default(),
        });
        Course {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            author_name: self.author_name,
            instructor,
            rating: self.rating,
            student_count: self.student_count,
            price: self.price,
            category: self.category,
            level: self.level,
            duration: self.duration,
            lessons,
        }
    }
}

#[derive(Debug, FromRow)]
struct LessonRow {
    title: String,
    duration: String,
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: String,
    title: String,
    description: String,
    long_description: Option<String>,
    image_url: String,
    tags: Vec<String>,
    technologies: Option<Vec<String>>,
    live_link: Option<String>,
    repo_link: Option<String>,
    date: Option<DateTime<Utc>>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            long_description: row.long_description,
            image_url: row.image_url,
            tags: row.tags,
            technologies: row.technologies,
            live_link: row.live_link,
            repo_link: row.repo_link,
            date: row.date,
        }
    }
}

#[derive(Debug, FromRow)]
struct LeaderboardRow {
    id: String,
    rank: i32,
    name: String,
    avatar_url: String,
    points: i32,
    achievements: Vec<String>,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        LeaderboardEntry {
            id: row.id,
            rank: row.rank,
            name: row.name,
            avatar_url: row.avatar_url,
            points: row.points,
            achievements: row.achievements,
        }
    }
}

/// Catalog read from PostgreSQL through a shared pool.
#[derive(Debug, Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM blog_posts p JOIN users u ON u.id = p.author_id \
             ORDER BY p.published_at DESC NULLS LAST"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|r| r.into_post(None)).collect())
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS}, p.content FROM blog_posts p \
             JOIN users u ON u.id = p.author_id WHERE p.slug = $1"
        );
        let row = sqlx::query_as::<_, PostDetailRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.post.into_post(r.content)))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        let sql = format!("{COURSE_SELECT} ORDER BY c.title");
        let rows = sqlx::query_as::<_, CourseRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|r| r.into_course(None)).collect())
    }

    async fn course_by_id(&self, id: &str) -> Result<Option<Course>, AppError> {
        let sql = format!("{COURSE_SELECT} WHERE c.id = $1");
        let Some(row) = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let lessons = sqlx::query_as::<_, LessonRow>(
            "SELECT title, duration FROM lessons WHERE course_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|l| CourseLesson {
            title: l.title,
            duration: l.duration,
        })
        .collect();

        Ok(Some(row.into_course(Some(lessons))))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let sql = format!("{PROJECT_SELECT} ORDER BY date DESC NULLS LAST");
        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        let sql = format!("{PROJECT_SELECT} WHERE id = $1");
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Project::from))
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT l.id,
                   RANK() OVER (ORDER BY l.points DESC)::int4 AS rank,
                   u.name, u.image_url AS avatar_url, l.points, u.achievements
            FROM leaderboard_entries l
            JOIN users u ON u.id = l.user_id
            ORDER BY rank, l.points DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(LeaderboardEntry::from).collect())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_row(instructor_name: Option<&str>) -> CourseRow {
        CourseRow {
            id: "c1".to_string(),
            title: "Rust 101".to_string(),
            description: "Ownership and borrowing".to_string(),
            image_url: "https://example.com/c1.png".to_string(),
            author_name: "Ferris".to_string(),
            instructor_name: instructor_name.map(str::to_string),
            instructor_bio: Some("Crab".to_string()),
            instructor_avatar_url: None,
            rating: Some(4.5),
            student_count: None,
            price: "Free".to_string(),
            category: "Systems".to_string(),
            level: "Beginner".to_string(),
            duration: None,
        }
    }

    #[test]
    fn test_course_without_instructor_join() {
        let course = course_row(None).into_course(None);
        assert!(course.instructor.is_none());
        assert!(course.lessons.is_none());
    }

    #[test]
    fn test_course_with_instructor_and_lessons() {
        let lessons = vec![CourseLesson {
            title: "Intro".to_string(),
            duration: "1h".to_string(),
        }];
        let course = course_row(Some("Ferris")).into_course(Some(lessons));
        let instructor = course.instructor.unwrap();
        assert_eq!(instructor.name, "Ferris");
        assert_eq!(instructor.bio, "Crab");
        assert_eq!(instructor.avatar_url, "");
        assert_eq!(course.lessons.unwrap().len(), 1);
    }

    #[test]
    fn test_post_row_maps_author() {
        let row = PostRow {
            id: "p1".to_string(),
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            summary: "Hi".to_string(),
            image_url: "https://example.com/p1.png".to_string(),
            author_name: "Ana".to_string(),
            author_avatar_url: "https://example.com/ana.png".to_string(),
            published_at: None,
            tags: vec!["Rust".to_string()],
        };
        let post = row.into_post(Some("<p>x</p>".to_string()));
        assert_eq!(post.author.name, "Ana");
        assert_eq!(post.content.as_deref(), Some("<p>x</p>"));
    }
}
