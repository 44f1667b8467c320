//! Catalog records as served to the site. Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub image_url: String,
    pub author: PostAuthor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    /// Present on the detail view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl BlogPost {
    /// Listing form of the post, without the body.
    pub fn summary_view(&self) -> BlogPost {
        BlogPost {
            content: None,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInstructor {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLesson {
    pub title: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<CourseInstructor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i32>,
    pub price: String,
    pub category: String,
    /// "Beginner" | "Intermediate" | "Advanced", kept open-ended.
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<CourseLesson>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub image_url: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub rank: i32,
    pub name: String,
    pub avatar_url: String,
    pub points: i32,
    pub achievements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_view_drops_content() {
        let post = BlogPost {
            id: "1".to_string(),
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            summary: "Hi".to_string(),
            image_url: "https://example.com/a.png".to_string(),
            author: PostAuthor {
                name: "Ana".to_string(),
                avatar_url: "https://example.com/ana.png".to_string(),
            },
            published_at: None,
            tags: vec![],
            content: Some("<p>body</p>".to_string()),
        };
        let summary = post.summary_view();
        assert!(summary.content.is_none());
        assert_eq!(summary.slug, post.slug);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("content").is_none());
        assert_eq!(json["imageUrl"], "https://example.com/a.png");
        assert_eq!(json["author"]["avatarUrl"], "https://example.com/ana.png");
    }
}
