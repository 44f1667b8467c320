//! Course recommendations: turns interests and past activity into a ranked
//! list of courses suggested by the model.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::ai::prompts::RECOMMEND_COURSES_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendCoursesInput {
    /// Comma separated.
    pub interests: String,
    /// Comma separated.
    pub past_activity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCourse {
    pub title: String,
    pub description: String,
    pub url: String,
    /// 0.0 – 1.0
    pub relevance_score: f64,
}

pub fn build_prompt(input: &RecommendCoursesInput) -> String {
    render(
        RECOMMEND_COURSES_PROMPT_TEMPLATE,
        &[
            ("interests", input.interests.trim()),
            ("past_activity", input.past_activity.trim()),
        ],
    )
}

/// Rejects model output whose scores or URLs are out of contract.
pub fn validate_recommendations(
    courses: Vec<RecommendedCourse>,
) -> Result<Vec<RecommendedCourse>, AppError> {
    for course in &courses {
        if !(0.0..=1.0).contains(&course.relevance_score) {
            return Err(AppError::Llm(format!(
                "relevance score {} for '{}' is outside 0..=1",
                course.relevance_score, course.title
            )));
        }
        let valid_url = Url::parse(&course.url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !valid_url {
            return Err(AppError::Llm(format!(
                "course '{}' has an invalid url '{}'",
                course.title, course.url
            )));
        }
    }
    Ok(courses)
}

/// Asks the model for courses matching the user's interests and history.
pub async fn recommend_courses(
    input: &RecommendCoursesInput,
    llm: &LlmClient,
) -> Result<Vec<RecommendedCourse>, AppError> {
    let courses = llm
        .call_json::<Vec<RecommendedCourse>>(&build_prompt(input), JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Course recommendation failed: {e}")))?;
    validate_recommendations(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_text;

    fn course(url: &str, score: f64) -> RecommendedCourse {
        RecommendedCourse {
            title: "Rust".to_string(),
            description: "Learn Rust".to_string(),
            url: url.to_string(),
            relevance_score: score,
        }
    }

    #[test]
    fn test_prompt_includes_inputs() {
        let prompt = build_prompt(&RecommendCoursesInput {
            interests: " rust, databases ".to_string(),
            past_activity: "Completed SQL basics".to_string(),
        });
        assert!(prompt.contains("Interests: rust, databases\n"));
        assert!(prompt.contains("Past Activity: Completed SQL basics"));
        assert!(!prompt.contains("{interests}"));
    }

    #[test]
    fn test_model_output_deserializes() {
        let text = r#"```json
        [{"title": "Rust", "description": "d", "url": "https://a.dev/rust", "relevanceScore": 0.9}]
        ```"#;
        let courses: Vec<RecommendedCourse> = parse_json_text(text).unwrap();
        assert_eq!(courses.len(), 1);
        assert!((courses[0].relevance_score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let ok = validate_recommendations(vec![
            course("https://a.dev/x", 0.0),
            course("http://a.dev/y", 1.0),
        ])
        .unwrap();
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn test_validate_rejects_out_of_range_score() {
        assert!(validate_recommendations(vec![course("https://a.dev/x", 1.2)]).is_err());
        assert!(validate_recommendations(vec![course("https://a.dev/x", -0.1)]).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(validate_recommendations(vec![course("not a url", 0.5)]).is_err());
        assert!(validate_recommendations(vec![course("ftp://a.dev/x", 0.5)]).is_err());
    }

    #[test]
    fn test_input_uses_camel_case() {
        let input: RecommendCoursesInput =
            serde_json::from_str(r#"{"interests": "ai", "pastActivity": "ml 101"}"#).unwrap();
        assert_eq!(input.past_activity, "ml 101");
    }
}
