// Prompt templates for the AI tools. Placeholders are filled with llm_client::prompts::render.

/// Course recommendation prompt. Replace: {interests}, {past_activity}
pub const RECOMMEND_COURSES_PROMPT_TEMPLATE: &str = r#"You are a course recommendation expert. Given a user's interests and past activity, recommend a list of courses that would be relevant to them.

Interests: {interests}
Past Activity: {past_activity}

Return a JSON ARRAY of courses with this EXACT schema (no extra fields):
[
  {
    "title": "Systems Programming in Rust",
    "description": "A brief description of the course.",
    "url": "https://example.com/courses/rust-systems",
    "relevanceScore": 0.92
  }
]

Rules:
1. `url` must be an absolute http or https URL
2. `relevanceScore` is a number between 0 and 1
3. Only return courses that are highly relevant
4. Match key information from both the interests and the past activity"#;

/// Number of titles requested from the model.
pub const BLOG_TITLE_COUNT: usize = 5;

/// Blog title prompt. Replace: {keywords}, {count}
pub const SUGGEST_BLOG_TITLE_PROMPT_TEMPLATE: &str = r#"You are a creative blog title generator. Given a list of keywords, generate {count} compelling blog post titles.

Keywords: {keywords}

Return a JSON object with this EXACT schema:
{
  "titleSuggestions": ["First title", "Second title"]
}"#;
