//! Blog title suggestions from a keyword list.

use serde::{Deserialize, Serialize};

use crate::ai::prompts::{BLOG_TITLE_COUNT, SUGGEST_BLOG_TITLE_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestBlogTitleInput {
    /// Comma separated.
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestBlogTitleOutput {
    pub title_suggestions: Vec<String>,
}

pub fn build_prompt(input: &SuggestBlogTitleInput) -> String {
    render(
        SUGGEST_BLOG_TITLE_PROMPT_TEMPLATE,
        &[
            ("keywords", input.keywords.trim()),
            ("count", BLOG_TITLE_COUNT.to_string().as_str()),
        ],
    )
}

/// Trims titles and drops blank ones.
pub fn clean_titles(output: SuggestBlogTitleOutput) -> SuggestBlogTitleOutput {
    SuggestBlogTitleOutput {
        title_suggestions: output
            .title_suggestions
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    }
}

pub async fn suggest_blog_titles(
    input: &SuggestBlogTitleInput,
    llm: &LlmClient,
) -> Result<SuggestBlogTitleOutput, AppError> {
    let output = llm
        .call_json::<SuggestBlogTitleOutput>(&build_prompt(input), JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Blog title suggestion failed: {e}")))?;
    Ok(clean_titles(output))
}
