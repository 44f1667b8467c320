// AI tools: course recommendations and blog title suggestions.
// All model calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod recommend;
pub mod titles;
