// Document generation: prompt templates, the completion → sanitize → render
// pipeline, and the submission endpoint.
// All model calls go through llm_client::CompletionClient.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sanitizer;
