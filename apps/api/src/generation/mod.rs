// Landing-page generation: prompt building, output extraction, orchestration.
// All model calls go through llm_client; all writes go through store.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod prompts;
