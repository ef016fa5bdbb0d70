// Match analysis: prompt assembly, the upstream completion call, and score
// extraction. All completion calls go through llm_client, no direct HTTP here.

pub mod assembler;
pub mod document;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod score_extract;
