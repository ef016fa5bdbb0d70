//! The match pipeline: assemble the messages, call the completion service
//! once, and extract both scores from whatever came back.

use serde::Serialize;

use crate::errors::AppError;
use crate::llm_client::ChatCompletion;
use crate::matching::assembler::build_messages;
use crate::matching::score_extract::{extract_ats_score, extract_match_score};

/// Outcome of one match analysis. Request-scoped; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Raw HTML report from the model, passed to the client unmodified.
    /// The model is a semi-trusted content generator; the rendering client
    /// owns sanitization.
    pub result: String,
    pub match_score: u32,
    pub ats_score: u32,
}

/// Runs a full match analysis against the completion service.
///
/// An upstream failure surfaces as an error. A report that merely lacks the
/// score labels does not: it scores 0.
pub async fn run_match(
    resume_text: &str,
    job_description: &str,
    llm: &dyn ChatCompletion,
) -> Result<MatchResult, AppError> {
    let messages = build_messages(resume_text, job_description);

    let report = llm
        .complete(&messages)
        .await
        .map_err(|e| AppError::Llm(format!("match analysis failed: {e}")))?;

    Ok(MatchResult {
        match_score: extract_match_score(&report),
        ats_score: extract_ats_score(&report),
        result: report,
    })
}
