//! Axum route handlers for the Match API.

use axum::{
    async_trait,
    extract::{multipart::Field, FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::document::extract_resume_text;
use crate::matching::matcher::{run_match, MatchResult};
use crate::state::AppState;

/// JSON body variant of a match submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchRequestBody {
    resume_text: Option<String>,
    job_description: Option<String>,
}

/// The resume half of a submission: an uploaded document or pasted text.
#[derive(Debug)]
pub enum ResumeInput {
    File {
        filename: Option<String>,
        data: Bytes,
    },
    Text(String),
}

/// A match submission, decoded from either `multipart/form-data` (fields
/// `resume`, `resumeText`, `jobDescription`) or a JSON body
/// (`{ "resumeText": ..., "jobDescription": ... }`).
#[derive(Debug, Default)]
pub struct MatchSubmission {
    pub resume: Option<ResumeInput>,
    pub job_description: Option<String>,
}

#[async_trait]
impl<S> FromRequest<S> for MatchSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;
            Self::from_multipart(multipart).await
        } else {
            let Json(body) = Json::<MatchRequestBody>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;
            Ok(Self {
                resume: body.resume_text.map(ResumeInput::Text),
                job_description: body.job_description,
            })
        }
    }
}

impl MatchSubmission {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            match field.name() {
                Some("resume") => {
                    let filename = field.file_name().map(str::to_string);
                    let data = field.bytes().await.map_err(|e| {
                        AppError::Validation(format!("Could not read resume upload: {e}"))
                    })?;
                    submission.resume = Some(ResumeInput::File { filename, data });
                }
                Some("resumeText") => {
                    submission.resume = Some(ResumeInput::Text(read_text_field(field).await?));
                }
                Some("jobDescription") => {
                    submission.job_description = Some(read_text_field(field).await?);
                }
                _ => {} // unknown fields are ignored
            }
        }

        Ok(submission)
    }
}

async fn read_text_field(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form field: {e}")))
}

/// POST /api/v1/match
///
/// Validates the submission, runs the analysis against the completion
/// service, and returns the raw report plus both extracted scores.
/// Validation failures return 400 before any upstream call is made.
pub async fn handle_match(
    State(state): State<AppState>,
    submission: MatchSubmission,
) -> Result<Json<MatchResult>, AppError> {
    let resume = submission
        .resume
        .ok_or_else(|| AppError::Validation("Missing resume".to_string()))?;

    let job_description = submission
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing job description".to_string()))?;

    let resume_text = match resume {
        ResumeInput::Text(text) if !text.trim().is_empty() => text,
        ResumeInput::Text(_) => return Err(AppError::Validation("Missing resume".to_string())),
        ResumeInput::File { filename, data } => extract_resume_text(&data, filename.as_deref())?,
    };

    let result = run_match(&resume_text, &job_description, state.llm.as_ref()).await?;

    Ok(Json(result))
}
