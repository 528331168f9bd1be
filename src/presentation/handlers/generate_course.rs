use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::GenerationMessage;
use crate::domain::{CourseRequest, CourseRequestOptions, ProfileId};
use crate::presentation::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Wire shape of the trigger payload. Everything is optional here;
/// defaulting and clamping happen in [`CourseRequest::new`].
#[derive(Debug, Deserialize)]
pub struct GenerateCourseRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub num_modules: Option<u32>,
    #[serde(default, alias = "audience")]
    pub target_audience: Option<AudienceField>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub module_length_min: Option<u32>,
    #[serde(default)]
    pub module_length_max: Option<u32>,
    #[serde(default)]
    pub include_final_exam: Option<bool>,
    #[serde(default)]
    pub final_exam_difficulty: Option<String>,
    #[serde(default)]
    pub final_exam_options: Option<u32>,
    #[serde(default)]
    pub final_exam_questions: Option<u32>,
}

/// The audience can arrive as a single string or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AudienceField {
    One(String),
    Many(Vec<String>),
}

impl AudienceField {
    fn into_vec(self) -> Vec<String> {
        match self {
            AudienceField::One(value) => vec![value],
            AudienceField::Many(values) => values,
        }
    }
}

#[derive(Serialize)]
pub struct GenerateCourseResponse {
    pub job_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, headers, body))]
pub async fn generate_course_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    if !state.providers_configured {
        tracing::warn!("Course generation requested but no provider credentials are configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "No generative-text provider is configured".to_string(),
            }),
        )
            .into_response();
    }

    // The raw body doubles as the job's immutable input snapshot.
    let payload: GenerateCourseRequest = match serde_json::from_value(body.clone()) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected malformed generation request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid request payload: {}", e),
                }),
            )
                .into_response();
        }
    };

    let options = CourseRequestOptions {
        topic: payload.topic,
        title: payload.title,
        difficulty: payload.difficulty,
        num_modules: payload.num_modules,
        audience: payload
            .target_audience
            .map(AudienceField::into_vec)
            .unwrap_or_default(),
        tone: payload.tone,
        description: payload.description,
        module_length_min: payload.module_length_min,
        module_length_max: payload.module_length_max,
        include_final_exam: payload.include_final_exam,
        final_exam_difficulty: payload.final_exam_difficulty,
        final_exam_options: payload.final_exam_options,
        final_exam_questions: payload.final_exam_questions,
    };

    let request = match CourseRequest::new(options) {
        Ok(request) => request,
        Err(reason) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: reason }),
            )
                .into_response();
        }
    };

    let created_by = resolve_requester(&state, &headers).await;

    let job = match state.job_store.create(body, created_by).await {
        Ok(job) => job,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create job record");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create job: {}", e),
                }),
            )
                .into_response();
        }
    };

    let job_id = job.id;
    let topic = request.topic.clone();

    if let Err(send_error) = state
        .generation_sender
        .send(GenerationMessage { job, request })
        .await
    {
        tracing::error!("Failed to enqueue generation job: worker unavailable");
        let mut job = send_error.0.job;
        if let Err(e) = state
            .job_store
            .fail(&mut job, "generation queue unavailable")
            .await
        {
            tracing::error!(error = %e, job_id = %job_id.as_uuid(), "Failed to record enqueue failure");
        }
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Generation queue unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(
        job_id = %job_id.as_uuid(),
        topic = %topic,
        "Course generation job enqueued"
    );

    (
        StatusCode::ACCEPTED,
        Json(GenerateCourseResponse {
            job_id: job_id.as_uuid().to_string(),
        }),
    )
        .into_response()
}

/// Resolution failures do not block generation; the job just runs
/// without attribution.
async fn resolve_requester(state: &AppState, headers: &HeaderMap) -> Option<ProfileId> {
    let subject = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    match state.profile_resolver.resolve(subject).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to resolve requester profile, continuing anonymously");
            None
        }
    }
}
