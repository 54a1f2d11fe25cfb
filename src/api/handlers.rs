use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    api::AppState,
    generation::{self, GenerationOutcome},
    model::LearningPlan,
};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub subject: String,
    pub level: String,
}

/// Envelope the frontend consumes. Optional fields are omitted rather than
/// sent as null so the success and failure shapes stay distinct.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LearningPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_demo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Precondition rejections use the same envelope as generation failures so
// the frontend can always parse the body.
fn precondition_failure(error: &str) -> (StatusCode, Json<GenerateResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(GenerateResponse {
            success: false,
            data: None,
            is_demo: None,
            message: None,
            error: Some(error.to_string()),
        }),
    )
}

pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<GenerateResponse>)> {
    if payload.subject.trim().is_empty() {
        return Err(precondition_failure("subject_required"));
    }
    if payload.level.trim().is_empty() {
        return Err(precondition_failure("level_required"));
    }

    let request_id = Uuid::new_v4().to_string();
    info!(
        %request_id,
        subject = %payload.subject,
        level = %payload.level,
        "learning path requested"
    );

    let outcome =
        generation::generate_learning_path(state.gemini.as_ref(), &payload.subject, &payload.level)
            .await;

    let response = match outcome {
        GenerationOutcome::Success {
            plan,
            is_demo,
            message,
        } => {
            info!(%request_id, is_demo, "learning path ready");
            GenerateResponse {
                success: true,
                data: Some(plan),
                is_demo: is_demo.then_some(true),
                message,
                error: None,
            }
        }
        GenerationOutcome::Failure { error } => {
            info!(%request_id, "learning path failed");
            GenerateResponse {
                success: false,
                data: None,
                is_demo: None,
                message: None,
                error: Some(error),
            }
        }
    };

    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.gemini.model().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::generation;
    use crate::model::{FirstLesson, LearningPathItem, Recommendation};
    use crate::provider::GeminiClient;

    fn test_state() -> AppState {
        AppState {
            gemini: Arc::new(GeminiClient::new(
                "test-key".into(),
                "test-model".into(),
                "http://localhost".into(),
            )),
        }
    }

    fn sample_plan() -> LearningPlan {
        LearningPlan {
            learning_path: vec![LearningPathItem {
                week: 1,
                topic: "Basics".into(),
                hours: 3,
                description: "Start here".into(),
            }],
            first_lesson: FirstLesson {
                title: "Lesson".into(),
                explanation: "Intro".into(),
                code_example: None,
                practice_questions: vec!["Q1?".into(), "Q2?".into(), "Q3?".into()],
            },
            recommendations: vec![Recommendation {
                topic: "Practice".into(),
                reason: "It works".into(),
            }],
        }
    }

    #[test]
    fn success_envelope_omits_error_and_demo_fields() {
        let response = GenerateResponse {
            success: true,
            data: Some(sample_plan()),
            is_demo: None,
            message: None,
            error: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
        assert!(json.get("isDemo").is_none());
        assert_eq!(json["data"]["learningPath"][0]["week"], 1);
    }

    #[test]
    fn demo_envelope_carries_flag_and_message() {
        let response = GenerateResponse {
            success: true,
            data: Some(sample_plan()),
            is_demo: Some(true),
            message: Some(generation::DEMO_MESSAGE.to_string()),
            error: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isDemo"], true);
        assert_eq!(json["message"], generation::DEMO_MESSAGE);
    }

    #[tokio::test]
    async fn blank_subject_is_rejected_with_the_failure_envelope() {
        let payload = GenerateRequest {
            subject: "   ".into(),
            level: "Beginner".into(),
        };
        let (status, Json(body)) = generate(State(test_state()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // The rejection body must be the documented envelope, not plain text.
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "subject_required");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn blank_level_is_rejected_with_the_failure_envelope() {
        let payload = GenerateRequest {
            subject: "Python".into(),
            level: "".into(),
        };
        let (status, Json(body)) = generate(State(test_state()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("level_required"));
        assert!(!body.success);
    }

    #[test]
    fn failure_envelope_carries_only_the_error() {
        let response = GenerateResponse {
            success: false,
            data: None,
            is_demo: None,
            message: None,
            error: Some(generation::RETRY_MESSAGE.to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], generation::RETRY_MESSAGE);
        assert!(json.get("data").is_none());
    }
}
