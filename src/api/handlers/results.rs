use axum::{http::StatusCode, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::TaskReport;

/// Acknowledgment for a received task result
#[derive(Debug, Serialize)]
pub struct ReportAck {
    pub status: &'static str,
    pub task_id: Uuid,
}

/// Accept a task result from an agent
///
/// POST /api/results
///
/// Reports are acknowledged and logged only; nothing is stored.
pub async fn submit_result(
    Json(report): Json<TaskReport>,
) -> Result<(StatusCode, Json<ReportAck>), ApiError> {
    if report.result.is_empty() {
        return Err(ApiError::bad_request("result must not be empty"));
    }

    tracing::info!(
        task_id = %report.task_id,
        agent_id = %report.agent_id,
        result = %report.result,
        completed_at = %report.completed_at,
        "task result received"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(ReportAck {
            status: "accepted",
            task_id: report.task_id,
        }),
    ))
}
