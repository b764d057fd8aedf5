use axum::{body::Bytes, extract::State, Json};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::Task;

/// Issue the next task for an agent
///
/// POST /api/tasks/next
///
/// The body is parsed best-effort: a malformed body, or a missing or
/// non-string `agent_id`, behaves exactly like an empty request and a fresh
/// agent id is generated. An agent polling with garbage still gets a task.
pub async fn next_task(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Task>, ApiError> {
    let agent_id = resolve_agent_id(&body);

    let task = state.catalog.issue(agent_id);
    tracing::info!(task_id = %task.task_id, agent_id = %task.agent_id, "issued task");

    Ok(Json(task))
}

/// Extract `agent_id` from the raw request body, generating one when absent.
fn resolve_agent_id(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => value
            .get("agent_id")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .unwrap_or_else(generate_agent_id),
        Err(err) => {
            tracing::debug!(%err, "unparseable request body, generating agent id");
            generate_agent_id()
        }
    }
}

fn generate_agent_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_echoes_string_agent_id() {
        let body = br#"{"agent_id": "agent-42"}"#;
        assert_eq!(resolve_agent_id(body), "agent-42");
    }

    #[test]
    fn test_resolve_generates_when_missing() {
        let id = resolve_agent_id(b"{}");
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_resolve_generates_on_malformed_body() {
        let id = resolve_agent_id(b"{not valid json");
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_resolve_generates_on_non_string_agent_id() {
        let id = resolve_agent_id(br#"{"agent_id": 7}"#);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_resolve_generates_on_empty_body() {
        let id = resolve_agent_id(b"");
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
