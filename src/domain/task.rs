use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Name of the sentinel task the agent client falls back to when the
/// coordinator cannot be reached.
pub const NONE_TASK: &str = "none";

/// An immutable unit of work issued by the coordinator.
///
/// `agent_id` is opaque: it is echoed back exactly as the requester sent it,
/// or filled with a generated UUID string when the request carried none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task_id: Uuid,
    pub task: String,
    pub payload: serde_json::Value,
    pub agent_id: String,
}

impl Task {
    /// Sentinel returned by the agent client after every fetch attempt failed.
    pub fn none(agent_id: impl Into<String>) -> Self {
        Self {
            task_id: Uuid::new_v4(),
            task: NONE_TASK.to_string(),
            payload: json!({}),
            agent_id: agent_id.into(),
        }
    }

    /// True when this is the "no work available" sentinel.
    pub fn is_none_task(&self) -> bool {
        self.task == NONE_TASK
    }
}

/// Result an agent reports back after executing a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    pub task_id: Uuid,
    pub agent_id: String,
    pub result: String,
    pub completed_at: DateTime<Utc>,
}

impl TaskReport {
    /// Build a report for an executed task.
    pub fn new(task: &Task, result: impl Into<String>) -> Self {
        Self {
            task_id: task.task_id,
            agent_id: task.agent_id.clone(),
            result: result.into(),
            completed_at: Utc::now(),
        }
    }
}

/// Issues task descriptors.
///
/// The catalog currently holds a single demo operation; every issuance gets
/// a fresh `task_id`.
#[derive(Debug, Default)]
pub struct TaskCatalog;

impl TaskCatalog {
    /// Operation name of the demo task.
    pub const DEMO_TASK: &'static str = "classify_image";

    /// Issue a task for the given agent.
    pub fn issue(&self, agent_id: impl Into<String>) -> Task {
        Task {
            task_id: Uuid::new_v4(),
            task: Self::DEMO_TASK.to_string(),
            payload: json!({ "image_url": "https://example.com/sample.jpg" }),
            agent_id: agent_id.into(),
        }
    }
}
