use async_trait::async_trait;

use crate::domain::Task;

use super::errors::AgentResult;

/// Executes tasks on the agent.
///
/// The runtime only depends on this trait; real model-backed executors plug
/// in here.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn execute(&self, task: &Task) -> AgentResult<String>;
}

/// Default executor that echoes the task name
#[derive(Debug, Default)]
pub struct EchoExecutor;

#[async_trait]
impl TaskExecutor for EchoExecutor {
    async fn execute(&self, task: &Task) -> AgentResult<String> {
        let name = if task.task.is_empty() {
            "noop"
        } else {
            task.task.as_str()
        };

        Ok(format!("Agent executed {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn task_named(name: &str) -> Task {
        Task {
            task_id: Uuid::new_v4(),
            task: name.to_string(),
            payload: json!({}),
            agent_id: "test-agent".to_string(),
        }
    }

    #[tokio::test]
    async fn test_executes_named_task() {
        let executor = EchoExecutor;
        let result = executor.execute(&task_named("resize")).await.unwrap();

        assert_eq!(result, "Agent executed resize");
    }

    #[tokio::test]
    async fn test_empty_task_name_is_noop() {
        let executor = EchoExecutor;
        let result = executor.execute(&task_named("")).await.unwrap();

        assert_eq!(result, "Agent executed noop");
    }
}
