use std::time::Duration;

use tracing::{error, info};

use crate::config::AgentConfig;
use crate::domain::TaskReport;

use super::client::CoordinatorClient;
use super::errors::AgentResult;
use super::executor::{EchoExecutor, TaskExecutor};

/// Poll loop driving fetch → execute → report
pub struct AgentRuntime {
    client: CoordinatorClient,
    executor: Box<dyn TaskExecutor>,
    poll_interval: Duration,
}

impl AgentRuntime {
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        Ok(Self {
            client: CoordinatorClient::new(config)?,
            executor: Box::new(EchoExecutor),
            poll_interval: config.poll_interval,
        })
    }

    /// Replace the default executor
    pub fn with_executor(mut self, executor: Box<dyn TaskExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// One poll cycle. Returns true when a task was executed and reported.
    pub async fn tick(&self) -> bool {
        let task = self.client.fetch_task().await;

        if task.is_none_task() {
            info!("no work available");
            return false;
        }

        info!(task_id = %task.task_id, task = %task.task, "executing task");

        match self.executor.execute(&task).await {
            Ok(result) => {
                let report = TaskReport::new(&task, result);
                self.client.report_result(&report).await;
                true
            }
            Err(err) => {
                // One bad task must not kill the agent.
                error!(task_id = %task.task_id, %err, "task execution failed");
                false
            }
        }
    }

    /// Run until the caller cancels the future.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.poll_interval);

        loop {
            interval.tick().await;
            self.tick().await;
        }
    }
}
