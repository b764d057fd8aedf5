use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::AgentConfig;
use crate::domain::{Task, TaskReport};

use super::errors::{AgentError, AgentResult};

/// HTTP client for the coordinator API
pub struct CoordinatorClient {
    http: Client,
    base_url: String,
    agent_id: String,
    fetch_retries: u32,
}

impl CoordinatorClient {
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            base_url: config.coordinator_url.clone(),
            agent_id: config.agent_id.clone(),
            fetch_retries: config.fetch_retries,
        })
    }

    /// Fetch the next task, retrying transient failures with doubling backoff.
    ///
    /// When every attempt fails, the sentinel `none` task is returned and the
    /// caller decides whether to idle.
    pub async fn fetch_task(&self) -> Task {
        let mut backoff = Duration::from_millis(250);

        for attempt in 1..=self.fetch_retries {
            match self.try_fetch_task().await {
                Ok(task) => return task,
                Err(err) => {
                    warn!(attempt, %err, "task fetch failed");
                }
            }

            if attempt < self.fetch_retries {
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }

        debug!("all fetch attempts failed, falling back to the none task");
        Task::none(self.agent_id.clone())
    }

    async fn try_fetch_task(&self) -> AgentResult<Task> {
        let response = self
            .http
            .post(format!("{}/api/tasks/next", self.base_url))
            .json(&serde_json::json!({ "agent_id": self.agent_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AgentError::UnexpectedStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Report a task result. Failures are logged and dropped; reports are
    /// fire-and-forget.
    pub async fn report_result(&self, report: &TaskReport) {
        match self.try_report(report).await {
            Ok(()) => debug!(task_id = %report.task_id, "result reported"),
            Err(err) => warn!(task_id = %report.task_id, %err, "failed to report result"),
        }
    }

    async fn try_report(&self, report: &TaskReport) -> AgentResult<()> {
        let response = self
            .http
            .post(format!("{}/api/results", self.base_url))
            .json(report)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AgentError::UnexpectedStatus(response.status()));
        }

        Ok(())
    }
}
