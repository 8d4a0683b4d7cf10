//! Client for the `/v3/tasks` resource: one-off commands run against a staged droplet.

use shared_types::{AppGuid, TaskGuid};

use crate::model::task::{Task, TaskRequest};
use crate::task::error::TaskClientError;

pub mod error;
pub mod http_client;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait TaskClient: Send + Sync {
    /// All tasks visible to the caller, first page only
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskClientError>;

    /// Runs `request.command` against the droplet, returns the task as created by the server
    async fn create_task(&self, request: TaskRequest) -> Result<Task, TaskClientError>;

    async fn task_by_guid(&self, guid: &TaskGuid) -> Result<Task, TaskClientError>;

    /// Tasks of one app, first page only
    async fn tasks_by_app(&self, guid: &AppGuid) -> Result<Vec<Task>, TaskClientError>;

    /// Requests cancellation, the server acknowledges with `202 Accepted`
    async fn terminate_task(&self, guid: &TaskGuid) -> Result<(), TaskClientError>;
}
