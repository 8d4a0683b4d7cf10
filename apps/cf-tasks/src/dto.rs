use cf_client::model::task::Task;
use serde::Serialize;
use shared_types::{DropletGuid, TaskGuid};
use time::OffsetDateTime;

/// Printed form of a task, the server result and links are flattened away
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskOutputDTO {
    pub guid: TaskGuid,
    pub sequence_id: i64,
    pub name: String,
    pub command: String,
    pub state: String,
    pub memory_in_mb: u64,
    pub disk_in_mb: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub droplet_guid: DropletGuid,
}

impl From<Task> for TaskOutputDTO {
    fn from(task: Task) -> Self {
        Self {
            guid: task.guid,
            sequence_id: task.sequence_id,
            name: task.name,
            command: task.command,
            state: task.state,
            memory_in_mb: task.memory_in_mb,
            disk_in_mb: task.disk_in_mb,
            failure_reason: task.result.failure_reason,
            created_at: task.created_at,
            updated_at: task.updated_at,
            droplet_guid: task.droplet_guid,
        }
    }
}
