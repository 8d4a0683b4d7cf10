use shared_types::{DropletGuid, TaskGuid};
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Task {
    pub guid: TaskGuid,
    pub sequence_id: i64,
    pub name: String,
    pub command: String,
    /// Raw lifecycle state as reported by the server, see [`Task::task_state`]
    pub state: String,
    pub memory_in_mb: u64,
    pub disk_in_mb: u64,
    pub result: TaskResult,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
    pub droplet_guid: DropletGuid,
    pub links: TaskLinks,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskResult {
    pub failure_reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskLinks {
    pub self_link: Link,
    pub app: Link,
    pub droplet: Link,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Link {
    pub href: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Pending,
    Running,
    Succeeded,
    Canceling,
    Failed,
}

impl Task {
    /// `None` when the server reports a state this client does not know
    pub fn task_state(&self) -> Option<TaskState> {
        self.state.parse().ok()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.task_state(),
            Some(TaskState::Succeeded | TaskState::Failed)
        )
    }
}

/// Parameters for running a new task against a droplet.
///
/// Empty names and zero quotas are treated as not set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskRequest {
    pub command: String,
    pub name: Option<String>,
    pub memory_in_mb: Option<u64>,
    pub disk_in_mb: Option<u64>,
    pub droplet_guid: DropletGuid,
}

impl TaskRequest {
    pub fn new(command: impl Into<String>, droplet_guid: DropletGuid) -> Self {
        Self {
            command: command.into(),
            droplet_guid,
            ..Default::default()
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn with_memory_in_mb(self, memory_in_mb: u64) -> Self {
        Self {
            memory_in_mb: Some(memory_in_mb),
            ..self
        }
    }

    pub fn with_disk_in_mb(self, disk_in_mb: u64) -> Self {
        Self {
            disk_in_mb: Some(disk_in_mb),
            ..self
        }
    }
}
