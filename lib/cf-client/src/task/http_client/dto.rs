//! Wire format of the `/v3/tasks` endpoints.
//!
//! Responses decode leniently: absent and `null` fields fall back to empty values, only malformed
//! JSON or mistyped values are rejected.

use one_dto_mapper::Into;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use shared_types::{DropletGuid, TaskGuid};
use time::OffsetDateTime;

use crate::model::task::{Link, Task, TaskLinks, TaskRequest, TaskResult};

/// Body of `POST /v3/apps/{guid}/tasks`.
///
/// Quotas are sent as decimal strings and the droplet GUID travels in the path only.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateTaskRequestRestDTO {
    pub command: String,
    pub name: Option<String>,
    pub memory_in_mb: Option<String>,
    pub disk_in_mb: Option<String>,
}

impl From<TaskRequest> for CreateTaskRequestRestDTO {
    fn from(request: TaskRequest) -> Self {
        Self {
            command: request.command,
            name: request.name.filter(|name| !name.is_empty()),
            memory_in_mb: quota_to_string(request.memory_in_mb),
            disk_in_mb: quota_to_string(request.disk_in_mb),
        }
    }
}

fn quota_to_string(quota: Option<u64>) -> Option<String> {
    quota.filter(|value| *value != 0).map(|value| value.to_string())
}

#[serde_as]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TaskListResponseRestDTO {
    #[serde_as(as = "DefaultOnNull")]
    pub pagination: PaginationRestDTO,
    #[serde(rename = "resources")]
    #[serde_as(as = "DefaultOnNull<Vec<DefaultOnNull>>")]
    pub tasks: Vec<TaskResponseRestDTO>,
}

/// `next` and `previous` are only inspected for presence, any JSON value is accepted there
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaginationRestDTO {
    #[serde_as(as = "DefaultOnNull")]
    pub total_results: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_pages: u64,
    pub first: Option<LinkRestDTO>,
    pub last: Option<LinkRestDTO>,
    pub next: Option<serde_json::Value>,
    pub previous: Option<serde_json::Value>,
}

#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(Task)]
#[serde(default)]
pub struct TaskResponseRestDTO {
    #[serde_as(as = "DefaultOnNull")]
    pub guid: TaskGuid,
    #[serde_as(as = "DefaultOnNull")]
    pub sequence_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub command: String,
    #[serde_as(as = "DefaultOnNull")]
    pub state: String,
    #[serde_as(as = "DefaultOnNull")]
    pub memory_in_mb: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub disk_in_mb: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub result: TaskResultRestDTO,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde_as(as = "DefaultOnNull")]
    pub droplet_guid: DropletGuid,
    #[serde_as(as = "DefaultOnNull")]
    pub links: TaskLinksRestDTO,
}

#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(TaskResult)]
#[serde(default)]
pub struct TaskResultRestDTO {
    pub failure_reason: Option<String>,
}

#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(TaskLinks)]
#[serde(default)]
pub struct TaskLinksRestDTO {
    #[serde(rename = "self")]
    #[serde_as(as = "DefaultOnNull")]
    pub self_link: LinkRestDTO,
    #[serde_as(as = "DefaultOnNull")]
    pub app: LinkRestDTO,
    #[serde_as(as = "DefaultOnNull")]
    pub droplet: LinkRestDTO,
}

#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(Link)]
#[serde(default)]
pub struct LinkRestDTO {
    #[serde_as(as = "DefaultOnNull")]
    pub href: String,
}
