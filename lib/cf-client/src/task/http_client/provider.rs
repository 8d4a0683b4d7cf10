use shared_types::{AppGuid, TaskGuid};

use crate::http_client::{Method, Response, StatusCode};
use crate::model::task::{Task, TaskRequest};
use crate::task::TaskClient;
use crate::task::error::TaskClientError;
use crate::task::http_client::HTTPTaskClient;
use crate::task::http_client::dto::{
    CreateTaskRequestRestDTO, TaskListResponseRestDTO, TaskResponseRestDTO,
};

#[async_trait::async_trait]
impl TaskClient for HTTPTaskClient {
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskClientError> {
        let response = self
            .api_client
            .request(Method::Get, &["v3", "tasks"])
            .map_err(TaskClientError::request("Error requesting tasks"))?
            .send()
            .await
            .map_err(TaskClientError::request("Error requesting tasks"))?;

        TaskClientError::expect_status("Error requesting tasks", StatusCode::OK, response.status)?;

        parse_task_list(response, "Error reading tasks")
    }

    async fn create_task(&self, request: TaskRequest) -> Result<Task, TaskClientError> {
        let droplet_guid = request.droplet_guid.clone();

        self.api_client
            .request(Method::Post, &["v3", "apps", droplet_guid.as_str(), "tasks"])
            .map_err(TaskClientError::request("Error creating task"))?
            .json(CreateTaskRequestRestDTO::from(request))
            .map_err(TaskClientError::request("Error during encoding task request"))?
            .send()
            .await
            .map_err(TaskClientError::request("Error creating task"))?
            .json::<TaskResponseRestDTO>()
            .map_err(TaskClientError::decode("Error unmarshaling task"))
            .map(Task::from)
    }

    async fn task_by_guid(&self, guid: &TaskGuid) -> Result<Task, TaskClientError> {
        self.api_client
            .request(Method::Get, &["v3", "tasks", guid.as_str()])
            .map_err(TaskClientError::request("Error requesting task"))?
            .send()
            .await
            .map_err(TaskClientError::request("Error requesting task"))?
            .json::<TaskResponseRestDTO>()
            .map_err(TaskClientError::decode("Error unmarshaling task"))
            .map(Task::from)
    }

    async fn tasks_by_app(&self, guid: &AppGuid) -> Result<Vec<Task>, TaskClientError> {
        let response = self
            .api_client
            .request(Method::Get, &["v3", "apps", guid.as_str(), "tasks"])
            .map_err(TaskClientError::request("Error requesting app tasks"))?
            .send()
            .await
            .map_err(TaskClientError::request("Error requesting app tasks"))?;

        parse_task_list(response, "Error parsing tasks")
    }

    async fn terminate_task(&self, guid: &TaskGuid) -> Result<(), TaskClientError> {
        let response = self
            .api_client
            .request(Method::Put, &["v3", "tasks", guid.as_str(), "cancel"])
            .map_err(TaskClientError::request("Error terminating task"))?
            .send()
            .await
            .map_err(TaskClientError::request("Error terminating task"))?;

        TaskClientError::expect_status(
            "Failed terminating task",
            StatusCode::ACCEPTED,
            response.status,
        )
    }
}

// Only the returned page is decoded, `pagination.next` is never followed
fn parse_task_list(
    response: Response,
    context: &'static str,
) -> Result<Vec<Task>, TaskClientError> {
    let list = response
        .json::<TaskListResponseRestDTO>()
        .map_err(TaskClientError::decode(context))?;

    if let Some(next) = &list.pagination.next {
        tracing::debug!(
            total_results = list.pagination.total_results,
            %next,
            "Task list has more pages"
        );
    }

    Ok(list.tasks.into_iter().map(Task::from).collect())
}
