use cf_client::model::task::{Task, TaskRequest};
use cf_client::task::TaskClient;
use clap::Subcommand;
use shared_types::{AppGuid, DropletGuid, TaskGuid};

use crate::dto::TaskOutputDTO;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all tasks visible to the current user
    List,
    /// List the tasks of one app
    App { app_guid: AppGuid },
    /// Show a single task
    Get { task_guid: TaskGuid },
    /// Run a one-off command against a droplet
    Create {
        #[arg(long, value_name = "DROPLET_GUID")]
        droplet: DropletGuid,
        #[arg(long)]
        command: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        memory_in_mb: Option<u64>,
        #[arg(long)]
        disk_in_mb: Option<u64>,
    },
    /// Request cancellation of a running task
    Cancel { task_guid: TaskGuid },
}

/// Runs `command`, returns the JSON to print if the command produces any
pub async fn execute(
    command: Command,
    task_client: &dyn TaskClient,
) -> anyhow::Result<Option<String>> {
    let output = match command {
        Command::List => tasks_to_json(task_client.list_tasks().await?)?,
        Command::App { app_guid } => tasks_to_json(task_client.tasks_by_app(&app_guid).await?)?,
        Command::Get { task_guid } => task_to_json(task_client.task_by_guid(&task_guid).await?)?,
        Command::Create {
            droplet,
            command,
            name,
            memory_in_mb,
            disk_in_mb,
        } => {
            let request = TaskRequest {
                command,
                name,
                memory_in_mb,
                disk_in_mb,
                droplet_guid: droplet,
            };
            let task = task_client.create_task(request).await?;
            tracing::info!(guid = %task.guid, state = %task.state, "Task created");

            task_to_json(task)?
        }
        Command::Cancel { task_guid } => {
            task_client.terminate_task(&task_guid).await?;
            tracing::info!(guid = %task_guid, "Task cancellation requested");

            return Ok(None);
        }
    };

    Ok(Some(output))
}

fn task_to_json(task: Task) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TaskOutputDTO::from(task))
}

fn tasks_to_json(tasks: Vec<Task>) -> serde_json::Result<String> {
    let tasks: Vec<TaskOutputDTO> = tasks.into_iter().map(TaskOutputDTO::from).collect();
    serde_json::to_string_pretty(&tasks)
}
