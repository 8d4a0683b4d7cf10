//! Client for the task resource of the Cloud Controller v3 API.
//!
//! ```ignore
//! let config: AppConfig<NoCustomConfig> = AppConfig::from_files(&["config.yml"])?;
//! let tasks = HTTPTaskClient::new(ApiClient::from_config(&config.client)?);
//! let task = tasks.create_task(TaskRequest::new("rake db:migrate", droplet_guid)).await?;
//! ```

pub mod api_client;
pub mod config;
pub mod http_client;
pub mod model;
pub mod task;
