use serde::Deserialize;

pub mod command;
pub mod dto;
pub mod init;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TasksAppConfig {
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}
