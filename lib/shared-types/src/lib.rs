mod app_guid;
mod droplet_guid;
mod macros;
mod task_guid;

pub use app_guid::AppGuid;
pub use droplet_guid::DropletGuid;
pub use task_guid::TaskGuid;
