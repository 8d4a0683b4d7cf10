use std::path::PathBuf;

use anyhow::Context;
use cf_client::api_client::ApiClient;
use cf_client::config::AppConfig;
use cf_client::task::http_client::HTTPTaskClient;
use clap::Parser;

use cf_tasks::TasksAppConfig;
use cf_tasks::command::{self, Command};
use cf_tasks::init::initialize_tracing;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<TasksAppConfig> =
        AppConfig::from_files(&config_files).context("Failed creating config")?;

    initialize_tracing(&app_config.app).context("Failed initializing tracing")?;

    let api_client =
        ApiClient::from_config(&app_config.client).context("Failed creating API client")?;
    tracing::debug!(api_url = %api_client.base_url(), "Using Cloud Controller");
    let task_client = HTTPTaskClient::new(api_client);

    let output = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(command::execute(cli.command, &task_client))
        .inspect_err(|error| tracing::error!("{error:#}"))?;

    if let Some(output) = output {
        println!("{output}");
    }

    Ok(())
}
