use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt;

use gitlab_cli::args::Args;
use gitlab_cli::commands::{self, Printer};
use gitlab_cli::{ClientConfig, GitlabService, HttpTransport};

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to install the log subscriber: {}", e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let url = args
        .url
        .ok_or_else(|| anyhow!("GitLab URL missing: pass --url or set GITLAB_URL."))?;
    let token = args
        .token
        .ok_or_else(|| anyhow!("Access token missing: pass --token or set GITLAB_TOKEN."))?;

    let config = ClientConfig::new(url, token).with_timeout(args.timeout.map(Duration::from_secs));
    tracing::debug!(
        url = %config.base_url,
        token = %config.masked_token(),
        page_size = config.page_size,
        "configuration"
    );

    let transport = HttpTransport::new(&config)
        .map_err(|e| anyhow!("Failed to create the GitLab client: {}", e))?;
    let service = GitlabService::with_config(transport, &config);
    let printer = Printer { json: args.json };

    commands::run(&service, args.command, &printer).await
}
