/*
[INPUT]:  DIRECTCLOUD_SERVICE, DIRECTCLOUD_SERVICE_KEY, DIRECTCLOUD_ACCESS_KEY, optional node argument
[OUTPUT]: Folder and file names under the node
[POS]:    Examples - access-key authentication and folder listing
[UPDATE]: When listing or token acquisition changes
*/

use anyhow::{Context, Result, anyhow};
use directcloud_adapter::{AccessKeyTokenProvider, DirectCloudClient, ROOT_NODE};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let service = env_var("DIRECTCLOUD_SERVICE")?;
    let service_key = env_var("DIRECTCLOUD_SERVICE_KEY")?;
    let access_key = env_var("DIRECTCLOUD_ACCESS_KEY")?;
    let node = std::env::args().nth(1).unwrap_or_else(|| ROOT_NODE.to_string());

    let provider = AccessKeyTokenProvider::new(service, service_key, access_key)
        .context("create token provider")?;
    let client = DirectCloudClient::new(provider).context("create client")?;

    let listing = client.list(&node).await.context("list folder")?;
    info!(
        node = %node,
        folders = listing.folders.len(),
        files = listing.files.len(),
        "folder listed"
    );

    for folder in &listing.folders {
        println!(
            "[dir]  {} ({})",
            folder.name.as_deref().unwrap_or("?"),
            folder.node.as_deref().unwrap_or("?")
        );
    }
    for file in &listing.files {
        println!(
            "[file] {} (seq {})",
            file.name.as_deref().unwrap_or("?"),
            file.file_seq.map_or_else(|| "?".to_string(), |seq| seq.to_string())
        );
    }

    Ok(())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
