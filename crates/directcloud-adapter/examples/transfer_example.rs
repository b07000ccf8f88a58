/*
[INPUT]:  DIRECTCLOUD_TOKEN, target node and local file path
[OUTPUT]: Uploaded file, share link and downloaded copy
[POS]:    Examples - upload/download round trip with a pre-issued token
[UPDATE]: When upload, download or link endpoints change
*/

use anyhow::{Context, Result, anyhow, bail};
use directcloud_adapter::{
    DirectCloudClient, InMemoryTokenProvider, LinkOptions, UploadSource,
};
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let token = std::env::var("DIRECTCLOUD_TOKEN").context("DIRECTCLOUD_TOKEN must be set")?;
    let mut args = std::env::args().skip(1);
    let (Some(node), Some(local_path)) = (args.next(), args.next()) else {
        bail!("usage: transfer_example <node> <local-file>");
    };

    let client = DirectCloudClient::new(InMemoryTokenProvider::new(token))
        .context("create client")?;

    let source = UploadSource::from_path(&local_path)
        .await
        .with_context(|| format!("read {local_path}"))?;
    let uploaded = client.upload(&node, source, None).await.context("upload")?;
    info!(response = %serde_json::Value::Object(uploaded.clone()), "upload finished");

    let file_seq = uploaded
        .get("file_seq")
        .and_then(|value| value.as_u64().or_else(|| value.as_str()?.parse().ok()))
        .ok_or_else(|| anyhow!("upload response has no file_seq"))?;

    let link = client
        .create_file_link(&node, file_seq, &LinkOptions::default())
        .await
        .context("create link")?;
    info!(url = link.url.as_deref().unwrap_or("-"), "share link created");

    let copy_path = format!("{local_path}.download");
    let mut output = tokio::fs::File::create(&copy_path)
        .await
        .with_context(|| format!("create {copy_path}"))?;
    let mut stream = client.download_stream(file_seq).await.context("download")?;
    while let Some(chunk) = stream.next().await {
        output.write_all(&chunk?).await.context("write chunk")?;
    }
    output.flush().await?;
    info!(path = %copy_path, "download finished");

    Ok(())
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
