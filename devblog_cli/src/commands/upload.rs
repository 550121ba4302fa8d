//! The `upload` subcommand: pushes a file to the backend media store.

use anyhow::{bail, Result};
use clap::Args;
use devblog_lib::devblog_api::multipart;
use devblog_lib::CachedClient;
use std::path::PathBuf;

#[derive(Args)]
pub struct UploadArgs {
    /// File to upload
    pub file: PathBuf,
}

pub async fn run(args: &UploadArgs, client: &CachedClient) -> Result<()> {
    let Some(file_name) = args.file.file_name().and_then(|n| n.to_str()) else {
        bail!("'{}' has no usable file name", args.file.display());
    };
    let bytes = tokio::fs::read(&args.file).await?;

    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(bytes).file_name(file_name.to_string()),
    );
    let resp = client.api().upload(form).await?;

    println!("{}", resp.url);
    Ok(())
}
