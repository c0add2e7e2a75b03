//! Download command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cmis_core::Download;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Document id
    pub id: String,

    /// Output file (defaults to the server-provided file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rendition stream id
    #[arg(long)]
    pub stream_id: Option<String>,
}

pub async fn run(args: DownloadArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    let stream = session
        .get_content_stream(&args.id, Download::Attachment, args.stream_id.as_deref())
        .await
        .context("Failed to download content")?;

    let path = match args.output {
        Some(path) => path,
        None => PathBuf::from(local_name(stream.filename.as_deref(), &args.id)),
    };

    fs::write(&path, &stream.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output::success(&format!(
        "Saved {} bytes to {}",
        stream.bytes.len(),
        path.display()
    ));

    Ok(())
}

/// A file name safe to create in the working directory.
fn local_name(server_name: Option<&str>, id: &str) -> String {
    let candidate = server_name.unwrap_or(id);
    let base = candidate
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "." || base == ".." {
        id.replace(['/', '\\', ':', ';'], "_")
    } else {
        base.to_string()
    }
}
