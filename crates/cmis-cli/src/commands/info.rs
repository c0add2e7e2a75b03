//! Repository info command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct InfoArgs {}

pub async fn run(_args: InfoArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    let info = session
        .get_repository_info()
        .await
        .context("Failed to get repository info")?;

    output::json_pretty(&info)
}
