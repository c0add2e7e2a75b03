//! Change log command implementation.

use anyhow::{Context, Result};
use clap::Args;
use cmis_core::Options;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct ChangesArgs {
    /// Change log token to resume from
    #[arg(long)]
    pub token: Option<String>,

    /// Maximum number of changes
    #[arg(long)]
    pub max_items: Option<u32>,

    /// Include changed properties
    #[arg(long)]
    pub properties: bool,
}

pub async fn run(args: ChangesArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    let mut options = Options::new();
    if let Some(max_items) = args.max_items {
        options = options.max_items(max_items);
    }

    let changes = session
        .get_content_changes(args.token.as_deref(), args.properties, false, false, &options)
        .await
        .context("Failed to get content changes")?;

    output::json_pretty(&changes)
}
