//! Query command implementation.

use anyhow::{Context, Result};
use clap::Args;
use cmis_core::Options;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// CMIS query statement, e.g. "SELECT * FROM cmis:document"
    pub statement: String,

    /// Maximum number of results
    #[arg(long)]
    pub max_items: Option<u32>,

    /// Number of results to skip
    #[arg(long)]
    pub skip_count: Option<u32>,

    /// Search every version, not only the latest
    #[arg(long)]
    pub all_versions: bool,
}

pub async fn run(args: QueryArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    let mut options = Options::new();
    if let Some(max_items) = args.max_items {
        options = options.max_items(max_items);
    }
    if let Some(skip_count) = args.skip_count {
        options = options.skip_count(skip_count);
    }

    let results = session
        .query(&args.statement, args.all_versions, &options)
        .await
        .context("Query failed")?;

    output::json_pretty(&results)
}
