//! Get object command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use cmis_core::{Options, ReturnVersion};

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Object id
    pub id: Option<String>,

    /// Object path, e.g. /Sites/demo (alternative to id)
    #[arg(long, conflicts_with = "id")]
    pub path: Option<String>,

    /// Version to return: this, latest or latestmajor
    #[arg(long)]
    pub version: Option<ReturnVersion>,

    /// Comma-separated property filter
    #[arg(long)]
    pub filter: Option<String>,
}

pub async fn run(args: GetArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    let mut options = Options::new();
    if let Some(filter) = args.filter {
        options = options.filter(filter);
    }

    let object = match (&args.id, &args.path) {
        (Some(id), _) => session.get_object(id, args.version, &options).await,
        (None, Some(path)) => session.get_object_by_path(path, &options).await,
        (None, None) => bail!("Either an object id or --path is required"),
    }
    .context("Failed to get object")?;

    output::json_pretty(&object)
}
