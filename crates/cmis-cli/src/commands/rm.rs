//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;
use cmis_core::UnfileObjects;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct RmArgs {
    /// Object id
    pub id: String,

    /// Delete every version of a document
    #[arg(long)]
    pub all_versions: bool,

    /// Delete a folder and everything below it
    #[arg(long)]
    pub tree: bool,

    /// With --tree: unfile, deletesinglefiled or delete
    #[arg(long, requires = "tree")]
    pub unfile: Option<UnfileObjects>,

    /// With --tree: keep going after a failure
    #[arg(long, requires = "tree")]
    pub continue_on_failure: bool,
}

pub async fn run(args: RmArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    if !args.tree {
        session
            .delete_object(&args.id, args.all_versions)
            .await
            .context("Failed to delete object")?;
        output::success(&format!("Deleted {}", args.id));
        return Ok(());
    }

    let failed = session
        .delete_tree(
            &args.id,
            args.all_versions,
            args.unfile,
            args.continue_on_failure,
        )
        .await
        .context("Failed to delete tree")?;

    let failed_ids = failed["ids"].as_array().map(Vec::len).unwrap_or_default();
    if failed_ids > 0 {
        output::warning(&format!("{} object(s) could not be deleted", failed_ids));
        return output::json_pretty(&failed);
    }

    output::success(&format!("Deleted tree {}", args.id));
    Ok(())
}
