//! Folder creation command implementation.

use anyhow::{Context, Result};
use clap::Args;
use cmis_core::ObjectControls;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct MkdirArgs {
    /// Parent folder id
    pub parent_id: String,

    /// Name of the new folder
    pub name: String,

    /// Folder type (defaults to cmis:folder)
    #[arg(long = "type")]
    pub type_id: Option<String>,
}

pub async fn run(args: MkdirArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    let folder = session
        .create_folder(
            &args.parent_id,
            &args.name,
            args.type_id.as_deref(),
            &ObjectControls::new(),
        )
        .await
        .context("Failed to create folder")?;

    output::success(&format!("Created folder {}", args.name));
    output::field("Id", &output::property_str(&folder, "cmis:objectId"));

    Ok(())
}
