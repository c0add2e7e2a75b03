//! Upload command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cmis_core::{
    CMIS_NAME, CMIS_OBJECT_TYPE_ID, Content, ObjectControls, Options, Properties, VersioningState,
};
use colored::Colorize;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Parent folder id
    pub parent_id: String,

    /// Local file to upload
    pub file: PathBuf,

    /// Document name (defaults to the file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Document type (defaults to cmis:document)
    #[arg(long = "type")]
    pub type_id: Option<String>,

    /// MIME type of the content
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Versioning state: none, major, minor or checkedout
    #[arg(long)]
    pub versioning_state: Option<VersioningState>,
}

pub async fn run(args: UploadArgs, repository: Option<&str>) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => args
            .file
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .context("Cannot derive a document name from the file path; use --name")?,
    };

    let bytes = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let size = bytes.len();

    let mut content = Content::new(bytes);
    if let Some(mime_type) = args.mime_type {
        content = content.with_mime_type(mime_type);
    }

    let mut properties = Properties::new().with(CMIS_NAME, name.as_str());
    if let Some(type_id) = args.type_id {
        properties.insert(CMIS_OBJECT_TYPE_ID, type_id);
    }

    let session = profile::connect(repository).await?;

    eprintln!("{}", format!("Uploading {} bytes...", size).dimmed());

    let document = session
        .create_document(
            &args.parent_id,
            content,
            properties,
            args.versioning_state,
            &ObjectControls::new(),
            &Options::new(),
        )
        .await
        .context("Failed to upload document")?;

    output::success(&format!("Uploaded {}", name));
    output::field("Id", &output::property_str(&document, "cmis:objectId"));

    Ok(())
}
