//! Folder listing command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use cmis_core::Options;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Folder id
    pub folder_id: Option<String>,

    /// Folder path (alternative to id)
    #[arg(long, conflicts_with = "folder_id")]
    pub path: Option<String>,

    /// Maximum number of children to return
    #[arg(long)]
    pub max_items: Option<u32>,

    /// Number of children to skip
    #[arg(long)]
    pub skip_count: Option<u32>,

    /// Sort order, e.g. "cmis:name ASC"
    #[arg(long)]
    pub order_by: Option<String>,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: LsArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    let folder_id = match (args.folder_id, &args.path) {
        (Some(id), _) => id,
        (None, Some(path)) => {
            let folder = session
                .get_object_by_path(path, &Options::new())
                .await
                .context("Failed to resolve folder path")?;
            output::property_str(&folder, "cmis:objectId")
        }
        (None, None) => bail!("Either a folder id or --path is required"),
    };

    let mut options = Options::new();
    if let Some(max_items) = args.max_items {
        options = options.max_items(max_items);
    }
    if let Some(skip_count) = args.skip_count {
        options = options.skip_count(skip_count);
    }
    if let Some(order_by) = args.order_by {
        options = options.order_by(order_by);
    }

    let children = session
        .get_children(&folder_id, &options)
        .await
        .context("Failed to list children")?;

    if args.json {
        return output::json_pretty(&children);
    }

    let objects = children["objects"].as_array().map(Vec::as_slice).unwrap_or_default();
    if objects.is_empty() {
        eprintln!("{}", "Folder is empty.".dimmed());
        return Ok(());
    }

    for object in objects {
        output::object_line(object);
    }

    if children["hasMoreItems"].as_bool() == Some(true) {
        eprintln!("{}", "More items available; use --skip-count to page.".dimmed());
    }

    Ok(())
}
