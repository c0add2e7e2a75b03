//! Repository listing.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct ReposArgs {
    /// Print the full service document
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ReposArgs, repository: Option<&str>) -> Result<()> {
    let session = profile::connect(repository).await?;

    if args.json {
        return output::json_pretty(session.repositories());
    }

    let default = session.default_repository().map(|r| r.repository_id.as_str());
    for (id, info) in session.repositories() {
        let marker = if Some(id.as_str()) == default {
            "*".green()
        } else {
            " ".normal()
        };
        let name = info["repositoryName"].as_str().unwrap_or_default();
        println!("{} {}  {}", marker, id, name.dimmed());
    }

    Ok(())
}
