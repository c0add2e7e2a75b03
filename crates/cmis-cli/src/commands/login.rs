//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::profile::{Profile, storage};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Browser binding service URL
    #[arg(long, env = "CMIS_URL")]
    pub url: String,

    /// Username for HTTP Basic authentication
    #[arg(long, env = "CMIS_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP Basic authentication
    #[arg(long, env = "CMIS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Bearer token, used when no username and password are given
    #[arg(long, env = "CMIS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Charset sent with uploads
    #[arg(long)]
    pub charset: Option<String>,
}

pub async fn run(args: LoginArgs, repository: Option<&str>) -> Result<()> {
    let profile = Profile {
        url: args.url,
        username: args.username,
        password: args.password,
        token: args.token,
        repository: repository.map(str::to_string),
        charset: args.charset,
    };

    eprintln!("{}", "Connecting...".dimmed());

    let session = profile.connect(None).await.context("Failed to login")?;
    let path = storage::save_profile(&profile).context("Failed to save profile")?;

    output::success("Logged in successfully");
    println!();
    output::field("URL", session.url().as_str());
    if let Some(default) = session.default_repository() {
        output::field("Repository", &default.repository_id);
        if let Some(name) = &default.repository_name {
            output::field("Name", name);
        }
    }
    output::field("Profile", &path.display().to_string());

    Ok(())
}
