//! Subcommand implementations.

pub mod changes;
pub mod download;
pub mod get;
pub mod info;
pub mod login;
pub mod logout;
pub mod ls;
pub mod mkdir;
pub mod query;
pub mod repos;
pub mod rm;
pub mod upload;

use anyhow::Result;

use crate::cli::Commands;

pub async fn handle(command: Commands, repository: Option<String>) -> Result<()> {
    let repository = repository.as_deref();
    match command {
        Commands::Login(args) => login::run(args, repository).await,
        Commands::Logout(args) => logout::run(args),
        Commands::Repos(args) => repos::run(args, repository).await,
        Commands::Info(args) => info::run(args, repository).await,
        Commands::Get(args) => get::run(args, repository).await,
        Commands::Ls(args) => ls::run(args, repository).await,
        Commands::Query(args) => query::run(args, repository).await,
        Commands::Mkdir(args) => mkdir::run(args, repository).await,
        Commands::Upload(args) => upload::run(args, repository).await,
        Commands::Download(args) => download::run(args, repository).await,
        Commands::Rm(args) => rm::run(args, repository).await,
        Commands::Changes(args) => changes::run(args, repository).await,
    }
}
