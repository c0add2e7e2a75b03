//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    changes, download, get, info, login, logout, ls, mkdir, query, repos, rm, upload,
};

/// CMIS browser binding CLI.
#[derive(Parser, Debug)]
#[command(name = "cmis")]
#[command(author, version = env!("CMIS_VERSION"), about, long_about = None)]
#[command(long_version = concat!(
    env!("CMIS_VERSION"),
    "\ncommit: ",
    env!("CMIS_COMMIT"),
    "\nprotocol: CMIS 1.1 browser binding\ntarget: ",
    env!("CMIS_TARGET"),
))]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Repository to use instead of the profile's (or the server's first)
    #[arg(long, global = true)]
    pub repository: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to a repository and save the profile
    Login(login::LoginArgs),

    /// Forget the saved profile
    Logout(logout::LogoutArgs),

    /// List the repositories exposed by the service
    Repos(repos::ReposArgs),

    /// Show repository information
    Info(info::InfoArgs),

    /// Fetch an object by id or path
    Get(get::GetArgs),

    /// List the children of a folder
    Ls(ls::LsArgs),

    /// Run a CMIS query
    Query(query::QueryArgs),

    /// Create a folder
    Mkdir(mkdir::MkdirArgs),

    /// Upload a local file as a new document
    Upload(upload::UploadArgs),

    /// Download a document's content
    Download(download::DownloadArgs),

    /// Delete an object or a folder tree
    Rm(rm::RmArgs),

    /// Show the repository change log
    Changes(changes::ChangesArgs),
}
