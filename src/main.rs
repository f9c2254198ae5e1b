mod args;
mod cmd;
mod config;
mod container;
mod error;
mod feed;
mod links;
mod page;
mod post;
mod render;
mod source;

use crate::args::{Args, Command};
use crate::config::Config;
use crate::error::Result;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::load_or_default(&args.config)?;
    log::debug!("{:?}", args);
    log::debug!("{:?}", config);

    match args.command {
        Command::Render { page } => cmd::render(&config, page.as_str()).await,
        Command::Search { query, page } => cmd::search(&config, query.as_str(), page.as_str()).await,
        Command::Click { href, page } => cmd::click(&config, href.as_str(), page.as_str()).await,
        Command::Build => cmd::build(&config).await,
        Command::Clean => cmd::clean(&config).await,
    }
}
