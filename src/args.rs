use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about, version)]
pub struct Args {
    /// Configuration file; defaults apply when it doesn't exist
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the feed as rendered on PAGE
    Render {
        #[arg(default_value = "/")]
        page: String,
    },
    /// Search the feed on PAGE for QUERY
    Search {
        query: String,
        #[arg(short, long, default_value = "/story.html")]
        page: String,
    },
    /// Show what clicking HREF inside the feed on PAGE does
    Click {
        href: String,
        #[arg(short, long, default_value = "/")]
        page: String,
    },
    /// Pre-render the feed into every page
    Build,
    /// Remove the build output
    Clean,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_search_with_defaults() {
        let args = Args::try_parse_from(["sitefeed", "search", "night train"]).unwrap();

        assert_eq!(args.config, PathBuf::from("config.toml"));
        match args.command {
            Command::Search { query, page } => {
                assert_eq!(query, "night train");
                assert_eq!(page, "/story.html");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_click() {
        let args = Args::try_parse_from(["sitefeed", "click", "story.html", "-p", "/index.html"])
            .unwrap();

        match args.command {
            Command::Click { href, page } => {
                assert_eq!(href, "story.html");
                assert_eq!(page, "/index.html");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_render_page() {
        let args =
            Args::try_parse_from(["sitefeed", "-c", "site.toml", "render", "/index.html"]).unwrap();

        assert_eq!(args.config, PathBuf::from("site.toml"));
        assert!(matches!(args.command, Command::Render { page } if page == "/index.html"));
    }
}
