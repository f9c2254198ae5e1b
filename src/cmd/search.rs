use crate::config::Config;
use crate::container::FeedContainer;
use crate::error::Result;
use crate::feed::{FeedController, FeedState, SearchOutcome};
use crate::page::PageContext;
use crate::source::PostSource;

pub async fn search(config: &Config, query: &str, page: &str) -> Result<()> {
    let page = PageContext::from_path(page);
    let source = PostSource::new(config.feed.data.as_str());
    let container = FeedContainer::new(config.feed.container_id.as_str());

    let mut feed = match FeedController::init(&config.feed, page, &source, Some(container)).await? {
        Some(feed) => feed,
        None => return Ok(()),
    };

    if let FeedState::Failed = feed.state() {
        log::warn!("feed unavailable, searching via {}", config.feed.search_endpoint);
    }

    match feed.search(query)? {
        SearchOutcome::Refocus => log::warn!("empty query"),
        SearchOutcome::Filtered { matches } => {
            log::info!("{} matching posts", matches);
            println!("{}", feed.container().to_html());
        }
        SearchOutcome::Redirect(url) => println!("redirect: {}", url),
        SearchOutcome::Submit => println!("submit: {}", config.feed.search_endpoint),
    }

    Ok(())
}
