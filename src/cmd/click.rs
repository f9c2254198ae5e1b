use crate::config::Config;
use crate::container::FeedContainer;
use crate::error::Result;
use crate::feed::FeedController;
use crate::links::Navigation;
use crate::page::PageContext;
use crate::source::PostSource;

/// Reports what clicking `href` inside the feed on `page` does.
pub async fn click(config: &Config, href: &str, page: &str) -> Result<()> {
    let page = PageContext::from_path(page);
    let source = PostSource::new(config.feed.data.as_str());
    let container = FeedContainer::new(config.feed.container_id.as_str());

    if let Some(feed) = FeedController::init(&config.feed, page, &source, Some(container)).await? {
        match feed.click(href) {
            Navigation::Follow => println!("follow: {}", href),
            Navigation::Redirect(to) => println!("redirect: {}", to),
        }
    }

    Ok(())
}
