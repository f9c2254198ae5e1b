use crate::config::Config;
use crate::container::FeedContainer;
use crate::error::Result;
use crate::feed::FeedController;
use crate::links::Navigation;
use crate::page::PageContext;
use crate::source::PostSource;

pub async fn render(config: &Config, page: &str) -> Result<()> {
    let page = PageContext::from_path(page);
    let source = PostSource::new(config.feed.data.as_str());
    let container = FeedContainer::new(config.feed.container_id.as_str());

    if let Some(feed) = FeedController::init(&config.feed, page, &source, Some(container)).await? {
        log::debug!(
            "{} of {} posts shown",
            feed.container().card_count(),
            feed.posts().map_or(0, |posts| posts.len())
        );
        if let Some(Navigation::Redirect(href)) = feed.activate_view_more() {
            log::info!("view more -> {}", href);
        }
        println!("{}", feed.container().to_html());
    }

    Ok(())
}
