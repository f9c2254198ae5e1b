//! The post feed controller.
//!
//! A controller is mounted once per page onto its container element. It
//! owns the loaded collection and re-renders filtered views of it on search.
//! Failures to obtain the collection never escape: the container shows the
//! empty-state placeholder and searches fall back to the site search page.

use crate::config::FeedConfig;
use crate::container::{FeedContainer, Node};
use crate::error::Result;
use crate::links::{self, Navigation};
use crate::page::PageContext;
use crate::post::Post;
use crate::render::{FeedRenderer, RenderContext};
use crate::source::PostSource;
use std::sync::Arc;

const HOME_PREVIEW_CLASS: &str = "home-preview";
const DEFAULT_LISTING_HREF: &str = "story.html";

#[derive(Clone, Debug)]
pub enum FeedState {
    Unloaded,
    Loaded(Arc<[Post]>),
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query; focus went back to the input.
    Refocus,
    /// The container now shows the matching posts.
    Filtered { matches: usize },
    /// No collection in the page; go to the site search page instead.
    Redirect(String),
    /// No collection and no search page to redirect to; submit the form natively.
    Submit,
}

/// Case-insensitive substring search over title, excerpt, date and tags.
pub fn filter<'p>(posts: &'p [Post], query: &str) -> Vec<&'p Post> {
    let query = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| post.haystack().contains(query.as_str()))
        .collect()
}

pub struct FeedController<'a> {
    config: FeedConfig,
    page: PageContext,
    container: FeedContainer,
    renderer: FeedRenderer<'a>,
    state: FeedState,
}

impl<'a> FeedController<'a> {
    /// Loads the collection and mounts the controller on `container`.
    /// Pages without a container get no controller.
    pub async fn init(
        config: &FeedConfig,
        page: PageContext,
        source: &PostSource,
        container: Option<FeedContainer>,
    ) -> Result<Option<FeedController<'a>>> {
        let container = match container {
            Some(container) => container,
            None => {
                log::debug!("no #{} on {}, feed inactive", config.container_id, page.path);
                return Ok(None);
            }
        };

        let posts = load_or_warn(source).await;
        FeedController::mount(config, page, container, posts).map(Some)
    }

    /// Mounts onto `container` with an already-loaded collection; `None`
    /// means loading failed.
    pub fn mount(
        config: &FeedConfig,
        page: PageContext,
        container: FeedContainer,
        posts: Option<Arc<[Post]>>,
    ) -> Result<FeedController<'a>> {
        let mut controller = FeedController {
            config: config.clone(),
            page,
            container,
            renderer: FeedRenderer::new()?,
            state: FeedState::Unloaded,
        };

        match posts {
            Some(posts) => controller.show(posts)?,
            None => controller.fail(),
        }

        Ok(controller)
    }

    fn show(&mut self, posts: Arc<[Post]>) -> Result<()> {
        self.state = FeedState::Loaded(Arc::clone(&posts));

        if self.page.is_home() {
            self.container.add_class(HOME_PREVIEW_CLASS);
            let limit = self.config.home_limit;
            let visible: Vec<&Post> = posts.iter().take(limit).collect();
            log::debug!(
                "#{}: home preview of {} / {} posts",
                self.container.id(),
                visible.len(),
                posts.len()
            );
            self.render(&visible, &RenderContext::home(posts.len(), limit))
        } else {
            self.container.remove_class(HOME_PREVIEW_CLASS);
            let visible: Vec<&Post> = posts.iter().collect();
            self.render(&visible, &RenderContext::listing(posts.len()))
        }
    }

    fn fail(&mut self) {
        self.state = FeedState::Failed;
        self.container.clear();
        self.container.append(Node::Placeholder);
    }

    /// Replaces the container's contents with one card per post.
    pub fn render(&mut self, posts: &[&Post], context: &RenderContext) -> Result<()> {
        self.container.clear();

        if posts.is_empty() {
            self.container.append(Node::Placeholder);
            return Ok(());
        }

        for post in posts {
            let html = self.renderer.card(post, context.is_home)?;
            self.container.append(Node::Card(html));
        }

        if context.wants_view_more() {
            let href = self.config.view_more_href.clone();
            let html = self.renderer.view_more(&href)?;
            self.container.append(Node::ViewMore { href, html });
        }

        Ok(())
    }

    pub fn search(&mut self, query: &str) -> Result<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            self.container.focus_search_input();
            return Ok(SearchOutcome::Refocus);
        }

        let posts = match &self.state {
            FeedState::Loaded(posts) if !posts.is_empty() => Arc::clone(posts),
            _ => return Ok(self.search_elsewhere(query)),
        };

        let matches = filter(&posts, query);
        log::debug!("search {:?}: {} of {} posts", query, matches.len(), posts.len());
        self.render(&matches, &RenderContext::listing(matches.len()))?;
        self.container.scroll_into_view();

        Ok(SearchOutcome::Filtered {
            matches: matches.len(),
        })
    }

    fn search_elsewhere(&self, query: &str) -> SearchOutcome {
        let endpoint = self.config.search_endpoint.as_str();
        if endpoint.contains("search.html") {
            SearchOutcome::Redirect(format!("{}?q={}", endpoint, urlencoding::encode(query)))
        } else {
            SearchOutcome::Submit
        }
    }

    /// The view-more card never follows its link; it redirects explicitly.
    pub fn activate_view_more(&self) -> Option<Navigation> {
        self.container.view_more_href().map(|href| {
            let href = if href.is_empty() {
                DEFAULT_LISTING_HREF
            } else {
                href
            };
            Navigation::Redirect(href.to_string())
        })
    }

    /// Delegated handling of a click on an anchor inside the container.
    pub fn click(&self, href: &str) -> Navigation {
        match self.container.view_more_href() {
            Some(more) if more == href => self
                .activate_view_more()
                .unwrap_or(Navigation::Follow),
            _ => links::classify(href),
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn posts(&self) -> Option<&[Post]> {
        match &self.state {
            FeedState::Loaded(posts) => Some(&posts[..]),
            _ => None,
        }
    }

    pub fn container(&self) -> &FeedContainer {
        &self.container
    }
}

/// Loads the collection, logging and swallowing any failure.
pub async fn load_or_warn(source: &PostSource) -> Option<Arc<[Post]>> {
    match source.load().await {
        Ok(posts) => {
            log::info!("loaded {} posts from {:?}", posts.len(), source);
            Some(posts.into())
        }
        Err(e) if e.is_feed_failure() => {
            log::warn!("Could not load posts.json: {}", e);
            None
        }
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}
