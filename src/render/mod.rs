mod escape;

pub use self::escape::escape_html;

use crate::error::{Error, Result};
use crate::post::Post;
use handlebars::Handlebars;
use serde::Serialize;

const CARD_TEMPLATE: &str = r#"<article class="post-card{{#if stacked}} post-card--stacked{{/if}}">{{#if image}}
  <div class="post-thumb">
    <img src="{{image}}" alt="{{alt}}" loading="lazy" />
  </div>{{/if}}
  <div class="post-card-body">
    <h3 class="post-title"><a href="{{url}}">{{title}}</a></h3>
    <p class="muted post-date">{{date}}</p>
    <p class="post-excerpt">{{excerpt}}</p>
  </div>
</article>"#;

const VIEW_MORE_TEMPLATE: &str = r#"<div class="post-card view-more-card view-more">
  <a href="{{href}}" class="view-more-link" style="display:inline-block;">
    View more stories
  </a>
</div>"#;

pub const PLACEHOLDER_HTML: &str = r#"<p class="muted">No posts found.</p>"#;

/// How a list of posts is being shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderContext {
    pub is_home: bool,
    pub all_count: usize,
    pub home_limit: usize,
}

impl RenderContext {
    pub fn home(all_count: usize, home_limit: usize) -> Self {
        Self {
            is_home: true,
            all_count,
            home_limit,
        }
    }

    pub fn listing(all_count: usize) -> Self {
        Self {
            is_home: false,
            all_count,
            home_limit: 0,
        }
    }

    pub fn wants_view_more(&self) -> bool {
        self.is_home && self.all_count > self.home_limit
    }
}

#[derive(Serialize)]
struct CardData<'p> {
    title: &'p str,
    alt: &'p str,
    url: &'p str,
    date: &'p str,
    excerpt: &'p str,
    image: Option<&'p str>,
    stacked: bool,
}

impl<'p> CardData<'p> {
    fn new(post: &'p Post, stacked: bool) -> Self {
        Self {
            title: post.title.as_deref().unwrap_or("Untitled"),
            alt: post.title.as_deref().unwrap_or_default(),
            url: post.url.as_deref().unwrap_or("#"),
            date: post.date.as_deref().unwrap_or_default(),
            excerpt: post.excerpt.as_deref().unwrap_or_default(),
            image: post.image.as_deref(),
            stacked,
        }
    }
}

#[derive(Serialize)]
struct ViewMoreData<'h> {
    href: &'h str,
}

pub struct FeedRenderer<'a> {
    registry: Handlebars<'a>,
}

impl<'a> FeedRenderer<'a> {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(escape_html);
        registry
            .register_template_string("card", CARD_TEMPLATE)
            .map_err(Error::Template)?;
        registry
            .register_template_string("view-more", VIEW_MORE_TEMPLATE)
            .map_err(Error::Template)?;

        Ok(Self { registry })
    }

    pub fn card(&self, post: &Post, stacked: bool) -> Result<String> {
        self.registry
            .render("card", &CardData::new(post, stacked))
            .map_err(Error::Render)
    }

    pub fn view_more(&self, href: &str) -> Result<String> {
        self.registry
            .render("view-more", &ViewMoreData { href })
            .map_err(Error::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> FeedRenderer<'static> {
        FeedRenderer::new().unwrap()
    }

    #[test]
    fn full_card() {
        let post = Post {
            title: Some("Night Train".to_string()),
            excerpt: Some("A long ride.".to_string()),
            date: Some("2024-01-02".to_string()),
            url: Some("/posts/night-train.html".to_string()),
            image: Some("img/train.jpg".to_string()),
            tags: Some("travel".to_string()),
        };

        let html = renderer().card(&post, false).unwrap();

        assert!(html.starts_with(r#"<article class="post-card">"#));
        assert!(html.contains(
            r#"<img src="img/train.jpg" alt="Night Train" loading="lazy" />"#
        ));
        assert!(html.contains(r#"<a href="/posts/night-train.html">Night Train</a>"#));
        assert!(html.contains(r#"<p class="muted post-date">2024-01-02</p>"#));
        assert!(html.contains(r#"<p class="post-excerpt">A long ride.</p>"#));
        assert!(!html.contains("travel"));
    }

    #[test]
    fn title_only_card_uses_defaults() {
        let html = renderer().card(&Post::titled("Dog"), false).unwrap();

        assert!(!html.contains("post-thumb"));
        assert!(html.contains(r##"<a href="#">Dog</a>"##));
        assert!(html.contains(r#"<p class="muted post-date"></p>"#));
        assert!(html.contains(r#"<p class="post-excerpt"></p>"#));
    }

    #[test]
    fn untitled_card() {
        let post = Post {
            image: Some("a.png".to_string()),
            ..Default::default()
        };
        let html = renderer().card(&post, false).unwrap();

        assert!(html.contains(r##"<a href="#">Untitled</a>"##));
        assert!(html.contains(r#"alt="""#));
    }

    #[test]
    fn stacked_card_carries_modifier() {
        let html = renderer().card(&Post::titled("A"), true).unwrap();
        assert!(html.starts_with(r#"<article class="post-card post-card--stacked">"#));
    }

    #[test]
    fn fields_are_escaped_once() {
        let post = Post {
            title: Some(r#"<b>"Tom" & 'Jerry'</b>"#.to_string()),
            excerpt: Some("1 < 2 > 0".to_string()),
            date: Some("&amp;".to_string()),
            url: Some(r#"x" onclick="y"#.to_string()),
            image: Some("a'b.png".to_string()),
            tags: None,
        };

        let html = renderer().card(&post, false).unwrap();

        assert!(html.contains(
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        ));
        assert!(html.contains("1 &lt; 2 &gt; 0"));
        assert!(html.contains("&amp;amp;"));
        assert!(html.contains(r#"href="x&quot; onclick=&quot;y""#));
        assert!(html.contains(r#"src="a&#39;b.png""#));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("'Jerry'"));
    }

    #[test]
    fn view_more_card() {
        let html = renderer().view_more("story.html").unwrap();
        assert!(html.contains(r#"class="post-card view-more-card view-more""#));
        assert!(html.contains(r#"<a href="story.html" class="view-more-link""#));
        assert!(html.contains("View more stories"));
    }

    #[test]
    fn view_more_only_on_home_above_limit() {
        assert!(RenderContext::home(9, 8).wants_view_more());
        assert!(!RenderContext::home(8, 8).wants_view_more());
        assert!(!RenderContext::listing(100).wants_view_more());
    }
}
