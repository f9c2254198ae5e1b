use crate::config::{Config, FeedConfig};
use crate::container::FeedContainer;
use crate::error::{Error, Result};
use crate::feed::{self, FeedController};
use crate::page::PageContext;
use crate::post::Post;
use crate::source::PostSource;
use glob::glob;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

const NEWSLETTER_MARKER: &str = r#"id="newsletter-form""#;

pub async fn build(config: &Config) -> Result<()> {
    fs::create_dir_all(config.build.out_dir.as_str())
        .await
        .map_err(Error::Io)?;

    let source = PostSource::new(config.feed.data.as_str());
    let posts = feed::load_or_warn(&source).await;

    let pages = glob(config.build.page_pattern.as_str()).map_err(Error::Pattern)?;
    for page in pages {
        let page = page.map_err(Error::Glob)?;
        let relative = page
            .strip_prefix(config.build.page_root.as_str())
            .unwrap_or(page.as_path());
        let url_path = format!("/{}", relative.to_string_lossy().replace('\\', "/"));
        let path = Path::new(config.build.out_dir.as_str()).join(relative);

        log::info!("render {:?} -> {:?}", page, path);

        let contents = fs::read_to_string(&page).await.map_err(Error::Io)?;
        let rendered = render_page(&config.feed, url_path.as_str(), contents, posts.clone())?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(Error::Io)?;
        }
        fs::write(&path, rendered).await.map_err(Error::Io)?;
    }

    log::info!("Build complete");

    Ok(())
}

/// Injects the feed into the page's container element. Pages without one
/// come back unchanged, apart from the story listing's newsletter box.
pub fn render_page(
    config: &FeedConfig,
    url_path: &str,
    contents: String,
    posts: Option<Arc<[Post]>>,
) -> Result<String> {
    let page = PageContext::from_path(url_path);
    let mut html = contents;

    if page.hides_newsletter() {
        html = html.replacen(
            NEWSLETTER_MARKER,
            &format!("{} hidden", NEWSLETTER_MARKER),
            1,
        );
    }

    let id = config.container_id.as_str();
    let (tag_start, tag_end) = match find_opening_tag(&html, id) {
        Some(bounds) => bounds,
        None => {
            log::debug!("{} has no #{}", url_path, id);
            return Ok(html);
        }
    };
    let close_start = match find_closing_tag(&html, tag_name(&html[tag_start..tag_end]), tag_end) {
        Some(at) => at,
        None => {
            log::warn!("{}: #{} is never closed, leaving the page as is", url_path, id);
            return Ok(html);
        }
    };

    let container = FeedContainer::new(id);
    let feed = FeedController::mount(config, page, container, posts)?;

    let mut tag = html[tag_start..tag_end].to_string();
    for class in feed.container().classes() {
        tag = with_class(&tag, class);
    }

    let mut out = String::with_capacity(html.len() + 1024);
    out.push_str(&html[..tag_start]);
    out.push_str(&tag);
    out.push('\n');
    out.push_str(&feed.container().to_html());
    out.push('\n');
    out.push_str(&html[close_start..]);

    Ok(out)
}

/// Offsets just past `name=` wherever `name` is a whole attribute name.
fn attr_values(html: &str, name: &str) -> Vec<usize> {
    let needle = format!("{}=", name);
    html.match_indices(needle.as_str())
        .filter(|(at, _)| html[..*at].ends_with(|c: char| c.is_ascii_whitespace()))
        .map(|(at, _)| at + needle.len())
        .collect()
}

fn quoted_value(s: &str) -> Option<&str> {
    let quote = s.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let len = s[1..].find(quote)?;
    Some(&s[1..1 + len])
}

/// Byte range of the opening tag whose `id` attribute is `id`, including `>`.
fn find_opening_tag(html: &str, id: &str) -> Option<(usize, usize)> {
    attr_values(html, "id").into_iter().find_map(|at| {
        if quoted_value(&html[at..])? != id {
            return None;
        }
        let start = html[..at].rfind('<')?;
        if html[start..at].contains('>') {
            return None;
        }
        let end = at + html[at..].find('>')? + 1;
        Some((start, end))
    })
}

fn tag_name(tag: &str) -> &str {
    let name = tag.trim_start_matches('<');
    let len = name
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(name.len());
    &name[..len]
}

/// Start of the `</name>` that closes an element whose content begins at
/// `from`, skipping nested elements of the same name.
fn find_closing_tag(html: &str, name: &str, from: usize) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    let name = name.to_ascii_lowercase();
    let open = format!("<{}", name);
    let close = format!("</{}", name);
    let ends_name = |rest: &str| {
        rest.starts_with(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
    };

    let mut depth = 0usize;
    let mut at = from;
    while let Some(i) = lower[at..].find('<').map(|i| i + at) {
        let rest = &lower[i..];
        if rest.starts_with(&close) && ends_name(&rest[close.len()..]) {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        } else if rest.starts_with(&open) && ends_name(&rest[open.len()..]) {
            depth += 1;
        }
        at = i + 1;
    }

    None
}

fn with_class(tag: &str, class: &str) -> String {
    match attr_values(tag, "class").first() {
        Some(&at) => match tag[at..].chars().next() {
            Some(quote @ ('"' | '\'')) => {
                format!("{}{}{} {}", &tag[..at], quote, class, &tag[at + 1..])
            }
            _ => {
                let end = tag[at..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .map_or(tag.len(), |i| at + i);
                format!(r#"{}"{} {}"{}"#, &tag[..at], class, &tag[at..end], &tag[end..])
            }
        },
        None => {
            let close = if tag.ends_with("/>") {
                tag.len() - 2
            } else {
                tag.len() - 1
            };
            format!(r#"{} class="{}"{}"#, &tag[..close], class, &tag[close..])
        }
    }
}
