/// Listing pages that are navigated to explicitly when clicked inside the feed.
const LOCAL_TARGETS: &[&str] = &[
    "story.html",
    "stories.html",
    "stories",
    "poems.html",
    "poems",
    "books.html",
    "books",
    "story1.html",
    "story2.html",
];

/// What activating a link should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Let the link behave natively.
    Follow,
    /// Suppress the default and go to the given href.
    Redirect(String),
}

/// Delegated click policy for anchors inside the feed container.
pub fn classify(href: &str) -> Navigation {
    let href = href.trim();
    let lower = href.to_lowercase();

    if href.is_empty()
        || href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with('#')
        || lower.starts_with("javascript:")
    {
        return Navigation::Follow;
    }

    let local = LOCAL_TARGETS.iter().any(|target| {
        lower.ends_with(target) || lower.contains(&format!("/{}", target)) || lower == *target
    });

    if local {
        Navigation::Redirect(href.to_string())
    } else {
        Navigation::Follow
    }
}
