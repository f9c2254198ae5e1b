/// What the feed should do on a given page, decided from its path alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Stories,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub path: String,
    pub kind: PageKind,
}

impl PageContext {
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();

        let kind = if lower.is_empty() || lower == "/" || lower.ends_with("/index.html") {
            PageKind::Home
        } else if lower.ends_with("story.html") || lower.ends_with("stories.html") {
            PageKind::Stories
        } else {
            PageKind::Other
        };

        Self {
            path: path.to_string(),
            kind,
        }
    }

    pub fn is_home(&self) -> bool {
        self.kind == PageKind::Home
    }

    /// The story listing drops the sidebar subscribe box.
    pub fn hides_newsletter(&self) -> bool {
        self.kind == PageKind::Stories
    }
}
