use crate::render::PLACEHOLDER_HTML;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Card(String),
    ViewMore { href: String, html: String },
    Placeholder,
}

impl Node {
    pub fn html(&self) -> &str {
        match self {
            Node::Card(html) => html,
            Node::ViewMore { html, .. } => html,
            Node::Placeholder => PLACEHOLDER_HTML,
        }
    }
}

/// The element the feed renders into, plus the page effects requested on it.
#[derive(Debug)]
pub struct FeedContainer {
    id: String,
    children: Vec<Node>,
    classes: Vec<String>,
    scroll_requests: usize,
    focus_requests: usize,
}

impl FeedContainer {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            children: Vec::new(),
            classes: Vec::new(),
            scroll_requests: 0,
            focus_requests: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn card_count(&self) -> usize {
        self.children
            .iter()
            .filter(|n| matches!(n, Node::Card(_)))
            .count()
    }

    pub fn view_more_count(&self) -> usize {
        self.children
            .iter()
            .filter(|n| matches!(n, Node::ViewMore { .. }))
            .count()
    }

    pub fn view_more_href(&self) -> Option<&str> {
        self.children.iter().find_map(|n| match n {
            Node::ViewMore { href, .. } => Some(href.as_str()),
            _ => None,
        })
    }

    pub fn is_placeholder(&self) -> bool {
        self.children == [Node::Placeholder]
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn scroll_into_view(&mut self) {
        self.scroll_requests += 1;
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Asks the page to return focus to the search input.
    pub fn focus_search_input(&mut self) {
        self.focus_requests += 1;
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    /// Inner HTML of the container.
    pub fn to_html(&self) -> String {
        self.children
            .iter()
            .map(Node::html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
