/// Base URL of article links that come without an explicit URL.
pub const WIKI_ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// A link to a related Wikipedia article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLink {
    pub title: String,
    pub url: String,
}

impl WikiLink {
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        let url = format!("{WIKI_ARTICLE_BASE_URL}{}", title.replace(' ', "_"));
        Self { title, url }
    }
}
