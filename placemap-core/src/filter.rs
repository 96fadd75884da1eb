use regex::{Regex, RegexBuilder};

/// Case-insensitive, literal substring match on marker titles.
///
/// The filter text is trimmed; special characters match themselves.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Pattern(Regex),
    // Only used if the escaped pattern exceeds the size limit of the regex engine.
    Lowercase(String),
}

impl TitleFilter {
    pub fn new(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self {
                matcher: Matcher::All,
            };
        }
        let matcher = match RegexBuilder::new(&regex::escape(text))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Matcher::Pattern(re),
            Err(err) => {
                log::warn!("Unable to compile filter pattern: {err}");
                Matcher::Lowercase(text.to_lowercase())
            }
        };
        Self { matcher }
    }

    /// `true` if every title matches.
    pub const fn is_empty(&self) -> bool {
        matches!(self.matcher, Matcher::All)
    }

    pub fn matches(&self, title: &str) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Pattern(re) => re.is_match(title),
            Matcher::Lowercase(text) => title.to_lowercase().contains(text.as_str()),
        }
    }
}

/// `true` if the filter text would hide at least one title.
pub fn is_filter_active(text: &str) -> bool {
    !text.trim().is_empty()
}
