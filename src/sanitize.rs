use rustrict::CensorStr;
use scraper::Html;

/// Best-effort title screening. Combines rustrict's heuristics with an optional list of extra
/// words or phrases, matched against whole words of the title, ignoring case and punctuation.
#[derive(Clone, Debug, Default)]
pub struct TitleFilter {
    blocked: Vec<Vec<String>>,
}

impl TitleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries with several words (`"bad word"`, `"bad-word"`) only match that exact sequence.
    pub fn with_blocked_words<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let phrase = lowercase_words(entry.as_ref());
            if !phrase.is_empty() && !self.blocked.contains(&phrase) {
                self.blocked.push(phrase);
            }
        }
        self
    }

    pub fn is_profane(&self, title: &str) -> bool {
        if title.trim().is_empty() {
            return false;
        }

        if !self.blocked.is_empty() {
            let title_words = lowercase_words(title);
            if self
                .blocked
                .iter()
                .any(|phrase| title_words.windows(phrase.len()).any(|w| w == phrase.as_slice()))
            {
                return true;
            }
        }

        title.is_inappropriate()
    }
}

fn lowercase_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Reduces an HTML fragment to its text content.
pub fn strip_tags(html: &str) -> String {
    if !html.contains('<') && !html.contains('&') {
        return html.to_string();
    }

    Html::parse_fragment(html).root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup() {
        assert_eq!(strip_tags("<b>Sunset</b> view"), "Sunset view");
        assert_eq!(
            strip_tags(r#"Shot on <a href="https://example.com/" rel="nofollow">film</a>.<br />"#),
            "Shot on film."
        );
        assert_eq!(strip_tags("<p><i>nested</i> <b>tags</b></p>"), "nested tags");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip_tags(""), "");
        assert_eq!(strip_tags("just words"), "just words");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(strip_tags("fish &amp; chips"), "fish & chips");
    }

    #[test]
    fn clean_titles_pass() {
        let filter = TitleFilter::new();

        assert!(!filter.is_profane(""));
        assert!(!filter.is_profane("Harbour at dawn"));
        assert!(!filter.is_profane("Mountain lake"));
    }

    #[test]
    fn profane_titles_are_flagged() {
        let filter = TitleFilter::new();

        assert!(filter.is_profane("fuck"));
        assert!(filter.is_profane("what the fuck"));
    }

    #[test]
    fn blocked_words_match_whole_words_ignoring_case() {
        let filter = TitleFilter::new().with_blocked_words(["Chihuahua", " "]);

        assert!(filter.is_profane("My CHIHUAHUA, again"));
        assert!(!filter.is_profane("Chihuahuas everywhere"));
        assert!(!filter.is_profane("Harbour at dawn"));
    }

    #[test]
    fn blocked_phrases_match_word_sequences() {
        let filter = TitleFilter::new().with_blocked_words(["foggy harbour", "mountain-lake"]);

        assert!(filter.is_profane("A FOGGY  harbour at dawn"));
        assert!(filter.is_profane("foggy-harbour"));
        assert!(filter.is_profane("Mountain lake at noon"));
        assert!(!filter.is_profane("Foggy morning, quiet harbour"));
        assert!(!filter.is_profane("harbour"));
    }
}
