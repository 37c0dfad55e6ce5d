//! Message composition - renders an article into a bounded-length message

use crate::model::{Article, ComposedMessage};

/// Platform hard limit on message length, in characters
pub const MAX_POST_CHARS: usize = 280;

/// Character budget for the title portion
///
/// 280 minus the "News: " prefix and the link's worst-case rendered length
/// under the platform's URL-shortening convention (~23 chars), with margin.
pub const TITLE_BUDGET: usize = 250;

const ELLIPSIS: &str = "...";

/// Render an article as `"News: {title} {link}"`, truncating the title to
/// the budget
///
/// A title over budget is cut to `TITLE_BUDGET - 3` characters plus an
/// ellipsis marker so the rendered title is exactly `TITLE_BUDGET`
/// characters. No other normalization is performed. Composing never fails;
/// the caller must skip articles with an empty title or link.
pub fn compose(article: &Article) -> ComposedMessage {
    let title = truncate_title(&article.title);
    ComposedMessage {
        text: format!("News: {} {}", title, article.link),
    }
}

/// Truncate on character boundaries; byte slicing would split multi-byte
/// titles mid code point
fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_BUDGET {
        return title.to_string();
    }

    let kept: String = title.chars().take(TITLE_BUDGET - ELLIPSIS.len()).collect();
    format!("{}{}", kept, ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, link: &str) -> Article {
        Article {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn short_title_passes_through_unmodified() {
        let message = compose(&article("Rust 2.0 announced", "https://example.com/rust"));

        assert_eq!(
            message.text,
            "News: Rust 2.0 announced https://example.com/rust"
        );
    }

    #[test]
    fn title_at_budget_is_not_truncated() {
        let title = "a".repeat(TITLE_BUDGET);
        let message = compose(&article(&title, "http://x/1"));

        assert_eq!(message.text, format!("News: {} http://x/1", title));
    }

    #[test]
    fn long_title_is_cut_to_budget_with_ellipsis() {
        let title = "A".repeat(260);
        let message = compose(&article(&title, "http://x/1"));

        let rendered_title = message
            .text
            .strip_prefix("News: ")
            .and_then(|rest| rest.strip_suffix(" http://x/1"))
            .expect("template shape");

        assert_eq!(rendered_title.chars().count(), TITLE_BUDGET);
        assert!(rendered_title.ends_with("..."));
        assert_eq!(&rendered_title[..247], &"A".repeat(247));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes; byte slicing at 247 would panic
        let title = "é".repeat(260);
        let message = compose(&article(&title, "http://x/1"));

        let rendered_title = message
            .text
            .strip_prefix("News: ")
            .and_then(|rest| rest.strip_suffix(" http://x/1"))
            .expect("template shape");

        assert_eq!(rendered_title.chars().count(), TITLE_BUDGET);
        let kept: String = rendered_title.chars().take(247).collect();
        assert_eq!(kept, "é".repeat(247));
    }

    #[test]
    fn composed_text_stays_under_platform_limit_for_shortened_links() {
        // 23 chars is the platform's rendered link length
        let link = "https://t.co/0123456789";
        let message = compose(&article(&"A".repeat(300), link));

        assert!(message.text.chars().count() <= MAX_POST_CHARS);
    }

    #[test]
    fn no_whitespace_normalization() {
        let message = compose(&article("two  spaces\tand a tab", "http://x/1"));

        assert_eq!(message.text, "News: two  spaces\tand a tab http://x/1");
    }
}
