//! Page templates for the generated site.

pub mod detail;
pub mod index;

/// Escape text for interpolation into HTML body or attribute positions.
///
/// The ampersand must go first so already-escaped entities are not
/// double-mangled on the way in.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Fish & Chips"</b>"#),
            "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn escapes_single_quotes_for_attributes() {
        assert_eq!(escape("Joe's"), "Joe&#39;s");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape("Blue Cafe 12"), "Blue Cafe 12");
    }
}
