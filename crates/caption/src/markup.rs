use std::borrow::Cow;

use scraper::{Html, Node};

/// Elements whose boundaries separate words even without whitespace.
const BREAKING_ELEMENTS: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "tr",
    "td", "th", "section", "article",
];

const SILENT_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Reduce rendered story HTML to its visible text.
///
/// Entities are decoded and block-level elements act as word breaks, so
/// `end.</p><p>Next` yields two words. Text without markup is returned
/// unchanged.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '&']) {
        return Cow::Borrowed(text);
    }

    let fragment = Html::parse_fragment(text);
    let mut out = String::with_capacity(text.len());

    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Text(piece) => {
                let silenced = node
                    .parent()
                    .and_then(|parent| parent.value().as_element())
                    .is_some_and(|element| SILENT_ELEMENTS.contains(&element.name()));
                if !silenced {
                    out.push_str(piece);
                }
            }
            Node::Element(element) if BREAKING_ELEMENTS.contains(&element.name()) => {
                out.push(' ');
            }
            _ => {}
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        strip_markup(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(strip_markup("just words"), Cow::Borrowed("just words")));
    }

    #[test]
    fn inline_tags_do_not_split_words() {
        assert_eq!(
            words(r#"a <strong class="filled">purple</strong> banana"#),
            ["a", "purple", "banana"]
        );
        assert_eq!(words("un<em>believ</em>able"), ["unbelievable"]);
    }

    #[test]
    fn block_tags_and_breaks_split_words() {
        assert_eq!(words("end.</p><p>Next"), ["end.", "Next"]);
        assert_eq!(words("one<br>two<br/>three"), ["one", "two", "three"]);
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(words("Tom &amp; Jerry&#39;s &lt;3"), ["Tom", "&", "Jerry's", "<3"]);
    }

    #[test]
    fn scripts_are_dropped() {
        assert_eq!(words("hi<script>alert(1)</script> there"), ["hi", "there"]);
    }
}
