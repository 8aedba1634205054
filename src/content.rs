//! Inline content rendering for post bodies.
//!
//! Converts the raw text of a post into HTML-safe markup. The renderer is a
//! fixed pipeline of text transforms: character escaping runs first and
//! exactly once, then whitespace is made display-stable, then the two inline
//! annotation forms (bracket links and numeric post references) are expanded.
//! Markup emitted by the annotation steps is never re-escaped because every
//! escaping step except the apostrophe pass has already run; the apostrophe
//! pass runs last and cannot touch the double-quoted attributes the anchors
//! use.

/// CSS class carried by every anchor the renderer emits.
const INLINE_LINK_CLASS: &str = "post-inline-link";

/// Default visible label for a bracket link with an empty label.
const EMPTY_LABEL_TEXT: &str = "link";

/// Renders raw post text into an HTML-safe fragment.
///
/// The result is safe to inject as the markup content of a container
/// element. Rendering is pure and total: any string is valid input and a
/// string always comes back. It is not idempotent (feeding already-rendered
/// output through again double-escapes it), so each post body must be
/// rendered exactly once.
///
/// The step order is load-bearing. Each step operates on the output of the
/// previous one: ampersands are escaped before the other characters so
/// entities produced later are not corrupted, annotations are expanded on
/// already-escaped text, and apostrophes are escaped last so the
/// double-quoted attributes emitted by the annotation steps stay intact.
///
/// # Arguments
///
/// * `text`: Raw post body, possibly containing newlines and markup-like
///   substrings
///
/// # Returns
///
/// HTML-safe fragment string
pub fn render(text: &str) -> String {
    let text = escape_ampersands(text);
    let text = escape_angle_brackets(&text);
    let text = escape_double_quotes(&text);
    let text = break_newlines(&text);
    let text = harden_spaces(&text);
    let text = expand_bracket_links(&text);
    let text = expand_post_refs(&text);
    escape_apostrophes(&text)
}

/// Escapes `&`. Must run before every other step.
fn escape_ampersands(text: &str) -> String {
    text.replace('&', "&amp;")
}

/// Escapes `<` and `>`.
fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Escapes `"`.
fn escape_double_quotes(text: &str) -> String {
    text.replace('"', "&quot;")
}

/// Replaces newlines with line-break elements.
fn break_newlines(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Replaces spaces with non-breaking spaces so runs of whitespace survive
/// HTML whitespace collapsing.
fn harden_spaces(text: &str) -> String {
    text.replace(' ', "&nbsp;")
}

/// Escapes `'`. Must run last: the anchors emitted by the annotation steps
/// quote their attributes with `"` exclusively, so this pass cannot corrupt
/// them.
fn escape_apostrophes(text: &str) -> String {
    text.replace('\'', "&#039;")
}

/// Expands `[label](url)` annotations into anchors.
///
/// The label is the run of characters up to the first `]` and may be empty,
/// in which case the literal text `link` is shown. The url is the run of
/// non-`)` characters and may also be empty. The anchor opens in a new
/// browsing context and keeps the brackets as visible text. Double quotes in
/// the url are escaped again when the attribute is emitted, on top of the
/// escaping pass that has already run.
///
/// A literal backslash immediately before `[` suppresses the expansion: the
/// backslash is dropped and the bracket text is kept verbatim. Only one
/// leading backslash is consumed.
fn expand_bracket_links(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let open = match text[pos..].find('[') {
            Some(p) => pos + p,
            None => {
                result.push_str(&text[pos..]);
                break;
            }
        };

        // Label runs to the first closing bracket. Without one, no further
        // annotation can match anywhere in the remainder.
        let label_end = match text[open + 1..].find(']') {
            Some(p) => open + 1 + p,
            None => {
                result.push_str(&text[pos..]);
                break;
            }
        };

        // The url part must follow the label immediately.
        if text.as_bytes().get(label_end + 1) != Some(&b'(') {
            result.push_str(&text[pos..=open]);
            pos = open + 1;
            continue;
        }

        let url_end = match text[label_end + 2..].find(')') {
            Some(p) => label_end + 2 + p,
            None => {
                result.push_str(&text[pos..=open]);
                pos = open + 1;
                continue;
            }
        };

        let escaped = open > pos && text.as_bytes()[open - 1] == b'\\';
        if escaped {
            // Drop the backslash and keep the bracket text verbatim.
            result.push_str(&text[pos..open - 1]);
            result.push_str(&text[open..=url_end]);
        } else {
            result.push_str(&text[pos..open]);

            let label = match &text[open + 1..label_end] {
                "" => EMPTY_LABEL_TEXT,
                label => label,
            };
            let url = text[label_end + 2..url_end].replace('"', "&quot;");

            result.push_str(&format!(
                r#"<a class="{INLINE_LINK_CLASS}" href="{url}" target="_blank">[{label}]</a>"#
            ));
        }

        pos = url_end + 1;
    }

    result
}

/// Expands `#<digits>` annotations into anchors pointing at `/post/<digits>`.
///
/// The digit run is maximal and must be non-empty; a `#` followed by
/// anything else stays literal text. The same single-backslash escape rule
/// as bracket links applies: `\#12` renders as the literal `#12`.
fn expand_post_refs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let hash = match text[pos..].find('#') {
            Some(p) => pos + p,
            None => {
                result.push_str(&text[pos..]);
                break;
            }
        };

        let digits_end = text[hash + 1..]
            .find(|c: char| !c.is_ascii_digit())
            .map(|p| hash + 1 + p)
            .unwrap_or(text.len());

        if digits_end == hash + 1 {
            // No digits after the hash: literal text.
            result.push_str(&text[pos..=hash]);
            pos = hash + 1;
            continue;
        }

        let escaped = hash > pos && text.as_bytes()[hash - 1] == b'\\';
        if escaped {
            result.push_str(&text[pos..hash - 1]);
            result.push_str(&text[hash..digits_end]);
        } else {
            result.push_str(&text[pos..hash]);

            let id = &text[hash + 1..digits_end];
            result.push_str(&format!(
                r#"<a class="{INLINE_LINK_CLASS}" href="/post/{id}">#{id}</a>"#
            ));
        }

        pos = digits_end;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        // Arrange: no escapable characters, whitespace, or annotations
        let text = "justwords";

        // Act
        let rendered = render(text);

        // Assert
        assert_eq!(rendered, "justwords");
    }

    #[test]
    fn test_ampersand_escaped_once() {
        let rendered = render("a & b");

        assert_eq!(rendered, "a&nbsp;&amp;&nbsp;b");
        assert!(
            !rendered.replace("&amp;", "").replace("&nbsp;", "").contains('&'),
            "No unescaped ampersand should remain"
        );
    }

    #[test]
    fn test_angle_brackets_escaped() {
        assert_eq!(render("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_double_quote_escaped() {
        assert_eq!(render("say \"hi\""), "say&nbsp;&quot;hi&quot;");
    }

    #[test]
    fn test_apostrophe_escaped() {
        assert_eq!(render("it's"), "it&#039;s");
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render("a\nb\nc"), "a<br>b<br>c");
    }

    #[test]
    fn test_spaces_become_nbsp() {
        // Runs of spaces must survive HTML whitespace collapsing
        assert_eq!(render("a  b"), "a&nbsp;&nbsp;b");
    }

    #[test]
    fn test_bracket_link_expanded() {
        // Act
        let rendered = render("[docs](http://example.com)");

        // Assert: anchor with visible brackets, new browsing context
        assert_eq!(
            rendered,
            r#"<a class="post-inline-link" href="http://example.com" target="_blank">[docs]</a>"#
        );
    }

    #[test]
    fn test_bracket_link_empty_label_defaults_to_link() {
        let rendered = render("[](http://x)");

        assert!(rendered.contains(r#"href="http://x""#));
        assert!(
            rendered.contains("[link]"),
            "Empty label should display as [link]: {rendered}"
        );
    }

    #[test]
    fn test_bracket_link_quote_in_url_escaped_in_href() {
        let rendered = render("[t](http://x\"y)");

        assert!(
            rendered.contains(r#"href="http://x&quot;y""#),
            "Quote inside href must be escaped: {rendered}"
        );
    }

    #[test]
    fn test_bracket_link_empty_url() {
        let rendered = render("[t]()");

        assert!(rendered.contains(r#"href="""#));
        assert!(rendered.contains("[t]"));
    }

    #[test]
    fn test_post_ref_expanded() {
        assert_eq!(
            render("#42"),
            r#"<a class="post-inline-link" href="/post/42">#42</a>"#
        );
    }

    #[test]
    fn test_post_ref_requires_digits() {
        assert_eq!(render("#note"), "#note");
    }

    #[test]
    fn test_escaped_bracket_link_stays_literal() {
        // Arrange: a backslash immediately before the opening bracket
        let text = "\\[t](u)";

        // Act
        let rendered = render(text);

        // Assert: backslash stripped, no anchor emitted
        assert_eq!(rendered, "[t](u)");
        assert!(!rendered.contains("<a"));
    }

    #[test]
    fn test_escaped_post_ref_stays_literal() {
        let rendered = render("\\#42");

        assert_eq!(rendered, "#42");
        assert!(!rendered.contains("<a"));
    }

    #[test]
    fn test_double_backslash_is_not_an_escaped_escape() {
        // Only a single leading backslash is consumed; the one before it
        // passes through as literal text.
        assert_eq!(render("\\\\[x](y)"), "\\[x](y)");
        assert_eq!(render("\\\\#7"), "\\#7");
    }

    #[test]
    fn test_adjacent_annotations_both_match() {
        // Act
        let rendered = render("[a](b)#1");

        // Assert: the link and the reference are matched independently
        assert!(rendered.contains(r#"href="b""#));
        assert!(rendered.contains(r#"href="/post/1""#));
        assert!(rendered.contains("[a]"));
        assert!(rendered.contains("#1"));
    }

    #[test]
    fn test_unterminated_bracket_stays_literal() {
        assert_eq!(render("[dangling"), "[dangling");
        assert_eq!(render("[a](never"), "[a](never");
        assert_eq!(render("[a]no-url"), "[a]no-url");
    }

    #[test]
    fn test_no_double_escaping_of_generated_markup() {
        // Arrange: input whose escaped form introduces an ampersand before
        // the annotation steps run
        let rendered = render("x & [](u)");

        // Act: collect the entity-stripped remainder
        let stripped = rendered
            .replace("&amp;", "")
            .replace("&nbsp;", "")
            .replace("&quot;", "")
            .replace("&#039;", "");

        // Assert: exactly one &amp; and the generated anchor kept its quotes
        assert_eq!(rendered.matches("&amp;").count(), 1);
        assert!(!rendered.contains("&amp;amp;"), "No double escaping: {rendered}");
        assert!(stripped.contains(r#"<a class="post-inline-link""#));
    }

    #[test]
    fn test_label_spaces_already_hardened() {
        // The whitespace step runs before link expansion, so a spaced label
        // reaches the anchor with non-breaking spaces in place.
        let rendered = render("[two words](u)");

        assert!(rendered.contains("[two&nbsp;words]"));
    }

    #[test]
    fn test_escaped_html_in_sentence_with_link() {
        let rendered = render("<b>bold</b> [x](y)");

        assert!(rendered.starts_with("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(rendered.contains(r#"href="y""#));
    }

    #[test]
    fn test_pipeline_step_escape_ampersands() {
        assert_eq!(escape_ampersands("a&b&c"), "a&amp;b&amp;c");
    }

    #[test]
    fn test_pipeline_step_escape_angle_brackets() {
        assert_eq!(escape_angle_brackets("<x>"), "&lt;x&gt;");
    }

    #[test]
    fn test_pipeline_step_harden_spaces() {
        assert_eq!(harden_spaces(" a "), "&nbsp;a&nbsp;");
    }

    #[test]
    fn test_pipeline_step_expand_bracket_links_mid_text() {
        let expanded = expand_bracket_links("pre [a](b) post");

        assert_eq!(
            expanded,
            r#"pre <a class="post-inline-link" href="b" target="_blank">[a]</a> post"#
        );
    }

    #[test]
    fn test_pipeline_step_expand_post_refs_consumes_maximal_digits() {
        let expanded = expand_post_refs("#123a");

        assert_eq!(
            expanded,
            r##"<a class="post-inline-link" href="/post/123">#123</a>a"##
        );
    }

    #[test]
    fn test_multiple_refs_in_one_sentence() {
        let expanded = expand_post_refs("#1 and #2");

        assert_eq!(expanded.matches("<a ").count(), 2);
        assert!(expanded.contains(r#"href="/post/1""#));
        assert!(expanded.contains(r#"href="/post/2""#));
    }
}
