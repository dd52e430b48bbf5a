//! The restricted markup subset applied to assistant text.
//!
//! This is a substitution, not a parser: every newline becomes a `<br>` tag
//! and every `**text**` pair becomes `<b>text</b>`, matched leftmost,
//! non-greedy and non-overlapping.  Newlines are replaced first, so by the
//! time the bold pass runs a pair may legitimately span what used to be a
//! line break.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern compiles"));

/// Whether server-provided text may be injected into markup verbatim.
///
/// The remote service's output crosses a trust boundary here; [`Escaped`]
/// keeps that boundary closed and is the default.  [`Trusted`] reproduces
/// the inject-verbatim behavior and must be opted into explicitly.
///
/// [`Escaped`]: RenderMode::Escaped
/// [`Trusted`]: RenderMode::Trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Inject server output into the markup unmodified.
    Trusted,
    /// Escape HTML-significant characters before the markup substitution.
    #[default]
    Escaped,
}

/// Render `text` into the restricted markup subset.
///
/// ```rust
/// use agentchat_widget::{RenderMode, render_markup};
///
/// assert_eq!(render_markup("a\n**b**", RenderMode::Trusted), "a<br><b>b</b>");
/// ```
pub fn render_markup(text: &str, mode: RenderMode) -> String {
    if text.is_empty() {
        return String::new();
    }

    let source = match mode {
        RenderMode::Trusted => text.to_owned(),
        RenderMode::Escaped => escape_html(text),
    };

    let with_breaks = source.replace('\n', "<br>");
    BOLD.replace_all(&with_breaks, "<b>$1</b>").into_owned()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_and_bold_substitution() {
        assert_eq!(render_markup("a\n**b**", RenderMode::Trusted), "a<br><b>b</b>");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_markup("", RenderMode::Trusted), "");
        assert_eq!(render_markup("", RenderMode::Escaped), "");
    }

    #[test]
    fn bold_pairs_match_leftmost_non_overlapping() {
        assert_eq!(
            render_markup("**a** and **b**", RenderMode::Trusted),
            "<b>a</b> and <b>b</b>"
        );
        // A lone trailing pair of asterisks stays literal.
        assert_eq!(
            render_markup("**a** tail**", RenderMode::Trusted),
            "<b>a</b> tail**"
        );
    }

    #[test]
    fn non_greedy_match_takes_the_shortest_span() {
        assert_eq!(
            render_markup("**a**b**c**", RenderMode::Trusted),
            "<b>a</b>b<b>c</b>"
        );
    }

    #[test]
    fn emphasis_spans_replaced_line_breaks() {
        assert_eq!(
            render_markup("**a\nb**", RenderMode::Trusted),
            "<b>a<br>b</b>"
        );
    }

    #[test]
    fn escaped_mode_neutralizes_html() {
        assert_eq!(
            render_markup("<script>&</script>", RenderMode::Escaped),
            "&lt;script&gt;&amp;&lt;/script&gt;"
        );
    }

    #[test]
    fn escaped_mode_still_applies_the_subset() {
        assert_eq!(
            render_markup("a\n**b**", RenderMode::Escaped),
            "a<br><b>b</b>"
        );
    }

    #[test]
    fn trusted_mode_injects_verbatim() {
        assert_eq!(
            render_markup("<i>raw</i>", RenderMode::Trusted),
            "<i>raw</i>"
        );
    }
}
