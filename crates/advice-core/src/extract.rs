//! COVID-19 entry-requirements extraction from advisory HTML.

use std::sync::LazyLock;

use regex::Regex;

/// Returned when a country's advisory lists no COVID-19 entry rules.
pub const NO_ENTRY_RULES: &str = "No entry rules in response to coronavirus are listed";

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?s)h3 id=\"entry-to-(.+?)</p>\n\n<h3").unwrap());

/// Extract the COVID-19 entry-requirements excerpt from advisory HTML.
///
/// Captures from the first heading anchored `entry-to-<slug>` up to the
/// heading that follows it, and re-wraps the capture with the opening
/// `<h3 id="entry-to-` fragment and a closing `</p>`. Only the first
/// such section is returned. When the advisory has no `entry-to-`
/// anchor, returns [`NO_ENTRY_RULES`].
///
/// The pattern is tied to the current gov.uk advisory markup; an
/// upstream structure change breaks the match rather than degrading it.
pub fn extract_covid_requirements(html: &str) -> String {
    match ENTRY_RE.captures(html) {
        Some(caps) => format!("<h3 id=\"entry-to-{}</p>", &caps[1]),
        None => NO_ENTRY_RULES.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rewraps_section() {
        let html = "<p>intro</p>\n\n\
                    <h3 id=\"entry-to-testland\">Entry to Testland</h3>\n\n\
                    <p>Bring a mask.</p>\n\n\
                    <h3 id=\"visas\">Visas</h3>\n\n<p>None required.</p>";

        assert_eq!(
            extract_covid_requirements(html),
            "<h3 id=\"entry-to-testland\">Entry to Testland</h3>\n\n<p>Bring a mask.</p>"
        );
    }

    #[test]
    fn test_extract_first_section_only() {
        let html = "<h3 id=\"entry-to-aland\">Entry to A-land</h3>\n\n\
                    <p>First.</p>\n\n\
                    <h3 id=\"entry-to-bland\">Entry to B-land</h3>\n\n\
                    <p>Second.</p>\n\n\
                    <h3 id=\"visas\">Visas</h3>";

        assert_eq!(
            extract_covid_requirements(html),
            "<h3 id=\"entry-to-aland\">Entry to A-land</h3>\n\n<p>First.</p>"
        );
    }

    #[test]
    fn test_extract_spans_newlines() {
        let html = "<h3 id=\"entry-to-testland\">Entry</h3>\n\n\
                    <p>line one\nline two</p>\n\n\
                    <h3 id=\"next\">Next</h3>";

        assert_eq!(
            extract_covid_requirements(html),
            "<h3 id=\"entry-to-testland\">Entry</h3>\n\n<p>line one\nline two</p>"
        );
    }

    #[test]
    fn test_extract_no_anchor_returns_sentinel() {
        let html = "<h2 id=\"entry-rules\">Entry rules</h2>\n\n<p>Open borders.</p>\n\n<h3 id=\"visas\">Visas</h3>";

        assert_eq!(extract_covid_requirements(html), NO_ENTRY_RULES);
    }

    #[test]
    fn test_extract_anchor_without_following_heading_returns_sentinel() {
        // An entry-to- section at the very end of the document has no
        // terminating heading, so the pattern cannot close the span.
        let html = "<h3 id=\"entry-to-testland\">Entry</h3>\n\n<p>Bring a mask.</p>";

        assert_eq!(extract_covid_requirements(html), NO_ENTRY_RULES);
    }

    #[test]
    fn test_extract_is_idempotent_on_same_input() {
        let html = "<h3 id=\"entry-to-testland\">Entry</h3>\n\n<p>Rules.</p>\n\n<h3 id=\"next\">Next</h3>";

        assert_eq!(
            extract_covid_requirements(html),
            extract_covid_requirements(html)
        );
    }

    #[test]
    fn test_extract_empty_input_returns_sentinel() {
        assert_eq!(extract_covid_requirements(""), NO_ENTRY_RULES);
    }
}
