//! Section-break recognition.
//!
//! Authors mark scene changes with a line of their own choosing (`* * *`,
//! a centered ornament image, ...). The host site draws `<hr>` as the break,
//! so paragraphs matching the author's marker are replaced with one. The
//! companion [`section_break_css`] renders the work-skin rule that makes the
//! host draw `<hr>` as that marker again.

use anyhow::Result;
use kuchiki::NodeRef;

use super::dom;

/// The author's section-break marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBreak {
    /// An image URL, matched against `<img src>`.
    Image(String),
    /// Literal text, matched against a paragraph's trimmed text.
    Text(String),
}

impl SectionBreak {
    /// `None` for a blank marker. Markers starting with `http` are images.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        if marker.trim().is_empty() {
            return None;
        }
        if marker.starts_with("http") {
            Some(SectionBreak::Image(marker.to_string()))
        } else {
            Some(SectionBreak::Text(marker.trim().to_string()))
        }
    }

    fn matches_image(&self, node: &NodeRef) -> bool {
        match self {
            SectionBreak::Image(url) => {
                dom::is_element(node, "img") && dom::attr(node, "src").as_deref() == Some(url)
            }
            SectionBreak::Text(_) => false,
        }
    }

    fn matches_paragraph(&self, paragraph: &NodeRef) -> bool {
        match self {
            SectionBreak::Image(_) => match dom::element_children(paragraph).as_slice() {
                [only] => self.matches_image(only),
                _ => false,
            },
            SectionBreak::Text(text) => paragraph.text_contents().trim() == text,
        }
    }

    /// Whether a top-level block of the body stands for this break.
    fn matches_block(&self, block: &NodeRef) -> bool {
        match dom::tag_name(block) {
            Some("p") => self.matches_paragraph(block),
            Some("div") if dom::classes(block).iter().any(|class| class == "align-center") => {
                match dom::element_children(block).as_slice() {
                    [only] if dom::is_element(only, "p") => self.matches_paragraph(only),
                    [only] => self.matches_image(only),
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

/// Replace every top-level block matching `marker` with `<hr>`.
pub fn convert(body: &NodeRef, marker: &SectionBreak) -> Result<()> {
    let matches: Vec<NodeRef> = dom::element_children(body)
        .into_iter()
        .filter(|block| marker.matches_block(block))
        .collect();
    log::debug!("Converting {} section breaks", matches.len());

    for block in matches {
        dom::replace_with(&block, dom::new_element("hr"));
    }
    Ok(())
}

/// Work-skin CSS that draws the host's `<hr>` as the author's marker.
///
/// `extra_style` is appended inside the `::after` rule after passing through
/// [`sanitize_style`]. A blank marker yields an empty string.
#[must_use]
pub fn section_break_css(marker: &str, extra_style: Option<&str>) -> String {
    let Some(section_break) = SectionBreak::from_marker(marker) else {
        return String::new();
    };

    let (content, image) = match &section_break {
        SectionBreak::Image(url) => (
            String::new(),
            format!(
                "\n  background-image: url({url});\
                 \n    width: 100%; height: 1.5em; background-position: center;\
                 \n    background-size: contain; background-repeat: no-repeat;"
            ),
        ),
        SectionBreak::Text(text) => (text.replace('\\', "\\\\").replace('"', "\\\""), String::new()),
    };
    let extra = extra_style
        .map(sanitize_style)
        .filter(|style| !style.trim().is_empty())
        .map(|style| format!("\n  {style}"))
        .unwrap_or_default();

    format!(
        "#workskin .userstuff>hr {{\n  border: 0 none;\n  text-align: center;\n  color: #2a2a2a;\n  width: 100%;\n}}\n\n\
         #workskin .userstuff>hr::after {{\n  content: \"{content}\";\n  display: block;\n  margin: 0 auto;{image}{extra}\n}}"
    )
}

/// Make user-supplied declarations safe to drop into a rule body.
///
/// `/* … */` comments are removed (an unterminated one runs to the end) and
/// a quote left open is closed.
#[must_use]
pub fn sanitize_style(style: &str) -> String {
    let mut sanitized = String::with_capacity(style.len());
    let mut chars = style.chars().peekable();
    let mut in_comment = false;

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_comment = false;
            }
        } else if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            in_comment = true;
        } else {
            sanitized.push(c);
        }
    }

    let mut open_quote: Option<char> = None;
    for c in sanitized.chars() {
        if c == '"' || c == '\'' {
            match open_quote {
                None => open_quote = Some(c),
                Some(quote) if quote == c => open_quote = None,
                Some(_) => {}
            }
        }
    }
    if let Some(quote) = open_quote {
        sanitized.push(quote);
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paste_parse::dom::{body, inner_html, parse_document};

    fn converted(html: &str, marker: &str) -> String {
        let body = body(&parse_document(html)).expect("body");
        let marker = SectionBreak::from_marker(marker).expect("non-blank marker");
        convert(&body, &marker).expect("converts");
        inner_html(&body).expect("serializes")
    }

    #[test]
    fn test_marker_kinds() {
        assert_eq!(SectionBreak::from_marker("   "), None);
        assert_eq!(
            SectionBreak::from_marker(" * * * "),
            Some(SectionBreak::Text("* * *".to_string()))
        );
        assert_eq!(
            SectionBreak::from_marker("https://example.com/b.png"),
            Some(SectionBreak::Image("https://example.com/b.png".to_string()))
        );
    }

    #[test]
    fn test_text_marker_matches_trimmed_paragraph() {
        assert_eq!(
            converted("<p>a</p><p> * * * </p><p>** * *</p><p>* * * more</p>", "* * *"),
            "<p>a</p><hr><p>** * *</p><p>* * * more</p>"
        );
    }

    #[test]
    fn test_centered_wrapper_matches() {
        assert_eq!(
            converted(r#"<div class="align-center"><p>~</p></div><div><p>~</p></div>"#, "~"),
            r#"<hr><div><p>~</p></div>"#
        );
    }

    #[test]
    fn test_image_marker() {
        let url = "https://example.com/break.png";
        let html = format!(
            r#"<p><img src="{url}"></p><div class="align-center"><img src="{url}"></div><p><img src="{url}"> text<img src="x"></p><p><img src="other"></p>"#
        );
        assert_eq!(
            converted(&html, url),
            format!(r#"<hr><hr><p><img src="{url}"> text<img src="x"></p><p><img src="other"></p>"#)
        );
    }

    #[test]
    fn test_nested_paragraphs_are_not_converted() {
        assert_eq!(
            converted("<blockquote><p>#</p></blockquote>", "#"),
            "<blockquote><p>#</p></blockquote>"
        );
    }

    #[test]
    fn test_sanitize_style_strips_comments() {
        assert_eq!(sanitize_style("color: red; /* note */ width: 2em;"), "color: red;  width: 2em;");
        assert_eq!(sanitize_style("color: red; /* never closed"), "color: red; ");
    }

    #[test]
    fn test_sanitize_style_closes_quotes() {
        assert_eq!(sanitize_style("font-family: \"Open Sans"), "font-family: \"Open Sans\"");
        assert_eq!(sanitize_style("content: 'it\"s'"), "content: 'it\"s'");
    }

    #[test]
    fn test_section_break_css_text() {
        let css = section_break_css(" * * * ", Some("letter-spacing: 1em; /* wide */"));
        assert!(css.starts_with("#workskin .userstuff>hr {"));
        assert!(css.contains("content: \"* * *\";"));
        assert!(css.contains("\n  letter-spacing: 1em; \n}"));
        assert!(!css.contains("background-image"));
    }

    #[test]
    fn test_section_break_css_image() {
        let css = section_break_css("https://example.com/b.png", None);
        assert!(css.contains("content: \"\";"));
        assert!(css.contains("background-image: url(https://example.com/b.png);"));
        assert!(css.ends_with("background-repeat: no-repeat;\n}"));
    }

    #[test]
    fn test_section_break_css_blank_marker() {
        assert_eq!(section_break_css("", Some("color: red")), "");
    }
}
