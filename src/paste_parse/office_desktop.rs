//! Normalizer for the desktop word processor's legacy HTML export.
//!
//! Every top-level paragraph carries one `Mso*` class naming its role.
//! List items are plain paragraphs with the list id and level buried in a
//! proprietary `mso-list` style declaration, plus a bullet glyph wrapped in
//! downlevel conditional comments:
//!
//! ```html
//! <p class=MsoListParagraphCxSpFirst style='text-indent:-.25in;mso-list:l0 level1 lfo1'>
//!   <!--[if !supportLists]--><span>1.<span>&nbsp;</span></span><!--[endif]-->Item
//! </p>
//! ```

use std::sync::LazyLock;

use anyhow::Result;
use kuchiki::NodeRef;
use regex::Regex;

use super::dom;
use super::inline_style::InlineStyle;
use super::lists::ListStack;

static MSO_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|;)\s*mso-list:\s*l(\d+)\s+level(\d+)")
        .expect("MSO_LIST: hardcoded regex is valid")
});

const SUPPORT_LISTS_OPEN: &str = "[if !supportLists]";
const SUPPORT_LISTS_CLOSE: &str = "[endif]";

/// Role of a paragraph, from its first class.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParagraphRole {
    Normal,
    Title,
    ListItem,
    Other(String),
}

impl ParagraphRole {
    fn from_class(class: &str) -> Self {
        match class {
            "MsoNormal" => ParagraphRole::Normal,
            "MsoTitle" => ParagraphRole::Title,
            "MsoListParagraph"
            | "MsoListParagraphCxSpFirst"
            | "MsoListParagraphCxSpMiddle"
            | "MsoListParagraphCxSpLast" => ParagraphRole::ListItem,
            other => ParagraphRole::Other(other.to_string()),
        }
    }
}

/// List kind and depth from an `mso-list:l<T> level<N>` declaration.
///
/// List 0 is numbered, everything else bulleted. Missing or malformed
/// declarations give a top-level bulleted item.
fn list_position(style: &str) -> (bool, usize) {
    let Some(captures) = MSO_LIST.captures(style) else {
        return (false, 1);
    };
    let ordered = captures
        .get(1)
        .and_then(|list| list.as_str().parse::<u32>().ok())
        == Some(0);
    let depth = captures
        .get(2)
        .and_then(|level| level.as_str().parse::<usize>().ok())
        .filter(|level| *level > 0)
        .unwrap_or(1);
    (ordered, depth)
}

pub fn normalize(body: &NodeRef) -> Result<()> {
    let paragraphs: Vec<NodeRef> = dom::element_children(body)
        .into_iter()
        .filter(|child| dom::is_element(child, "p"))
        .collect();
    log::debug!("Walking {} top-level paragraphs", paragraphs.len());

    let mut lists = ListStack::new();
    // The emptied source paragraph of the most recent list item. It marks
    // where a still-open list lands when the walk ends.
    let mut placeholder: Option<NodeRef> = None;

    for paragraph in paragraphs {
        let Some(class) = dom::classes(&paragraph).into_iter().next() else {
            continue;
        };
        let alignment = InlineStyle::of(&paragraph).alignment();
        dom::remove_attr(&paragraph, "class");
        if let Some(alignment) = alignment {
            dom::add_class(&paragraph, alignment.class_name());
        }

        let role = ParagraphRole::from_class(&class);
        if role != ParagraphRole::ListItem {
            if let Some(list) = lists.flatten() {
                paragraph.insert_before(list);
            }
            if let Some(previous) = placeholder.take() {
                previous.detach();
            }
        }

        match role {
            ParagraphRole::Normal => {}
            ParagraphRole::Title => {
                let title = dom::new_element("h1");
                if let Some(alignment) = alignment {
                    dom::add_class(&title, alignment.class_name());
                }
                dom::move_children(&paragraph, &title);
                dom::replace_with(&paragraph, title);
            }
            ParagraphRole::ListItem => {
                strip_list_glyphs(&paragraph);
                let style = dom::attr(&paragraph, "style").unwrap_or_default();
                let (ordered, depth) = list_position(&style);

                if let Some(list) = lists.reconcile(depth, ordered) {
                    paragraph.insert_before(list);
                }
                let item = dom::new_element("li");
                dom::move_children(&paragraph, &item);
                lists.push_item(item);

                if let Some(previous) = placeholder.replace(paragraph) {
                    previous.detach();
                }
            }
            ParagraphRole::Other(class) => dom::add_class(&paragraph, &class),
        }
    }

    if let Some(placeholder) = placeholder {
        if let Some(list) = lists.flatten() {
            placeholder.insert_before(list);
        }
        placeholder.detach();
    }
    Ok(())
}

/// Drop the bullet glyph between the `[if !supportLists]` and `[endif]`
/// conditional comments, comments included.
fn strip_list_glyphs(paragraph: &NodeRef) {
    let mut doomed = Vec::new();
    let mut inside = false;
    for child in paragraph.children() {
        let comment = child
            .as_comment()
            .map(|comment| comment.borrow().trim().to_string());
        if comment.as_deref() == Some(SUPPORT_LISTS_OPEN) {
            inside = true;
        }
        if inside {
            if comment.as_deref() == Some(SUPPORT_LISTS_CLOSE) {
                inside = false;
            }
            doomed.push(child);
        }
    }
    for node in doomed {
        node.detach();
    }
}
