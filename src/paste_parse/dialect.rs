//! Source dialect detection.
//!
//! Each editor leaves a recognizable fingerprint in its clipboard HTML. The
//! checks run in a fixed order and the first hit wins; anything unrecognized
//! is treated as generic HTML.

use kuchiki::NodeRef;

use super::{collab_editor, office_desktop, office_web, raw_html};

/// Editor-internal GUID on the wrapper `<b>` of collaborative editor pastes
const COLLAB_EDITOR_MARKER: &str = "docs-internal-guid";

/// Per-paragraph id attribute of the online office editor
const OFFICE_WEB_PARAGRAPH_MARKER: &str = "paraeid";

/// Run wrapper class of the online office editor
const OFFICE_WEB_RUN_MARKER: &str = "class=\"TextRun";

/// Office XML namespace block of the desktop word processor's HTML export
const OFFICE_DESKTOP_MARKER: &str = "<w:WordDocument";

/// A normalization pass over the document body
pub type Normalizer = fn(&NodeRef) -> anyhow::Result<()>;

/// Recognized markup flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Browser-based collaborative editor: styled spans inside paragraphs
    CollabEditor,
    /// Online office editor: one wrapper `<div>` per paragraph or list item
    OfficeWeb,
    /// Desktop word processor's legacy HTML export: `Mso*` paragraph classes
    OfficeDesktop,
    /// Anything else
    Generic,
}

impl Dialect {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Dialect::CollabEditor => "collab-editor",
            Dialect::OfficeWeb => "office-web",
            Dialect::OfficeDesktop => "office-desktop",
            Dialect::Generic => "generic",
        }
    }

    /// The normalization pass for this dialect
    #[must_use]
    pub fn normalizer(self) -> Normalizer {
        match self {
            Dialect::CollabEditor => collab_editor::normalize,
            Dialect::OfficeWeb => office_web::normalize,
            Dialect::OfficeDesktop => office_desktop::normalize,
            Dialect::Generic => raw_html::normalize,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the dialect of raw clipboard HTML. Never fails.
#[must_use]
pub fn classify(html: &str) -> Dialect {
    if html.contains(COLLAB_EDITOR_MARKER) {
        Dialect::CollabEditor
    } else if html.contains(OFFICE_WEB_PARAGRAPH_MARKER) || html.contains(OFFICE_WEB_RUN_MARKER) {
        Dialect::OfficeWeb
    } else if html.contains(OFFICE_DESKTOP_MARKER) {
        Dialect::OfficeDesktop
    } else {
        Dialect::Generic
    }
}
