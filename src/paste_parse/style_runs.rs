//! Style-run folding: turning a stream of styled text leaves into minimal,
//! correctly nested inline tags.
//!
//! Word processors describe formatting per run ("this span is bold and
//! italic, the next one only italic"). Emitting one wrapper per run gives
//! `<b><i>a</i></b><i>b</i>`; folding keeps `<i>` open across the boundary
//! when the stack allows it and only closes what has to be closed.
//!
//! The folder keeps a stack of open tags. When a leaf arrives:
//!
//! 1. Find the outermost open tag whose style the leaf does not carry. Close
//!    it together with everything opened after it (inner tags must close
//!    first). Pending text is flushed into the innermost tag before closing.
//! 2. Open a tag for every style the leaf carries that is not open yet, in
//!    the fixed order b, i, u, s, sub/sup.
//! 3. Append the leaf text to the pending buffer.
//!
//! Closed tags are attached to their parent only when they close, so nothing
//! is ever appended to a parent while one of its children is still open.

use kuchiki::NodeRef;

use super::dom;

/// The six inline styles the host keeps as tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineTag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
}

impl InlineTag {
    /// Opening order when several styles start on the same leaf
    pub const ALL: [InlineTag; 6] = [
        InlineTag::Bold,
        InlineTag::Italic,
        InlineTag::Underline,
        InlineTag::Strikethrough,
        InlineTag::Subscript,
        InlineTag::Superscript,
    ];

    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            InlineTag::Bold => "b",
            InlineTag::Italic => "i",
            InlineTag::Underline => "u",
            InlineTag::Strikethrough => "s",
            InlineTag::Subscript => "sub",
            InlineTag::Superscript => "sup",
        }
    }

    #[must_use]
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        InlineTag::ALL
            .into_iter()
            .find(|inline| inline.tag_name() == tag)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of `InlineTag`s. Subscript and superscript exclude each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSet(u8);

impl StyleSet {
    pub const EMPTY: StyleSet = StyleSet(0);

    #[must_use]
    pub fn contains(self, tag: InlineTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn insert(&mut self, tag: InlineTag) {
        match tag {
            InlineTag::Subscript => self.remove(InlineTag::Superscript),
            InlineTag::Superscript => self.remove(InlineTag::Subscript),
            _ => {}
        }
        self.0 |= tag.bit();
    }

    pub fn remove(&mut self, tag: InlineTag) {
        self.0 &= !tag.bit();
    }

    #[must_use]
    pub fn with(mut self, tag: InlineTag) -> Self {
        self.insert(tag);
        self
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = InlineTag> {
        InlineTag::ALL
            .into_iter()
            .filter(move |tag| self.contains(*tag))
    }
}

impl FromIterator<InlineTag> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineTag>>(iter: I) -> Self {
        let mut set = StyleSet::EMPTY;
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Folds styled leaves into nested inline markup under `dest`.
#[derive(Debug)]
pub struct StyleRunFolder {
    dest: NodeRef,
    stack: Vec<(InlineTag, NodeRef)>,
    open: StyleSet,
    text: String,
}

impl StyleRunFolder {
    #[must_use]
    pub fn new(dest: NodeRef) -> Self {
        Self {
            dest,
            stack: Vec::new(),
            open: StyleSet::EMPTY,
            text: String::new(),
        }
    }

    /// Add a text leaf carrying exactly `styles`.
    pub fn push_text(&mut self, styles: StyleSet, text: &str) {
        if text.is_empty() {
            return;
        }

        if let Some(index) = self
            .stack
            .iter()
            .position(|(tag, _)| !styles.contains(*tag))
        {
            self.fold_to(index);
        }

        for tag in styles.iter() {
            if !self.open.contains(tag) {
                self.flush_text();
                self.stack.push((tag, dom::new_element(tag.tag_name())));
                self.open.insert(tag);
            }
        }

        self.text.push_str(text);
    }

    /// Add a `<br>` inside whatever is open, without touching style state.
    pub fn push_line_break(&mut self) {
        self.flush_text();
        self.append(dom::new_element("br"));
    }

    /// Close everything still open and hand back the destination.
    pub fn finish(mut self) -> NodeRef {
        self.fold_to(0);
        self.dest
    }

    fn append(&self, node: NodeRef) {
        match self.stack.last() {
            Some((_, top)) => top.append(node),
            None => self.dest.append(node),
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.append(NodeRef::new_text(text));
        }
    }

    /// Close the tag at `index` and every tag above it.
    fn fold_to(&mut self, index: usize) {
        self.flush_text();
        while self.stack.len() > index {
            let Some((tag, node)) = self.stack.pop() else {
                break;
            };
            self.open.remove(tag);
            self.append(node);
        }
    }
}
