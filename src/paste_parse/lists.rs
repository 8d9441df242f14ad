//! List context shared by the office normalizers.
//!
//! Both office dialects describe lists as a flat sequence of blocks, each
//! tagged with a nesting depth and a bullet/number kind. `ListStack` rebuilds
//! the nesting: one open `<ol>`/`<ul>` per level, innermost last. Closing a
//! level appends it to its parent list; closing the outermost level hands it
//! back to the caller to place in the document.

use kuchiki::NodeRef;

use super::dom;

#[derive(Debug)]
struct ListLevel {
    node: NodeRef,
    ordered: bool,
}

#[derive(Debug, Default)]
pub struct ListStack {
    levels: Vec<ListLevel>,
}

impl ListStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Bring the stack to `depth` open levels of the given kind.
    ///
    /// Deeper levels are closed into their parents. The level at `depth` is
    /// closed and reopened when its kind differs. Missing levels are opened
    /// with the requested kind. Returns the outermost list if it had to be
    /// closed along the way.
    pub fn reconcile(&mut self, depth: usize, ordered: bool) -> Option<NodeRef> {
        let depth = depth.max(1);
        let mut closed_root = None;

        while let Some(innermost) = self.levels.last() {
            let current = self.levels.len();
            let too_deep = current > depth;
            let wrong_kind = current == depth && innermost.ordered != ordered;
            if !(too_deep || wrong_kind) {
                break;
            }
            if let Some(root) = self.close_innermost() {
                closed_root = Some(root);
            }
        }

        while self.levels.len() < depth {
            self.levels.push(ListLevel {
                node: dom::new_element(if ordered { "ol" } else { "ul" }),
                ordered,
            });
        }
        closed_root
    }

    /// Append an item to the innermost open list.
    pub fn push_item(&self, item: NodeRef) {
        if let Some(innermost) = self.levels.last() {
            innermost.node.append(item);
        }
    }

    /// Close every level, returning the outermost list.
    pub fn flatten(&mut self) -> Option<NodeRef> {
        let mut root = None;
        while !self.levels.is_empty() {
            root = self.close_innermost();
        }
        root
    }

    /// Pop the innermost level into its parent; returns it when it was the
    /// outermost.
    fn close_innermost(&mut self) -> Option<NodeRef> {
        let closed = self.levels.pop()?;
        match self.levels.last() {
            Some(parent) => {
                parent.node.append(closed.node);
                None
            }
            None => Some(closed.node),
        }
    }
}
