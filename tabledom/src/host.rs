//! Host documents and the attach lifecycle.

use crate::error::GridError;
use crate::grid::{Grid, Mode};

/// A node of the host document a grid can be attached under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostNode {
    pub id: String,
    pub tag: String,
    pub children: Vec<HostNode>,
    /// Names of the tables appended to this node, in append order.
    pub mounted: Vec<String>,
}

impl HostNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn child(mut self, child: HostNode) -> Self {
        self.children.push(child);
        self
    }

    fn matches(&self, locator: &Locator<'_>) -> bool {
        match locator {
            Locator::Id(id) => self.id == *id,
            Locator::Tag(tag) => self.tag == *tag,
        }
    }

    /// Depth-first search, this node first.
    fn find_mut(&mut self, locator: &Locator<'_>) -> Option<&mut HostNode> {
        if self.matches(locator) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(locator))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Locator<'a> {
    Id(&'a str),
    Tag(&'a str),
}

impl<'a> Locator<'a> {
    fn parse(s: &'a str) -> Self {
        match s.strip_prefix('#') {
            Some(id) => Self::Id(id),
            None => Self::Tag(s),
        }
    }
}

/// Root scope locators are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub root: HostNode,
}

impl Document {
    pub fn new(root: HostNode) -> Self {
        Self { root }
    }

    /// Resolve `#id` against node ids, anything else against tag names.
    pub fn query_mut(&mut self, locator: &str) -> Option<&mut HostNode> {
        self.root.find_mut(&Locator::parse(locator))
    }

    pub fn query(&self, locator: &str) -> Option<&HostNode> {
        fn find<'n>(node: &'n HostNode, locator: &Locator<'_>) -> Option<&'n HostNode> {
            if node.matches(locator) {
                return Some(node);
            }
            node.children.iter().find_map(|child| find(child, locator))
        }
        find(&self.root, &Locator::parse(locator))
    }
}

/// Where to attach a grid.
pub enum Target<'a> {
    /// Looked up in `scope` with [`Document::query_mut`].
    Locator {
        scope: &'a mut Document,
        locator: &'a str,
    },
    /// A node the caller already holds.
    Node(&'a mut HostNode),
}

pub type ReadyCallback = Box<dyn FnOnce(&Grid)>;

#[derive(Default)]
pub(crate) struct Lifecycle {
    pub(crate) attached: bool,
    pub(crate) pending: Vec<ReadyCallback>,
}

impl Grid {
    pub fn is_attached(&self) -> bool {
        self.lifecycle.attached
    }

    /// Run `callback` once the grid is attached: immediately if it already
    /// is, otherwise when [`Grid::append_to`] succeeds.
    pub fn done<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&Grid) + 'static,
    {
        if self.lifecycle.attached {
            callback(&*self);
        } else {
            self.lifecycle.pending.push(Box::new(callback));
        }
        self
    }

    /// Append the table under `target`, mark the grid attached and run the
    /// pending `done` callbacks in registration order.
    pub fn append_to(&mut self, target: Target<'_>) -> &mut Self {
        if self.mode == Mode::Bind {
            return self.skip("append_to", GridError::BindingMode("append_to"));
        }

        let host = match target {
            Target::Locator { scope, locator } => match scope.query_mut(locator) {
                Some(node) => node,
                None => {
                    return self.skip(
                        "append_to",
                        GridError::UnresolvedLocator(locator.to_string()),
                    )
                }
            },
            Target::Node(node) => node,
        };
        host.mounted.push(self.table.name().to_string());

        self.lifecycle.attached = true;
        let pending = std::mem::take(&mut self.lifecycle.pending);
        log::debug!(
            "[grid] attached '{}', running {} ready callbacks",
            self.table.name(),
            pending.len()
        );
        for callback in pending {
            callback(&*self);
        }
        self
    }
}
