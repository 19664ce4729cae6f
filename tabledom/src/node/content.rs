use super::Attributes;

/// What a cell (or a nested node) renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Node>),
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The text content, if this is plain text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attach a child node, replacing text content.
    pub(crate) fn push_child(&mut self, node: Node) {
        match self {
            Self::Children(children) => children.push(node),
            _ => *self = Self::Children(vec![node]),
        }
    }
}

/// A non-text node placed inside a cell (a link, an icon, a nested widget).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub attrs: Attributes,
    pub content: Content,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.content.push_child(child);
        self
    }
}
