use std::fmt;

use super::{Attributes, Content, Node};

/// Stable handle to a cell, valid for as long as the cell stays in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) u64);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}", self.0)
    }
}

/// Hands out cell ids for one grid. Never reuses an id.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Start after the highest id already present in `table`.
    pub(crate) fn after(table: &super::Table) -> Self {
        let next = table
            .rows()
            .flat_map(|row| row.cells.iter())
            .map(|cell| cell.id.0 + 1)
            .max()
            .unwrap_or(0);
        Self { next }
    }

    pub(crate) fn next(&mut self) -> CellId {
        let id = CellId(self.next);
        self.next += 1;
        id
    }

    pub(crate) fn cell(&mut self) -> Cell {
        Cell::new(self.next())
    }

    /// Deep copy of `cell` under a fresh id.
    pub(crate) fn duplicate(&mut self, cell: &Cell) -> Cell {
        Cell {
            id: self.next(),
            ..cell.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    pub attrs: Attributes,
    pub content: Content,
}

impl Cell {
    pub fn new(id: CellId) -> Self {
        Self {
            id,
            attrs: Attributes::new(),
            content: Content::None,
        }
    }

    /// The column key this cell is tagged with (`data-key`).
    pub fn key(&self) -> Option<&str> {
        self.attr("data-key")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn append_child(&mut self, node: Node) -> &mut Self {
        self.content.push_child(node);
        self
    }

    /// Equal attributes and content, ignoring identity.
    pub fn same_structure(&self, other: &Cell) -> bool {
        self.attrs == other.attrs && self.content == other.content
    }
}
