//! In-memory table tree the grid renders into.
//!
//! The tree mirrors what a document table looks like: a root table with an
//! optional header section and an optional body section, rows inside each
//! section, cells inside each row. All positional edits go through the
//! small insert/delete surface below; anything higher level lives in the
//! grid.

mod cell;
mod content;

use indexmap::IndexMap;

pub use cell::{Cell, CellId};
pub(crate) use cell::IdAllocator;
pub use content::{Content, Node};

use crate::address::SectionKind;

/// String attributes in insertion order.
pub type Attributes = IndexMap<String, String>;

/// Build [`Attributes`] from borrowed pairs.
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub attrs: Attributes,
    pub cells: Vec<Cell>,
}

impl Row {
    /// The identifier the row is tagged with (`data-key`).
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

    /// Insert `cell` at `index`; `index == len` appends.
    /// Returns `None` (dropping the cell) when `index` is past the end.
    pub fn insert_cell(&mut self, index: usize, cell: Cell) -> Option<&mut Cell> {
        if index > self.cells.len() {
            return None;
        }
        self.cells.insert(index, cell);
        self.cells.get_mut(index)
    }

    pub fn push_cell(&mut self, cell: Cell) -> &mut Cell {
        let index = self.cells.len();
        self.cells.push(cell);
        &mut self.cells[index]
    }

    /// Insert `cell` before the cell at `index`, appending when there is none.
    pub fn insert_before(&mut self, index: usize, cell: Cell) -> &mut Cell {
        let index = index.min(self.cells.len());
        self.cells.insert(index, cell);
        &mut self.cells[index]
    }

    pub fn delete_cell(&mut self, index: usize) -> Option<Cell> {
        (index < self.cells.len()).then(|| self.cells.remove(index))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub rows: Vec<Row>,
}

impl Section {
    /// Insert an empty row at `index`; `index == len` appends.
    pub fn insert_row(&mut self, index: usize) -> Option<&mut Row> {
        if index > self.rows.len() {
            return None;
        }
        self.rows.insert(index, Row::default());
        self.rows.get_mut(index)
    }

    pub fn push_row(&mut self) -> &mut Row {
        self.rows.push(Row::default());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub fn delete_row(&mut self, index: usize) -> Option<Row> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub attrs: Attributes,
    pub head: Option<Section>,
    pub body: Option<Section>,
}

impl Table {
    pub fn new(attrs: Attributes) -> Self {
        Self {
            attrs,
            ..Default::default()
        }
    }

    /// Name the host refers to this table by: its `id` attribute, else `table`.
    pub fn name(&self) -> &str {
        self.attrs.get("id").map(String::as_str).unwrap_or("table")
    }

    /// The header section, created on first use.
    pub fn create_head(&mut self) -> &mut Section {
        self.head.get_or_insert_with(Section::default)
    }

    /// The body section, created on first use.
    pub fn create_body(&mut self) -> &mut Section {
        self.body.get_or_insert_with(Section::default)
    }

    pub fn section_opt(&self, kind: SectionKind) -> Option<&Section> {
        match kind {
            SectionKind::Head => self.head.as_ref(),
            SectionKind::Body => self.body.as_ref(),
        }
    }

    pub fn section_opt_mut(&mut self, kind: SectionKind) -> Option<&mut Section> {
        match kind {
            SectionKind::Head => self.head.as_mut(),
            SectionKind::Body => self.body.as_mut(),
        }
    }

    /// All rows in document order: header rows, then body rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.head
            .iter()
            .chain(self.body.iter())
            .flat_map(|section| section.rows.iter())
    }

    pub fn head_rows(&self) -> &[Row] {
        self.head.as_ref().map(|s| s.rows.as_slice()).unwrap_or_default()
    }

    pub fn body_rows(&self) -> &[Row] {
        self.body.as_ref().map(|s| s.rows.as_slice()).unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.head_rows().len() + self.body_rows().len()
    }

    pub fn find_cell(&self, id: CellId) -> Option<&Cell> {
        self.rows()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.id == id)
    }

    pub fn find_cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.head
            .iter_mut()
            .chain(self.body.iter_mut())
            .flat_map(|section| section.rows.iter_mut())
            .flat_map(|row| row.cells.iter_mut())
            .find(|cell| cell.id == id)
    }
}
