//! Positional insertion and removal of rows, cells and columns.
//!
//! None of these operations touch the canonical key order. Inserting or
//! removing cells by hand can leave declared keys out of step with
//! physical column positions; keeping them aligned is up to the caller.

use std::str::FromStr;

use crate::address::{Coord, SectionKind};
use crate::error::GridError;
use crate::grid::Grid;
use crate::node::{Cell, CellId, Content, Node};

/// A (column key, content) pair for a single inserted cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    pub key: String,
    pub content: Content,
}

impl ColumnEntry {
    pub fn text(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: Content::Text(text.into()),
        }
    }

    /// Content attached as a child node instead of rendered text.
    pub fn node(key: impl Into<String>, node: Node) -> Self {
        Self {
            key: key.into(),
            content: Content::Children(vec![node]),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for ColumnEntry {
    fn from((key, text): (K, V)) -> Self {
        Self::text(key, text)
    }
}

impl Grid {
    /// Insertion operations targeting `section`.
    pub fn insert_into(&mut self, section: SectionKind) -> Inserter<'_> {
        Inserter {
            grid: self,
            section: Ok(section),
        }
    }

    /// Like [`Grid::insert_into`], with the section given by name
    /// (`"head"` or `"body"`).
    pub fn insert_into_named(&mut self, section: &str) -> Inserter<'_> {
        Inserter {
            grid: self,
            section: section.parse(),
        }
    }

    /// Removal operations for `target`.
    pub fn remove(&mut self, target: RemoveTarget) -> Remover<'_> {
        Remover {
            grid: self,
            target: Ok(target),
        }
    }

    /// Like [`Grid::remove`], with the target given by name.
    pub fn remove_named(&mut self, target: &str) -> Remover<'_> {
        Remover {
            grid: self,
            target: target.parse(),
        }
    }

    /// Insert one tagged cell, returning its handle.
    fn insert_entry(
        &mut self,
        section: SectionKind,
        entry: ColumnEntry,
        (row, index): Coord,
    ) -> Result<CellId, GridError> {
        let mut cell = self.ids.cell();
        cell.set_attr("data-key", entry.key);
        cell.content = entry.content;

        let id = self
            .table
            .row_mut(section, row)?
            .insert_cell(index, cell)
            .map(|cell| cell.id)
            .ok_or(GridError::CellOutOfRange { row, cell: index })?;

        self.new_cell = Some(id);
        Ok(id)
    }

    fn placeholder(&self) -> ColumnEntry {
        ColumnEntry::text(
            self.config.placeholder_key.as_str(),
            self.config.placeholder_text(),
        )
    }
}

#[must_use = "an inserter does nothing until one of its operations is called"]
pub struct Inserter<'a> {
    grid: &'a mut Grid,
    section: Result<SectionKind, GridError>,
}

impl<'a> Inserter<'a> {
    fn section(&mut self, operation: &'static str) -> Option<SectionKind> {
        let section = self.section.clone();
        self.grid.note(operation, section)
    }

    /// Insert a cell tagged with `entry`'s key at `(row, cell)`.
    pub fn set_cell(self, entry: impl Into<ColumnEntry>, at: Coord) -> &'a mut Grid {
        self.set_cell_inner(entry.into(), at).0
    }

    /// Like [`Inserter::set_cell`], returning the created cell's handle.
    pub fn set_cell_returning(self, entry: impl Into<ColumnEntry>, at: Coord) -> Option<CellId> {
        self.set_cell_inner(entry.into(), at).1
    }

    fn set_cell_inner(mut self, entry: ColumnEntry, at: Coord) -> (&'a mut Grid, Option<CellId>) {
        let Some(section) = self.section("set_cell") else {
            return (self.grid, None);
        };
        let result = self.grid.insert_entry(section, entry, at);
        let id = self.grid.note("set_cell", result);
        (self.grid, id)
    }

    /// Insert `entries[i]` at `at[i]` for every i. Both lists must have the
    /// same length; a bad coordinate skips only that entry.
    pub fn set_cells<E>(mut self, entries: Vec<E>, at: &[Coord]) -> &'a mut Grid
    where
        E: Into<ColumnEntry>,
    {
        let Some(section) = self.section("set_cells") else {
            return self.grid;
        };
        if entries.len() != at.len() {
            return self.grid.skip(
                "set_cells",
                GridError::ShapeMismatch {
                    expected: entries.len(),
                    actual: at.len(),
                },
            );
        }

        for (entry, coord) in entries.into_iter().zip(at) {
            let result = self.grid.insert_entry(section, entry.into(), *coord);
            self.grid.note("set_cells", result);
        }
        self.grid
    }

    /// Insert a placeholder cell at `index` in the first header row and in
    /// every body row. The created cells are available through
    /// [`Grid::new_column`].
    pub fn set_empty_column(self, index: usize) -> &'a mut Grid {
        let grid = self.grid;
        let mut column = Vec::new();

        let head = grid.insert_entry(SectionKind::Head, grid.placeholder(), (0, index));
        column.extend(grid.note("set_empty_column", head));

        for row in 0..grid.table.body_rows().len() {
            let cell = grid.insert_entry(SectionKind::Body, grid.placeholder(), (row, index));
            column.extend(grid.note("set_empty_column", cell));
        }

        log::debug!("[grid] empty column at {} ({} cells)", index, column.len());
        grid.new_column = column;
        grid
    }

    /// Insert a row at `index` with one empty cell per column key.
    pub fn set_row(self, index: usize) -> &'a mut Grid {
        self.set_row_with(index, |_| {})
    }

    /// Like [`Inserter::set_row`], calling `callback` once per created cell
    /// in canonical key order.
    pub fn set_row_with<F>(mut self, index: usize, mut callback: F) -> &'a mut Grid
    where
        F: FnMut(&mut Cell),
    {
        let Some(section) = self.section("set_row") else {
            return self.grid;
        };
        let grid = self.grid;

        let row = grid.table.section_mut(section).and_then(|target| {
            let rows = target.rows.len();
            target
                .insert_row(index)
                .ok_or(GridError::RowOutOfRange { row: index, rows })
        });
        let row = match row {
            Ok(row) => row,
            Err(reason) => return grid.skip("set_row", reason),
        };

        for key in grid.header.keys() {
            let mut cell = grid.ids.cell();
            cell.set_attr("data-key", key.as_str());
            callback(row.push_cell(cell));
        }
        grid
    }
}

/// What a [`Remover`] deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveTarget {
    Row,
    Cell,
    Column,
}

impl FromStr for RemoveTarget {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Self::Row),
            "cell" => Ok(Self::Cell),
            "column" => Ok(Self::Column),
            other => Err(GridError::UnknownTarget(other.to_string())),
        }
    }
}

#[must_use = "a remover does nothing until one of its operations is called"]
pub struct Remover<'a> {
    grid: &'a mut Grid,
    target: Result<RemoveTarget, GridError>,
}

impl<'a> Remover<'a> {
    /// Remove the cell at `index` from every body row. Header cells are
    /// left in place.
    pub fn column(self, index: usize) -> &'a mut Grid {
        let grid = self.grid;
        let head = grid.table.head_rows().len();
        for row in 0..grid.table.body_rows().len() {
            let result = remove_cell(grid, head + row, index);
            grid.note("remove column", result);
        }
        grid
    }

    /// Remove at `coords`: `[row]` for rows, `[row, cell]` for cells.
    /// Rows are addressed across the whole table, header rows first.
    pub fn at(self, coords: &[usize]) -> &'a mut Grid {
        let Remover { grid, target } = self;
        let Some(target) = grid.note("remove", target) else {
            return grid;
        };
        let result = remove_at(grid, target, coords);
        grid.note("remove", result);
        grid
    }

    /// Apply [`Remover::at`] to each coordinate list in turn. Indices are
    /// resolved after the previous removals.
    pub fn at_each<I, C>(self, coords: I) -> &'a mut Grid
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[usize]>,
    {
        let Remover { grid, target } = self;
        let Some(target) = grid.note("remove", target) else {
            return grid;
        };
        for coord in coords {
            let result = remove_at(grid, target, coord.as_ref());
            grid.note("remove", result);
        }
        grid
    }
}

fn remove_at(grid: &mut Grid, target: RemoveTarget, coords: &[usize]) -> Result<(), GridError> {
    match (target, coords) {
        (RemoveTarget::Row, [row, ..]) => {
            let (section, local) = grid.table.locate_row(*row)?;
            grid.table.section_mut(section)?.delete_row(local);
            Ok(())
        }
        (RemoveTarget::Cell, [row, cell]) => remove_cell(grid, *row, *cell),
        (RemoveTarget::Row, _) => Err(GridError::ShapeMismatch {
            expected: 1,
            actual: coords.len(),
        }),
        (RemoveTarget::Cell, _) => Err(GridError::ShapeMismatch {
            expected: 2,
            actual: coords.len(),
        }),
        (RemoveTarget::Column, _) => Err(GridError::UnknownTarget("column".to_string())),
    }
}

/// Remove one cell addressed by table-wide row index.
fn remove_cell(grid: &mut Grid, row: usize, cell: usize) -> Result<(), GridError> {
    let (section, local) = grid.table.locate_row(row)?;
    grid.table
        .row_mut(section, local)?
        .delete_cell(cell)
        .map(|_| ())
        .ok_or(GridError::CellOutOfRange { row, cell })
}
