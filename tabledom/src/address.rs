//! Resolving (row, cell) coordinates against the live table.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::node::{Cell, Row, Section, Table};

/// `(row, cell)` pair, both zero-based.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Head,
    Body,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => write!(f, "head"),
            Self::Body => write!(f, "body"),
        }
    }
}

impl FromStr for SectionKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(Self::Head),
            "body" => Ok(Self::Body),
            other => Err(GridError::UnknownSection(other.to_string())),
        }
    }
}

impl Table {
    pub fn section(&self, kind: SectionKind) -> Result<&Section, GridError> {
        self.section_opt(kind).ok_or(GridError::MissingSection(kind))
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> Result<&mut Section, GridError> {
        self.section_opt_mut(kind)
            .ok_or(GridError::MissingSection(kind))
    }

    pub fn row(&self, kind: SectionKind, row: usize) -> Result<&Row, GridError> {
        let section = self.section(kind)?;
        section.rows.get(row).ok_or(GridError::RowOutOfRange {
            row,
            rows: section.rows.len(),
        })
    }

    pub fn row_mut(&mut self, kind: SectionKind, row: usize) -> Result<&mut Row, GridError> {
        let section = self.section_mut(kind)?;
        let rows = section.rows.len();
        section
            .rows
            .get_mut(row)
            .ok_or(GridError::RowOutOfRange { row, rows })
    }

    pub fn cell(&self, kind: SectionKind, (row, cell): Coord) -> Result<&Cell, GridError> {
        self.row(kind, row)?
            .cells
            .get(cell)
            .ok_or(GridError::CellOutOfRange { row, cell })
    }

    pub fn cell_mut(&mut self, kind: SectionKind, (row, cell): Coord) -> Result<&mut Cell, GridError> {
        self.row_mut(kind, row)?
            .cells
            .get_mut(cell)
            .ok_or(GridError::CellOutOfRange { row, cell })
    }

    /// Map a table-wide row index (header rows first) to its section.
    pub fn locate_row(&self, row: usize) -> Result<(SectionKind, usize), GridError> {
        let head = self.head_rows().len();
        let body = self.body_rows().len();
        if row < head {
            Ok((SectionKind::Head, row))
        } else if row < head + body {
            Ok((SectionKind::Body, row - head))
        } else {
            Err(GridError::RowOutOfRange {
                row,
                rows: head + body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_names_are_exact() {
        assert_eq!("head".parse::<SectionKind>(), Ok(SectionKind::Head));
        assert_eq!("body".parse::<SectionKind>(), Ok(SectionKind::Body));
        assert_eq!(
            "Body".parse::<SectionKind>(),
            Err(GridError::UnknownSection("Body".to_string()))
        );
        assert!("tfoot".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_locate_row_spans_head_then_body() {
        let mut table = Table::default();
        table.create_head().push_row();
        table.create_body().push_row();
        table.create_body().push_row();

        assert_eq!(table.locate_row(0), Ok((SectionKind::Head, 0)));
        assert_eq!(table.locate_row(2), Ok((SectionKind::Body, 1)));
        assert_eq!(
            table.locate_row(3),
            Err(GridError::RowOutOfRange { row: 3, rows: 3 })
        );
    }
}
