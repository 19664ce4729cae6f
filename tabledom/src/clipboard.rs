//! Single-slot column clipboard.

use crate::address::SectionKind;
use crate::error::GridError;
use crate::grid::Grid;
use crate::node::{Cell, Row};

/// Deep copy of one column, one slot per header row and per body row.
///
/// A slot is `None` when its row had no cell at the copied index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    pub index: usize,
    pub head: Vec<Option<Cell>>,
    pub body: Vec<Option<Cell>>,
}

impl ClipboardSnapshot {
    pub fn slots(&self, section: SectionKind) -> &[Option<Cell>] {
        match section {
            SectionKind::Head => &self.head,
            SectionKind::Body => &self.body,
        }
    }
}

fn snapshot(rows: &[Row], index: usize) -> Vec<Option<Cell>> {
    rows.iter().map(|row| row.cells.get(index).cloned()).collect()
}

impl Grid {
    /// Copy column `index` (default from config) of the header and body into
    /// the clipboard, replacing whatever it held.
    pub fn copy(&mut self, index: impl Into<Option<usize>>) -> &mut Self {
        let index = index.into().unwrap_or(self.config.default_clip_index);
        let head = self.table.head_rows().len();

        let copied = ClipboardSnapshot {
            index,
            head: snapshot(self.table.head_rows(), index),
            body: snapshot(self.table.body_rows(), index),
        };

        let missing: Vec<usize> = copied
            .head
            .iter()
            .chain(copied.body.iter())
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(row, _)| row)
            .collect();

        log::debug!(
            "[grid] copied column {} ({} header, {} body rows)",
            index,
            head,
            copied.body.len()
        );
        self.clipboard = Some(copied);

        for row in missing {
            self.skip("copy", GridError::CellOutOfRange { row, cell: index });
        }
        self
    }

    /// Insert a fresh copy of the clipboard before column `index` (default
    /// from config) of each header and body row. The clipboard is kept and
    /// can be pasted again.
    pub fn paste(&mut self, index: impl Into<Option<usize>>) -> &mut Self {
        let index = index.into().unwrap_or(self.config.default_clip_index);
        let Some(clipboard) = self.clipboard.take() else {
            return self.skip("paste", GridError::EmptyClipboard);
        };

        let mut skipped = Vec::new();
        let mut offset = 0;
        for section in [SectionKind::Head, SectionKind::Body] {
            let slots = clipboard.slots(section);
            let Some(target) = self.table.section_opt_mut(section) else {
                continue;
            };
            for (row, target_row) in target.rows.iter_mut().enumerate() {
                match slots.get(row).and_then(Option::as_ref) {
                    Some(cell) => {
                        target_row.insert_before(index, self.ids.duplicate(cell));
                    }
                    None => skipped.push(offset + row),
                }
            }
            offset += target.rows.len();
        }

        self.clipboard = Some(clipboard);
        for row in skipped {
            self.skip("paste", GridError::NothingToPaste(row));
        }
        self
    }
}
