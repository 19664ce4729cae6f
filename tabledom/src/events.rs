//! Keyed event binding over the cells created during body population.

use std::rc::Rc;

use crate::body::Record;
use crate::node::CellId;

/// One populated (row, key) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    pub key: String,
    pub cell: CellId,
    pub record: Rc<Record>,
}

/// Append-only log of every cell body population created, in creation order.
///
/// Entries are never removed, so an entry may point at a cell that has
/// since been removed from the table.
#[derive(Debug, Clone, Default)]
pub struct BackupIndex {
    entries: Vec<BackupEntry>,
}

impl BackupIndex {
    pub(crate) fn push(&mut self, key: impl Into<String>, cell: CellId, record: Rc<Record>) {
        self.entries.push(BackupEntry {
            key: key.into(),
            cell,
            record,
        });
    }

    pub fn entries(&self) -> &[BackupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for `key`, in creation order.
    pub fn matching<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a BackupEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.key == key)
    }
}
