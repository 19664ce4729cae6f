use std::fmt;

use crate::address::{Coord, SectionKind};
use crate::body::{self, Record, Records};
use crate::clipboard::ClipboardSnapshot;
use crate::config::GridConfig;
use crate::error::{GridError, Skipped};
use crate::events::BackupIndex;
use crate::header::{HeaderDeclaration, HeaderRegistry};
use crate::host::Lifecycle;
use crate::node::{Attributes, Cell, CellId, IdAllocator, Row, Table};

/// Whether the grid built its table or wraps an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Bind,
}

/// A table under construction.
///
/// Every operation returns the grid so calls can be chained. Operations
/// that cannot be applied are skipped and recorded in
/// [`Grid::diagnostics`]; they never abort the chain.
pub struct Grid {
    pub(crate) config: GridConfig,
    pub(crate) mode: Mode,
    pub(crate) table: Table,
    pub(crate) ids: IdAllocator,
    pub(crate) header: HeaderRegistry,
    pub(crate) backup: BackupIndex,
    pub(crate) clipboard: Option<ClipboardSnapshot>,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) new_column: Vec<CellId>,
    pub(crate) new_cell: Option<CellId>,
    diagnostics: Vec<Skipped>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("mode", &self.mode)
            .field("table", &self.table)
            .field("order_keys", &self.header.keys())
            .field("backup", &self.backup.len())
            .field("attached", &self.lifecycle.attached)
            .field("pending", &self.lifecycle.pending.len())
            .finish()
    }
}

impl Grid {
    /// Start a fresh table carrying `attrs` on its root.
    pub fn create(attrs: Attributes) -> Self {
        Self::create_with(attrs, GridConfig::default())
    }

    pub fn create_with(attrs: Attributes, config: GridConfig) -> Self {
        Self::with_table(Table::new(attrs), Mode::Create, config)
    }

    /// Wrap an existing table. Header and body setup are unavailable.
    pub fn bind(table: Table) -> Self {
        Self::bind_with(table, GridConfig::default())
    }

    pub fn bind_with(table: Table, config: GridConfig) -> Self {
        Self::with_table(table, Mode::Bind, config)
    }

    fn with_table(table: Table, mode: Mode, config: GridConfig) -> Self {
        Self {
            config,
            mode,
            ids: IdAllocator::after(&table),
            table,
            header: HeaderRegistry::default(),
            backup: BackupIndex::default(),
            clipboard: None,
            lifecycle: Lifecycle::default(),
            new_column: Vec::new(),
            new_cell: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn debug_mode(&mut self, debug: bool) -> &mut Self {
        self.config.debug = debug;
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    // Header and body

    /// Declare the header columns. `hidden` records the column keys
    /// without rendering a header row.
    pub fn set_header(
        &mut self,
        declaration: impl Into<Option<HeaderDeclaration>>,
        hidden: bool,
    ) -> &mut Self {
        if self.mode == Mode::Bind {
            return self.skip("set_header", GridError::BindingMode("set_header"));
        }
        let Some(declaration) = declaration.into() else {
            return self;
        };

        let rejected = self
            .header
            .apply(&declaration, hidden, &mut self.table, &mut self.ids);
        for reason in rejected {
            self.skip("set_header", reason);
        }
        self
    }

    /// Append one body row per record, cells in canonical key order.
    /// `extra_keys` are copied onto each row as `data-<name>` attributes.
    pub fn set_body(&mut self, records: &Records, extra_keys: &[&str]) -> &mut Self {
        if self.mode == Mode::Bind {
            return self.skip("set_body", GridError::BindingMode("set_body"));
        }
        body::populate(
            &mut self.table,
            &mut self.ids,
            &mut self.backup,
            &self.config,
            self.header.keys(),
            records,
            extra_keys,
        );
        self
    }

    // Events

    /// Call `callback` for every populated cell of column `key`, in the
    /// order the cells were created.
    pub fn on<F>(&mut self, key: &str, mut callback: F) -> &mut Self
    where
        F: FnMut(&mut Cell, &Record),
    {
        if !self.header.contains(key) {
            return self.skip("on", GridError::UndeclaredKey(key.to_string()));
        }

        let targets: Vec<_> = self
            .backup
            .matching(key)
            .map(|entry| (entry.cell, entry.record.clone()))
            .collect();

        for (id, record) in targets {
            match self.table.find_cell_mut(id) {
                Some(cell) => callback(cell, record.as_ref()),
                None => {
                    self.skip("on", GridError::StaleCell(id));
                }
            }
        }
        self
    }

    // Accessors

    pub fn order_keys(&self) -> &[String] {
        self.header.keys()
    }

    pub fn headers(&self) -> &[String] {
        self.header.headers()
    }

    pub fn backup_index(&self) -> &BackupIndex {
        &self.backup
    }

    /// Cells created by the last `set_empty_column`, header first.
    pub fn new_column(&self) -> &[CellId] {
        &self.new_column
    }

    /// The cell created by the last `set_cell`.
    pub fn new_cell(&self) -> Option<CellId> {
        self.new_cell
    }

    pub fn clipboard(&self) -> Option<&ClipboardSnapshot> {
        self.clipboard.as_ref()
    }

    pub fn row(&self, section: SectionKind, row: usize) -> Result<&Row, GridError> {
        self.table.row(section, row)
    }

    pub fn cell(&self, section: SectionKind, at: Coord) -> Result<&Cell, GridError> {
        self.table.cell(section, at)
    }

    pub fn cell_mut(&mut self, section: SectionKind, at: Coord) -> Result<&mut Cell, GridError> {
        self.table.cell_mut(section, at)
    }

    pub fn cell_by_id(&self, id: CellId) -> Option<&Cell> {
        self.table.find_cell(id)
    }

    pub fn cell_by_id_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.table.find_cell_mut(id)
    }

    // Diagnostics

    /// Operations skipped so far, oldest first.
    pub fn diagnostics(&self) -> &[Skipped] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Skipped> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Record a skipped operation and keep the chain going.
    pub(crate) fn skip(&mut self, operation: &'static str, reason: GridError) -> &mut Self {
        if self.config.debug || reason.always_reported() {
            log::warn!("[grid] {operation} skipped: {reason}");
        } else {
            log::trace!("[grid] {operation} skipped: {reason}");
        }
        self.diagnostics.push(Skipped { operation, reason });
        self
    }

    /// Record `result`'s error, if any.
    pub(crate) fn note<T>(&mut self, operation: &'static str, result: Result<T, GridError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                self.skip(operation, reason);
                None
            }
        }
    }
}
