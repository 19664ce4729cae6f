//! Building and editing tables keyed by column.
//!
//! A [`Grid`] owns a [`Table`] and the bookkeeping around it: the column
//! keys declared by the header, the log of populated cells used for keyed
//! event binding, a one-column clipboard, and callbacks waiting for the
//! grid to be attached to a host [`Document`].
//!
//! ```ignore
//! use tabledom::prelude::*;
//!
//! let mut grid = Grid::create(attributes([("id", "users")]));
//! grid.set_header(
//!         HeaderDeclaration::keyed([
//!             ("Name", vec![("key", "name")]),
//!             ("Email", vec![("key", "email")]),
//!         ]),
//!         false,
//!     )
//!     .set_body(&records([("u1", vec![("name", "Ada")])]), &["name"])
//!     .on("email", |cell, _| { cell.set_text("-"); });
//! ```

pub mod address;
pub mod body;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod header;
pub mod host;
pub mod mutate;
pub mod node;

pub use address::{Coord, SectionKind};
pub use body::{records, Record, Records};
pub use clipboard::ClipboardSnapshot;
pub use config::GridConfig;
pub use error::{GridError, Skipped};
pub use events::{BackupEntry, BackupIndex};
pub use grid::{Grid, Mode};
pub use header::{HeaderDeclaration, HeaderRegistry};
pub use host::{Document, HostNode, Target};
pub use mutate::{ColumnEntry, Inserter, RemoveTarget, Remover};
pub use node::{attributes, Attributes, Cell, CellId, Content, Node, Row, Section, Table};

pub mod prelude {
    pub use crate::{
        attributes, records, Cell, ColumnEntry, Document, Grid, GridConfig, HeaderDeclaration,
        HostNode, Node, RemoveTarget, SectionKind, Target,
    };
}
