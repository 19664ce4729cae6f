//! Expanding keyed records into body rows.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::config::GridConfig;
use crate::events::BackupIndex;
use crate::node::{attributes, Content, IdAllocator, Table};

/// Flat attribute mapping of one record.
pub type Record = IndexMap<String, String>;

/// Records keyed by their source identifier, in insertion order.
pub type Records = IndexMap<String, Record>;

/// Build [`Records`] from borrowed pairs.
pub fn records<I, S, R, K, V>(rows: I) -> Records
where
    I: IntoIterator<Item = (S, R)>,
    S: Into<String>,
    R: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    rows.into_iter()
        .map(|(id, fields)| (id.into(), attributes(fields)))
        .collect()
}

/// Append one body row per record, one cell per key in `order_keys`.
pub(crate) fn populate(
    table: &mut Table,
    ids: &mut IdAllocator,
    backup: &mut BackupIndex,
    config: &GridConfig,
    order_keys: &[String],
    records: &Records,
    extra_keys: &[&str],
) {
    let body = table.create_body();

    for (record_id, fields) in records {
        let record = Rc::new(fields.clone());
        let row = body.push_row();
        row.set_attr("data-key", record_id.as_str());

        for extra in extra_keys {
            let value = fields
                .get(*extra)
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| config.missing_attribute_marker.clone());
            row.set_attr(format!("data-{extra}"), value);
        }

        for key in order_keys {
            let cell = row.push_cell(ids.cell());
            cell.set_attr("data-key", key.as_str());

            match fields.get(key) {
                Some(value) if !value.is_empty() => {
                    cell.set_attr("data-content", value.as_str());
                    cell.content = Content::Text(value.clone());
                }
                Some(_) => {
                    cell.set_attr("data-content", config.empty_marker.as_str());
                    cell.content = Content::Text(String::new());
                }
                None => {
                    cell.set_attr("data-content", config.empty_marker.as_str());
                }
            }

            backup.push(key.as_str(), cell.id, Rc::clone(&record));
        }

        log::trace!(
            "[grid] populated row '{}' with {} cells",
            record_id,
            order_keys.len()
        );
    }

    log::debug!(
        "[grid] body populated: {} records, backup index now {} entries",
        records.len(),
        backup.len()
    );
}
