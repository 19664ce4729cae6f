//! Header declarations and the canonical column order.

use indexmap::IndexMap;

use crate::error::GridError;
use crate::node::{attributes, Attributes, IdAllocator, Table};

/// The three accepted ways to declare header columns.
///
/// Only [`HeaderDeclaration::Keyed`] can carry a `key` attribute, so only
/// keyed declarations feed the column order used by body population and
/// event binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderDeclaration {
    /// `"name,sname,table"`
    Delimited(String),
    /// `["name", "sname", "table"]`
    Ordered(Vec<String>),
    /// `{"Name": {key: "name", width: "40"}, ...}`
    Keyed(IndexMap<String, Attributes>),
}

impl HeaderDeclaration {
    pub fn delimited(names: impl Into<String>) -> Self {
        Self::Delimited(names.into())
    }

    pub fn ordered<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ordered(names.into_iter().map(Into::into).collect())
    }

    pub fn keyed<I, N, A, K, V>(columns: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<String>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Keyed(
            columns
                .into_iter()
                .map(|(name, attrs)| (name.into(), attributes(attrs)))
                .collect(),
        )
    }

    /// Display names in declaration order.
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::Delimited(names) => names.split(',').map(str::to_string).collect(),
            Self::Ordered(names) => names.clone(),
            Self::Keyed(columns) => columns.keys().cloned().collect(),
        }
    }
}

impl From<&str> for HeaderDeclaration {
    fn from(names: &str) -> Self {
        Self::delimited(names)
    }
}

impl From<Vec<String>> for HeaderDeclaration {
    fn from(names: Vec<String>) -> Self {
        Self::Ordered(names)
    }
}

/// Declared header names and column keys.
#[derive(Debug, Clone, Default)]
pub struct HeaderRegistry {
    headers: Vec<String>,
    order_keys: Vec<String>,
}

impl HeaderRegistry {
    /// Display names from the latest declaration.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column keys in canonical order.
    pub fn keys(&self) -> &[String] {
        &self.order_keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.order_keys.iter().any(|k| k == key)
    }

    /// Append `key` to the canonical order. Duplicates are rejected.
    pub fn declare_key(&mut self, key: &str) -> Result<(), GridError> {
        if self.contains(key) {
            return Err(GridError::DuplicateKey(key.to_string()));
        }
        self.order_keys.push(key.to_string());
        Ok(())
    }

    /// Record `declaration` and, unless `hidden`, render it as a new header
    /// row. Returns the keys that were rejected along the way.
    pub(crate) fn apply(
        &mut self,
        declaration: &HeaderDeclaration,
        hidden: bool,
        table: &mut Table,
        ids: &mut IdAllocator,
    ) -> Vec<GridError> {
        self.headers = declaration.names();
        let mut rejected = Vec::new();

        let head = table.create_head();
        let mut row = if hidden { None } else { Some(head.push_row()) };

        match declaration {
            HeaderDeclaration::Keyed(columns) => {
                for (name, attrs) in columns {
                    let mut cell = row.as_mut().map(|row| {
                        let cell = row.push_cell(ids.cell());
                        cell.set_text(name.as_str()).set_attr("title", name.as_str());
                        cell
                    });

                    for (attr, value) in attrs {
                        let declared = if attr == "key" {
                            match self.declare_key(value) {
                                Ok(()) => true,
                                Err(e) => {
                                    rejected.push(e);
                                    false
                                }
                            }
                        } else {
                            false
                        };

                        if let Some(cell) = cell.as_mut() {
                            cell.set_attr(attr.as_str(), value.as_str());
                            if declared {
                                cell.set_attr("data-key", value.as_str());
                            }
                        }
                    }
                }
            }
            HeaderDeclaration::Delimited(_) | HeaderDeclaration::Ordered(_) => {
                if let Some(row) = row.as_mut() {
                    for name in &self.headers {
                        row.push_cell(ids.cell())
                            .set_text(name.as_str())
                            .set_attr("title", name.as_str());
                    }
                }
            }
        }

        log::debug!(
            "[grid] header declared: {} columns, keys={:?}, hidden={}",
            self.headers.len(),
            self.order_keys,
            hidden
        );

        rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_names_split_on_commas() {
        let decl = HeaderDeclaration::from("name,sname,table");
        assert_eq!(decl.names(), vec!["name", "sname", "table"]);
    }

    #[test]
    fn test_keyed_names_keep_declaration_order() {
        let decl = HeaderDeclaration::keyed([
            ("Zeta", vec![("key", "z")]),
            ("Alpha", vec![("key", "a")]),
        ]);
        assert_eq!(decl.names(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut registry = HeaderRegistry::default();
        assert!(registry.declare_key("a").is_ok());
        assert_eq!(
            registry.declare_key("a"),
            Err(GridError::DuplicateKey("a".to_string()))
        );
        assert_eq!(registry.keys(), ["a".to_string()]);
    }
}
