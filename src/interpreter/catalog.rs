use std::path::Path;

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::interpreter::connection::Connection;
use crate::types::DbResult;

/// Ordered map of table name to its ordered column names, as seen on the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub tables: LinkedHashMap<String, Vec<String>>,
}

impl SchemaSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Introspect every table and its columns through the connection
    pub fn from_connection(connection: &dyn Connection) -> DbResult<Self> {
        let mut tables = LinkedHashMap::new();
        for table in connection.list_tables()? {
            let columns = connection.list_columns(&table)?;
            tables.insert(table, columns);
        }
        Ok(Self { tables })
    }

    pub fn from_json(text: &str) -> DbResult<Self> {
        Ok(serde_json::from_str::<SchemaSnapshot>(text)?)
    }

    pub fn load(path: &Path) -> DbResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> DbResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add_table(&mut self, name: &str, columns: &[&str]) {
        self.tables.insert(
            name.to_string(),
            columns.iter().map(|c| c.to_string()).collect(),
        );
    }

    /// Table names match exactly
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn columns(&self, table: &str) -> Option<&Vec<String>> {
        self.tables.get(table)
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
