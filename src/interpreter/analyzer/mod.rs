mod field_analyzer;
mod join_analyzer;
mod statement_analyzer;

use std::collections::HashMap;

use log::debug;

use crate::interpreter::catalog::SchemaSnapshot;

/// Validation context for one command: the known tables and their fields,
/// extended by JOIN and `AS` aliases while the clauses are checked.
pub struct Analyzer {
    tables: Vec<String>,
    fields: HashMap<String, Vec<String>>,
    primary: String,
    bad_tables: Vec<String>,
    debug: bool,
    trace: Vec<String>,
}

impl Analyzer {
    pub fn new(snapshot: &SchemaSnapshot, primary: &str, debug: bool) -> Self {
        Self {
            tables: snapshot.table_names(),
            fields: snapshot.tables.iter().map(|(t, c)| (t.clone(), c.clone())).collect(),
            primary: primary.to_string(),
            bad_tables: vec![],
            debug,
            trace: vec![],
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Exact, case-sensitive match
    pub fn is_table(&self, name: &str) -> bool {
        self.tables.iter().any(|t| t == name)
    }

    pub fn fields(&self, table: &str) -> Option<&[String]> {
        self.fields.get(table).map(Vec::as_slice)
    }

    /// Field names compare case-insensitively
    pub fn has_field(&self, table: &str, field: &str) -> bool {
        self.fields
            .get(table)
            .is_some_and(|fields| fields.iter().any(|f| f.eq_ignore_ascii_case(field)))
    }

    /// Tables named in "not a field name" errors, in the order first reported
    pub fn bad_tables(&self) -> &[String] {
        &self.bad_tables
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    pub fn take_trace(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace)
    }

    /// Register `alias` as a table carrying the columns of `source`
    fn register_alias(&mut self, alias: &str, source: &str) {
        let columns = self.fields.get(source).cloned().unwrap_or_default();
        if !self.is_table(alias) {
            self.tables.push(alias.to_string());
        }
        self.fields.insert(alias.to_string(), columns);
        self.note(format!("Add '{}' as a table", alias));
    }

    /// `AS` aliases extend the primary table's fields
    fn add_primary_field(&mut self, field: &str) {
        self.fields
            .entry(self.primary.clone())
            .or_default()
            .push(field.to_string());
        self.note(format!("Add '{}' as a field of {}", field, self.primary));
    }

    fn mark_bad(&mut self, table: &str) {
        if !self.bad_tables.iter().any(|t| t == table) {
            self.bad_tables.push(table.to_string());
        }
    }

    fn note(&mut self, message: String) {
        if self.debug {
            debug!("{}", message);
            self.trace.push(message);
        }
    }
}
