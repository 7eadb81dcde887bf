use std::fmt;
use std::path::Path;

use log::debug;
use rusqlite::types::Value as SqlValue;

use crate::types::{DbError, DbResult};

/// One cell of a result row
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Text of the cell as the driver would hand it to a page
    pub fn as_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Integer(i) => i.to_string(),
            Value::Real(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Blob(b) => String::from_utf8_lossy(b).into_owned(),
        }
    }

    /// True when the cell text is a non-empty run of ASCII digits
    pub fn is_digits(&self) -> bool {
        match self {
            Value::Integer(i) => *i >= 0,
            Value::Text(s) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Value::Null,
            SqlValue::Integer(i) => Value::Integer(i),
            SqlValue::Real(f) => Value::Real(f),
            SqlValue::Text(s) => Value::Text(s),
            SqlValue::Blob(b) => Value::Blob(b),
        }
    }
}

/// Column names plus rows, in server order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// First cell of the first row
    pub fn scalar(&self) -> Option<&Value> {
        self.rows.first().and_then(|row| row.first())
    }
}

/// Database the interpreter introspects and issues commands against
pub trait Connection {
    fn list_tables(&self) -> DbResult<Vec<String>>;

    fn list_columns(&self, table: &str) -> DbResult<Vec<String>>;

    fn query(&self, sql: &str) -> DbResult<ResultSet>;

    /// Run a statement that does not return rows, yielding the affected-row count
    fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Result of `SHOW CREATE TABLE`: columns `Table` and `Create Table`
    fn show_create_table(&self, table: &str) -> DbResult<ResultSet>;

    /// Run a single-parameter query and return the first cell as text
    fn lookup_text(&self, sql: &str, id: i64) -> DbResult<Option<String>>;
}

pub struct SqliteConnection {
    conn: rusqlite::Connection,
}

impl SqliteConnection {
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let conn = rusqlite::Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> DbResult<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn inner(&self) -> &rusqlite::Connection {
        &self.conn
    }
}

fn quote_name(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl Connection for SqliteConnection {
    fn list_tables(&self) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt.query_map([], |row| row.get::<_, String>(0))?;
        Ok(names.collect::<Result<Vec<_>, _>>()?)
    }

    fn list_columns(&self, table: &str) -> DbResult<Vec<String>> {
        let sql = format!("PRAGMA table_info({})", quote_name(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
        Ok(names.collect::<Result<Vec<_>, _>>()?)
    }

    fn query(&self, sql: &str) -> DbResult<ResultSet> {
        debug!("query: {}", sql);
        let mut stmt = self.conn.prepare(sql.trim())?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let column_count = columns.len();

        let rows = stmt.query_map([], |row| {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                let value: SqlValue = row.get(i)?;
                values.push(Value::from(value));
            }
            Ok(values)
        })?;

        Ok(ResultSet {
            columns,
            rows: rows.collect::<Result<Vec<_>, _>>()?,
        })
    }

    fn execute(&self, sql: &str) -> DbResult<usize> {
        debug!("execute: {}", sql);
        Ok(self.conn.execute(sql.trim(), [])?)
    }

    fn show_create_table(&self, table: &str) -> DbResult<ResultSet> {
        let mut stmt = self.conn.prepare(
            "SELECT name, sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
        )?;
        let mut rows = stmt.query([table])?;

        match rows.next()? {
            Some(row) => {
                let name: String = row.get(0)?;
                let sql: Option<String> = row.get(1)?;
                Ok(ResultSet {
                    columns: vec!["Table".to_string(), "Create Table".to_string()],
                    rows: vec![vec![Value::Text(name), Value::Text(sql.unwrap_or_default())]],
                })
            }
            None => Err(DbError::Execution(format!("Table '{}' doesn't exist", table))),
        }
    }

    fn lookup_text(&self, sql: &str, id: i64) -> DbResult<Option<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => {
                let value: SqlValue = row.get(0)?;
                Ok(Some(Value::from(value).as_text()))
            }
            None => Ok(None),
        }
    }
}
