use std::fmt;
use std::path::Path;

use log::{info, warn};

use crate::interpreter::connection::Connection;
use crate::types::DbResult;

/// Verbs a script may run; anything else is reported and skipped
const SCRIPT_VERBS: &[&str] = &["UPDATE", "INSERT", "DELETE", "CREATE", "DROP"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Executed(usize),
    Unsupported,
    Failed(String),
}

impl fmt::Display for SourceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOutcome::Executed(rows) => write!(f, "{} rows affected", rows),
            SourceOutcome::Unsupported => f.write_str("Unsupported"),
            SourceOutcome::Failed(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResult {
    pub statement: String,
    pub outcome: SourceOutcome,
}

/// Split a script into statements at semicolons outside quotes, dropping `--` comments
pub fn split_script(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut statements = vec![];
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match quote {
            Some(q) => {
                current.push(c);
                if c == '\\' && i + 1 < chars.len() {
                    current.push(chars[i + 1]);
                    i += 1;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    current.push(c);
                }
                '-' if chars.get(i + 1) == Some(&'-')
                    && chars.get(i + 2).map_or(true, |n| n.is_whitespace()) =>
                {
                    while i < chars.len() && chars[i] != '\n' {
                        i += 1;
                    }
                    continue;
                }
                ';' => {
                    push_statement(&mut statements, &current);
                    current.clear();
                }
                _ => current.push(c),
            },
        }
        i += 1;
    }

    push_statement(&mut statements, &current);
    statements
}

fn push_statement(statements: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
}

/// Run every statement of a script in order, continuing past failures
pub fn run_script(connection: &dyn Connection, text: &str) -> Vec<SourceResult> {
    split_script(text)
        .into_iter()
        .map(|statement| {
            let verb = statement
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_uppercase();

            let outcome = if !SCRIPT_VERBS.contains(&verb.as_str()) {
                SourceOutcome::Unsupported
            } else {
                match connection.execute(&statement) {
                    Ok(rows) => {
                        info!("script: {} ({} rows)", statement, rows);
                        SourceOutcome::Executed(rows)
                    }
                    Err(err) => {
                        warn!("script statement failed: {}: {}", statement, err);
                        SourceOutcome::Failed(err.to_string())
                    }
                }
            };

            SourceResult { statement, outcome }
        })
        .collect()
}

pub fn run_file(connection: &dyn Connection, path: impl AsRef<Path>) -> DbResult<Vec<SourceResult>> {
    let text = std::fs::read_to_string(path)?;
    Ok(run_script(connection, &text))
}
