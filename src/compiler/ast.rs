use std::fmt;

use crate::compiler::reserved::is_reserved_word;
use crate::types::DUAL_TABLE;

/// Command verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Select,
    Insert,
    Update,
    Delete,
    Show,
    Alter,
    Source,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Select => "SELECT",
            Verb::Insert => "INSERT",
            Verb::Update => "UPDATE",
            Verb::Delete => "DELETE",
            Verb::Show => "SHOW",
            Verb::Alter => "ALTER",
            Verb::Source => "SOURCE",
        }
    }

    /// Only SELECT may be issued without the administrator capability
    pub fn requires_admin(&self) -> bool {
        !matches!(self, Verb::Select)
    }

    /// Verbs whose result is a row set rather than an affected-row count
    pub fn is_query(&self) -> bool {
        matches!(self, Verb::Select | Verb::Show)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed LIMIT clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub count: u64,
    pub offset: Option<u64>,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} OFFSET {}", self.count, offset),
            None => write!(f, "{}", self.count),
        }
    }
}

/// One classified command, carved into clause texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub verb: Verb,
    pub explain: bool,
    pub table: Option<String>,
    pub modifier: String,            // DELETE modifier or target list
    pub ignore: bool,                // INSERT IGNORE
    pub operands: String,
    pub operand_list: Vec<String>,   // SELECT operands split on top-level commas
    pub join: String,
    pub where_clause: Option<String>,
    pub group_by: Option<String>,
    pub having: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<Limit>,
    pub procedure: Option<String>,
    pub rest: String,                // trailing text of SHOW and ALTER
    pub path: Option<String>,        // SOURCE file
}

impl Statement {
    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            explain: false,
            table: None,
            modifier: String::new(),
            ignore: false,
            operands: String::new(),
            operand_list: Vec::new(),
            join: String::new(),
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
            procedure: None,
            rest: String::new(),
            path: None,
        }
    }

    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(DUAL_TABLE)
    }

    pub fn has_table(&self) -> bool {
        self.table.as_deref().is_some_and(|t| !t.eq_ignore_ascii_case(DUAL_TABLE))
    }

    /// Table name as it must be written back into SQL; anything but a plain
    /// non-reserved word is back-quoted
    pub fn quoted_table(&self) -> String {
        quote_name(self.table_name())
    }

    /// True when the operand list asks only for the row count
    pub fn is_count_only(&self) -> bool {
        let compact: String = self.operands.chars().filter(|c| !c.is_whitespace()).collect();
        compact.eq_ignore_ascii_case("COUNT(*)")
    }
}

pub fn quote_name(name: &str) -> String {
    let plain = name.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_alphanumeric() || c == '_')
        && !is_reserved_word(name);
    if plain {
        name.to_string()
    } else {
        format!("`{}`", name)
    }
}

fn push_clause(out: &mut String, keyword: &str, clause: &Option<String>) {
    if let Some(text) = clause {
        out.push(' ');
        out.push_str(keyword);
        if !text.is_empty() {
            out.push(' ');
            out.push_str(text);
        }
    }
}

fn push_text(out: &mut String, text: &str) {
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if self.explain {
            out.push_str("EXPLAIN ");
        }
        out.push_str(self.verb.as_str());
        let table = self.quoted_table();

        match self.verb {
            Verb::Select => {
                push_text(&mut out, &self.operands);
                if self.has_table() {
                    out.push_str(" FROM ");
                    out.push_str(&table);
                }
                push_text(&mut out, &self.join);
                push_clause(&mut out, "WHERE", &self.where_clause);
                push_clause(&mut out, "GROUP BY", &self.group_by);
                push_clause(&mut out, "HAVING", &self.having);
                push_clause(&mut out, "ORDER BY", &self.order_by);
                if let Some(limit) = &self.limit {
                    out.push_str(&format!(" LIMIT {}", limit));
                }
                push_clause(&mut out, "PROCEDURE", &self.procedure);
            }
            Verb::Delete => {
                push_text(&mut out, &self.modifier);
                out.push_str(" FROM ");
                out.push_str(&table);
                push_text(&mut out, &self.join);
                push_clause(&mut out, "WHERE", &self.where_clause);
            }
            Verb::Insert => {
                if self.ignore {
                    out.push_str(" IGNORE");
                }
                out.push_str(" INTO ");
                out.push_str(&table);
                push_text(&mut out, &self.operands);
            }
            Verb::Update => {
                out.push(' ');
                out.push_str(&table);
                push_text(&mut out, &self.operands);
                push_clause(&mut out, "WHERE", &self.where_clause);
            }
            Verb::Show => {
                out.push_str(" CREATE TABLE ");
                out.push_str(&table);
                push_text(&mut out, &self.rest);
            }
            Verb::Alter => {
                out.push_str(" TABLE ");
                out.push_str(&table);
                push_text(&mut out, &self.rest);
            }
            Verb::Source => {
                push_text(&mut out, self.path.as_deref().unwrap_or_default());
            }
        }

        f.write_str(&out)
    }
}
