use crate::interpreter::connection::ResultSet;
use crate::interpreter::render::escape_html;
use crate::interpreter::source::SourceResult;
use crate::types::RowCount;

/// One command submitted by the operator
#[derive(Debug, Clone, Default)]
pub struct CommandRequest {
    pub sql: String,
    /// Operator confirmed the preview; writes and queries only run when set
    pub confirm: bool,
    pub debug: bool,
}

impl CommandRequest {
    pub fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
            ..Self::default()
        }
    }

    pub fn confirmed(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
            confirm: true,
            debug: false,
        }
    }
}

/// Everything learned while handling one command
#[derive(Debug, Clone, Default)]
pub struct CommandReport {
    /// Command text after table names were resolved
    pub sql: String,
    pub command: Option<String>,
    pub table: Option<String>,
    pub table_defined: bool,
    /// Filled when the primary table is not on the server
    pub defined_tables: Vec<String>,
    /// Labelled clause texts in display order
    pub clauses: Vec<(String, String)>,
    /// Syntax, authorization and execution messages
    pub messages: Vec<String>,
    pub validation_errors: String,
    pub bad_tables: Vec<(String, Vec<String>)>,
    pub is_query: bool,
    pub preview_count: Option<RowCount>,
    pub executed: bool,
    pub result: Option<ResultSet>,
    pub result_html: Option<String>,
    pub soundex_fields: Vec<String>,
    pub affected_rows: Option<usize>,
    pub source_results: Vec<SourceResult>,
    pub trace: Vec<String>,
}

impl CommandReport {
    pub fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
            ..Self::default()
        }
    }

    /// Any error that keeps the command from running
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty() || !self.validation_errors.is_empty()
    }

    pub fn message_text(&self) -> String {
        self.messages.concat()
    }

    /// Sentence shown before the operator confirms
    pub fn preview_sentence(&self) -> Option<String> {
        let count = self.preview_count?;
        Some(if self.is_query {
            format!("This command will display {} rows from the database.", count)
        } else {
            format!("This command will update {} rows in the database.", count)
        })
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for line in &self.trace {
            html.push_str(&format!("<div class='warning'>{}</div>\n", escape_html(line)));
        }

        if !self.messages.is_empty() {
            html.push_str(&format!("<p class='message'>{}</p>\n", escape_html(&self.message_text())));
        }

        if let Some(command) = &self.command {
            html.push_str(&label("Command", command));
        }

        if let Some(table) = &self.table {
            if self.table_defined {
                html.push_str(&label("Table", table));
            } else if !self.defined_tables.is_empty() {
                html.push_str(&format!(
                    "<p class='message'>Table '{}' not defined on server.</p>\n",
                    escape_html(table)
                ));
                html.push_str(&format!("<p>The {} defined tables are:</p>\n", self.defined_tables.len()));
                html.push_str(&name_grid(&self.defined_tables));
            }
        }

        for (name, text) in &self.clauses {
            html.push_str(&label(name, text));
        }

        if !self.validation_errors.is_empty() {
            html.push_str(&format!("<p class='message'>{}</p>\n", escape_html(&self.validation_errors)));
            for (table, fields) in &self.bad_tables {
                html.push_str(&format!(
                    "<p>The {} defined fields in {} table are:</p>\n",
                    fields.len(),
                    escape_html(table)
                ));
                html.push_str(&name_grid(fields));
            }
        }

        if let Some(sentence) = self.preview_sentence() {
            html.push_str(&format!("<p class='warning'>{}</p>\n", sentence));
        }

        if self.executed {
            if let Some(result) = &self.result {
                let count = match result.len() {
                    0 => "No".to_string(),
                    n => n.to_string(),
                };
                html.push_str(&format!("<p class='label'>{} rows in response</p>\n", count));
                if let Some(table) = &self.result_html {
                    html.push_str(table);
                }
            } else if let Some(rows) = self.affected_rows {
                html.push_str(&format!("<p class='label'>Updated {} rows in the table.</p>\n", rows));
            }

            if !self.source_results.is_empty() {
                html.push_str("<table class='summary'>\n");
                for (i, result) in self.source_results.iter().enumerate() {
                    let class = if i % 2 == 0 { "odd" } else { "even" };
                    html.push_str(&format!(
                        "  <tr><td class='{0}'>{1}</td><td class='{0}'>{2}</td></tr>\n",
                        class,
                        escape_html(&result.statement),
                        escape_html(&result.outcome.to_string())
                    ));
                }
                html.push_str("</table>\n");
            }
        }

        html
    }
}

fn label(name: &str, value: &str) -> String {
    format!("<p><span class='label'>{}:</span> '{}'</p>\n", name, escape_html(value))
}

/// Names laid out four to a row
fn name_grid(names: &[String]) -> String {
    let mut html = String::from("<table>\n");
    for row in names.chunks(4) {
        html.push_str("  <tr>\n");
        for name in row {
            html.push_str(&format!("    <th style='text-align: left;'>{}</th>\n", escape_html(name)));
        }
        html.push_str("  </tr>\n");
    }
    html.push_str("</table>\n");
    html
}
