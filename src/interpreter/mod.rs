pub mod analyzer;
pub mod catalog;
pub mod connection;
pub mod render;
pub mod report;
pub mod resolver;
pub mod session;
pub mod soundex;
pub mod source;

use log::{debug, info};

use crate::compiler::ast::{Statement, Verb};
use crate::compiler::parser::parse_command;
use crate::config::AppConfig;
use crate::types::{DbError, DbResult, RowCount, ADMIN_CAPABILITY};
use analyzer::Analyzer;
use catalog::SchemaSnapshot;
use connection::{Connection, ResultSet};
use render::{LegacyDateFormatter, QueryRecordLookup, ResultRenderer};
use report::{CommandReport, CommandRequest};
use resolver::{AliasResolver, TableNameResolver};
use session::Session;
use soundex::rewrite_phpsoundex;

pub struct Interpreter {
    connection: Box<dyn Connection>,
    resolver: Box<dyn TableNameResolver>,
    config: AppConfig,
    snapshot: Option<SchemaSnapshot>,
}

impl Interpreter {
    pub fn new(connection: Box<dyn Connection>, config: AppConfig) -> Self {
        let resolver = Box::new(AliasResolver::new(&config.table_aliases));
        Self {
            connection,
            resolver,
            config,
            snapshot: None,
        }
    }

    pub fn with_resolver(mut self, resolver: Box<dyn TableNameResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Validate against a fixed snapshot instead of introspecting the server
    pub fn with_snapshot(mut self, snapshot: SchemaSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn connection(&self) -> &dyn Connection {
        self.connection.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Entry point: classify, authorize, resolve, validate, preview, execute and render one command
    pub fn run(&mut self, request: &CommandRequest, session: &Session) -> CommandReport {
        let sql = request.sql.trim();
        let mut report = CommandReport::new(sql);
        if sql.is_empty() {
            return report;
        }
        let debug = request.debug || self.config.debug;

        let snapshot = match self.introspect() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                report.messages.push(err.to_string());
                return report;
            }
        };

        let (mut statement, messages) = match parse_command(sql) {
            Ok(parsed) => parsed,
            Err(err) => {
                report.command = sql.split_whitespace().next().map(str::to_uppercase);
                report.messages.push(err.to_string());
                return report;
            }
        };
        report.messages.extend(messages);

        if statement.verb.requires_admin() && !session.can_user(ADMIN_CAPABILITY) {
            report.messages.push(format!("{} ", DbError::Unauthorized));
        }

        self.resolve_table(&mut statement);
        report.sql = statement.to_string();
        report.command = Some(statement.verb.to_string());
        report.is_query = statement.verb.is_query();
        self.describe(&statement, &snapshot, &mut report);

        let mut analyzer = Analyzer::new(&snapshot, statement.table_name(), debug);
        report.validation_errors = analyzer.analyze_statement(&statement);
        report.bad_tables = analyzer
            .bad_tables()
            .iter()
            .filter_map(|t| analyzer.fields(t).map(|f| (t.clone(), f.to_vec())))
            .collect();
        report.trace = analyzer.take_trace();

        if !report.messages.is_empty() {
            return report;
        }

        // SHOW and ALTER run without a preview or confirmation
        let auto_execute = matches!(statement.verb, Verb::Show | Verb::Alter);
        let mut count_result = None;
        if !auto_execute && statement.verb != Verb::Source {
            match self.preview(&statement, &report.sql) {
                Ok((count, result)) => {
                    report.preview_count = Some(count);
                    count_result = result;
                }
                Err(err) => report.messages.push(err.to_string()),
            }
        }

        if report.has_errors() || !(request.confirm || auto_execute) {
            return report;
        }

        match self.execute(&statement, &mut report, count_result) {
            Ok(()) => report.executed = true,
            Err(err) => report.messages.push(err.to_string()),
        }

        if let Some(result) = &report.result {
            report.result_html = Some(self.render(&statement, result, &report.soundex_fields));
        }
        report
    }

    fn introspect(&self) -> DbResult<SchemaSnapshot> {
        match &self.snapshot {
            Some(snapshot) => Ok(snapshot.clone()),
            None => SchemaSnapshot::from_connection(self.connection.as_ref()),
        }
    }

    fn resolve_table(&self, statement: &mut Statement) {
        if !statement.has_table() {
            return;
        }
        let Some(table) = statement.table.as_deref() else { return };
        if let Some(physical) = self.resolver.resolve(table) {
            debug!("table {} resolves to {}", table, physical);
            statement.table = Some(physical);
        }
    }

    /// Labels shown on the page for the parsed command
    fn describe(&self, statement: &Statement, snapshot: &SchemaSnapshot, report: &mut CommandReport) {
        if statement.verb != Verb::Source {
            let table = statement.table_name().to_string();
            report.table_defined = snapshot.has_table(&table);
            if statement.has_table() && !report.table_defined {
                report.defined_tables = snapshot.table_names();
            }
            report.table = Some(table);
        }

        let operands = match statement.verb {
            Verb::Delete => &statement.modifier,
            Verb::Show | Verb::Alter => &statement.rest,
            _ => &statement.operands,
        };

        let mut clauses = vec![];
        if !statement.join.is_empty() {
            clauses.push(("Join", statement.join.clone()));
        }
        if !operands.is_empty() {
            clauses.push(("Operands", operands.clone()));
        }
        if let Some(clause) = &statement.where_clause {
            clauses.push(("Where", clause.clone()));
        }
        for (name, clause) in [
            ("GROUP BY", &statement.group_by),
            ("HAVING", &statement.having),
            ("ORDER BY", &statement.order_by),
            ("PROCEDURE", &statement.procedure),
        ] {
            if let Some(text) = clause.as_ref().filter(|t| !t.is_empty()) {
                clauses.push((name, text.clone()));
            }
        }
        if let Some(limit) = &statement.limit {
            clauses.push(("LIMIT", limit.count.to_string()));
            if let Some(offset) = limit.offset {
                clauses.push(("OFFSET", offset.to_string()));
            }
        }
        if let Some(path) = &statement.path {
            clauses.push(("File", path.clone()));
        }

        report.clauses = clauses.into_iter().map(|(n, t)| (n.to_string(), t)).collect();
    }

    /// Number of rows the command would touch; a COUNT(*) query is simply run
    fn preview(&self, statement: &Statement, sql: &str) -> DbResult<(RowCount, Option<ResultSet>)> {
        if statement.verb == Verb::Select && statement.is_count_only() {
            let result = self.connection.query(sql).map_err(|e| query_error(sql, e))?;
            return Ok((result.len() as RowCount, Some(result)));
        }

        if statement.verb == Verb::Insert || !statement.has_table() {
            return Ok((1, None));
        }

        let mut count_sql = format!("SELECT COUNT(*) FROM {}", statement.quoted_table());
        if !statement.join.is_empty() {
            count_sql.push(' ');
            count_sql.push_str(&statement.join);
        }
        if let Some(clause) = statement.where_clause.as_ref().filter(|w| !w.is_empty()) {
            count_sql.push_str(" WHERE ");
            count_sql.push_str(clause);
        }

        let result = self.connection.query(&count_sql).map_err(|e| query_error(&count_sql, e))?;
        let mut count = result
            .scalar()
            .and_then(|v| v.as_text().parse::<RowCount>().ok())
            .unwrap_or(0);
        if let Some(limit) = &statement.limit {
            count = count.min(limit.count);
        }
        Ok((count, None))
    }

    fn execute(
        &self,
        statement: &Statement,
        report: &mut CommandReport,
        count_result: Option<ResultSet>,
    ) -> DbResult<()> {
        let sql = report.sql.clone();
        match statement.verb {
            Verb::Select => {
                let result = match count_result {
                    Some(result) => result,
                    None => {
                        let (rewritten, fields) = rewrite_phpsoundex(&sql);
                        report.soundex_fields = fields;
                        self.connection.query(&rewritten).map_err(|e| query_error(&rewritten, e))?
                    }
                };
                report.result = Some(result);
            }
            Verb::Show => {
                report.result = Some(self.connection.show_create_table(statement.table_name())?);
            }
            Verb::Source => {
                let path = statement.path.as_deref().unwrap_or_default();
                info!("running script {}", path);
                report.source_results = source::run_file(self.connection.as_ref(), path)?;
            }
            Verb::Insert | Verb::Update | Verb::Delete | Verb::Alter => {
                let rows = self.connection.execute(&sql).map_err(|e| exec_error(&sql, e))?;
                if rows > 0 {
                    info!("{}", sql);
                }
                report.affected_rows = Some(rows);
            }
        }
        Ok(())
    }

    fn render(&self, statement: &Statement, result: &ResultSet, soundex_fields: &[String]) -> String {
        let lookup = QueryRecordLookup::new(self.connection.as_ref(), &self.config.record_lookups);
        let renderer = ResultRenderer::new(
            statement.table_name(),
            &self.config.link_base_url,
            &self.config.event_titles,
            &lookup,
            &LegacyDateFormatter,
        );
        renderer.render(result, soundex_fields)
    }
}

fn query_error(sql: &str, err: DbError) -> DbError {
    DbError::Execution(format!("query='{}', {}", sql, err))
}

fn exec_error(sql: &str, err: DbError) -> DbError {
    DbError::Execution(format!("exec='{}', {}", sql, err))
}
