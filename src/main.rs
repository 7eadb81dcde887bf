use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::error;

use census_sqlcmd::config::AppConfig;
use census_sqlcmd::interpreter::catalog::SchemaSnapshot;
use census_sqlcmd::interpreter::connection::{ResultSet, SqliteConnection};
use census_sqlcmd::interpreter::report::{CommandReport, CommandRequest};
use census_sqlcmd::interpreter::resolver::IdentityResolver;
use census_sqlcmd::interpreter::session::Session;
use census_sqlcmd::interpreter::Interpreter;
use census_sqlcmd::types::{DbResult, CONFIG_FILE};

/// Issue ad-hoc SQL commands against the census database
#[derive(Parser, Debug)]
#[command(name = "census-sqlcmd", version, long_about = None)]
struct Cli {
    /// SQLite database file
    database: PathBuf,

    /// Run a single command and exit
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// Configuration file
    #[arg(long = "config", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Execute commands instead of only previewing them
    #[arg(long)]
    confirm: bool,

    /// Record how every token was classified
    #[arg(long)]
    debug: bool,

    /// Grant the administrator capability
    #[arg(long)]
    admin: bool,

    /// Print the HTML report instead of plain text
    #[arg(long)]
    html: bool,

    /// Validate against a saved schema snapshot instead of the live database
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Print the live schema snapshot as JSON and exit
    #[arg(long)]
    dump_schema: bool,

    /// Use table names exactly as typed
    #[arg(long)]
    no_aliases: bool,
}

fn print_report(report: &CommandReport, html: bool) {
    if html {
        print!("{}", report.to_html());
        return;
    }

    for line in &report.trace {
        println!("TRACE: {line}");
    }
    if !report.messages.is_empty() {
        println!("ERROR: {}", report.message_text().trim_end());
    }
    if let Some(command) = &report.command {
        println!("Command: '{command}'");
    }
    if let Some(table) = &report.table {
        if report.table_defined {
            println!("Table: '{table}'");
        } else if !report.defined_tables.is_empty() {
            println!("Table '{table}' not defined on server.");
            println!("The {} defined tables are: {}", report.defined_tables.len(), report.defined_tables.join(", "));
        }
    }
    for (name, text) in &report.clauses {
        println!("{name}: '{text}'");
    }
    if !report.validation_errors.is_empty() {
        println!("ERROR: {}", report.validation_errors.trim_end());
        for (table, fields) in &report.bad_tables {
            println!("The {} defined fields in {} table are: {}", fields.len(), table, fields.join(", "));
        }
    }
    if let Some(sentence) = report.preview_sentence() {
        println!("{sentence}");
    }

    if report.executed {
        if let Some(result) = &report.result {
            match result.len() {
                0 => println!("No rows in response"),
                n => println!("{n} rows in response"),
            }
            print_table(result);
        } else if let Some(rows) = report.affected_rows {
            println!("Updated {rows} rows in the table.");
        }
        for result in &report.source_results {
            println!("{} => {}", result.statement, result.outcome);
        }
    }
}

fn print_table(result: &ResultSet) {
    if result.is_empty() {
        return;
    }

    let mut rows: Vec<Vec<String>> = vec![result.columns.clone()];
    rows.extend(result.rows.iter().map(|row| row.iter().map(|v| v.as_text()).collect()));

    // Compute column widths
    let col_count = result.columns.len();
    let mut widths = vec![0; col_count];

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    // Print rows
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:width$} ", cell, width = widths[i]);
        }
        println!();
    }
}

fn run(cli: Cli) -> DbResult<()> {
    let config = AppConfig::load(&cli.config)?;
    let connection = SqliteConnection::open(&cli.database)?;

    if cli.dump_schema {
        println!("{}", SchemaSnapshot::from_connection(&connection)?.to_json()?);
        return Ok(());
    }

    let mut interpreter = Interpreter::new(Box::new(connection), config);
    if let Some(path) = &cli.schema {
        interpreter = interpreter.with_snapshot(SchemaSnapshot::load(path)?);
    }
    if cli.no_aliases {
        interpreter = interpreter.with_resolver(Box::new(IdentityResolver));
    }
    let session = if cli.admin { Session::admin() } else { Session::anonymous() };

    let make_request = |sql: &str| CommandRequest {
        sql: sql.to_string(),
        confirm: cli.confirm,
        debug: cli.debug,
    };

    if let Some(sql) = &cli.command {
        let report = interpreter.run(&make_request(sql), &session);
        print_report(&report, cli.html);
        return Ok(());
    }

    println!("census-sqlcmd: {}", cli.database.display());
    println!("One command per line; type 'exit' to quit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("sql > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let report = interpreter.run(&make_request(input), &session);
        print_report(&report, cli.html);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{}", err);
        std::process::exit(1);
    }
}
