#![allow(dead_code)]

use tempfile::TempDir;

use census_sqlcmd::config::AppConfig;
use census_sqlcmd::interpreter::catalog::SchemaSnapshot;
use census_sqlcmd::interpreter::connection::{Connection, SqliteConnection};
use census_sqlcmd::interpreter::report::{CommandReport, CommandRequest};
use census_sqlcmd::interpreter::session::Session;
use census_sqlcmd::interpreter::Interpreter;

const SCHEMA: &str = "
CREATE TABLE Districts (id INTEGER PRIMARY KEY, d_name TEXT, census TEXT, pages INTEGER);
CREATE TABLE SubDistricts (id INTEGER PRIMARY KEY, d_id INTEGER, sd_name TEXT, pages INTEGER);
CREATE TABLE CensusLines (id INTEGER PRIMARY KEY, sd_id INTEGER, page INTEGER, surname TEXT,
    givennames TEXT, gender INTEGER, birthd TEXT, idir INTEGER);
CREATE TABLE tblIR (IDIR INTEGER PRIMARY KEY, GivenName TEXT, Surname TEXT);
CREATE TABLE tblSX (IDSX INTEGER PRIMARY KEY, IDSR INTEGER, IDIME INTEGER, Type INTEGER, Detail TEXT);

INSERT INTO Districts VALUES (1, 'Kent', 'CA1881', 40), (2, 'Essex', 'CA1881', 35), (3, 'Lambton', 'CA1881', 50);
INSERT INTO SubDistricts VALUES (1, 1, 'Chatham', 10), (2, 1, 'Dover', 12), (3, 2, 'Windsor', 20), (4, 3, 'Sarnia', 8);
INSERT INTO CensusLines VALUES
    (1, 1, 1, 'Smith', 'John', 0, '18510302', 7),
    (2, 1, 1, 'Smith', 'Mary', 1, '18530815', 8),
    (3, 3, 2, 'Robert', 'Anne', 1, 'abt 1860', 0);
INSERT INTO tblIR VALUES (7, 'John', 'Smith'), (8, 'Mary', 'Smith');
INSERT INTO tblSX VALUES (1, 5, 7, 2, 'baptism register'), (2, 5, 3, 20, 'marriage record');
";

/// Scratch census database; the directory lives as long as the value
pub struct TestDb {
    pub dir: TempDir,
    pub interpreter: Interpreter,
}

impl TestDb {
    pub fn run(&mut self, sql: &str, session: &Session) -> CommandReport {
        self.interpreter.run(&CommandRequest::new(sql), session)
    }

    pub fn confirm(&mut self, sql: &str, session: &Session) -> CommandReport {
        self.interpreter.run(&CommandRequest::confirmed(sql), session)
    }

    pub fn count(&self, sql: &str) -> i64 {
        let result = self.interpreter.connection().query(sql).expect("count query");
        result.scalar().expect("one row").as_text().parse().expect("integer")
    }

    pub fn write_script(&self, name: &str, text: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).expect("write script");
        path.to_string_lossy().into_owned()
    }
}

pub fn open_census_db(dir: &TempDir) -> SqliteConnection {
    let connection = SqliteConnection::open(dir.path().join("census.db")).expect("open database");
    connection.inner().execute_batch(SCHEMA).expect("create schema");
    connection
}

pub fn setup_interpreter() -> TestDb {
    setup_interpreter_with(AppConfig::default())
}

pub fn setup_interpreter_with(config: AppConfig) -> TestDb {
    let dir = TempDir::new().expect("create temp dir");
    let connection = open_census_db(&dir);
    let interpreter = Interpreter::new(Box::new(connection), config);
    TestDb { dir, interpreter }
}

/// Snapshot of the scratch database's schema
pub fn census_snapshot() -> SchemaSnapshot {
    let mut snapshot = SchemaSnapshot::new();
    snapshot.add_table("CensusLines", &["id", "sd_id", "page", "surname", "givennames", "gender", "birthd", "idir"]);
    snapshot.add_table("Districts", &["id", "d_name", "census", "pages"]);
    snapshot.add_table("SubDistricts", &["id", "d_id", "sd_name", "pages"]);
    snapshot.add_table("tblIR", &["IDIR", "GivenName", "Surname"]);
    snapshot.add_table("tblSX", &["IDSX", "IDSR", "IDIME", "Type", "Detail"]);
    snapshot
}

pub fn introspect(connection: &dyn Connection) -> SchemaSnapshot {
    SchemaSnapshot::from_connection(connection).expect("introspect")
}
