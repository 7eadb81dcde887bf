use census_sqlcmd::interpreter::connection::{Connection, SqliteConnection};
use census_sqlcmd::interpreter::source::*;

#[test]
fn test_split_at_semicolons() {
    let statements = split_script("UPDATE a SET x = 1;\nDELETE FROM b WHERE y = 2;\n\n");
    assert_eq!(statements, vec!["UPDATE a SET x = 1", "DELETE FROM b WHERE y = 2"]);
}

#[test]
fn test_semicolon_inside_quotes() {
    let statements = split_script("INSERT INTO t VALUES ('a;b', \"c;d\");UPDATE t SET v = 'it\\'s;' WHERE id = 1");
    assert_eq!(
        statements,
        vec![
            "INSERT INTO t VALUES ('a;b', \"c;d\")",
            "UPDATE t SET v = 'it\\'s;' WHERE id = 1",
        ]
    );
}

#[test]
fn test_comments_are_dropped() {
    let statements = split_script("-- header\nUPDATE t SET n = n--1 WHERE id = 1; -- trailing\n");
    assert_eq!(statements, vec!["UPDATE t SET n = n--1 WHERE id = 1"]);
}

#[test]
fn test_run_script_continues_past_failures() {
    let connection = SqliteConnection::open_in_memory().unwrap();
    let results = run_script(
        &connection,
        "CREATE TABLE t (id INTEGER, v TEXT);\n\
         INSERT INTO t VALUES (1, 'a'), (2, 'b');\n\
         INSERT INTO missing VALUES (1);\n\
         SELECT * FROM t;\n\
         DELETE FROM t WHERE id = 2;",
    );

    let outcomes: Vec<&SourceOutcome> = results.iter().map(|r| &r.outcome).collect();
    assert_eq!(outcomes[0], &SourceOutcome::Executed(0));
    assert_eq!(outcomes[1], &SourceOutcome::Executed(2));
    assert!(matches!(outcomes[2], SourceOutcome::Failed(_)));
    assert_eq!(outcomes[3], &SourceOutcome::Unsupported);
    assert_eq!(outcomes[4], &SourceOutcome::Executed(1));
    assert_eq!(results[4].statement, "DELETE FROM t WHERE id = 2");

    let rows = connection.query("SELECT COUNT(*) FROM t").unwrap();
    assert_eq!(rows.scalar().map(|v| v.as_text()), Some("1".to_string()));
}

#[test]
fn test_missing_file() {
    let connection = SqliteConnection::open_in_memory().unwrap();
    assert!(run_file(&connection, "/nonexistent/fix.sql").is_err());
}

#[test]
fn test_outcome_display() {
    assert_eq!(SourceOutcome::Executed(3).to_string(), "3 rows affected");
    assert_eq!(SourceOutcome::Unsupported.to_string(), "Unsupported");
}
