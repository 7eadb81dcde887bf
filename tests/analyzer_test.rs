mod common;

use census_sqlcmd::compiler::parser::parse_command;
use census_sqlcmd::interpreter::analyzer::Analyzer;
use crate::common::census_snapshot;

fn analyze(sql: &str) -> (String, Analyzer) {
    let (stmt, _) = parse_command(sql).unwrap();
    let snapshot = census_snapshot();
    let mut analyzer = Analyzer::new(&snapshot, stmt.table_name(), false);
    let errors = analyzer.analyze_statement(&stmt);
    (errors, analyzer)
}

#[test]
fn test_valid_select() {
    let (errors, analyzer) = analyze("SELECT id, d_name FROM Districts WHERE pages > 30 ORDER BY d_name");

    assert_eq!(errors, "");
    assert!(analyzer.bad_tables().is_empty());
}

#[test]
fn test_one_bad_field() {
    let (errors, analyzer) = analyze("SELECT id, d_nme FROM Districts");

    assert_eq!(errors, "`d_nme` is not a field name in `Districts`. ");
    assert_eq!(analyzer.bad_tables(), &["Districts".to_string()]);
}

#[test]
fn test_field_names_ignore_case() {
    let (errors, _) = analyze("SELECT ID, D_Name FROM Districts");
    assert_eq!(errors, "");
}

#[test]
fn test_strings_and_reserved_words_are_skipped() {
    let (errors, _) = analyze(
        "SELECT UPPER(d_name) FROM Districts WHERE d_name LIKE 'bogus_field%' AND census IS NOT NULL",
    );
    assert_eq!(errors, "");
}

#[test]
fn test_as_alias_is_registered() {
    let (errors, analyzer) = analyze("SELECT d_name AS newalias FROM Districts ORDER BY newalias");

    assert_eq!(errors, "");
    assert!(analyzer.has_field("Districts", "newalias"));
}

#[test]
fn test_as_alias_after_function() {
    let (errors, _) = analyze("SELECT COUNT(*) AS n FROM Districts ORDER BY n");
    assert_eq!(errors, "");
}

#[test]
fn test_as_table_name_is_rejected() {
    let mut analyzer = Analyzer::new(&census_snapshot(), "Districts", false);
    let errors = analyzer.validate_field_names("d_name AS SubDistricts");

    assert_eq!(errors, "Cannot define table name `SubDistricts` as a fieldname using AS. ");
}

#[test]
fn test_join_alias() {
    let (errors, analyzer) = analyze(
        "SELECT x.sd_name, D.d_name FROM SubDistricts x JOIN Districts AS D ON (D.id=x.d_id)",
    );

    assert_eq!(errors, "");
    assert!(analyzer.is_table("D"));
    assert!(analyzer.is_table("x"));
    assert!(analyzer.has_field("D", "d_name"));
}

#[test]
fn test_join_alias_bad_column() {
    let (errors, analyzer) = analyze(
        "SELECT D.badcol FROM SubDistricts x JOIN Districts AS D ON (D.id=x.d_id)",
    );

    assert_eq!(errors, "`badcol` is not a field name in `D`. ");
    assert_eq!(analyzer.bad_tables(), &["D".to_string()]);
}

#[test]
fn test_join_unknown_table() {
    let (errors, _) = analyze("SELECT sd_name FROM SubDistricts LEFT OUTER JOIN Counties C ON C.id = d_id");

    assert!(errors.starts_with("Table name `Counties` in JOIN is invalid. "));
}

#[test]
fn test_multiple_joins() {
    let (errors, analyzer) = analyze(
        "SELECT L.surname FROM SubDistricts S INNER JOIN Districts D ON D.id = S.d_id \
         LEFT JOIN CensusLines L ON L.sd_id = S.id",
    );

    assert_eq!(errors, "");
    assert!(analyzer.is_table("L"));
    assert!(analyzer.is_table("D"));
}

#[test]
fn test_parentheses() {
    let mut analyzer = Analyzer::new(&census_snapshot(), "Districts", false);
    assert_eq!(analyzer.validate_field_names("(pages + 1))"), "Mis-matched parentheses at 11. ");
    assert_eq!(analyzer.validate_field_names("((pages + 1)"), "Mis-matched parentheses at end. ");
}

#[test]
fn test_unknown_primary_table() {
    let (errors, analyzer) = analyze("SELECT county FROM Counties");

    assert_eq!(
        errors,
        "Table 'Counties' not defined on server. `county` is not a field name in `Counties`. "
    );
    assert_eq!(analyzer.bad_tables(), &["Counties".to_string()]);
    assert!(analyzer.fields("Counties").is_none());
}

#[test]
fn test_update_and_delete_clauses() {
    let (errors, _) = analyze("UPDATE Districts SET pagez = 3 WHERE id = 1");
    assert_eq!(errors, "`pagez` is not a field name in `Districts`. ");

    let (errors, _) = analyze("DELETE FROM SubDistricts WHERE d_idd = 2");
    assert_eq!(errors, "`d_idd` is not a field name in `SubDistricts`. ");
}

#[test]
fn test_insert_columns() {
    let (errors, _) = analyze("INSERT INTO Districts (id, d_name) VALUES (9, 'Kent')");
    assert_eq!(errors, "");
}

#[test]
fn test_phpsoundex_marker() {
    let (errors, _) = analyze("SELECT PHPSOUNDEX(surname) FROM CensusLines");
    assert_eq!(errors, "");
}

#[test]
fn test_show_and_alter_are_not_validated() {
    let (errors, _) = analyze("ALTER TABLE Districts ADD COLUMN whatever TEXT");
    assert_eq!(errors, "");
}

#[test]
fn test_debug_trace() {
    let (stmt, _) = parse_command("SELECT d_name FROM Districts").unwrap();
    let mut analyzer = Analyzer::new(&census_snapshot(), stmt.table_name(), true);
    analyzer.analyze_statement(&stmt);

    assert!(analyzer.trace().iter().any(|line| line == "'d_name' at 0 is a field name"));
}
