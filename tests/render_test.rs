use linked_hash_map::LinkedHashMap;

use census_sqlcmd::interpreter::connection::{ResultSet, Value};
use census_sqlcmd::interpreter::render::*;

struct FixedLookup;

impl RecordLookup for FixedLookup {
    fn name(&self, kind: RecordKind, id: i64) -> Option<String> {
        match (kind, id) {
            (RecordKind::Person, 7) => Some("John Smith".to_string()),
            (RecordKind::Location, 12) => Some("Chatham, Kent".to_string()),
            _ => None,
        }
    }
}

fn cell(table: &str, field: &str, value: Value) -> String {
    let titles = LinkedHashMap::new();
    let renderer = ResultRenderer::new(table, "", &titles, &FixedLookup, &LegacyDateFormatter);
    renderer.render_cell(field, &value, "odd")
}

#[test]
fn test_person_link() {
    assert_eq!(
        cell("tblIR", "idirhusb", Value::Integer(7)),
        "      <td class='odd right'><a href='/FamilyTree/Person.php?idir=7' target='_blank'>7</a>=John Smith</td>\n"
    );
}

#[test]
fn test_failed_lookup_shows_question_mark() {
    let html = cell("tblMR", "idmr", Value::Integer(3));
    assert!(html.contains("<a href='/FamilyTree/editMarriages.php?idmr=3' target='_blank'>3</a>=?"));
}

#[test]
fn test_invalid_child() {
    assert_eq!(
        cell("tblCR", "idcr", Value::Integer(99)),
        "      <td class='odd right'>Invalid IDCR=99</td>\n"
    );
}

#[test]
fn test_citation_link_has_no_name() {
    let html = cell("tblSX", "idsx", Value::Integer(5));
    assert!(html.contains("<a href='/getRecordXml.php?idsx=5' target='_blank'>5</a></td>"));
}

#[test]
fn test_numeric_text_is_a_key() {
    let html = cell("tblER", "idlrevent", Value::Text("12".to_string()));
    assert!(html.contains("=Chatham, Kent"));
}

#[test]
fn test_gender() {
    let html = cell("tblIR", "gender", Value::Integer(1));
    assert!(html.contains("1=<span class=\"female\">female</span>"));

    let html = cell("tblIR", "gender", Value::Integer(2));
    assert!(html.contains("2=<span class=\"unknown\">unknown</span>"));
}

#[test]
fn test_dates() {
    assert!(cell("tblIR", "birthd", Value::Text("18510302".to_string())).contains(">2 Mar 1851<"));
    assert_eq!(LegacyDateFormatter.format("18510300"), "Mar 1851");
    assert_eq!(LegacyDateFormatter.format("abt 1860"), "abt 1860");
}

#[test]
fn test_citation_type_only_on_citations() {
    assert!(cell("tblSX", "type", Value::Integer(20)).contains(">20=Marriage<"));
    assert!(cell("tblER", "type", Value::Integer(20)).contains(">20<"));
}

#[test]
fn test_event_titles() {
    let mut titles = LinkedHashMap::new();
    titles.insert(3u32, "Birth".to_string());
    let renderer = ResultRenderer::new("tblER", "", &titles, &NoRecordLookup, &LegacyDateFormatter);

    assert!(renderer.render_cell("idet", &Value::Integer(3), "even").contains(">3=Birth<"));
    assert!(renderer.render_cell("idet", &Value::Integer(4), "even").contains(">4<"));
}

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        cell("Districts", "d_name", Value::Text("<b>Kent & Essex</b>".to_string())),
        "      <td class='odd'>&lt;b&gt;Kent &amp; Essex&lt;/b&gt;</td>\n"
    );
}

#[test]
fn test_negative_number_is_text() {
    assert_eq!(cell("t", "idir", Value::Integer(-1)), "      <td class='odd'>-1</td>\n");
}

#[test]
fn test_create_table_format() {
    assert_eq!(
        format_create_table("CREATE TABLE t (a int, b varchar(10), point text)"),
        "CREATE TABLE t (<br>a INT,<br> b VARCHAR(10),<br> point TEXT)<br>"
    );
}

#[test]
fn test_idime_takes_key_from_type() {
    let titles = LinkedHashMap::new();
    let renderer = ResultRenderer::new("tblSX", "", &titles, &FixedLookup, &LegacyDateFormatter);
    let result = ResultSet {
        columns: vec!["IDSX".to_string(), "IDIME".to_string(), "Type".to_string()],
        rows: vec![
            vec![Value::Integer(1), Value::Integer(7), Value::Integer(2)],
            vec![Value::Integer(2), Value::Integer(3), Value::Integer(20)],
        ],
    };

    let html = renderer.render(&result, &[]);
    assert!(html.contains("<a href='/FamilyTree/Person.php?idir=7' target='_blank'>7</a>=John Smith"));
    assert!(html.contains("<a href='/FamilyTree/editMarriages.php?idmr=3' target='_blank'>3</a>=?"));
    assert!(html.contains("<td class='even right'>20=Marriage</td>"));
}

#[test]
fn test_rows_alternate_classes() {
    let titles = LinkedHashMap::new();
    let renderer = ResultRenderer::new("Districts", "", &titles, &NoRecordLookup, &LegacyDateFormatter);
    let result = ResultSet {
        columns: vec!["d_name".to_string()],
        rows: vec![
            vec![Value::Text("Kent".to_string())],
            vec![Value::Text("Essex".to_string())],
            vec![Value::Null],
        ],
    };

    let html = renderer.render(&result, &[]);
    assert!(html.contains("<td class='odd'>Kent</td>"));
    assert!(html.contains("<td class='even'>Essex</td>"));
    assert!(html.contains("<td class='odd'></td>"));
    assert!(renderer.render(&ResultSet::default(), &[]).is_empty());
}

#[test]
fn test_record_kind_for_field() {
    assert_eq!(RecordKind::for_field("marriednamemaridid"), Some(RecordKind::Family));
    assert_eq!(RecordKind::for_field("idtrendow"), Some(RecordKind::Temple));
    assert_eq!(RecordKind::for_field("idar2"), Some(RecordKind::Address));
    assert_eq!(RecordKind::for_field("pages"), None);
    assert_eq!(citation_type("10"), Some(("Alternate Name", "idnx")));
}
