use linked_hash_map::LinkedHashMap;
use log::debug;

use crate::compiler::reserved::SQL_TYPES;
use crate::interpreter::connection::{Connection, ResultSet, Value};
use crate::interpreter::soundex::soundex;

/// Kinds of record a numeric key column can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Person,
    Location,
    Temple,
    Family,
    Event,
    Child,
    Surname,
    Name,
    Source,
    Address,
    Citation,
}

impl RecordKind {
    /// Record kind referenced by a column, if any
    pub fn for_field(field: &str) -> Option<RecordKind> {
        let kind = match field {
            "idir" | "idirhusb" | "idirwife" | "d_idir" | "m_idir" => RecordKind::Person,
            "idlr" | "idlrevent" | "idlrbirth" | "idlrchris" | "idlrdeath" | "idlrburied"
            | "idlrmar" => RecordKind::Location,
            "idtr" | "idtrbaptism" | "idtrconfirmation" | "idtrinitiatory" | "idtrendow" => {
                RecordKind::Temple
            }
            "idmr" | "idmrparents" | "idmrpref" | "marriednamemaridid" => RecordKind::Family,
            "ider" => RecordKind::Event,
            "idcr" => RecordKind::Child,
            "idnr" => RecordKind::Surname,
            "idnx" => RecordKind::Name,
            "idsr" => RecordKind::Source,
            "idar" | "idar2" => RecordKind::Address,
            "idsx" => RecordKind::Citation,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Person => "Person",
            RecordKind::Location => "Location",
            RecordKind::Temple => "Temple",
            RecordKind::Family => "Family",
            RecordKind::Event => "Event",
            RecordKind::Child => "Child",
            RecordKind::Surname => "Surname",
            RecordKind::Name => "Name",
            RecordKind::Source => "Source",
            RecordKind::Address => "Address",
            RecordKind::Citation => "Citation",
        }
    }

    /// Detail page path for one record
    pub fn endpoint(&self, id: &str) -> String {
        match self {
            RecordKind::Person => format!("/FamilyTree/Person.php?idir={}", id),
            RecordKind::Location => format!("/FamilyTree/Location.php?idlr={}", id),
            RecordKind::Temple => format!("/FamilyTree/Temple.php?idtr={}", id),
            RecordKind::Family => format!("/FamilyTree/editMarriages.php?idmr={}", id),
            RecordKind::Event => format!("/FamilyTree/editEvent.php?ider={}", id),
            RecordKind::Child => format!("/getRecordXml.php?idcr={}", id),
            RecordKind::Surname => format!("/FamilyTree/Names.php?idnr={}&edit=Y", id),
            RecordKind::Name => format!("/FamilyTree/editName.php?idnx={}", id),
            RecordKind::Source => format!("/FamilyTree/Source.php?idsr={}", id),
            RecordKind::Address => format!("/FamilyTree/Address.php?idar={}", id),
            RecordKind::Citation => format!("/getRecordXml.php?idsx={}", id),
        }
    }
}

/// Citation type code, name, and the key of the record the citation belongs to
pub const CITATION_TYPES: &[(u32, &str, &str)] = &[
    (1, "Name", "idir"),
    (2, "Birth", "idir"),
    (3, "Christening", "idir"),
    (4, "Death", "idir"),
    (5, "Buried", "idir"),
    (6, "General Notes", "idir"),
    (7, "Research Notes", "idir"),
    (8, "Medical Notes", "idir"),
    (9, "Death Cause", "idir"),
    (10, "Alternate Name", "idnx"),
    (11, "Child Status", "idcr"),
    (12, "Relationship to Father", "idcr"),
    (13, "Relationship to Mother", "idcr"),
    (15, "LDS Baptism", "idir"),
    (16, "LDS Endowment", "idir"),
    (17, "Sealed to Parents", "idcr"),
    (18, "Sealed to Spouse", "idmr"),
    (19, "Never Married", "idir"),
    (20, "Marriage", "idmr"),
    (21, "Marriage Note", "idmr"),
    (22, "Never Married", "idmr"),
    (23, "No Children", "idmr"),
    (24, "Marriage Ended", "idmr"),
    (26, "LDS Confirmation", "idir"),
    (27, "LDS Initiatory", "idir"),
    (30, "Individual Event", "ider"),
    (31, "Marriage Event", "ider"),
    (40, "To-Do Item", "idtd"),
    (100, "Temporary", "idime"),
];

pub const CITATION_TABLE: &str = "tblSX";

const DATE_FIELDS: &[&str] = &["birthd", "chrisd", "deathd", "buriedd", "eventd", "enteredd"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn citation_type(code: &str) -> Option<(&'static str, &'static str)> {
    let code: u32 = code.parse().ok()?;
    CITATION_TYPES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, key)| (*name, *key))
}

/// Display name of a record, used next to key links
pub trait RecordLookup {
    fn name(&self, kind: RecordKind, id: i64) -> Option<String>;
}

/// Lookup that never finds anything; every link shows `?`
pub struct NoRecordLookup;

impl RecordLookup for NoRecordLookup {
    fn name(&self, _kind: RecordKind, _id: i64) -> Option<String> {
        None
    }
}

/// Lookup running one configured query per record kind
pub struct QueryRecordLookup<'a> {
    connection: &'a dyn Connection,
    queries: &'a LinkedHashMap<String, String>,
}

impl<'a> QueryRecordLookup<'a> {
    pub fn new(connection: &'a dyn Connection, queries: &'a LinkedHashMap<String, String>) -> Self {
        Self { connection, queries }
    }
}

impl RecordLookup for QueryRecordLookup<'_> {
    fn name(&self, kind: RecordKind, id: i64) -> Option<String> {
        let sql = self.queries.get(kind.as_str())?;
        match self.connection.lookup_text(sql, id) {
            Ok(name) => name,
            Err(err) => {
                debug!("{} lookup for {} failed: {}", kind.as_str(), id, err);
                None
            }
        }
    }
}

pub trait DateFormatter {
    fn format(&self, value: &str) -> String;
}

/// Eight digit `yyyymmdd` becomes `d Mon yyyy`; anything else is shown as stored
pub struct LegacyDateFormatter;

impl DateFormatter for LegacyDateFormatter {
    fn format(&self, value: &str) -> String {
        if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return value.to_string();
        }

        let year = &value[0..4];
        let month: usize = value[4..6].parse().unwrap_or(0);
        let day: u32 = value[6..8].parse().unwrap_or(0);

        match (month, day) {
            (1..=12, 0) => format!("{} {}", MONTHS[month - 1], year),
            (1..=12, _) => format!("{} {} {}", day, MONTHS[month - 1], year),
            (0, _) => year.trim_start_matches('0').to_string(),
            _ => value.to_string(),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Line breaks around the column list of a `CREATE TABLE` statement, type names upper-cased
pub fn format_create_table(sql: &str) -> String {
    let mut text = escape_html(sql);

    if let Some(pos) = text.find('(') {
        text.replace_range(pos..pos + 1, "(<br>");
    }
    if let Some(pos) = text.rfind(')') {
        text.replace_range(pos..pos + 1, ")<br>");
    }
    let text = text.replace(',', ",<br>");

    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    for c in text.chars().chain(std::iter::once('\0')) {
        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }
        if SQL_TYPES.contains(&word.as_str()) {
            out.push_str(&word.to_uppercase());
        } else {
            out.push_str(&word);
        }
        word.clear();
        if c != '\0' {
            out.push(c);
        }
    }
    out
}

/// Turns a result set into an HTML table
pub struct ResultRenderer<'a> {
    table: &'a str,
    link_base: &'a str,
    event_titles: &'a LinkedHashMap<u32, String>,
    lookup: &'a dyn RecordLookup,
    dates: &'a dyn DateFormatter,
}

impl<'a> ResultRenderer<'a> {
    pub fn new(
        table: &'a str,
        link_base: &'a str,
        event_titles: &'a LinkedHashMap<u32, String>,
        lookup: &'a dyn RecordLookup,
        dates: &'a dyn DateFormatter,
    ) -> Self {
        Self { table, link_base, event_titles, lookup, dates }
    }

    /// `soundex_fields` adds one trailing `soundex(field)` column per field
    pub fn render(&self, result: &ResultSet, soundex_fields: &[String]) -> String {
        if result.is_empty() {
            return String::new();
        }

        let mut html = String::from("<table class='summary'>\n  <thead>\n    <tr>\n");
        for column in &result.columns {
            html.push_str(&format!("      <th class='colhead'>{}</th>\n", escape_html(column)));
        }
        for field in soundex_fields {
            html.push_str(&format!("      <th class='colhead'>soundex({})</th>\n", escape_html(field)));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

        let type_index = result.column_index("type");
        let soundex_indexes: Vec<Option<usize>> =
            soundex_fields.iter().map(|f| result.column_index(f)).collect();

        for (row_number, row) in result.rows.iter().enumerate() {
            let class = if row_number % 2 == 0 { "odd" } else { "even" };
            html.push_str("    <tr>\n");

            let row_type = type_index.and_then(|i| row.get(i)).map(Value::as_text);
            for (column, value) in result.columns.iter().zip(row) {
                let field = self.field_name(column, row_type.as_deref());
                html.push_str(&self.render_cell(&field, value, class));
            }

            for index in &soundex_indexes {
                let code = index
                    .and_then(|i| row.get(i))
                    .map(|v| soundex(&v.as_text()))
                    .unwrap_or_default();
                html.push_str(&format!("      <td class='{}'>{}</td>\n", class, code));
            }
            html.push_str("    </tr>\n");
        }

        html.push_str("  </tbody>\n</table>\n");
        html
    }

    /// Lower-cased column name; on citations `idime` takes the key named by the row's type
    fn field_name(&self, column: &str, row_type: Option<&str>) -> String {
        let field = column.to_lowercase();
        if field == "idime" && self.table == CITATION_TABLE {
            if let Some((_, key)) = row_type.and_then(citation_type) {
                return key.to_string();
            }
        }
        field
    }

    pub fn render_cell(&self, field: &str, value: &Value, class: &str) -> String {
        if !value.is_digits() {
            return if field == "create table" {
                format!("      <td class='{}'>{}</td>\n", class, format_create_table(&value.as_text()))
            } else {
                format!("      <td class='{}'>{}</td>\n", class, escape_html(&value.as_text()))
            };
        }

        let text = value.as_text();
        let content = match RecordKind::for_field(field) {
            Some(kind) => self.render_link(kind, &text),
            None => self.render_numeric(field, &text),
        };
        format!("      <td class='{} right'>{}</td>\n", class, content)
    }

    fn render_link(&self, kind: RecordKind, id: &str) -> String {
        let anchor = format!(
            "<a href='{}{}' target='_blank'>{}</a>",
            self.link_base,
            kind.endpoint(id),
            id
        );
        if kind == RecordKind::Citation {
            return anchor;
        }

        let name = id.parse::<i64>().ok().and_then(|id| self.lookup.name(kind, id));
        match (kind, name) {
            (_, Some(name)) => format!("{}={}", anchor, escape_html(&name)),
            (RecordKind::Child, None) => format!("Invalid IDCR={}", id),
            (_, None) => format!("{}=?", anchor),
        }
    }

    fn render_numeric(&self, field: &str, text: &str) -> String {
        match field {
            f if DATE_FIELDS.contains(&f) => escape_html(&self.dates.format(text)),
            "type" if self.table == CITATION_TABLE => match citation_type(text) {
                Some((name, _)) => format!("{}={}", text, name),
                None => text.to_string(),
            },
            "idet" => {
                let title = text.parse::<u32>().ok().and_then(|code| self.event_titles.get(&code));
                match title {
                    Some(title) => format!("{}={}", text, escape_html(title)),
                    None => text.to_string(),
                }
            }
            "gender" => {
                let gender = match text {
                    "0" => "male",
                    "1" => "female",
                    _ => "unknown",
                };
                format!("{}=<span class=\"{}\">{}</span>", text, gender, gender)
            }
            _ => escape_html(text),
        }
    }
}
