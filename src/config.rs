use std::io;
use std::path::Path;

use linked_hash_map::LinkedHashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::types::DbResult;

/// Runtime settings, read from a JSON file next to the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logical table name -> physical table name
    pub table_aliases: LinkedHashMap<String, String>,
    /// Event type code -> title, used for `idet` cells
    pub event_titles: LinkedHashMap<u32, String>,
    /// Record kind (`Person`, `Location`, ...) -> query returning the display name for `?1`
    pub record_lookups: LinkedHashMap<String, String>,
    /// Prefix prepended to every record link
    pub link_base_url: String,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut table_aliases = LinkedHashMap::new();
        for (logical, physical) in [
            ("Persons", "tblIR"),
            ("Person", "tblIR"),
            ("Families", "tblMR"),
            ("Family", "tblMR"),
            ("Children", "tblCR"),
            ("Child", "tblCR"),
            ("Events", "tblER"),
            ("Event", "tblER"),
            ("Names", "tblNX"),
            ("Citations", "tblSX"),
            ("Sources", "tblSR"),
            ("Temples", "tblTR"),
            ("ToDo", "tblTD"),
            ("Addresses", "tblAR"),
            ("Locations", "tblLR"),
            ("Surnames", "tblNR"),
        ] {
            table_aliases.insert(logical.to_string(), physical.to_string());
        }

        let mut record_lookups = LinkedHashMap::new();
        for (kind, sql) in [
            ("Person", "SELECT GivenName || ' ' || Surname FROM tblIR WHERE IDIR = ?1"),
            ("Location", "SELECT Location FROM tblLR WHERE IDLR = ?1"),
            ("Temple", "SELECT Temple FROM tblTR WHERE IDTR = ?1"),
            ("Family", "SELECT HusbSurname || ' and ' || WifeSurname FROM tblMR WHERE IDMR = ?1"),
            ("Event", "SELECT Description FROM tblER WHERE IDER = ?1"),
            ("Child", "SELECT IDIR FROM tblCR WHERE IDCR = ?1"),
            ("Surname", "SELECT Surname FROM tblNR WHERE IDNR = ?1"),
            ("Name", "SELECT GivenName || ' ' || Surname FROM tblNX WHERE IDNX = ?1"),
            ("Source", "SELECT SrcName FROM tblSR WHERE IDSR = ?1"),
            ("Address", "SELECT AddrName FROM tblAR WHERE IDAR = ?1"),
        ] {
            record_lookups.insert(kind.to_string(), sql.to_string());
        }

        Self {
            table_aliases,
            event_titles: LinkedHashMap::new(),
            record_lookups,
            link_base_url: String::new(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Read the configuration, falling back to defaults when the file is missing
    pub fn load(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!("loading configuration from {}", path.display());
                Self::from_json(&text)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("{} not found, using default configuration", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_json(text: &str) -> DbResult<Self> {
        Ok(serde_json::from_str::<AppConfig>(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"debug": true, "event_titles": {"2": "Birth"}}"#).unwrap();
        assert!(config.debug);
        assert_eq!(config.event_titles.get(&2).map(String::as_str), Some("Birth"));
        assert_eq!(config.table_aliases.get("Persons").map(String::as_str), Some("tblIR"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load("/nonexistent/census-sqlcmd/config.json").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
