//! Header section
//!
//! Each structured header line is kept as an insertion-ordered map from
//! two-character tag to value, so formatting a parsed header reproduces the
//! field order of the input.

use indexmap::IndexMap;
use serde::Serialize;

/// Fields of one `@HD`/`@SQ`/`@RG`/`@PG`/user line, in file order
pub type HeaderRecord = IndexMap<String, String>;

/// The `SO` value of the `@HD` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortingOrder {
    Unknown,
    Unsorted,
    QueryName,
    Coordinate,
}

impl SortingOrder {
    /// Decode an `SO` value; unrecognised values map to `Unknown`
    pub fn from_value(value: &str) -> Self {
        match value {
            "unsorted" => SortingOrder::Unsorted,
            "queryname" => SortingOrder::QueryName,
            "coordinate" => SortingOrder::Coordinate,
            _ => SortingOrder::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortingOrder::Unknown => "unknown",
            SortingOrder::Unsorted => "unsorted",
            SortingOrder::QueryName => "queryname",
            SortingOrder::Coordinate => "coordinate",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub hd: Option<HeaderRecord>,
    pub sq: Vec<HeaderRecord>,
    pub rg: Vec<HeaderRecord>,
    pub pg: Vec<HeaderRecord>,
    pub co: Vec<String>,
    /// Lines with a lowercase two-letter tag, grouped by tag in first-seen order
    pub user_records: IndexMap<String, Vec<HeaderRecord>>,
}

impl Header {
    pub fn is_empty(&self) -> bool {
        self.hd.is_none()
            && self.sq.is_empty()
            && self.rg.is_empty()
            && self.pg.is_empty()
            && self.co.is_empty()
            && self.user_records.values().all(Vec::is_empty)
    }

    pub fn sorting_order(&self) -> SortingOrder {
        self.hd
            .as_ref()
            .and_then(|hd| hd.get("SO"))
            .map(|so| SortingOrder::from_value(so))
            .unwrap_or(SortingOrder::Unknown)
    }

    /// `VN` of the `@HD` line
    pub fn version(&self) -> Option<&str> {
        self.hd.as_ref()?.get("VN").map(String::as_str)
    }

    /// `SN` of every `@SQ` line that has one, in file order
    pub fn reference_names(&self) -> Vec<&str> {
        self.sq
            .iter()
            .filter_map(|sq| sq.get("SN").map(String::as_str))
            .collect()
    }

    /// `LN` of the `@SQ` line named `name`
    pub fn reference_length(&self, name: &str) -> Option<u64> {
        self.sq
            .iter()
            .find(|sq| sq.get("SN").map(String::as_str) == Some(name))
            .and_then(|sq| sq.get("LN"))
            .and_then(|ln| ln.parse().ok())
    }

    /// Copy without empty user-record groups.
    ///
    /// An empty group formats to no lines at all, so it can't survive a
    /// format/parse round trip.
    pub fn normalized(&self) -> Header {
        let mut header = self.clone();
        header.user_records.retain(|_, records| !records.is_empty());
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> HeaderRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_sorting_order() {
        let mut header = Header::default();
        assert_eq!(header.sorting_order(), SortingOrder::Unknown);

        header.hd = Some(record(&[("VN", "1.6"), ("SO", "coordinate")]));
        assert_eq!(header.sorting_order(), SortingOrder::Coordinate);
        assert_eq!(header.version(), Some("1.6"));

        header.hd = Some(record(&[("VN", "1.6"), ("SO", "sideways")]));
        assert_eq!(header.sorting_order(), SortingOrder::Unknown);
    }

    #[test]
    fn test_reference_queries() {
        let header = Header {
            sq: vec![
                record(&[("SN", "chr1"), ("LN", "248956422")]),
                record(&[("SN", "chrM"), ("LN", "16569")]),
            ],
            ..Header::default()
        };
        assert_eq!(header.reference_names(), vec!["chr1", "chrM"]);
        assert_eq!(header.reference_length("chrM"), Some(16569));
        assert_eq!(header.reference_length("chr2"), None);
    }

    #[test]
    fn test_normalized_drops_empty_groups() {
        let mut header = Header::default();
        header.user_records.insert("xx".to_string(), Vec::new());
        header
            .user_records
            .insert("yy".to_string(), vec![record(&[("ID", "1")])]);
        assert!(!header.is_empty());

        let normalized = header.normalized();
        assert_eq!(normalized.user_records.len(), 1);
        assert!(normalized.user_records.contains_key("yy"));
    }
}
