//! Delimited-text normalization for the CSV snapshot files.
//!
//! The layout is deliberately simple (no quoting, no escaping):
//!
//! ```text
//! name,value,change_percent
//! BRVM Composite,218.45,0.72
//! BRVM 10,164.29,0.94
//! ```
//!
//! - the first line is the header row;
//! - every later line that is not blank after trimming is one record;
//! - lines split on `,` and every field is trimmed;
//! - fields map to headers by position and are coerced with [`Cell::coerce`];
//! - a short row maps its trailing headers to [`Cell::Missing`], surplus
//!   fields beyond the header count are dropped.
//!
//! Records keep the header order. [`decode_rows`] turns them into typed
//! quotes through serde, the same path remote JSON takes.

use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::Cell;

/// One data line: header → coerced value, in header order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Cell)>,
}

impl Record {
    /// Insert or overwrite. A repeated header keeps its first position and
    /// takes the later value.
    pub fn insert(&mut self, header: &str, value: Cell) {
        match self.fields.iter_mut().find(|(h, _)| h == header) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((header.to_string(), value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.fields.iter().find(|(h, _)| h == header).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(h, _)| h.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.fields.iter().map(|(h, v)| (h.as_str(), v))
    }

    /// JSON object view of the record.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .fields
            .iter()
            .map(|(h, v)| {
                let value = match v {
                    Cell::Number(n) => serde_json::json!(n),
                    Cell::Text(s) => serde_json::Value::String(s.clone()),
                    Cell::Missing => serde_json::Value::Null,
                };
                (h.clone(), value)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (h, v) in &self.fields {
            map.serialize_entry(h, v)?;
        }
        map.end()
    }
}

/// Parse delimited text into records, one per non-blank data line.
pub fn parse_csv(text: &str) -> Vec<Record> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n');
    let headers: Vec<&str> = match lines.next() {
        Some(first) => first.split(',').map(str::trim).collect(),
        None => return Vec::new(),
    };

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            let mut record = Record::default();
            for (idx, header) in headers.iter().enumerate() {
                let cell = values.get(idx).map_or(Cell::Missing, |v| Cell::coerce(v));
                record.insert(header, cell);
            }
            record
        })
        .collect()
}

/// Convert parsed records into typed rows (e.g. `StockQuote`).
pub fn decode_rows<T: DeserializeOwned>(records: &[Record]) -> Result<Vec<T>, serde_json::Error> {
    records.iter().map(|r| serde_json::from_value(r.to_json())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BondQuote, IndexQuote, StockQuote};

    #[test]
    fn single_index_line() {
        let records = parse_csv("name,value\nBRVM Composite,218.45\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("name"), Some(&Cell::Text("BRVM Composite".into())));
        assert_eq!(records[0].get("value"), Some(&Cell::Number(218.45)));
        assert_eq!(records[0].headers().collect::<Vec<_>>(), ["name", "value"]);
    }

    #[test]
    fn record_count_ignores_blank_lines() {
        let text = "a,b,c\n1,2,3\n\n   \n4,5,6\n7,8,9\n\n";
        let records = parse_csv(text);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn header_only_and_empty_input() {
        assert!(parse_csv("name,value\n").is_empty());
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn fields_are_trimmed_and_crlf_tolerated() {
        let records = parse_csv("symbol , last_price\r\n  BICC ,  6300 \r\n");
        assert_eq!(records[0].get("symbol"), Some(&Cell::Text("BICC".into())));
        assert_eq!(records[0].get("last_price"), Some(&Cell::Number(6300.0)));
    }

    #[test]
    fn short_rows_yield_missing_cells() {
        let records = parse_csv("symbol,name,volume\nBOAM,Bank of Africa Mali\nSNTS\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("volume"), Some(&Cell::Missing));
        assert_eq!(records[1].get("name"), Some(&Cell::Missing));
        assert_eq!(records[1].len(), 3);
    }

    #[test]
    fn empty_field_stays_empty_text() {
        let records = parse_csv("symbol,volume\nETIT,\n");
        assert_eq!(records[0].get("volume"), Some(&Cell::Text(String::new())));
    }

    #[test]
    fn surplus_fields_are_dropped() {
        let records = parse_csv("name,value\nBRVM 10,164.29,extra\n");
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn duplicates_pass_through_in_order() {
        let records = parse_csv("symbol,last_price\nBICC,6300\nBICC,6300\nBOAB,3950\n");
        let symbols: Vec<_> = records.iter().map(|r| r.get("symbol").cloned()).collect();
        assert_eq!(
            symbols,
            vec![
                Some(Cell::Text("BICC".into())),
                Some(Cell::Text("BICC".into())),
                Some(Cell::Text("BOAB".into())),
            ]
        );
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let records = parse_csv("\u{feff}name,value,change_percent\nBRVM Composite,218.45,0.72\n");
        assert_eq!(records[0].headers().collect::<Vec<_>>(), ["name", "value", "change_percent"]);
        let rows: Vec<IndexQuote> = decode_rows(&records).unwrap();
        assert_eq!(rows[0], IndexQuote::new("BRVM Composite", 218.45, 0.72));
    }

    #[test]
    fn change_and_change_percent_columns_decode() {
        let text = "symbol,name,last_price,change,change_percent\nBOAB,Bank of Africa Sénégal,3950,1.2,9.9\n";
        let rows: Vec<StockQuote> = decode_rows(&parse_csv(text)).unwrap();
        assert_eq!(rows[0].change_percent, Cell::Number(1.2));
        assert_eq!(rows[0].last_price, Cell::Number(3950.0));
    }

    #[test]
    fn decode_indices() {
        let text = "name,value,change_percent\nBRVM Composite,218.45,0.72\nBRVM Agriculture,132.56,-0.32\n";
        let rows: Vec<IndexQuote> = decode_rows(&parse_csv(text)).unwrap();
        assert_eq!(rows[0], IndexQuote::new("BRVM Composite", 218.45, 0.72));
        assert_eq!(rows[1].change_percent, Cell::Number(-0.32));
    }

    #[test]
    fn decode_stocks_keeps_non_numeric_text() {
        let text = "symbol,name,isin,last_price,change,high,low,volume,date\n\
                    SNTS,Sonatel Sénégal,SN0000000019,16100,0.63,16250,16050,n/a,2025-03-21\n";
        let rows: Vec<StockQuote> = decode_rows(&parse_csv(text)).unwrap();
        assert_eq!(rows[0].symbol, "SNTS");
        assert_eq!(rows[0].last_price, Cell::Number(16100.0));
        assert_eq!(rows[0].volume, Cell::Text("n/a".into()));
    }

    #[test]
    fn decode_bonds() {
        let text = "symbol,name,last_price,change,yield,maturity_date\n\
                    TPCI.O1,Trésor Public Côte d'Ivoire 6.5% 2021-2028,9850,0.10,6.75,2028-06-15\n";
        let rows: Vec<BondQuote> = decode_rows(&parse_csv(text)).unwrap();
        assert_eq!(rows[0].yield_percent, Cell::Number(6.75));
        assert_eq!(rows[0].maturity_date, "2028-06-15");
    }

    #[test]
    fn record_serializes_in_header_order() {
        let records = parse_csv("value,name,extra\n218.45,BRVM Composite\n");
        let json = serde_json::to_string(&records[0]).unwrap();
        assert_eq!(json, r#"{"value":218.45,"name":"BRVM Composite","extra":null}"#);
    }
}
