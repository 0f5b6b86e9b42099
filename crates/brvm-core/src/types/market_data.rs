//! Market-data records: status, indices, equities, bonds, and news.
//!
//! Quantities are [`Cell`]s so that a value which was not numeric in the
//! source survives as text instead of being dropped. Names, symbols and
//! dates are plain strings; dates are never validated, only parsed on
//! request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, lenient_text};
use super::enums::MarketState;

// ---------------------------------------------------------------------------
// Market status
// ---------------------------------------------------------------------------

/// Open/closed flag plus the exchange's own "last update" display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    #[serde(rename = "market_status")]
    pub status: MarketState,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_update: String,
}

// ---------------------------------------------------------------------------
// Indices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default)]
    pub value: Cell,
    /// Signed, in percentage points.
    #[serde(default)]
    pub change_percent: Cell,
}

impl IndexQuote {
    pub fn new(name: &str, value: f64, change_percent: f64) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            change_percent: change_percent.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Equities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StockRow")]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub last_price: Cell,
    #[serde(rename = "change")]
    pub change_percent: Cell,
    pub high: Cell,
    pub low: Cell,
    pub volume: Cell,
}

/// Incoming equity row. Feeds publish the daily move as `change` or
/// `change_percent`; when both columns are present `change` wins.
#[derive(Deserialize)]
struct StockRow {
    #[serde(default, deserialize_with = "lenient_text")]
    symbol: String,
    #[serde(default, deserialize_with = "lenient_text")]
    name: String,
    #[serde(default)]
    last_price: Cell,
    #[serde(default)]
    change: Option<Cell>,
    #[serde(default)]
    change_percent: Option<Cell>,
    #[serde(default)]
    high: Cell,
    #[serde(default)]
    low: Cell,
    #[serde(default)]
    volume: Cell,
}

impl From<StockRow> for StockQuote {
    fn from(row: StockRow) -> Self {
        Self {
            symbol: row.symbol,
            name: row.name,
            last_price: row.last_price,
            change_percent: pick_change(row.change, row.change_percent),
            high: row.high,
            low: row.low,
            volume: row.volume,
        }
    }
}

fn pick_change(change: Option<Cell>, change_percent: Option<Cell>) -> Cell {
    change.or(change_percent).unwrap_or_default()
}

impl StockQuote {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: &str,
        name: &str,
        last_price: f64,
        change_percent: f64,
        high: f64,
        low: f64,
        volume: i64,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            last_price: last_price.into(),
            change_percent: change_percent.into(),
            high: high.into(),
            low: low.into(),
            volume: Cell::Number(volume as f64),
        }
    }
}

// ---------------------------------------------------------------------------
// Bonds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BondRow")]
pub struct BondQuote {
    pub symbol: String,
    pub name: String,
    pub last_price: Cell,
    #[serde(rename = "change")]
    pub change_percent: Cell,
    #[serde(rename = "yield")]
    pub yield_percent: Cell,
    /// `YYYY-MM-DD` as published; see [`BondQuote::maturity`].
    pub maturity_date: String,
}

#[derive(Deserialize)]
struct BondRow {
    #[serde(default, deserialize_with = "lenient_text")]
    symbol: String,
    #[serde(default, deserialize_with = "lenient_text")]
    name: String,
    #[serde(default)]
    last_price: Cell,
    #[serde(default)]
    change: Option<Cell>,
    #[serde(default)]
    change_percent: Option<Cell>,
    #[serde(default, rename = "yield")]
    yield_percent: Cell,
    #[serde(default, deserialize_with = "lenient_text")]
    maturity_date: String,
}

impl From<BondRow> for BondQuote {
    fn from(row: BondRow) -> Self {
        Self {
            symbol: row.symbol,
            name: row.name,
            last_price: row.last_price,
            change_percent: pick_change(row.change, row.change_percent),
            yield_percent: row.yield_percent,
            maturity_date: row.maturity_date,
        }
    }
}

impl BondQuote {
    pub fn new(
        symbol: &str,
        name: &str,
        last_price: f64,
        change_percent: f64,
        yield_percent: f64,
        maturity_date: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            last_price: last_price.into(),
            change_percent: change_percent.into(),
            yield_percent: yield_percent.into(),
            maturity_date: maturity_date.to_string(),
        }
    }

    /// Maturity as a calendar date, if the text is an ISO date.
    pub fn maturity(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.maturity_date)
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub source: String,
}

impl NewsItem {
    pub fn new(title: &str, date: &str, content: &str, source: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            content: content.to_string(),
            source: source.to_string(),
        }
    }

    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }
}

fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_keys() {
        let json = r#"{"market_status": "open", "last_update": "21/03/2025 15:30:00"}"#;
        let status: MarketStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, MarketState::Open);
        assert_eq!(status.last_update, "21/03/2025 15:30:00");

        assert!(serde_json::from_str::<MarketStatus>(r#"{"market_status": "halted"}"#).is_err());
    }

    #[test]
    fn stock_accepts_change_or_change_percent() {
        let a: StockQuote =
            serde_json::from_str(r#"{"symbol": "SNTS", "name": "Sonatel", "change": 0.63}"#).unwrap();
        let b: StockQuote =
            serde_json::from_str(r#"{"symbol": "SNTS", "name": "Sonatel", "change_percent": 0.63}"#)
                .unwrap();
        assert_eq!(a.change_percent, Cell::Number(0.63));
        assert_eq!(a, b);
        assert!(a.volume.is_missing());
    }

    #[test]
    fn stock_with_both_change_keys_prefers_change() {
        let json = r#"{"symbol": "BOAB", "change": 1.2, "change_percent": 9.9}"#;
        let quote: StockQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.change_percent, Cell::Number(1.2));

        let json = r#"{"symbol": "BOAB", "change_percent": 9.9, "change": null}"#;
        let quote: StockQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.change_percent, Cell::Number(9.9));
    }

    #[test]
    fn bond_with_both_change_keys_prefers_change() {
        let json = r#"{"symbol": "TPCI.O1", "change_percent": 0.4, "change": -0.1}"#;
        let bond: BondQuote = serde_json::from_str(json).unwrap();
        assert_eq!(bond.change_percent, Cell::Number(-0.1));
    }

    #[test]
    fn stock_serializes_payload_keys() {
        let quote = StockQuote::new("BICC", "BICI Côte d'Ivoire", 6300.0, 1.61, 6400.0, 6200.0, 1250);
        let v = serde_json::to_value(&quote).unwrap();
        assert_eq!(v["last_price"], 6300.0);
        assert_eq!(v["change"], 1.61);
        assert_eq!(v["volume"], 1250.0);
    }

    #[test]
    fn bond_yield_key_and_maturity() {
        let json = r#"{"symbol": "TPCI.O1", "name": "TPCI", "yield": 6.75, "maturity_date": "2028-06-15"}"#;
        let bond: BondQuote = serde_json::from_str(json).unwrap();
        assert_eq!(bond.yield_percent, Cell::Number(6.75));
        assert_eq!(bond.maturity(), NaiveDate::from_ymd_opt(2028, 6, 15));

        let odd = BondQuote { maturity_date: "perpetual".into(), ..bond };
        assert_eq!(odd.maturity(), None);
    }

    #[test]
    fn numeric_names_keep_their_text() {
        let index: IndexQuote = serde_json::from_str(r#"{"name": 10, "value": 164.29}"#).unwrap();
        assert_eq!(index.name, "10");
        assert!(index.change_percent.is_missing());
    }
}
