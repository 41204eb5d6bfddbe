// src/domain/model/mod.rs
// Core domain models

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::repository::Record;
use crate::domain::service::{OperationFlags, Searchable};

/// Directional bias of a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "Contra Tendencia")]
    ContraTrend,
    #[serde(rename = "Tendencia")]
    WithTrend,
    #[serde(rename = "Neutro")]
    Neutral,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::ContraTrend, Direction::WithTrend, Direction::Neutral];

    /// Display label, also the text searched by the filter view
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ContraTrend => "Contra Tendencia",
            Direction::WithTrend => "Tendencia",
            Direction::Neutral => "Neutro",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().to_lowercase() == wanted || format!("{:?}", d).to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown direction: {}", s))
    }
}

/// Asset class of a trading operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    #[serde(rename = "AÇÕES")]
    Stocks,
    #[serde(rename = "OPÇÕES")]
    Options,
    #[serde(rename = "FUTUROS")]
    Futures,
}

impl Asset {
    pub const ALL: [Asset; 3] = [Asset::Stocks, Asset::Options, Asset::Futures];

    pub fn as_str(&self) -> &'static str {
        match self {
            Asset::Stocks => "AÇÕES",
            Asset::Options => "OPÇÕES",
            Asset::Futures => "FUTUROS",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Asset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Asset::ALL
            .into_iter()
            .find(|a| a.as_str().to_lowercase() == wanted || format!("{:?}", a).to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown asset: {}", s))
    }
}

/// A named trading approach used to tag operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub name: String,
    pub direction: Direction,
    pub description: String,
}

impl Record for Strategy {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for Strategy {
    type Flags = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.direction.as_str(), self.description.as_str()]
    }
}

/// A single recorded trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingOperation {
    pub id: String,
    pub asset: Asset,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    /// Name of the strategy, not checked against the strategy list
    pub strategy: String,
    pub entry_time: NaiveTime,
    pub exit_time: NaiveTime,
    pub quantity: Decimal,
    pub result: Decimal,
    pub men: i64,
    pub mep: i64,
    #[serde(default)]
    pub is_pending: bool,
}

impl Record for TradingOperation {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for TradingOperation {
    type Flags = OperationFlags;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.asset.as_str(), self.strategy.as_str()]
    }

    fn passes_flags(&self, flags: &OperationFlags) -> bool {
        !flags.show_pending_only || self.is_pending
    }
}

// Operations serialize their date the way it is displayed
mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::application::dto::parser::{format_date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_labels_round_trip_through_from_str() {
        for direction in Direction::ALL {
            assert_eq!(direction.as_str().parse::<Direction>().unwrap(), direction);
        }
        assert_eq!("withtrend".parse::<Direction>().unwrap(), Direction::WithTrend);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_asset_parses_accented_labels_case_insensitively() {
        assert_eq!("ações".parse::<Asset>().unwrap(), Asset::Stocks);
        assert_eq!("futures".parse::<Asset>().unwrap(), Asset::Futures);
        assert!("crypto".parse::<Asset>().is_err());
    }

    #[test]
    fn test_strategy_search_fields_use_direction_label() {
        let strategy = Strategy {
            id: "1".to_string(),
            name: "Rompimento".to_string(),
            direction: Direction::ContraTrend,
            description: "x".to_string(),
        };
        assert_eq!(strategy.search_fields(), vec!["Rompimento", "Contra Tendencia", "x"]);
    }
}
