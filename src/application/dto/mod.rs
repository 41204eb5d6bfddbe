// src/application/dto/mod.rs
// Form drafts: the not-yet-committed field values of a record

pub mod parser;

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::model::{Asset, Direction, Strategy, TradingOperation};
use crate::domain::repository::Record;

use parser::{format_date, format_time, parse_integer, parse_locale_decimal, parse_quantity, parse_time};

/// Draft of a record under construction or edit
pub trait Draft: Default + Clone + fmt::Debug {
    type Record: Record;

    /// A single field assignment
    type Field;

    /// Copy every non-id field of `record` into a new draft
    fn from_record(record: &Self::Record) -> Self;

    /// Assign one field without validating it
    fn set_field(&mut self, field: Self::Field);

    /// Validate and build a record with an empty id
    fn commit(&self) -> ValidationResult<Self::Record>;
}

/// Strategy form values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyDraft {
    pub name: String,
    pub direction: Option<Direction>,
    pub description: String,
}

impl Default for StrategyDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            direction: Some(Direction::Neutral),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyField {
    Name(String),
    Direction(Option<Direction>),
    Description(String),
}

impl Draft for StrategyDraft {
    type Record = Strategy;
    type Field = StrategyField;

    fn from_record(record: &Strategy) -> Self {
        Self {
            name: record.name.clone(),
            direction: Some(record.direction),
            description: record.description.clone(),
        }
    }

    fn set_field(&mut self, field: StrategyField) {
        match field {
            StrategyField::Name(name) => self.name = name,
            StrategyField::Direction(direction) => self.direction = direction,
            StrategyField::Description(description) => self.description = description,
        }
    }

    fn commit(&self) -> ValidationResult<Strategy> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.direction.is_none() {
            missing.push("direction");
        }

        match self.direction {
            Some(direction) if missing.is_empty() => Ok(Strategy {
                id: String::new(),
                name: self.name.clone(),
                direction,
                description: self.description.clone(),
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

/// Trading operation form values; numbers and times stay as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDraft {
    pub asset: Option<Asset>,
    pub date: Option<NaiveDate>,
    pub strategy: String,
    pub entry_time: String,
    pub exit_time: String,
    pub quantity: String,
    pub result: String,
    pub men: String,
    pub mep: String,
    pub is_pending: bool,
}

impl Default for OperationDraft {
    fn default() -> Self {
        Self {
            asset: None,
            date: None,
            strategy: String::new(),
            entry_time: "14:02:30".to_string(),
            exit_time: "14:02:30".to_string(),
            quantity: "2.000".to_string(),
            result: "25,00".to_string(),
            men: "7".to_string(),
            mep: "3".to_string(),
            is_pending: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationField {
    Asset(Option<Asset>),
    Date(Option<NaiveDate>),
    Strategy(String),
    EntryTime(String),
    ExitTime(String),
    Quantity(String),
    Result(String),
    Men(String),
    Mep(String),
    IsPending(bool),
}

/// Render a decimal the way the form expects it back
fn locale_decimal(value: Decimal) -> String {
    value.normalize().to_string().replace('.', ",")
}

impl Draft for OperationDraft {
    type Record = TradingOperation;
    type Field = OperationField;

    fn from_record(record: &TradingOperation) -> Self {
        Self {
            asset: Some(record.asset),
            date: Some(record.date),
            strategy: record.strategy.clone(),
            entry_time: format_time(&record.entry_time),
            exit_time: format_time(&record.exit_time),
            quantity: locale_decimal(record.quantity),
            result: locale_decimal(record.result),
            men: record.men.to_string(),
            mep: record.mep.to_string(),
            is_pending: record.is_pending,
        }
    }

    fn set_field(&mut self, field: OperationField) {
        match field {
            OperationField::Asset(asset) => self.asset = asset,
            OperationField::Date(date) => self.date = date,
            OperationField::Strategy(strategy) => self.strategy = strategy,
            OperationField::EntryTime(time) => self.entry_time = time,
            OperationField::ExitTime(time) => self.exit_time = time,
            OperationField::Quantity(quantity) => self.quantity = quantity,
            OperationField::Result(result) => self.result = result,
            OperationField::Men(men) => self.men = men,
            OperationField::Mep(mep) => self.mep = mep,
            OperationField::IsPending(pending) => self.is_pending = pending,
        }
    }

    fn commit(&self) -> ValidationResult<TradingOperation> {
        let mut missing = Vec::new();
        if self.asset.is_none() {
            missing.push("asset");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.strategy.is_empty() {
            missing.push("strategy");
        }

        let (asset, date) = match (self.asset, self.date) {
            (Some(asset), Some(date)) if missing.is_empty() => (asset, date),
            _ => return Err(ValidationError::MissingFields(missing)),
        };

        Ok(TradingOperation {
            id: String::new(),
            asset,
            date,
            strategy: self.strategy.clone(),
            entry_time: parse_time("entryTime", &self.entry_time)?,
            exit_time: parse_time("exitTime", &self.exit_time)?,
            quantity: parse_quantity(&self.quantity)?,
            result: parse_locale_decimal("result", &self.result)?,
            men: parse_integer("men", &self.men)?,
            mep: parse_integer("mep", &self.mep)?,
            is_pending: self.is_pending,
        })
    }
}

impl OperationDraft {
    /// Date as shown in the form, `dd/mm/yyyy`
    pub fn date_label(&self) -> Option<String> {
        self.date.as_ref().map(format_date)
    }
}
