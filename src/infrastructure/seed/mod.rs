// src/infrastructure/seed/mod.rs
// Sample records loaded on startup

use chrono::{NaiveDate, NaiveTime};
use rust_decimal_macros::dec;

use crate::domain::model::{Asset, Direction, Strategy, TradingOperation};

pub fn sample_strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            id: "1".to_string(),
            name: "Estratégia de Reversão à Média".to_string(),
            direction: Direction::ContraTrend,
            description: "Opera buscando o retorno do preço à sua média histórica.".to_string(),
        },
        Strategy {
            id: "2".to_string(),
            name: "Seguidor de Tendência".to_string(),
            direction: Direction::WithTrend,
            description: "Opera a favor da tendência principal do mercado.".to_string(),
        },
        Strategy {
            id: "3".to_string(),
            name: "Operação Neutra".to_string(),
            direction: Direction::Neutral,
            description: "Não depende da direção do mercado.".to_string(),
        },
    ]
}

pub fn sample_operations() -> Vec<TradingOperation> {
    let date = NaiveDate::from_ymd_opt(2023, 4, 2).unwrap_or_default();
    let entry_time = NaiveTime::from_hms_opt(14, 2, 30).unwrap_or_default();
    let exit_time = NaiveTime::from_hms_opt(14, 3, 40).unwrap_or_default();

    vec![
        TradingOperation {
            id: "1".to_string(),
            asset: Asset::Stocks,
            date,
            strategy: "Inversão de Fluxo".to_string(),
            entry_time,
            exit_time,
            quantity: dec!(2),
            result: dec!(30.00),
            men: 1,
            mep: 4,
            is_pending: false,
        },
        TradingOperation {
            id: "2".to_string(),
            asset: Asset::Stocks,
            date,
            strategy: "Inversão de Fluxo".to_string(),
            entry_time,
            exit_time,
            quantity: dec!(1),
            result: dec!(-50.00),
            men: 3,
            mep: 1,
            is_pending: true,
        },
    ]
}
