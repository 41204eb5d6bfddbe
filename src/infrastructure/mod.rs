// src/infrastructure/mod.rs
pub mod seed;
pub mod store;
