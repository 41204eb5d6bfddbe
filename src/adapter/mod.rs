// src/adapter/mod.rs
pub mod console;
