// src/engine/mod.rs
pub mod config;
pub mod day;
pub mod filter;
pub mod model;
pub mod scaffold;
