// src/legislation/mod.rs
pub mod client;
pub mod models;
