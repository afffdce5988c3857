// src/api/handlers/mod.rs
pub mod analyzer;
pub mod generator;
pub mod system;
