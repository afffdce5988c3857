// src/lib.rs
pub mod analyzer;
pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod logging;

pub use analyzer::{analyze, PasswordAnalysis, Requirements, Strength};
